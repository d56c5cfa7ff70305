//! Wrapper type for a CEP (Brazilian postal code) that has been validated.

use derive_more::derive::Display;
use serde::{Deserialize, Serialize};

use crate::errors::InvalidInput;
use crate::validators::is_cep;

/// A CEP that passed [`is_cep`]. The separators present in the input are
/// kept as written.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub struct Cep(String);

impl Cep {
    /// Returns the validated code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Cep {
    type Error = InvalidInput;

    fn try_from(cep: String) -> Result<Self, Self::Error> {
        if is_cep(&cep) {
            Ok(Self(cep))
        } else {
            Err(InvalidInput)
        }
    }
}

impl TryFrom<&str> for Cep {
    type Error = InvalidInput;

    fn try_from(cep: &str) -> Result<Self, Self::Error> {
        Self::try_from(cep.to_owned())
    }
}

impl AsRef<str> for Cep {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
