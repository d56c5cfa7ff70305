//! Wrapper type for an email address that has been validated.

use derive_more::derive::Display;
use serde::{Deserialize, Serialize};

use crate::errors::InvalidInput;
use crate::validators::is_email;

/// An email address that passed [`is_email`].
///
/// The text is stored verbatim; the validators perform no trimming or
/// case folding, so neither does this type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub struct Email(String);

impl Email {
    /// Returns the validated address as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Email {
    type Error = InvalidInput;

    fn try_from(email: String) -> Result<Self, Self::Error> {
        match is_email(Some(&email)) {
            Ok(true) => Ok(Self(email)),
            _ => Err(InvalidInput),
        }
    }
}

impl TryFrom<&str> for Email {
    type Error = InvalidInput;

    fn try_from(email: &str) -> Result<Self, Self::Error> {
        Self::try_from(email.to_owned())
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
