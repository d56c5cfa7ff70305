//! Wrapper type for a MAC address that has been validated.

use derive_more::derive::Display;
use serde::{Deserialize, Serialize};

use crate::errors::InvalidInput;
use crate::validators::is_mac_address;

/// A MAC address that passed [`is_mac_address`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub struct MacAddress(String);

impl MacAddress {
    /// Returns the validated address as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for MacAddress {
    type Error = InvalidInput;

    fn try_from(mac_address: String) -> Result<Self, Self::Error> {
        match is_mac_address(&mac_address) {
            Ok(true) => Ok(Self(mac_address)),
            _ => Err(InvalidInput),
        }
    }
}

impl TryFrom<&str> for MacAddress {
    type Error = InvalidInput;

    fn try_from(mac_address: &str) -> Result<Self, Self::Error> {
        Self::try_from(mac_address.to_owned())
    }
}

impl AsRef<str> for MacAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
