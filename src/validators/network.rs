//! MAC address and port validators.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::ValidatorError;

static MAC_ADDRESS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9A-Fa-f]{2}[:-]){5}([0-9A-Fa-f]{2})$")
        .expect("Failed to compile MAC address regex")
});

/// Checks if the given string is a valid MAC address: six groups of two
/// hex digits separated by `:` or `-`. The separator class is re-matched
/// per group, so a mix of `:` and `-` within one address is accepted.
/// Returns an error if the input is empty.
pub fn is_mac_address(mac_address: &str) -> Result<bool, ValidatorError> {
    if mac_address.is_empty() {
        return Err(ValidatorError::EmptyInput);
    }

    Ok(MAC_ADDRESS_REGEX.is_match(mac_address))
}

/// Checks if the given port number is within the valid range 0-65535.
pub fn is_port(port: i32) -> bool {
    (0..=65535).contains(&port)
}

/// Checks if the given string is a valid port number. Non-numeric or
/// out-of-range-of-i32 strings are not an error, just false.
/// Returns an error if the input is empty.
pub fn is_port_str(port: &str) -> Result<bool, ValidatorError> {
    if port.is_empty() {
        return Err(ValidatorError::EmptyInput);
    }

    match port.parse::<i32>() {
        Ok(port_number) => Ok(is_port(port_number)),
        Err(_) => Ok(false),
    }
}
