//! Postal code validators: Brazilian CEP and a multi-region check.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::ValidatorError;

static POSTAL_CODE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"^[0-9]{5}(-[0-9]{4})?$",                     // US ZIP code
        r"^[A-Za-z][0-9][A-Za-z] [0-9][A-Za-z][0-9]$", // Canada postal code
        r"^[A-Za-z]{1,2}[0-9][A-Za-z0-9]? [0-9][A-Za-z]{2}$", // UK postal code
        r"^[0-9]{5}$",                                 // France, Spain, Italy, Germany, US
        r"^[0-9]{4}$",                                 // Netherlands, South Africa, Switzerland
        r"^[0-9]{3}-[0-9]{4}$",                        // Japan postal code
        r"^[0-9]{5}-[0-9]{3}$",                        // Brazil postal code
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("Failed to compile postal code regex"))
    .collect()
});

/// Checks if the given string is a valid CEP (Brazilian postal code):
/// exactly 8 digits once the conventional separators are removed.
///
/// Unlike its siblings this validator has no empty guard; the empty
/// string falls through the length check and returns false.
pub fn is_cep(cep: &str) -> bool {
    let length = cep.chars().count();
    if !(8..=10).contains(&length) {
        return false;
    }

    let digits: String = cep.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() != 8 {
        return false;
    }

    digits.parse::<u32>().is_ok()
}

/// Checks if the given string is a valid postal code in any of seven
/// regional formats (US, Canada, UK, generic 5- and 4-digit, Japan,
/// Brazil). The result is the OR over all patterns.
/// Returns an error if the input is empty.
pub fn is_postal_code(postal_code: &str) -> Result<bool, ValidatorError> {
    if postal_code.is_empty() {
        return Err(ValidatorError::EmptyInput);
    }

    Ok(POSTAL_CODE_PATTERNS
        .iter()
        .any(|pattern| pattern.is_match(postal_code)))
}
