//! Email validation.
//!
//! This is deliberately stricter than the usual single-regex check: after
//! the overall shape is matched, a sequence of structural rules is applied
//! in a fixed order. Each rule alone is cheap; together they reject inputs
//! like digit-leading addresses or repeated domain labels that a plain
//! shape regex lets through.

use std::collections::HashSet;

use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::ValidatorError;

static STARTS_WITH_NON_LETTER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^a-zA-Z]").expect("Failed to compile email prefix regex"));

static EMAIL_SHAPE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("Failed to compile email shape regex")
});

/// Checks if the given string is a valid email address.
///
/// A missing value (`None`) is an error, distinct from the empty string:
/// the empty string simply fails the shape check and returns `Ok(false)`.
///
/// The rules, applied in order:
/// - the first character must be a letter
/// - the whole input must match `localpart@domain.tld`
/// - the character right after `@` must not be a digit
/// - the character right after the last `.` must not be a digit
/// - the localpart must not contain `..` or end with `.`
/// - splitting the whole input on `.`, the second-to-last segment must not
///   equal the third-to-last one
/// - at most one `@`
/// - the domain must not contain `..` and its labels must be pairwise
///   distinct
///
/// Note that the duplicate-segment rule runs on the whole input, not just
/// the domain, so the localpart takes part in that split: `a.b@x.b.com`
/// is accepted while `user@a.b.b.com` is not.
pub fn is_email(email: Option<&str>) -> Result<bool, ValidatorError> {
    let Some(email) = email else {
        return Err(ValidatorError::MissingInput);
    };

    // First check: must start with a letter (digits included in the reject)
    if STARTS_WITH_NON_LETTER_REGEX.is_match(email) {
        return Ok(false);
    }

    // Second check: overall localpart@domain.tld shape
    if !EMAIL_SHAPE_REGEX.is_match(email) {
        return Ok(false);
    }

    // The shape regex guarantees exactly the characters sliced below exist
    let Some(at) = email.find('@') else {
        return Ok(false);
    };
    let local_part = &email[..at];
    let domain = &email[at + 1..];

    // Third check: the character right after the @ must not be a digit
    if domain.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        return Ok(false);
    }

    // Fourth check: the character right after the last dot must not be a digit
    if let Some(last_dot) = email.rfind('.') {
        if email[last_dot + 1..]
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_digit())
        {
            return Ok(false);
        }
    }

    // Fifth and sixth checks: localpart must not contain ".." or end with "."
    if local_part.contains("..") || local_part.ends_with('.') {
        return Ok(false);
    }

    // Seventh check: duplicate trailing segments of the whole input.
    // Runs over the full address, localpart included.
    let parts: Vec<&str> = email.split('.').collect();
    if parts.len() > 2 && parts[parts.len() - 2] == parts[parts.len() - 3] {
        trace!("email rejected: duplicated trailing segments");
        return Ok(false);
    }

    // Eighth check: at most one @
    if email.matches('@').count() > 1 {
        return Ok(false);
    }

    // Ninth check: no empty label inside the domain
    if domain.contains("..") {
        return Ok(false);
    }

    // Tenth check: all domain labels pairwise distinct
    let labels: Vec<&str> = domain.split('.').collect();
    let unique_labels: HashSet<&str> = labels.iter().copied().collect();
    if labels.len() != unique_labels.len() {
        trace!("email rejected: repeated domain label");
        return Ok(false);
    }

    Ok(true)
}
