//! Root module for the validation library.
//! Exposes a set of independent string/format validators and the
//! validated wrapper types built on top of them.
//!
//! Every validator is a pure function: the same input always produces the
//! same result, nothing is mutated, and the only shared state is a set of
//! lazily compiled regexes and two static date-format tables.

pub mod errors;
pub mod types;
pub mod validators;

// Re-export commonly used types and functions
pub use errors::{InvalidInput, ValidatorError};
pub use types::{Cep, Email, MacAddress};
pub use validators::{
    is_ascii, is_base64, is_cep, is_date, is_decimal, is_email, is_mac_address, is_md5, is_number,
    is_port, is_port_str, is_postal_code, is_time,
};
