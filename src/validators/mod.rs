//! The validator functions.
//! Each submodule groups validators that share a concern; all of them are
//! re-exported here so callers never need to know the grouping.

mod datetime;
mod email;
mod network;
mod postal;
mod text;

pub use datetime::{is_date, is_time};
pub use email::is_email;
pub use network::{is_mac_address, is_port, is_port_str};
pub use postal::{is_cep, is_postal_code};
pub use text::{is_ascii, is_base64, is_decimal, is_md5, is_number};

#[cfg(test)]
mod tests {
    use super::*;

    // Validators hold no state, so calling one twice with the same input
    // must give the same answer.
    #[test]
    fn test_repeated_calls_agree() {
        for _ in 0..2 {
            assert_eq!(is_ascii("hello"), Ok(true));
            assert_eq!(is_email(Some("john.doe@example.com")), Ok(true));
            assert_eq!(is_date("2023-01-15"), Ok(true));
            assert_eq!(is_time("23:59:59"), Ok(true));
            assert!(is_cep("12345-678"));
            assert_eq!(is_postal_code("12345"), Ok(true));
            assert_eq!(is_mac_address("00:1A:2B:3C:4D:5E"), Ok(true));
            assert_eq!(is_md5("d41d8cd98f00b204e9800998ecf8427e"), Ok(true));
            assert_eq!(is_number("-42"), Ok(true));
            assert_eq!(is_decimal("10.5"), Ok(true));
            assert_eq!(is_base64("aGVsbG8="), Ok(true));
            assert!(is_port(8080));
            assert_eq!(is_port_str("8080"), Ok(true));
        }
    }
}
