//! Character-set and numeric-shape validators.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::ValidatorError;

static BASE64_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[A-Za-z0-9+/]{4})*(?:[A-Za-z0-9+/]{2}==|[A-Za-z0-9+/]{3}=)?$")
        .expect("Failed to compile base64 regex")
});

static MD5_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-fA-F0-9]{32}$").expect("Failed to compile md5 regex"));

// [0-9] rather than \d: the regex crate's \d matches any Unicode digit
static NUMBER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?[0-9]+$").expect("Failed to compile number regex"));

/// Checks if the given string contains only ASCII characters.
/// Returns an error if the input is empty.
pub fn is_ascii(value: &str) -> Result<bool, ValidatorError> {
    if value.is_empty() {
        return Err(ValidatorError::EmptyInput);
    }

    Ok(value.is_ascii())
}

/// Checks if the given string is a valid Base64 encoded string:
/// groups of 4 characters from the standard alphabet, where the last
/// group may carry `=`/`==` padding.
/// Returns an error if the input is empty.
pub fn is_base64(value: &str) -> Result<bool, ValidatorError> {
    if value.is_empty() {
        return Err(ValidatorError::EmptyInput);
    }

    Ok(BASE64_REGEX.is_match(value))
}

/// Checks if the given string is a valid MD5 hash (exactly 32 hex characters).
/// Returns an error if the input is empty.
pub fn is_md5(value: &str) -> Result<bool, ValidatorError> {
    if value.is_empty() {
        return Err(ValidatorError::EmptyInput);
    }

    Ok(MD5_REGEX.is_match(value))
}

/// Checks if the given string is an integer: an optional leading `-`
/// followed by one or more digits. No decimals, no leading `+`,
/// no whitespace.
/// Returns an error if the input is empty.
pub fn is_number(value: &str) -> Result<bool, ValidatorError> {
    if value.is_empty() {
        return Err(ValidatorError::EmptyInput);
    }

    Ok(NUMBER_REGEX.is_match(value))
}

/// Checks if the given string is a decimal number, meaning a numeric
/// value with a non-zero fractional part. Integers and integer-valued
/// floats are not decimals; non-numeric text is not an error, just false.
/// Returns an error if the input is empty.
pub fn is_decimal(value: &str) -> Result<bool, ValidatorError> {
    if value.is_empty() {
        return Err(ValidatorError::EmptyInput);
    }

    match value.parse::<f64>() {
        Ok(parsed) => Ok(parsed % 1.0 != 0.0),
        Err(_) => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod ascii_tests {
        use super::*;

        #[test]
        fn test_valid_ascii() {
            let valid_cases = vec!["hello", "foo bar 123", "!@#$%^&*()", "\t\n"];

            for value in valid_cases {
                assert_eq!(
                    is_ascii(value),
                    Ok(true),
                    "ASCII input {:?} was rejected !",
                    value
                );
            }
        }

        #[test]
        fn test_non_ascii() {
            let invalid_cases = vec!["héllo", "日本語", "café", "naïve"];

            for value in invalid_cases {
                assert_eq!(
                    is_ascii(value),
                    Ok(false),
                    "Non-ASCII input {:?} was approved !",
                    value
                );
            }
        }

        #[test]
        fn test_empty_is_an_error() {
            assert_eq!(is_ascii(""), Err(ValidatorError::EmptyInput));
        }
    }

    mod base64_tests {
        use super::*;

        #[test]
        fn test_valid_base64() {
            let valid_cases = vec![
                "aGVsbG8=",         // "hello"
                "aGVsbG8gd29ybGQ=", // "hello world"
                "YWJjZA==",
                "QUJDRA==",
                "Zm9vYmFy",
            ];

            for value in valid_cases {
                assert_eq!(is_base64(value), Ok(true), "Base64 {:?} was rejected !", value);
            }
        }

        #[test]
        fn test_invalid_base64() {
            let invalid_cases = vec![
                "aGVsbG8",  // 7 chars, incomplete last group
                "QUJDRA",   // unpadded 2-char tail
                "====",
                "a===",
                "abc!",
                "aGVsbG8= ",
            ];

            for value in invalid_cases {
                assert_eq!(
                    is_base64(value),
                    Ok(false),
                    "Invalid base64 {:?} was approved !",
                    value
                );
            }
        }

        #[test]
        fn test_empty_is_an_error() {
            assert_eq!(is_base64(""), Err(ValidatorError::EmptyInput));
        }
    }

    mod md5_tests {
        use super::*;

        #[test]
        fn test_valid_md5() {
            let valid_cases = vec![
                "d41d8cd98f00b204e9800998ecf8427e",
                "D41D8CD98F00B204E9800998ECF8427E",
                "0123456789abcdefABCDEF0123456789",
            ];

            for value in valid_cases {
                assert_eq!(is_md5(value), Ok(true), "MD5 {:?} was rejected !", value);
            }
        }

        #[test]
        fn test_invalid_md5() {
            let invalid_cases = vec![
                "d41d8cd98f00b204e9800998ecf8427",   // 31 chars
                "d41d8cd98f00b204e9800998ecf8427e0", // 33 chars
                "g41d8cd98f00b204e9800998ecf8427e",  // non-hex char
            ];

            for value in invalid_cases {
                assert_eq!(is_md5(value), Ok(false), "Invalid MD5 {:?} was approved !", value);
            }
        }

        #[test]
        fn test_empty_is_an_error() {
            assert_eq!(is_md5(""), Err(ValidatorError::EmptyInput));
        }
    }

    mod number_tests {
        use super::*;

        #[test]
        fn test_valid_numbers() {
            let valid_cases = vec!["0", "42", "-42", "007", "123456789012345678901234567890"];

            for value in valid_cases {
                assert_eq!(is_number(value), Ok(true), "Number {:?} was rejected !", value);
            }
        }

        #[test]
        fn test_invalid_numbers() {
            let invalid_cases = vec!["4.2", "+4", " 42", "42 ", "-", "--1", "4e2", "abc"];

            for value in invalid_cases {
                assert_eq!(
                    is_number(value),
                    Ok(false),
                    "Invalid number {:?} was approved !",
                    value
                );
            }
        }

        #[test]
        fn test_empty_is_an_error() {
            assert_eq!(is_number(""), Err(ValidatorError::EmptyInput));
        }
    }

    mod decimal_tests {
        use super::*;

        #[test]
        fn test_values_with_fractional_part() {
            let valid_cases = vec!["10.5", "-3.7", "0.0001", "1e-3"];

            for value in valid_cases {
                assert_eq!(is_decimal(value), Ok(true), "Decimal {:?} was rejected !", value);
            }
        }

        #[test]
        fn test_integer_valued_input_is_not_decimal() {
            let invalid_cases = vec!["10", "-3", "10.0", "1e2", "0"];

            for value in invalid_cases {
                assert_eq!(
                    is_decimal(value),
                    Ok(false),
                    "Integer-valued {:?} was approved !",
                    value
                );
            }
        }

        #[test]
        fn test_non_numeric_is_false_not_an_error() {
            assert_eq!(is_decimal("abc"), Ok(false));
            assert_eq!(is_decimal("10,5"), Ok(false));
        }

        #[test]
        fn test_empty_is_an_error() {
            assert_eq!(is_decimal(""), Err(ValidatorError::EmptyInput));
        }
    }
}
