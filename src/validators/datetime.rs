//! Date and time validation.
//!
//! Dates are validated by strict parsing against two fixed, ordered format
//! tables (date-only first, then date-time). `chrono` rejects trailing
//! unconsumed input and impossible calendar dates, so a format either
//! matches the whole string or not at all. Times are a single regex.

use chrono::{NaiveDate, NaiveDateTime};
use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::ValidatorError;

/// Date-only formats, tried in order. ISO, US, EU, dotted, and English
/// month-name variants with two or four digit years.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%d-%m-%Y",
    "%Y/%m/%d",
    "%d.%m.%Y",
    "%Y.%m.%d",
    "%d-%b-%Y",
    "%d-%B-%Y",
    "%d-%b-%y",
    "%d-%B-%y",
];

/// Date-time formats, tried after every date-only format has failed.
const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
    "%d-%m-%Y %H:%M:%S",
    "%d.%m.%Y %H:%M:%S",
    "%Y.%m.%d %H:%M:%S",
    "%d-%b-%Y %H:%M:%S",
    "%d-%B-%Y %H:%M:%S",
    "%d-%b-%y %H:%M:%S",
    "%d-%B-%y %H:%M:%S",
];

static TIME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:2[0-3]|1[0-9]|0?[0-9]):[0-5][0-9](?::[0-5][0-9])?(?: [APap][Mm])?$")
        .expect("Failed to compile time regex")
});

/// Checks if the given string is a valid date, with or without a time
/// component. The accepted formats are fixed; the first one that parses
/// the whole string wins.
/// Returns an error if the input is empty.
pub fn is_date(date_str: &str) -> Result<bool, ValidatorError> {
    if date_str.is_empty() {
        return Err(ValidatorError::EmptyInput);
    }

    for format in DATE_FORMATS {
        if NaiveDate::parse_from_str(date_str, format).is_ok() {
            trace!("date {:?} matched format {}", date_str, format);
            return Ok(true);
        }
    }

    for format in DATE_TIME_FORMATS {
        if NaiveDateTime::parse_from_str(date_str, format).is_ok() {
            trace!("date {:?} matched format {}", date_str, format);
            return Ok(true);
        }
    }

    Ok(false)
}

/// Checks if the given string is a valid time: hours 0-23 with flexible
/// leading zero, minutes, optional seconds, optional case-insensitive
/// AM/PM suffix after a space.
/// Returns an error if the input is empty.
pub fn is_time(time: &str) -> Result<bool, ValidatorError> {
    if time.is_empty() {
        return Err(ValidatorError::EmptyInput);
    }

    Ok(TIME_REGEX.is_match(time))
}
