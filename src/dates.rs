//! Decoders for the fixed-width dates found in MARC control fields.
//!
//! MARC encodes dates without separators:
//!
//! - 005 (Date and Time of Latest Transaction): `YYYYMMDDHHMMSS.F`, sometimes
//!   shortened to `YYYYMMDD`
//! - 008/00-05 (Date entered on file): `YYMMDD`
//!
//! Every decoder returns `None` on malformed, short, or out-of-range input.

use chrono::{NaiveDate, NaiveDateTime};

/// Two-digit years below this value belong to the 21st century.
pub const CENTURY_PIVOT: i32 = 70;

/// Parse an ASCII-digit slice of `value` into a number.
fn digits(value: &str, start: usize, end: usize) -> Option<u32> {
    let slice = value.get(start..end)?;
    if slice.bytes().all(|b| b.is_ascii_digit()) {
        slice.parse().ok()
    } else {
        None
    }
}

fn ymd(value: &str) -> Option<NaiveDate> {
    let year = i32::try_from(digits(value, 0, 4)?).ok()?;
    NaiveDate::from_ymd_opt(year, digits(value, 4, 6)?, digits(value, 6, 8)?)
}

/// Decode an 8-digit `YYYYMMDD` date into a timestamp at midnight.
///
/// # Examples
///
/// ```
/// use marc_extract::dates::parse_date;
///
/// let modified = parse_date("19970411").unwrap();
/// assert_eq!(modified.to_string(), "1997-04-11 00:00:00");
/// assert!(parse_date("1997041").is_none());
/// assert!(parse_date("19971341").is_none());
/// ```
#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.len() != 8 {
        return None;
    }
    ymd(value)?.and_hms_opt(0, 0, 0)
}

/// Decode a 14-digit `YYYYMMDDHHMMSS` timestamp with an optional `.fraction`.
///
/// The fraction is accepted but ignored.
///
/// # Examples
///
/// ```
/// use marc_extract::dates::parse_date_time;
///
/// let modified = parse_date_time("19940223151047.0").unwrap();
/// assert_eq!(modified.to_string(), "1994-02-23 15:10:47");
/// ```
#[must_use]
pub fn parse_date_time(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.len() < 14 {
        return None;
    }
    if let Some(rest) = value.get(14..) {
        if !rest.is_empty() {
            let fraction = rest.strip_prefix('.')?;
            if !fraction.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
        }
    }
    ymd(value)?.and_hms_opt(digits(value, 8, 10)?, digits(value, 10, 12)?, digits(value, 12, 14)?)
}

/// Decode a control field timestamp in either fixed-width encoding.
///
/// Values of 14 or more characters are read as `YYYYMMDDHHMMSS[.F]`, 8-character
/// values as `YYYYMMDD`. Anything else yields `None`.
#[must_use]
pub fn parse_control_date(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    match value.len() {
        8 => parse_date(value),
        n if n >= 14 => parse_date_time(value),
        _ => None,
    }
}

/// Expand a two-digit year: `00`-`69` map to 2000-2069, `70`-`99` to 1970-1999.
///
/// # Examples
///
/// ```
/// use marc_extract::dates::expand_two_digit_year;
///
/// assert_eq!(expand_two_digit_year(70), 1970);
/// assert_eq!(expand_two_digit_year(69), 2069);
/// ```
#[must_use]
pub fn expand_two_digit_year(year: u32) -> i32 {
    let year = i32::try_from(year % 100).unwrap_or(0);
    if year < CENTURY_PIVOT {
        2000 + year
    } else {
        1900 + year
    }
}

/// Decode the `YYMMDD` "date entered on file" prefix of an 008 control field.
///
/// # Examples
///
/// ```
/// use marc_extract::dates::parse_created;
///
/// let created = parse_created("700101s1996 000 u|eng d").unwrap();
/// assert_eq!(created.to_string(), "1970-01-01");
/// let created = parse_created("690101s1996 000 u|eng d").unwrap();
/// assert_eq!(created.to_string(), "2069-01-01");
/// ```
#[must_use]
pub fn parse_created(field_008: &str) -> Option<NaiveDate> {
    let year = expand_two_digit_year(digits(field_008, 0, 2)?);
    NaiveDate::from_ymd_opt(year, digits(field_008, 2, 4)?, digits(field_008, 4, 6)?)
}
