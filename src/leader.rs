//! MARC record leader.
//!
//! The MARC leader is a 24-character fixed-length field at the start of every MARC record.
//! It contains metadata describing the record's structure and content type.
//!
//! # Structure
//!
//! - Positions 0-4: Record length (5 digits)
//! - Position 5: Record status
//! - Position 6: Record type (a = language material, z = authority, x/y/v/u = holdings, ...)
//! - Position 7: Bibliographic level (m = monograph, s = serial, etc.)
//! - Position 8: Control record type
//! - Position 9: Character coding (space = MARC-8, a = UTF-8)
//! - Positions 10-16: Indicator count, subfield code count, base address of data
//! - Positions 17-19: Encoding level, cataloging form, multipart level
//! - Positions 20-23: Entry map (usually "4500")
//!
//! MARCXML leaders are frequently filled with placeholders (`99999`, blanks), so [`Leader`] never
//! rejects its input. Positions that do not exist read as blank.

use serde::{Deserialize, Serialize};

/// Length of a well-formed leader.
pub const LEADER_LENGTH: usize = 24;

/// MARC Leader, kept as its raw 24 characters with positional accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leader {
    raw: String,
}

impl Leader {
    /// Build a leader from its textual form.
    ///
    /// XML readers usually strip leading whitespace from element text, which would
    /// shift every position of a leader such as `"     nam a22     4500"`. A leader
    /// shorter than 24 characters is therefore padded on the left.
    ///
    /// # Examples
    ///
    /// ```
    /// use marc_extract::Leader;
    ///
    /// let leader = Leader::parse("99999 am a2299999 c 4500");
    /// assert_eq!(leader.record_type(), 'a');
    /// assert_eq!(leader.bibliographic_level(), 'm');
    ///
    /// let trimmed = Leader::parse("cam  2200301 a 4500");
    /// assert_eq!(trimmed.position(5), 'c');
    /// assert_eq!(trimmed.record_type(), 'a');
    /// ```
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let len = value.chars().count();
        let raw = if len < LEADER_LENGTH {
            format!("{}{value}", " ".repeat(LEADER_LENGTH - len))
        } else {
            value.to_string()
        };
        Leader { raw }
    }

    /// The leader exactly as stored (after left padding).
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Character at a leader position, or a blank if the position is missing.
    #[must_use]
    pub fn position(&self, index: usize) -> char {
        self.raw.chars().nth(index).unwrap_or(' ')
    }

    /// Type of record (position 6)
    #[must_use]
    pub fn record_type(&self) -> char {
        self.position(6)
    }

    /// Bibliographic level (position 7)
    #[must_use]
    pub fn bibliographic_level(&self) -> char {
        self.position(7)
    }
}

impl Default for Leader {
    fn default() -> Self {
        Leader::parse("00000nam a2200000 a 4500")
    }
}
