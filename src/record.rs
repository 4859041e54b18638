//! In-memory MARC record tree used as extractor input.
//!
//! This module provides the node types the extractors navigate:
//! - [`Record`]: leader, control fields and data fields in document order
//! - [`Field`]: a variable data field (010+) with two indicators
//! - [`Subfield`]: a coded data element within a field
//!
//! Data fields are kept in a flat `Vec` rather than grouped by tag, so that
//! iterating a record yields fields in exactly the order the source document
//! listed them. All text lookups trim surrounding whitespace, matching how
//! MARCXML text nodes are read.
//!
//! # Examples
//!
//! ```
//! use marc_extract::{Field, Record};
//!
//! let record = Record::builder()
//!     .control_field_str("001", "12345")
//!     .field(
//!         Field::builder("245", '1', '0')
//!             .subfield_str('a', "Evolusjon :")
//!             .subfield_str('b', "naturens kulturhistorie")
//!             .build(),
//!     )
//!     .build();
//!
//! assert_eq!(record.get_control_field("001"), Some("12345"));
//! assert_eq!(record.get_field("245").and_then(|f| f.text('b')), Some("naturens kulturhistorie"));
//! ```

use crate::leader::Leader;
use crate::marc_record::MarcRecord;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A MARC record as read from MARCXML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Record leader, if the source carried one
    pub leader: Option<Leader>,
    /// Declared record type (the MARCXML `type` attribute, e.g. "Bibliographic")
    pub record_type: Option<String>,
    /// Control fields (000-009) - tag -> value, preserves insertion order
    pub control_fields: IndexMap<String, String>,
    /// Data fields (010+) in document order
    pub fields: Vec<Field>,
}

/// A data field in a MARC record (fields 010 and higher)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Field tag (3 digits)
    pub tag: String,
    /// First indicator
    pub indicator1: char,
    /// Second indicator
    pub indicator2: char,
    /// Subfields (stored in `SmallVec` to avoid allocation for typical fields with 4 or fewer subfields)
    pub subfields: SmallVec<[Subfield; 4]>,
}

/// A subfield within a field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subfield {
    /// Subfield code (single character)
    pub code: char,
    /// Subfield value, untrimmed
    pub value: String,
}

impl Record {
    /// Create an empty record without a leader
    #[must_use]
    pub fn new() -> Self {
        Record::default()
    }

    /// Create an empty record with the given leader
    #[must_use]
    pub fn with_leader(leader: Leader) -> Self {
        Record {
            leader: Some(leader),
            ..Record::default()
        }
    }

    /// Create a builder for fluently constructing records
    #[must_use]
    pub fn builder() -> RecordBuilder {
        RecordBuilder {
            record: Record::new(),
        }
    }

    /// Add (or replace) a control field (000-009)
    pub fn add_control_field(&mut self, tag: String, value: String) {
        self.control_fields.insert(tag, value);
    }

    /// Add a control field using string slices
    pub fn add_control_field_str(&mut self, tag: &str, value: &str) {
        self.add_control_field(tag.to_string(), value.to_string());
    }

    /// Get a control field value
    #[must_use]
    pub fn get_control_field(&self, tag: &str) -> Option<&str> {
        self.control_fields.get(tag).map(String::as_str)
    }

    /// Append a data field after all existing ones
    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Iterate over all data fields in document order
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    /// Get first field with a given tag
    #[must_use]
    pub fn get_field(&self, tag: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.tag == tag)
    }
}

impl MarcRecord for Record {
    fn leader(&self) -> Option<&Leader> {
        self.leader.as_ref()
    }

    fn declared_type(&self) -> Option<&str> {
        self.record_type.as_deref()
    }

    fn get_control_field(&self, tag: &str) -> Option<&str> {
        Record::get_control_field(self, tag)
    }

    fn data_fields(&self) -> Box<dyn Iterator<Item = &Field> + '_> {
        Box::new(self.fields.iter())
    }
}

/// Builder for fluently constructing MARC records
#[derive(Debug)]
pub struct RecordBuilder {
    record: Record,
}

impl RecordBuilder {
    /// Set the leader
    #[must_use]
    pub fn leader(mut self, leader: Leader) -> Self {
        self.record.leader = Some(leader);
        self
    }

    /// Set the declared record type
    #[must_use]
    pub fn record_type(mut self, record_type: &str) -> Self {
        self.record.record_type = Some(record_type.to_string());
        self
    }

    /// Add a control field using string slices
    #[must_use]
    pub fn control_field_str(mut self, tag: &str, value: &str) -> Self {
        self.record.add_control_field_str(tag, value);
        self
    }

    /// Add a data field
    #[must_use]
    pub fn field(mut self, field: Field) -> Self {
        self.record.add_field(field);
        self
    }

    /// Build the record
    #[must_use]
    pub fn build(self) -> Record {
        self.record
    }
}

impl Field {
    /// Create a new data field
    #[must_use]
    pub fn new(tag: String, indicator1: char, indicator2: char) -> Self {
        Field {
            tag,
            indicator1,
            indicator2,
            subfields: SmallVec::new(),
        }
    }

    /// Create a builder for constructing fields fluently
    ///
    /// # Examples
    ///
    /// ```
    /// use marc_extract::Field;
    ///
    /// let field = Field::builder("650", ' ', '0')
    ///     .subfield_str('a', "Optoelectronics industry")
    ///     .subfield_str('x', "Directories.")
    ///     .build();
    /// assert_eq!(field.tag_number(), Some(650));
    /// ```
    #[must_use]
    pub fn builder(tag: &str, indicator1: char, indicator2: char) -> FieldBuilder {
        FieldBuilder {
            field: Field::new(tag.to_string(), indicator1, indicator2),
        }
    }

    /// Numeric value of the tag, if it is made of digits
    #[must_use]
    pub fn tag_number(&self) -> Option<u16> {
        self.tag.trim().parse().ok()
    }

    /// Add a subfield
    pub fn add_subfield(&mut self, code: char, value: String) {
        self.subfields.push(Subfield { code, value });
    }

    /// Add a subfield using a string slice
    pub fn add_subfield_str(&mut self, code: char, value: &str) {
        self.add_subfield(code, value.to_string());
    }

    /// First value for a subfield code, trimmed.
    ///
    /// Returns `Some("")` for a subfield that is present but blank.
    #[must_use]
    pub fn get_subfield(&self, code: char) -> Option<&str> {
        self.subfields
            .iter()
            .find(|sf| sf.code == code)
            .map(|sf| sf.value.trim())
    }

    /// First non-blank value for a subfield code, trimmed.
    ///
    /// Only the first occurrence of the code is consulted; a blank first
    /// occurrence yields `None`.
    #[must_use]
    pub fn text(&self, code: char) -> Option<&str> {
        self.get_subfield(code).filter(|v| !v.is_empty())
    }

    /// Owned copy of [`Field::text`]
    #[must_use]
    pub fn text_owned(&self, code: char) -> Option<String> {
        self.text(code).map(str::to_string)
    }

    /// Iterate over the trimmed values of every subfield with a specific code
    pub fn subfields_by_code(&self, code: char) -> impl Iterator<Item = &str> {
        self.subfields
            .iter()
            .filter(move |sf| sf.code == code)
            .map(|sf| sf.value.trim())
    }
}

/// Builder for constructing fields fluently
#[derive(Debug)]
pub struct FieldBuilder {
    field: Field,
}

impl FieldBuilder {
    /// Add a subfield using a string slice
    #[must_use]
    pub fn subfield_str(mut self, code: char, value: &str) -> Self {
        self.field.add_subfield_str(code, value);
        self
    }

    /// Build the field
    #[must_use]
    pub fn build(self) -> Field {
        self.field
    }
}
