//! MARCXML deserialization into [`Record`] trees.
//!
//! This module reads the MARCXML / MARC21-slim exchange format
//! (<https://www.loc.gov/standards/marcxml/>) as well as the `marcxchange`
//! variant used by several Nordic union catalogs. `tag`, `ind1`, `ind2`, and
//! `code` are read from XML **attributes**.
//!
//! Both default-namespace (`<record xmlns="...">`) and prefix-namespace
//! (`<marc:record xmlns:marc="...">`) forms are accepted. The reader is
//! deliberately forgiving: unknown elements are ignored, missing indicators read
//! as blank, and a missing `<leader>` is allowed.
//!
//! # Examples
//!
//! ```
//! use marc_extract::marcxml;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let xml = r#"<marc:record xmlns:marc="http://www.loc.gov/MARC21/slim" type="Bibliographic">
//!     <marc:controlfield tag="001">12149361x</marc:controlfield>
//!     <marc:datafield tag="245" ind1="1" ind2="0">
//!         <marc:subfield code="a">Evolusjon :</marc:subfield>
//!     </marc:datafield>
//! </marc:record>"#;
//!
//! let record = marcxml::marcxml_to_record(xml)?;
//! assert_eq!(record.get_control_field("001"), Some("12149361x"));
//! assert_eq!(record.record_type.as_deref(), Some("Bibliographic"));
//! # Ok(())
//! # }
//! ```

use crate::error::{MarcError, Result};
use crate::leader::Leader;
use crate::record::{Field, Record};
use lazy_static::lazy_static;
use quick_xml::de::from_str as xml_from_str;
use regex::Regex;
use serde::Deserialize;

lazy_static! {
    static ref XMLNS_DECLARATION: Regex = Regex::new(r#"\s+xmlns(?::[\w.-]+)?="[^"]*""#).unwrap();
    static ref ELEMENT_PREFIX: Regex = Regex::new(r"<(/?)[\w.-]+:").unwrap();
}

/// MARCXML record representation.
#[derive(Debug, Deserialize)]
#[serde(rename = "record")]
pub struct MarcxmlRecord {
    /// Declared record type attribute (e.g. "Bibliographic", "Authority", "Holdings")
    #[serde(rename = "@type", default)]
    pub record_type: Option<String>,
    /// MARC leader string
    #[serde(default)]
    pub leader: Option<String>,
    /// Control fields (tags 001-009)
    #[serde(default)]
    pub controlfield: Vec<MarcxmlControlField>,
    /// Data fields (tags 010+)
    #[serde(default)]
    pub datafield: Vec<MarcxmlDataField>,
}

/// MARCXML control field representation.
#[derive(Debug, Deserialize)]
pub struct MarcxmlControlField {
    /// Field tag as an XML attribute (e.g., "001", "008")
    #[serde(rename = "@tag")]
    pub tag: String,
    /// Control field value (text content)
    #[serde(rename = "$text", default)]
    pub value: String,
}

/// MARCXML data field representation.
#[derive(Debug, Deserialize)]
pub struct MarcxmlDataField {
    /// Field tag as an XML attribute (e.g., "245", "650")
    #[serde(rename = "@tag")]
    pub tag: String,
    /// First indicator as an XML attribute
    #[serde(rename = "@ind1", default)]
    pub ind1: String,
    /// Second indicator as an XML attribute
    #[serde(rename = "@ind2", default)]
    pub ind2: String,
    /// Subfields
    #[serde(default)]
    pub subfield: Vec<MarcxmlSubfield>,
}

/// MARCXML subfield representation.
#[derive(Debug, Deserialize)]
pub struct MarcxmlSubfield {
    /// Subfield code as an XML attribute (e.g., "a", "b", "c")
    #[serde(rename = "@code")]
    pub code: String,
    /// Subfield value (text content)
    #[serde(rename = "$text", default)]
    pub value: String,
}

/// MARCXML collection wrapper for multiple records.
#[derive(Debug, Deserialize)]
#[serde(rename = "collection")]
pub struct MarcxmlCollection {
    /// Records in the collection
    #[serde(default, rename = "record")]
    pub records: Vec<MarcxmlRecord>,
}

/// Strip XML namespace prefixes and declarations from MARCXML input.
///
/// Handles both `marc:record` → `record` (prefixed namespace) and
/// `xmlns="..."` / `xmlns:marc="..."` (namespace declarations).
fn strip_marcxml_ns(xml: &str) -> String {
    let stripped = XMLNS_DECLARATION.replace_all(xml, "");
    ELEMENT_PREFIX.replace_all(&stripped, "<$1").to_string()
}

/// Convert a MARCXML `<record>` string to a [`Record`].
///
/// # Errors
///
/// Returns [`MarcError::ParseError`] if the XML is not well formed or does not
/// have the record shape, and [`MarcError::InvalidField`] for a data field or
/// subfield without its tag or code.
pub fn marcxml_to_record(xml: &str) -> Result<Record> {
    let cleaned = strip_marcxml_ns(xml);
    let xml_record: MarcxmlRecord = xml_from_str(&cleaned).map_err(|e| {
        tracing::warn!("Failed to parse MARCXML record: {}", e);
        MarcError::ParseError(format!("Failed to parse MARCXML: {e}"))
    })?;

    marcxml_record_to_record(xml_record)
}

/// Convert a MARCXML `<collection>` string to multiple records, in document order.
///
/// # Errors
///
/// Returns an error if the XML is invalid or any record in it cannot be converted.
pub fn marcxml_to_records(xml: &str) -> Result<Vec<Record>> {
    let cleaned = strip_marcxml_ns(xml);
    let collection: MarcxmlCollection = xml_from_str(&cleaned).map_err(|e| {
        tracing::warn!("Failed to parse MARCXML collection: {}", e);
        MarcError::ParseError(format!("Failed to parse MARCXML collection: {e}"))
    })?;

    tracing::debug!("Parsed MARCXML collection with {} records", collection.records.len());

    collection
        .records
        .into_iter()
        .map(marcxml_record_to_record)
        .collect()
}

/// Internal helper: convert a deserialized `MarcxmlRecord` into a `Record`.
fn marcxml_record_to_record(xml_record: MarcxmlRecord) -> Result<Record> {
    let mut record = Record::new();
    record.leader = xml_record.leader.as_deref().map(Leader::parse);
    record.record_type = xml_record.record_type;

    for cf in xml_record.controlfield {
        record.add_control_field(cf.tag, cf.value);
    }

    for df in xml_record.datafield {
        if df.tag.trim().is_empty() {
            return Err(MarcError::InvalidField("Missing datafield tag".to_string()));
        }
        let ind1 = df.ind1.chars().next().unwrap_or(' ');
        let ind2 = df.ind2.chars().next().unwrap_or(' ');

        let mut field = Field::new(df.tag, ind1, ind2);

        for sf in df.subfield {
            let code = sf
                .code
                .chars()
                .next()
                .ok_or_else(|| MarcError::InvalidField("Missing subfield code".to_string()))?;
            field.add_subfield(code, sf.value);
        }

        record.add_field(field);
    }

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_standard_marcxml_no_namespace() {
        let xml = r#"<record>
            <leader>01234nam a2200289 a 4500</leader>
            <controlfield tag="001">12345</controlfield>
            <datafield tag="245" ind1="1" ind2="0">
                <subfield code="a">Test title</subfield>
            </datafield>
        </record>"#;

        let record = marcxml_to_record(xml).unwrap();
        assert_eq!(record.get_control_field("001"), Some("12345"));
        assert_eq!(record.leader.as_ref().map(Leader::record_type), Some('a'));
        let field = record.get_field("245").unwrap();
        assert_eq!(field.indicator1, '1');
        assert_eq!(field.get_subfield('a'), Some("Test title"));
    }

    #[test]
    fn test_parse_marcxml_with_default_namespace() {
        let xml = r#"<record xmlns="http://www.loc.gov/MARC21/slim">
            <controlfield tag="001">99999</controlfield>
            <datafield tag="245" ind1="0" ind2="0">
                <subfield code="a">Namespaced title</subfield>
            </datafield>
        </record>"#;

        let record = marcxml_to_record(xml).unwrap();
        assert!(record.leader.is_none());
        assert_eq!(record.get_control_field("001"), Some("99999"));
        assert_eq!(
            record.get_field("245").and_then(|f| f.text('a')),
            Some("Namespaced title")
        );
    }

    #[test]
    fn test_parse_marcxchange_prefix_and_type() {
        let xml = r#"<marc:record xmlns:marc="info:lc/xmlns/marcxchange-v1" format="MARC21" type="Authority">
            <marc:leader>99999nz  a2299999n  4500</marc:leader>
            <marc:controlfield tag="001">x90531735</marc:controlfield>
        </marc:record>"#;

        let record = marcxml_to_record(xml).unwrap();
        assert_eq!(record.record_type.as_deref(), Some("Authority"));
        assert_eq!(record.leader.as_ref().map(Leader::record_type), Some('z'));
        assert_eq!(record.get_control_field("001"), Some("x90531735"));
    }

    #[test]
    fn test_datafields_keep_document_order() {
        let xml = r#"<record>
            <datafield tag="700" ind1="1" ind2=" "><subfield code="a">A</subfield></datafield>
            <datafield tag="100" ind1="1" ind2=" "><subfield code="a">B</subfield></datafield>
            <datafield tag="700" ind1="1" ind2=" "><subfield code="a">C</subfield></datafield>
        </record>"#;

        let record = marcxml_to_record(xml).unwrap();
        let tags: Vec<&str> = record.fields().map(|f| f.tag.as_str()).collect();
        assert_eq!(tags, vec!["700", "100", "700"]);
    }

    #[test]
    fn test_empty_datafield_and_blank_indicators() {
        let xml = r#"<record>
            <datafield tag="260" ind1=" " ind2=" ">
            </datafield>
            <datafield tag="500">
                <subfield code="a"></subfield>
            </datafield>
        </record>"#;

        let record = marcxml_to_record(xml).unwrap();
        let f260 = record.get_field("260").unwrap();
        assert!(f260.subfields.is_empty());
        assert_eq!(f260.indicator2, ' ');

        let f500 = record.get_field("500").unwrap();
        assert_eq!(f500.indicator1, ' ');
        assert_eq!(f500.text('a'), None);
    }

    #[test]
    fn test_entities_are_decoded() {
        let xml = r#"<record>
            <datafield tag="856" ind1="4" ind2="2">
                <subfield code="u">http://example.org/?size=mini&amp;id=1.jpg</subfield>
            </datafield>
        </record>"#;

        let record = marcxml_to_record(xml).unwrap();
        assert_eq!(
            record.get_field("856").and_then(|f| f.text('u')),
            Some("http://example.org/?size=mini&id=1.jpg")
        );
    }

    #[test]
    fn test_parse_marcxml_collection() {
        let xml = r#"<marc:collection xmlns:marc="http://www.loc.gov/MARC21/slim">
            <marc:record>
                <marc:controlfield tag="001">rec1</marc:controlfield>
            </marc:record>
            <marc:record>
                <marc:controlfield tag="001">rec2</marc:controlfield>
            </marc:record>
        </marc:collection>"#;

        let records = marcxml_to_records(xml).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get_control_field("001"), Some("rec1"));
        assert_eq!(records[1].get_control_field("001"), Some("rec2"));
    }

    #[test]
    fn test_malformed_xml_is_an_error() {
        let result = marcxml_to_record("");
        assert!(matches!(result, Err(MarcError::ParseError(_))));
    }
}
