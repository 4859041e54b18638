//! Holdings record extraction.
//!
//! A holdings record says where a copy of a bibliographic item is kept (852)
//! and where an electronic version can be reached (856).

use crate::dates::parse_control_date;
use crate::marc_record::MarcRecord;
use crate::record::Field;
use chrono::NaiveDateTime;
use serde::Serialize;

/// Electronic location of the item (856).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FulltextLink {
    /// Link text (`$y`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    /// URI (`$u`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Public note (`$z`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Normalized holdings record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HoldingsRecord {
    /// Control number (001)
    pub id: Option<String>,
    /// Control number of the bibliographic record held (004)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bibliographic_record: Option<String>,
    /// Date and time of latest transaction (005)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<NaiveDateTime>,
    /// Holding institution (852 `$a`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Sublocation or collection (852 `$b`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sublocation: Option<String>,
    /// Shelving location (852 `$c`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shelvinglocation: Option<String>,
    /// Classification part of the call number (852 `$h`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callcode: Option<String>,
    /// Public notes (852 `$z`), in document order
    pub public_notes: Vec<String>,
    /// Nonpublic notes (852 `$x`), in document order
    pub nonpublic_notes: Vec<String>,
    /// Electronic locations, one per 856
    pub fulltext: Vec<FulltextLink>,
}

/// Extracts [`HoldingsRecord`]s from holdings MARC records.
///
/// # Examples
///
/// ```
/// use marc_extract::{Field, HoldingsExtractor, Record};
///
/// let record = Record::builder()
///     .field(
///         Field::builder("852", ' ', ' ')
///             .subfield_str('a', "HIT")
///             .subfield_str('h', "633 A")
///             .subfield_str('z', "(tapt?)")
///             .build(),
///     )
///     .build();
///
/// let holdings = HoldingsExtractor::new().extract(&record);
/// assert_eq!(holdings.location.as_deref(), Some("HIT"));
/// assert_eq!(holdings.callcode.as_deref(), Some("633 A"));
/// assert_eq!(holdings.public_notes, vec!["(tapt?)"]);
/// assert!(holdings.nonpublic_notes.is_empty());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HoldingsExtractor;

impl HoldingsExtractor {
    /// Create an extractor.
    #[must_use]
    pub const fn new() -> Self {
        HoldingsExtractor
    }

    /// Extract a holdings record.
    pub fn extract<R: MarcRecord + ?Sized>(&self, record: &R) -> HoldingsRecord {
        let control = |tag: &str| {
            record
                .get_control_field(tag)
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        let mut out = HoldingsRecord {
            id: control("001"),
            bibliographic_record: control("004"),
            modified: record.get_control_field("005").and_then(parse_control_date),
            ..HoldingsRecord::default()
        };

        for field in record.data_fields() {
            match field.tag_number().and_then(handler_for) {
                Some(handler) => handler(&mut out, field),
                None => tracing::trace!("Skipping unhandled holdings field {}", field.tag),
            }
        }

        tracing::debug!(
            "Extracted holdings record {:?} from {} data fields",
            out.id,
            record.data_field_count()
        );
        out
    }
}

type Handler = fn(&mut HoldingsRecord, &Field);

const HANDLERS: &[(u16, Handler)] = &[(852, handle_location), (856, handle_fulltext)];

fn handler_for(tag: u16) -> Option<Handler> {
    HANDLERS
        .binary_search_by_key(&tag, |&(t, _)| t)
        .ok()
        .map(|i| HANDLERS[i].1)
}

fn handle_location(out: &mut HoldingsRecord, field: &Field) {
    // Later 852s replace the location but notes accumulate
    out.location = field.text_owned('a');
    out.sublocation = field.text_owned('b');
    out.shelvinglocation = field.text_owned('c');
    out.callcode = field.text_owned('h');

    out.public_notes.extend(
        field
            .subfields_by_code('z')
            .filter(|z| !z.is_empty())
            .map(str::to_string),
    );
    out.nonpublic_notes.extend(
        field
            .subfields_by_code('x')
            .filter(|x| !x.is_empty())
            .map(str::to_string),
    );
}

fn handle_fulltext(out: &mut HoldingsRecord, field: &Field) {
    out.fulltext.push(FulltextLink {
        provider: field.text_owned('y'),
        url: field.text_owned('u'),
        comment: field.text_owned('z'),
    });
}
