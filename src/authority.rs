//! Authority record extraction.
//!
//! Reads personal, corporate and meeting names (100/110/111) and topical terms
//! (150) together with their see-from tracings, source information (040),
//! gender (375), and the coded 008 elements for cataloging rules and subject
//! heading system.

use crate::dates::{parse_control_date, parse_created};
use crate::marc_record::MarcRecord;
use crate::record::Field;
use crate::vocabularies::{authority_vocabulary, cataloging_rules};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// The kind of entity an authority heading describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EntityClass {
    /// Personal name (100)
    Person,
    /// Corporate name (110)
    Corporate,
    /// Meeting name (111)
    Meeting,
    /// Topical term (150)
    TopicalTerm,
}

/// Associated gender (375).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Gender {
    /// Gender (`$a`)
    pub value: Option<String>,
    /// Start period (`$s`)
    pub from: Option<String>,
    /// End period (`$e`)
    pub until: Option<String>,
}

/// Normalized authority record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorityRecord {
    /// Control number (001)
    pub id: Option<String>,
    /// Control number identifier (003)
    pub agency: Option<String>,
    /// Date and time of latest transaction (005)
    pub modified: Option<NaiveDateTime>,
    /// Date entered on file (008/00-05)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<NaiveDate>,
    /// Descriptive cataloging rules (008/10)
    pub cataloging: Option<String>,
    /// Subject heading system (008/11, overridden by 040 `$f`)
    pub vocabulary: Option<String>,
    /// Original cataloging agency (040 `$a`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cataloging_agency: Option<Option<String>>,
    /// Language of cataloging (040 `$b`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Option<String>>,
    /// Transcribing agency (040 `$c`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcribing_agency: Option<Option<String>>,
    /// Modifying agency (040 `$d`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifying_agency: Option<Option<String>>,
    /// Entity class of the heading
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<EntityClass>,
    /// Name as recorded (100/110/111 `$a`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Display label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Topical term (150 `$a`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
    /// Birth date (100 `$d` before the hyphen)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth: Option<Option<String>>,
    /// Death date (100 `$d` after the hyphen)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub death: Option<Option<String>>,
    /// Gender statements in document order
    pub genders: Vec<Gender>,
    /// Value of the last gender statement
    pub gender: Option<String>,
    /// See-from personal names (400 `$a`)
    pub name_variants: Vec<String>,
    /// See-from topical terms (450 `$a`)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub term_variants: Vec<String>,
}

/// Extracts [`AuthorityRecord`]s from authority MARC records.
///
/// Authority rules take no configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthorityExtractor;

type Handler = fn(&mut AuthorityRecord, &Field);

const HANDLERS: &[(u16, Handler)] = &[
    (100, handle_personal_name),
    (110, handle_corporate_name),
    (111, handle_meeting_name),
    (150, handle_topical_term),
    (375, handle_gender),
    (400, handle_name_variant),
    (450, handle_term_variant),
];

fn handler_for(tag: u16) -> Option<Handler> {
    HANDLERS
        .binary_search_by_key(&tag, |&(t, _)| t)
        .ok()
        .map(|i| HANDLERS[i].1)
}

impl AuthorityExtractor {
    /// Create an extractor.
    #[must_use]
    pub const fn new() -> Self {
        AuthorityExtractor
    }

    /// Extract an authority record.
    ///
    /// # Examples
    ///
    /// ```
    /// use marc_extract::{AuthorityExtractor, EntityClass, Field, Record};
    ///
    /// let record = Record::builder()
    ///     .control_field_str("001", "x90531735")
    ///     .field(
    ///         Field::builder("100", '1', ' ')
    ///             .subfield_str('a', "Bakke, Dagfinn")
    ///             .subfield_str('d', "1933-")
    ///             .build(),
    ///     )
    ///     .build();
    ///
    /// let authority = AuthorityExtractor::new().extract(&record);
    /// assert_eq!(authority.class, Some(EntityClass::Person));
    /// assert_eq!(authority.label.as_deref(), Some("Dagfinn Bakke"));
    /// assert_eq!(authority.birth, Some(Some("1933".to_string())));
    /// assert_eq!(authority.death, Some(None));
    /// ```
    pub fn extract<R: MarcRecord + ?Sized>(&self, record: &R) -> AuthorityRecord {
        let mut out = AuthorityRecord {
            id: control_text(record, "001"),
            agency: control_text(record, "003"),
            modified: record.get_control_field("005").and_then(parse_control_date),
            ..AuthorityRecord::default()
        };

        if let Some(f008) = record.get_control_field("008") {
            out.created = parse_created(f008);
            let mut codes = f008.chars().skip(10);
            out.cataloging = codes.next().and_then(cataloging_rules).map(str::to_string);
            out.vocabulary = codes.next().and_then(authority_vocabulary).map(str::to_string);
        }

        // 040 is not repeatable; later occurrences are ignored
        if let Some(source) = record.get_field("040") {
            out.cataloging_agency = Some(source.text_owned('a'));
            out.language = Some(source.text_owned('b'));
            out.transcribing_agency = Some(source.text_owned('c'));
            out.modifying_agency = Some(source.text_owned('d'));
            if let Some(vocabulary) = source.text_owned('f') {
                out.vocabulary = Some(vocabulary);
            }
        }

        for field in record.data_fields() {
            match field.tag_number().and_then(handler_for) {
                Some(handler) => handler(&mut out, field),
                None => tracing::trace!("Skipping unhandled authority field {}", field.tag),
            }
        }

        out.gender = out.genders.last().and_then(|g| g.value.clone());

        tracing::debug!(
            "Extracted authority record {:?} from {} data fields",
            out.id,
            record.data_field_count()
        );
        out
    }
}

fn control_text<R: MarcRecord + ?Sized>(record: &R, tag: &str) -> Option<String> {
    record
        .get_control_field(tag)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Display label for an inverted personal name: "Bakke, Dagfinn" reads "Dagfinn Bakke".
///
/// Names that do not split into exactly two parts on ", " are returned unchanged.
fn personal_label(name: &str) -> String {
    let parts: Vec<&str> = name.split(", ").collect();
    match parts.as_slice() {
        [surname, forename] => format!("{forename} {surname}"),
        _ => name.to_string(),
    }
}

fn handle_personal_name(out: &mut AuthorityRecord, field: &Field) {
    out.class = Some(EntityClass::Person);
    let name = field.text_owned('a');
    out.label = name.as_deref().map(personal_label);
    out.name = name;

    let dates = field.get_subfield('d').unwrap_or("");
    let mut tokens = dates.split('-');
    out.birth = Some(tokens.next().filter(|t| !t.is_empty()).map(str::to_string));
    out.death = Some(tokens.next().filter(|t| !t.is_empty()).map(str::to_string));
}

fn handle_named_entity(out: &mut AuthorityRecord, field: &Field, class: EntityClass) {
    out.class = Some(class);
    out.name = field.text_owned('a');
    out.label.clone_from(&out.name);
}

fn handle_corporate_name(out: &mut AuthorityRecord, field: &Field) {
    handle_named_entity(out, field, EntityClass::Corporate);
}

fn handle_meeting_name(out: &mut AuthorityRecord, field: &Field) {
    handle_named_entity(out, field, EntityClass::Meeting);
}

fn handle_topical_term(out: &mut AuthorityRecord, field: &Field) {
    out.class = Some(EntityClass::TopicalTerm);
    let term = field.get_subfield('a').unwrap_or("");

    let mut label = term.to_string();
    for code in ['x', 'v', 'y', 'z'] {
        for value in field.subfields_by_code(code) {
            label.push_str(" : ");
            label.push_str(value);
        }
    }

    out.term = (!term.is_empty()).then(|| term.to_string());
    out.label = Some(label);
}

fn handle_gender(out: &mut AuthorityRecord, field: &Field) {
    out.genders.push(Gender {
        value: field.text_owned('a'),
        from: field.text_owned('s'),
        until: field.text_owned('e'),
    });
}

fn handle_name_variant(out: &mut AuthorityRecord, field: &Field) {
    if let Some(name) = field.text_owned('a') {
        out.name_variants.push(name);
    }
}

fn handle_term_variant(out: &mut AuthorityRecord, field: &Field) {
    if let Some(term) = field.text_owned('a') {
        out.term_variants.push(term);
    }
}
