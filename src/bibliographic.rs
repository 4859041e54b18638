//! Bibliographic record extraction.
//!
//! [`BibliographicExtractor`] walks the data fields of a bibliographic record
//! once, in document order, and dispatches each field to the handler registered
//! for its tag. Unknown tags are skipped. Repeatable fields (020, 082, 1XX/7XX,
//! 500, 650, 780/785, 830) accumulate into sequences in document order; singular
//! outputs (title, publisher, summary, ...) take the value of the last occurrence.
//!
//! # Attribute presence
//!
//! Output keys come in three flavors:
//! - always present: `id`, `electronic`, `notes`, `authors`, `subjects`,
//!   `classifications`, `series`, `is_series`, `is_multivolume`
//! - present once the source field occurs, `null` when its subfield is missing:
//!   `title`, `subtitle`, `edition`, `publisher`, `year`, `extent`, ...
//! - present only with a value: `isbn`, `pages`, `part_no`, `cover_image`, ...
//!
//! # Examples
//!
//! ```
//! use marc_extract::{BibliographicExtractor, Field, Record};
//!
//! let record = Record::builder()
//!     .control_field_str("001", "12149361x")
//!     .field(
//!         Field::builder("020", ' ', ' ')
//!             .subfield_str('a', "978-8243005129 (ib.)")
//!             .build(),
//!     )
//!     .field(
//!         Field::builder("245", '1', '0')
//!             .subfield_str('a', "Evolusjon :")
//!             .subfield_str('b', "naturens kulturhistorie")
//!             .build(),
//!     )
//!     .build();
//!
//! let bib = BibliographicExtractor::new().extract(&record);
//! assert_eq!(bib.id.as_deref(), Some("12149361x"));
//! assert_eq!(bib.isbn, vec!["978-8243005129"]);
//! assert_eq!(bib.title, Some(Some("Evolusjon".to_string())));
//! ```

use crate::config::ExtractorConfig;
use crate::dates::{parse_control_date, parse_created};
use crate::marc_record::MarcRecord;
use crate::record::Field;
use crate::relationship::{HostItem, LinkGroup, RelationshipItem};
use crate::vocabularies::{preceding_relationship, subject_vocabulary, succeeding_relationship};
use chrono::{NaiveDate, NaiveDateTime};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    static ref ISBN_PREFIX: Regex = Regex::new(r"^([0-9Xx-]+)").unwrap();
    static ref DEWEY_NUMBER: Regex = Regex::new(r"^.*?([0-9.]+)/?([0-9.]*)").unwrap();
    static ref YEAR: Regex = Regex::new(r"[0-9]{4}").unwrap();
    static ref PAGE_COUNT: Regex = Regex::new(r"([0-9]+) (?:s|p|pp)\.").unwrap();
    static ref AUTHORITY_ID: Regex = Regex::new(r"^\(([^)]*)\)(.*)$").unwrap();
}

/// Characters removed from the end of 245 `$a`.
const TITLE_TRAILING: &[char] = &[' ', '\t', '\n', '\r', '\0', '\x0B', ':', '-'];

/// Broad material category of a bibliographic item.
///
/// Derived from leader/06 (type of record), leader/07 (bibliographic level)
/// and, for continuing resources, 008/21 (type of continuing resource).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Material {
    /// Language material or manuscript text
    Book,
    /// Notated music
    MusicScore,
    /// Cartographic material
    Map,
    /// Projected medium
    Video,
    /// Nonmusical sound recording
    AudioBook,
    /// Musical sound recording
    Music,
    /// Two-dimensional nonprojectable graphic
    Image,
    /// Computer file
    ComputerFile,
    /// Kit or mixed materials
    Kit,
    /// Three-dimensional artifact
    Object,
    /// Periodical
    Periodical,
    /// Monographic series
    Series,
    /// Newspaper
    Newspaper,
    /// Any other continuing resource
    Serial,
}

impl Material {
    /// Detect the material from leader/06, leader/07 and 008/21.
    ///
    /// # Examples
    ///
    /// ```
    /// use marc_extract::Material;
    ///
    /// assert_eq!(Material::detect('a', 'm', None), Some(Material::Book));
    /// assert_eq!(Material::detect('a', 's', Some('p')), Some(Material::Periodical));
    /// assert_eq!(Material::detect('a', 's', None), Some(Material::Serial));
    /// assert_eq!(Material::detect('z', 'm', None), None);
    /// ```
    #[must_use]
    pub fn detect(record_type: char, bibliographic_level: char, continuing_type: Option<char>) -> Option<Self> {
        match bibliographic_level {
            'a' | 'c' | 'd' | 'm' => match record_type {
                'a' | 't' => Some(Material::Book),
                'c' | 'd' => Some(Material::MusicScore),
                'e' | 'f' => Some(Material::Map),
                'g' => Some(Material::Video),
                'i' => Some(Material::AudioBook),
                'j' => Some(Material::Music),
                'k' => Some(Material::Image),
                'm' => Some(Material::ComputerFile),
                'o' | 'p' => Some(Material::Kit),
                'r' => Some(Material::Object),
                _ => None,
            },
            'b' | 'i' | 's' => Some(match continuing_type {
                Some('p') => Material::Periodical,
                Some('m') => Material::Series,
                Some('n') => Material::Newspaper,
                _ => Material::Serial,
            }),
            _ => None,
        }
    }
}

/// Main, corporate, uniform-title or added entry (1XX/7XX).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    /// Name (`$a`), `null` when missing
    pub name: Option<String>,
    /// `main`, `corporate`, `uniform`, `added_corporate`, or the relator of a 700
    pub role: String,
    /// Dates associated with the name (700 `$d`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dates: Option<String>,
    /// Authority record reference (`$0`), e.g. `(NO-TrBIB)x12001130`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authority: Option<String>,
    /// `$0` without its `(AGENCY)` prefix
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bibsys_identifier: Option<String>,
}

/// Subdivisions of a subject heading. Only the subdivisions present are emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Subdivisions {
    /// General subdivision (`$x`), periods trimmed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topical: Option<String>,
    /// Chronological subdivision (`$y`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chronological: Option<String>,
    /// Geographic subdivision (`$z`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geographic: Option<String>,
    /// Form subdivision (`$v`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<String>,
}

/// Topical subject heading (650).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Subject {
    /// Heading (`$a`), periods trimmed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
    /// Subject heading system, from indicator 2 or `$2`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vocabulary: Option<String>,
    /// Subdivisions
    pub subdivisions: Subdivisions,
}

/// Dewey Decimal classification (082).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// Always `dewey`
    pub system: String,
    /// Class number with the prefix separator `/` removed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    /// Edition number (`$2`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edition: Option<String>,
    /// Assigning agency (`$q`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigning_agency: Option<String>,
}

/// Series added entry (830).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Series {
    /// Uniform title (`$a`)
    pub title: Option<String>,
    /// Control number of the series record (`$w`, local agency prefix removed)
    pub id: Option<String>,
    /// Volume (`$v`)
    pub volume: Option<String>,
}

/// Summary note (520).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Source of the summary (`$c`)
    pub assigning_source: Option<String>,
    /// Summary text (`$a`)
    pub text: Option<String>,
}

/// Normalized bibliographic record.
///
/// `Option<Option<T>>` attributes are absent until their field occurs and
/// `null` when it occurs without the subfield they read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BibliographicRecord {
    /// Control number (001)
    pub id: Option<String>,
    /// Material category, when a leader is present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<Material>,
    /// Electronic resource
    pub electronic: bool,
    /// Date entered on file (008/00-05)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<NaiveDate>,
    /// Date and time of latest transaction (005)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<NaiveDateTime>,
    /// Library of Congress control number (010)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lccn: Option<Option<String>>,
    /// ISBNs (020 `$a`), qualifiers removed; absent when there are none
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub isbn: Vec<String>,
    /// Title proper (245 `$a`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Option<String>>,
    /// Remainder of title (245 `$b`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<Option<String>>,
    /// Number of part (245 `$n`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_no: Option<String>,
    /// Name of part (245 `$p`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_name: Option<String>,
    /// Medium (245 `$h`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,
    /// Edition statement (250)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edition: Option<Option<String>>,
    /// Publisher (260/264 `$b`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<Option<String>>,
    /// Publication year (first four digits of 260/264 `$c`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<Option<i32>>,
    /// Extent (300 `$a`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extent: Option<Option<String>>,
    /// Page count parsed from the extent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<u32>,
    /// General notes (500)
    pub notes: Vec<String>,
    /// Formatted contents note (505)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contents: Option<Option<String>>,
    /// Summary (520)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<Summary>,
    /// Main and added entries, in document order
    pub authors: Vec<Author>,
    /// Subject headings, in document order
    pub subjects: Vec<Subject>,
    /// Dewey classifications, in document order
    pub classifications: Vec<Classification>,
    /// Series added entries, in document order
    pub series: Vec<Series>,
    /// Preceding entries (780)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preceding: Option<LinkGroup>,
    /// Succeeding entries (785)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub succeeding: Option<LinkGroup>,
    /// Host item (773)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_of: Option<HostItem>,
    /// Additional physical form (776)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_form: Option<RelationshipItem>,
    /// The record describes a series whose parts link through 830 `$w`
    pub is_series: bool,
    /// The record describes a multivolume work whose volumes link through 773 `$w`
    pub is_multivolume: bool,
    /// Cover image URL (856/956)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    /// Publisher description URL (856/956)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Per-record extraction state handed to every tag handler.
struct Context<'a> {
    config: &'a ExtractorConfig,
    local_prefix: String,
    has_preceding: bool,
    has_succeeding: bool,
    has_host: bool,
    out: BibliographicRecord,
}

type Handler = fn(&mut Context<'_>, &Field);

/// Tag handlers, sorted by tag.
const HANDLERS: &[(u16, Handler)] = &[
    (10, handle_lccn),
    (20, handle_isbn),
    (82, handle_dewey),
    (100, handle_main_entry),
    (110, handle_main_entry),
    (130, handle_main_entry),
    (245, handle_title),
    (250, handle_edition),
    (260, handle_publication),
    (264, handle_rda_publication),
    (300, handle_extent),
    (500, handle_note),
    (505, handle_contents),
    (520, handle_summary),
    (580, handle_linking_note),
    (650, handle_subject),
    (700, handle_added_entry),
    (710, handle_added_corporate),
    (773, handle_host_item),
    (776, handle_other_form),
    (780, handle_preceding),
    (785, handle_succeeding),
    (830, handle_series),
    (856, handle_link),
    (956, handle_link),
    (991, handle_series_kind),
];

fn handler_for(tag: u16) -> Option<Handler> {
    HANDLERS
        .binary_search_by_key(&tag, |&(t, _)| t)
        .ok()
        .map(|i| HANDLERS[i].1)
}

/// Extracts [`BibliographicRecord`]s from bibliographic MARC records.
#[derive(Debug, Clone, Default)]
pub struct BibliographicExtractor {
    config: ExtractorConfig,
}

impl BibliographicExtractor {
    /// Create an extractor with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor with a custom configuration.
    #[must_use]
    pub fn with_config(config: ExtractorConfig) -> Self {
        BibliographicExtractor { config }
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract a bibliographic record. Never fails; missing data leaves attributes unset.
    pub fn extract<R: MarcRecord + ?Sized>(&self, record: &R) -> BibliographicRecord {
        let mut ctx = Context {
            config: &self.config,
            local_prefix: self.config.local_agency_prefix(),
            has_preceding: record.has_field("780"),
            has_succeeding: record.has_field("785"),
            has_host: record.has_field("773"),
            out: BibliographicRecord::default(),
        };

        extract_control_fields(record, &mut ctx.out);

        for field in record.data_fields() {
            match field.tag_number().and_then(handler_for) {
                Some(handler) => handler(&mut ctx, field),
                None => tracing::trace!("Skipping unhandled bibliographic field {}", field.tag),
            }
        }

        tracing::debug!(
            "Extracted bibliographic record {:?} from {} data fields",
            ctx.out.id,
            record.data_field_count()
        );
        ctx.out
    }
}

fn extract_control_fields<R: MarcRecord + ?Sized>(record: &R, out: &mut BibliographicRecord) {
    out.id = record
        .get_control_field("001")
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string);
    out.modified = record.get_control_field("005").and_then(parse_control_date);

    let f008 = record.get_control_field("008");
    out.created = f008.and_then(parse_created);

    if let Some(leader) = record.leader() {
        let continuing_type = f008.and_then(|f| f.chars().nth(21));
        out.material = Material::detect(leader.record_type(), leader.bibliographic_level(), continuing_type);
    }

    let computer_file = record
        .get_control_field("007")
        .is_some_and(|f| f.starts_with('c'));
    let online_form = f008
        .and_then(|f| f.chars().nth(23))
        .is_some_and(|c| matches!(c, 'o' | 's'));
    out.electronic = computer_file || online_form;
}

/// Strip a literal agency prefix such as `(NO-TrBIB)` from a control number.
fn strip_prefix_literal(value: &str, prefix: &str) -> Option<String> {
    let stripped = value.replace(prefix, "");
    let stripped = stripped.trim();
    (!stripped.is_empty()).then(|| stripped.to_string())
}

fn first_year(value: &str) -> Option<i32> {
    YEAR.find(value).and_then(|m| m.as_str().parse().ok())
}

fn author(field: &Field, role: &str) -> Author {
    let authority = field.text_owned('0');
    let bibsys_identifier = authority
        .as_deref()
        .and_then(|a| AUTHORITY_ID.captures(a))
        .and_then(|c| c.get(2))
        .map(|m| m.as_str().trim())
        .filter(|id| !id.is_empty())
        .map(str::to_string);

    Author {
        name: field.text_owned('a'),
        role: role.to_string(),
        dates: None,
        authority,
        bibsys_identifier,
    }
}

fn handle_lccn(ctx: &mut Context<'_>, field: &Field) {
    ctx.out.lccn = Some(field.text_owned('a'));
}

fn handle_isbn(ctx: &mut Context<'_>, field: &Field) {
    // Only $a; $z holds canceled or invalid ISBNs
    let Some(value) = field.text('a') else {
        return;
    };
    match ISBN_PREFIX.captures(value).and_then(|c| c.get(1)) {
        Some(isbn) => ctx.out.isbn.push(isbn.as_str().to_string()),
        None => tracing::trace!("Ignoring ISBN without a leading number: {}", value),
    }
}

fn handle_dewey(ctx: &mut Context<'_>, field: &Field) {
    let number = field
        .text('a')
        .and_then(|a| DEWEY_NUMBER.captures(a))
        .map(|c| {
            let mut number = c.get(1).map_or("", |m| m.as_str()).to_string();
            number.push_str(c.get(2).map_or("", |m| m.as_str()));
            number
        })
        .filter(|n| !n.is_empty());

    ctx.out.classifications.push(Classification {
        system: "dewey".to_string(),
        number,
        edition: field.text_owned('2'),
        assigning_agency: field.text_owned('q'),
    });
}

fn handle_main_entry(ctx: &mut Context<'_>, field: &Field) {
    let role = match field.tag.as_str() {
        "110" => "corporate",
        "130" => "uniform",
        _ => "main",
    };
    ctx.out.authors.push(author(field, role));
}

fn handle_title(ctx: &mut Context<'_>, field: &Field) {
    let title = field
        .text('a')
        .map(|a| a.trim_end_matches(TITLE_TRAILING))
        .filter(|a| !a.is_empty())
        .map(str::to_string);
    ctx.out.title = Some(title);
    ctx.out.subtitle = Some(field.text_owned('b'));

    let medium = field.text_owned('h');
    if let Some(medium) = &medium {
        if ctx.config.is_electronic_medium(medium) {
            ctx.out.electronic = true;
        }
    }

    if let Some(part_no) = field.text_owned('n') {
        ctx.out.part_no = Some(part_no);
    }
    if let Some(part_name) = field.text_owned('p') {
        ctx.out.part_name = Some(part_name);
    }
    if medium.is_some() {
        ctx.out.medium = medium;
    }
}

fn handle_edition(ctx: &mut Context<'_>, field: &Field) {
    ctx.out.edition = Some(field.text_owned('a'));
}

fn handle_publication(ctx: &mut Context<'_>, field: &Field) {
    ctx.out.publisher = Some(field.text_owned('b'));
    ctx.out.year = Some(field.text('c').and_then(first_year));
}

fn handle_rda_publication(ctx: &mut Context<'_>, field: &Field) {
    // Second indicator 1 is the publication statement; 0, 2, 3, 4 are other functions
    if field.indicator2 == '1' {
        handle_publication(ctx, field);
    }
}

fn handle_extent(ctx: &mut Context<'_>, field: &Field) {
    let extent = field.text_owned('a');
    if let Some(pages) = extent
        .as_deref()
        .and_then(|a| PAGE_COUNT.captures(a))
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
    {
        ctx.out.pages = Some(pages);
    }
    ctx.out.extent = Some(extent);
}

fn handle_note(ctx: &mut Context<'_>, field: &Field) {
    if let Some(note) = field.get_subfield('a') {
        ctx.out.notes.push(note.to_string());
    }
}

fn handle_contents(ctx: &mut Context<'_>, field: &Field) {
    ctx.out.contents = Some(field.text_owned('a'));
}

fn handle_summary(ctx: &mut Context<'_>, field: &Field) {
    ctx.out.summary = Some(Summary {
        assigning_source: field.text_owned('c'),
        text: field.text_owned('a'),
    });
}

fn handle_linking_note(ctx: &mut Context<'_>, field: &Field) {
    let note = field.text_owned('a');
    if ctx.has_preceding {
        ctx.out.preceding.get_or_insert_with(LinkGroup::default).note = note;
    } else if ctx.has_succeeding {
        ctx.out.succeeding.get_or_insert_with(LinkGroup::default).note = note;
    } else if ctx.has_host {
        ctx.out.part_of.get_or_insert_with(HostItem::default).note = note;
    } else {
        tracing::trace!("Dropping 580 note without a 773, 780 or 785 to attach to");
    }
}

fn handle_subject(ctx: &mut Context<'_>, field: &Field) {
    let term = field
        .text('a')
        .map(|a| a.trim_matches('.'))
        .filter(|a| !a.is_empty())
        .map(str::to_string);

    let vocabulary = subject_vocabulary(field.indicator2)
        .map(str::to_string)
        .or_else(|| field.text_owned('2'));

    let subdivisions = Subdivisions {
        topical: field.text('x').map(|x| x.trim_matches('.').to_string()),
        chronological: field.text_owned('y'),
        geographic: field.text_owned('z'),
        form: field.text_owned('v'),
    };

    ctx.out.subjects.push(Subject {
        term,
        vocabulary,
        subdivisions,
    });
}

fn handle_added_entry(ctx: &mut Context<'_>, field: &Field) {
    let role = field.text('4').or_else(|| field.text('e')).unwrap_or("added");
    let mut entry = author(field, role);
    entry.dates = field.text_owned('d');
    ctx.out.authors.push(entry);
}

fn handle_added_corporate(ctx: &mut Context<'_>, field: &Field) {
    ctx.out.authors.push(author(field, "added_corporate"));
}

fn handle_host_item(ctx: &mut Context<'_>, field: &Field) {
    let id = field
        .text('w')
        .and_then(|w| strip_prefix_literal(w, &ctx.local_prefix));
    let host = ctx.out.part_of.get_or_insert_with(HostItem::default);
    host.relationship = field.text_owned('i');
    host.title = field.text_owned('t');
    host.issn = field.text_owned('x');
    host.id = id;
    host.volume = field.text_owned('v');
}

fn handle_other_form(ctx: &mut Context<'_>, field: &Field) {
    ctx.out.other_form = Some(RelationshipItem::from_field(field));
}

fn handle_preceding(ctx: &mut Context<'_>, field: &Field) {
    ctx.out
        .preceding
        .get_or_insert_with(LinkGroup::default)
        .push(RelationshipItem::from_field(field), preceding_relationship(field.indicator2));
}

fn handle_succeeding(ctx: &mut Context<'_>, field: &Field) {
    ctx.out
        .succeeding
        .get_or_insert_with(LinkGroup::default)
        .push(RelationshipItem::from_field(field), succeeding_relationship(field.indicator2));
}

fn handle_series(ctx: &mut Context<'_>, field: &Field) {
    ctx.out.series.push(Series {
        title: field.text_owned('a'),
        id: field
            .text('w')
            .and_then(|w| strip_prefix_literal(w, &ctx.local_prefix)),
        volume: field.text_owned('v'),
    });
}

fn handle_link(ctx: &mut Context<'_>, field: &Field) {
    let Some(label) = field.text('3') else {
        return;
    };

    // A link without $u leaves an earlier URL in place
    let Some(url) = field.text('u') else {
        return;
    };

    if ctx.config.is_cover_image_label(label) {
        ctx.out.cover_image = Some(if ctx.config.upscale_cover_images {
            url.replace("mini", "stor").replace("LITE", "STOR")
        } else {
            url.to_string()
        });
    }
    if ctx.config.is_description_label(label) {
        ctx.out.description = Some(url.to_string());
    }
}

fn handle_series_kind(ctx: &mut Context<'_>, field: &Field) {
    match field.text('a') {
        Some("volumes") => ctx.out.is_multivolume = true,
        Some("parts") => ctx.out.is_series = true,
        other => tracing::trace!("Ignoring 991 value {:?}", other),
    }
}
