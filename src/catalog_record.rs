//! Typed output records and their attribute-bag view.
//!
//! Every extractor returns a strongly typed record. [`CatalogRecord`] closes over
//! the three of them, and the [`Attributes`] trait exposes any of them as an
//! ordered attribute map or as JSON. Only attributes that are currently set
//! appear in either view; `null` attributes are included.
//!
//! [`extract`] picks the extractor from the record itself; see
//! [`RecordKind::detect`].
//!
//! # Examples
//!
//! ```
//! use marc_extract::{extract, Attributes, RecordKind};
//!
//! # fn main() -> marc_extract::Result<()> {
//! let record = marc_extract::marcxml::marcxml_to_record(
//!     r#"<marc:record xmlns:marc="info:lc/xmlns/marcxchange-v1" type="Holdings">
//!         <marc:controlfield tag="001">h1</marc:controlfield>
//!     </marc:record>"#,
//! )?;
//!
//! let extracted = extract(&record);
//! assert_eq!(extracted.kind(), RecordKind::Holdings);
//! assert_eq!(extracted.to_json()?, r#"{"id":"h1","public_notes":[],"nonpublic_notes":[],"fulltext":[]}"#);
//! # Ok(())
//! # }
//! ```

use crate::authority::{AuthorityExtractor, AuthorityRecord};
use crate::bibliographic::{BibliographicExtractor, BibliographicRecord};
use crate::config::ExtractorConfig;
use crate::error::Result;
use crate::holdings::{HoldingsExtractor, HoldingsRecord};
use crate::marc_record::MarcRecord;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// Ordered attribute name → value map.
pub type AttributeMap = IndexMap<String, Value>;

/// The three record types of the MARC 21 formats handled here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RecordKind {
    /// MARC 21 Format for Bibliographic Data
    Bibliographic,
    /// MARC 21 Format for Authority Data
    Authority,
    /// MARC 21 Format for Holdings Data
    Holdings,
}

impl RecordKind {
    /// Determine the kind of a record.
    ///
    /// A declared container type (`type="Authority"`, case-insensitive) wins;
    /// otherwise leader/06 decides: `z` is authority, `u`, `v`, `x` and `y` are
    /// holdings, anything else (or no leader) is bibliographic.
    ///
    /// # Examples
    ///
    /// ```
    /// use marc_extract::{Leader, Record, RecordKind};
    ///
    /// let record = Record::with_leader(Leader::parse("00000nx  a2200000   4500"));
    /// assert_eq!(RecordKind::detect(&record), RecordKind::Holdings);
    ///
    /// let record = Record::builder().record_type("authority").build();
    /// assert_eq!(RecordKind::detect(&record), RecordKind::Authority);
    /// ```
    pub fn detect<R: MarcRecord + ?Sized>(record: &R) -> Self {
        if let Some(kind) = record.declared_type().and_then(Self::from_declared_type) {
            return kind;
        }
        match record.leader().map(crate::leader::Leader::record_type) {
            Some('z') => RecordKind::Authority,
            Some('u' | 'v' | 'x' | 'y') => RecordKind::Holdings,
            _ => RecordKind::Bibliographic,
        }
    }

    /// Parse a declared record type such as `Bibliographic`.
    #[must_use]
    pub fn from_declared_type(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("bibliographic") {
            Some(RecordKind::Bibliographic)
        } else if value.eq_ignore_ascii_case("authority") {
            Some(RecordKind::Authority)
        } else if value.eq_ignore_ascii_case("holdings") {
            Some(RecordKind::Holdings)
        } else {
            None
        }
    }
}

/// An extracted record of any kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CatalogRecord {
    /// Bibliographic record
    Bibliographic(BibliographicRecord),
    /// Authority record
    Authority(AuthorityRecord),
    /// Holdings record
    Holdings(HoldingsRecord),
}

impl CatalogRecord {
    /// The kind of record held.
    #[must_use]
    pub fn kind(&self) -> RecordKind {
        match self {
            CatalogRecord::Bibliographic(_) => RecordKind::Bibliographic,
            CatalogRecord::Authority(_) => RecordKind::Authority,
            CatalogRecord::Holdings(_) => RecordKind::Holdings,
        }
    }

    /// The control number of the record, if any.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        match self {
            CatalogRecord::Bibliographic(r) => r.id.as_deref(),
            CatalogRecord::Authority(r) => r.id.as_deref(),
            CatalogRecord::Holdings(r) => r.id.as_deref(),
        }
    }

    /// The bibliographic record, if this is one.
    #[must_use]
    pub fn as_bibliographic(&self) -> Option<&BibliographicRecord> {
        match self {
            CatalogRecord::Bibliographic(r) => Some(r),
            _ => None,
        }
    }

    /// The authority record, if this is one.
    #[must_use]
    pub fn as_authority(&self) -> Option<&AuthorityRecord> {
        match self {
            CatalogRecord::Authority(r) => Some(r),
            _ => None,
        }
    }

    /// The holdings record, if this is one.
    #[must_use]
    pub fn as_holdings(&self) -> Option<&HoldingsRecord> {
        match self {
            CatalogRecord::Holdings(r) => Some(r),
            _ => None,
        }
    }
}

impl From<BibliographicRecord> for CatalogRecord {
    fn from(record: BibliographicRecord) -> Self {
        CatalogRecord::Bibliographic(record)
    }
}

impl From<AuthorityRecord> for CatalogRecord {
    fn from(record: AuthorityRecord) -> Self {
        CatalogRecord::Authority(record)
    }
}

impl From<HoldingsRecord> for CatalogRecord {
    fn from(record: HoldingsRecord) -> Self {
        CatalogRecord::Holdings(record)
    }
}

/// Attribute-bag view of an extracted record.
///
/// The view is a snapshot of the attributes that are set, in declaration
/// order, with nested sequences and mappings as JSON values.
pub trait Attributes: Serialize {
    /// The set attributes as an ordered map.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MarcError::Json`] if the record cannot be serialized.
    fn to_array(&self) -> Result<AttributeMap> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map.into_iter().collect()),
            _ => Ok(AttributeMap::new()),
        }
    }

    /// Compact JSON serialization.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MarcError::Json`] if the record cannot be serialized.
    fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Pretty-printed JSON serialization.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MarcError::Json`] if the record cannot be serialized.
    fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Value of one attribute, `None` when it is not set.
    fn attribute(&self, name: &str) -> Option<Value> {
        self.to_array().ok()?.shift_remove(name)
    }

    /// Whether an attribute is set (possibly to `null`).
    fn has_attribute(&self, name: &str) -> bool {
        self.to_array().is_ok_and(|map| map.contains_key(name))
    }
}

impl Attributes for BibliographicRecord {}
impl Attributes for AuthorityRecord {}
impl Attributes for HoldingsRecord {}
impl Attributes for CatalogRecord {}

/// Extractor for records of any kind, sharing one configuration.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    bibliographic: BibliographicExtractor,
    authority: AuthorityExtractor,
    holdings: HoldingsExtractor,
}

impl Extractor {
    /// Create an extractor with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor with a custom configuration.
    #[must_use]
    pub fn with_config(config: ExtractorConfig) -> Self {
        Extractor {
            bibliographic: BibliographicExtractor::with_config(config),
            authority: AuthorityExtractor::new(),
            holdings: HoldingsExtractor::new(),
        }
    }

    /// Extract a record, choosing the extractor with [`RecordKind::detect`].
    pub fn extract<R: MarcRecord + ?Sized>(&self, record: &R) -> CatalogRecord {
        self.extract_as(record, RecordKind::detect(record))
    }

    /// Extract a record as the given kind, whatever it declares.
    pub fn extract_as<R: MarcRecord + ?Sized>(&self, record: &R, kind: RecordKind) -> CatalogRecord {
        match kind {
            RecordKind::Bibliographic => self.bibliographic.extract(record).into(),
            RecordKind::Authority => self.authority.extract(record).into(),
            RecordKind::Holdings => self.holdings.extract(record).into(),
        }
    }
}

/// Extract a record of any kind with the default configuration.
pub fn extract<R: MarcRecord + ?Sized>(record: &R) -> CatalogRecord {
    Extractor::new().extract(record)
}
