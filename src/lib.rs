#![warn(missing_docs)]

//! # marc-extract
//!
//! Extracts normalized, semantically typed records from MARC 21 bibliographic,
//! authority and holdings records.
//!
//! MARC 21 spreads a single fact over tags, indicators and subfield codes; a
//! catalog application wants "the title", "the ISBNs", "the subjects and their
//! vocabulary". This crate walks a record's data fields once, in document order,
//! and maps each recognized tag into a typed record:
//!
//! - [`BibliographicExtractor`] → [`BibliographicRecord`]
//! - [`AuthorityExtractor`] → [`AuthorityRecord`]
//! - [`HoldingsExtractor`] → [`HoldingsRecord`]
//!
//! Extraction never fails. Missing subfields leave an attribute absent or
//! `null`, unparseable dates and numbers become `null`, and unknown tags are
//! skipped. Only reading MARCXML can return an error.
//!
//! ## Quick Start
//!
//! ```
//! use marc_extract::{marcxml, Attributes, BibliographicExtractor};
//!
//! # fn main() -> marc_extract::Result<()> {
//! let record = marcxml::marcxml_to_record(
//!     r#"<marc:record xmlns:marc="info:lc/xmlns/marcxchange-v1" format="MARC21" type="Bibliographic">
//!         <marc:controlfield tag="001">12149361x</marc:controlfield>
//!         <marc:datafield tag="260" ind1=" " ind2=" ">
//!             <marc:subfield code="b">Cappelen</marc:subfield>
//!             <marc:subfield code="c">2009 [i.e. 2008]</marc:subfield>
//!         </marc:datafield>
//!     </marc:record>"#,
//! )?;
//!
//! let bib = BibliographicExtractor::new().extract(&record);
//! assert_eq!(bib.year, Some(Some(2009)));
//! assert_eq!(bib.attribute("publisher"), Some(serde_json::json!("Cappelen")));
//! # Ok(())
//! # }
//! ```
//!
//! ## Mixed input
//!
//! [`extract`] detects the kind of record from its declared type or leader, and
//! [`batch::extract_batch_parallel`] does the same for many records on Rayon's
//! thread pool.
//!
//! ## Configuration
//!
//! The few catalog-specific literals the rules depend on (local agency code,
//! link labels, electronic-resource markers) live in [`ExtractorConfig`]. The
//! defaults follow BIBSYS conventions.

pub mod authority;
pub mod batch;
pub mod bibliographic;
pub mod catalog_record;
pub mod config;
pub mod dates;
pub mod error;
pub mod holdings;
pub mod leader;
pub mod marc_record;
pub mod marcxml;
/// Core MARC record structures (`Record`, `Field`, `Subfield`)
pub mod record;
pub mod relationship;
pub mod vocabularies;

pub use authority::{AuthorityExtractor, AuthorityRecord, EntityClass, Gender};
pub use bibliographic::{
    Author, BibliographicExtractor, BibliographicRecord, Classification, Material, Series,
    Subdivisions, Subject, Summary,
};
pub use catalog_record::{extract, AttributeMap, Attributes, CatalogRecord, Extractor, RecordKind};
pub use config::ExtractorConfig;
pub use error::{MarcError, Result};
pub use holdings::{FulltextLink, HoldingsExtractor, HoldingsRecord};
pub use leader::Leader;
pub use marc_record::MarcRecord;
pub use record::{Field, FieldBuilder, Record, RecordBuilder, Subfield};
pub use relationship::{HostItem, LinkGroup, RelationshipItem};
