//! Linking entry (76X-78X) extraction.
//!
//! Linking fields point from one record to another: the preceding and
//! succeeding titles of a serial (780/785), another physical form of the same
//! work (776), or a host item (773). [`RelationshipItem`] is the common shape of
//! one link; [`LinkGroup`] collects the repeatable 780/785 occurrences together
//! with their shared relationship label and note; [`HostItem`] is the
//! single-valued 773 link.

use crate::record::Field;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    /// Any parenthesized run, e.g. the `(NO-TrBIB)` agency prefix of `$w`.
    static ref PARENTHESIZED: Regex = Regex::new(r"\(.*?\)").unwrap();
}

/// One linked record, as described by a linking entry field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RelationshipItem {
    /// Record control number of the related item (`$w`, agency prefixes removed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Title (`$t`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Related parts, e.g. the issue the relation starts at (`$g`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_parts: Option<String>,
    /// ISSN (`$x`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issn: Option<String>,
    /// ISBN (`$z`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
}

impl RelationshipItem {
    /// Build a relationship item from a linking entry field.
    ///
    /// Subfields `w`, `t`, `g`, `x` and `z` become `id`, `title`,
    /// `related_parts`, `issn` and `isbn`. Every parenthesized run is removed
    /// from `$w` whatever agency it names. Empty values are left unset.
    ///
    /// # Examples
    ///
    /// ```
    /// use marc_extract::{Field, RelationshipItem};
    ///
    /// let field = Field::builder("780", '0', '0')
    ///     .subfield_str('w', "(NO-TrBIB)920713874")
    ///     .subfield_str('g', "nr 80(1961)")
    ///     .build();
    /// let item = RelationshipItem::from_field(&field);
    /// assert_eq!(item.id.as_deref(), Some("920713874"));
    /// assert_eq!(item.related_parts.as_deref(), Some("nr 80(1961)"));
    /// assert!(item.title.is_none());
    /// ```
    #[must_use]
    pub fn from_field(field: &Field) -> Self {
        let id = field
            .text('w')
            .map(|w| PARENTHESIZED.replace_all(w, "").into_owned())
            .filter(|w| !w.is_empty());

        RelationshipItem {
            id,
            title: field.text_owned('t'),
            related_parts: field.text_owned('g'),
            issn: field.text_owned('x'),
            isbn: field.text_owned('z'),
        }
    }
}

/// Repeatable linking entries (780 or 785) grouped under one relationship.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LinkGroup {
    /// Relationship label derived from the second indicator.
    ///
    /// When occurrences disagree, the last one with a known indicator wins.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship_type: Option<String>,
    /// Complex linking note (580)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Linked items in document order
    pub items: Vec<RelationshipItem>,
}

impl LinkGroup {
    /// Append one occurrence, updating the relationship label if `relationship` is known.
    pub fn push(&mut self, item: RelationshipItem, relationship: Option<&str>) {
        self.items.push(item);
        if let Some(relationship) = relationship {
            self.relationship_type = Some(relationship.to_string());
        }
    }
}

/// Host item entry (773): the record this one is a part of.
///
/// All attributes except `note` are emitted, `null` when the subfield is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HostItem {
    /// Relationship information (`$i`)
    pub relationship: Option<String>,
    /// Title of the host (`$t`)
    pub title: Option<String>,
    /// ISSN of the host (`$x`)
    pub issn: Option<String>,
    /// Control number of the host (`$w`, local agency prefix removed)
    pub id: Option<String>,
    /// Volume within the host (`$v`)
    pub volume: Option<String>,
    /// Complex linking note (580)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
