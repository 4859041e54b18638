//! Navigation trait shared by every record source the extractors can read.
//!
//! The extractors never depend on a concrete tree type. Anything that can hand out
//! its leader, control fields, and data fields in document order can be extracted,
//! so an application holding records in another in-memory form only has to
//! implement [`MarcRecord`].

use crate::leader::Leader;
use crate::record::Field;

/// Read-only navigation over a MARC record.
///
/// Required operations mirror what a MARCXML tree offers: ordered iteration of
/// data fields, control-field text by tag, and the leader. Tag-filtered iteration,
/// first-match lookup, and presence checks are derived from them.
///
/// # Examples
///
/// ```
/// use marc_extract::{Field, MarcRecord, Record};
///
/// fn count_subjects<R: MarcRecord + ?Sized>(record: &R) -> usize {
///     record.fields_by_tag("650").count()
/// }
///
/// let record = Record::builder()
///     .field(Field::builder("650", ' ', '0').subfield_str('a', "Fisk").build())
///     .build();
/// assert_eq!(count_subjects(&record), 1);
/// ```
pub trait MarcRecord {
    /// The record leader, if one was present in the source.
    fn leader(&self) -> Option<&Leader>;

    /// The record type declared by the source container, if any.
    ///
    /// MARCXML exchange records often carry it as `type="Bibliographic"`.
    fn declared_type(&self) -> Option<&str> {
        None
    }

    /// Get the value of a control field (000-009).
    ///
    /// Returns `None` if the field does not exist.
    fn get_control_field(&self, tag: &str) -> Option<&str>;

    /// Iterate over all data fields in document order.
    fn data_fields(&self) -> Box<dyn Iterator<Item = &Field> + '_>;

    /// Iterate over all data fields with a given tag, in document order.
    fn fields_by_tag<'a, 't>(&'a self, tag: &'t str) -> Box<dyn Iterator<Item = &'a Field> + 't>
    where
        'a: 't,
    {
        Box::new(self.data_fields().filter(move |f| f.tag == tag))
    }

    /// Get the first data field with a given tag.
    #[must_use]
    fn get_field(&self, tag: &str) -> Option<&Field> {
        self.fields_by_tag(tag).next()
    }

    /// Whether at least one data field with the given tag exists.
    #[must_use]
    fn has_field(&self, tag: &str) -> bool {
        self.get_field(tag).is_some()
    }

    /// Number of data fields in the record.
    #[must_use]
    fn data_field_count(&self) -> usize {
        self.data_fields().count()
    }
}
