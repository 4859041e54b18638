//! Fixed code tables used by the extractors.
//!
//! Each table maps a single MARC code character (an indicator or a fixed
//! position of control field 008) to a display value. Codes outside a table
//! resolve to `None` and the caller falls back to another source or leaves the
//! attribute unset.
//!
//! References:
//! - 650 second indicator: <https://www.loc.gov/marc/bibliographic/bd650.html>
//! - 008/10 and 008/11 (authority): <https://www.loc.gov/marc/authority/ad008.html>
//! - 780/785 second indicator: <https://www.loc.gov/marc/bibliographic/bd780.html>

/// Subject heading systems selected by the second indicator of 6XX fields.
///
/// Indicator 4 (source not specified) and 7 (source in `$2`) are deliberately
/// missing; the extractor reads `$2` for those.
pub const SUBJECT_VOCABULARIES: &[(char, &str)] = &[
    ('0', "lcsh"),
    ('1', "lccsh"),
    ('2', "mesh"),
    ('3', "atg"),
    ('5', "cash"),
    ('6', "rvm"),
];

/// Descriptive cataloging rules, authority 008/10.
pub const CATALOGING_RULES: &[(char, &str)] = &[
    ('a', "Earlier rules"),
    ('b', "AACR 1"),
    ('c', "AACR 2"),
    ('d', "AACR 2 compatible"),
    ('z', "Other"),
];

/// Subject heading systems, authority 008/11.
pub const AUTHORITY_VOCABULARIES: &[(char, &str)] = &[
    ('a', "lcsh"),
    ('b', "lccsh"),
    ('c', "mesh"),
    ('d', "atg"),
    ('k', "cash"),
    ('r', "aat"),
    ('s', "sears"),
    ('v', "rvm"),
];

/// Preceding entry relationships, 780 second indicator.
pub const PRECEDING_RELATIONSHIPS: &[(char, &str)] = &[
    ('0', "Continues"),
    ('1', "Continues in part"),
    ('2', "Supersedes"),
    ('3', "Supersedes in part"),
    ('4', "Formed by the union of"),
    ('5', "Absorbed"),
    ('6', "Absorbed in part"),
    ('7', "Separated from"),
];

/// Succeeding entry relationships, 785 second indicator.
pub const SUCCEEDING_RELATIONSHIPS: &[(char, &str)] = &[
    ('0', "Continued by"),
    ('1', "Continued in part by"),
    ('2', "Superseded by"),
    ('3', "Superseded in part by"),
    ('4', "Absorbed by"),
    ('5', "Absorbed in part by"),
    ('6', "Split into"),
    ('7', "Merged with"),
    ('8', "Changed back to"),
];

fn lookup(table: &'static [(char, &'static str)], code: char) -> Option<&'static str> {
    table
        .iter()
        .find_map(|&(c, value)| (c == code).then_some(value))
}

/// Subject vocabulary for a 650 second indicator.
///
/// # Examples
///
/// ```
/// use marc_extract::vocabularies::subject_vocabulary;
///
/// assert_eq!(subject_vocabulary('0'), Some("lcsh"));
/// assert_eq!(subject_vocabulary('7'), None);
/// ```
#[must_use]
pub fn subject_vocabulary(ind2: char) -> Option<&'static str> {
    lookup(SUBJECT_VOCABULARIES, ind2)
}

/// Cataloging rules for an authority 008/10 code.
#[must_use]
pub fn cataloging_rules(code: char) -> Option<&'static str> {
    lookup(CATALOGING_RULES, code)
}

/// Subject vocabulary for an authority 008/11 code.
#[must_use]
pub fn authority_vocabulary(code: char) -> Option<&'static str> {
    lookup(AUTHORITY_VOCABULARIES, code)
}

/// Relationship label for a 780 second indicator.
#[must_use]
pub fn preceding_relationship(ind2: char) -> Option<&'static str> {
    lookup(PRECEDING_RELATIONSHIPS, ind2)
}

/// Relationship label for a 785 second indicator.
#[must_use]
pub fn succeeding_relationship(ind2: char) -> Option<&'static str> {
    lookup(SUCCEEDING_RELATIONSHIPS, ind2)
}
