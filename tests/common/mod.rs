//! Common test helpers shared across the integration test suite.

use marc_extract::{marcxml, Record};

/// Wraps MARCXML fields in a `marcxchange` record element of the given type and parses it.
///
/// This is the shape of records exported by the BIBSYS SRU service, with the
/// `marc:` prefix bound to the marcxchange namespace.
pub fn parse_record(record_type: &str, fields: &str) -> Record {
    let xml = format!(
        r#"<marc:record xmlns:marc="info:lc/xmlns/marcxchange-v1" format="MARC21" type="{record_type}">
            {fields}
        </marc:record>"#
    );
    marcxml::marcxml_to_record(&xml).unwrap_or_else(|e| panic!("Failed to parse test record: {e}"))
}

/// Parses a bibliographic test record.
#[allow(dead_code)]
pub fn bibliographic(fields: &str) -> Record {
    parse_record("Bibliographic", fields)
}

/// Parses an authority test record.
#[allow(dead_code)]
pub fn authority(fields: &str) -> Record {
    parse_record("Authority", fields)
}

/// Parses a holdings test record.
#[allow(dead_code)]
pub fn holdings(fields: &str) -> Record {
    parse_record("Holdings", fields)
}

/// Routes extractor logs to the test harness. Set `RUST_LOG=marc_extract=trace` to see them.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
