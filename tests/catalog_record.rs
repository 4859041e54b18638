//! Integration tests for record-kind detection, the mixed extractor and batch extraction.

mod common;

use common::parse_record;
use marc_extract::batch::{extract_batch_parallel, extract_marcxml_collection};
use marc_extract::{
    extract, marcxml, Attributes, CatalogRecord, Extractor, ExtractorConfig, MarcError, RecordKind,
};

#[test]
fn test_declared_type_selects_extractor() {
    let record = parse_record(
        "Authority",
        r#"<marc:controlfield tag="001">x90531735</marc:controlfield>
        <marc:datafield tag="100" ind1="1" ind2=" ">
            <marc:subfield code="a">Bakke, Dagfinn</marc:subfield>
        </marc:datafield>"#,
    );
    let out = extract(&record);
    assert_eq!(out.kind(), RecordKind::Authority);
    assert_eq!(out.id(), Some("x90531735"));
    assert_eq!(
        out.as_authority().and_then(|a| a.label.as_deref()),
        Some("Dagfinn Bakke")
    );
}

#[test]
fn test_leader_selects_extractor_without_declared_type() {
    let record = marcxml::marcxml_to_record(
        r#"<record xmlns="http://www.loc.gov/MARC21/slim">
            <leader>00000nx  a2200000   4500</leader>
            <controlfield tag="001">h1</controlfield>
            <datafield tag="852" ind1=" " ind2=" ">
                <subfield code="a">UBO</subfield>
            </datafield>
        </record>"#,
    )
    .unwrap();
    let out = extract(&record);
    assert_eq!(out.kind(), RecordKind::Holdings);
    assert_eq!(
        out.as_holdings().and_then(|h| h.location.as_deref()),
        Some("UBO")
    );
}

#[test]
fn test_extract_as_overrides_detection() {
    let record = parse_record(
        "Bibliographic",
        r#"<marc:datafield tag="852" ind1=" " ind2=" ">
            <marc:subfield code="a">UBO</marc:subfield>
        </marc:datafield>"#,
    );
    let extractor = Extractor::new();
    assert_eq!(extractor.extract(&record).kind(), RecordKind::Bibliographic);
    let holdings = extractor.extract_as(&record, RecordKind::Holdings);
    assert!(matches!(holdings, CatalogRecord::Holdings(ref h) if h.location.as_deref() == Some("UBO")));
}

#[test]
fn test_catalog_record_json_is_untagged() {
    let record = parse_record(
        "Holdings",
        r#"<marc:controlfield tag="001">h1</marc:controlfield>"#,
    );
    let out = extract(&record);
    assert_eq!(
        out.to_json().unwrap(),
        r#"{"id":"h1","public_notes":[],"nonpublic_notes":[],"fulltext":[]}"#
    );
    assert!(out.to_json_pretty().unwrap().contains("\n  \"id\": \"h1\""));
}

#[test]
fn test_custom_local_agency() {
    let record = parse_record(
        "Bibliographic",
        r#"<marc:datafield tag="830" ind1=" " ind2="0">
            <marc:subfield code="a">Skrifter</marc:subfield>
            <marc:subfield code="w">(SE-LIBR)12345</marc:subfield>
        </marc:datafield>"#,
    );

    let default = extract(&record);
    assert_eq!(
        default.as_bibliographic().and_then(|b| b.series[0].id.as_deref()),
        Some("(SE-LIBR)12345")
    );

    let extractor = Extractor::with_config(ExtractorConfig::new().with_local_agency("SE-LIBR"));
    let custom = extractor.extract(&record);
    assert_eq!(
        custom.as_bibliographic().and_then(|b| b.series[0].id.as_deref()),
        Some("12345")
    );
}

#[test]
fn test_collection_extraction_in_document_order() {
    let xml = r#"<marc:collection xmlns:marc="http://www.loc.gov/MARC21/slim">
        <marc:record type="Bibliographic">
            <marc:controlfield tag="001">b1</marc:controlfield>
        </marc:record>
        <marc:record type="Authority">
            <marc:controlfield tag="001">a1</marc:controlfield>
        </marc:record>
        <marc:record type="Holdings">
            <marc:controlfield tag="001">h1</marc:controlfield>
        </marc:record>
    </marc:collection>"#;

    let out = extract_marcxml_collection(xml, &ExtractorConfig::default()).unwrap();
    let ids: Vec<Option<&str>> = out.iter().map(CatalogRecord::id).collect();
    assert_eq!(ids, vec![Some("b1"), Some("a1"), Some("h1")]);
    let kinds: Vec<RecordKind> = out.iter().map(CatalogRecord::kind).collect();
    assert_eq!(
        kinds,
        vec![RecordKind::Bibliographic, RecordKind::Authority, RecordKind::Holdings]
    );
}

#[test]
fn test_parallel_matches_sequential() {
    let records: Vec<_> = (0..32)
        .map(|i| {
            parse_record(
                "Bibliographic",
                &format!(
                    r#"<marc:controlfield tag="001">{i}</marc:controlfield>
                    <marc:datafield tag="020" ind1=" " ind2=" ">
                        <marc:subfield code="a">82-00-{i:05} (ib.)</marc:subfield>
                    </marc:datafield>"#
                ),
            )
        })
        .collect();

    let parallel = extract_batch_parallel(&records, &ExtractorConfig::default());
    let sequential: Vec<CatalogRecord> = records.iter().map(|r| extract(r)).collect();
    assert_eq!(parallel, sequential);
}

#[test]
fn test_malformed_marcxml_is_reported() {
    let result = marcxml::marcxml_to_record("<marc:record><marc:datafield tag=\"245\">");
    assert!(matches!(result, Err(MarcError::ParseError(_))));
}
