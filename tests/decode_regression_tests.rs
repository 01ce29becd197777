//! End-to-end regression tests for GS1 payload decoding
//!
//! These drive the public API the way scanning frontends do: raw scanned
//! payload in, parsed fields and authentication data out. They protect the
//! decoder selection rules, the separator/lookahead boundary logic and the
//! authentication split strategies.

use gs1_scan::{
    ParsedField, build_authentication_record, convert_dynamic_path_to_gs1, decode,
    split_by_authentication_payload,
};

const SEP: char = '\u{1d}';

fn field(ai: &str, value: &str, description: &str) -> ParsedField {
    ParsedField::new(ai, value, description)
}

fn reference_fields() -> Vec<ParsedField> {
    vec![
        field("01", "00012345678905", "GTIN"),
        field("17", "250101", "Expiration Date"),
        field("10", "ABC123", "Batch/Lot Number"),
    ]
}

#[test]
fn test_retail_symbols_decode_to_nothing() {
    // EAN-8, UPC-A, EAN-13, ITF-14: pure digit payloads at retail lengths
    // are never AI data, even when a prefix looks like one.
    for payload in ["01234565", "036000291452", "4006381333931", "10614141543219"] {
        assert!(
            decode(payload).is_empty(),
            "retail symbol {payload} must not decode as AI data"
        );
    }
}

#[test]
fn test_bracketed_round_trip() {
    assert_eq!(
        decode("(01)00012345678905(17)250101(10)ABC123"),
        reference_fields()
    );
}

#[test]
fn test_separator_stream_matches_bracketed() {
    let stream = format!("010001234567890517250101{SEP}10ABC123");
    assert_eq!(decode(&stream), reference_fields());
}

#[test]
fn test_symbology_identifier_is_stripped() {
    let stream = format!("]C1010001234567890517250101{SEP}10ABC123");
    assert_eq!(decode(&stream), reference_fields());
    assert_eq!(
        decode("]Q3(01)00012345678905(17)250101(10)ABC123"),
        reference_fields()
    );
}

#[test]
fn test_monetary_field_stops_at_next_ai() {
    // 3901 is variable length; in a separator-free stream its value must
    // end exactly where the next detectable AI starts.
    assert_eq!(
        decode("390105050112345678901234"),
        vec![
            field("3901", "0505", "AI 3901"),
            field("01", "12345678901234", "GTIN"),
        ]
    );
}

#[test]
fn test_unknown_ai_fallback_descriptions() {
    // The plain decoder names range-detected codes "AI <code>", the
    // bracketed decoder falls back to "Unknown AI".
    let plain = decode(&format!("3204001122{SEP}10LOT7"));
    assert_eq!(plain[0], field("3204", "001122", "AI 3204"));

    let bracketed = decode("(45)NOT-REGISTERED");
    assert_eq!(bracketed, vec![field("45", "NOT-REGISTERED", "Unknown AI")]);
}

#[test]
fn test_truncated_fixed_field_is_dropped() {
    // AI 01 needs 14 characters; a short tail ends the parse cleanly.
    let stream = format!("10ABC{SEP}01123");
    assert_eq!(decode(&stream), vec![field("10", "ABC", "Batch/Lot Number")]);
}

#[test]
fn test_decode_is_idempotent() {
    let payloads = [
        "(01)00012345678905(17)250101(10)ABC123".to_string(),
        format!("010001234567890517250101{SEP}10ABC123"),
        "390105050112345678901234".to_string(),
        "https://example.com/01/00012345678905/10/ABC123?17=250101".to_string(),
        "complete garbage \u{7f} input".to_string(),
    ];
    for payload in &payloads {
        assert_eq!(decode(payload), decode(payload), "decode must be pure");
    }
}

#[test]
fn test_authentication_split_reference_vector() {
    let split =
        split_by_authentication_payload("(01)00012345678905(98)vZOyDiK4CHPA=(97)91000001")
            .expect("payload carries AI 98");
    assert_eq!(split.barcode_data, "0100012345678905");
    assert_eq!(split.encrypted_text, "vZOyDiK4CHPA=");
    assert_eq!(split.company_id, "91000001");
}

#[test]
fn test_flattened_split_requires_company_marker() {
    // Raw flattened payloads anchor on the last "97"; a lone 98 payload
    // does not split.
    assert_eq!(split_by_authentication_payload("98XYZ"), None);
    assert_eq!(
        split_by_authentication_payload("010001234567890598vZOyDiK4CHPA="),
        None
    );
}

#[test]
fn test_digital_link_path_then_query_order() {
    assert_eq!(
        decode("https://example.com/01/00012345678905/10/ABC123?17=250101"),
        vec![
            field("01", "00012345678905", "GTIN"),
            field("10", "ABC123", "Batch/Lot Number"),
            field("17", "250101", "Expiration Date"),
        ]
    );
}

#[test]
fn test_digital_link_escaped_path_value() {
    // escapes decode identically whether the value rides in the path or
    // the query string
    assert_eq!(
        decode("https://example.com/01/00012345678905/21/AB%2FCD"),
        vec![
            field("01", "00012345678905", "GTIN"),
            field("21", "AB/CD", "Serial Number"),
        ]
    );
    assert_eq!(
        decode("https://example.com/01/00012345678905?21=AB%2FCD"),
        vec![
            field("01", "00012345678905", "GTIN"),
            field("21", "AB/CD", "Serial Number"),
        ]
    );
}

#[test]
fn test_measurement_family_matches_on_three_digit_prefix() {
    // the fourth character of a 310x-369x code is the decimal indicator
    // slot and is not validated
    assert_eq!(
        decode("310a123456"),
        vec![field("310a", "123456", "AI 310a")]
    );
}

#[test]
fn test_digital_link_canonical_form() {
    let conversion =
        convert_dynamic_path_to_gs1("HTTPS://Example.com/01/00012345678905/10/ABC123?17=250101");
    assert_eq!(
        conversion.original_without_ai98,
        "HTTPSExamplecom010001234567890510ABC12317250101"
    );
    assert_eq!(
        conversion.flattened_with_ai98,
        "httpsExamplecom010001234567890510ABC12317250101"
    );
}

#[test]
fn test_unparseable_payload_canonical_sentinel() {
    let conversion = convert_dynamic_path_to_gs1("complete garbage input");
    assert!(conversion.is_invalid());
    assert_eq!(conversion.original_without_ai98, "Invalid input");
    assert_eq!(conversion.flattened_with_ai98, "Invalid input");
}

#[test]
fn test_record_from_system_generated_payload() {
    let record = build_authentication_record("(01)00012345678905(98)vZOyDiK4CHPA=(97)91000001");
    assert!(record.is_system_generated);
    assert_eq!(record.barcode_data, "0100012345678905");
    assert_eq!(record.encrypted_text, "vZOyDiK4CHPA=");
    assert_eq!(record.company_id, "91000001");
    // AI 97 never surfaces as a generic field
    assert!(record.fields.iter().all(|f| f.ai != "97"));
}

#[test]
fn test_record_from_digital_link_with_embedded_payload() {
    let record = build_authentication_record(
        "https://example.com/01/00012345678905/98/vZOyDiK4CHPA=?97=91000001",
    );
    assert!(record.is_system_generated);
    assert_eq!(record.encrypted_text, "vZOyDiK4CHPA=");
    assert_eq!(record.company_id, "91000001");
    // splitting runs on the canonical form, so the identity keeps the
    // fused scheme and host
    assert_eq!(record.barcode_data, "httpsexamplecom0100012345678905");
}

#[test]
fn test_record_from_ordinary_payload_is_not_system_generated() {
    let record = build_authentication_record("(01)00012345678905(10)ABC123");
    assert!(!record.is_system_generated);
    assert_eq!(record.barcode_data, "(01)00012345678905(10)ABC123");
    assert_eq!(record.encrypted_text, "");
    assert_eq!(record.company_id, "");
    assert_eq!(record.fields.len(), 2);
}
