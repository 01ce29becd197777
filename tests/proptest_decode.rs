//! Property tests for the decoding core
//!
//! The decoders promise to never panic and to behave as pure functions of
//! their input, whatever a scanner hands them. These properties drive the
//! public API with arbitrary and adversarially GS1-shaped strings.

use gs1_scan::{
    build_authentication_record, convert_dynamic_path_to_gs1, decode,
    split_by_authentication_payload,
};
use proptest::prelude::*;

const SEP: char = '\u{1d}';

/// Arbitrary text mixed from GS1 building blocks, much denser in
/// separators, parens and AI-looking digit runs than plain `.*`.
fn gs1_shaped() -> impl Strategy<Value = String> {
    let fragment = prop_oneof![
        Just(SEP.to_string()),
        Just("(".to_string()),
        Just(")".to_string()),
        Just("97".to_string()),
        Just("98".to_string()),
        Just("01".to_string()),
        Just("]C1".to_string()),
        Just("https://".to_string()),
        "[0-9]{1,8}",
        "[A-Za-z=./?&-]{1,8}",
    ];
    prop::collection::vec(fragment, 0..12).prop_map(|parts| parts.concat())
}

/// Variable-length AIs with letter values, joined by separators. Letters
/// keep the payload unambiguous so the decode result is predictable.
fn separator_stream() -> impl Strategy<Value = Vec<(&'static str, String)>> {
    let pair = (
        prop_oneof![Just("10"), Just("21"), Just("22"), Just("30"), Just("37")],
        "[A-Z]{1,12}",
    );
    prop::collection::vec(pair, 1..5)
}

fn registry_name(ai: &str) -> &'static str {
    match ai {
        "10" => "Batch/Lot Number",
        "21" => "Serial Number",
        "22" => "Consumer Product Variant",
        "30" => "Variable Count",
        "37" => "Count of Trade Items",
        other => panic!("unexpected test AI {other}"),
    }
}

proptest! {
    #[test]
    fn decode_never_panics(payload in ".*") {
        let _ = decode(&payload);
    }

    #[test]
    fn decode_never_panics_on_gs1_shaped_input(payload in gs1_shaped()) {
        let _ = decode(&payload);
        let _ = convert_dynamic_path_to_gs1(&payload);
        let _ = split_by_authentication_payload(&payload);
        let _ = build_authentication_record(&payload);
    }

    #[test]
    fn decode_is_a_pure_function(payload in gs1_shaped()) {
        prop_assert_eq!(decode(&payload), decode(&payload));
        prop_assert_eq!(
            build_authentication_record(&payload),
            build_authentication_record(&payload)
        );
    }

    #[test]
    fn retail_length_digit_payloads_never_decode(payload in "[0-9]{8}|[0-9]{12}|[0-9]{13}|[0-9]{14}") {
        prop_assert!(decode(&payload).is_empty());
    }

    #[test]
    fn split_never_returns_empty_encrypted_text(payload in gs1_shaped()) {
        if let Some(split) = split_by_authentication_payload(&payload) {
            prop_assert!(!split.encrypted_text.is_empty());
        }
    }

    #[test]
    fn record_flags_match_split_presence(payload in gs1_shaped()) {
        let record = build_authentication_record(&payload);
        if record.is_system_generated {
            prop_assert!(!record.encrypted_text.is_empty());
        } else {
            prop_assert_eq!(record.barcode_data.as_str(), payload.as_str());
            prop_assert!(record.encrypted_text.is_empty());
            prop_assert!(record.company_id.is_empty());
        }
    }

    #[test]
    fn separator_streams_round_trip(pairs in separator_stream()) {
        let payload: String = pairs
            .iter()
            .map(|(ai, value)| format!("{ai}{value}"))
            .collect::<Vec<_>>()
            .join(&SEP.to_string());

        let fields = decode(&payload);
        prop_assert_eq!(fields.len(), pairs.len());
        for (field, (ai, value)) in fields.iter().zip(&pairs) {
            prop_assert_eq!(field.ai.as_str(), *ai);
            prop_assert_eq!(field.value.as_str(), value.as_str());
            prop_assert_eq!(field.description.as_str(), registry_name(ai));
        }
    }

    #[test]
    fn no_field_ever_carries_ai_97(payload in gs1_shaped()) {
        // 97 is consumed by the splitter, never surfaced by the plain or
        // bracketed decoders. Only the Digital Link decoder may emit it.
        if !payload.starts_with("http") {
            prop_assert!(decode(&payload).iter().all(|f| f.ai != "97"));
        }
    }
}
