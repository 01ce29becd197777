//! Bracketed notation decoder
//!
//! Handles the human-readable `(AI)value` form, the way payloads are printed
//! under barcodes and keyed in by hand.

use tracing::debug;

use crate::decoder::registry;
use crate::models::ParsedField;

/// Decoder for `(AI)value` payloads.
pub struct BracketedDecoder;

impl BracketedDecoder {
    /// Decode `(AI)value` groups in input order.
    ///
    /// A group is an opening paren, 2 to 4 digits, a closing paren and at
    /// least one value character before the next opening paren. Values may
    /// contain closing parens. Anything that fails to match is skipped one
    /// character at a time.
    pub fn decode(payload: &str) -> Vec<ParsedField> {
        let chars: Vec<char> = payload.chars().collect();
        let mut fields = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            if chars[i] != '(' {
                i += 1;
                continue;
            }

            let digits_start = i + 1;
            let mut d = digits_start;
            while d < chars.len() && chars[d].is_ascii_digit() {
                d += 1;
            }
            if !(2..=4).contains(&(d - digits_start)) || chars.get(d) != Some(&')') {
                i += 1;
                continue;
            }

            let value_start = d + 1;
            let mut v = value_start;
            while v < chars.len() && chars[v] != '(' {
                v += 1;
            }
            if v == value_start {
                i += 1;
                continue;
            }

            let code: String = chars[digits_start..d].iter().collect();
            let value: String = chars[value_start..v].iter().collect();
            push_field(&mut fields, &code, &value);
            i = v;
        }

        fields
    }
}

fn push_field(fields: &mut Vec<ParsedField>, code: &str, value: &str) {
    match registry::lookup(code) {
        Some(descriptor) if descriptor.ignored_in_output => {
            debug!(ai = code, "dropping verification-only field");
        }
        Some(descriptor) => fields.push(ParsedField::new(code, value, descriptor.name)),
        None => fields.push(ParsedField::new(code, value, "Unknown AI")),
    }
}
