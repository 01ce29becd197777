//! GS1 Digital Link decoder
//!
//! Extracts AI/value pairs from Digital Link URLs, where AIs travel as
//! alternating path segments (`/01/00012345678905/10/ABC123`) and as query
//! parameters (`?17=250101`).

use percent_encoding::percent_decode_str;
use tracing::debug;
use url::Url;

use crate::models::ParsedField;

// AIs recognized in Digital Link position. Deliberately narrower than the
// full registry: only codes that occur in practice as URL components.
const LINK_AI_NAMES: &[(&str, &str)] = &[
    ("00", "SSCC"),
    ("01", "GTIN"),
    ("10", "Batch/Lot Number"),
    ("11", "Production Date"),
    ("15", "Best Before Date"),
    ("17", "Expiration Date"),
    ("21", "Serial Number"),
    ("24", "Additional Product Identification"),
    ("240", "Additional Product Information"),
    ("422", "Country of Origin"),
    ("98", "Internal / Encrypted Data"),
    ("97", "Company Identification"),
];

fn link_ai_name(code: &str) -> Option<&'static str> {
    LINK_AI_NAMES
        .iter()
        .find(|(ai, _)| *ai == code)
        .map(|(_, name)| *name)
}

/// Decoder for GS1 Digital Link URLs.
pub struct DigitalLinkDecoder;

impl DigitalLinkDecoder {
    /// Decode a Digital Link URL into its fields, path pairs first, then
    /// query parameters in order of first appearance.
    ///
    /// Returns nothing when the input is not a parseable URL. Path segments
    /// that are not recognized AIs are stepped over one at a time, so pairs
    /// may start anywhere in the path. Repeated query keys keep their first
    /// value.
    pub fn decode(url_str: &str) -> Vec<ParsedField> {
        let Ok(url) = Url::parse(url_str) else {
            debug!("payload is not a parseable URL");
            return Vec::new();
        };

        let mut fields = Vec::new();

        // path_segments yields segments still percent-encoded; decode them
        // so path values match their query-parameter equivalents
        let segments: Vec<String> = url
            .path_segments()
            .map(|segs| {
                segs.filter(|s| !s.is_empty())
                    .map(|s| percent_decode_str(s).decode_utf8_lossy().into_owned())
                    .collect()
            })
            .unwrap_or_default();

        let mut i = 0;
        while i + 1 < segments.len() {
            let Some(name) = link_ai_name(&segments[i]) else {
                i += 1;
                continue;
            };
            fields.push(ParsedField::new(&segments[i], &segments[i + 1], name));
            i += 2;
        }

        let mut seen: Vec<String> = Vec::new();
        for (key, value) in url.query_pairs() {
            let key: &str = &key;
            if seen.iter().any(|k| k == key) {
                continue;
            }
            seen.push(key.to_string());
            if let Some(name) = link_ai_name(key) {
                fields.push(ParsedField::new(key, &value, name));
            }
        }

        fields
    }
}
