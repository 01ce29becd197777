//! Canonical conversion of scanned payloads into flattened GS1 strings
//!
//! Authentication backends compare payloads in a canonical form: scheme and
//! host fused without dots, AI/value pairs concatenated, and the AI 98
//! payload moved to the end. Two variants are produced that differ only in
//! scheme case, one preserving the input exactly and one lowercased.

use percent_encoding::percent_decode_str;
use tracing::warn;
use url::Url;

use crate::models::CanonicalConversion;

/// Convert a scanned payload into canonical GS1 form.
///
/// Payloads carrying both parens are treated as bracketed GS1, everything
/// else as a URL. An unparseable URL yields the invalid sentinel.
pub fn convert_dynamic_path_to_gs1(input: &str) -> CanonicalConversion {
    if input.contains('(') && input.contains(')') {
        convert_bracketed(input)
    } else {
        convert_url(input)
    }
}

fn convert_url(input: &str) -> CanonicalConversion {
    let Ok(url) = Url::parse(input) else {
        warn!("canonical conversion failed, input is not a URL");
        return CanonicalConversion::invalid();
    };

    // First value of query key 98, kept aside and appended last.
    let value_98 = url
        .query_pairs()
        .find(|(key, _)| key == "98")
        .map(|(_, value)| value.into_owned());

    let mut body = String::new();

    if let Some(host) = raw_host(input) {
        body.push_str(&host.replace('.', ""));
    }

    if let Some(segments) = url.path_segments() {
        // segments arrive percent-encoded; canonical form carries the
        // decoded text, same as query values
        for segment in segments.filter(|s| !s.is_empty()) {
            push_stripped(&mut body, &percent_decode_str(segment).decode_utf8_lossy());
        }
    }

    let mut seen: Vec<String> = Vec::new();
    for (key, value) in url.query_pairs() {
        let key: &str = &key;
        if key == "98" || seen.iter().any(|k| k == key) {
            continue;
        }
        seen.push(key.to_string());
        body.push_str(key);
        push_stripped(&mut body, &value);
    }

    if let Some(value) = &value_98 {
        body.push_str("98");
        body.push_str(value);
    }

    let scheme: String = input
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .collect();

    CanonicalConversion {
        original_without_ai98: format!("{scheme}{body}"),
        flattened_with_ai98: format!("{}{}", scheme.to_lowercase(), body),
    }
}

fn convert_bracketed(input: &str) -> CanonicalConversion {
    let prefix = bracketed_prefix(input).unwrap_or_default();

    let mut original = prefix;
    let mut flattened = String::new();

    for (code, value) in bracketed_pairs(input) {
        original.push_str(&code);
        original.push_str(&value);
        flattened.push_str(&code);
        flattened.push_str(&value);
    }

    CanonicalConversion {
        original_without_ai98: original,
        flattened_with_ai98: flattened,
    }
}

/// Scheme and dot-stripped remainder up to the first paren, for payloads
/// that mix a URL prefix with bracketed pairs.
fn bracketed_prefix(input: &str) -> Option<String> {
    let scheme_len = input
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .count();
    if scheme_len == 0 {
        return None;
    }
    let rest = input[scheme_len..].strip_prefix("://")?;
    let body = &rest[..rest.find(['(', ')']).unwrap_or(rest.len())];
    if body.is_empty() {
        return None;
    }
    Some(format!("{}{}", &input[..scheme_len], body.replace('.', "")))
}

/// `(AI)value` pairs where values stop at either paren.
fn bracketed_pairs(input: &str) -> Vec<(String, String)> {
    let chars: Vec<char> = input.chars().collect();
    let mut pairs = Vec::new();
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
        while v < chars.len() && chars[v] != '(' && chars[v] != ')' {
            v += 1;
        }
        if v == value_start {
            i += 1;
            continue;
        }

        pairs.push((
            chars[digits_start..d].iter().collect(),
            chars[value_start..v].iter().collect(),
        ));
        i = v;
    }

    pairs
}

/// Host sliced out of the raw input, case preserved.
///
/// `Url` normalizes hosts to lowercase, but the canonical form keeps the
/// host exactly as scanned, so the authority is cut out by hand.
fn raw_host(input: &str) -> Option<&str> {
    let (_, after_scheme) = input.split_once("://")?;
    let end = after_scheme
        .find(['/', '?', '#'])
        .unwrap_or(after_scheme.len());
    let mut authority = &after_scheme[..end];
    if let Some(at) = authority.rfind('@') {
        authority = &authority[at + 1..];
    }
    if let Some(colon) = authority.rfind(':') {
        if authority[colon + 1..].bytes().all(|b| b.is_ascii_digit()) {
            authority = &authority[..colon];
        }
    }
    if authority.is_empty() {
        None
    } else {
        Some(authority)
    }
}

fn push_stripped(out: &mut String, raw: &str) {
    out.extend(raw.chars().filter(|&c| c != ':' && c != '-'));
}
