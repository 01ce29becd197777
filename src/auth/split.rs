//! Payload splitting around the authentication AIs 98 and 97
//!
//! Authentication payloads embed an encrypted blob under AI 98 and a company
//! id under AI 97. The splitter recovers both plus the remaining barcode
//! data, picking a strategy from the shape of the input. A split without
//! encrypted text is no split at all, so those return `None`.

use tracing::trace;

use crate::decoder::preprocess::FIELD_SEPARATOR;
use crate::models::AuthenticationSplit;

/// Split a payload into barcode data, encrypted text and company id.
///
/// Strategy is chosen by shape: payloads containing `(98)` split on
/// bracketed markers, payloads containing the separator split on tokens,
/// anything else is treated as a flattened stream and split on the last
/// occurrences of `97` and `98`.
pub fn split_by_authentication_payload(payload: &str) -> Option<AuthenticationSplit> {
    let split = if payload.contains("(98)") {
        split_bracketed(payload)
    } else if payload.contains(FIELD_SEPARATOR) {
        split_separated(payload)
    } else {
        split_flattened(payload)
    };
    if let Some(found) = &split {
        trace!(company_id = %found.company_id, "authentication payload split");
    }
    split
}

fn split_bracketed(payload: &str) -> Option<AuthenticationSplit> {
    let idx_98 = payload.find("(98)")?;
    let barcode_data = &payload[..idx_98];

    let after_98 = &payload[idx_98 + 4..];
    let (encrypted, company) = match after_98.find("(97)") {
        Some(idx_97) => (&after_98[..idx_97], &after_98[idx_97 + 4..]),
        None => (after_98, ""),
    };

    let encrypted_text = strip_parens(encrypted);
    if encrypted_text.is_empty() {
        return None;
    }

    Some(AuthenticationSplit {
        barcode_data: strip_parens(barcode_data),
        encrypted_text,
        company_id: strip_parens(company),
    })
}

fn split_separated(payload: &str) -> Option<AuthenticationSplit> {
    let mut barcode_data = String::new();
    let mut encrypted_text = String::new();
    let mut company_id = String::new();

    for token in payload.split(FIELD_SEPARATOR).filter(|t| !t.is_empty()) {
        if let Some(rest) = token.strip_prefix("98") {
            encrypted_text = rest.to_string();
        } else if let Some(rest) = token.strip_prefix("97") {
            company_id = rest.to_string();
        } else {
            barcode_data.push_str(token);
        }
    }

    if encrypted_text.is_empty() {
        return None;
    }

    Some(AuthenticationSplit {
        barcode_data,
        encrypted_text,
        company_id,
    })
}

fn split_flattened(payload: &str) -> Option<AuthenticationSplit> {
    // The company id anchors the split. Without a "97" there is no split,
    // even when a "98" payload exists.
    let idx_97 = payload.rfind("97")?;
    let company_id = &payload[idx_97 + 2..];
    let before_97 = &payload[..idx_97];

    let idx_98 = before_97.rfind("98")?;
    let encrypted_text = &before_97[idx_98 + 2..];
    if encrypted_text.is_empty() {
        return None;
    }

    Some(AuthenticationSplit {
        barcode_data: before_97[..idx_98].to_string(),
        encrypted_text: encrypted_text.to_string(),
        company_id: company_id.to_string(),
    })
}

fn strip_parens(s: &str) -> String {
    s.replace(['(', ')'], "")
}
