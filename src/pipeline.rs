//! Decode orchestration and scan sessions
//!
//! Routes a raw payload to the decoder its shape calls for, builds the
//! authentication record consumed by verification backends, and tracks
//! accepted symbols across a scanning session.

use rayon::prelude::*;
use tracing::debug;

use crate::auth::{convert_dynamic_path_to_gs1, split_by_authentication_payload};
use crate::decoder::{BracketedDecoder, DigitalLinkDecoder, PlainStreamDecoder, preprocess};
use crate::detector::{DetectError, SymbolDetector};
use crate::models::{AuthenticationRecord, ParsedField, ScanItem, ScanMode, Symbology};

/// Decode any scanned payload into its fields.
///
/// Payloads starting with `http` go to the Digital Link decoder. Everything
/// else is preprocessed, then parsed as bracketed notation when an opening
/// paren survives, as a plain stream otherwise.
pub fn decode(raw: &str) -> Vec<ParsedField> {
    if raw.starts_with("http") {
        return DigitalLinkDecoder::decode(raw);
    }
    let cleaned = preprocess(raw);
    if cleaned.contains('(') {
        BracketedDecoder::decode(&cleaned)
    } else {
        PlainStreamDecoder::decode(&cleaned)
    }
}

/// Decode a batch of payloads in parallel.
pub fn decode_batch(payloads: &[String]) -> Vec<Vec<ParsedField>> {
    payloads.par_iter().map(|p| decode(p)).collect()
}

/// Build the full record verification backends consume.
///
/// URLs are split on their canonical conversion, everything else on the raw
/// payload. When no authentication payload is found the record carries the
/// raw value as barcode data and is marked as not system generated.
pub fn build_authentication_record(raw: &str) -> AuthenticationRecord {
    let fields = decode(raw);

    let split = if raw.starts_with("http") {
        let conversion = convert_dynamic_path_to_gs1(raw);
        split_by_authentication_payload(&conversion.original_without_ai98)
    } else {
        split_by_authentication_payload(raw)
    };

    match split {
        Some(found) => AuthenticationRecord {
            fields,
            barcode_data: found.barcode_data,
            encrypted_text: found.encrypted_text,
            company_id: found.company_id,
            is_system_generated: true,
        },
        None => AuthenticationRecord {
            fields,
            barcode_data: raw.to_string(),
            encrypted_text: String::new(),
            company_id: String::new(),
            is_system_generated: false,
        },
    }
}

/// Accepted symbols across one scanning session.
///
/// Sessions enforce the scan mode: single and authentication sessions stop
/// at the first accepted symbol, multiple sessions accept any number of
/// distinct payloads.
pub struct ScanSession {
    mode: ScanMode,
    items: Vec<ScanItem>,
}

impl ScanSession {
    /// Start an empty session in the given mode.
    pub fn new(mode: ScanMode) -> Self {
        ScanSession {
            mode,
            items: Vec::new(),
        }
    }

    /// Mode this session was started in.
    pub fn mode(&self) -> ScanMode {
        self.mode
    }

    /// Symbols accepted so far, in acceptance order.
    pub fn items(&self) -> &[ScanItem] {
        &self.items
    }

    /// Number of accepted symbols.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when nothing has been accepted yet.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Offer one detected payload to the session.
    ///
    /// Returns the accepted item, or `None` when the payload is blank, the
    /// session is already complete, or the payload was already seen.
    pub fn ingest(&mut self, raw_value: &str, symbology: Symbology) -> Option<&ScanItem> {
        if raw_value.trim().is_empty() {
            return None;
        }

        match self.mode {
            ScanMode::Single | ScanMode::Authentication => {
                if !self.items.is_empty() {
                    return None;
                }
            }
            ScanMode::Multiple => {
                if self.items.iter().any(|item| item.raw_value == raw_value) {
                    debug!(raw = raw_value, "duplicate payload ignored");
                    return None;
                }
            }
        }

        let record = build_authentication_record(raw_value);
        self.items.push(ScanItem {
            raw_value: raw_value.to_string(),
            symbology,
            record,
            is_authentic: None,
        });
        self.items.last()
    }

    /// Run a detector over a frame and offer every detection to the session.
    ///
    /// Returns how many detections the session accepted.
    pub fn ingest_frame(
        &mut self,
        detector: &dyn SymbolDetector,
        luma: &[u8],
        width: usize,
        height: usize,
    ) -> Result<usize, DetectError> {
        let detections = detector.detect_symbols(luma, width, height)?;
        let mut accepted = 0;
        for detection in detections {
            if self
                .ingest(&detection.raw_value, detection.symbology)
                .is_some()
            {
                accepted += 1;
            }
        }
        Ok(accepted)
    }

    /// Record a verification verdict for an accepted payload.
    ///
    /// Returns false when no item matches the payload.
    pub fn set_verdict(&mut self, raw_value: &str, is_authentic: bool) -> bool {
        match self
            .items
            .iter_mut()
            .find(|item| item.raw_value == raw_value)
        {
            Some(item) => {
                item.is_authentic = Some(is_authentic);
                true
            }
            None => false,
        }
    }

    /// Drop all accepted symbols, keeping the mode.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}
