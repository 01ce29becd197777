use serde::{Deserialize, Serialize};

use super::ParsedField;

/// Result of locating the AI-98 authentication payload inside a scanned
/// value.
///
/// `encrypted_text` is never empty: when no payload can be found, or the
/// payload is empty after stripping, the splitter reports absence instead
/// of a hollow split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticationSplit {
    /// Identity portion of the barcode, brackets and separators removed
    pub barcode_data: String,
    /// Opaque AI-98 payload
    pub encrypted_text: String,
    /// AI-97 company identifier (may be empty)
    pub company_id: String,
}

/// Full decode of one scanned value: structured fields plus the
/// authentication split, when one was present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticationRecord {
    /// Structured fields from whichever decoder matched the input shape
    pub fields: Vec<ParsedField>,
    /// Identity portion, or the raw input when no split was found
    pub barcode_data: String,
    /// Opaque AI-98 payload, empty when no split was found
    pub encrypted_text: String,
    /// AI-97 company identifier, empty when no split was found
    pub company_id: String,
    /// True iff an authentication split was obtained
    pub is_system_generated: bool,
}
