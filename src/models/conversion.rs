use serde::{Deserialize, Serialize};

/// Sentinel produced when the canonicalizer is handed something that does
/// not parse as a URL.
pub const INVALID_INPUT: &str = "Invalid input";

/// Canonical flattenings of a Digital Link URL or bracketed payload.
///
/// Both strings carry the AI-98 payload. For URL inputs the "98" query
/// parameter is excluded from the field walk and re-appended last, which
/// is where `original_without_ai98` takes its name from; the flattened
/// variant is the same string with the scheme lowercased. Bracketed inputs
/// keep every AI in its natural position and differ only in the
/// scheme+host prefix, which the flattened variant omits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalConversion {
    /// Scheme as scanned + host + fields, input casing preserved
    pub original_without_ai98: String,
    /// Same fields with the scheme lowercased (URL inputs) or without the
    /// scheme+host prefix (bracketed inputs)
    pub flattened_with_ai98: String,
}

impl CanonicalConversion {
    pub(crate) fn invalid() -> Self {
        Self {
            original_without_ai98: INVALID_INPUT.to_string(),
            flattened_with_ai98: INVALID_INPUT.to_string(),
        }
    }

    /// True when the input failed to parse as a URL.
    pub fn is_invalid(&self) -> bool {
        self.original_without_ai98 == INVALID_INPUT
    }
}
