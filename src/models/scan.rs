use serde::{Deserialize, Serialize};

use crate::models::auth::AuthenticationRecord;
use crate::models::symbology::Symbology;

/// How a scan session treats repeated and additional detections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanMode {
    /// Stop after the first accepted symbol
    Single,
    /// Accept any number of distinct symbols
    Multiple,
    /// Single symbol, destined for authentication
    Authentication,
}

/// One accepted symbol inside a scan session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanItem {
    /// Raw payload exactly as the detector produced it
    pub raw_value: String,
    /// Symbol family the payload came from
    pub symbology: Symbology,
    /// Parsed fields plus authentication split for this payload
    pub record: AuthenticationRecord,
    /// Verification verdict, once one has been delivered
    pub is_authentic: Option<bool>,
}
