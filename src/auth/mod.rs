//! Product authentication support
//!
//! Converts scanned payloads into the canonical form authentication
//! backends expect, and splits payloads into barcode data, encrypted text
//! and company id around the company-internal AIs 98 and 97.

/// Canonical conversion of scanned payloads into flattened GS1 form
pub mod canonical;
/// Payload splitting around AIs 98 and 97
pub mod split;

pub use canonical::convert_dynamic_path_to_gs1;
pub use split::split_by_authentication_payload;
