//! Core data types shared across the crate

/// Authentication split and record types
pub mod auth;
/// Canonical URL conversion output
pub mod conversion;
/// A single parsed application identifier field
pub mod field;
/// Scan session items and modes
pub mod scan;
/// Barcode symbol families
pub mod symbology;

pub use auth::{AuthenticationRecord, AuthenticationSplit};
pub use conversion::{CanonicalConversion, INVALID_INPUT};
pub use field::ParsedField;
pub use scan::{ScanItem, ScanMode};
pub use symbology::Symbology;
