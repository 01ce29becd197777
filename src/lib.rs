//! GS1Scan - fast GS1 barcode payload parsing in pure Rust
//!
//! A pure Rust library turning raw scanned payloads (GS1-128, GS1
//! DataMatrix, GS1 Digital Link QR) into structured application identifier
//! fields, and splitting out the encrypted authentication payload some
//! barcodes embed under AIs 98 and 97. Decoding never fails: malformed
//! input degrades to empty or absent results.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Authentication support (canonical conversion, AI-98/97 splitting)
pub mod auth;
/// Payload decoding modules (AI registry, preprocessing, shape decoders)
pub mod decoder;
/// Symbol detection seam for external detection engines
pub mod detector;
/// Core data structures (ParsedField, AuthenticationRecord, etc.)
pub mod models;
/// Decode orchestration and scan sessions
pub mod pipeline;

pub use auth::{convert_dynamic_path_to_gs1, split_by_authentication_payload};
pub use detector::{DetectError, Detection, SymbolDetector};
pub use models::{
    AuthenticationRecord, AuthenticationSplit, CanonicalConversion, ParsedField, ScanItem,
    ScanMode, Symbology,
};
pub use pipeline::{ScanSession, build_authentication_record, decode, decode_batch};
