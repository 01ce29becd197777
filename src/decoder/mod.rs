//! GS1 payload decoding modules
//!
//! This module contains all the logic for turning a raw scanned payload into
//! parsed application identifier fields:
//! - Payload preprocessing (symbology identifier, control characters)
//! - The AI registry and range classifiers
//! - One decoder per input shape (plain stream, bracketed, Digital Link)

/// Decoder for human-readable `(AI)value` payloads
pub mod bracketed;
/// Decoder for GS1 Digital Link URLs
pub mod digital_link;
/// State machine decoder for separator-delimited and flattened streams
pub mod plain;
/// Raw payload cleanup applied before parsing
pub mod preprocess;
/// Application identifier lookup table and range classifiers
pub mod registry;

pub use bracketed::BracketedDecoder;
pub use digital_link::DigitalLinkDecoder;
pub use plain::PlainStreamDecoder;
pub use preprocess::{FIELD_SEPARATOR, is_pure_numeric_symbol, preprocess};
