//! Symbol detection seam
//!
//! Payload parsing is pure string work, but scan sessions start from camera
//! frames. Detection itself happens in an external engine, behind this trait
//! so sessions can be driven by any backend (or a fake one in tests).

use thiserror::Error;

use crate::models::Symbology;

/// One decoded symbol found in a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    /// Raw payload exactly as encoded in the symbol
    pub raw_value: String,
    /// Symbol family the payload came from
    pub symbology: Symbology,
}

/// Errors a detection backend can report.
#[derive(Debug, Error)]
pub enum DetectError {
    /// Frame buffer does not match the stated dimensions
    #[error("frame buffer holds {actual} bytes, expected {expected}")]
    FrameSize {
        /// width * height
        expected: usize,
        /// bytes actually supplied
        actual: usize,
    },
    /// The backend itself failed
    #[error("detector backend: {0}")]
    Backend(String),
}

/// A barcode detection backend working on 8-bit grayscale frames.
pub trait SymbolDetector {
    /// Find and decode every symbol in a `width` x `height` luma frame.
    fn detect_symbols(
        &self,
        luma: &[u8],
        width: usize,
        height: usize,
    ) -> Result<Vec<Detection>, DetectError>;
}
