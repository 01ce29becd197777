use std::fmt;

use serde::{Deserialize, Serialize};

/// Barcode symbol family reported by the external detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Symbology {
    /// QR Code (including GS1 QR)
    QrCode,
    /// Data Matrix (including GS1 DataMatrix)
    DataMatrix,
    /// Code 128 / GS1-128
    Code128,
    /// Code 39
    Code39,
    /// Code 93
    Code93,
    /// Codabar
    Codabar,
    /// EAN-13 retail symbol
    Ean13,
    /// EAN-8 retail symbol
    Ean8,
    /// Interleaved 2 of 5
    Itf,
    /// UPC-A retail symbol
    UpcA,
    /// UPC-E retail symbol
    UpcE,
    /// PDF417
    Pdf417,
    /// Aztec
    Aztec,
    /// Anything the detector could not classify
    Unknown,
}

impl Symbology {
    /// Display name as shown in scan results
    pub fn name(&self) -> &'static str {
        match self {
            Symbology::QrCode => "QR Code",
            Symbology::DataMatrix => "Data Matrix",
            Symbology::Code128 => "Code 128",
            Symbology::Code39 => "Code 39",
            Symbology::Code93 => "Code 93",
            Symbology::Codabar => "Codabar",
            Symbology::Ean13 => "EAN-13",
            Symbology::Ean8 => "EAN-8",
            Symbology::Itf => "ITF",
            Symbology::UpcA => "UPC-A",
            Symbology::UpcE => "UPC-E",
            Symbology::Pdf417 => "PDF417",
            Symbology::Aztec => "Aztec",
            Symbology::Unknown => "Unknown Format",
        }
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
