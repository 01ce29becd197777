//! Application identifier registry
//!
//! Lookup table for the GS1 application identifiers this crate understands,
//! plus the prefix range classifiers that cover whole AI families without a
//! table entry per member.

/// Metadata for one application identifier.
pub struct AiDescriptor {
    /// AI code as it appears in the payload, 2 to 4 digits
    pub code: &'static str,
    /// Human readable field name
    pub name: &'static str,
    /// Value length for fixed-length AIs, `None` for variable-length
    pub fixed_length: Option<usize>,
    /// Parsed but dropped from results (internal verification payload)
    pub ignored_in_output: bool,
}

const fn ai(code: &'static str, name: &'static str, fixed_length: Option<usize>) -> AiDescriptor {
    AiDescriptor {
        code,
        name,
        fixed_length,
        ignored_in_output: false,
    }
}

// Application identifier metadata from the GS1 General Specifications.
// Sorted by code so lookups can binary search.
const AI_TABLE: &[AiDescriptor] = &[
    ai("00", "SSCC", Some(18)),
    ai("01", "GTIN", Some(14)),
    ai("02", "Contained GTIN", Some(14)),
    ai("10", "Batch/Lot Number", None),
    ai("11", "Production Date", Some(6)),
    ai("12", "Due Date", Some(6)),
    ai("13", "Packaging Date", Some(6)),
    ai("15", "Best Before Date", Some(6)),
    ai("16", "Sell By Date", Some(6)),
    ai("17", "Expiration Date", Some(6)),
    ai("20", "Internal Product Variant", Some(2)),
    ai("21", "Serial Number", None),
    ai("22", "Consumer Product Variant", None),
    ai("235", "TPX – Third Party GTIN Extension", None),
    ai("240", "Additional Product Identification", None),
    ai("241", "Customer Part Number", None),
    ai("242", "Made-to-Order Variation", None),
    ai("243", "Packaging Component Number", None),
    ai("250", "Secondary Serial Number", None),
    ai("251", "Reference to Source Entity", None),
    ai("253", "Global Document Type Identifier (GDTI)", None),
    ai("254", "GLN Extension Component", None),
    ai("255", "Global Coupon Number (GCN)", None),
    ai("30", "Variable Count", None),
    ai("37", "Count of Trade Items", None),
    ai("400", "Customer PO Number", None),
    ai("401", "GINC", None),
    ai("402", "GSIN", Some(17)),
    ai("403", "Routing Code", None),
    ai("410", "Ship To GLN", Some(13)),
    ai("411", "Bill To GLN", Some(13)),
    ai("412", "Purchased From GLN", Some(13)),
    ai("413", "Ship For GLN", Some(13)),
    ai("414", "Physical Location GLN", Some(13)),
    ai("415", "Invoicing Party GLN", Some(13)),
    ai("416", "Production Location GLN", Some(13)),
    ai("417", "Party GLN", Some(13)),
    ai("420", "Postal Code", None),
    ai("421", "Postal Code + ISO Country", None),
    ai("422", "Country of Origin", Some(3)),
    ai("423", "Country of Initial Processing", None),
    ai("424", "Country of Processing", Some(3)),
    ai("425", "Country of Disassembly", None),
    ai("426", "Full Process Chain Country", Some(3)),
    ai("427", "Country Subdivision", None),
    ai("4330", "Max Temp Fahrenheit", Some(6)),
    ai("4331", "Max Temp Celsius", Some(6)),
    ai("4332", "Min Temp Fahrenheit", Some(6)),
    ai("4333", "Min Temp Celsius", Some(6)),
    ai("7001", "NATO Stock Number", Some(13)),
    ai("7002", "UNECE Meat Classification", None),
    ai("7003", "Expiration Date & Time", Some(10)),
    ai("7004", "Active Potency", None),
    ai("7005", "Catch Area", None),
    ai("7006", "First Freeze Date", Some(6)),
    ai("7007", "Harvest Date", None),
    ai("7008", "Species Code", None),
    ai("7009", "Fishing Gear Type", None),
    ai("7010", "Production Method", None),
    ai("7011", "Test By Date", None),
    ai("7020", "Refurbishment Lot ID", None),
    ai("7021", "Functional Status", None),
    ai("7022", "Revision Status", None),
    ai("7023", "GIAI Assembly", None),
    ai("8001", "Roll Product Info", Some(14)),
    ai("8002", "Mobile Identifier", None),
    ai("8003", "GRAI", None),
    ai("8004", "GIAI", None),
    ai("8005", "Price Per Unit", Some(6)),
    ai("8006", "ITIP Piece", Some(18)),
    ai("8007", "IBAN", None),
    ai("8008", "Production Date & Time", None),
    ai("8009", "Sensor Indicator", None),
    ai("8010", "Component Part ID", None),
    ai("8011", "Component Serial", None),
    ai("8012", "Software Version", None),
    ai("8013", "Global Model Number", None),
    ai("8017", "GSRN Provider", Some(18)),
    ai("8018", "GSRN Recipient", Some(18)),
    ai("8019", "Service Relation Instance", None),
    ai("8020", "Payment Slip Reference", None),
    ai("8026", "ITIP Contained Pieces", Some(18)),
    ai("8030", "Digital Signature", None),
    ai("8200", "Extended Packaging URL", None),
    ai("91", "Company Internal 91", None),
    ai("92", "Company Internal 92", None),
    ai("93", "Company Internal 93", None),
    ai("94", "Company Internal 94", None),
    ai("95", "Company Internal 95", None),
    ai("96", "Company Internal 96", None),
    AiDescriptor {
        code: "97",
        name: "Company Internal 97",
        fixed_length: None,
        ignored_in_output: true,
    },
    ai("98", "Company Internal 98", None),
    ai("99", "Company Internal 99", None),
];

/// Look up a registered application identifier by its exact code.
pub fn lookup(code: &str) -> Option<&'static AiDescriptor> {
    AI_TABLE
        .binary_search_by(|d| d.code.cmp(code))
        .ok()
        .map(|idx| &AI_TABLE[idx])
}

// A range candidate is four chars with a numeric three-digit prefix; the
// fourth position is the decimal indicator slot and is not validated.
fn prefix_in_range(candidate: &str, lo: u32, hi: u32) -> bool {
    if candidate.len() != 4 || !candidate.bytes().take(3).all(|b| b.is_ascii_digit()) {
        return false;
    }
    match candidate[..3].parse::<u32>() {
        Ok(prefix) => (lo..=hi).contains(&prefix),
        Err(_) => false,
    }
}

/// Measurement AI family (310x-369x): net weight, dimensions, volume.
/// Matches on the leading three digits only.
pub fn is_measurement(candidate: &str) -> bool {
    prefix_in_range(candidate, 310, 369)
}

/// Monetary AI family (390x-395x): amounts payable and coupon values.
pub fn is_monetary(candidate: &str) -> bool {
    prefix_in_range(candidate, 390, 395)
}

/// Processor approval (703x) and certification reference (723x) families.
pub fn is_special_family(candidate: &str) -> bool {
    if candidate.len() != 4 || !candidate.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    candidate.starts_with("703") || candidate.starts_with("723")
}
