//! Raw payload cleanup applied before any field parsing

/// FNC1 group separator as it arrives from the scanner (ASCII 29).
pub const FIELD_SEPARATOR: char = '\u{1d}';

/// Strip the symbology identifier prefix and control characters.
///
/// Scanners in transparent mode prepend a three character identifier such as
/// `]C1`, `]d2` or `]Q3`. The separator itself is below 32 but must survive,
/// every other control character is dropped.
pub fn preprocess(raw: &str) -> String {
    let mut input = raw;
    if input.starts_with(']') && input.chars().count() > 3 {
        if let Some((idx, _)) = input.char_indices().nth(3) {
            input = &input[idx..];
        }
    }
    input
        .chars()
        .filter(|&c| c == FIELD_SEPARATOR || c as u32 >= 32)
        .collect()
}

/// True for payloads that are plain retail symbols rather than AI streams.
///
/// EAN-8, UPC-A, EAN-13 and ITF-14 payloads are all digits at these exact
/// lengths and would otherwise be cut into nonsense fields.
pub fn is_pure_numeric_symbol(payload: &str) -> bool {
    matches!(payload.len(), 8 | 12 | 13 | 14) && payload.bytes().all(|b| b.is_ascii_digit())
}
