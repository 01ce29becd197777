use serde::{Deserialize, Serialize};

/// One decoded GS1 field: Application Identifier, raw value and resolved
/// description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedField {
    /// 2-4 digit Application Identifier code
    pub ai: String,
    /// Raw field value (may be empty)
    pub value: String,
    /// Registry name, or a generated fallback for codes outside the registry
    pub description: String,
}

impl ParsedField {
    /// Create a field from borrowed parts
    pub fn new(ai: &str, value: &str, description: &str) -> Self {
        Self {
            ai: ai.to_string(),
            value: value.to_string(),
            description: description.to_string(),
        }
    }
}
