//! Plain stream decoder
//!
//! Handles payloads without bracket notation: separator-delimited streams
//! straight from GS1-128 or GS1 DataMatrix symbols, and flattened streams
//! where fields run together and boundaries must be found by lookahead.

use tracing::{debug, trace};

use crate::decoder::preprocess::{FIELD_SEPARATOR, is_pure_numeric_symbol};
use crate::decoder::registry;
use crate::models::ParsedField;

/// Measurement AIs (310x-369x) carry a 6 digit value.
const MEASUREMENT_VALUE_LEN: usize = 6;

/// Character cursor over a preprocessed payload.
struct PayloadCursor {
    chars: Vec<char>,
    idx: usize,
    has_separator: bool,
}

impl PayloadCursor {
    fn new(stream: &str) -> Self {
        let chars: Vec<char> = stream.chars().collect();
        let has_separator = chars.contains(&FIELD_SEPARATOR);
        PayloadCursor {
            chars,
            idx: 0,
            has_separator,
        }
    }

    fn at_end(&self) -> bool {
        self.idx >= self.chars.len()
    }

    fn current(&self) -> Option<char> {
        self.chars.get(self.idx).copied()
    }

    fn advance(&mut self, n: usize) {
        self.idx += n;
    }

    fn skip_separators(&mut self) {
        while self.current() == Some(FIELD_SEPARATOR) {
            self.idx += 1;
        }
    }

    fn remaining(&self) -> usize {
        self.chars.len().saturating_sub(self.idx)
    }

    fn slice(&self, from: usize, to: usize) -> String {
        self.chars[from..to].iter().collect()
    }

    /// Substring of `len` characters at `pos`, if that many remain.
    fn candidate(&self, pos: usize, len: usize) -> Option<String> {
        if pos + len > self.chars.len() {
            return None;
        }
        Some(self.chars[pos..pos + len].iter().collect())
    }
}

enum FieldLength {
    Fixed(usize),
    Variable,
}

/// Application identifier accepted at a stream position.
struct AiMatch {
    code: String,
    length: FieldLength,
}

fn is_company_internal(code: &str) -> bool {
    code.len() == 2 && code.parse::<u32>().is_ok_and(|n| (91..=99).contains(&n))
}

/// Greedy longest-prefix AI detection: try 4, then 3, then 2 characters.
///
/// Company-internal codes 91-99 at position 0 of a stream that carries no
/// separator anywhere are rejected, otherwise a bare numeric payload that
/// happens to start with 91-99 would be misread as AI data.
fn detect_ai(cursor: &PayloadCursor, pos: usize) -> Option<AiMatch> {
    for len in [4, 3, 2] {
        let Some(candidate) = cursor.candidate(pos, len) else {
            continue;
        };

        if let Some(descriptor) = registry::lookup(&candidate) {
            if is_company_internal(&candidate) && pos == 0 && !cursor.has_separator {
                return None;
            }
            let length = match descriptor.fixed_length {
                Some(n) => FieldLength::Fixed(n),
                None => FieldLength::Variable,
            };
            return Some(AiMatch {
                code: candidate,
                length,
            });
        }

        if len == 4 {
            if registry::is_measurement(&candidate) {
                return Some(AiMatch {
                    code: candidate,
                    length: FieldLength::Fixed(MEASUREMENT_VALUE_LEN),
                });
            }
            if registry::is_monetary(&candidate) || registry::is_special_family(&candidate) {
                return Some(AiMatch {
                    code: candidate,
                    length: FieldLength::Variable,
                });
            }
        }
    }
    None
}

enum DecodeState {
    ScanningForAi,
    ConsumingFixed { code: String, length: usize },
    ConsumingVariable { code: String },
    Done,
}

/// Decoder for plain (non-bracketed) AI streams.
pub struct PlainStreamDecoder;

impl PlainStreamDecoder {
    /// Decode a preprocessed plain stream into its fields.
    ///
    /// Pure numeric payloads at retail symbol lengths decode to nothing.
    /// A fixed-length field that would run past the end of the stream ends
    /// the parse without emitting.
    pub fn decode(stream: &str) -> Vec<ParsedField> {
        if is_pure_numeric_symbol(stream) {
            debug!(len = stream.len(), "pure numeric payload, not an AI stream");
            return Vec::new();
        }

        let mut cursor = PayloadCursor::new(stream);
        let mut fields = Vec::new();
        let mut state = DecodeState::ScanningForAi;

        loop {
            state = match state {
                DecodeState::ScanningForAi => {
                    cursor.skip_separators();
                    if cursor.at_end() {
                        DecodeState::Done
                    } else {
                        match detect_ai(&cursor, cursor.idx) {
                            Some(found) => {
                                cursor.advance(found.code.chars().count());
                                match found.length {
                                    FieldLength::Fixed(length) => DecodeState::ConsumingFixed {
                                        code: found.code,
                                        length,
                                    },
                                    FieldLength::Variable => {
                                        DecodeState::ConsumingVariable { code: found.code }
                                    }
                                }
                            }
                            None => {
                                cursor.advance(1);
                                DecodeState::ScanningForAi
                            }
                        }
                    }
                }
                DecodeState::ConsumingFixed { code, length } => {
                    if cursor.remaining() < length {
                        DecodeState::Done
                    } else {
                        let value = cursor.slice(cursor.idx, cursor.idx + length);
                        cursor.advance(length);
                        emit(&mut fields, &code, &value);
                        DecodeState::ScanningForAi
                    }
                }
                DecodeState::ConsumingVariable { code } => {
                    let start = cursor.idx;
                    while !cursor.at_end() {
                        if cursor.current() == Some(FIELD_SEPARATOR) {
                            break;
                        }
                        // Flattened streams end a variable field at the next
                        // detectable AI. Separator streams trust the separator.
                        if !cursor.has_separator
                            && cursor.idx > start
                            && detect_ai(&cursor, cursor.idx).is_some()
                        {
                            break;
                        }
                        cursor.advance(1);
                    }
                    let value = cursor.slice(start, cursor.idx);
                    emit(&mut fields, &code, &value);
                    DecodeState::ScanningForAi
                }
                DecodeState::Done => break,
            };
        }

        trace!(count = fields.len(), "plain stream decoded");
        fields
    }
}

fn emit(fields: &mut Vec<ParsedField>, code: &str, value: &str) {
    match registry::lookup(code) {
        Some(descriptor) if descriptor.ignored_in_output => {
            debug!(ai = code, "dropping verification-only field");
        }
        Some(descriptor) => fields.push(ParsedField::new(code, value, descriptor.name)),
        None => fields.push(ParsedField::new(code, value, &format!("AI {code}"))),
    }
}
