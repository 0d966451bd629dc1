use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which strategy produced a token sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceStrategy {
    Network,
    Synthetic,
}

/// Locates one password character inside the token sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provenance {
    pub token_index: usize,
    /// Offset in chars, not bytes.
    pub char_offset: usize,
}

impl Provenance {
    pub fn new(token_index: usize, char_offset: usize) -> Self {
        Self {
            token_index,
            char_offset,
        }
    }
}

/// The mnemonic sentence a password is derived from.
///
/// `tokens` always has at least one element and its last element is the
/// special character. `sentence` is the human-readable text the tokens were
/// taken from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceText {
    pub tokens: Vec<String>,
    pub sentence: String,
    pub strategy: SourceStrategy,
}

/// Output of the extractor.
///
/// Padded characters carry no provenance entry; their positions in the
/// password are listed in `padded_positions` instead, so
/// `provenance.len() + padded_positions.len()` equals the password length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    pub password: String,
    pub provenance: Vec<Provenance>,
    pub padded_positions: Vec<usize>,
}

/// Everything a caller needs to show the password and its mnemonic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedPassword {
    pub generation_id: Uuid,
    pub password: String,
    pub length: usize,
    pub tokens: Vec<String>,
    pub provenance: Vec<Provenance>,
    pub padded_positions: Vec<usize>,
    pub source_sentence: String,
    pub strategy: SourceStrategy,
    /// Only set for synthetic sources: log2 of the template's outcome space.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synthetic_entropy_bits: Option<f64>,
    pub generated_at: DateTime<Utc>,
}
