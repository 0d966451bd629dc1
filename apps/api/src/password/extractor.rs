//! Password extraction — turns a token sequence into a password and records
//! where every character came from.
//!
//! Characters are taken offset-major: the first letter of every word token,
//! then the second letter of every word token, and so on. For the common case
//! of a sentence at least as long as the password this yields exactly one
//! letter per word, which is what makes the password memorable.
//!
//! The last token is the special character and always closes the password.

use rand::{CryptoRng, RngCore};
use tracing::warn;

use crate::models::password::{Extraction, Provenance};
use crate::password::error::PasswordError;
use crate::password::sampler::UniformSampler;
use crate::password::word_pools::PADDING_ALPHABET;

/// An empty sweep past this offset ends extraction.
const MAX_EMPTY_SWEEP_OFFSET: usize = 20;

/// Derives a password of exactly `target_length` characters from `tokens`.
///
/// When the word tokens cannot supply enough characters, the remainder is
/// padded with uniformly sampled alphanumerics. Padded characters have no
/// provenance entry; their password positions are reported in
/// `Extraction::padded_positions`.
pub fn extract<R>(
    tokens: &[String],
    target_length: usize,
    sampler: &mut UniformSampler<R>,
) -> Result<Extraction, PasswordError>
where
    R: RngCore + CryptoRng,
{
    let (special, word_tokens) = tokens
        .split_last()
        .ok_or_else(|| PasswordError::InvalidArgument("token sequence is empty".to_string()))?;

    if target_length == 0 {
        return Err(PasswordError::InvalidArgument(
            "target length must be at least 1".to_string(),
        ));
    }

    let special_char = special.chars().next().ok_or_else(|| {
        PasswordError::InvalidArgument("special token is empty".to_string())
    })?;

    let words: Vec<Vec<char>> = word_tokens.iter().map(|t| t.chars().collect()).collect();
    let needed = target_length - 1;

    let mut password = String::with_capacity(target_length);
    let mut provenance = Vec::with_capacity(target_length);
    let mut collected = 0;

    if !words.is_empty() {
        let mut offset = 0;
        while collected < needed {
            let mut extracted_in_sweep = 0;

            for (token_index, word) in words.iter().enumerate() {
                if collected >= needed {
                    break;
                }
                if let Some(&c) = word.get(offset) {
                    password.push(c);
                    provenance.push(Provenance::new(token_index, offset));
                    collected += 1;
                    extracted_in_sweep += 1;
                }
            }

            if extracted_in_sweep == 0 && offset > MAX_EMPTY_SWEEP_OFFSET {
                warn!(
                    "Word tokens exhausted after {} characters, padding {} more",
                    collected,
                    needed - collected
                );
                break;
            }

            offset += 1;
        }
    }

    let mut padded_positions = Vec::new();
    while collected < needed {
        password.push(*sampler.pick(PADDING_ALPHABET)?);
        padded_positions.push(collected);
        collected += 1;
    }

    password.push(special_char);
    provenance.push(Provenance::new(word_tokens.len(), 0));

    Ok(Extraction {
        password,
        provenance,
        padded_positions,
    })
}
