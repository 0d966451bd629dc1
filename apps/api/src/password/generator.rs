//! Password generation — drives one request end to end.
//!
//! Flow: clamp length → network sentence (or synthetic fallback) → extract →
//! return password, tokens and provenance.
//!
//! Nothing is kept between calls. Each call owns its sampler and token
//! sequence, so concurrent requests never share state.

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::headline_client::HeadlineProvider;
use crate::models::password::{GeneratedPassword, SourceStrategy};
use crate::password::error::PasswordError;
use crate::password::extractor::extract;
use crate::password::sampler::UniformSampler;
use crate::password::source::{network_sentence, synthetic_sentence};
use crate::password::word_pools::synthetic_entropy_bits;

// ────────────────────────────────────────────────────────────────────────────
// Length policy
// ────────────────────────────────────────────────────────────────────────────

/// Accepted password lengths and how many extra words to request from the
/// headline source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub max_length: usize,
    pub default_length: usize,
    /// Extra words requested beyond the password length.
    pub word_margin: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 8,
            max_length: 64,
            default_length: 16,
            word_margin: 5,
        }
    }
}

impl PasswordPolicy {
    /// Resolves a requested length into the accepted range.
    pub fn effective_length(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.default_length)
            .clamp(self.min_length, self.max_length)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Generation
// ────────────────────────────────────────────────────────────────────────────

/// Generates one password.
///
/// A failed headline fetch or an unusable headline falls back to a synthetic
/// sentence and is never surfaced to the caller. Only sampler contract
/// violations (`InvalidArgument`) are returned as errors.
pub async fn generate_password(
    headlines: &dyn HeadlineProvider,
    policy: &PasswordPolicy,
    requested_length: Option<usize>,
) -> Result<GeneratedPassword, PasswordError> {
    let generation_id = Uuid::new_v4();
    let length = policy.effective_length(requested_length);
    if requested_length.is_some_and(|r| r != length) {
        info!("[{generation_id}] Requested length clamped to {length}");
    }

    let mut sampler = UniformSampler::os();
    let min_words = length.saturating_add(policy.word_margin);

    let source = match network_sentence(headlines, &mut sampler, min_words).await {
        Ok(source) => source,
        Err(e @ PasswordError::InvalidArgument(_)) => return Err(e),
        Err(reason) => {
            warn!("[{generation_id}] Headline source failed: {reason}. Using synthetic sentence.");
            synthetic_sentence(&mut sampler)?
        }
    };

    let extraction = extract(&source.tokens, length, &mut sampler)?;

    info!(
        "[{generation_id}] Generated {length}-character password from {:?} source ({} tokens, {} padded)",
        source.strategy,
        source.tokens.len(),
        extraction.padded_positions.len()
    );

    let synthetic_entropy_bits = match source.strategy {
        SourceStrategy::Synthetic => Some(synthetic_entropy_bits()),
        SourceStrategy::Network => None,
    };

    Ok(GeneratedPassword {
        generation_id,
        password: extraction.password,
        length,
        tokens: source.tokens,
        provenance: extraction.provenance,
        padded_positions: extraction.padded_positions,
        source_sentence: source.sentence,
        strategy: source.strategy,
        synthetic_entropy_bits,
        generated_at: Utc::now(),
    })
}
