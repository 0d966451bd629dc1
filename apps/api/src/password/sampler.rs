//! Unbiased integer sampling on top of a cryptographic RNG.
//!
//! `r mod max` over a raw 32-bit draw favours small values whenever `max`
//! does not divide 2^32. Draws at or above the largest multiple of `max` are
//! rejected and redrawn instead, so every value in `[0, max)` is equally
//! likely. Fewer than half of all draws are rejected for any valid bound.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::password::error::PasswordError;

const RANGE: u64 = 1 << 32;

pub struct UniformSampler<R = OsRng> {
    rng: R,
}

impl UniformSampler<OsRng> {
    /// Sampler backed by the operating system CSPRNG.
    pub fn os() -> Self {
        Self::with_rng(OsRng)
    }
}

impl<R: RngCore + CryptoRng> UniformSampler<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Returns a uniformly distributed value in `[0, max)`.
    ///
    /// `max` must be in `1..=2^32`.
    pub fn sample(&mut self, max: usize) -> Result<usize, PasswordError> {
        let bound = u64::try_from(max).unwrap_or(u64::MAX);
        if bound == 0 || bound > RANGE {
            return Err(PasswordError::InvalidArgument(format!(
                "sampling bound must be in 1..=2^32, got {max}"
            )));
        }

        let limit = (RANGE / bound) * bound;
        loop {
            let draw = u64::from(self.rng.next_u32());
            if draw < limit {
                // draw % bound < bound <= max, so it fits in usize
                return Ok((draw % bound) as usize);
            }
        }
    }

    /// Uniformly picks one element of a non-empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T, PasswordError> {
        let index = self.sample(items.len())?;
        Ok(&items[index])
    }
}
