// Mnemonic password core.
// sampler → source (network | synthetic) → extractor, driven by generator.
// All randomness goes through sampler::UniformSampler over the OS CSPRNG.

pub mod error;
pub mod extractor;
pub mod generator;
pub mod handlers;
pub mod sampler;
pub mod source;
pub mod word_pools;

#[cfg(test)]
pub mod test_support;
