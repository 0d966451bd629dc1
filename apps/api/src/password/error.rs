use thiserror::Error;

use crate::headline_client::HeadlineError;

/// Failures of the password core.
///
/// `SourceUnavailable` and `NoUsableSentence` are recovered by the generator
/// through the synthetic fallback. `InvalidArgument` is a contract violation
/// and always propagates.
#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Headline source unavailable: {0}")]
    SourceUnavailable(#[from] HeadlineError),

    #[error("No usable sentence in the selected headline")]
    NoUsableSentence,
}
