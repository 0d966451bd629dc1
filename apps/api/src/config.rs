use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::headline_client::DEFAULT_FEED_URL;
use crate::password::generator::PasswordPolicy;

/// Application configuration loaded from environment variables.
/// Every variable is optional; invalid values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub headline_feed_url: String,
    pub headline_timeout: Duration,
    pub policy: PasswordPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = PasswordPolicy::default();
        let policy = PasswordPolicy {
            min_length: env_or("PASSWORD_MIN_LENGTH", defaults.min_length)?,
            max_length: env_or("PASSWORD_MAX_LENGTH", defaults.max_length)?,
            default_length: env_or("PASSWORD_DEFAULT_LENGTH", defaults.default_length)?,
            word_margin: env_or("SOURCE_WORD_MARGIN", defaults.word_margin)?,
        };
        validate_policy(&policy)?;

        Ok(Config {
            port: env_or("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            headline_feed_url: std::env::var("HEADLINE_FEED_URL")
                .unwrap_or_else(|_| DEFAULT_FEED_URL.to_string()),
            headline_timeout: Duration::from_secs(env_or("HEADLINE_TIMEOUT_SECS", 10)?),
            policy,
        })
    }
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => parse_value(key, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse::<T>()
        .with_context(|| format!("Environment variable '{key}' has invalid value '{raw}'"))
}

fn validate_policy(policy: &PasswordPolicy) -> Result<()> {
    if policy.min_length == 0 {
        bail!("PASSWORD_MIN_LENGTH must be at least 1");
    }
    if policy.min_length > policy.max_length {
        bail!(
            "PASSWORD_MIN_LENGTH ({}) exceeds PASSWORD_MAX_LENGTH ({})",
            policy.min_length,
            policy.max_length
        );
    }
    if !(policy.min_length..=policy.max_length).contains(&policy.default_length) {
        bail!(
            "PASSWORD_DEFAULT_LENGTH ({}) must lie within {}..={}",
            policy.default_length,
            policy.min_length,
            policy.max_length
        );
    }
    Ok(())
}
