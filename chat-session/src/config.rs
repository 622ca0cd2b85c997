//! Session config: idle timers, optional RNG seed and log file. Loaded from env.

use anyhow::Result;
use chatbot_core::ChatError;
use std::env;
use std::time::Duration;

/// Default idle window before the "are you still there" message.
pub const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 300;
/// Default further silence before the goodbye message.
pub const DEFAULT_GOODBYE_DELAY_SECS: u64 = 60;
pub const DEFAULT_LOG_FILE: &str = "logs/chatbot.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// CHAT_IDLE_TIMEOUT_SECS
    pub idle_timeout: Duration,
    /// CHAT_GOODBYE_DELAY_SECS
    pub goodbye_delay: Duration,
    /// CHAT_RNG_SEED; unset means entropy-seeded replies
    pub rng_seed: Option<u64>,
    /// LOG_FILE
    pub log_file: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            idle_timeout: Duration::from_secs(DEFAULT_IDLE_TIMEOUT_SECS),
            goodbye_delay: Duration::from_secs(DEFAULT_GOODBYE_DELAY_SECS),
            rng_seed: None,
            log_file: DEFAULT_LOG_FILE.to_string(),
        }
    }
}

impl SessionConfig {
    /// Load from environment variables; unset or unparsable values fall back to defaults.
    pub fn from_env() -> Result<Self> {
        let idle_timeout_secs = env::var("CHAT_IDLE_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_IDLE_TIMEOUT_SECS);
        let goodbye_delay_secs = env::var("CHAT_GOODBYE_DELAY_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_GOODBYE_DELAY_SECS);
        let rng_seed = env::var("CHAT_RNG_SEED").ok().and_then(|s| s.parse().ok());
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());

        Ok(Self {
            idle_timeout: Duration::from_secs(idle_timeout_secs),
            goodbye_delay: Duration::from_secs(goodbye_delay_secs),
            rng_seed,
            log_file,
        })
    }

    /// Rejects zero-length timers. Call after from_env() to fail fast.
    pub fn validate(&self) -> chatbot_core::Result<()> {
        if self.idle_timeout.is_zero() {
            return Err(ChatError::Config(
                "CHAT_IDLE_TIMEOUT_SECS must be greater than 0".to_string(),
            ));
        }
        if self.goodbye_delay.is_zero() {
            return Err(ChatError::Config(
                "CHAT_GOODBYE_DELAY_SECS must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
