//! CLI parser and config loading.

use anyhow::Result;
use chat_session::SessionConfig;
use clap::{Parser, Subcommand};
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "chatbot")]
#[command(about = "Clinic chat assistant: interactive chat and one-shot replies", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Chat in the terminal. Type /reset to start over, /sair to quit.
    Chat {
        /// Seed for reply variants (overrides CHAT_RNG_SEED).
        #[arg(long)]
        seed: Option<u64>,
        /// Seconds of silence before the idle warning (overrides CHAT_IDLE_TIMEOUT_SECS).
        #[arg(long)]
        idle_secs: Option<u64>,
        /// Seconds after the warning before the goodbye (overrides CHAT_GOODBYE_DELAY_SECS).
        #[arg(long)]
        goodbye_secs: Option<u64>,
    },
    /// Print the reply to one utterance from a fresh conversation, plus the resulting context.
    Ask {
        utterance: String,
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Load SessionConfig from environment, apply CLI overrides, then validate.
pub fn load_config(
    seed: Option<u64>,
    idle_secs: Option<u64>,
    goodbye_secs: Option<u64>,
) -> Result<SessionConfig> {
    let mut config = SessionConfig::from_env()?;
    if let Some(seed) = seed {
        config.rng_seed = Some(seed);
    }
    if let Some(secs) = idle_secs {
        config.idle_timeout = Duration::from_secs(secs);
    }
    if let Some(secs) = goodbye_secs {
        config.goodbye_delay = Duration::from_secs(secs);
    }
    config.validate()?;
    Ok(config)
}
