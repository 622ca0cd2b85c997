//! # chatbot-cli
//!
//! Argument parsing, config loading and terminal rendering for the `chatbot` binary.

pub mod cli;
pub mod render;

pub use cli::{load_config, Cli, Commands};
pub use render::{render_event, render_suggestions};
