//! # chatbot-core
//!
//! Core types and traits for the clinic chat bot: [`Message`], [`ConversationContext`], the [`Rule`]
//! trait evaluated per [`Turn`], errors, and tracing initialization. Used by rule-chain, responder
//! and chat-session.

pub mod context;
pub mod error;
pub mod logger;
pub mod rule;
pub mod types;

pub use context::{ConversationContext, PaymentMethod, Sentiment, DISCOUNT_CAP};
pub use error::{ChatError, Result};
pub use logger::init_tracing;
pub use rule::{Rule, RuleOutcome, Turn};
pub use types::{Message, Sender};
