//! # responder
//!
//! Scripted conversational responder for the clinic's marketing chat widget.
//!
//! A [`Responder`] runs each utterance through an ordered rule chain (bereavement, severe distress,
//! price objection, comparison shopping, payment method, repeated negative sentiment, fixed
//! phrases, sentiment, "why choose us", keyword table) and falls back to a default reply. Replies
//! come from an immutable [`ScriptBook`]; randomness comes from the caller's RNG.
//!
//! [`suggestions`] picks quick-reply chips from the recent history and the context.

pub mod matching;
pub mod responder;
pub mod rules;
pub mod scripts;
pub mod suggestions;

pub use responder::{Reply, Responder};
pub use scripts::{IntentPhrase, KeywordEntry, PaymentScripts, ScriptBook};
pub use suggestions::{select_bucket, suggestions, Suggestion, SuggestionBucket};
