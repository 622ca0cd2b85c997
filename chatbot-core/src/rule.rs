//! Rule concept: a turn is offered to each rule in order until one replies.

use rand::seq::SliceRandom;
use rand::RngCore;

use crate::context::ConversationContext;
use crate::types::Message;

/// Rule result for the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    /// Not handled; pass to the next rule.
    Continue,
    /// Stop the chain with this reply text.
    Reply(String),
}

impl RuleOutcome {
    pub fn reply(text: impl Into<String>) -> Self {
        RuleOutcome::Reply(text.into())
    }

    pub fn is_reply(&self) -> bool {
        matches!(self, RuleOutcome::Reply(_))
    }
}

/// Working state of one responder call: the utterance, the history it arrived after, a working
/// copy of the context that rules update, and the injected random source.
pub struct Turn<'a> {
    utterance: &'a str,
    normalized: String,
    history: &'a [Message],
    pub context: ConversationContext,
    rng: &'a mut dyn RngCore,
}

impl<'a> Turn<'a> {
    pub fn new(
        context: ConversationContext,
        history: &'a [Message],
        utterance: &'a str,
        rng: &'a mut dyn RngCore,
    ) -> Self {
        Self {
            utterance,
            normalized: utterance.trim().to_lowercase(),
            history,
            context,
            rng,
        }
    }

    /// Raw utterance as typed.
    pub fn utterance(&self) -> &str {
        self.utterance
    }

    /// Lowercased, trimmed utterance; what every rule matches against.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn history(&self) -> &[Message] {
        self.history
    }

    /// Uniform pick among static alternatives. `None` only for an empty slice.
    pub fn pick(&mut self, options: &[&'static str]) -> Option<&'static str> {
        options.choose(&mut *self.rng).copied()
    }

    pub fn into_context(self) -> ConversationContext {
        self.context
    }
}

/// One step of the responder. Rules never fail: unmatched input is `Continue`.
pub trait Rule: Send + Sync {
    /// Name used in step logs.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    fn apply(&self, turn: &mut Turn<'_>) -> RuleOutcome;
}
