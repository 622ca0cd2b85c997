//! The responder: one utterance in, one reply and an updated context out.

use chatbot_core::{ConversationContext, Message, RuleOutcome, Turn};
use rand::RngCore;
use rule_chain::RuleChain;
use tracing::{debug, instrument};

use crate::rules::build_chain;
use crate::scripts::ScriptBook;
use crate::suggestions::{suggestions, Suggestion};

/// Result of one `respond` call.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub text: String,
    pub context: ConversationContext,
    /// Rule that produced the reply; `None` for the default reply.
    pub rule: Option<&'static str>,
}

/// Scripted responder over an immutable [`ScriptBook`]. Holds no session state; the caller owns
/// and re-supplies the context on every call.
pub struct Responder {
    scripts: ScriptBook,
    chain: RuleChain,
}

impl Responder {
    pub fn new(scripts: ScriptBook) -> Self {
        let chain = build_chain(&scripts);
        Self { scripts, chain }
    }

    pub fn scripts(&self) -> &ScriptBook {
        &self.scripts
    }

    /// Rule names in precedence order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.chain.rule_names()
    }

    /// Classifies `utterance` and returns the reply with the updated context. `context` itself is
    /// left untouched. Any text is valid input; unmatched text gets the default reply.
    #[instrument(skip_all, fields(history_len = history.len()))]
    pub fn respond(
        &self,
        context: &ConversationContext,
        history: &[Message],
        utterance: &str,
        rng: &mut dyn RngCore,
    ) -> Reply {
        let mut turn = Turn::new(context.clone(), history, utterance, rng);
        let (outcome, rule) = self.chain.run(&mut turn);
        let context = turn.into_context();

        let text = match outcome {
            RuleOutcome::Reply(text) => text,
            RuleOutcome::Continue => {
                debug!("no rule matched, using default reply");
                self.scripts.default_reply.to_string()
            }
        };

        Reply {
            text,
            context,
            rule,
        }
    }

    /// Quick-reply chips for the current history and context.
    pub fn suggestions(&self, history: &[Message], context: &ConversationContext) -> Vec<Suggestion> {
        suggestions(history, context)
    }
}

impl Default for Responder {
    fn default() -> Self {
        Self::new(ScriptBook::portuguese())
    }
}
