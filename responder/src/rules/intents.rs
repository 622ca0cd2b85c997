use chatbot_core::{Rule, RuleOutcome, Turn};

use crate::scripts::IntentPhrase;

/// Whole sentences that name a service outright.
pub struct FixedPhraseRule {
    intents: &'static [IntentPhrase],
}

impl FixedPhraseRule {
    pub fn new(intents: &'static [IntentPhrase]) -> Self {
        Self { intents }
    }
}

impl Rule for FixedPhraseRule {
    fn name(&self) -> &'static str {
        "fixed_phrase"
    }

    fn apply(&self, turn: &mut Turn<'_>) -> RuleOutcome {
        let Some(intent) = self
            .intents
            .iter()
            .find(|i| turn.normalized().contains(i.phrase))
        else {
            return RuleOutcome::Continue;
        };
        turn.context.set_interested_service(intent.service);
        turn.context.push_topic(intent.service);
        RuleOutcome::reply(intent.reply)
    }
}
