use chatbot_core::{Rule, RuleOutcome, Turn};

use crate::scripts::KeywordEntry;

/// Ordered keyword table. Declaration order decides ties.
pub struct KeywordTableRule {
    table: &'static [KeywordEntry],
}

impl KeywordTableRule {
    pub fn new(table: &'static [KeywordEntry]) -> Self {
        Self { table }
    }

    /// First entry matching `text`, if any.
    pub fn lookup(&self, text: &str) -> Option<&'static KeywordEntry> {
        self.table.iter().find(|entry| entry.pattern.matches(text))
    }
}

impl Rule for KeywordTableRule {
    fn name(&self) -> &'static str {
        "keyword_table"
    }

    fn apply(&self, turn: &mut Turn<'_>) -> RuleOutcome {
        let Some(entry) = self.lookup(turn.normalized()) else {
            return RuleOutcome::Continue;
        };
        if let Some(service) = entry.service {
            turn.context.set_interested_service(service);
        }
        turn.context.push_topic(entry.topic);
        RuleOutcome::reply(entry.reply)
    }
}
