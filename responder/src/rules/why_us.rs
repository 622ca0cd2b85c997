use chatbot_core::{Rule, RuleOutcome, Turn};

use crate::matching::{contains_any, contains_word};

const HARD_SELL_PHRASES: &[&str] = &[
    "por que devo contratar",
    "por que eu deveria contratar",
    "por que contratar",
    "por que devo escolher",
    "por que eu deveria escolher",
    "por que fechar com vocês",
    "por que fechar com voces",
    "me convença",
    "me convenca",
];
const ADVANTAGE_PHRASES: &[&str] = &[
    "vantagem",
    "vantagens",
    "diferencial",
    "diferenciais",
    "por que vocês",
    "por que voces",
    "por que escolher",
    "melhor clínica",
    "melhor clinica",
    "melhor dentista",
    "são os melhores",
    "sao os melhores",
    "de melhor",
];

/// "Why should I pick you": explicit requests get a long hard-sell script, softer ones a short
/// advantage line.
pub struct WhyChooseUsRule {
    hard_sell: &'static [&'static str],
    advantages: &'static [&'static str],
}

impl WhyChooseUsRule {
    pub fn new(hard_sell: &'static [&'static str], advantages: &'static [&'static str]) -> Self {
        Self {
            hard_sell,
            advantages,
        }
    }
}

impl Rule for WhyChooseUsRule {
    fn name(&self) -> &'static str {
        "why_choose_us"
    }

    fn apply(&self, turn: &mut Turn<'_>) -> RuleOutcome {
        let options = if contains_any(turn.normalized(), HARD_SELL_PHRASES) {
            self.hard_sell
        } else if contains_any(turn.normalized(), ADVANTAGE_PHRASES)
            || contains_word(turn.normalized(), "melhor")
        {
            self.advantages
        } else {
            return RuleOutcome::Continue;
        };
        match turn.pick(options) {
            Some(text) => {
                turn.context.push_topic("why_us");
                RuleOutcome::reply(text)
            }
            None => RuleOutcome::Continue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::apply;
    use crate::scripts::ScriptBook;
    use chatbot_core::ConversationContext;

    #[test]
    fn test_explicit_request_gets_hard_sell() {
        let book = ScriptBook::portuguese();
        let rule = WhyChooseUsRule::new(book.hard_sell, book.advantages);
        let (outcome, _) = apply(&rule, ConversationContext::new(), "Por que devo contratar vocês?");
        match outcome {
            RuleOutcome::Reply(text) => assert!(book.hard_sell.contains(&text.as_str())),
            other => panic!("expected reply, got {other:?}"),
        }
    }

    #[test]
    fn test_soft_request_gets_advantage() {
        let book = ScriptBook::portuguese();
        let rule = WhyChooseUsRule::new(book.hard_sell, book.advantages);
        let (outcome, ctx) = apply(&rule, ConversationContext::new(), "qual o diferencial de vocês?");
        match outcome {
            RuleOutcome::Reply(text) => assert!(book.advantages.contains(&text.as_str())),
            other => panic!("expected reply, got {other:?}"),
        }
        assert!(ctx.has_topic("why_us"));
    }

    #[test]
    fn test_bare_melhor_gets_advantage() {
        let book = ScriptBook::portuguese();
        let rule = WhyChooseUsRule::new(book.hard_sell, book.advantages);
        let (outcome, _) = apply(&rule, ConversationContext::new(), "qual é o melhor?");
        match outcome {
            RuleOutcome::Reply(text) => assert!(book.advantages.contains(&text.as_str())),
            other => panic!("expected reply, got {other:?}"),
        }
        let (outcome, _) = apply(&rule, ConversationContext::new(), "melhorou a dor");
        assert_eq!(outcome, RuleOutcome::Continue);
    }
}
