//! Bereavement and severe-distress detection. Both run before any sales rule and always end the turn.

use chatbot_core::{Rule, RuleOutcome, Turn, DISCOUNT_CAP};

use super::COMFORT_DISCOUNT;
use crate::matching::{contains_any, contains_any_word, contains_word};

const LOSS_WORDS: &[&str] = &["mãe", "mae", "pai", "filho", "filha", "filhos", "filhas"];
const LOSS_PHRASES: &[&str] = &["familiar", "faleceu", "falecimento", "morreu"];

const SEVERE_PHRASES: &[&str] = &[
    "depressão",
    "depressao",
    "deprimid",
    "suicídio",
    "suicidio",
    "me matar",
    "muito mal",
    "terrível",
    "terrivel",
    "horrível",
    "horrivel",
    "desesperad",
    "sem esperança",
    "sem esperanca",
    "crise de ansiedade",
];
const FIRST_PERSON_WORDS: &[&str] = &["sinto", "estou", "tô", "ando"];

pub struct BereavementRule {
    reply: &'static str,
}

impl BereavementRule {
    pub fn new(reply: &'static str) -> Self {
        Self { reply }
    }

    fn matches(text: &str) -> bool {
        contains_word(text, "perdi")
            && (contains_any_word(text, LOSS_WORDS) || contains_any(text, LOSS_PHRASES))
    }
}

impl Rule for BereavementRule {
    fn name(&self) -> &'static str {
        "bereavement"
    }

    fn apply(&self, turn: &mut Turn<'_>) -> RuleOutcome {
        if !Self::matches(turn.normalized()) {
            return RuleOutcome::Continue;
        }
        turn.context.mark_family_loss();
        turn.context.grant_discount(COMFORT_DISCOUNT);
        turn.context.push_topic("bereavement");
        RuleOutcome::reply(self.reply)
    }
}

pub struct DistressRule {
    reply: &'static str,
}

impl DistressRule {
    pub fn new(reply: &'static str) -> Self {
        Self { reply }
    }

    fn matches(text: &str) -> bool {
        contains_any(text, SEVERE_PHRASES) && contains_any_word(text, FIRST_PERSON_WORDS)
    }
}

impl Rule for DistressRule {
    fn name(&self) -> &'static str {
        "severe_distress"
    }

    fn apply(&self, turn: &mut Turn<'_>) -> RuleOutcome {
        if !Self::matches(turn.normalized()) {
            return RuleOutcome::Continue;
        }
        turn.context.mark_severe_mental_state();
        turn.context.grant_discount(DISCOUNT_CAP);
        turn.context.push_topic("distress");
        RuleOutcome::reply(self.reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::apply;
    use chatbot_core::ConversationContext;

    #[test]
    fn test_bereavement_grants_fifteen() {
        let rule = BereavementRule::new("condolências");
        let (outcome, ctx) = apply(&rule, ConversationContext::new(), "Perdi minha mãe semana passada");
        assert_eq!(outcome, RuleOutcome::reply("condolências"));
        assert!(ctx.mentioned_family_loss());
        assert!(ctx.discount_granted());
        assert_eq!(ctx.discount_amount(), 15);
    }

    #[test]
    fn test_bereavement_keeps_higher_discount() {
        let mut ctx = ConversationContext::new();
        ctx.grant_discount(20);
        let rule = BereavementRule::new("condolências");
        let (_, ctx) = apply(&rule, ctx, "meu pai faleceu, perdi ele em março");
        assert_eq!(ctx.discount_amount(), 20);
    }

    #[test]
    fn test_bereavement_needs_loss_keyword() {
        let rule = BereavementRule::new("condolências");
        let (outcome, ctx) = apply(&rule, ConversationContext::new(), "perdi um dente");
        assert_eq!(outcome, RuleOutcome::Continue);
        assert!(!ctx.mentioned_family_loss());
        let (outcome, _) = apply(&rule, ConversationContext::new(), "meu pai vai me levar");
        assert_eq!(outcome, RuleOutcome::Continue);
    }

    #[test]
    fn test_distress_needs_first_person_marker() {
        let rule = DistressRule::new("apoio");
        let (outcome, ctx) = apply(
            &rule,
            ConversationContext::new(),
            "estou muito mal, acho que tenho depressão",
        );
        assert_eq!(outcome, RuleOutcome::reply("apoio"));
        assert!(ctx.has_severe_mental_state());
        assert_eq!(ctx.discount_amount(), 20);

        let (outcome, ctx) = apply(&rule, ConversationContext::new(), "o filme foi horrível");
        assert_eq!(outcome, RuleOutcome::Continue);
        assert!(!ctx.has_severe_mental_state());
    }
}
