//! Price objections and comparison shopping: a first occurrence buys a discount, repeats get a
//! persuasion script instead.

use chatbot_core::{Rule, RuleOutcome, Turn};

use super::OBJECTION_DISCOUNT;
use crate::matching::{contains_any, contains_any_word};

const EXPENSIVE_WORDS: &[&str] = &[
    "caro", "cara", "caros", "caras", "caríssimo", "carissimo", "salgado",
];
const NO_MONEY_PHRASES: &[&str] = &[
    "sem dinheiro",
    "não tenho dinheiro",
    "nao tenho dinheiro",
    "não posso pagar",
    "nao posso pagar",
    "não cabe no bolso",
    "nao cabe no bolso",
    "fora do meu orçamento",
    "muito puxado",
];

const COMPARISON_PHRASES: &[&str] = &[
    "comparando preço",
    "comparando preco",
    "comparando valores",
    "mais barato",
    "mais em conta",
    "outra clínica",
    "outra clinica",
    "outro dentista",
    "outro lugar",
    "pesquisando preço",
    "pesquisando preco",
    "concorrência",
    "concorrencia",
];

const COMPARISON_TOPIC: &str = "comparison";

pub struct PriceObjectionRule {
    primary: &'static str,
    alternates: &'static [&'static str],
}

impl PriceObjectionRule {
    pub fn new(primary: &'static str, alternates: &'static [&'static str]) -> Self {
        Self { primary, alternates }
    }

    fn matches(text: &str) -> bool {
        contains_any_word(text, EXPENSIVE_WORDS) || contains_any(text, NO_MONEY_PHRASES)
    }
}

impl Rule for PriceObjectionRule {
    fn name(&self) -> &'static str {
        "price_objection"
    }

    fn apply(&self, turn: &mut Turn<'_>) -> RuleOutcome {
        if !Self::matches(turn.normalized()) {
            return RuleOutcome::Continue;
        }
        turn.context.push_topic("pricing");
        if !turn.context.discount_granted() {
            turn.context.grant_discount(OBJECTION_DISCOUNT);
            return RuleOutcome::reply(self.primary);
        }
        match turn.pick(self.alternates) {
            Some(text) => RuleOutcome::reply(text),
            None => RuleOutcome::reply(self.primary),
        }
    }
}

pub struct ComparisonShoppingRule {
    primary: &'static str,
    alternates: &'static [&'static str],
}

impl ComparisonShoppingRule {
    pub fn new(primary: &'static str, alternates: &'static [&'static str]) -> Self {
        Self { primary, alternates }
    }
}

impl Rule for ComparisonShoppingRule {
    fn name(&self) -> &'static str {
        "comparison_shopping"
    }

    fn apply(&self, turn: &mut Turn<'_>) -> RuleOutcome {
        if !contains_any(turn.normalized(), COMPARISON_PHRASES) {
            return RuleOutcome::Continue;
        }
        let first_time = !turn.context.has_topic(COMPARISON_TOPIC);
        turn.context.push_topic(COMPARISON_TOPIC);
        if first_time {
            turn.context.grant_discount(OBJECTION_DISCOUNT);
            return RuleOutcome::reply(self.primary);
        }
        match turn.pick(self.alternates) {
            Some(text) => RuleOutcome::reply(text),
            None => RuleOutcome::reply(self.primary),
        }
    }
}
