//! Sentiment keywords and the escalation for someone who keeps saying they feel bad.

use chatbot_core::{Rule, RuleOutcome, Sentiment, Turn, DISCOUNT_CAP};

use super::COMFORT_DISCOUNT;
use crate::matching::{contains_any, contains_any_word, equals_any};

/// Single-word answers that escalate the discount when the previous turn was already negative.
const NEGATIVE_SINGLE_WORDS: &[&str] = &[
    "mal",
    "triste",
    "péssimo",
    "pessimo",
    "péssima",
    "pessima",
    "cansado",
    "cansada",
    "chateado",
    "chateada",
    "ruim",
    "horrível",
    "horrivel",
    "desanimado",
    "desanimada",
];

const NEGATIVE_PHRASES: &[&str] = &[
    "não estou bem",
    "nao estou bem",
    "não tô bem",
    "nao to bem",
    "não me sinto bem",
    "nao me sinto bem",
];
const NEGATIVE_WORDS: &[&str] = &[
    "mal",
    "triste",
    "péssimo",
    "pessimo",
    "péssima",
    "pessima",
    "cansado",
    "cansada",
    "chateado",
    "chateada",
    "ruim",
    "desanimado",
    "desanimada",
];
const POSITIVE_WORDS: &[&str] = &[
    "bem", "feliz", "ótimo", "otimo", "ótima", "otima", "animado", "animada", "alegre",
];

/// Detected sentiment of `text`, negative taking precedence ("não estou bem").
pub fn detect_sentiment(text: &str) -> Option<Sentiment> {
    if contains_any(text, NEGATIVE_PHRASES) || contains_any_word(text, NEGATIVE_WORDS) {
        Some(Sentiment::Negative)
    } else if contains_any_word(text, POSITIVE_WORDS) {
        Some(Sentiment::Positive)
    } else {
        None
    }
}

pub struct RepeatedNegativeRule {
    first: &'static str,
    cap: &'static str,
}

impl RepeatedNegativeRule {
    pub fn new(first: &'static str, cap: &'static str) -> Self {
        Self { first, cap }
    }
}

impl Rule for RepeatedNegativeRule {
    fn name(&self) -> &'static str {
        "repeated_negative"
    }

    fn apply(&self, turn: &mut Turn<'_>) -> RuleOutcome {
        if !equals_any(turn.normalized(), NEGATIVE_SINGLE_WORDS)
            || turn.context.sentiment() != Sentiment::Negative
        {
            return RuleOutcome::Continue;
        }
        let current = turn.context.discount_amount();
        let reply = if current < COMFORT_DISCOUNT {
            turn.context.grant_discount(COMFORT_DISCOUNT);
            self.first
        } else if current < DISCOUNT_CAP {
            turn.context.grant_discount(DISCOUNT_CAP);
            self.cap
        } else {
            return RuleOutcome::Continue;
        };
        turn.context.push_topic("sentiment");
        RuleOutcome::reply(reply)
    }
}

pub struct SentimentRule {
    positive: &'static str,
    negative_with_discount: &'static str,
    negative: &'static str,
}

impl SentimentRule {
    pub fn new(
        positive: &'static str,
        negative_with_discount: &'static str,
        negative: &'static str,
    ) -> Self {
        Self {
            positive,
            negative_with_discount,
            negative,
        }
    }
}

impl Rule for SentimentRule {
    fn name(&self) -> &'static str {
        "sentiment"
    }

    fn apply(&self, turn: &mut Turn<'_>) -> RuleOutcome {
        let Some(sentiment) = detect_sentiment(turn.normalized()) else {
            return RuleOutcome::Continue;
        };
        turn.context.set_sentiment(sentiment);
        turn.context.push_topic("sentiment");
        match sentiment {
            Sentiment::Negative if !turn.context.discount_granted() => {
                turn.context.grant_discount(COMFORT_DISCOUNT);
                RuleOutcome::reply(self.negative_with_discount)
            }
            Sentiment::Negative => RuleOutcome::reply(self.negative),
            _ => RuleOutcome::reply(self.positive),
        }
    }
}
