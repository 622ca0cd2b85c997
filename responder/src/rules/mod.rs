//! Responder rules, evaluated in the order [`build_chain`] registers them.

mod care;
mod fallback;
mod intents;
mod payment;
mod pricing;
mod sentiment;
mod why_us;

use std::sync::Arc;

use rule_chain::RuleChain;

use crate::scripts::ScriptBook;

pub use care::{BereavementRule, DistressRule};
pub use fallback::KeywordTableRule;
pub use intents::FixedPhraseRule;
pub use payment::PaymentMethodRule;
pub use pricing::{ComparisonShoppingRule, PriceObjectionRule};
pub use sentiment::{RepeatedNegativeRule, SentimentRule};
pub use why_us::WhyChooseUsRule;

/// Discount floor for a first price objection or comparison.
pub const OBJECTION_DISCOUNT: u8 = 10;
/// Discount floor for bereavement and for the first negative-sentiment escalation.
pub const COMFORT_DISCOUNT: u8 = 15;

/// Builds the chain in precedence order. The default reply is not a rule: it is what the
/// responder answers when the chain ends without a reply.
pub fn build_chain(book: &ScriptBook) -> RuleChain {
    RuleChain::new()
        .add_rule(Arc::new(BereavementRule::new(book.bereavement)))
        .add_rule(Arc::new(DistressRule::new(book.distress)))
        .add_rule(Arc::new(PriceObjectionRule::new(
            book.price_primary,
            book.price_alternates,
        )))
        .add_rule(Arc::new(ComparisonShoppingRule::new(
            book.comparison_primary,
            book.comparison_alternates,
        )))
        .add_rule(Arc::new(PaymentMethodRule::new(book.payment)))
        .add_rule(Arc::new(RepeatedNegativeRule::new(
            book.negative_escalation,
            book.negative_escalation_cap,
        )))
        .add_rule(Arc::new(FixedPhraseRule::new(book.intents)))
        .add_rule(Arc::new(SentimentRule::new(
            book.sentiment_positive,
            book.sentiment_negative_discount,
            book.sentiment_negative,
        )))
        .add_rule(Arc::new(WhyChooseUsRule::new(book.hard_sell, book.advantages)))
        .add_rule(Arc::new(KeywordTableRule::new(book.keywords)))
}
