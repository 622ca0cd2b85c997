//! Per-session conversation context.
//!
//! Every transition is additive: the discount only grows (up to [`DISCOUNT_CAP`]), flags are never
//! cleared and topics are only appended. A fresh context is the only way back to zero.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Highest discount percentage a session can reach.
pub const DISCOUNT_CAP: u8 = 20;

/// Last sentiment detected from free-text sentiment keywords.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Pix,
    Debit,
    Credit,
    Cash,
}

/// Session state threaded through every responder call. Owned by exactly one session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationContext {
    last_interaction_time: Option<DateTime<Utc>>,
    sentiment: Sentiment,
    discount_granted: bool,
    discount_amount: u8,
    mentioned_family_loss: bool,
    has_severe_mental_state: bool,
    payment_method_mentioned: Option<PaymentMethod>,
    interested_service: Option<String>,
    recent_topics: Vec<String>,
}

impl ConversationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_interaction_time(&self) -> Option<DateTime<Utc>> {
        self.last_interaction_time
    }

    pub fn sentiment(&self) -> Sentiment {
        self.sentiment
    }

    pub fn discount_granted(&self) -> bool {
        self.discount_granted
    }

    pub fn discount_amount(&self) -> u8 {
        self.discount_amount
    }

    pub fn mentioned_family_loss(&self) -> bool {
        self.mentioned_family_loss
    }

    pub fn has_severe_mental_state(&self) -> bool {
        self.has_severe_mental_state
    }

    pub fn payment_method_mentioned(&self) -> Option<PaymentMethod> {
        self.payment_method_mentioned
    }

    pub fn interested_service(&self) -> Option<&str> {
        self.interested_service.as_deref()
    }

    pub fn recent_topics(&self) -> &[String] {
        &self.recent_topics
    }

    pub fn has_topic(&self, topic: &str) -> bool {
        self.recent_topics.iter().any(|t| t == topic)
    }

    /// Raises the discount to at least `floor` (capped) and marks it granted.
    /// Returns the resulting amount. Never lowers the current amount.
    pub fn grant_discount(&mut self, floor: u8) -> u8 {
        let target = floor.min(DISCOUNT_CAP);
        self.discount_amount = self.discount_amount.max(target);
        self.discount_granted = true;
        self.discount_amount
    }

    pub fn is_discount_capped(&self) -> bool {
        self.discount_amount >= DISCOUNT_CAP
    }

    pub fn mark_family_loss(&mut self) {
        self.mentioned_family_loss = true;
    }

    pub fn mark_severe_mental_state(&mut self) {
        self.has_severe_mental_state = true;
    }

    pub fn set_sentiment(&mut self, sentiment: Sentiment) {
        self.sentiment = sentiment;
    }

    pub fn set_payment_method(&mut self, method: PaymentMethod) {
        self.payment_method_mentioned = Some(method);
    }

    pub fn set_interested_service(&mut self, service: impl Into<String>) {
        self.interested_service = Some(service.into());
    }

    pub fn push_topic(&mut self, topic: impl Into<String>) {
        self.recent_topics.push(topic.into());
    }

    /// Stamps the time of the latest bot reply.
    pub fn touch(&mut self, at: DateTime<Utc>) {
        self.last_interaction_time = Some(at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_context_is_neutral_and_undiscounted() {
        let ctx = ConversationContext::new();
        assert_eq!(ctx.sentiment(), Sentiment::Neutral);
        assert!(!ctx.discount_granted());
        assert_eq!(ctx.discount_amount(), 0);
        assert!(ctx.recent_topics().is_empty());
        assert!(ctx.last_interaction_time().is_none());
    }

    #[test]
    fn test_grant_discount_never_decreases() {
        let mut ctx = ConversationContext::new();
        assert_eq!(ctx.grant_discount(15), 15);
        assert_eq!(ctx.grant_discount(10), 15);
        assert!(ctx.discount_granted());
        assert_eq!(ctx.grant_discount(20), 20);
        assert_eq!(ctx.grant_discount(15), 20);
    }

    #[test]
    fn test_grant_discount_is_capped() {
        let mut ctx = ConversationContext::new();
        assert_eq!(ctx.grant_discount(35), DISCOUNT_CAP);
        assert!(ctx.is_discount_capped());
    }

    #[test]
    fn test_topics_are_append_only() {
        let mut ctx = ConversationContext::new();
        ctx.push_topic("pricing");
        ctx.push_topic("payment");
        ctx.push_topic("pricing");
        assert_eq!(ctx.recent_topics(), ["pricing", "payment", "pricing"]);
        assert!(ctx.has_topic("payment"));
        assert!(!ctx.has_topic("clareamento"));
    }

    #[test]
    fn test_context_serializes_camel_case() {
        let mut ctx = ConversationContext::new();
        ctx.grant_discount(10);
        ctx.set_payment_method(PaymentMethod::Pix);
        let json = serde_json::to_value(&ctx).unwrap();
        assert_eq!(json["discountAmount"], 10);
        assert_eq!(json["discountGranted"], true);
        assert_eq!(json["paymentMethodMentioned"], "pix");
        let back: ConversationContext = serde_json::from_value(json).unwrap();
        assert_eq!(back, ctx);
    }
}
