//! Payment-method questions. Never touches the discount.

use chatbot_core::{PaymentMethod, Rule, RuleOutcome, Turn};

use crate::matching::{contains_any, contains_any_word};
use crate::scripts::PaymentScripts;

const DEBIT_PHRASES: &[&str] = &["débito", "debito"];
const CREDIT_PHRASES: &[&str] = &["crédito", "credito", "cartão", "cartao"];
const CASH_WORDS: &[&str] = &["dinheiro", "espécie", "especie"];
const GENERAL_PHRASES: &[&str] = &["pagamento", "pagar", "parcel"];

/// Detects the method named in `text`. PIX wins over debit, debit over credit ("cartão de débito").
pub fn detect_payment_method(text: &str) -> Option<PaymentMethod> {
    if text.contains("pix") {
        Some(PaymentMethod::Pix)
    } else if contains_any(text, DEBIT_PHRASES) {
        Some(PaymentMethod::Debit)
    } else if contains_any(text, CREDIT_PHRASES) {
        Some(PaymentMethod::Credit)
    } else if contains_any_word(text, CASH_WORDS) {
        Some(PaymentMethod::Cash)
    } else {
        None
    }
}

pub struct PaymentMethodRule {
    scripts: PaymentScripts,
}

impl PaymentMethodRule {
    pub fn new(scripts: PaymentScripts) -> Self {
        Self { scripts }
    }

    fn variants(&self, method: Option<PaymentMethod>) -> &'static [&'static str] {
        match method {
            Some(PaymentMethod::Pix) => self.scripts.pix,
            Some(PaymentMethod::Debit) => self.scripts.debit,
            Some(PaymentMethod::Credit) => self.scripts.credit,
            Some(PaymentMethod::Cash) => self.scripts.cash,
            None => self.scripts.general,
        }
    }
}

impl Rule for PaymentMethodRule {
    fn name(&self) -> &'static str {
        "payment_method"
    }

    fn apply(&self, turn: &mut Turn<'_>) -> RuleOutcome {
        let method = detect_payment_method(turn.normalized());
        if method.is_none() && !contains_any(turn.normalized(), GENERAL_PHRASES) {
            return RuleOutcome::Continue;
        }
        let Some(text) = turn.pick(self.variants(method)) else {
            return RuleOutcome::Continue;
        };
        if let Some(method) = method {
            turn.context.set_payment_method(method);
        }
        turn.context.push_topic("payment");
        RuleOutcome::reply(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::apply;
    use crate::scripts::ScriptBook;
    use chatbot_core::ConversationContext;

    #[test]
    fn test_detect_payment_method() {
        assert_eq!(detect_payment_method("aceita pix?"), Some(PaymentMethod::Pix));
        assert_eq!(
            detect_payment_method("pode ser no cartão de débito?"),
            Some(PaymentMethod::Debit)
        );
        assert_eq!(detect_payment_method("no cartão"), Some(PaymentMethod::Credit));
        assert_eq!(detect_payment_method("pago em dinheiro"), Some(PaymentMethod::Cash));
        assert_eq!(detect_payment_method("como faço o pagamento"), None);
    }

    #[test]
    fn test_pix_reply_is_a_pix_variant_and_discount_untouched() {
        let book = ScriptBook::portuguese();
        let rule = PaymentMethodRule::new(book.payment);
        let mut ctx = ConversationContext::new();
        ctx.grant_discount(10);
        let (outcome, ctx) = apply(&rule, ctx, "Vocês aceitam PIX?");
        match outcome {
            RuleOutcome::Reply(text) => assert!(book.payment.pix.contains(&text.as_str())),
            other => panic!("expected reply, got {other:?}"),
        }
        assert_eq!(ctx.payment_method_mentioned(), Some(PaymentMethod::Pix));
        assert_eq!(ctx.discount_amount(), 10);
        assert!(ctx.has_topic("payment"));
    }

    #[test]
    fn test_generic_payment_leaves_method_unset() {
        let book = ScriptBook::portuguese();
        let rule = PaymentMethodRule::new(book.payment);
        let (outcome, ctx) = apply(&rule, ConversationContext::new(), "quais as formas de pagamento?");
        match outcome {
            RuleOutcome::Reply(text) => assert!(book.payment.general.contains(&text.as_str())),
            other => panic!("expected reply, got {other:?}"),
        }
        assert_eq!(ctx.payment_method_mentioned(), None);
        assert!(!ctx.discount_granted());
    }
}
