//! Integration tests for [`rule_chain::RuleChain`].
//!
//! Covers: evaluation order, the first reply stopping the chain, Continue falling through, and
//! context changes made by an earlier rule being visible to later rules.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chatbot_core::{ConversationContext, Rule, RuleOutcome, Sentiment, Turn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rule_chain::RuleChain;

struct CountingRule {
    name: &'static str,
    calls: Arc<AtomicUsize>,
    reply: Option<&'static str>,
}

impl CountingRule {
    fn new(name: &'static str, calls: Arc<AtomicUsize>, reply: Option<&'static str>) -> Self {
        Self { name, calls, reply }
    }
}

impl Rule for CountingRule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn apply(&self, _turn: &mut Turn<'_>) -> RuleOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.reply {
            Some(text) => RuleOutcome::reply(text),
            None => RuleOutcome::Continue,
        }
    }
}

/// **Test: The first rule that replies stops the chain.**
///
/// **Setup:** Three rules: Continue, Reply("segundo"), Reply("terceiro").
/// **Action:** `chain.run(&mut turn)`.
/// **Expected:** Reply is "segundo"; the third rule is never evaluated.
#[test]
fn test_first_reply_wins() {
    let first = Arc::new(AtomicUsize::new(0));
    let second = Arc::new(AtomicUsize::new(0));
    let third = Arc::new(AtomicUsize::new(0));

    let chain = RuleChain::new()
        .add_rule(Arc::new(CountingRule::new("first", first.clone(), None)))
        .add_rule(Arc::new(CountingRule::new("second", second.clone(), Some("segundo"))))
        .add_rule(Arc::new(CountingRule::new("third", third.clone(), Some("terceiro"))));

    let mut rng = StdRng::seed_from_u64(3);
    let mut turn = Turn::new(ConversationContext::new(), &[], "oi", &mut rng);
    let (outcome, rule) = chain.run(&mut turn);

    assert_eq!(outcome, RuleOutcome::Reply("segundo".to_string()));
    assert_eq!(rule, Some("second"));
    assert_eq!(first.load(Ordering::SeqCst), 1);
    assert_eq!(second.load(Ordering::SeqCst), 1);
    assert_eq!(third.load(Ordering::SeqCst), 0);
}

/// **Test: When every rule continues, the chain returns Continue and evaluates all rules once.**
#[test]
fn test_all_continue_falls_through() {
    let calls = Arc::new(AtomicUsize::new(0));
    let chain = RuleChain::new()
        .add_rule(Arc::new(CountingRule::new("a", calls.clone(), None)))
        .add_rule(Arc::new(CountingRule::new("b", calls.clone(), None)));

    let mut rng = StdRng::seed_from_u64(3);
    let mut turn = Turn::new(ConversationContext::new(), &[], "oi", &mut rng);

    assert_eq!(chain.run(&mut turn), (RuleOutcome::Continue, None));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(chain.rule_names(), vec!["a", "b"]);
}

/// **Test: Context updates made by a continuing rule are seen by later rules.**
///
/// **Setup:** Rule one sets sentiment to Negative and continues; rule two replies with the sentiment.
/// **Expected:** Reply reflects Negative and the turn's context keeps the update.
#[test]
fn test_context_flows_between_rules() {
    struct MarkNegative;
    impl Rule for MarkNegative {
        fn apply(&self, turn: &mut Turn<'_>) -> RuleOutcome {
            turn.context.set_sentiment(Sentiment::Negative);
            RuleOutcome::Continue
        }
    }

    struct EchoSentiment;
    impl Rule for EchoSentiment {
        fn apply(&self, turn: &mut Turn<'_>) -> RuleOutcome {
            RuleOutcome::reply(format!("{:?}", turn.context.sentiment()))
        }
    }

    let chain = RuleChain::new()
        .add_rule(Arc::new(MarkNegative))
        .add_rule(Arc::new(EchoSentiment));

    let mut rng = StdRng::seed_from_u64(3);
    let mut turn = Turn::new(ConversationContext::new(), &[], "oi", &mut rng);
    let (outcome, _) = chain.run(&mut turn);

    assert_eq!(outcome, RuleOutcome::Reply("Negative".to_string()));
    assert_eq!(turn.into_context().sentiment(), Sentiment::Negative);
}
