use chatbot_core::{Rule, RuleOutcome, Turn};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Ordered rules; the first rule that replies ends the turn.
#[derive(Clone, Default)]
pub struct RuleChain {
    rules: Vec<Arc<dyn Rule>>,
}

impl RuleChain {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn add_rule(mut self, rule: Arc<dyn Rule>) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Names in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Runs the turn through the rules. Returns the first reply and the name of the rule that
    /// produced it, or `(Continue, None)` when no rule replied.
    #[instrument(skip(self, turn), fields(utterance_len = turn.normalized().len()))]
    pub fn run(&self, turn: &mut Turn<'_>) -> (RuleOutcome, Option<&'static str>) {
        debug!(rules = self.rules.len(), "step: rule_chain started");

        for rule in &self.rules {
            let rule_name = rule.name();
            debug!(rule = %rule_name, "step: rule evaluating");

            let outcome = rule.apply(turn);
            match outcome {
                RuleOutcome::Reply(ref text) => {
                    info!(
                        rule = %rule_name,
                        reply_len = text.len(),
                        discount = turn.context.discount_amount(),
                        "step: rule replied, chain stopped"
                    );
                    return (outcome, Some(rule_name));
                }
                RuleOutcome::Continue => continue,
            }
        }

        debug!("step: rule_chain finished without reply");
        (RuleOutcome::Continue, None)
    }
}
