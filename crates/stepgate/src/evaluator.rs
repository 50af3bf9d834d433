use std::sync::Arc;

use regex::Regex;
use stepgate_types::Condition;

use crate::error::ConditionError;
use crate::traits::{ConditionEvaluator, ValueContext};

/// Default evaluator: `expected` is a regular expression that must match the
/// whole actual value.
///
/// `actual` is resolved as a key in the value context first. When the key is
/// unbound the literal text of `actual` is matched instead, so conditions can
/// also compare two plain values.
pub struct PatternEvaluator {
    context: Arc<dyn ValueContext>,
}

impl PatternEvaluator {
    pub fn new(context: Arc<dyn ValueContext>) -> Self {
        Self { context }
    }

    fn resolve(&self, actual: &str) -> String {
        self.context
            .value(actual)
            .unwrap_or_else(|| actual.to_string())
    }

    fn compile(expected: &str) -> Result<Regex, ConditionError> {
        let invalid = |e: regex::Error| ConditionError::InvalidPattern {
            pattern: expected.to_string(),
            reason: e.to_string(),
        };
        // a stray `)` must not close the anchor group
        Regex::new(expected).map_err(invalid)?;
        Regex::new(&format!("^(?:{expected})$")).map_err(invalid)
    }
}

impl ConditionEvaluator for PatternEvaluator {
    fn check(&self, condition: &Condition) -> Result<bool, ConditionError> {
        let pattern = Self::compile(&condition.expected)?;
        let value = self.resolve(&condition.actual);
        Ok(pattern.is_match(&value))
    }

    fn context_value(&self, key: &str) -> Option<String> {
        self.context.value(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ScenarioContext;

    fn evaluator(ctx: ScenarioContext) -> PatternEvaluator {
        PatternEvaluator::new(Arc::new(ctx))
    }

    #[test]
    fn matches_value_from_context() {
        let eval = evaluator(ScenarioContext::new().with_value("colour", "red"));
        assert!(eval.check(&Condition::new("red", "colour")).unwrap());
        assert!(!eval.check(&Condition::new("blue", "colour")).unwrap());
    }

    #[test]
    fn falls_back_to_literal_actual() {
        let eval = evaluator(ScenarioContext::new());
        assert!(eval.check(&Condition::new("red", "red")).unwrap());
        assert!(!eval.check(&Condition::new("red", "blue")).unwrap());
    }

    #[test]
    fn expected_is_a_whole_value_pattern() {
        let eval = evaluator(ScenarioContext::new().with_value("status", "OK-200"));
        assert!(eval.check(&Condition::new("OK-\\d+", "status")).unwrap());
        assert!(eval.check(&Condition::new("OK|KO-200|OK-200", "status")).unwrap());
        // partial match is not enough
        assert!(!eval.check(&Condition::new("OK", "status")).unwrap());
    }

    #[test]
    fn invalid_pattern_is_a_fault() {
        let eval = evaluator(ScenarioContext::new());
        let err = eval.check(&Condition::new("(unclosed", "x")).unwrap_err();
        assert!(matches!(err, ConditionError::InvalidPattern { .. }));
    }

    #[test]
    fn unbalanced_group_cannot_escape_anchoring() {
        let eval = evaluator(ScenarioContext::new());
        let err = eval.check(&Condition::new("a)|(b", "zzzb")).unwrap_err();
        assert!(matches!(err, ConditionError::InvalidPattern { ref pattern, .. } if pattern == "a)|(b"));
    }

    #[test]
    fn exposes_context_value_for_diagnostics() {
        let eval = evaluator(ScenarioContext::new().with_value("colour", "red"));
        assert_eq!(eval.context_value("colour").as_deref(), Some("red"));
        assert!(eval.context_value("missing").is_none());
    }
}
