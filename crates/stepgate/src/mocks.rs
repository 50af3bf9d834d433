use std::sync::Mutex;

use stepgate_types::{Condition, StepId};

use crate::error::{ConditionError, ReportError};
use crate::traits::{ConditionEvaluator, MarkerLookup, ReportSink};

/// Mock evaluator for testing.
///
/// Answers checks from a script, in call order, and records every condition
/// it was asked about. Calls past the end of the script get the default
/// answer.
pub struct ScriptedEvaluator {
    script: Vec<Result<bool, ConditionError>>,
    default: bool,
    evaluated: Mutex<Vec<Condition>>,
}

impl ScriptedEvaluator {
    /// Create an evaluator answering `results` in order, then `true`.
    pub fn new(results: Vec<bool>) -> Self {
        Self::with_script(results.into_iter().map(Ok).collect())
    }

    /// Create an evaluator that may also fault.
    pub fn with_script(script: Vec<Result<bool, ConditionError>>) -> Self {
        Self {
            script,
            default: true,
            evaluated: Mutex::new(Vec::new()),
        }
    }

    /// Create an evaluator giving the same answer to every check.
    pub fn always(answer: bool) -> Self {
        Self {
            script: Vec::new(),
            default: answer,
            evaluated: Mutex::new(Vec::new()),
        }
    }

    /// Conditions checked so far, in order.
    pub fn evaluated(&self) -> Vec<Condition> {
        self.evaluated
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn evaluation_count(&self) -> usize {
        self.evaluated.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

impl ConditionEvaluator for ScriptedEvaluator {
    fn check(&self, condition: &Condition) -> Result<bool, ConditionError> {
        let mut evaluated = self.evaluated.lock().unwrap_or_else(|e| e.into_inner());
        let index = evaluated.len();
        evaluated.push(condition.clone());
        self.script.get(index).cloned().unwrap_or(Ok(self.default))
    }
}

/// Mock marker lookup giving the same answer for every step.
pub struct StaticMarkers(pub bool);

impl MarkerLookup for StaticMarkers {
    fn is_conditionable(&self, _step: &StepId) -> bool {
        self.0
    }
}

/// Mock report that rejects every write.
#[derive(Default)]
pub struct FailingReport {
    pub attempts: usize,
}

impl ReportSink for FailingReport {
    fn write(&mut self, _message: &str) -> Result<(), ReportError> {
        self.attempts += 1;
        Err(ReportError::Write("mock report: writes disabled".into()))
    }
}
