use std::sync::Arc;

use stepgate_types::{ConditionSet, InterceptedCall, Outcome, StepId};
use tracing::{debug, info};

use crate::catalog::{BundleCatalog, SKIPPED_DUE_TO_CONDITIONS};
use crate::config::GateConfig;
use crate::error::GateError;
use crate::evaluator::PatternEvaluator;
use crate::traits::{ConditionEvaluator, MarkerLookup, MessageCatalog, ReportSink, ValueContext};

/// Result of running a step through [`ConditionGate::around`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Invocation<R> {
    /// The step ran; this is its return value, untouched.
    Proceeded(R),
    /// The step did not run.
    Skipped { reason: String },
}

impl<R> Invocation<R> {
    pub fn is_skipped(&self) -> bool {
        matches!(self, Invocation::Skipped { .. })
    }

    /// The step's return value, if it ran.
    pub fn into_value(self) -> Option<R> {
        match self {
            Invocation::Proceeded(value) => Some(value),
            Invocation::Skipped { .. } => None,
        }
    }
}

/// The Condition Gate.
///
/// Sits in front of a step and decides whether it runs. A call is gated only
/// when it is marked conditionable and its last argument is a non-empty
/// condition set; everything else passes straight through.
///
/// The gate keeps no per-call state. Collaborators are shared trait objects
/// and the report handle is supplied by the caller on every call, so one gate
/// can serve several scenarios on several threads.
pub struct ConditionGate {
    evaluator: Arc<dyn ConditionEvaluator>,
    catalog: Arc<dyn MessageCatalog>,
    config: GateConfig,
}

impl ConditionGate {
    /// Create a new gate from its collaborators.
    pub fn new(
        evaluator: Arc<dyn ConditionEvaluator>,
        catalog: Arc<dyn MessageCatalog>,
        config: GateConfig,
    ) -> Self {
        Self {
            evaluator,
            catalog,
            config,
        }
    }

    /// Gate using pattern matching against `context` and the built-in catalog.
    pub fn with_context(context: Arc<dyn ValueContext>, config: GateConfig) -> Self {
        Self::new(
            Arc::new(PatternEvaluator::new(context)),
            Arc::new(BundleCatalog::builtin()),
            config,
        )
    }

    /// Configuration accessor.
    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Decide whether `call` may run.
    ///
    /// On `Skip` the localized reason is also written to `report`. Faults from
    /// the evaluator, the catalog or the report are returned as-is.
    pub fn intercept(
        &self,
        call: &InterceptedCall,
        is_conditionable: bool,
        report: &mut dyn ReportSink,
    ) -> Result<Outcome, GateError> {
        if !is_conditionable {
            return Ok(Outcome::Proceed);
        }

        let Some(conditions) = call.condition_set() else {
            debug!(step = %call.step, "No conditions attached");
            return Ok(Outcome::Proceed);
        };

        self.announce(&call.step, conditions);

        if self.check_conditions(conditions)? {
            debug!(step = %call.step, "Conditions hold, proceeding");
            return Ok(Outcome::Proceed);
        }

        let reason = self
            .catalog
            .message(SKIPPED_DUE_TO_CONDITIONS, &self.config.locale)?;
        report.write(&reason)?;

        info!(step = %call.step, reason = %reason, "Step skipped due to conditions");

        Ok(Outcome::Skip { reason })
    }

    /// Like [`intercept`](Self::intercept), asking `markers` whether the step
    /// is conditionable.
    pub fn intercept_marked(
        &self,
        call: &InterceptedCall,
        markers: &dyn MarkerLookup,
        report: &mut dyn ReportSink,
    ) -> Result<Outcome, GateError> {
        self.intercept(call, markers.is_conditionable(&call.step), report)
    }

    /// Run `proceed` unless the gate skips the call.
    ///
    /// `proceed` is called at most once and never on skip.
    pub fn around<R, F>(
        &self,
        call: &InterceptedCall,
        is_conditionable: bool,
        report: &mut dyn ReportSink,
        proceed: F,
    ) -> Result<Invocation<R>, GateError>
    where
        F: FnOnce() -> R,
    {
        match self.intercept(call, is_conditionable, report)? {
            Outcome::Proceed => Ok(Invocation::Proceeded(proceed())),
            Outcome::Skip { reason } => Ok(Invocation::Skipped { reason }),
        }
    }

    /// Check every condition of the set.
    ///
    /// Conditions are checked in order. With `short_circuit` on, checking
    /// stops at the first one that does not hold.
    pub fn check_conditions(&self, conditions: &ConditionSet) -> Result<bool, GateError> {
        let mut all_hold = true;
        for condition in conditions {
            debug!(
                actual = %condition.actual,
                context_value = ?self.evaluator.context_value(&condition.actual),
                "Checking condition"
            );
            if !self.evaluator.check(condition)? {
                all_hold = false;
                if self.config.short_circuit {
                    break;
                }
            }
        }
        Ok(all_hold)
    }

    /// Log a step together with the field it acts on and its conditions.
    pub fn announce_with_field(&self, step: &StepId, field: &str, conditions: &ConditionSet) {
        debug!(
            step = %step,
            field = field,
            conditions = conditions.len(),
            "{}: {} with {} condition(s)",
            step,
            field,
            conditions.len()
        );
        Self::log_conditions(conditions);
    }

    fn announce(&self, step: &StepId, conditions: &ConditionSet) {
        debug!(
            step = %step,
            conditions = conditions.len(),
            "{} with {} condition(s)",
            step,
            conditions.len()
        );
        Self::log_conditions(conditions);
    }

    fn log_conditions(conditions: &ConditionSet) {
        for (i, condition) in conditions.iter().enumerate() {
            let index = i + 1;
            debug!(index, expected = %condition.expected, "Expected condition");
            debug!(index, actual = %condition.actual, "Actual condition");
        }
    }
}
