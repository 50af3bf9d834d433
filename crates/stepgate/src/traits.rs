//! Collaborator capabilities consumed by the gate.

use stepgate_types::{Condition, StepId};

use crate::error::{CatalogError, ConditionError, ReportError};

/// Tells whether a step is marked as conditionable.
///
/// Must be a pure function of the step identity.
pub trait MarkerLookup: Send + Sync {
    fn is_conditionable(&self, step: &StepId) -> bool;
}

/// Read-only view over the scenario's key/value context.
pub trait ValueContext: Send + Sync {
    fn value(&self, key: &str) -> Option<String>;
}

/// Evaluates a single condition.
pub trait ConditionEvaluator: Send + Sync {
    /// `Ok(false)` means the condition does not hold. `Err` is a fault and
    /// is propagated to the caller of the gate untouched.
    fn check(&self, condition: &Condition) -> Result<bool, ConditionError>;

    /// Context value currently bound to `key`, for diagnostics only.
    fn context_value(&self, _key: &str) -> Option<String> {
        None
    }
}

/// Resolves message keys to localized text.
pub trait MessageCatalog: Send + Sync {
    fn message(&self, key: &str, locale: &str) -> Result<String, CatalogError>;
}

/// Write-only output of the scenario currently running.
pub trait ReportSink {
    fn write(&mut self, message: &str) -> Result<(), ReportError>;
}
