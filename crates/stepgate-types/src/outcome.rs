use serde::{Deserialize, Serialize};

/// Decision taken by the gate for one call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Run the step; its result is returned unchanged.
    Proceed,
    /// Do not run the step. `reason` is the localized message shown in the report.
    Skip { reason: String },
}

impl Outcome {
    pub fn skip(reason: impl Into<String>) -> Self {
        Outcome::Skip {
            reason: reason.into(),
        }
    }

    pub fn is_proceed(&self) -> bool {
        matches!(self, Outcome::Proceed)
    }

    pub fn is_skip(&self) -> bool {
        matches!(self, Outcome::Skip { .. })
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Outcome::Skip { reason } => Some(reason),
            Outcome::Proceed => None,
        }
    }
}
