use serde::{Deserialize, Serialize};

use crate::condition::ConditionSet;
use crate::ids::StepId;

/// A single argument of a step invocation.
///
/// Conditions travel in their own variant so the gate never has to guess
/// whether a generic list holds conditions. A `List` never counts as a
/// condition set, whatever it contains.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Argument {
    Text(String),
    Integer(i64),
    Bool(bool),
    Json(serde_json::Value),
    List(Vec<Argument>),
    Conditions(ConditionSet),
}

impl Argument {
    pub fn text(value: impl Into<String>) -> Self {
        Argument::Text(value.into())
    }

    /// The condition set carried by this argument, if any.
    pub fn as_conditions(&self) -> Option<&ConditionSet> {
        match self {
            Argument::Conditions(set) => Some(set),
            _ => None,
        }
    }
}

impl From<ConditionSet> for Argument {
    fn from(set: ConditionSet) -> Self {
        Argument::Conditions(set)
    }
}

/// A pending step invocation: which step, with which arguments.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InterceptedCall {
    pub step: StepId,
    pub arguments: Vec<Argument>,
}

impl InterceptedCall {
    pub fn new(step: impl Into<StepId>) -> Self {
        Self {
            step: step.into(),
            arguments: Vec::new(),
        }
    }

    /// Append an argument.
    pub fn arg(mut self, argument: impl Into<Argument>) -> Self {
        self.arguments.push(argument.into());
        self
    }

    /// Append a condition set as the trailing argument.
    pub fn with_conditions(self, conditions: impl Into<ConditionSet>) -> Self {
        self.arg(Argument::Conditions(conditions.into()))
    }

    pub fn last_argument(&self) -> Option<&Argument> {
        self.arguments.last()
    }

    /// Conditions attached to this call.
    ///
    /// `Some` only when the last argument is a non-empty condition set.
    pub fn condition_set(&self) -> Option<&ConditionSet> {
        self.last_argument()
            .and_then(Argument::as_conditions)
            .filter(|set| !set.is_empty())
    }
}
