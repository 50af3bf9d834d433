use serde::{Deserialize, Serialize};

use crate::error::ReportError;
use crate::traits::ReportSink;

/// In-memory output of a single scenario.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ScenarioReport {
    scenario: String,
    entries: Vec<String>,
    closed: bool,
}

impl ScenarioReport {
    pub fn new(scenario: impl Into<String>) -> Self {
        Self {
            scenario: scenario.into(),
            entries: Vec::new(),
            closed: false,
        }
    }

    pub fn scenario(&self) -> &str {
        &self.scenario
    }

    /// Messages written so far, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Mark the scenario finished. Further writes fail.
    pub fn close(&mut self) {
        self.closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl ReportSink for ScenarioReport {
    fn write(&mut self, message: &str) -> Result<(), ReportError> {
        if self.closed {
            return Err(ReportError::Closed(self.scenario.clone()));
        }
        self.entries.push(message.to_string());
        Ok(())
    }
}
