use std::collections::HashSet;

use stepgate_types::StepId;

use crate::config::GateConfig;
use crate::traits::MarkerLookup;

/// Explicit table of conditionable steps.
///
/// Filled by whatever layer registers step definitions; the gate only ever
/// asks whether a step is in it.
#[derive(Clone, Debug, Default)]
pub struct ConditionableRegistry {
    steps: HashSet<StepId>,
}

impl ConditionableRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry seeded with `conditioned_steps` from the config.
    pub fn from_config(config: &GateConfig) -> Self {
        config.conditioned_steps.iter().cloned().map(StepId::from).collect()
    }

    pub fn mark(&mut self, step: impl Into<StepId>) -> &mut Self {
        self.steps.insert(step.into());
        self
    }

    pub fn unmark(&mut self, step: &StepId) -> bool {
        self.steps.remove(step)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl FromIterator<StepId> for ConditionableRegistry {
    fn from_iter<I: IntoIterator<Item = StepId>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}

impl MarkerLookup for ConditionableRegistry {
    fn is_conditionable(&self, step: &StepId) -> bool {
        self.steps.contains(step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marked_steps_are_conditionable() {
        let mut registry = ConditionableRegistry::new();
        registry.mark("check_colour").mark("open_door");

        assert!(registry.is_conditionable(&StepId::from("check_colour")));
        assert!(!registry.is_conditionable(&StepId::from("close_door")));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn unmark_removes_step() {
        let mut registry = ConditionableRegistry::new();
        registry.mark("check_colour");
        assert!(registry.unmark(&StepId::from("check_colour")));
        assert!(registry.is_empty());
    }

    #[test]
    fn seeded_from_config() {
        let config = GateConfig {
            conditioned_steps: vec!["check_colour".into()],
            ..GateConfig::default()
        };
        let registry = ConditionableRegistry::from_config(&config);
        assert!(registry.is_conditionable(&StepId::from("check_colour")));
    }
}
