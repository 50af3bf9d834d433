use std::collections::HashMap;
use std::sync::RwLock;

use crate::traits::ValueContext;

/// Key/value context of a running scenario.
///
/// Steps store what they observed (a colour read from the page, a row count,
/// ...) and conditions look those values up by key. Reads and writes go
/// through an internal lock so one context can be shared between threads.
#[derive(Debug, Default)]
pub struct ScenarioContext {
    values: RwLock<HashMap<String, String>>,
}

impl ScenarioContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, handy when seeding a context.
    pub fn with_value(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Bind `key` to `value`, returning the previous value if any.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let mut values = self.values.write().unwrap_or_else(|e| e.into_inner());
        values.insert(key.into(), value.into())
    }

    /// Remove a binding.
    pub fn remove(&self, key: &str) -> Option<String> {
        let mut values = self.values.write().unwrap_or_else(|e| e.into_inner());
        values.remove(key)
    }

    /// Drop every binding, typically between scenarios.
    pub fn clear(&self) {
        let mut values = self.values.write().unwrap_or_else(|e| e.into_inner());
        values.clear();
    }

    pub fn len(&self) -> usize {
        self.values.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ValueContext for ScenarioContext {
    fn value(&self, key: &str) -> Option<String> {
        let values = self.values.read().unwrap_or_else(|e| e.into_inner());
        values.get(key).cloned()
    }
}
