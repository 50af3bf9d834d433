//! Condition Gate — skips behaviour-driven test steps whose conditions fail.
//!
//! A step marked as conditionable may carry, as its last argument, a set of
//! `expected`/`actual` conditions. Before the step runs the gate checks them:
//! if every condition holds the step proceeds and its result is returned
//! unchanged, otherwise the step is skipped and a localized note is written
//! to the scenario report.
//!
//! ## Guarantees
//!
//! - **Pass-through by default**: unmarked steps, and marked steps without a
//!   non-empty trailing condition set, always proceed.
//! - **Log all, check until first failure**: every condition is logged before
//!   any is checked; checking stops at the first failure unless
//!   `short_circuit` is off.
//! - **No swallowed faults**: evaluator, catalog and report errors reach the
//!   caller unchanged. A condition that does not hold is not an error.
//! - **No ambient state**: the report handle is an explicit parameter and the
//!   gate itself is immutable, so it can be shared between threads.

pub mod catalog;
pub mod config;
pub mod context;
pub mod error;
pub mod evaluator;
pub mod gate;
pub mod mocks;
pub mod registry;
pub mod report;
pub mod traits;

pub use catalog::{BundleCatalog, DEFAULT_LOCALE, SKIPPED_DUE_TO_CONDITIONS};
pub use config::GateConfig;
pub use context::ScenarioContext;
pub use error::{CatalogError, ConditionError, ConfigError, GateError, ReportError};
pub use evaluator::PatternEvaluator;
pub use gate::{ConditionGate, Invocation};
pub use mocks::{FailingReport, ScriptedEvaluator, StaticMarkers};
pub use registry::ConditionableRegistry;
pub use report::ScenarioReport;
pub use traits::{ConditionEvaluator, MarkerLookup, MessageCatalog, ReportSink, ValueContext};

pub use stepgate_types::{Argument, Condition, ConditionSet, InterceptedCall, Outcome, StepId};
