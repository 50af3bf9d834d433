//! Core type definitions for step condition gating.
//!
//! This crate provides the data shared between step-definition layers and the
//! gate. No business logic — just types.

pub mod call;
pub mod condition;
pub mod ids;
pub mod outcome;

// Re-export primary types at crate root for ergonomic use.
pub use call::{Argument, InterceptedCall};
pub use condition::{Condition, ConditionSet};
pub use ids::StepId;
pub use outcome::Outcome;
