use thiserror::Error;

/// Errors from the condition gate.
///
/// The gate never produces errors of its own: every variant wraps a fault
/// raised by one of its collaborators.
#[derive(Error, Debug)]
pub enum GateError {
    #[error("condition evaluation failed: {0}")]
    Condition(#[from] ConditionError),

    #[error("message catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("report sink error: {0}")]
    Report(#[from] ReportError),
}

/// Faults raised while evaluating a condition.
///
/// A condition that simply does not hold is `Ok(false)`, never an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConditionError {
    #[error("invalid expected pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("{0}")]
    Evaluation(String),
}

/// Errors specific to the message catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("no message for key {key} in locale {locale}")]
    MissingKey { key: String, locale: String },

    #[error("catalog parse error: {0}")]
    Parse(String),
}

/// Errors raised by a report sink.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    #[error("scenario report is closed: {0}")]
    Closed(String),

    #[error("failed to write to report: {0}")]
    Write(String),
}

/// Errors while loading gate configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(String),
}
