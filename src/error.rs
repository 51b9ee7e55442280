//! Error types for draft-notifier

use thiserror::Error;

use crate::models::metric::Metric;

/// Problems with the reference tables. Any of these aborts startup.
#[derive(Debug, Error)]
pub enum ReferenceError {
    #[error("malformed value {value:?} for metric '{metric}'")]
    MalformedMetricValue { metric: Metric, value: String },

    #[error("malformed card id {value:?} for card '{name}'")]
    MalformedCardId { name: String, value: String },

    #[error("card '{0}' is in the ratings table but not in the ids table")]
    UnknownCardName(String),

    #[error("missing column '{column}'")]
    MissingColumn { column: &'static str },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Problems with a single draft notification. The offending line is skipped.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("malformed draft payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    #[error("card id {0} is not in the ratings table")]
    UnresolvedCardId(u32),
}

pub type Result<T> = std::result::Result<T, ReferenceError>;
