//! Report Error Types
//!
//! Error types for usage report construction and trigger decoding.

use thiserror::Error;

/// Report Error type
#[derive(Debug, Error)]
pub enum ReportError {
    /// Wire field shorter than its minimum length
    #[error("Malformed {ie}: needed {needed} bytes, available {available}")]
    MalformedInput {
        ie: &'static str,
        needed: usize,
        available: usize,
    },

    /// Report type outside DLDR..=UISR
    #[error("Invalid report type: {0}")]
    InvalidReportType(u8),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration could not be parsed
    #[error("Configuration parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Report Result type
pub type ReportResult<T> = Result<T, ReportError>;
