// File: crates/gantt-core/src/error.rs
// Summary: Error taxonomy for date coercion, task construction, chart state and transport.

use thiserror::Error;

/// Errors raised while building or serialising a chart.
///
/// Construction errors (`InvalidDate`, `InvalidTask`) signal bad input data and
/// are always propagated. Transport failures are not represented here: the
/// client absorbs them and returns `None` instead.
#[derive(Debug, Error)]
pub enum GanttError {
    /// A date-like value is neither a calendar date nor a valid (y, m, d) triple.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// A task could not be resolved to a start date, end date and duration.
    #[error("invalid task: {0}")]
    InvalidTask(String),

    /// A derived value was requested from a chart without tasks.
    #[error("chart has no tasks")]
    EmptyChart,

    #[error("configuration error: {0}")]
    Config(String),

    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The service answered but the body could not be decoded or saved.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, GanttError>;

/// Failure of the HTTP exchange itself.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("service responded with HTTP {0}")]
    Status(u16),

    #[error("request failed: {0}")]
    Request(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => TransportError::Status(status.as_u16()),
            None => TransportError::Request(err.to_string()),
        }
    }
}
