use std::fmt;

use async_trait::async_trait;

use super::types::IndicatorReading;

/// Errors that can occur while fetching economic indicators.
#[derive(Debug, Clone, PartialEq)]
pub enum IndicatorError {
    /// Transport-level failure (DNS, connection refused, timeout).
    Network(String),
    /// The endpoint answered with a non-2xx status.
    Api { status: u16, message: String },
    /// The body was not JSON or lacked `dolar.valor`.
    Parse(String),
}

impl fmt::Display for IndicatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndicatorError::Network(msg) => write!(f, "network error: {msg}"),
            IndicatorError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            IndicatorError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for IndicatorError {}

/// Anything that can produce the current dollar value.
///
/// The store only ever holds an `Arc<dyn IndicatorSource>`, so tests can swap
/// the HTTP client for an in-process fake.
#[async_trait]
pub trait IndicatorSource: Send + Sync {
    /// Returns the name of the source, used in log lines.
    fn name(&self) -> &str;

    /// Performs one fetch. No retries, no caching.
    async fn fetch_indicators(&self) -> Result<IndicatorReading, IndicatorError>;
}
