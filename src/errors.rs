use thiserror::Error;

/// Failures that can surface past a component boundary.
///
/// Transport-level failures (HTTP, ICMP) never appear here: probes and
/// lookups decay them to their sentinel values in place, so the
/// orchestrator only ever sees the cases below.
#[derive(Debug, Error)]
pub enum ScanError {
    /// A single network's record cannot be computed; the pass continues.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No usable wireless interface, fatal at startup.
    #[error("no usable wireless interface found")]
    FacilityUnavailable,

    /// The report log could not be written.
    #[error("report log write failed: {0}")]
    Io(#[from] std::io::Error),

    /// An HTTP client could not be constructed.
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
}
