//! Error type of the monitor binary.
//!
//! Wraps the core `MonitorError` and adds the transport-side failures the
//! aggregation core knows nothing about.
use thiserror::Error;

use market_common::MonitorError;

/// Errors surfaced by one polling cycle or by startup.
#[derive(Error, Debug)]
pub enum AppError {
    /// HTTP transport failure (connect, timeout, non-success status).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Aggregation core failure (decode, schema mismatch, missing index).
    #[error(transparent)]
    Monitor(#[from] MonitorError),

    /// I/O error while writing the rendered frame.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
