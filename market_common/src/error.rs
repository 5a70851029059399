//! Error types shared across the workspace.
//!
//! The `MonitorError` enum unifies the failure cases of the aggregation
//! core: I/O, XML decoding, and the contract violations a caller can make
//! when wiring provider result sets into instrument records. Crates
//! propagate this single error type.
use std::io;

use thiserror::Error;

/// Unified error type of the aggregation core.
#[derive(Error, Debug)]
pub enum MonitorError {
    /// I/O error originating from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure while decoding an ISS XML document.
    #[error("XML decode error: {0}")]
    Xml(#[from] quick_xml::DeError),

    /// A result set's declared name does not match the role the caller
    /// expected; the caller indexed into the wrong result set.
    #[error("dataset must have name '{expected}' but has '{actual}'")]
    SchemaMismatch {
        /// Role name the caller asked to merge.
        expected: String,
        /// Name the result set actually declared.
        actual: String,
    },

    /// A required singleton instrument (e.g. a named index) is absent from
    /// its result set.
    #[error("security {0} not found")]
    InstrumentNotFound(String),

    /// Generic formatting/validation error with a human-readable message.
    #[error("Format error: {0}")]
    Format(String),
}
