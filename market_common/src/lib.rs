//!
//! Core aggregation library for the MOEX market monitor.
//!
//! This crate aggregates:
//! - `error` — unified error type `MonitorError` used across the workspace.
//! - `result` — handy `Result<T, MonitorError>` alias.
//! - `instrument` — per-ticker price record with derived metrics.
//! - `iss` — typed view of an ISS XML response document.
//! - `set` — cycle-scoped keyed collection of instrument records.
//! - `mapper` — merging of ISS result sets into instrument records.
//! - `rank` — ordering of records by a derived metric for display.
#![warn(missing_docs)]
pub mod error;
pub mod result;
pub mod instrument;
pub mod iss;
pub mod set;
pub mod mapper;
pub mod rank;

pub use error::MonitorError;
pub use result::Result;
pub use instrument::Instrument;
pub use set::InstrumentSet;
