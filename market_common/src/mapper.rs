//! Merging of ISS result sets into instrument records.
//!
//! A response document carries one result set per role; [`populate`]
//! validates that the caller handed over the result set it meant to and
//! then copies the role's fields into matching records. Rows for tickers
//! the caller never requested are skipped; the set is the authority on
//! what was asked for.
//!
//! Design notes:
//! - The role check runs before any merge, so a mismatch never leaves the
//!   set half-updated.
//! - A missing or zero price attribute never overwrites a record's price:
//!   the sentinel (or an earlier merge) is more truthful than a zero.
use crate::error::MonitorError;
use crate::instrument::Instrument;
use crate::iss::{DatasetRole, IssData, IssRow};
use crate::result::Result;
use crate::set::InstrumentSet;

/// Merge one result set into the matching records of `set`.
///
/// Fails with [`MonitorError::SchemaMismatch`] when the result set's
/// declared name differs from `expected`; the caller indexed into the
/// wrong result set and must not proceed silently.
///
/// Per role:
/// - [`DatasetRole::Securities`] supplies `prev_price`.
/// - [`DatasetRole::MarketData`] supplies `price` (primary attribute, or
///   the fallback attribute when the primary is absent or zero) and the
///   turnover.
pub fn populate(set: &mut InstrumentSet, data: &IssData, expected: DatasetRole) -> Result<()> {
    if data.name != expected.to_string() {
        return Err(MonitorError::SchemaMismatch {
            expected: expected.to_string(),
            actual: data.name.clone(),
        });
    }
    for row in data.rows() {
        let Some(instrument) = set.get_mut(&row.secid) else {
            continue;
        };
        match expected {
            DatasetRole::Securities => {
                if let Some(prev_price) = row.prev_price {
                    instrument.prev_price = prev_price;
                }
            }
            DatasetRole::MarketData => {
                if let Some(price) = resolve_price(row) {
                    instrument.price = price;
                }
                if let Some(volume) = &row.volume {
                    instrument.volume = volume.clone();
                }
            }
        }
    }
    Ok(())
}

/// Current price of a market data row: the primary attribute when present
/// and nonzero, otherwise the fallback attribute when present and nonzero,
/// otherwise nothing.
fn resolve_price(row: &IssRow) -> Option<f64> {
    match row.last {
        Some(last) if last != 0.0 => Some(last),
        _ => row.market_price.filter(|price| *price != 0.0),
    }
}

/// Build a record for one named instrument of an index-style result set.
///
/// Index boards return one row per index, not keyed to a requested set;
/// this scans for the first row whose ticker matches and reads the index
/// value attributes. Fails with [`MonitorError::InstrumentNotFound`] when
/// no row matches, since callers ask for named indices that are expected
/// to always be present.
pub fn find_by_ticker(data: &IssData, ticker: &str) -> Result<Instrument> {
    for row in data.rows() {
        if row.secid == ticker {
            let mut instrument = Instrument::new(ticker);
            if let Some(current_value) = row.current_value {
                instrument.price = current_value;
            }
            if let Some(last_value) = row.last_value {
                instrument.prev_price = last_value;
            }
            if let Some(volume) = &row.volume {
                instrument.volume = volume.clone();
            }
            return Ok(instrument);
        }
    }
    Err(MonitorError::InstrumentNotFound(ticker.to_string()))
}
