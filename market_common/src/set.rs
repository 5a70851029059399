//! Cycle-scoped keyed collection of instrument records.
//!
//! An `InstrumentSet` is created once per polling cycle from the requested
//! ticker list, mutated in place while result sets are merged in, and then
//! consumed by [`InstrumentSet::into_ordered`] for ranking and rendering.
//! Consuming the set on hand-off keeps stale records from leaking into the
//! next cycle.
use std::collections::BTreeMap;

use crate::instrument::Instrument;

/// Mapping from ticker to instrument record, keys fixed at construction.
#[derive(Debug, Default)]
pub struct InstrumentSet {
    instruments: BTreeMap<String, Instrument>,
}

impl InstrumentSet {
    /// Seed a set with one sentinel-valued record per requested ticker.
    ///
    /// Duplicate tickers in the list collapse to a single entry; the last
    /// occurrence wins.
    pub fn seed<I, S>(tickers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let instruments = tickers
            .into_iter()
            .map(|ticker| {
                let ticker = ticker.into();
                let instrument = Instrument::new(ticker.clone());
                (ticker, instrument)
            })
            .collect();
        InstrumentSet { instruments }
    }

    /// Look up a record by ticker.
    pub fn get(&self, ticker: &str) -> Option<&Instrument> {
        self.instruments.get(ticker)
    }

    /// Look up a record by ticker for in-place mutation during a merge.
    pub fn get_mut(&mut self, ticker: &str) -> Option<&mut Instrument> {
        self.instruments.get_mut(ticker)
    }

    /// Number of requested tickers.
    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    /// `true` when the set was seeded from an empty ticker list.
    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }

    /// Consume the set and return its records in ascending ticker order.
    ///
    /// The order is deterministic but carries no display meaning; ranking
    /// decides the final presentation order.
    pub fn into_ordered(self) -> Vec<Instrument> {
        self.instruments.into_values().collect()
    }
}
