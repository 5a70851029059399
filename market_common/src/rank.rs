//! Ordering of instrument records by a derived metric for display.
use clap::ValueEnum;
use strum_macros::{Display, EnumString};

use crate::instrument::Instrument;

/// Derived metric a record collection can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Display, EnumString)]
#[clap(rename_all = "lower")]
#[strum(ascii_case_insensitive)]
pub enum SortMetric {
    /// Absolute price change.
    #[strum(serialize = "change")]
    Change,
    /// Price change in percent of the previous reference value.
    #[clap(name = "percent")]
    #[strum(serialize = "percent")]
    ChangePercent,
}

impl SortMetric {
    fn value_of(self, instrument: &Instrument) -> f64 {
        match self {
            SortMetric::Change => instrument.price_change(),
            SortMetric::ChangePercent => instrument.price_change_percent(),
        }
    }
}

/// Sort records ascending by the chosen metric.
///
/// The sort is stable, so records with an equal metric keep their input
/// order. `total_cmp` keeps the comparison deterministic for every float
/// value, sentinels included.
pub fn rank(mut records: Vec<Instrument>, metric: SortMetric) -> Vec<Instrument> {
    records.sort_by(|a, b| metric.value_of(a).total_cmp(&metric.value_of(b)));
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instrument(ticker: &str, price: f64, prev_price: f64) -> Instrument {
        Instrument {
            price,
            prev_price,
            ..Instrument::new(ticker)
        }
    }

    #[test]
    fn orders_ascending_by_change() {
        let records = vec![
            instrument("UP", 110.0, 100.0),
            instrument("DOWN", 90.0, 100.0),
            instrument("FLAT", 100.0, 100.0),
        ];
        let ranked = rank(records, SortMetric::Change);
        let tickers: Vec<&str> = ranked.iter().map(|r| r.ticker.as_str()).collect();
        assert_eq!(tickers, ["DOWN", "FLAT", "UP"]);
    }

    #[test]
    fn orders_by_percent_independently_of_scale() {
        let records = vec![
            instrument("BIG", 1010.0, 1000.0),
            instrument("SMALL", 11.0, 10.0),
        ];
        let ranked = rank(records, SortMetric::ChangePercent);
        let tickers: Vec<&str> = ranked.iter().map(|r| r.ticker.as_str()).collect();
        assert_eq!(tickers, ["BIG", "SMALL"]);
    }

    #[test]
    fn equal_metrics_keep_input_order() {
        let records = vec![
            instrument("FIRST", 105.0, 100.0),
            instrument("SECOND", 205.0, 200.0),
            instrument("THIRD", 305.0, 300.0),
        ];
        let ranked = rank(records, SortMetric::Change);
        let tickers: Vec<&str> = ranked.iter().map(|r| r.ticker.as_str()).collect();
        assert_eq!(tickers, ["FIRST", "SECOND", "THIRD"]);
    }

    #[test]
    fn metric_names_parse_from_cli_strings() {
        assert_eq!("change".parse::<SortMetric>().unwrap(), SortMetric::Change);
        assert_eq!(
            "percent".parse::<SortMetric>().unwrap(),
            SortMetric::ChangePercent
        );
    }
}
