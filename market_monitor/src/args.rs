//! Command-line arguments for the market monitor.
//!
//! This module defines the CLI interface using `clap`. See `main` for
//! end-to-end usage.
use clap::Parser;

use market_common::rank::SortMetric;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Stock tickers (TQBR board) to monitor, comma separated.
    #[clap(long, value_delimiter = ',', default_value = "PHOR,SIBN,ROSN,SBER,PLZL,BELU")]
    pub tickers: Vec<String>,

    /// Currency instruments (CETS board) to monitor, comma separated.
    #[clap(
        long,
        value_delimiter = ',',
        default_value = "USD000UTSTOM,GLDRUB_TOM,CNYRUB_TOM"
    )]
    pub currencies: Vec<String>,

    /// Futures contracts (RFUD board) to monitor, comma separated.
    /// The futures block is omitted when the list is empty.
    #[clap(long, value_delimiter = ',')]
    pub futures: Vec<String>,

    /// Seconds to wait between polling cycles.
    #[clap(long, default_value_t = 5)]
    pub interval: u64,

    /// Number of polling cycles before the monitor exits.
    #[clap(long, default_value_t = 1000)]
    pub iterations: u32,

    /// Metric the stock block is ordered by.
    #[clap(long, value_enum, default_value_t = SortMetric::Change)]
    pub sort_by: SortMetric,

    /// Disable ANSI colors in the rendered table.
    #[clap(long)]
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_mirror_the_monitored_boards() {
        let args = Args::parse_from(["market_monitor"]);
        assert_eq!(args.tickers.len(), 6);
        assert_eq!(args.tickers[3], "SBER");
        assert_eq!(args.currencies[0], "USD000UTSTOM");
        assert!(args.futures.is_empty());
        assert_eq!(args.interval, 5);
        assert_eq!(args.sort_by, SortMetric::Change);
    }

    #[test]
    fn ticker_lists_split_on_commas() {
        let args = Args::parse_from(["market_monitor", "--tickers", "SBER,GAZP", "--sort-by", "percent"]);
        assert_eq!(args.tickers, ["SBER", "GAZP"]);
        assert_eq!(args.sort_by, SortMetric::ChangePercent);
    }
}
