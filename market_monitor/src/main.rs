//! MOEX terminal market monitor.
//!
//! Polls the ISS XML endpoints for the configured stocks, indices,
//! currencies, and futures, aggregates each response into per-instrument
//! records, and renders a refreshing table to stdout. One polling cycle is
//! strictly sequential: every fetch and merge happens on the main thread
//! in a fixed order, and the cycle's instrument sets are discarded after
//! rendering so a failed cycle can never leak stale records into the next
//! frame.
//!
//! Usage example (CLI):
//! ```bash
//! market_monitor --tickers SBER,GAZP --interval 10 --sort-by percent
//! ```
#![warn(missing_docs)]
mod args;
mod error;
mod iss_client;
mod printer;

use std::io;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use std::thread;
use std::time::Duration;

use clap::Parser;
use log::{error, info};

use market_common::Instrument;
use market_common::iss::DatasetRole;
use market_common::mapper;
use market_common::rank::rank;
use market_common::set::InstrumentSet;

use crate::args::Args;
use crate::error::AppError;
use crate::iss_client::{
    CURRENCY_URL, FUTURES_URL, INDEX_URL, IssClient, RTSI_URL, STOCKS_URL,
};
use crate::printer::{Palette, Printer};

/// Granularity of the inter-cycle sleep; bounds shutdown latency.
const SLEEP_STEP: Duration = Duration::from_millis(200);

fn main() -> Result<(), AppError> {
    init_logger();
    let args = Args::parse();

    let shutdown = Arc::new(AtomicBool::new(false));
    {
        let shutdown = shutdown.clone();
        ctrlc::set_handler(move || {
            info!("Ctrl+C received. Shutting down monitor...");
            shutdown.store(true, Ordering::SeqCst);
        })
        .expect("Error setting Ctrl+C handler");
    }

    let client = IssClient::new()?;
    let palette = if args.no_color {
        Palette::plain()
    } else {
        Palette::ansi()
    };
    let mut printer = Printer::new(io::stdout(), palette);

    info!(
        "Monitoring {} stocks, {} currencies, {} futures every {}s",
        args.tickers.len(),
        args.currencies.len(),
        args.futures.len(),
        args.interval
    );

    for cycle in 0..args.iterations {
        if shutdown.load(Ordering::Relaxed) {
            break;
        }
        if let Err(e) = run_cycle(&client, &args, &mut printer) {
            // The cycle's records are already discarded; skip the frame
            // and keep polling.
            error!("Cycle {} failed: {}", cycle, e);
        }
        if cycle + 1 < args.iterations {
            sleep_interruptibly(Duration::from_secs(args.interval), &shutdown);
        }
    }

    info!("Monitor stopped.");
    Ok(())
}

/// One full polling cycle: fetch and aggregate every configured board,
/// then render the frame. Any error aborts the cycle before rendering.
fn run_cycle(
    client: &IssClient,
    args: &Args,
    printer: &mut Printer<io::Stdout>,
) -> Result<(), AppError> {
    let stocks_document = client.fetch(STOCKS_URL)?;
    let mut stocks = InstrumentSet::seed(args.tickers.iter().cloned());
    mapper::populate(
        &mut stocks,
        stocks_document.dataset(1)?,
        DatasetRole::Securities,
    )?;
    mapper::populate(
        &mut stocks,
        stocks_document.dataset(0)?,
        DatasetRole::MarketData,
    )?;
    let stocks = rank(stocks.into_ordered(), args.sort_by);

    let index_document = client.fetch(INDEX_URL)?;
    let index_data = index_document.dataset(0)?;
    let imoex = mapper::find_by_ticker(index_data, "IMOEX")?;
    let rgbi = mapper::find_by_ticker(index_data, "RGBI")?;
    let rtsi_document = client.fetch(RTSI_URL)?;
    let rtsi = mapper::find_by_ticker(rtsi_document.dataset(0)?, "RTSI")?;

    let currencies = fetch_board(client, CURRENCY_URL, &args.currencies)?;
    let futures = if args.futures.is_empty() {
        Vec::new()
    } else {
        fetch_board(client, FUTURES_URL, &args.futures)?
    };

    printer.print_frame(&stocks, &[imoex, rgbi, rtsi], &currencies, &futures)?;
    Ok(())
}

/// Fetch one marketdata+securities board and aggregate the requested
/// tickers into finalized records, in ticker order.
fn fetch_board(
    client: &IssClient,
    url: &str,
    tickers: &[String],
) -> Result<Vec<Instrument>, AppError> {
    let document = client.fetch(url)?;
    let mut set = InstrumentSet::seed(tickers.iter().cloned());
    mapper::populate(&mut set, document.dataset(1)?, DatasetRole::Securities)?;
    mapper::populate(&mut set, document.dataset(0)?, DatasetRole::MarketData)?;
    Ok(set.into_ordered())
}

/// Sleep for `total`, waking early when `shutdown` is raised.
fn sleep_interruptibly(total: Duration, shutdown: &AtomicBool) {
    let mut remaining = total;
    while !remaining.is_zero() && !shutdown.load(Ordering::Relaxed) {
        let step = remaining.min(SLEEP_STEP);
        thread::sleep(step);
        remaining -= step;
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
