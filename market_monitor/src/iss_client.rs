//! Blocking HTTP client for the MOEX ISS endpoints.
//!
//! Each endpoint returns one XML document with the result sets named in
//! the `iss.only` query parameter, in that order. The polling loop is
//! strictly sequential, so the blocking `reqwest` client is sufficient;
//! request timeouts bound a stuck cycle.
use std::time::Duration;

use log::debug;

use market_common::iss::IssDocument;

use crate::error::AppError;

/// TQBR stocks: market data plus previous closing prices.
pub const STOCKS_URL: &str = "https://iss.moex.com/iss/engines/stock/markets/shares/boards/TQBR/securities.xml?iss.meta=off&iss.only=marketdata,securities&marketdata.columns=SECID,LAST,VALTODAY&securities.columns=SECID,PREVPRICE";
/// SNDX index board, filtered to the named indices.
pub const INDEX_URL: &str = "https://iss.moex.com/iss/engines/stock/markets/index/boards/SNDX/securities.xml?iss.meta=off&iss.only=marketdata&marketdata.columns=SECID,LASTVALUE,CURRENTVALUE,VALTODAY&securities=IMOEX,RGBI";
/// RTSI index board.
pub const RTSI_URL: &str = "https://iss.moex.com/iss/engines/stock/markets/index/boards/RTSI/securities.xml?iss.meta=off&iss.only=marketdata&marketdata.columns=SECID,LASTVALUE,CURRENTVALUE,VALTODAY";
/// CETS currency board, filtered to the monitored instruments.
pub const CURRENCY_URL: &str = "https://iss.moex.com/iss/engines/currency/markets/selt/securities.xml?iss.meta=off&iss.only=marketdata,securities&securities=CETS:USD000UTSTOM,CETS:GLDRUB_TOM,CETS:CNYRUB_TOM";
/// RFUD futures board.
pub const FUTURES_URL: &str = "https://iss.moex.com/iss/engines/futures/markets/forts/boards/RFUD/securities.xml?iss.meta=off&iss.only=marketdata,securities";

/// Per-request timeout. A poll cycle must never outlive the poll interval
/// by much.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Thin wrapper around a blocking HTTP client for fetching ISS documents.
pub struct IssClient {
    http: reqwest::blocking::Client,
}

impl IssClient {
    /// Build a client with the request timeout applied.
    pub fn new() -> Result<Self, AppError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(IssClient { http })
    }

    /// GET `url` and decode the body into an `IssDocument`.
    ///
    /// A non-success HTTP status is an error; a cycle must not aggregate
    /// from an error page.
    pub fn fetch(&self, url: &str) -> Result<IssDocument, AppError> {
        debug!("GET {}", url);
        let body = self.http.get(url).send()?.error_for_status()?.text()?;
        Ok(IssDocument::parse(&body)?)
    }
}
