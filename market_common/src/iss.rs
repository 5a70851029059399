//! Typed view of an ISS XML response document.
//!
//! The provider answers every endpoint with one document holding several
//! named result sets (`<data id="...">`), each carrying attribute-encoded
//! rows. The attribute set differs per endpoint and instrument type, so
//! every row field except the ticker is optional. The provider also emits
//! empty attributes (e.g. `LAST=""` before the first trade of a session);
//! those decode as `None` rather than failing the whole document.
//!
//! The core never mutates a decoded document; it is a read-only input to
//! the merge step in [`crate::mapper`].
use serde::{Deserialize, Deserializer};
use strum_macros::{Display, EnumString};

use crate::error::MonitorError;
use crate::result::Result;

/// One ISS response document: a list of named result sets.
#[derive(Debug, Deserialize)]
pub struct IssDocument {
    /// Result sets in provider order.
    #[serde(rename = "data", default)]
    pub data: Vec<IssData>,
}

impl IssDocument {
    /// Decode a document from XML text.
    pub fn parse(xml: &str) -> Result<Self> {
        Ok(quick_xml::de::from_str(xml)?)
    }

    /// Result set at `index`, or a `Format` error naming the missing slot.
    ///
    /// The provider returns result sets in the order requested in the URL,
    /// so callers index positionally and validate the role afterwards.
    pub fn dataset(&self, index: usize) -> Result<&IssData> {
        self.data.get(index).ok_or_else(|| {
            MonitorError::Format(format!("document has no result set at index {}", index))
        })
    }
}

/// One named result set.
#[derive(Debug, Deserialize)]
pub struct IssData {
    /// Declared name of the result set (e.g. `securities`, `marketdata`).
    #[serde(rename = "@id")]
    pub name: String,
    #[serde(default)]
    rows: IssRows,
}

impl IssData {
    /// Rows of the result set in provider order.
    pub fn rows(&self) -> &[IssRow] {
        &self.rows.row
    }
}

/// Wrapper for the `<rows>` element.
#[derive(Debug, Default, Deserialize)]
struct IssRows {
    #[serde(rename = "row", default)]
    row: Vec<IssRow>,
}

/// One attribute-encoded row. Only the attributes the monitor consumes are
/// kept; everything else in the row is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct IssRow {
    /// Ticker identifier of the row.
    #[serde(rename = "@SECID", default)]
    pub secid: String,
    /// Last trade price. Primary price source for equities.
    #[serde(rename = "@LAST", default, deserialize_with = "opt_f64")]
    pub last: Option<f64>,
    /// Previous session's closing price.
    #[serde(rename = "@PREVPRICE", default, deserialize_with = "opt_f64")]
    pub prev_price: Option<f64>,
    /// Turnover, decimal-bearing string.
    #[serde(rename = "@VALTODAY", default, deserialize_with = "opt_string")]
    pub volume: Option<String>,
    /// Previous session's index value.
    #[serde(rename = "@LASTVALUE", default, deserialize_with = "opt_f64")]
    pub last_value: Option<f64>,
    /// Current index value.
    #[serde(rename = "@CURRENTVALUE", default, deserialize_with = "opt_f64")]
    pub current_value: Option<f64>,
    /// Fallback price used by instrument types whose primary price
    /// attribute stays empty (currencies, futures boards).
    #[serde(rename = "@MARKETPRICE2", default, deserialize_with = "opt_f64")]
    pub market_price: Option<f64>,
}

/// Role of a result set within a response document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum DatasetRole {
    /// Security metadata: supplies the previous reference price.
    #[strum(serialize = "securities")]
    Securities,
    /// Live market data: supplies the current price and turnover.
    #[strum(serialize = "marketdata")]
    MarketData,
}

fn opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(text) => text.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|text| !text.is_empty()))
}
