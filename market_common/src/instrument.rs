//! Per-ticker price record and its derived metrics.
//!
//! An `Instrument` holds the current and previous price of one ticker plus
//! its raw turnover string. Prices start at the sentinel `-1.0` meaning
//! "not yet observed"; consumers must not treat the sentinel as a real
//! quote. Derived metrics are computed on every call, never cached, so
//! they always reflect the latest merge.

/// Sentinel price meaning "no value observed yet for this field".
pub const UNQUOTED: f64 = -1.0;

/// Price record for a single tradable instrument, index, currency pair, or
/// futures contract.
#[derive(Debug, Clone, PartialEq)]
pub struct Instrument {
    /// Ticker symbol. Never changes after construction.
    pub ticker: String,
    /// Current trade or index value; [`UNQUOTED`] until merged.
    pub price: f64,
    /// Previous session's reference value; [`UNQUOTED`] until merged.
    pub prev_price: f64,
    /// Raw turnover as reported by the provider. May carry a fractional
    /// suffix that is discarded on formatting.
    pub volume: String,
}

impl Instrument {
    /// Create a record with sentinel prices and an empty volume.
    pub fn new(ticker: impl Into<String>) -> Self {
        Instrument {
            ticker: ticker.into(),
            price: UNQUOTED,
            prev_price: UNQUOTED,
            volume: String::new(),
        }
    }

    /// Absolute price change since the previous reference value.
    pub fn price_change(&self) -> f64 {
        self.price - self.prev_price
    }

    /// Price change in percent of the previous reference value.
    ///
    /// When `prev_price` is `0.0` the ratio is undefined; this method
    /// returns `0.0` so a newly listed instrument renders as "no change"
    /// instead of feeding an infinity into sorting and display.
    pub fn price_change_percent(&self) -> f64 {
        if self.prev_price == 0.0 {
            return 0.0;
        }
        (self.price - self.prev_price) / self.prev_price * 100.0
    }

    /// Turnover with the fractional part discarded and digits grouped in
    /// threes from the right, separated by single spaces.
    ///
    /// `"1234567.89"` becomes `"1 234 567"`, `"12"` stays `"12"`, an empty
    /// volume yields an empty string.
    pub fn formatted_volume(&self) -> String {
        let digits = match self.volume.split_once('.') {
            Some((whole, _)) => whole,
            None => self.volume.as_str(),
        };
        let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                formatted.push(' ');
            }
            formatted.push(ch);
        }
        formatted
    }
}
