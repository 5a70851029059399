//! Frame renderer for the terminal table.
//!
//! Renders one frame per polling cycle: a header, the ranked stock block,
//! the index block, the currency block, an optional futures block, and a
//! timestamp row. Colors come from an explicit [`Palette`] passed in at
//! construction instead of global constants, so tests and `--no-color`
//! runs render plain text through the same code path.
use std::io::Write;

use chrono::Local;

use market_common::Instrument;

/// ANSI color configuration for a rendered frame.
#[derive(Debug, Clone)]
pub struct Palette {
    /// Escape prefix for non-negative changes.
    pub positive: &'static str,
    /// Escape prefix for negative changes.
    pub negative: &'static str,
    /// Escape suffix restoring the default color.
    pub reset: &'static str,
}

impl Palette {
    /// Green/red ANSI palette for interactive terminals.
    pub fn ansi() -> Self {
        Palette {
            positive: "\x1b[32m",
            negative: "\x1b[31m",
            reset: "\x1b[0m",
        }
    }

    /// Empty escapes; rows render as plain text of the same width.
    pub fn plain() -> Self {
        Palette {
            positive: "",
            negative: "",
            reset: "",
        }
    }
}

const SEPARATOR_WIDTH: usize = 94;

/// Renders frames of finalized instrument records to a writer.
pub struct Printer<W: Write> {
    out: W,
    palette: Palette,
}

impl<W: Write> Printer<W> {
    /// Create a printer over `out` with the given palette.
    pub fn new(out: W, palette: Palette) -> Self {
        Printer { out, palette }
    }

    /// Render one full frame.
    ///
    /// Block order is fixed: stocks, indices, currencies, futures. The
    /// futures block is skipped entirely when `futures` is empty.
    pub fn print_frame(
        &mut self,
        stocks: &[Instrument],
        indices: &[Instrument],
        currencies: &[Instrument],
        futures: &[Instrument],
    ) -> std::io::Result<()> {
        self.print_header()?;
        for instrument in stocks {
            self.print_row(instrument)?;
        }
        self.print_blank()?;
        for instrument in indices {
            self.print_row(instrument)?;
        }
        self.print_blank()?;
        for instrument in currencies {
            self.print_row(instrument)?;
        }
        self.print_blank()?;
        if !futures.is_empty() {
            for instrument in futures {
                self.print_row(instrument)?;
            }
            self.print_blank()?;
        }
        self.print_time()?;
        self.print_separator()?;
        self.out.flush()
    }

    fn print_row(&mut self, instrument: &Instrument) -> std::io::Result<()> {
        let change = instrument.price_change();
        let color = if change < 0.0 {
            self.palette.negative
        } else {
            self.palette.positive
        };
        writeln!(
            self.out,
            "| {:>12} {}{:>15.1}{} {:>17.1} {}{:>13.1} {:>13.1}{} {:>15} |",
            instrument.ticker,
            color,
            instrument.price,
            self.palette.reset,
            instrument.prev_price,
            color,
            change,
            instrument.price_change_percent(),
            self.palette.reset,
            instrument.formatted_volume(),
        )
    }

    fn print_header(&mut self) -> std::io::Result<()> {
        self.print_separator()?;
        writeln!(
            self.out,
            "| {:>12} {:>15} {:>17} {:>13} {:>13} {:>15} |",
            "SHARE", "PRICE,RUB", "PREV_PRICE,RUB", "CHANGE,RUB", "CHANGE,%", "VOLUME,RUB"
        )?;
        self.print_separator()
    }

    fn print_time(&mut self) -> std::io::Result<()> {
        let now = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        writeln!(self.out, "| TIME: {:>84} |", now)
    }

    fn print_blank(&mut self) -> std::io::Result<()> {
        writeln!(self.out, "|{:>92}|", " ")
    }

    fn print_separator(&mut self) -> std::io::Result<()> {
        writeln!(self.out, "{}", "-".repeat(SEPARATOR_WIDTH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quoted(ticker: &str, price: f64, prev_price: f64, volume: &str) -> Instrument {
        let mut instrument = Instrument::new(ticker);
        instrument.price = price;
        instrument.prev_price = prev_price;
        instrument.volume = volume.to_string();
        instrument
    }

    fn render(stocks: &[Instrument], futures: &[Instrument]) -> String {
        let mut buf = Vec::new();
        let mut printer = Printer::new(&mut buf, Palette::plain());
        printer.print_frame(stocks, &[], &[], futures).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn rows_are_uniform_width() {
        let frame = render(&[quoted("SBER", 255.0, 250.0, "1000000.5")], &[]);
        for line in frame.lines() {
            assert_eq!(line.chars().count(), SEPARATOR_WIDTH, "line: {:?}", line);
        }
    }

    #[test]
    fn row_carries_derived_fields() {
        let frame = render(&[quoted("SBER", 255.0, 250.0, "1000000.5")], &[]);
        let row = frame.lines().nth(3).unwrap();
        assert!(row.contains("SBER"));
        assert!(row.contains("255.0"));
        assert!(row.contains("250.0"));
        assert!(row.contains("5.0"));
        assert!(row.contains("2.0"));
        assert!(row.contains("1 000 000"));
    }

    #[test]
    fn futures_block_is_skipped_when_empty() {
        let with = render(&[], &[quoted("SIZ5", 90000.0, 89000.0, "100")]);
        let without = render(&[], &[]);
        assert!(with.contains("SIZ5"));
        assert_eq!(with.lines().count(), without.lines().count() + 2);
    }

    #[test]
    fn negative_change_uses_negative_color() {
        let mut buf = Vec::new();
        let mut printer = Printer::new(&mut buf, Palette::ansi());
        printer
            .print_frame(&[quoted("SBER", 245.0, 250.0, "1")], &[], &[], &[])
            .unwrap();
        let frame = String::from_utf8(buf).unwrap();
        assert!(frame.contains("\x1b[31m"));
        assert!(!frame.contains("\x1b[32m"));
    }
}
