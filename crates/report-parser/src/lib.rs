//! # Report Parser
//!
//! This crate turns raw trading-activity report text into a
//! chronologically ordered list of `Trade`s, despite the inconsistent
//! delimiters, headers, locales and line wrapping of third-party exports.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** A pure text-processing crate with no I/O. It
//!   depends only on `core-types` (Layer 0).
//! - **Detection and extraction are separate:** `detect_dialect` produces
//!   a closed `ReportDialect`, and a `match` selects the extractor. Each
//!   half is independently testable.
//! - **Locale quirks are quarantined:** comma decimals and dot-separated
//!   dates live behind two pure functions in `locale`, keeping the
//!   extractors declarative.
//!
//! ## Public API
//!
//! - `ReportParser`: the stateless front door (`parse`).
//! - `ParsedReport`: sorted trades plus parsing diagnostics.
//! - `ReportDialect`: which parsing strategy matched.
//! - `ParserError`: the specific failures a report can produce.

pub mod delimiter;
pub mod dialect;
pub mod error;
pub mod extractor;
pub mod generic;
pub mod header;
pub mod locale;
pub mod mt_csv;
pub mod mt_txt;
pub mod normalize;

// Re-export the key components to create a clean, public-facing API.
pub use dialect::{ReportDialect, detect_dialect};
pub use error::ParserError;
pub use extractor::{Extraction, Extractor};

use core_types::Trade;
use generic::GenericExtractor;
use mt_csv::MtCsvExtractor;
use mt_txt::MtTxtExtractor;

/// A successfully parsed report.
#[derive(Debug, Clone)]
pub struct ParsedReport {
    /// Trades sorted ascending by close time.
    pub trades: Vec<Trade>,
    /// The dialect the report was recognized as.
    pub dialect: ReportDialect,
    /// Rows that failed row-level parsing and were silently dropped.
    pub dropped_rows: usize,
}

/// The stateless entry point for report parsing.
#[derive(Debug, Default)]
pub struct ReportParser {}

impl ReportParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses raw report content into a chronologically sorted trade list.
    ///
    /// The whole file either parses or fails: row-level anomalies are
    /// dropped (and counted), but a missing structural anchor, an
    /// unresolvable column or an empty result is a terminal error.
    pub fn parse(&self, content: &str) -> Result<ParsedReport, ParserError> {
        let lines = normalize::normalize_lines(content);
        if lines.is_empty() {
            return Err(ParserError::EmptyInput);
        }

        let dialect = detect_dialect(&lines);
        tracing::debug!(?dialect, "detected report dialect");

        let extraction = match dialect {
            ReportDialect::MtTxt => MtTxtExtractor::new().extract(&lines),
            ReportDialect::MtCsv => MtCsvExtractor::new().extract(&lines),
            ReportDialect::Generic => GenericExtractor::new().extract(&lines),
        }?;

        if extraction.dropped_rows > 0 {
            tracing::warn!(
                dropped = extraction.dropped_rows,
                ?dialect,
                "dropped unparsable report rows"
            );
        }

        Ok(ParsedReport {
            trades: extraction.trades,
            dialect,
            dropped_rows: extraction.dropped_rows,
        })
    }
}
