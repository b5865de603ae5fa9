use crate::error::ParserError;
use crate::extractor::{Extraction, Extractor, finish};
use crate::locale::{parse_flexible_date, parse_locale_number};
use core_types::Trade;
use regex::Regex;

/// Extracts closed deals from an MT-style Strategy Tester text export.
///
/// The "Deals" table wraps each logical row across a date-bearing line and
/// a time-bearing line, so records are reconstructed before any field is
/// parsed. Only closing ("out") deals become trades.
pub struct MtTxtExtractor {
    date_line: Regex,
    time_line: Regex,
    timestamp: Regex,
    column_header: Regex,
    profit: Regex,
}

impl MtTxtExtractor {
    pub fn new() -> Self {
        Self {
            date_line: Regex::new(r"^\d{4}\.\d{2}\.\d{2}").unwrap(),
            time_line: Regex::new(r"^\d{2}:\d{2}:\d{2}").unwrap(),
            timestamp: Regex::new(r"^\d{4}\.\d{2}\.\d{2}\s\d{2}:\d{2}:\d{2}").unwrap(),
            column_header: Regex::new(r"^\s*Time\s").unwrap(),
            // Profit is the first of the two numeric columns (profit,
            // balance) preceding a comment/marker keyword.
            profit: Regex::new(
                r"(-?[\d\s.,]+)\s+([\d\s.,]+)\s+(sl|tp|so|#|from|deal|buy|sell|in|out|stop|limit|balance|credit)",
            )
            .unwrap(),
        }
    }

    /// Rebuilds logical records from physically wrapped lines.
    ///
    /// A date line starts a record and remembers its date; a time-only
    /// line starts a record joined to the remembered date; anything else
    /// is a continuation of the current record.
    fn reconstruct_records(&self, deal_lines: &[String]) -> Vec<String> {
        let mut current_date = String::new();
        let mut current = String::new();
        let mut records = Vec::new();

        for line in deal_lines {
            if self.column_header.is_match(line) {
                continue;
            }

            if self.date_line.is_match(line) {
                if !current.is_empty() {
                    records.push(std::mem::take(&mut current));
                }
                current = line.clone();
                current_date = line
                    .split_whitespace()
                    .next()
                    .unwrap_or_default()
                    .to_string();
            } else if self.time_line.is_match(line) {
                if !current.is_empty() {
                    records.push(std::mem::take(&mut current));
                }
                current = format!("{current_date} {line}");
            } else {
                current.push(' ');
                current.push_str(line);
            }
        }
        if !current.is_empty() {
            records.push(current);
        }
        records
    }
}

impl Default for MtTxtExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for MtTxtExtractor {
    fn extract(&self, lines: &[String]) -> Result<Extraction, ParserError> {
        let deals_index = lines
            .iter()
            .position(|line| line.to_lowercase().contains("deals"))
            .ok_or_else(|| ParserError::StructuralNotFound("Deals section".to_string()))?;

        let deal_lines = lines.get(deals_index + 2..).unwrap_or_default();
        let records = self.reconstruct_records(deal_lines);

        let mut trades = Vec::new();
        let mut dropped = 0usize;
        for record in &records {
            // Opening deals are marked " in "; only closing deals carry
            // the realized result.
            if !record.contains(" out ") {
                continue;
            }

            let Some(stamp) = self.timestamp.find(record) else {
                dropped += 1;
                continue;
            };
            let Some(close_time) = parse_flexible_date(stamp.as_str()) else {
                dropped += 1;
                continue;
            };
            let Some(profit) = self
                .profit
                .captures(record)
                .and_then(|captures| parse_locale_number(&captures[1]))
            else {
                dropped += 1;
                continue;
            };

            trades.push(Trade { profit, close_time });
        }

        finish(trades, dropped)
    }
}
