use crate::delimiter::{has_separator_directive, infer_delimiter};
use crate::error::ParserError;
use crate::extractor::{Extraction, Extractor, finish};
use crate::header::{clean_header, resolve_columns};
use crate::locale::{parse_flexible_date, parse_locale_number};
use core_types::Trade;

/// Record types that are account bookkeeping, not trade outcomes.
const FILTERED_TYPES: &[&str] = &["pending order", "deposit", "balance", "credit"];

/// Extracts trades from a generic separated-value export.
///
/// Delimiter and columns are inferred from the header; the profit column
/// may carry currency symbols and locale decimals, the close-time column
/// any of the known date spellings.
#[derive(Debug, Default)]
pub struct GenericExtractor {}

impl GenericExtractor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Extractor for GenericExtractor {
    fn extract(&self, lines: &[String]) -> Result<Extraction, ParserError> {
        let delimiter = infer_delimiter(lines);
        let header_index = usize::from(has_separator_directive(lines));
        let header_line = lines
            .get(header_index)
            .ok_or_else(|| ParserError::StructuralNotFound("header line".to_string()))?;

        let headers: Vec<String> = header_line
            .split(delimiter)
            .map(clean_header)
            .collect();
        let columns = resolve_columns(&headers)?;
        let needed_fields = columns.profit.max(columns.close_time) + 1;

        let mut trades = Vec::new();
        let mut dropped = 0usize;
        for line in &lines[header_index + 1..] {
            let row: Vec<&str> = line.split(delimiter).collect();
            if row.len() < needed_fields {
                continue;
            }

            if let Some(type_idx) = columns.trade_type {
                let type_value = row
                    .get(type_idx)
                    .map(|value| value.trim().to_lowercase())
                    .unwrap_or_default();
                if FILTERED_TYPES.iter().any(|t| type_value.starts_with(t)) {
                    continue;
                }
            }

            let profit_raw: String = row[columns.profit]
                .chars()
                .filter(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-'))
                .collect();
            let Some(profit) = parse_locale_number(&profit_raw) else {
                dropped += 1;
                continue;
            };
            let Some(close_time) = parse_flexible_date(row[columns.close_time]) else {
                dropped += 1;
                continue;
            };

            trades.push(Trade { profit, close_time });
        }

        finish(trades, dropped)
    }
}
