use crate::dialect::is_deals_csv_header;
use crate::error::ParserError;
use crate::extractor::{Extraction, Extractor, finish};
use crate::header::clean_header;
use crate::locale::{parse_flexible_date, parse_locale_number};
use core_types::Trade;
use rust_decimal::Decimal;

/// Extracts closed deals from an MT-style Strategy Tester CSV export.
///
/// The deals table is introduced by a `Time,Deal,Symbol,...` header row;
/// swap, commission and fee columns, when present, are folded into the
/// profit so the trade carries its net result.
#[derive(Debug, Default)]
pub struct MtCsvExtractor {}

impl MtCsvExtractor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Extractor for MtCsvExtractor {
    fn extract(&self, lines: &[String]) -> Result<Extraction, ParserError> {
        let header_index = lines
            .iter()
            .position(|line| is_deals_csv_header(line))
            .ok_or_else(|| ParserError::StructuralNotFound("Deals header row".to_string()))?;

        let header: Vec<String> = lines[header_index]
            .split(',')
            .map(clean_header)
            .collect();

        let required = |name: &str| -> Result<usize, ParserError> {
            header
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| ParserError::MissingColumn {
                    column: name.to_string(),
                    aliases: vec![name.to_string()],
                    found: header.clone(),
                })
        };
        let time_idx = required("time")?;
        let direction_idx = required("direction")?;
        let profit_idx = required("profit")?;
        let optional = |name: &str| header.iter().position(|h| h == name);
        let adjustment_columns: Vec<usize> = ["swap", "commission", "fee"]
            .iter()
            .filter_map(|name| optional(name))
            .collect();

        let mut trades = Vec::new();
        let mut dropped = 0usize;
        for line in &lines[header_index + 1..] {
            let row = split_quoted(line);
            // Shorter rows belong to the sections that follow the deals
            // table, not to it.
            if row.len() < header.len() {
                continue;
            }
            if row[direction_idx] != "out" {
                continue;
            }

            let profit_field = row[profit_idx].as_str();
            let base_profit = if profit_field.is_empty() {
                Some(Decimal::ZERO)
            } else {
                parse_locale_number(profit_field)
            };
            let Some(mut profit) = base_profit else {
                dropped += 1;
                continue;
            };
            let Some(close_time) = parse_flexible_date(&row[time_idx]) else {
                dropped += 1;
                continue;
            };

            for &idx in &adjustment_columns {
                profit += row
                    .get(idx)
                    .and_then(|value| parse_locale_number(value))
                    .unwrap_or(Decimal::ZERO);
            }

            trades.push(Trade { profit, close_time });
        }

        finish(trades, dropped)
    }
}

/// Splits a CSV line on commas, honoring double-quoted fields.
///
/// Quotes are stripped and fields trimmed; empty fields are preserved so
/// column indices stay aligned with the header.
pub(crate) fn split_quoted(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    fields.push(current);

    fields.into_iter().map(|f| f.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|l| l.to_string()).collect()
    }

    fn report(rows: &[&str]) -> Vec<String> {
        let mut all = vec![
            "Strategy Tester Report",
            "\"Time\",\"Deal\",\"Symbol\",\"Type\",\"Direction\",\"Volume\",\"Price\",\"Profit\",\"Swap\",\"Commission\",\"Fee\"",
        ];
        all.extend_from_slice(rows);
        lines(&all)
    }

    #[test]
    fn keeps_only_out_rows_and_folds_adjustments_into_profit() {
        let extraction = MtCsvExtractor::new()
            .extract(&report(&[
                "\"2024.01.01 08:00:00\",\"1\",\"EURUSD\",\"buy\",\"in\",\"0.10\",\"1.10000\",\"0.00\",\"0.00\",\"-0.20\",\"0.00\"",
                "\"2024.01.01 17:00:00\",\"2\",\"EURUSD\",\"sell\",\"out\",\"0.10\",\"1.10100\",\"100.00\",\"-0.30\",\"-0.20\",\"-0.10\"",
            ]))
            .unwrap();

        assert_eq!(extraction.trades.len(), 1);
        assert_eq!(extraction.trades[0].profit, dec!(99.40));
        assert_eq!(extraction.dropped_rows, 0);
    }

    #[test]
    fn quoted_commas_do_not_split_fields() {
        let rows = split_quoted("\"2024.01.01 17:00:00\",\"EURUSD, spot\",\"1 234,56\",,end");
        assert_eq!(
            rows,
            vec!["2024.01.01 17:00:00", "EURUSD, spot", "1 234,56", "", "end"]
        );
    }

    #[test]
    fn unparsable_adjustments_default_to_zero() {
        let extraction = MtCsvExtractor::new()
            .extract(&report(&[
                "\"2024.01.01 17:00:00\",\"2\",\"EURUSD\",\"sell\",\"out\",\"0.10\",\"1.10100\",\"100.00\",\"n/a\",\"\",\"0.00\"",
            ]))
            .unwrap();

        assert_eq!(extraction.trades[0].profit, dec!(100.00));
    }

    #[test]
    fn short_rows_are_skipped_without_counting_as_drops() {
        let extraction = MtCsvExtractor::new()
            .extract(&report(&[
                "\"2024.01.01 17:00:00\",\"2\",\"EURUSD\",\"sell\",\"out\",\"0.10\",\"1.10100\",\"100.00\",\"0.00\",\"0.00\",\"0.00\"",
                "Orders",
                "\"summary\",\"row\"",
            ]))
            .unwrap();

        assert_eq!(extraction.trades.len(), 1);
        assert_eq!(extraction.dropped_rows, 0);
    }

    #[test]
    fn out_row_with_bad_timestamp_is_dropped() {
        let extraction = MtCsvExtractor::new()
            .extract(&report(&[
                "\"2024.01.01 17:00:00\",\"2\",\"EURUSD\",\"sell\",\"out\",\"0.10\",\"1.10100\",\"100.00\",\"0.00\",\"0.00\",\"0.00\"",
                "\"not a date\",\"3\",\"EURUSD\",\"sell\",\"out\",\"0.10\",\"1.10100\",\"50.00\",\"0.00\",\"0.00\",\"0.00\"",
            ]))
            .unwrap();

        assert_eq!(extraction.trades.len(), 1);
        assert_eq!(extraction.dropped_rows, 1);
    }

    #[test]
    fn only_opening_rows_is_no_valid_trades() {
        let err = MtCsvExtractor::new()
            .extract(&report(&[
                "\"2024.01.01 08:00:00\",\"1\",\"EURUSD\",\"buy\",\"in\",\"0.10\",\"1.10000\",\"0.00\",\"0.00\",\"0.00\",\"0.00\"",
            ]))
            .unwrap_err();
        assert!(matches!(err, ParserError::NoValidTrades));
    }

    #[test]
    fn missing_direction_column_is_reported() {
        let err = MtCsvExtractor::new()
            .extract(&lines(&[
                "Strategy Tester Report",
                "\"Time\",\"Deal\",\"Symbol\",\"Profit\"",
                "\"2024.01.01 08:00:00\",\"1\",\"EURUSD\",\"10.00\"",
            ]))
            .unwrap_err();
        assert!(matches!(err, ParserError::MissingColumn { ref column, .. } if column == "direction"));
    }
}
