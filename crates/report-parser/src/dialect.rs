use serde::{Deserialize, Serialize};

/// The closed set of report dialects the parser understands.
///
/// Detection produces exactly one of these; extraction dispatches on it.
/// Keeping the two steps separate makes each independently testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportDialect {
    /// MT-style Strategy Tester text export: a "Deals" section whose rows
    /// wrap across a date-bearing line and a time-bearing line.
    MtTxt,
    /// MT-style Strategy Tester CSV export: a `"Time","Deal","Symbol",...`
    /// row introduces the deals table.
    MtCsv,
    /// Plain delimited export with a recognizable header row.
    Generic,
}

/// Decides which parsing strategy applies to a normalized line set.
pub fn detect_dialect(lines: &[String]) -> ReportDialect {
    let first = lines.first().map(String::as_str).unwrap_or_default();
    if first.to_lowercase().contains("strategy tester report") {
        if lines.iter().any(|line| is_deals_csv_header(line)) {
            return ReportDialect::MtCsv;
        }
        return ReportDialect::MtTxt;
    }
    ReportDialect::Generic
}

/// True when a line is the CSV deals-table header, quoted or unquoted.
pub(crate) fn is_deals_csv_header(line: &str) -> bool {
    let mut fields = line
        .split(',')
        .map(|field| field.trim().replace('"', "").to_lowercase());
    fields.next().as_deref() == Some("time")
        && fields.next().as_deref() == Some("deal")
        && fields.next().as_deref() == Some("symbol")
}
