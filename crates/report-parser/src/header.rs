use crate::error::ParserError;

/// Alias lists tried in order when resolving logical columns. English
/// spellings first, then the Spanish ones seen in broker exports.
pub(crate) const PROFIT_ALIASES: &[&str] = &[
    "profit",
    "resultado",
    "p/l",
    "net profit",
    "beneficio neto",
    "ganancia neta",
];

pub(crate) const CLOSE_TIME_ALIASES: &[&str] = &[
    "close time",
    "close date",
    "closetime",
    "time",
    "fecha de cierre",
    "hora de cierre",
];

pub(crate) const TYPE_ALIASES: &[&str] = &["type", "deal type", "action", "tipo", "acción"];

/// Normalizes one raw header field.
///
/// Quotes, surrounding whitespace, casing and invisible zero-width
/// characters all vary between exports and must not affect alias matching.
pub fn clean_header(field: &str) -> String {
    field
        .replace('"', "")
        .trim()
        .to_lowercase()
        .replace(['\u{200B}', '\u{200C}', '\u{200D}', '\u{FEFF}'], "")
}

/// Resolved positions of the logical columns a delimited report carries.
#[derive(Debug, Clone, Copy)]
pub struct ColumnMap {
    pub profit: usize,
    pub close_time: usize,
    /// Optional; when absent, row filtering by record type is disabled.
    pub trade_type: Option<usize>,
}

/// Resolves the required profit/close-time columns (and the optional type
/// column) from a cleaned header row.
pub fn resolve_columns(headers: &[String]) -> Result<ColumnMap, ParserError> {
    let profit = find_column(headers, PROFIT_ALIASES)
        .ok_or_else(|| missing_column("profit", PROFIT_ALIASES, headers))?;
    let close_time = find_column(headers, CLOSE_TIME_ALIASES)
        .ok_or_else(|| missing_column("close time", CLOSE_TIME_ALIASES, headers))?;
    let trade_type = find_column(headers, TYPE_ALIASES);

    Ok(ColumnMap {
        profit,
        close_time,
        trade_type,
    })
}

/// Finds the index of the first header equal to any alias, in alias order.
pub(crate) fn find_column(headers: &[String], aliases: &[&str]) -> Option<usize> {
    aliases
        .iter()
        .find_map(|alias| headers.iter().position(|header| header == alias))
}

pub(crate) fn missing_column(column: &str, aliases: &[&str], found: &[String]) -> ParserError {
    ParserError::MissingColumn {
        column: column.to_string(),
        aliases: aliases.iter().map(|alias| alias.to_string()).collect(),
        found: found.to_vec(),
    }
}
