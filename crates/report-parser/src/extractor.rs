use crate::error::ParserError;
use core_types::Trade;

/// What a dialect extractor hands back: the chronologically sorted trades
/// plus the number of rows that failed row-level parsing and were dropped.
///
/// Rows filtered on purpose (opening deals, deposits, repeated headers)
/// are not drops; only parse failures count.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub trades: Vec<Trade>,
    pub dropped_rows: usize,
}

/// Common contract for the per-dialect trade extractors.
///
/// Implementations never return an empty trade list: zero surviving rows
/// is the `NoValidTrades` failure, not a success.
pub trait Extractor {
    fn extract(&self, lines: &[String]) -> Result<Extraction, ParserError>;
}

/// Sorts trades ascending by close time and enforces the non-empty rule.
///
/// Drawdown and stagnation are path-dependent, so the order guarantee is
/// established here rather than assumed of the input file.
pub(crate) fn finish(
    mut trades: Vec<Trade>,
    dropped_rows: usize,
) -> Result<Extraction, ParserError> {
    if trades.is_empty() {
        return Err(ParserError::NoValidTrades);
    }
    trades.sort_by_key(|trade| trade.close_time);
    Ok(Extraction {
        trades,
        dropped_rows,
    })
}
