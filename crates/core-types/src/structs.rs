use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// The fixed equity baseline every report's running curve starts from.
///
/// This is a normalization convention, not a balance read from the file.
/// The metrics engine and the curve reconciler must agree on it, so it
/// lives here rather than being duplicated in either crate.
pub const BASELINE_EQUITY: Decimal = dec!(10_000);

/// A single closed trade outcome extracted from a report.
///
/// Trades are immutable once parsed and carry no identity beyond their
/// position in the chronologically sorted sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    /// Net result of the trade, in account currency.
    pub profit: Decimal,
    /// When the position was closed. Reports carry no timezone, so this is
    /// a naive timestamp in the report's local time.
    pub close_time: NaiveDateTime,
}

/// One point of a running equity series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquityPoint {
    pub equity: Decimal,
    pub date: NaiveDateTime,
}
