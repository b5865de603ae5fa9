use core_types::EquityPoint;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A standardized set of performance metrics derived from one report.
///
/// This struct is the output of the `AnalyticsEngine`. It feeds both the
/// metric catalog (paired backtest/real-time values) and the curve
/// reconciler (via `equity_curve`). Recomputed from scratch on every
/// analysis; never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsReport {
    // I. Profitability
    pub net_profit: Decimal,
    pub num_trades: usize,
    pub win_rate: Decimal,
    pub avg_trade: Decimal,
    pub profit_factor: Decimal,

    // II. Risk and Drawdown
    pub max_drawdown_value: Decimal,
    pub max_drawdown_percent: Decimal,
    pub return_to_dd: Decimal,
    pub stagnation_days: i64,

    // III. The running equity series the metrics were walked over.
    pub equity_curve: Vec<EquityPoint>,
}

impl MetricsReport {
    /// Creates a zeroed-out report: the shape used for a strategy that has
    /// no live trades yet.
    pub fn new() -> Self {
        Self {
            net_profit: Decimal::ZERO,
            num_trades: 0,
            win_rate: Decimal::ZERO,
            avg_trade: Decimal::ZERO,
            profit_factor: Decimal::ZERO,
            max_drawdown_value: Decimal::ZERO,
            max_drawdown_percent: Decimal::ZERO,
            return_to_dd: Decimal::ZERO,
            stagnation_days: 0,
            equity_curve: Vec::new(),
        }
    }
}

impl Default for MetricsReport {
    fn default() -> Self {
        Self::new()
    }
}
