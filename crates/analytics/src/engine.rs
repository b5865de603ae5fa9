use crate::error::AnalyticsError;
use crate::report::MetricsReport;
use chrono::Duration;
use core_types::{BASELINE_EQUITY, EquityPoint, Trade};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Sentinel for ratios whose denominator is zero (all-winning trade
/// lists, zero-drawdown series). Fixed for output parity.
const RATIO_CAP: Decimal = dec!(999);

/// A stateless calculator for deriving performance metrics from a trade list.
#[derive(Debug, Default)]
pub struct AnalyticsEngine {}

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The main entry point for calculating performance metrics.
    ///
    /// Drawdown and stagnation are path-dependent, so `trades` must be
    /// sorted ascending by close time; the report parser guarantees this
    /// by construction.
    ///
    /// Degenerate inputs (a single trade, a zero-drawdown series) produce
    /// valid values via the ratio special cases, never NaN or infinity.
    pub fn calculate(&self, trades: &[Trade]) -> Result<MetricsReport, AnalyticsError> {
        if trades.is_empty() {
            return Err(AnalyticsError::NoTrades);
        }

        let mut report = MetricsReport::new();
        report.num_trades = trades.len();

        // --- Profitability ---
        let mut gross_profit = Decimal::ZERO;
        let mut gross_loss = Decimal::ZERO;
        let mut winning_trades = 0usize;
        for trade in trades {
            report.net_profit += trade.profit;
            if trade.profit > Decimal::ZERO {
                gross_profit += trade.profit;
                winning_trades += 1;
            } else if trade.profit < Decimal::ZERO {
                gross_loss += trade.profit.abs();
            }
        }

        let num_trades = Decimal::from(trades.len());
        report.win_rate = Decimal::from(winning_trades) / num_trades * dec!(100);
        report.avg_trade = report.net_profit / num_trades;
        report.profit_factor = if gross_loss > Decimal::ZERO {
            gross_profit / gross_loss
        } else if gross_profit > Decimal::ZERO {
            RATIO_CAP
        } else {
            Decimal::ONE
        };

        // --- Equity walk: drawdown and stagnation ---
        let mut equity = BASELINE_EQUITY;
        let mut peak_equity = equity;
        let mut peak_date = trades[0].close_time;
        let mut max_drawdown = Decimal::ZERO;
        let mut max_stagnation = Duration::zero();

        for trade in trades {
            equity += trade.profit;
            report.equity_curve.push(EquityPoint {
                equity,
                date: trade.close_time,
            });

            if equity > peak_equity {
                let stagnation = trade.close_time - peak_date;
                if stagnation > max_stagnation {
                    max_stagnation = stagnation;
                }
                peak_equity = equity;
                peak_date = trade.close_time;
            } else {
                let drawdown = peak_equity - equity;
                if drawdown > max_drawdown {
                    max_drawdown = drawdown;
                }
            }
        }

        // A series can end underwater without printing a fresh peak; the
        // stretch from the last peak to the final trade is stagnation too.
        if trades.len() > 1 {
            let trailing = trades[trades.len() - 1].close_time - peak_date;
            if trailing > max_stagnation {
                max_stagnation = trailing;
            }
        }

        report.max_drawdown_value = max_drawdown;
        if peak_equity > BASELINE_EQUITY {
            report.max_drawdown_percent = max_drawdown / peak_equity * dec!(100);
        }
        report.return_to_dd = if max_drawdown > Decimal::ZERO {
            report.net_profit / max_drawdown
        } else if report.net_profit > Decimal::ZERO {
            RATIO_CAP
        } else {
            Decimal::ZERO
        };
        report.stagnation_days = max_stagnation.num_days();

        Ok(report)
    }
}
