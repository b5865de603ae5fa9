use analytics::MetricsReport;
use core_types::BASELINE_EQUITY;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// One point of the merged PNL curve.
///
/// Each point carries exactly one of the two series values: the backtest
/// and real-time windows are temporally disjoint by construction. The
/// serialized field names (`Backtest`, `Real Time`) are the charting
/// consumer's series keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PnlPoint {
    pub trade: usize,
    pub date: String,
    #[serde(rename = "Backtest", skip_serializing_if = "Option::is_none")]
    pub backtest: Option<Decimal>,
    #[serde(rename = "Real Time", skip_serializing_if = "Option::is_none")]
    pub real_time: Option<Decimal>,
}

/// Merges the backtest and real-time equity series into one continuous,
/// non-double-counted curve.
///
/// Backtest points on or after the real-time start are trimmed (the two
/// reports may share a boundary date which must not double-count), and
/// real-time equity is rebased onto the trimmed backtest's ending equity
/// so the curve reads as one account history rather than restarting from
/// the baseline.
pub fn reconcile_curves(backtest: &MetricsReport, realtime: &MetricsReport) -> Vec<PnlPoint> {
    let realtime_start = realtime.equity_curve.first().map(|point| point.date);

    let filtered_backtest: Vec<_> = match realtime_start {
        Some(start) => backtest
            .equity_curve
            .iter()
            .filter(|point| point.date < start)
            .collect(),
        None => backtest.equity_curve.iter().collect(),
    };

    let rebase = filtered_backtest
        .last()
        .map(|point| point.equity)
        .unwrap_or(BASELINE_EQUITY);
    let backtest_count = filtered_backtest.len();

    let mut curve = Vec::with_capacity(backtest_count + realtime.equity_curve.len());
    for (i, point) in filtered_backtest.iter().enumerate() {
        curve.push(PnlPoint {
            trade: i + 1,
            date: point.date.format("%Y-%m-%d").to_string(),
            backtest: Some(round_equity(point.equity)),
            real_time: None,
        });
    }
    for (i, point) in realtime.equity_curve.iter().enumerate() {
        curve.push(PnlPoint {
            trade: backtest_count + i + 1,
            date: point.date.format("%Y-%m-%d").to_string(),
            backtest: None,
            real_time: Some(round_equity(rebase - BASELINE_EQUITY + point.equity)),
        });
    }
    curve
}

fn round_equity(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use core_types::EquityPoint;
    use rust_decimal_macros::dec;

    fn at(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn report_with_curve(points: &[(Decimal, u32)]) -> MetricsReport {
        let mut report = MetricsReport::new();
        report.num_trades = points.len();
        report.equity_curve = points
            .iter()
            .map(|&(equity, day)| EquityPoint {
                equity,
                date: at(day),
            })
            .collect();
        report
    }

    #[test]
    fn empty_realtime_keeps_the_whole_backtest_series() {
        let backtest = report_with_curve(&[(dec!(10100), 1), (dec!(10050), 2)]);
        let curve = reconcile_curves(&backtest, &MetricsReport::new());

        assert_eq!(curve.len(), 2);
        assert_eq!(curve[0].trade, 1);
        assert_eq!(curve[0].backtest, Some(dec!(10100.00)));
        assert_eq!(curve[0].real_time, None);
        assert_eq!(curve[1].date, "2024-01-02");
    }

    #[test]
    fn backtest_points_overlapping_the_realtime_window_are_trimmed() {
        let backtest = report_with_curve(&[(dec!(10100), 1), (dec!(10200), 10), (dec!(10300), 20)]);
        let realtime = report_with_curve(&[(dec!(10050), 10), (dec!(10150), 15)]);

        let curve = reconcile_curves(&backtest, &realtime);

        // Day-10 and day-20 backtest points fall inside the real-time
        // window and must not double-count.
        let backtest_points: Vec<_> = curve.iter().filter(|p| p.backtest.is_some()).collect();
        assert_eq!(backtest_points.len(), 1);
        assert_eq!(backtest_points[0].date, "2024-01-01");
    }

    #[test]
    fn realtime_equity_is_rebased_onto_the_backtest_tail() {
        let backtest = report_with_curve(&[(dec!(10100), 1), (dec!(10250), 5)]);
        let realtime = report_with_curve(&[(dec!(10050), 10), (dec!(10150), 15)]);

        let curve = reconcile_curves(&backtest, &realtime);

        assert_eq!(curve.len(), 4);
        // Indices continue past the kept backtest points.
        assert_eq!(curve[2].trade, 3);
        assert_eq!(curve[3].trade, 4);
        // 10250 - 10000 + 10050 = 10300: real-time continues the backtest.
        assert_eq!(curve[2].real_time, Some(dec!(10300.00)));
        assert_eq!(curve[3].real_time, Some(dec!(10400.00)));
    }

    #[test]
    fn fully_overlapped_backtest_rebases_from_the_baseline() {
        let backtest = report_with_curve(&[(dec!(10100), 10)]);
        let realtime = report_with_curve(&[(dec!(10050), 5)]);

        let curve = reconcile_curves(&backtest, &realtime);

        assert_eq!(curve.len(), 1);
        assert_eq!(curve[0].trade, 1);
        assert_eq!(curve[0].real_time, Some(dec!(10050.00)));
    }

    #[test]
    fn serializes_with_the_consumer_series_keys() {
        let backtest = report_with_curve(&[(dec!(10100), 1)]);
        let curve = reconcile_curves(&backtest, &MetricsReport::new());
        let json = serde_json::to_value(&curve[0]).unwrap();

        assert_eq!(json["trade"], 1);
        assert_eq!(json["date"], "2024-01-01");
        assert!(json.get("Backtest").is_some());
        assert!(json.get("Real Time").is_none());
    }
}
