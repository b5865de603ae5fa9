use crate::catalog::{Metric, MetricId};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Traffic-light state a dashboard derives from metric drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrategyStatus {
    Ok,
    Alert,
    Deactivated,
}

/// Per-metric thresholds for the drift classification, in worsening
/// percent.
///
/// Deserializable so callers can load rule sets from their own
/// configuration source; the engine itself reads no files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviationRule {
    pub metric_id: MetricId,
    pub alert_threshold: Decimal,
    pub deactivation_threshold: Decimal,
    pub is_alerting: bool,
}

impl DeviationRule {
    /// The stock rule set applied to strategies without custom rules.
    pub fn defaults() -> Vec<DeviationRule> {
        vec![
            DeviationRule {
                metric_id: MetricId::MaxDrawdown,
                alert_threshold: dec!(10),
                deactivation_threshold: dec!(20),
                is_alerting: true,
            },
            DeviationRule {
                metric_id: MetricId::ProfitFactor,
                alert_threshold: dec!(25),
                deactivation_threshold: dec!(50),
                is_alerting: true,
            },
            DeviationRule {
                metric_id: MetricId::StagnationDays,
                alert_threshold: dec!(15),
                deactivation_threshold: dec!(30),
                is_alerting: false,
            },
        ]
    }
}

/// One-sided worsening deviation of a real-time value from its backtest
/// counterpart, in percent.
///
/// Only movement in the unhealthy direction counts: an increase for
/// lower-is-better metrics, a decrease for the rest. Undefined when the
/// backtest value is zero.
pub fn worsening_deviation_pct(
    id: MetricId,
    backtest: Decimal,
    realtime: Decimal,
) -> Option<Decimal> {
    if backtest.is_zero() {
        return None;
    }
    let change_pct = (realtime - backtest) / backtest.abs() * dec!(100);
    let worsened = if id.lower_is_better() {
        change_pct > Decimal::ZERO
    } else {
        change_pct < Decimal::ZERO
    };
    worsened.then(|| change_pct.abs())
}

/// Classifies a strategy from its metric pairs and rule set.
///
/// Deactivation wins over alert; rules with alerting disabled are
/// skipped, as are rules whose metric is missing or has a zero backtest
/// value.
pub fn classify_status(metrics: &[Metric], rules: &[DeviationRule]) -> StrategyStatus {
    let mut has_alert = false;

    for rule in rules.iter().filter(|rule| rule.is_alerting) {
        let Some(metric) = metrics.iter().find(|metric| metric.id == rule.metric_id) else {
            continue;
        };
        let Some(deviation) =
            worsening_deviation_pct(metric.id, metric.backtest_value, metric.realtime_value)
        else {
            continue;
        };

        if deviation >= rule.deactivation_threshold {
            return StrategyStatus::Deactivated;
        }
        if deviation >= rule.alert_threshold {
            has_alert = true;
        }
    }

    if has_alert {
        StrategyStatus::Alert
    } else {
        StrategyStatus::Ok
    }
}
