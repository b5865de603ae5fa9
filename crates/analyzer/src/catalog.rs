use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identity of one entry in the fixed metric catalog.
///
/// The wire ids are part of the consumer contract: dashboards key their
/// alerting rules and chart labels off them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricId {
    ProfitFactor,
    RetDdRatio,
    AvgTrade,
    MaxDrawdown,
    StagnationDays,
    WinRate,
    NetProfit,
    NumTrades,
}

impl MetricId {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricId::ProfitFactor => "profit_factor",
            MetricId::RetDdRatio => "ret_dd_ratio",
            MetricId::AvgTrade => "avg_trade",
            MetricId::MaxDrawdown => "max_drawdown",
            MetricId::StagnationDays => "stagnation_days",
            MetricId::WinRate => "win_rate",
            MetricId::NetProfit => "net_profit",
            MetricId::NumTrades => "num_trades",
        }
    }

    /// Whether a lower value is the healthier reading for this metric.
    pub fn lower_is_better(&self) -> bool {
        matches!(self, MetricId::MaxDrawdown | MetricId::StagnationDays)
    }

    /// Integer-valued metrics render without decimal places.
    pub fn is_integer(&self) -> bool {
        matches!(self, MetricId::NumTrades | MetricId::StagnationDays)
    }
}

/// One row of the immutable metric catalog.
#[derive(Debug, Clone, Copy)]
pub struct MetricTemplate {
    pub id: MetricId,
    pub name: &'static str,
    pub category: &'static str,
    pub unit: &'static str,
}

/// The fixed catalog, in presentation order. Referenced by value and never
/// mutated at runtime.
pub const METRIC_CATALOG: [MetricTemplate; 8] = [
    MetricTemplate {
        id: MetricId::ProfitFactor,
        name: "Profit Factor",
        category: "Robustness",
        unit: "",
    },
    MetricTemplate {
        id: MetricId::RetDdRatio,
        name: "Ret/DD",
        category: "Risk",
        unit: "",
    },
    MetricTemplate {
        id: MetricId::AvgTrade,
        name: "Avg. Trade",
        category: "Performance",
        unit: "$",
    },
    MetricTemplate {
        id: MetricId::MaxDrawdown,
        name: "Max DD",
        category: "Risk",
        unit: "$",
    },
    MetricTemplate {
        id: MetricId::StagnationDays,
        name: "Stagnation",
        category: "Stagnation",
        unit: "days",
    },
    MetricTemplate {
        id: MetricId::WinRate,
        name: "Winrate",
        category: "Effectiveness",
        unit: "%",
    },
    MetricTemplate {
        id: MetricId::NetProfit,
        name: "Net Profit",
        category: "Performance",
        unit: "$",
    },
    MetricTemplate {
        id: MetricId::NumTrades,
        name: "Nº Trades",
        category: "Effectiveness",
        unit: "",
    },
];

/// A named, unit-tagged backtest/real-time metric pair with its similarity
/// score, as handed to dashboard consumers.
///
/// Values are display-rounded (0 decimal places for integer-valued
/// metrics, 2 otherwise); the similarity is computed from the unrounded
/// values before this struct is built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    pub id: MetricId,
    pub name: &'static str,
    pub category: &'static str,
    pub unit: &'static str,
    pub backtest_value: Decimal,
    pub realtime_value: Decimal,
    /// Secondary representation, e.g. drawdown percent next to the
    /// absolute drawdown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backtest_value_alt: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub realtime_value_alt: Option<Decimal>,
    pub similarity: f64,
}
