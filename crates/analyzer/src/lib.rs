//! # Drift Analyzer
//!
//! The public facade of the drift-analysis engine. It takes one backtest
//! report and one real-time report as raw text, runs both through the
//! parser and the analytics engine, and produces the paired metric
//! catalog, the reconciled PNL curve and the strategy's identifier.
//!
//! ## Architectural Principles
//!
//! - **Layer 2 Orchestration:** This crate owns no parsing or metric math
//!   of its own beyond pairing, scoring and curve reconciliation; the
//!   heavy lifting lives in `report-parser` and `analytics`.
//! - **Pure and Stateless:** Each `analyze` call is independent and
//!   side-effect-free. Persistence and presentation belong to the
//!   callers.
//!
//! ## Public API
//!
//! - `Analyzer`: the facade exposing `analyze`.
//! - `AnalysisResult`: metrics, PNL curve, magic number, diagnostics.
//! - `drift`: the deviation/status classification dashboards consume.

pub mod catalog;
pub mod curve;
pub mod drift;
pub mod error;
pub mod similarity;

// Re-export the key components to create a clean, public-facing API.
pub use catalog::{METRIC_CATALOG, Metric, MetricId, MetricTemplate};
pub use curve::PnlPoint;
pub use drift::{DeviationRule, StrategyStatus, classify_status};
pub use error::AnalyzerError;
pub use similarity::similarity_score;

use analytics::{AnalyticsEngine, MetricsReport};
use regex::Regex;
use report_parser::{ParsedReport, ParserError, ReportDialect, ReportParser};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

/// Parsing observability for one report side.
///
/// Row-level anomalies are dropped silently during extraction; the count
/// surfaces here so callers can tell a clean file from a noisy one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportDiagnostics {
    pub dialect: ReportDialect,
    pub trades_parsed: usize,
    pub dropped_rows: usize,
}

/// The full output of one analysis call.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub metrics: Vec<Metric>,
    pub pnl_curve: Vec<PnlPoint>,
    pub magic_number: i64,
    pub backtest_diagnostics: ReportDiagnostics,
    /// `None` when the strategy has no live report yet.
    pub realtime_diagnostics: Option<ReportDiagnostics>,
}

/// The drift-analysis facade.
pub struct Analyzer {
    parser: ReportParser,
    engine: AnalyticsEngine,
    magic_number: Regex,
}

impl Analyzer {
    pub fn new() -> Self {
        Self {
            parser: ReportParser::new(),
            engine: AnalyticsEngine::new(),
            magic_number: Regex::new(r"(?i)MagicNumber=(\d+)").unwrap(),
        }
    }

    /// Runs the full pipeline over one backtest/real-time report pair.
    ///
    /// A real-time file that normalizes to zero lines is accepted as
    /// "not yet deployed live" and yields a backtest-only result. Every
    /// other failure is terminal for the whole call: there are no partial
    /// results.
    pub fn analyze(
        &self,
        backtest_text: &str,
        realtime_text: &str,
    ) -> Result<AnalysisResult, AnalyzerError> {
        let backtest = self
            .parser
            .parse(backtest_text)
            .map_err(AnalyzerError::BacktestReport)?;
        let backtest_metrics = self.engine.calculate(&backtest.trades)?;

        let realtime = match self.parser.parse(realtime_text) {
            Ok(parsed) => Some(parsed),
            Err(ParserError::EmptyInput) => None,
            Err(error) => return Err(AnalyzerError::RealtimeReport(error)),
        };
        let realtime_metrics = match &realtime {
            Some(parsed) => self.engine.calculate(&parsed.trades)?,
            None => MetricsReport::new(),
        };

        let metrics = build_metrics(&backtest_metrics, &realtime_metrics);
        let pnl_curve = curve::reconcile_curves(&backtest_metrics, &realtime_metrics);
        let magic_number = self.extract_magic_number(backtest_text);

        tracing::info!(
            backtest_trades = backtest_metrics.num_trades,
            realtime_trades = realtime_metrics.num_trades,
            magic_number,
            "analysis complete"
        );

        Ok(AnalysisResult {
            metrics,
            pnl_curve,
            magic_number,
            backtest_diagnostics: diagnostics(&backtest),
            realtime_diagnostics: realtime.as_ref().map(diagnostics),
        })
    }

    /// Pulls the strategy's magic-number identifier out of the backtest
    /// content, falling back to a time-derived pseudo-identifier when the
    /// marker is absent.
    fn extract_magic_number(&self, content: &str) -> i64 {
        if let Some(id) = self
            .magic_number
            .captures(content)
            .and_then(|captures| captures[1].parse::<i64>().ok())
        {
            return id;
        }
        let epoch_millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis())
            .unwrap_or_default();
        (epoch_millis % 1_000_000) as i64
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Pairs the two metric sets into the catalog's presentation order.
///
/// Similarity is scored on the unrounded values; the emitted pair is
/// display-rounded.
fn build_metrics(backtest: &MetricsReport, realtime: &MetricsReport) -> Vec<Metric> {
    METRIC_CATALOG
        .iter()
        .map(|template| {
            let (bt, rt) = metric_values(template.id, backtest, realtime);
            let (backtest_value_alt, realtime_value_alt) = match template.id {
                MetricId::MaxDrawdown => (
                    Some(round_value(backtest.max_drawdown_percent, false)),
                    Some(round_value(realtime.max_drawdown_percent, false)),
                ),
                _ => (None, None),
            };

            Metric {
                id: template.id,
                name: template.name,
                category: template.category,
                unit: template.unit,
                backtest_value: round_value(bt, template.id.is_integer()),
                realtime_value: round_value(rt, template.id.is_integer()),
                backtest_value_alt,
                realtime_value_alt,
                similarity: similarity_score(to_f64(bt), to_f64(rt)),
            }
        })
        .collect()
}

fn metric_values(id: MetricId, backtest: &MetricsReport, realtime: &MetricsReport) -> (Decimal, Decimal) {
    let pick = |report: &MetricsReport| match id {
        MetricId::ProfitFactor => report.profit_factor,
        MetricId::RetDdRatio => report.return_to_dd,
        MetricId::AvgTrade => report.avg_trade,
        MetricId::MaxDrawdown => report.max_drawdown_value,
        MetricId::StagnationDays => Decimal::from(report.stagnation_days),
        MetricId::WinRate => report.win_rate,
        MetricId::NetProfit => report.net_profit,
        MetricId::NumTrades => Decimal::from(report.num_trades),
    };
    (pick(backtest), pick(realtime))
}

fn round_value(value: Decimal, integer: bool) -> Decimal {
    let places = if integer { 0 } else { 2 };
    value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

fn diagnostics(parsed: &ParsedReport) -> ReportDiagnostics {
    ReportDiagnostics {
        dialect: parsed.dialect,
        trades_parsed: parsed.trades.len(),
        dropped_rows: parsed.dropped_rows,
    }
}
