use analytics::AnalyticsError;
use report_parser::ParserError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("Backtest report: {0}")]
    BacktestReport(#[source] ParserError),

    #[error("Real-time report: {0}")]
    RealtimeReport(#[source] ParserError),

    #[error("Analytics calculation error: {0}")]
    Analytics(#[from] AnalyticsError),
}
