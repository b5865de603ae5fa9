//! # Analytics Engine
//!
//! This crate provides the quantitative half of the drift analysis: it
//! turns a chronologically sorted trade list into the fixed battery of
//! performance metrics the rest of the system compares and charts.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   report formats or external systems. It depends only on `core-types`
//!   (Layer 0).
//! - **Stateless Calculation:** The `AnalyticsEngine` is a stateless
//!   calculator. It takes trades as input and produces a `MetricsReport`
//!   as output, which makes it highly reliable and easy to test.
//!
//! ## Public API
//!
//! - `AnalyticsEngine`: The main struct that contains the calculation logic.
//! - `MetricsReport`: The standardized struct that holds the metric battery.
//! - `AnalyticsError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::AnalyticsEngine;
pub use error::AnalyticsError;
pub use report::MetricsReport;
