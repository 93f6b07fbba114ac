//! # Sales Forecast
//!
//! A Rust library providing the forecasting core of a sales analytics
//! dashboard.
//!
//! ## Features
//!
//! - Validated per-period aggregate series ([`SalesHistory`])
//! - Trend + pattern forecasting ([`ForecastEngine`]): an ordinary
//!   least-squares trend line blended with a repeating trailing pattern
//!   window, producing non-negative whole-unit forecasts
//! - Configurable forecast date stride ([`PeriodStride`])
//! - CSV loading of aggregated `date,value` records
//! - Forecast accuracy metrics (MAE, MSE, RMSE, MAPE, SMAPE)
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use sales_forecast::{ForecastEngine, HistoricalPoint, SalesHistory};
//!
//! # fn main() -> sales_forecast::Result<()> {
//! let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
//! let points: Vec<HistoricalPoint> = [320.0, 410.0, 380.0, 455.0, 470.0]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, &revenue)| HistoricalPoint {
//!         date: start + chrono::Days::new(i as u64),
//!         value: revenue,
//!     })
//!     .collect();
//!
//! let history = SalesHistory::from_points(points)?;
//! let forecast = ForecastEngine::new().forecast(&history, 7);
//!
//! assert_eq!(forecast.len(), 7);
//! assert!(forecast.iter().all(|p| p.value >= 0.0));
//! # Ok(())
//! # }
//! ```
//!
//! The engine is a pure function of its inputs: no I/O, no state across
//! calls, safe to invoke concurrently from multiple callers. Degenerate
//! inputs (fewer than two historical points, zero horizon) yield an empty
//! forecast rather than an error; see [`ForecastEngine::forecast`].

pub mod data;
pub mod engine;
pub mod error;
pub mod metrics;
pub mod trend;

// Re-export commonly used types
pub use crate::data::{HistoricalPoint, SalesHistory};
pub use crate::engine::{forecast, ForecastEngine, ForecastPoint, PeriodStride};
pub use crate::error::{ForecastError, Result};
pub use crate::metrics::ForecastAccuracy;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
