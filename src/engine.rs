//! Trend-plus-pattern forecast engine

use crate::data::SalesHistory;
use crate::error::{ForecastError, Result};
use crate::trend::TrendLine;
use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default trailing window used to capture short-term cyclical shape
/// (two weeks of daily data covers day-of-week effects).
pub const DEFAULT_PATTERN_WINDOW: usize = 14;

/// Calendar increment between consecutive forecast periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodStride {
    /// One calendar day per period
    #[default]
    Daily,
    /// One week per period
    Weekly,
    /// One calendar month per period (end-of-month dates clamp)
    Monthly,
}

impl PeriodStride {
    /// Date `steps` periods after `from`
    pub fn advance(&self, from: NaiveDate, steps: u32) -> NaiveDate {
        match self {
            PeriodStride::Daily => from + Days::new(u64::from(steps)),
            PeriodStride::Weekly => from + Days::new(u64::from(steps) * 7),
            PeriodStride::Monthly => from + Months::new(steps),
        }
    }
}

/// One forecasted period: the date it covers and the predicted value.
/// Always non-negative and rounded to the nearest whole unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ForecastPoint {
    /// Forecasted period date
    pub date: NaiveDate,
    /// Predicted value, `>= 0`
    pub value: f64,
}

/// Forecast engine blending a least-squares trend with a repeating
/// trailing pattern window.
///
/// A pure trend line ignores short-term periodicity (weekday/weekend sales
/// cycles); a pure repeated pattern ignores long-term growth or decline.
/// Each forecast value is the unweighted average of the two components,
/// clamped at zero. The 50/50 weighting is a deliberate simplification
/// inherited from the dashboard this engine was built for, not a fitted
/// parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastEngine {
    pattern_window: usize,
    stride: PeriodStride,
}

impl Default for ForecastEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ForecastEngine {
    /// Create an engine with the default configuration: daily stride and a
    /// trailing pattern window of [`DEFAULT_PATTERN_WINDOW`] periods.
    pub fn new() -> Self {
        Self {
            pattern_window: DEFAULT_PATTERN_WINDOW,
            stride: PeriodStride::Daily,
        }
    }

    /// Set the maximum pattern window length. Fewer historical points than
    /// the window shrinks it to the history length.
    pub fn with_pattern_window(mut self, window: usize) -> Result<Self> {
        if window == 0 {
            return Err(ForecastError::InvalidParameter(
                "Pattern window must be positive".to_string(),
            ));
        }
        self.pattern_window = window;
        Ok(self)
    }

    /// Set the calendar stride between forecast periods
    pub fn with_stride(mut self, stride: PeriodStride) -> Self {
        self.stride = stride;
        self
    }

    /// Get the configured pattern window length
    pub fn pattern_window(&self) -> usize {
        self.pattern_window
    }

    /// Get the configured stride
    pub fn stride(&self) -> PeriodStride {
        self.stride
    }

    /// Forecast `horizon` periods past the end of `history`.
    ///
    /// Degenerate inputs are not errors: a history of fewer than two points
    /// cannot support trend or pattern estimation, and a zero horizon asks
    /// for nothing, so both return an empty sequence.
    ///
    /// For valid inputs the result has exactly `horizon` points, dates
    /// advancing one stride per step starting one stride after the last
    /// historical date, each value `max(0, round((trend + pattern) / 2))`
    /// where `trend` extrapolates the least-squares line over period
    /// indices and `pattern` cycles through the trailing window.
    ///
    /// Pure and deterministic: identical inputs produce identical output.
    pub fn forecast(&self, history: &SalesHistory, horizon: usize) -> Vec<ForecastPoint> {
        let n = history.len();
        if n < 2 || horizon == 0 {
            return Vec::new();
        }
        let Some(last_date) = history.last_date() else {
            return Vec::new();
        };

        let values = history.values();
        let line = TrendLine::fit(&values);
        let window = self.pattern_window.min(n);
        let pattern = &values[n - window..];

        debug!(
            slope = line.slope,
            intercept = line.intercept,
            pattern_len = window,
            horizon,
            "fitted forecast components"
        );

        (0..horizon)
            .map(|step| {
                let trend = line.value_at((n + step) as f64);
                let seasonal = pattern[step % window];
                let value = ((trend + seasonal) / 2.0).round().max(0.0);

                ForecastPoint {
                    date: self.stride.advance(last_date, (step + 1) as u32),
                    value,
                }
            })
            .collect()
    }
}

/// Forecast with the default engine (daily stride, 14-period window).
/// Convenience for dashboard callers that recompute on every refresh.
pub fn forecast(history: &SalesHistory, horizon: usize) -> Vec<ForecastPoint> {
    ForecastEngine::new().forecast(history, horizon)
}
