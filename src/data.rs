//! Aggregated sales series handling for forecasting

use crate::error::{ForecastError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One aggregated period: a calendar date and the summed value for it
/// (e.g., revenue for that day). Position in the containing series is the
/// implicit period index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPoint {
    /// Period date
    pub date: NaiveDate,
    /// Aggregated value for the period
    pub value: f64,
}

/// A validated, chronologically ordered series of aggregated points.
///
/// Construction enforces the contract the forecast engine relies on: dates
/// strictly ascending (sorted, no duplicate periods) and every value finite.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesHistory {
    points: Vec<HistoricalPoint>,
}

impl SalesHistory {
    /// Create a history from already-aggregated points.
    ///
    /// Points must be sorted ascending by date with no duplicate dates, and
    /// all values must be finite. An empty series is valid (the engine
    /// declines to forecast it).
    pub fn from_points(points: Vec<HistoricalPoint>) -> Result<Self> {
        for pair in points.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(ForecastError::DataError(format!(
                    "Points must be strictly ascending by date: {} followed by {}",
                    pair[0].date, pair[1].date
                )));
            }
        }

        if let Some(bad) = points.iter().find(|p| !p.value.is_finite()) {
            return Err(ForecastError::DataError(format!(
                "Non-finite value at {}",
                bad.date
            )));
        }

        Ok(Self { points })
    }

    /// Load a history from a CSV file of `date,value` rows.
    ///
    /// The file needs a header row; dates are ISO-8601 (`2025-01-31`). Rows
    /// are validated through [`SalesHistory::from_points`] after parsing.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path)?;
        let mut points = Vec::new();
        for record in reader.deserialize() {
            let point: HistoricalPoint = record?;
            points.push(point);
        }
        Self::from_points(points)
    }

    /// Get the points in chronological order
    pub fn points(&self) -> &[HistoricalPoint] {
        &self.points
    }

    /// Get the values in chronological order
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// Get the dates in chronological order
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|p| p.date).collect()
    }

    /// Get the date of the most recent period, if any
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|p| p.date)
    }

    /// Check if the series is empty
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Get the number of periods
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Get a sub-series from start to end index (end exclusive; `None`
    /// means through the last point)
    pub fn slice(&self, start: usize, end: Option<usize>) -> Result<Self> {
        let end = end.unwrap_or(self.points.len());
        if start > end || end > self.points.len() {
            return Err(ForecastError::InvalidParameter(format!(
                "Slice {}..{} out of range for {} points",
                start,
                end,
                self.points.len()
            )));
        }

        Ok(Self {
            points: self.points[start..end].to_vec(),
        })
    }

    /// Calculate the mean of the values
    pub fn mean(&self) -> Result<f64> {
        if self.points.is_empty() {
            return Err(ForecastError::DataError("Empty series".to_string()));
        }

        let sum: f64 = self.points.iter().map(|p| p.value).sum();
        Ok(sum / self.points.len() as f64)
    }

    /// Calculate the population standard deviation of the values
    pub fn std_dev(&self) -> Result<f64> {
        let mean = self.mean()?;
        let variance: f64 = self
            .points
            .iter()
            .map(|p| (p.value - mean).powi(2))
            .sum::<f64>()
            / self.points.len() as f64;

        Ok(variance.sqrt())
    }
}
