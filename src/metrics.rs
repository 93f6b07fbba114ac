//! Metrics for evaluating forecast performance

use crate::data::SalesHistory;
use crate::error::{ForecastError, Result};

/// Forecast accuracy metrics
#[derive(Debug, Clone)]
pub struct ForecastAccuracy {
    /// Mean Absolute Error
    pub mae: f64,
    /// Mean Squared Error
    pub mse: f64,
    /// Root Mean Squared Error
    pub rmse: f64,
    /// Mean Absolute Percentage Error
    pub mape: f64,
    /// Symmetric Mean Absolute Percentage Error
    pub smape: f64,
}

impl std::fmt::Display for ForecastAccuracy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Forecast Accuracy Metrics:")?;
        writeln!(f, "  MAE:   {:.4}", self.mae)?;
        writeln!(f, "  MSE:   {:.4}", self.mse)?;
        writeln!(f, "  RMSE:  {:.4}", self.rmse)?;
        writeln!(f, "  MAPE:  {:.4}%", self.mape)?;
        writeln!(f, "  SMAPE: {:.4}%", self.smape)?;
        Ok(())
    }
}

/// Calculate accuracy metrics for a forecast vs actual values
pub fn evaluate(forecast: &[f64], actual: &[f64]) -> Result<ForecastAccuracy> {
    if forecast.len() != actual.len() || forecast.is_empty() {
        return Err(ForecastError::ValidationError(
            "Forecast and actual values must have the same non-zero length".to_string(),
        ));
    }

    let n = forecast.len() as f64;

    let errors: Vec<f64> = forecast
        .iter()
        .zip(actual.iter())
        .map(|(&f, &a)| a - f)
        .collect();

    let mae = errors.iter().map(|e| e.abs()).sum::<f64>() / n;
    let mse = errors.iter().map(|e| e.powi(2)).sum::<f64>() / n;
    let rmse = mse.sqrt();

    // Zero actuals are skipped rather than dividing by zero
    let mape = actual
        .iter()
        .zip(errors.iter())
        .filter(|(&a, _)| a != 0.0)
        .map(|(&a, &e)| (e.abs() / a.abs()) * 100.0)
        .sum::<f64>()
        / n;

    let smape = actual
        .iter()
        .zip(forecast.iter())
        .map(|(&a, &f)| {
            let denom = a.abs() + f.abs();
            if denom == 0.0 {
                0.0
            } else {
                200.0 * (a - f).abs() / denom
            }
        })
        .sum::<f64>()
        / n;

    Ok(ForecastAccuracy {
        mae,
        mse,
        rmse,
        mape,
        smape,
    })
}

/// Split a history into a training head and a held-out test tail.
///
/// `test_ratio` is the fraction of periods held out, exclusive between 0
/// and 1; the test size rounds to the nearest period. Useful for scoring
/// the engine against the most recent data it did not see.
pub fn holdout_split(
    history: &SalesHistory,
    test_ratio: f64,
) -> Result<(SalesHistory, SalesHistory)> {
    if !(0.0..1.0).contains(&test_ratio) || test_ratio == 0.0 {
        return Err(ForecastError::InvalidParameter(format!(
            "Test ratio must be between 0 and 1, got {}",
            test_ratio
        )));
    }

    let test_size = (history.len() as f64 * test_ratio).round() as usize;
    let train_size = history.len() - test_size;

    let train = history.slice(0, Some(train_size))?;
    let test = history.slice(train_size, None)?;

    Ok((train, test))
}
