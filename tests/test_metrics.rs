use assert_approx_eq::assert_approx_eq;
use chrono::{Days, NaiveDate};
use sales_forecast::metrics::{evaluate, holdout_split};
use sales_forecast::{ForecastEngine, HistoricalPoint, SalesHistory};

fn daily_history(start: &str, values: &[f64]) -> SalesHistory {
    let start: NaiveDate = start.parse().unwrap();
    let points = values
        .iter()
        .enumerate()
        .map(|(i, &value)| HistoricalPoint {
            date: start + Days::new(i as u64),
            value,
        })
        .collect();

    SalesHistory::from_points(points).unwrap()
}

#[test]
fn constant_error_metrics() {
    let forecast = vec![105.0, 106.0, 107.0];
    let actual = vec![106.0, 107.0, 108.0];

    let accuracy = evaluate(&forecast, &actual).unwrap();

    assert_approx_eq!(accuracy.mae, 1.0);
    assert_approx_eq!(accuracy.mse, 1.0);
    assert_approx_eq!(accuracy.rmse, 1.0);
    assert!(accuracy.mape > 0.0 && accuracy.mape < 1.0);
    assert!(accuracy.smape > 0.0 && accuracy.smape < 1.0);
}

#[test]
fn perfect_forecast_scores_zero() {
    let values = vec![10.0, 20.0, 30.0];

    let accuracy = evaluate(&values, &values).unwrap();

    assert_approx_eq!(accuracy.mae, 0.0);
    assert_approx_eq!(accuracy.rmse, 0.0);
    assert_approx_eq!(accuracy.smape, 0.0);
}

#[test]
fn mismatched_lengths_error() {
    assert!(evaluate(&[1.0, 2.0], &[1.0]).is_err());
    assert!(evaluate(&[], &[]).is_err());
}

#[test]
fn zero_actuals_do_not_divide_by_zero() {
    let accuracy = evaluate(&[5.0, 5.0], &[0.0, 10.0]).unwrap();

    assert!(accuracy.mape.is_finite());
    assert!(accuracy.smape.is_finite());
}

#[test]
fn holdout_split_sizes() {
    let history = daily_history("2025-01-01", &[1.0; 10]);

    let (train, test) = holdout_split(&history, 0.2).unwrap();

    assert_eq!(train.len(), 8);
    assert_eq!(test.len(), 2);
    assert_eq!(
        train.last_date(),
        Some("2025-01-08".parse::<NaiveDate>().unwrap())
    );
    assert_eq!(
        test.last_date(),
        Some("2025-01-10".parse::<NaiveDate>().unwrap())
    );
}

#[test]
fn invalid_ratios_error() {
    let history = daily_history("2025-01-01", &[1.0; 10]);

    assert!(holdout_split(&history, 0.0).is_err());
    assert!(holdout_split(&history, 1.0).is_err());
    assert!(holdout_split(&history, -0.5).is_err());
    assert!(holdout_split(&history, 1.5).is_err());
}

#[test]
fn backtest_linear_history() {
    // Steadily growing revenue: holding out the last quarter, the engine's
    // forecast for those periods should land near the actuals.
    let values: Vec<f64> = (1..=20).map(|i| 100.0 + 10.0 * i as f64).collect();
    let history = daily_history("2025-01-01", &values);

    let (train, test) = holdout_split(&history, 0.25).unwrap();
    let forecast = ForecastEngine::new().forecast(&train, test.len());
    let forecast_values: Vec<f64> = forecast.iter().map(|p| p.value).collect();

    let accuracy = evaluate(&forecast_values, &test.values()).unwrap();

    // The pattern blend drags a pure trend down, so allow a generous band
    // while still catching gross regressions.
    assert!(accuracy.mae < 100.0);
    assert!(accuracy.rmse >= accuracy.mae);
}
