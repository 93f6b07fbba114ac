//! Score the engine against a held-out tail of the history: split, forecast
//! the held-out periods, and print accuracy metrics.

use chrono::{Days, NaiveDate};
use sales_forecast::metrics::{evaluate, holdout_split};
use sales_forecast::{ForecastEngine, HistoricalPoint, PeriodStride, SalesHistory};

fn main() -> sales_forecast::Result<()> {
    // Eight weeks of daily revenue: weekly cycle plus steady growth
    let weekly_shape = [1200.0, 1350.0, 1280.0, 1410.0, 1890.0, 2100.0, 1750.0];
    let start = NaiveDate::from_ymd_opt(2025, 1, 6).expect("valid date");
    let points = (0..56)
        .map(|i| HistoricalPoint {
            date: start + Days::new(i as u64),
            value: weekly_shape[i % 7] + 8.0 * i as f64,
        })
        .collect();
    let history = SalesHistory::from_points(points)?;

    let (train, test) = holdout_split(&history, 0.25)?;
    println!(
        "Training on {} periods, scoring against {} held out",
        train.len(),
        test.len()
    );

    let engine = ForecastEngine::new().with_stride(PeriodStride::Daily);
    let forecast = engine.forecast(&train, test.len());
    let forecast_values: Vec<f64> = forecast.iter().map(|p| p.value).collect();

    let accuracy = evaluate(&forecast_values, &test.values())?;
    println!("\n{accuracy}");

    Ok(())
}
