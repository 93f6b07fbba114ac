//! Basic forecasting example: two weeks of daily revenue in, one week of
//! forecast out, printed as the JSON the dashboard layer consumes.

use chrono::{Days, NaiveDate};
use sales_forecast::{ForecastEngine, HistoricalPoint, SalesHistory};

fn main() -> sales_forecast::Result<()> {
    // Two weeks of daily revenue with a visible weekly cycle
    let revenue = [
        1200.0, 1350.0, 1280.0, 1410.0, 1890.0, 2100.0, 1750.0, 1240.0, 1390.0, 1310.0, 1460.0,
        1950.0, 2180.0, 1820.0,
    ];
    let start = NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date");
    let points = revenue
        .iter()
        .enumerate()
        .map(|(i, &value)| HistoricalPoint {
            date: start + Days::new(i as u64),
            value,
        })
        .collect();

    let history = SalesHistory::from_points(points)?;

    println!("Historical periods: {}", history.len());
    println!("Mean daily revenue: {:.2}", history.mean()?);

    let forecast = ForecastEngine::new().forecast(&history, 7);

    println!("\nNext week:");
    for point in &forecast {
        println!("  {}  {:>8.0}", point.date, point.value);
    }

    let json = serde_json::to_string_pretty(&forecast).expect("forecast serializes");
    println!("\nAs JSON:\n{json}");

    Ok(())
}
