//! Least-squares trend line over period indices

/// A fitted line `value = slope * index + intercept`, where the index is
/// the position of a period in the chronological series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendLine {
    /// Change in value per period
    pub slope: f64,
    /// Fitted value at index 0
    pub intercept: f64,
}

impl TrendLine {
    /// Fit an ordinary least-squares line to the values, taking each value's
    /// position as the independent variable.
    ///
    /// Uses the closed-form sums
    /// `slope = (n*Σxy - Σx*Σy) / (n*Σx² - (Σx)²)`. The denominator is zero
    /// only for fewer than two points; it is substituted with 1 there so the
    /// fit is total, but callers wanting a meaningful trend should pass at
    /// least two values.
    pub fn fit(values: &[f64]) -> Self {
        let n = values.len() as f64;

        let mut sum_x = 0.0;
        let mut sum_y = 0.0;
        let mut sum_xy = 0.0;
        let mut sum_xx = 0.0;
        for (i, &y) in values.iter().enumerate() {
            let x = i as f64;
            sum_x += x;
            sum_y += y;
            sum_xy += x * y;
            sum_xx += x * x;
        }

        let mut denominator = n * sum_xx - sum_x * sum_x;
        if denominator == 0.0 {
            denominator = 1.0;
        }

        let slope = (n * sum_xy - sum_x * sum_y) / denominator;
        let intercept = if n > 0.0 {
            (sum_y - slope * sum_x) / n
        } else {
            0.0
        };

        Self { slope, intercept }
    }

    /// Extrapolate the line at the given period index
    pub fn value_at(&self, index: f64) -> f64 {
        self.slope * index + self.intercept
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn fits_exact_line() {
        // value = 3x + 5
        let values: Vec<f64> = (0..10).map(|x| 3.0 * x as f64 + 5.0).collect();
        let line = TrendLine::fit(&values);

        assert_approx_eq!(line.slope, 3.0);
        assert_approx_eq!(line.intercept, 5.0);
        assert_approx_eq!(line.value_at(20.0), 65.0);
    }

    #[test]
    fn flat_series_has_zero_slope() {
        let line = TrendLine::fit(&[42.0; 8]);

        assert_approx_eq!(line.slope, 0.0);
        assert_approx_eq!(line.intercept, 42.0);
    }

    #[test]
    fn degenerate_inputs_do_not_panic() {
        let empty = TrendLine::fit(&[]);
        assert_eq!(empty.slope, 0.0);
        assert_eq!(empty.intercept, 0.0);

        let single = TrendLine::fit(&[7.0]);
        assert_eq!(single.slope, 0.0);
        assert_approx_eq!(single.intercept, 7.0);
    }

    #[test]
    fn noisy_series_recovers_direction() {
        let values = vec![10.0, 12.5, 11.0, 14.0, 13.5, 16.0, 15.5, 18.0];
        let line = TrendLine::fit(&values);

        assert!(line.slope > 0.0);
    }
}
