//! Small numeric helpers shared by record averages and class summaries.

/// Arithmetic mean of `values`. An empty slice has a mean of 0.0 rather than NaN.
pub fn mean(values: &[f64]) -> f64 {
    match values.len() {
        0 => 0.0,
        n => values.iter().sum::<f64>() / n as f64,
    }
}

/// Population standard deviation of `values` around an already computed `mean`.
pub fn stddev(values: &[f64], mean: f64) -> f64 {
    let squared: Vec<f64> = values.iter().map(|v| (v - mean).powi(2)).collect();
    self::mean(&squared).sqrt()
}
