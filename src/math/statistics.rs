/// Two-sided 95% Student-t critical values for 1..=30 degrees of freedom
const T_TABLE_95: [f64; 30] = [
    12.71, 4.30, 3.18, 2.78, 2.57, 2.45, 2.36, 2.31, 2.26, 2.23, 2.20, 2.18, 2.16, 2.14, 2.13,
    2.12, 2.11, 2.10, 2.09, 2.09, 2.08, 2.07, 2.07, 2.06, 2.06, 2.06, 2.05, 2.05, 2.05, 2.04,
];

/// Normal-approximation critical value used beyond the table
const Z_95: f64 = 1.96;

/// Arithmetic mean, zero for an empty sample
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n - 1 denominator), zero below two samples
pub fn std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let sum_sq: f64 = values.iter().map(|&x| (x - m) * (x - m)).sum();
    (sum_sq / (values.len() - 1) as f64).sqrt()
}

/// 95% confidence interval for the mean
///
/// Uses the Student-t critical value with `n - 1` degrees of freedom while
/// that is at most thirty, and 1.96 beyond. Below two samples the interval
/// collapses to the mean.
pub fn confidence_interval_95(values: &[f64]) -> (f64, f64) {
    let m = mean(values);
    let n = values.len();
    if n < 2 {
        return (m, m);
    }

    let degrees_of_freedom = n - 1;
    let t = T_TABLE_95
        .get(degrees_of_freedom - 1)
        .copied()
        .unwrap_or(Z_95);

    let margin = t * std_dev(values) / (n as f64).sqrt();
    (m - margin, m + margin)
}
