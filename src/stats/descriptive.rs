//! Descriptive Statistics Module
//! Scalar statistics over numeric samples and frequency distributions.
//!
//! Degenerate inputs (empty samples, zero variance) yield NaN rather than
//! panicking; callers check for non-finite results before display.

/// Arithmetic mean. NaN for an empty sample.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Median of an unsorted sample. NaN for an empty sample.
pub fn median(values: &[f64]) -> f64 {
    let n = values.len();
    if n == 0 {
        return f64::NAN;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    }
}

/// Calculate percentile using linear interpolation (NumPy compatible).
/// Input must be sorted ascending.
pub fn percentile(sorted_values: &[f64], p: f64) -> f64 {
    let n = sorted_values.len();
    if n == 0 {
        return f64::NAN;
    }
    if n == 1 {
        return sorted_values[0];
    }

    let rank = (p / 100.0) * (n - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = (rank.ceil() as usize).min(n - 1);
    let frac = rank - lower as f64;

    if lower == upper {
        sorted_values[lower]
    } else {
        sorted_values[lower] * (1.0 - frac) + sorted_values[upper] * frac
    }
}

/// Population variance (divide by n). NaN for an empty sample.
pub fn population_variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let m = mean(values);
    values.iter().map(|x| (x - m).powi(2)).sum::<f64>() / values.len() as f64
}

/// Population standard deviation. NaN for an empty sample.
pub fn population_std(values: &[f64]) -> f64 {
    population_variance(values).sqrt()
}

/// Population skewness `m3 / m2^1.5`. NaN when the sample is empty or has
/// zero variance.
pub fn skewness(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    if values.is_empty() {
        return f64::NAN;
    }
    let m = mean(values);
    let m2 = values.iter().map(|x| (x - m).powi(2)).sum::<f64>() / n;
    if m2 == 0.0 {
        return f64::NAN;
    }
    let m3 = values.iter().map(|x| (x - m).powi(3)).sum::<f64>() / n;
    m3 / m2.powf(1.5)
}

/// Population excess kurtosis `m4 / m2^2 - 3`. NaN when the sample is empty
/// or has zero variance.
pub fn excess_kurtosis(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    if values.is_empty() {
        return f64::NAN;
    }
    let m = mean(values);
    let m2 = values.iter().map(|x| (x - m).powi(2)).sum::<f64>() / n;
    if m2 == 0.0 {
        return f64::NAN;
    }
    let m4 = values.iter().map(|x| (x - m).powi(4)).sum::<f64>() / n;
    m4 / m2.powi(2) - 3.0
}

/// IQR fence bounds: `(p25 - 1.5*iqr, p75 + 1.5*iqr)`. Input must be sorted
/// ascending.
pub fn outlier_fences(sorted_values: &[f64]) -> (f64, f64) {
    let p25 = percentile(sorted_values, 25.0);
    let p75 = percentile(sorted_values, 75.0);
    let iqr = p75 - p25;
    (p25 - 1.5 * iqr, p75 + 1.5 * iqr)
}

/// Count of values beyond the 1.5×IQR fences. Input must be sorted ascending.
pub fn outlier_count(sorted_values: &[f64]) -> usize {
    if sorted_values.is_empty() {
        return 0;
    }
    let (lower, upper) = outlier_fences(sorted_values);
    sorted_values
        .iter()
        .filter(|&&v| v < lower || v > upper)
        .count()
}

/// Shannon entropy `-Σ p·log2(p)` over a frequency distribution. Zero for a
/// constant (single-bucket) distribution and for no data at all.
pub fn shannon_entropy(counts: &[u64]) -> f64 {
    let total: u64 = counts.iter().sum();
    if total == 0 {
        return 0.0;
    }
    counts
        .iter()
        .filter(|&&c| c > 0)
        .map(|&c| {
            let p = c as f64 / total as f64;
            -p * p.log2()
        })
        .sum()
}

/// Gini-style concentration index `1 - Σ p²` over a frequency distribution.
pub fn gini_concentration(counts: &[u64]) -> f64 {
    let total: u64 = counts.iter().sum();
    if total == 0 {
        return 0.0;
    }
    let sum_sq: f64 = counts
        .iter()
        .map(|&c| {
            let p = c as f64 / total as f64;
            p * p
        })
        .sum();
    1.0 - sum_sq
}

/// Frequency table ordered by descending count; ties keep first-appearance
/// order.
pub fn value_counts(values: impl Iterator<Item = String>) -> Vec<(String, u64)> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: std::collections::HashMap<String, u64> = std::collections::HashMap::new();
    for value in values {
        match counts.get_mut(&value) {
            Some(count) => *count += 1,
            None => {
                counts.insert(value.clone(), 1);
                order.push(value);
            }
        }
    }
    let mut table: Vec<(String, u64)> = order
        .into_iter()
        .map(|label| {
            let count = counts[&label];
            (label, count)
        })
        .collect();
    table.sort_by(|a, b| b.1.cmp(&a.1));
    table
}
