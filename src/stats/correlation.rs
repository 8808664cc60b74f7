//! Correlation Module
//! Pairwise Pearson correlation over the table's numerical columns.

use crate::data::{ColumnType, Table};
use serde::Serialize;

/// Symmetric correlation matrix aligned with `columns`, row-major.
/// Degenerate pairs (constant columns, fewer than two shared observations)
/// hold NaN; callers check for non-finite entries before display.
#[derive(Debug, Clone, Serialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    /// Compute the matrix over all numerical columns, using rows where both
    /// cells are present. Returns None with fewer than two numerical
    /// columns.
    pub fn compute(table: &Table) -> Option<CorrelationMatrix> {
        let columns = table.columns_of_type(ColumnType::Numerical);
        if columns.len() < 2 {
            return None;
        }

        let names: Vec<String> = columns.iter().map(|c| c.name().to_string()).collect();
        let mut values = vec![vec![f64::NAN; columns.len()]; columns.len()];

        for i in 0..columns.len() {
            for j in i..columns.len() {
                let mut xs = Vec::new();
                let mut ys = Vec::new();
                for row in 0..table.row_count() {
                    if let (Some(x), Some(y)) = (
                        columns[i].cells()[row].as_number(),
                        columns[j].cells()[row].as_number(),
                    ) {
                        xs.push(x);
                        ys.push(y);
                    }
                }
                let r = pearson(&xs, &ys);
                values[i][j] = r;
                values[j][i] = r;
            }
        }

        Some(CorrelationMatrix {
            columns: names,
            values,
        })
    }

    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.columns.iter().position(|c| c == a)?;
        let j = self.columns.iter().position(|c| c == b)?;
        Some(self.values[i][j])
    }
}

/// Pearson correlation coefficient. NaN when either sample is constant or
/// fewer than two paired observations exist.
fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len();
    if n < 2 {
        return f64::NAN;
    }
    let mean_x = xs.iter().sum::<f64>() / n as f64;
    let mean_y = ys.iter().sum::<f64>() / n as f64;

    let mut covariance = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        covariance += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denominator = (var_x * var_y).sqrt();
    if denominator == 0.0 {
        return f64::NAN;
    }
    covariance / denominator
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Cell, Column};

    const EPS: f64 = 1e-9;

    fn typed_table(columns: Vec<(&str, Vec<f64>)>) -> Table {
        use crate::data::DataCleaner;
        let mut table = Table::new(
            columns
                .into_iter()
                .map(|(name, values)| {
                    Column::new(name, values.into_iter().map(Cell::Number).collect::<Vec<_>>())
                })
                .collect(),
        );
        DataCleaner::new().clean(&mut table).unwrap();
        table
    }

    #[test]
    fn test_perfect_positive_and_negative_correlation() {
        let table = typed_table(vec![
            ("a", vec![1.0, 2.0, 3.0]),
            ("b", vec![2.0, 4.0, 6.0]),
            ("c", vec![3.0, 2.0, 1.0]),
        ]);
        let matrix = CorrelationMatrix::compute(&table).unwrap();
        assert!((matrix.get("a", "b").unwrap() - 1.0).abs() < EPS);
        assert!((matrix.get("a", "c").unwrap() + 1.0).abs() < EPS);
        assert!((matrix.get("a", "a").unwrap() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_matrix_is_symmetric() {
        let table = typed_table(vec![
            ("a", vec![1.0, 2.0, 4.0]),
            ("b", vec![1.0, 3.0, 3.0]),
        ]);
        let matrix = CorrelationMatrix::compute(&table).unwrap();
        assert_eq!(matrix.get("a", "b"), matrix.get("b", "a"));
    }

    #[test]
    fn test_single_numerical_column_not_available() {
        let table = typed_table(vec![("a", vec![1.0, 2.0, 3.0])]);
        assert!(CorrelationMatrix::compute(&table).is_none());
    }

    #[test]
    fn test_constant_column_yields_nan() {
        let table = typed_table(vec![
            ("a", vec![1.0, 2.0, 3.0]),
            ("fixed", vec![5.0, 5.0, 5.0]),
        ]);
        let matrix = CorrelationMatrix::compute(&table).unwrap();
        assert!(matrix.get("a", "fixed").unwrap().is_nan());
    }
}
