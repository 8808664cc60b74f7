//! Data Quality Validator Module
//! Advisory quality scoring over a loaded table. Findings never block the
//! metric or chart pipelines; callers surface them as diagnostics.

use crate::data::Table;
use serde::Serialize;

/// Outcome of one validation call. Produced fresh each time, never cached.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub quality_score: f64,
}

/// Computes a 0-100 quality score from missing-value and duplicate-row
/// ratios and flags constant columns.
pub struct DataValidator;

impl DataValidator {
    pub fn validate(table: &Table) -> ValidationResult {
        let mut result = ValidationResult {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
            quality_score: 100.0,
        };

        if table.is_empty() {
            result.is_valid = false;
            result.errors.push("Table is empty".to_string());
            result.quality_score = 0.0;
            return result;
        }

        let missing_percentage =
            table.total_missing_cells() as f64 / table.total_cells() as f64 * 100.0;
        if missing_percentage > 50.0 {
            result.is_valid = false;
            result
                .errors
                .push(format!("Too many missing values: {:.1}%", missing_percentage));
            result.quality_score -= 30.0;
        } else if missing_percentage > 20.0 {
            result
                .warnings
                .push(format!("High missing values: {:.1}%", missing_percentage));
            result.quality_score -= 10.0;
        }

        let duplicate_percentage =
            table.duplicate_row_count() as f64 / table.row_count() as f64 * 100.0;
        if duplicate_percentage > 50.0 {
            result.is_valid = false;
            result
                .errors
                .push(format!("Too many duplicates: {:.1}%", duplicate_percentage));
            result.quality_score -= 20.0;
        } else if duplicate_percentage > 10.0 {
            result
                .warnings
                .push(format!("High duplicate rate: {:.1}%", duplicate_percentage));
            result.quality_score -= 5.0;
        }

        let constant_columns: Vec<&str> = table
            .columns()
            .iter()
            .filter(|c| c.distinct_count() == 1)
            .map(|c| c.name())
            .collect();
        if !constant_columns.is_empty() {
            result.warnings.push(format!(
                "Constant columns detected: {}",
                constant_columns.join(", ")
            ));
            result.quality_score -= 5.0;
        }

        result.quality_score = result.quality_score.clamp(0.0, 100.0);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Cell, Column};

    fn text(values: &[&str]) -> Vec<Cell> {
        values.iter().map(|v| Cell::Text(v.to_string())).collect()
    }

    #[test]
    fn test_empty_table_is_invalid_with_zero_score() {
        let result = DataValidator::validate(&Table::default());
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.quality_score, 0.0);
    }

    #[test]
    fn test_clean_table_scores_full_marks() {
        let table = Table::new(vec![
            Column::new("a", text(&["1", "2", "3"])),
            Column::new("b", text(&["x", "y", "z"])),
        ]);
        let result = DataValidator::validate(&table);
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert_eq!(result.quality_score, 100.0);
    }

    #[test]
    fn test_majority_missing_fails_validation() {
        let table = Table::new(vec![
            Column::new("a", vec![Cell::Missing, Cell::Missing, Cell::Missing]),
            Column::new(
                "b",
                vec![Cell::Missing, Cell::Text("x".into()), Cell::Text("y".into())],
            ),
        ]);
        let result = DataValidator::validate(&table);
        assert!(!result.is_valid);
        assert_eq!(result.quality_score, 70.0);
    }

    #[test]
    fn test_moderate_missing_warns_only() {
        let table = Table::new(vec![Column::new(
            "a",
            vec![
                Cell::Missing,
                Cell::Text("1".into()),
                Cell::Text("2".into()),
                Cell::Text("3".into()),
            ],
        )]);
        let result = DataValidator::validate(&table);
        assert!(result.is_valid);
        assert_eq!(result.quality_score, 90.0);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_constant_column_named_in_warning() {
        let table = Table::new(vec![
            Column::new("fixed", text(&["k", "k", "k"])),
            Column::new("b", text(&["x", "y", "z"])),
        ]);
        let result = DataValidator::validate(&table);
        assert!(result.is_valid);
        assert_eq!(result.quality_score, 95.0);
        assert!(result.warnings[0].contains("fixed"));
    }

    #[test]
    fn test_score_clamped_to_lower_bound() {
        // All-duplicate, mostly-missing data stacks every penalty.
        let table = Table::new(vec![Column::new(
            "a",
            vec![Cell::Missing, Cell::Missing, Cell::Missing, Cell::Missing],
        )]);
        let result = DataValidator::validate(&table);
        assert!(!result.is_valid);
        assert!(result.quality_score >= 0.0 && result.quality_score <= 100.0);
    }
}
