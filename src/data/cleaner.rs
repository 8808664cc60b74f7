//! Data Cleaning & Type Inference Module
//! Normalizes raw tables in place and assigns each column a semantic type.
//!
//! Cleaning order: drop all-missing rows, blank text to missing, drop exact
//! duplicate rows, normalize column names. Inference then classifies each
//! column (datetime, numerical, boolean, categorical) and coerces cells to
//! the chosen type, turning unparseable values into missing instead of
//! failing the column.

use crate::data::table::{Cell, Column, ColumnType, Table};
use crate::stats::descriptive;
use chrono::{NaiveDate, NaiveDateTime};
use log::info;
use thiserror::Error;

/// Column-name fragments that mark a column as date-like regardless of its
/// values.
const DATE_KEYWORDS: [&str; 6] = ["date", "time", "created", "updated", "modified", "timestamp"];

const DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%SZ",
];
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%m/%d/%Y", "%m-%d-%Y", "%Y/%m/%d"];

const DEFAULT_SAMPLE_ROWS: usize = 10;

#[derive(Error, Debug)]
pub enum CleanerError {
    #[error("Duplicate column name after normalization: {0}")]
    DuplicateColumn(String),
}

/// Runs the cleaning pass and records human-readable log entries for
/// everything it changed or flagged.
pub struct DataCleaner {
    datetime_sample_rows: usize,
    cleaning_log: Vec<String>,
}

impl Default for DataCleaner {
    fn default() -> Self {
        Self::new()
    }
}

impl DataCleaner {
    pub fn new() -> Self {
        Self {
            datetime_sample_rows: DEFAULT_SAMPLE_ROWS,
            cleaning_log: Vec::new(),
        }
    }

    pub fn with_sample_rows(mut self, rows: usize) -> Self {
        self.datetime_sample_rows = rows;
        self
    }

    pub fn cleaning_log(&self) -> &[String] {
        &self.cleaning_log
    }

    pub fn into_log(self) -> Vec<String> {
        self.cleaning_log
    }

    /// Clean the table in place, then infer and coerce column types.
    pub fn clean(&mut self, table: &mut Table) -> Result<(), CleanerError> {
        let initial_rows = table.row_count();

        self.drop_all_missing_rows(table);
        Self::blank_text_to_missing(table);
        self.drop_duplicate_rows(table);
        Self::normalize_column_names(table)?;

        let removed = initial_rows - table.row_count();
        if removed > 0 {
            let entry = format!("Removed {} empty/duplicate rows", removed);
            info!("{}", entry);
            self.cleaning_log.push(entry);
        }

        for column in table.columns_mut() {
            self.infer_column_type(column);
        }

        self.log_quality_findings(table);
        Ok(())
    }

    fn drop_all_missing_rows(&self, table: &mut Table) {
        if table.is_empty() {
            return;
        }
        let keep: Vec<bool> = (0..table.row_count())
            .map(|row| {
                table
                    .columns()
                    .iter()
                    .any(|column| !column.cells()[row].is_missing())
            })
            .collect();
        table.retain_rows(&keep);
    }

    fn blank_text_to_missing(table: &mut Table) {
        for column in table.columns_mut() {
            for cell in column.cells_mut() {
                if matches!(cell, Cell::Text(s) if s.is_empty()) {
                    *cell = Cell::Missing;
                }
            }
        }
    }

    fn drop_duplicate_rows(&self, table: &mut Table) {
        if table.is_empty() {
            return;
        }
        let mut seen = std::collections::HashSet::with_capacity(table.row_count());
        let keep: Vec<bool> = (0..table.row_count())
            .map(|row| seen.insert(table.row_fingerprint(row)))
            .collect();
        table.retain_rows(&keep);
    }

    /// Trim, lowercase, spaces to underscores. Collisions after
    /// normalization are a load-time error.
    fn normalize_column_names(table: &mut Table) -> Result<(), CleanerError> {
        let mut taken = std::collections::HashSet::new();
        for column in table.columns_mut() {
            let normalized = column.name().trim().to_lowercase().replace(' ', "_");
            if !taken.insert(normalized.clone()) {
                return Err(CleanerError::DuplicateColumn(normalized));
            }
            column.set_name(normalized);
        }
        Ok(())
    }

    /// First matching rule wins: datetime, numerical, boolean, categorical.
    fn infer_column_type(&self, column: &mut Column) {
        if self.is_likely_datetime(column) {
            Self::coerce_datetime(column);
            return;
        }

        let non_missing = column.non_missing_count();
        let all_number = non_missing > 0
            && column
                .cells()
                .iter()
                .filter(|c| !c.is_missing())
                .all(|c| matches!(c, Cell::Number(_)));
        if all_number {
            column.set_column_type(ColumnType::Numerical);
            return;
        }

        // Text-bearing columns get the numeric attempt; one parseable value
        // is enough to adopt the type and coerce the rest to missing.
        let has_text = column.cells().iter().any(|c| matches!(c, Cell::Text(_)));
        if has_text && Self::any_numeric_coercible(column) {
            Self::coerce_numeric(column);
            return;
        }

        let all_bool = non_missing > 0
            && column
                .cells()
                .iter()
                .filter(|c| !c.is_missing())
                .all(|c| matches!(c, Cell::Bool(_)));
        if all_bool {
            column.set_column_type(ColumnType::Boolean);
            return;
        }

        Self::coerce_categorical(column);
    }

    /// Date-like when the column name carries a date keyword, or any of the
    /// first sampled non-missing values parses with a known date pattern.
    fn is_likely_datetime(&self, column: &Column) -> bool {
        let name = column.name().to_lowercase();
        if DATE_KEYWORDS.iter().any(|kw| name.contains(kw)) {
            return true;
        }

        column
            .cells()
            .iter()
            .filter(|c| !c.is_missing())
            .take(self.datetime_sample_rows)
            .any(|cell| parse_timestamp(&cell.display()).is_some())
    }

    fn coerce_datetime(column: &mut Column) {
        for cell in column.cells_mut() {
            *cell = match cell {
                Cell::Timestamp(ts) => Cell::Timestamp(*ts),
                Cell::Text(s) => match parse_timestamp(s) {
                    Some(ts) => Cell::Timestamp(ts),
                    None => Cell::Missing,
                },
                _ => Cell::Missing,
            };
        }
        column.set_column_type(ColumnType::Datetime);
    }

    fn any_numeric_coercible(column: &Column) -> bool {
        column.cells().iter().any(|cell| match cell {
            Cell::Number(_) | Cell::Bool(_) => true,
            Cell::Text(s) => parse_number(s).is_some(),
            _ => false,
        })
    }

    fn coerce_numeric(column: &mut Column) {
        for cell in column.cells_mut() {
            *cell = match cell {
                Cell::Number(v) => Cell::Number(*v),
                Cell::Bool(b) => Cell::Number(if *b { 1.0 } else { 0.0 }),
                Cell::Text(s) => match parse_number(s) {
                    Some(v) => Cell::Number(v),
                    None => Cell::Missing,
                },
                _ => Cell::Missing,
            };
        }
        column.set_column_type(ColumnType::Numerical);
    }

    fn coerce_categorical(column: &mut Column) {
        for cell in column.cells_mut() {
            if !cell.is_missing() && !matches!(cell, Cell::Text(_)) {
                *cell = Cell::Text(cell.display());
            }
        }
        column.set_column_type(ColumnType::Categorical);
    }

    /// Append per-column missing-value and outlier findings, mirroring what
    /// the load step reports to the user.
    fn log_quality_findings(&mut self, table: &Table) {
        let rows = table.row_count();
        if rows == 0 {
            return;
        }

        for column in table.columns() {
            let missing = column.missing_count();
            if missing > 0 {
                self.cleaning_log.push(format!(
                    "Column '{}': {} missing values ({:.1}%)",
                    column.name(),
                    missing,
                    missing as f64 / rows as f64 * 100.0
                ));
            }
        }

        for column in table.columns_of_type(ColumnType::Numerical) {
            let mut values = column.numeric_values();
            values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
            let outliers = descriptive::outlier_count(&values);
            if outliers > 0 {
                self.cleaning_log.push(format!(
                    "Column '{}': {} potential outliers detected",
                    column.name(),
                    outliers
                ));
            }
        }
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Try the time-bearing formats first, then plain dates at midnight.
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    for format in DATETIME_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(ts);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_cells(values: &[&str]) -> Vec<Cell> {
        values
            .iter()
            .map(|v| {
                if v.is_empty() {
                    Cell::Missing
                } else {
                    Cell::Text(v.to_string())
                }
            })
            .collect()
    }

    fn clean_table(mut table: Table) -> Table {
        DataCleaner::new().clean(&mut table).unwrap();
        table
    }

    #[test]
    fn test_duplicate_rows_removed_and_types_inferred() {
        let table = clean_table(Table::new(vec![
            Column::new("a", text_cells(&["1", "2", "2"])),
            Column::new("b", text_cells(&["x", "y", "y"])),
        ]));

        assert_eq!(table.row_count(), 2);
        assert_eq!(
            table.column("a").unwrap().column_type(),
            ColumnType::Numerical
        );
        assert_eq!(
            table.column("b").unwrap().column_type(),
            ColumnType::Categorical
        );
    }

    #[test]
    fn test_all_missing_rows_dropped() {
        let table = clean_table(Table::new(vec![
            Column::new("a", vec![Cell::Text("1".into()), Cell::Missing]),
            Column::new("b", vec![Cell::Text("x".into()), Cell::Missing]),
        ]));
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn test_column_names_normalized() {
        let table = clean_table(Table::new(vec![Column::new(
            " First Name ",
            text_cells(&["ann"]),
        )]));
        assert!(table.has_column("first_name"));
    }

    #[test]
    fn test_name_collision_is_an_error() {
        let mut table = Table::new(vec![
            Column::new("Value", text_cells(&["1"])),
            Column::new("value ", text_cells(&["2"])),
        ]);
        assert!(matches!(
            DataCleaner::new().clean(&mut table),
            Err(CleanerError::DuplicateColumn(_))
        ));
    }

    #[test]
    fn test_datetime_by_keyword_name() {
        let table = clean_table(Table::new(vec![Column::new(
            "created_at",
            text_cells(&["2023-01-05", "not a date"]),
        )]));
        let column = table.column("created_at").unwrap();
        assert_eq!(column.column_type(), ColumnType::Datetime);
        // Unparseable cell coerced to missing rather than failing the column.
        assert_eq!(column.missing_count(), 1);
    }

    #[test]
    fn test_datetime_by_value_pattern() {
        let table = clean_table(Table::new(vec![Column::new(
            "d",
            text_cells(&["05/06/2023", "07/08/2023"]),
        )]));
        assert_eq!(
            table.column("d").unwrap().column_type(),
            ColumnType::Datetime
        );
    }

    #[test]
    fn test_numeric_adopted_with_partial_parse() {
        let table = clean_table(Table::new(vec![Column::new(
            "v",
            text_cells(&["abc", "41.5"]),
        )]));
        let column = table.column("v").unwrap();
        assert_eq!(column.column_type(), ColumnType::Numerical);
        assert_eq!(column.cells()[0], Cell::Missing);
        assert_eq!(column.cells()[1], Cell::Number(41.5));
    }

    #[test]
    fn test_native_boolean_column() {
        let table = clean_table(Table::new(vec![Column::new(
            "flag",
            vec![Cell::Bool(true), Cell::Bool(false)],
        )]));
        assert_eq!(
            table.column("flag").unwrap().column_type(),
            ColumnType::Boolean
        );
    }

    #[test]
    fn test_all_missing_column_defaults_to_categorical() {
        let table = clean_table(Table::new(vec![
            Column::new("v", vec![Cell::Missing, Cell::Missing]),
            Column::new("w", text_cells(&["x", "y"])),
        ]));
        assert_eq!(
            table.column("v").unwrap().column_type(),
            ColumnType::Categorical
        );
    }

    #[test]
    fn test_cleaning_is_idempotent() {
        let mut table = Table::new(vec![
            Column::new("Amount", text_cells(&["1", "2", "2"])),
            Column::new("tag", text_cells(&["x", "y", "y"])),
        ]);
        DataCleaner::new().clean(&mut table).unwrap();
        let first_pass = table.clone();
        DataCleaner::new().clean(&mut table).unwrap();
        assert_eq!(table, first_pass);
    }

    #[test]
    fn test_inferred_types_stable_on_reinference() {
        // A datetime column recognized by value pattern must stay datetime
        // when inference runs again over already-coerced cells.
        let mut table = Table::new(vec![Column::new(
            "d",
            text_cells(&["2023-01-05", "2023-02-06"]),
        )]);
        DataCleaner::new().clean(&mut table).unwrap();
        DataCleaner::new().clean(&mut table).unwrap();
        assert_eq!(
            table.column("d").unwrap().column_type(),
            ColumnType::Datetime
        );
        assert_eq!(table.column("d").unwrap().missing_count(), 0);
    }

    #[test]
    fn test_removed_rows_logged() {
        let mut cleaner = DataCleaner::new();
        let mut table = Table::new(vec![Column::new("a", text_cells(&["1", "1"]))]);
        cleaner.clean(&mut table).unwrap();
        assert!(cleaner
            .cleaning_log()
            .iter()
            .any(|entry| entry.contains("Removed 1 empty/duplicate rows")));
    }
}
