//! Core Table Model
//! Typed columns with tagged-union cells; types are assigned once by inference.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Semantic column types assigned during type inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Datetime,
    Numerical,
    Categorical,
    Boolean,
    Text,
}

impl ColumnType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Datetime => "datetime",
            ColumnType::Numerical => "numerical",
            ColumnType::Categorical => "categorical",
            ColumnType::Boolean => "boolean",
            ColumnType::Text => "text",
        }
    }
}

/// A single table cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Missing,
    Number(f64),
    Text(String),
    Timestamp(NaiveDateTime),
    Bool(bool),
}

impl Cell {
    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<NaiveDateTime> {
        match self {
            Cell::Timestamp(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Cell::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Numeric view used for scatter axes: numbers as-is, timestamps as
    /// epoch seconds. Everything else has no numeric interpretation.
    pub fn as_axis_value(&self) -> Option<f64> {
        match self {
            Cell::Number(v) => Some(*v),
            Cell::Timestamp(ts) => Some(ts.and_utc().timestamp() as f64),
            _ => None,
        }
    }

    /// Canonical string form, shared by CSV export, frequency counting and
    /// filter comparisons. Missing renders as the empty string; integral
    /// floats render without a trailing ".0" so values survive a CSV
    /// round trip unchanged.
    pub fn display(&self) -> String {
        match self {
            Cell::Missing => String::new(),
            Cell::Number(v) => v.to_string(),
            Cell::Text(v) => v.clone(),
            Cell::Timestamp(ts) => {
                if ts.time() == chrono::NaiveTime::MIN {
                    ts.format("%Y-%m-%d").to_string()
                } else {
                    ts.format("%Y-%m-%d %H:%M:%S").to_string()
                }
            }
            Cell::Bool(v) => v.to_string(),
        }
    }
}

/// A named, typed column of cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    column_type: ColumnType,
    cells: Vec<Cell>,
}

impl Column {
    /// New column of raw cells. Starts as categorical until inference
    /// assigns the real type.
    pub fn new(name: impl Into<String>, cells: Vec<Cell>) -> Self {
        Self {
            name: name.into(),
            column_type: ColumnType::Categorical,
            cells,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn column_type(&self) -> ColumnType {
        self.column_type
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn set_column_type(&mut self, column_type: ColumnType) {
        self.column_type = column_type;
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    pub fn missing_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_missing()).count()
    }

    pub fn non_missing_count(&self) -> usize {
        self.cells.len() - self.missing_count()
    }

    /// Number of distinct non-missing values, compared by canonical string.
    pub fn distinct_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| !c.is_missing())
            .map(|c| c.display())
            .collect::<HashSet<_>>()
            .len()
    }

    /// All non-missing numeric values.
    pub fn numeric_values(&self) -> Vec<f64> {
        self.cells.iter().filter_map(|c| c.as_number()).collect()
    }

    /// All non-missing timestamps.
    pub fn timestamps(&self) -> Vec<NaiveDateTime> {
        self.cells.iter().filter_map(|c| c.as_timestamp()).collect()
    }

    /// Canonical strings of the non-missing cells, in row order.
    pub fn display_values(&self) -> Vec<String> {
        self.cells
            .iter()
            .filter(|c| !c.is_missing())
            .map(|c| c.display())
            .collect()
    }
}

/// An in-memory dataset: ordered columns of equal length.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        debug_assert!(
            columns.windows(2).all(|w| w[0].len() == w[1].len()),
            "columns must have equal length"
        );
        Self { columns }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub(crate) fn columns_mut(&mut self) -> &mut [Column] {
        &mut self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name()).collect()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map(|c| c.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.row_count() == 0 || self.column_count() == 0
    }

    pub fn total_cells(&self) -> usize {
        self.row_count() * self.column_count()
    }

    pub fn total_missing_cells(&self) -> usize {
        self.columns.iter().map(|c| c.missing_count()).sum()
    }

    /// Columns of the requested inferred type, in table order.
    pub fn columns_of_type(&self, column_type: ColumnType) -> Vec<&Column> {
        self.columns
            .iter()
            .filter(|c| c.column_type() == column_type)
            .collect()
    }

    /// Canonical key of one row, used for exact-duplicate comparison.
    pub fn row_fingerprint(&self, row: usize) -> String {
        let mut key = String::new();
        for column in &self.columns {
            key.push_str(&column.cells()[row].display());
            key.push('\u{1f}');
        }
        key
    }

    /// Number of rows that are exact duplicates of an earlier row.
    pub fn duplicate_row_count(&self) -> usize {
        let mut seen = HashSet::with_capacity(self.row_count());
        let mut duplicates = 0;
        for row in 0..self.row_count() {
            if !seen.insert(self.row_fingerprint(row)) {
                duplicates += 1;
            }
        }
        duplicates
    }

    /// Keep only rows flagged true. `keep` must cover every row.
    pub(crate) fn retain_rows(&mut self, keep: &[bool]) {
        for column in &mut self.columns {
            let mut row = 0;
            column.cells.retain(|_| {
                let kept = keep[row];
                row += 1;
                kept
            });
        }
    }

    /// Derived view containing the given rows, in order. The source table
    /// is left untouched.
    pub fn select_rows(&self, rows: &[usize]) -> Table {
        let columns = self
            .columns
            .iter()
            .map(|column| {
                let cells = rows.iter().map(|&r| column.cells()[r].clone()).collect();
                let mut selected = Column::new(column.name(), cells);
                selected.set_column_type(column.column_type());
                selected
            })
            .collect();
        Table::new(columns)
    }

    /// Rough in-memory footprint in bytes: enum slots plus string heap.
    pub fn estimated_bytes(&self) -> usize {
        let slot = std::mem::size_of::<Cell>();
        self.columns
            .iter()
            .flat_map(|c| c.cells())
            .map(|cell| {
                slot + match cell {
                    Cell::Text(s) => s.len(),
                    _ => 0,
                }
            })
            .sum()
    }
}
