//! Filter Engine Module
//! Declarative per-column row filters producing derived views; the source
//! table is never mutated.

use crate::data::table::{Cell, Table};
use serde::{Deserialize, Serialize};

/// A single column constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FilterPredicate {
    /// Exact equality against the cell's canonical string form.
    Equals { value: String },
    /// Finite set membership.
    OneOf { values: Vec<String> },
    /// Numeric range; either bound may be absent.
    Range { min: Option<f64>, max: Option<f64> },
}

impl FilterPredicate {
    /// Empty predicates constrain nothing and are skipped entirely.
    pub fn is_empty(&self) -> bool {
        match self {
            FilterPredicate::Equals { value } => value.is_empty(),
            FilterPredicate::OneOf { values } => values.is_empty(),
            FilterPredicate::Range { min, max } => min.is_none() && max.is_none(),
        }
    }

    /// Missing cells never satisfy a predicate.
    fn matches(&self, cell: &Cell) -> bool {
        if cell.is_missing() {
            return false;
        }
        match self {
            FilterPredicate::Equals { value } => cell.display() == *value,
            FilterPredicate::OneOf { values } => {
                let display = cell.display();
                values.iter().any(|v| *v == display)
            }
            FilterPredicate::Range { min, max } => match cell.as_number() {
                Some(v) => min.map_or(true, |m| v >= m) && max.map_or(true, |m| v <= m),
                None => false,
            },
        }
    }
}

/// Ordered mapping from column name to predicate. Entries combine with
/// logical AND; columns not listed are unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSet {
    entries: Vec<(String, FilterPredicate)>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the predicate for a column, replacing any previous one in place.
    pub fn set(&mut self, column: impl Into<String>, predicate: FilterPredicate) {
        let column = column.into();
        match self.entries.iter_mut().find(|(name, _)| *name == column) {
            Some(entry) => entry.1 = predicate,
            None => self.entries.push((column, predicate)),
        }
    }

    pub fn remove(&mut self, column: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(name, _)| name != column);
        self.entries.len() != before
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, column: &str) -> Option<&FilterPredicate> {
        self.entries
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, predicate)| predicate)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterPredicate)> {
        self.entries
            .iter()
            .map(|(name, predicate)| (name.as_str(), predicate))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Applies a `FilterSet` to a table, yielding a derived view.
pub struct FilterEngine;

impl FilterEngine {
    /// Keep rows satisfying every active predicate. Predicates referencing
    /// columns no longer present, and empty predicates, are skipped.
    pub fn apply(table: &Table, filters: &FilterSet) -> Table {
        let active: Vec<_> = filters
            .iter()
            .filter(|(_, predicate)| !predicate.is_empty())
            .filter_map(|(name, predicate)| table.column(name).map(|c| (c, predicate)))
            .collect();

        if active.is_empty() {
            return table.clone();
        }

        let rows: Vec<usize> = (0..table.row_count())
            .filter(|&row| {
                active
                    .iter()
                    .all(|(column, predicate)| predicate.matches(&column.cells()[row]))
            })
            .collect();

        table.select_rows(&rows)
    }
}
