//! Chart Series Builder Module
//! Translates a chart spec into a renderer-agnostic series: either a
//! label/value frequency mapping or aligned x/y sequences. Turning the
//! series into pixels is the rendering surface's job.

use crate::charts::spec::{ChartSpec, ChartType};
use crate::data::{ColumnType, FilterEngine, Table};
use crate::stats::descriptive::value_counts;
use serde::Serialize;
use thiserror::Error;

const BAR_TOP_N: usize = 20;
const TREEMAP_TOP_N: usize = 50;
const FUNNEL_TOP_N: usize = 10;
const HISTOGRAM_BINS: usize = 30;

/// Per-chart build failures. None of these is fatal to the dashboard; a
/// failed chart is reported as not renderable and the rest continue.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("Invalid column selected: {0}")]
    ColumnNotFound(String),
    #[error("No data available after filtering")]
    NoDataAfterFilter,
    #[error("Invalid chart configuration: {0}")]
    InvalidConfig(String),
}

/// Chart-type-agnostic output handed to the rendering surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderableSeries {
    /// Label/magnitude pairs, aligned by index.
    Frequency { labels: Vec<String>, values: Vec<u64> },
    /// Aligned x/y point sequences.
    Points { x: Vec<f64>, y: Vec<f64> },
    /// Raw values for renderer-side equal-width binning.
    Histogram {
        values: Vec<f64>,
        suggested_bins: usize,
    },
}

/// Builds series from specs. Stateless; each invocation applies the spec's
/// captured filters to the current table.
pub struct ChartBuilder;

impl ChartBuilder {
    pub fn build(table: &Table, chart: &ChartSpec) -> Result<RenderableSeries, ChartError> {
        if !table.has_column(&chart.column) {
            return Err(ChartError::ColumnNotFound(chart.column.clone()));
        }

        let filtered = FilterEngine::apply(table, &chart.filters);
        if filtered.is_empty() {
            return Err(ChartError::NoDataAfterFilter);
        }

        match chart.chart_type {
            ChartType::Pie => Ok(Self::frequency_series(&filtered, &chart.column, usize::MAX)),
            ChartType::Treemap => {
                Ok(Self::frequency_series(&filtered, &chart.column, TREEMAP_TOP_N))
            }
            ChartType::Bar => Ok(Self::frequency_series(&filtered, &chart.column, BAR_TOP_N)),
            ChartType::Line => Ok(Self::line_series(&filtered, &chart.column)),
            ChartType::Histogram => Ok(Self::histogram_series(&filtered, &chart.column)),
            ChartType::Scatter => Self::scatter_series(&filtered, chart),
            ChartType::Funnel => {
                Ok(Self::frequency_series(&filtered, &chart.column, FUNNEL_TOP_N))
            }
        }
    }

    /// Frequency table of the column's values, capped to the top `limit`.
    fn frequency_series(table: &Table, column: &str, limit: usize) -> RenderableSeries {
        let counts = Self::column_counts(table, column);
        let (labels, values) = counts.into_iter().take(limit).unzip();
        RenderableSeries::Frequency { labels, values }
    }

    /// Datetime columns get a timestamp-ordered frequency series; anything
    /// else falls back to a top-20 frequency table in count order.
    fn line_series(table: &Table, column: &str) -> RenderableSeries {
        let source = table.column(column).expect("column checked by caller");
        if source.column_type() == ColumnType::Datetime {
            let mut counts = Self::column_counts(table, column);
            // Canonical timestamp strings sort chronologically.
            counts.sort_by(|a, b| a.0.cmp(&b.0));
            let (labels, values) = counts.into_iter().unzip();
            RenderableSeries::Frequency { labels, values }
        } else {
            Self::frequency_series(table, column, BAR_TOP_N)
        }
    }

    fn histogram_series(table: &Table, column: &str) -> RenderableSeries {
        let source = table.column(column).expect("column checked by caller");
        RenderableSeries::Histogram {
            values: source.numeric_values(),
            suggested_bins: HISTOGRAM_BINS,
        }
    }

    /// With a secondary column: paired points over rows where both axes are
    /// numeric. Without one: primary values plotted against row index.
    fn scatter_series(table: &Table, chart: &ChartSpec) -> Result<RenderableSeries, ChartError> {
        let primary = table
            .column(&chart.column)
            .expect("column checked by caller");

        match &chart.secondary_column {
            Some(secondary_name) => {
                let secondary = table.column(secondary_name).ok_or_else(|| {
                    ChartError::InvalidConfig(format!(
                        "secondary column '{}' not found",
                        secondary_name
                    ))
                })?;
                let mut x = Vec::new();
                let mut y = Vec::new();
                for row in 0..table.row_count() {
                    if let (Some(px), Some(py)) = (
                        primary.cells()[row].as_axis_value(),
                        secondary.cells()[row].as_axis_value(),
                    ) {
                        x.push(px);
                        y.push(py);
                    }
                }
                Ok(RenderableSeries::Points { x, y })
            }
            None => {
                let mut x = Vec::new();
                let mut y = Vec::new();
                for (row, cell) in primary.cells().iter().enumerate() {
                    if let Some(value) = cell.as_axis_value() {
                        x.push(row as f64);
                        y.push(value);
                    }
                }
                Ok(RenderableSeries::Points { x, y })
            }
        }
    }

    fn column_counts(table: &Table, column: &str) -> Vec<(String, u64)> {
        let source = table.column(column).expect("column checked by caller");
        value_counts(source.display_values().into_iter())
    }
}
