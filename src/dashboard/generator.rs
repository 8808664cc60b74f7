//! Dashboard Generator Module
//! Session orchestrator: owns the current table, the configured charts and
//! the active filters, and sequences cleaning, KPI computation, chart
//! building, and filtered export.

use crate::charts::{ChartBuilder, ChartError, ChartSpec, ChartType, RenderableSeries};
use crate::config::DashboardConfig;
use crate::data::{
    CleanerError, ColumnType, DataCleaner, DataLoader, FilterEngine, FilterPredicate, FilterSet,
    LoaderError, Table,
};
use crate::quality::{DataValidator, ValidationResult};
use crate::stats::{CorrelationMatrix, KpiCalculator, KpiReport};
use log::{info, warn};
use serde::Serialize;
use std::path::Path;
use thiserror::Error;

/// Load failures. The dashboard's prior state survives any of these.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Data loading error: {0}")]
    Loader(#[from] LoaderError),
    #[error("Data loading error: {0}")]
    Cleaner(#[from] CleanerError),
    #[error("Empty CSV file detected")]
    EmptyAfterCleaning,
}

/// Chart configuration failures surfaced synchronously from `add_chart`.
/// No partial chart is stored on error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartConfigError {
    #[error("No dataset loaded")]
    NoData,
    #[error("Invalid column selected: {0}")]
    UnknownColumn(String),
    #[error("Invalid chart type: {0}")]
    InvalidChartType(String),
    #[error("Invalid secondary column selected: {0}")]
    UnknownSecondaryColumn(String),
}

/// One chart's build outcome, paired with its title for the rendering
/// surface. A not-renderable chart carries its reason instead of a series.
#[derive(Debug, Clone)]
pub struct RenderedChart {
    pub title: String,
    pub series: Result<RenderableSeries, ChartError>,
}

/// A chart recommendation derived from a column's inferred type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSuggestion {
    pub column: String,
    pub chart_type: ChartType,
    pub title: String,
}

/// Per-column shape information for summary panels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSummary {
    pub name: String,
    pub column_type: ColumnType,
    pub unique_values: usize,
    pub missing_count: usize,
}

/// Condensed view of the loaded table: row/column counts, memory estimate,
/// and per-column shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataSummary {
    pub total_records: usize,
    pub total_columns: usize,
    pub memory_usage_mb: f64,
    pub columns: Vec<ColumnSummary>,
}

/// Owns one session's dataset and dashboard state. Single-threaded and
/// synchronous: every operation runs to completion before returning.
pub struct DashboardGenerator {
    config: DashboardConfig,
    table: Option<Table>,
    charts: Vec<ChartSpec>,
    filters: FilterSet,
    kpi_cache: Option<KpiReport>,
    cleaning_log: Vec<String>,
}

impl Default for DashboardGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardGenerator {
    pub fn new() -> Self {
        Self::with_config(DashboardConfig::default())
    }

    pub fn with_config(config: DashboardConfig) -> Self {
        Self {
            config,
            table: None,
            charts: Vec::new(),
            filters: FilterSet::new(),
            kpi_cache: None,
            cleaning_log: Vec::new(),
        }
    }

    /// Load a dataset from CSV bytes: parse, clean, infer types, then
    /// atomically replace the table, chart list, and KPI cache. The active
    /// filters survive; stale column references are skipped at apply time.
    pub fn load_bytes(&mut self, bytes: &[u8]) -> Result<(), LoadError> {
        let mut table = DataLoader::parse_bytes(bytes)?;
        self.clean_and_commit(&mut table)
    }

    /// Load a dataset from a CSV file, enforcing the configured size limit.
    pub fn load_path(&mut self, path: &Path) -> Result<(), LoadError> {
        let mut table = DataLoader::parse_path(path, &self.config)?;
        self.clean_and_commit(&mut table)
    }

    fn clean_and_commit(&mut self, table: &mut Table) -> Result<(), LoadError> {
        let mut cleaner = DataCleaner::new().with_sample_rows(self.config.datetime_sample_rows);
        cleaner.clean(table)?;
        if table.is_empty() {
            return Err(LoadError::EmptyAfterCleaning);
        }

        info!("{} records loaded successfully", table.row_count());
        self.table = Some(std::mem::take(table));
        self.cleaning_log = cleaner.into_log();
        self.charts.clear();
        self.kpi_cache = None;
        Ok(())
    }

    /// Add a chart, validated against the current table. The live filter
    /// state is captured into the new spec. A scatter without a secondary
    /// column is accepted and falls back to a row-index axis at build time;
    /// a secondary column on any other chart type is ignored.
    pub fn add_chart(
        &mut self,
        column: &str,
        chart_type: &str,
        title: &str,
        secondary: Option<&str>,
    ) -> Result<(), ChartConfigError> {
        let table = self.table.as_ref().ok_or(ChartConfigError::NoData)?;
        if !table.has_column(column) {
            return Err(ChartConfigError::UnknownColumn(column.to_string()));
        }
        let chart_type: ChartType = chart_type
            .parse()
            .map_err(|e: crate::charts::UnknownChartType| ChartConfigError::InvalidChartType(e.0))?;

        let secondary_column = match (chart_type, secondary) {
            (ChartType::Scatter, Some(name)) => {
                if !table.has_column(name) {
                    return Err(ChartConfigError::UnknownSecondaryColumn(name.to_string()));
                }
                Some(name.to_string())
            }
            _ => None,
        };

        self.charts.push(ChartSpec {
            column: column.to_string(),
            chart_type,
            title: title.to_string(),
            secondary_column,
            filters: self.filters.clone(),
        });
        Ok(())
    }

    /// Remove a chart by display index. Out-of-range indices are a no-op.
    pub fn remove_chart(&mut self, index: usize) -> bool {
        if index < self.charts.len() {
            self.charts.remove(index);
            true
        } else {
            false
        }
    }

    pub fn clear_charts(&mut self) {
        self.charts.clear();
    }

    pub fn charts(&self) -> &[ChartSpec] {
        &self.charts
    }

    pub fn set_filter(&mut self, column: impl Into<String>, predicate: FilterPredicate) {
        self.filters.set(column, predicate);
    }

    pub fn remove_filter(&mut self, column: &str) -> bool {
        self.filters.remove(column)
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    /// KPIs for the full loaded table (filters are not applied). Memoized
    /// until the next load.
    pub fn compute_kpis(&mut self) -> Option<&KpiReport> {
        let table = self.table.as_ref()?;
        if self.kpi_cache.is_none() {
            self.kpi_cache = Some(KpiCalculator::compute(table));
        }
        self.kpi_cache.as_ref()
    }

    /// Build every configured chart against the current table, in display
    /// order. Charts that fail stay in the output with their reason; the
    /// rest of the dashboard renders regardless.
    pub fn render_all(&self) -> Vec<RenderedChart> {
        let Some(table) = &self.table else {
            return Vec::new();
        };
        self.charts
            .iter()
            .map(|spec| {
                let series = ChartBuilder::build(table, spec);
                if let Err(reason) = &series {
                    warn!("Chart '{}' not renderable: {}", spec.title, reason);
                }
                RenderedChart {
                    title: spec.title.clone(),
                    series,
                }
            })
            .collect()
    }

    /// Pairwise Pearson correlation over numerical columns. None when no
    /// table is loaded or fewer than two numerical columns exist.
    pub fn correlation_matrix(&self) -> Option<CorrelationMatrix> {
        CorrelationMatrix::compute(self.table.as_ref()?)
    }

    /// Advisory quality check of the current table.
    pub fn validate(&self) -> ValidationResult {
        match &self.table {
            Some(table) => DataValidator::validate(table),
            None => DataValidator::validate(&Table::default()),
        }
    }

    /// The current table filtered by the live filter set, as CSV text.
    pub fn export_filtered_csv(&self) -> Option<String> {
        let table = self.table.as_ref()?;
        let filtered = FilterEngine::apply(table, &self.filters);
        Some(DataLoader::export_csv(&filtered))
    }

    /// Chart recommendations by inferred column type.
    pub fn recommended_charts(&self) -> Vec<ChartSuggestion> {
        let Some(table) = &self.table else {
            return Vec::new();
        };
        let mut suggestions = Vec::new();
        for column in table.columns() {
            let name = column.name();
            match column.column_type() {
                ColumnType::Categorical => {
                    suggestions.push(suggestion(name, ChartType::Pie, "Distribution of"));
                    suggestions.push(suggestion(name, ChartType::Bar, "Frequency of"));
                    suggestions.push(suggestion(name, ChartType::Treemap, "Hierarchy of"));
                }
                ColumnType::Numerical => {
                    suggestions.push(suggestion(name, ChartType::Histogram, "Distribution of"));
                    suggestions.push(suggestion(name, ChartType::Bar, "Analysis of"));
                }
                ColumnType::Datetime => {
                    suggestions.push(suggestion(name, ChartType::Line, "Time Series of"));
                }
                ColumnType::Boolean | ColumnType::Text => {}
            }
        }
        suggestions
    }

    /// Condensed summary of the loaded table. None before the first load.
    pub fn data_summary(&self) -> Option<DataSummary> {
        let table = self.table.as_ref()?;
        Some(DataSummary {
            total_records: table.row_count(),
            total_columns: table.column_count(),
            memory_usage_mb: table.estimated_bytes() as f64 / 1024.0 / 1024.0,
            columns: table
                .columns()
                .iter()
                .map(|column| ColumnSummary {
                    name: column.name().to_string(),
                    column_type: column.column_type(),
                    unique_values: column.distinct_count(),
                    missing_count: column.missing_count(),
                })
                .collect(),
        })
    }

    pub fn available_columns(&self) -> Vec<String> {
        self.table
            .as_ref()
            .map(|t| t.column_names().iter().map(|n| n.to_string()).collect())
            .unwrap_or_default()
    }

    pub fn column_types(&self) -> Vec<(String, ColumnType)> {
        self.table
            .as_ref()
            .map(|t| {
                t.columns()
                    .iter()
                    .map(|c| (c.name().to_string(), c.column_type()))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn cleaning_log(&self) -> &[String] {
        &self.cleaning_log
    }

    pub fn row_count(&self) -> usize {
        self.table.as_ref().map(|t| t.row_count()).unwrap_or(0)
    }

    pub fn table(&self) -> Option<&Table> {
        self.table.as_ref()
    }
}

fn suggestion(column: &str, chart_type: ChartType, prefix: &str) -> ChartSuggestion {
    ChartSuggestion {
        column: column.to_string(),
        chart_type,
        title: format!("{} {}", prefix, column),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::TableMetric;

    const SALES_CSV: &[u8] = b"a,b\n1,x\n2,y\n2,y\n";

    fn loaded() -> DashboardGenerator {
        let mut dashboard = DashboardGenerator::new();
        dashboard.load_bytes(SALES_CSV).unwrap();
        dashboard
    }

    #[test]
    fn test_load_cleans_and_infers() {
        let dashboard = loaded();
        assert_eq!(dashboard.row_count(), 2);
        let types = dashboard.column_types();
        assert_eq!(types[0], ("a".to_string(), ColumnType::Numerical));
        assert_eq!(types[1], ("b".to_string(), ColumnType::Categorical));
    }

    #[test]
    fn test_failed_load_preserves_prior_state() {
        let mut dashboard = loaded();
        dashboard.add_chart("b", "bar", "t", None).unwrap();
        assert!(dashboard.load_bytes(b"a,b\n").is_err());
        assert_eq!(dashboard.row_count(), 2);
        assert_eq!(dashboard.charts().len(), 1);
    }

    #[test]
    fn test_reload_resets_charts_and_cache() {
        let mut dashboard = loaded();
        dashboard.add_chart("b", "bar", "t", None).unwrap();
        dashboard.compute_kpis().unwrap();
        dashboard.load_bytes(b"c\nq\nr\n").unwrap();
        assert!(dashboard.charts().is_empty());
        let records = dashboard
            .compute_kpis()
            .unwrap()
            .table_metric(TableMetric::TotalRecords)
            .and_then(|v| v.as_count())
            .unwrap();
        assert_eq!(records, 2);
    }

    #[test]
    fn test_add_chart_unknown_column_fails() {
        let mut dashboard = loaded();
        assert_eq!(
            dashboard.add_chart("nonexistent", "bar", "t", None),
            Err(ChartConfigError::UnknownColumn("nonexistent".to_string()))
        );
        assert!(dashboard.charts().is_empty());
    }

    #[test]
    fn test_add_chart_invalid_type_fails() {
        let mut dashboard = loaded();
        assert_eq!(
            dashboard.add_chart("b", "sunburst", "t", None),
            Err(ChartConfigError::InvalidChartType("sunburst".to_string()))
        );
    }

    #[test]
    fn test_scatter_without_secondary_renders_index_series() {
        let mut dashboard = loaded();
        dashboard.add_chart("a", "scatter", "t", None).unwrap();
        let rendered = dashboard.render_all();
        assert_eq!(rendered.len(), 1);
        match rendered[0].series.as_ref().unwrap() {
            RenderableSeries::Points { x, y } => {
                assert_eq!(x, &[0.0, 1.0]);
                assert_eq!(y, &[1.0, 2.0]);
            }
            other => panic!("expected point series, got {:?}", other),
        }
    }

    #[test]
    fn test_scatter_with_unknown_secondary_fails() {
        let mut dashboard = loaded();
        assert!(matches!(
            dashboard.add_chart("a", "scatter", "t", Some("gone")),
            Err(ChartConfigError::UnknownSecondaryColumn(_))
        ));
    }

    #[test]
    fn test_add_chart_snapshots_live_filters() {
        let mut dashboard = loaded();
        dashboard.set_filter(
            "b",
            FilterPredicate::Equals {
                value: "zzz".into(),
            },
        );
        dashboard.add_chart("b", "pie", "t", None).unwrap();
        // Later filter edits must not affect the stored snapshot.
        dashboard.clear_filters();
        let rendered = dashboard.render_all();
        assert_eq!(
            rendered[0].series,
            Err(ChartError::NoDataAfterFilter)
        );
    }

    #[test]
    fn test_remove_and_clear_charts() {
        let mut dashboard = loaded();
        dashboard.add_chart("b", "pie", "first", None).unwrap();
        dashboard.add_chart("b", "bar", "second", None).unwrap();
        assert!(dashboard.remove_chart(0));
        assert!(!dashboard.remove_chart(5));
        assert_eq!(dashboard.charts()[0].title, "second");
        dashboard.clear_charts();
        assert!(dashboard.charts().is_empty());
    }

    #[test]
    fn test_correlation_requires_two_numerical_columns() {
        let dashboard = loaded();
        assert!(dashboard.correlation_matrix().is_none());

        let mut bigger = DashboardGenerator::new();
        bigger.load_bytes(b"a,b\n1,2\n2,4\n3,6\n").unwrap();
        let matrix = bigger.correlation_matrix().unwrap();
        assert!((matrix.get("a", "b").unwrap() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_export_filtered_csv_applies_live_filters() {
        let mut dashboard = loaded();
        dashboard.set_filter("b", FilterPredicate::Equals { value: "x".into() });
        assert_eq!(dashboard.export_filtered_csv().unwrap(), "a,b\n1,x\n");
    }

    #[test]
    fn test_validate_without_table_reports_empty() {
        let dashboard = DashboardGenerator::new();
        assert!(!dashboard.validate().is_valid);
    }

    #[test]
    fn test_data_summary_reports_column_shape() {
        let dashboard = loaded();
        let summary = dashboard.data_summary().unwrap();
        assert_eq!(summary.total_records, 2);
        assert_eq!(summary.total_columns, 2);
        assert_eq!(
            summary.columns[1],
            ColumnSummary {
                name: "b".into(),
                column_type: ColumnType::Categorical,
                unique_values: 2,
                missing_count: 0,
            }
        );
        assert!(DashboardGenerator::new().data_summary().is_none());
    }

    #[test]
    fn test_recommended_charts_follow_column_types() {
        let dashboard = loaded();
        let suggestions = dashboard.recommended_charts();
        assert!(suggestions.contains(&ChartSuggestion {
            column: "a".into(),
            chart_type: ChartType::Histogram,
            title: "Distribution of a".into(),
        }));
        assert!(suggestions.contains(&ChartSuggestion {
            column: "b".into(),
            chart_type: ChartType::Pie,
            title: "Distribution of b".into(),
        }));
    }
}
