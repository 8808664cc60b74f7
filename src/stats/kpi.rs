//! KPI Calculator Module
//! Whole-table and per-column metrics computed over the cleaned, typed table.
//!
//! Metrics live in a structured map keyed by `(column, metric)`; the flat
//! `"<column>_<metric>"` string form exists only at the serialization
//! boundary via [`KpiReport::flatten`].

use crate::data::{Cell, Column, ColumnType, Table};
use crate::stats::descriptive;
use crate::stats::descriptive::value_counts as frequency_table;
use chrono::Datelike;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashMap;
use std::time::Instant;

/// A column is high-cardinality when its distinct count exceeds this share
/// of the row count.
const HIGH_CARDINALITY_RATIO: f64 = 0.5;

/// Per-column metric identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnMetric {
    // Numerical
    Sum,
    Mean,
    Median,
    Max,
    Min,
    Std,
    Variance,
    Skewness,
    Kurtosis,
    P25,
    P75,
    Iqr,
    OutliersCount,
    OutliersPercentage,
    // Temporal
    Earliest,
    Latest,
    DateRangeDays,
    WeekdayDistribution,
    MonthDistribution,
    YearDistribution,
    QuarterlyDistribution,
    AvgTimeGapHours,
    MaxTimeGapHours,
    // Categorical
    UniqueCount,
    Mode,
    ModeFrequency,
    ModePercentage,
    Entropy,
    GiniCoefficient,
    Top5Values,
    Bottom5Values,
    CardinalityRatio,
}

impl ColumnMetric {
    pub fn key(self) -> &'static str {
        match self {
            ColumnMetric::Sum => "sum",
            ColumnMetric::Mean => "mean",
            ColumnMetric::Median => "median",
            ColumnMetric::Max => "max",
            ColumnMetric::Min => "min",
            ColumnMetric::Std => "std",
            ColumnMetric::Variance => "variance",
            ColumnMetric::Skewness => "skewness",
            ColumnMetric::Kurtosis => "kurtosis",
            ColumnMetric::P25 => "p25",
            ColumnMetric::P75 => "p75",
            ColumnMetric::Iqr => "iqr",
            ColumnMetric::OutliersCount => "outliers_count",
            ColumnMetric::OutliersPercentage => "outliers_percentage",
            ColumnMetric::Earliest => "earliest",
            ColumnMetric::Latest => "latest",
            ColumnMetric::DateRangeDays => "date_range_days",
            ColumnMetric::WeekdayDistribution => "weekday_distribution",
            ColumnMetric::MonthDistribution => "month_distribution",
            ColumnMetric::YearDistribution => "year_distribution",
            ColumnMetric::QuarterlyDistribution => "quarterly_distribution",
            ColumnMetric::AvgTimeGapHours => "avg_time_gap_hours",
            ColumnMetric::MaxTimeGapHours => "max_time_gap_hours",
            ColumnMetric::UniqueCount => "unique_count",
            ColumnMetric::Mode => "mode",
            ColumnMetric::ModeFrequency => "mode_frequency",
            ColumnMetric::ModePercentage => "mode_percentage",
            ColumnMetric::Entropy => "entropy",
            ColumnMetric::GiniCoefficient => "gini_coefficient",
            ColumnMetric::Top5Values => "top_5_values",
            ColumnMetric::Bottom5Values => "bottom_5_values",
            ColumnMetric::CardinalityRatio => "cardinality_ratio",
        }
    }
}

/// Whole-table metric identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableMetric {
    TotalRecords,
    TotalColumns,
    MemoryUsageMb,
    DataCompleteness,
    TotalMissingValues,
    MissingValuesPercentage,
    ColumnsWithMissingData,
    ColumnsCompleteData,
    DuplicateRows,
    DuplicatePercentage,
    DataConsistencyScore,
    ProcessingTimeSeconds,
    MemoryEfficiencyMbPerRecord,
    AvgColumnCardinality,
    HighCardinalityColumns,
}

impl TableMetric {
    pub fn key(self) -> &'static str {
        match self {
            TableMetric::TotalRecords => "total_records",
            TableMetric::TotalColumns => "total_columns",
            TableMetric::MemoryUsageMb => "memory_usage_mb",
            TableMetric::DataCompleteness => "data_completeness",
            TableMetric::TotalMissingValues => "total_missing_values",
            TableMetric::MissingValuesPercentage => "missing_values_percentage",
            TableMetric::ColumnsWithMissingData => "columns_with_missing_data",
            TableMetric::ColumnsCompleteData => "columns_complete_data",
            TableMetric::DuplicateRows => "duplicate_rows",
            TableMetric::DuplicatePercentage => "duplicate_percentage",
            TableMetric::DataConsistencyScore => "data_consistency_score",
            TableMetric::ProcessingTimeSeconds => "processing_time_seconds",
            TableMetric::MemoryEfficiencyMbPerRecord => "memory_efficiency_mb_per_record",
            TableMetric::AvgColumnCardinality => "avg_column_cardinality",
            TableMetric::HighCardinalityColumns => "high_cardinality_columns",
        }
    }
}

/// A computed metric value. Scalars stay scalar; distributions keep their
/// rank order as label/count pairs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetricValue {
    Float(f64),
    Count(u64),
    Text(String),
    Breakdown(Vec<(String, u64)>),
}

impl MetricValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            MetricValue::Float(v) => Some(*v),
            MetricValue::Count(v) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn as_count(&self) -> Option<u64> {
        match self {
            MetricValue::Count(v) => Some(*v),
            _ => None,
        }
    }

    fn to_json(&self) -> serde_json::Value {
        match self {
            MetricValue::Float(v) => serde_json::Number::from_f64(*v)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            MetricValue::Count(v) => serde_json::Value::from(*v),
            MetricValue::Text(v) => serde_json::Value::from(v.clone()),
            MetricValue::Breakdown(pairs) => {
                let mut map = serde_json::Map::new();
                for (label, count) in pairs {
                    map.insert(label.clone(), serde_json::Value::from(*count));
                }
                serde_json::Value::Object(map)
            }
        }
    }
}

/// All metrics for one table, looked up by structured key.
#[derive(Debug, Clone, Default)]
pub struct KpiReport {
    table_metrics: HashMap<TableMetric, MetricValue>,
    column_metrics: HashMap<(String, ColumnMetric), MetricValue>,
}

impl KpiReport {
    pub fn table_metric(&self, metric: TableMetric) -> Option<&MetricValue> {
        self.table_metrics.get(&metric)
    }

    pub fn column_metric(&self, column: &str, metric: ColumnMetric) -> Option<&MetricValue> {
        self.column_metrics.get(&(column.to_string(), metric))
    }

    pub fn len(&self) -> usize {
        self.table_metrics.len() + self.column_metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flat `"<column>_<metric>"` string-keyed view for the rendering
    /// surface. Non-finite floats become null.
    pub fn flatten(&self) -> serde_json::Map<String, serde_json::Value> {
        let mut flat = serde_json::Map::new();
        for (metric, value) in &self.table_metrics {
            flat.insert(metric.key().to_string(), value.to_json());
        }
        for ((column, metric), value) in &self.column_metrics {
            flat.insert(format!("{}_{}", column, metric.key()), value.to_json());
        }
        flat
    }

    fn insert_table(&mut self, metric: TableMetric, value: MetricValue) {
        self.table_metrics.insert(metric, value);
    }

    fn insert_column(&mut self, column: &str, metric: ColumnMetric, value: MetricValue) {
        self.column_metrics
            .insert((column.to_string(), metric), value);
    }
}

/// Computes the full KPI set. Pure function of the table; caching and
/// invalidation belong to the dashboard layer.
pub struct KpiCalculator;

impl KpiCalculator {
    pub fn compute(table: &Table) -> KpiReport {
        let mut report = KpiReport::default();
        Self::core_metrics(table, &mut report);
        if table.is_empty() {
            return report;
        }
        Self::numerical_kpis(table, &mut report);
        Self::temporal_kpis(table, &mut report);
        Self::categorical_kpis(table, &mut report);
        Self::quality_kpis(table, &mut report);
        Self::performance_kpis(table, &mut report);
        report
    }

    fn core_metrics(table: &Table, report: &mut KpiReport) {
        report.insert_table(
            TableMetric::TotalRecords,
            MetricValue::Count(table.row_count() as u64),
        );
        report.insert_table(
            TableMetric::TotalColumns,
            MetricValue::Count(table.column_count() as u64),
        );
        report.insert_table(
            TableMetric::MemoryUsageMb,
            MetricValue::Float(table.estimated_bytes() as f64 / 1024.0 / 1024.0),
        );
        let completeness = if table.total_cells() == 0 {
            100.0
        } else {
            (1.0 - table.total_missing_cells() as f64 / table.total_cells() as f64) * 100.0
        };
        report.insert_table(TableMetric::DataCompleteness, MetricValue::Float(completeness));
    }

    fn numerical_kpis(table: &Table, report: &mut KpiReport) {
        let per_column: Vec<Vec<(String, ColumnMetric, MetricValue)>> = table
            .columns_of_type(ColumnType::Numerical)
            .par_iter()
            .map(|column| Self::numeric_column_metrics(column))
            .collect();
        for (column, metric, value) in per_column.into_iter().flatten() {
            report.insert_column(&column, metric, value);
        }
    }

    /// Dispersion, shape, quartiles and IQR-fence outliers for one numeric
    /// column. Columns with no non-missing values are skipped silently.
    fn numeric_column_metrics(column: &Column) -> Vec<(String, ColumnMetric, MetricValue)> {
        let mut values = column.numeric_values();
        if values.is_empty() {
            return Vec::new();
        }
        values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let name = column.name();
        let count = values.len() as f64;
        let p25 = descriptive::percentile(&values, 25.0);
        let p75 = descriptive::percentile(&values, 75.0);
        let outliers = descriptive::outlier_count(&values);

        let mut metrics = vec![
            (
                name.to_string(),
                ColumnMetric::Sum,
                MetricValue::Float(values.iter().sum()),
            ),
            (
                name.to_string(),
                ColumnMetric::Mean,
                MetricValue::Float(descriptive::mean(&values)),
            ),
            (
                name.to_string(),
                ColumnMetric::Median,
                MetricValue::Float(descriptive::median(&values)),
            ),
            (
                name.to_string(),
                ColumnMetric::Max,
                MetricValue::Float(*values.last().expect("non-empty")),
            ),
            (
                name.to_string(),
                ColumnMetric::Min,
                MetricValue::Float(values[0]),
            ),
            (
                name.to_string(),
                ColumnMetric::Std,
                MetricValue::Float(descriptive::population_std(&values)),
            ),
            (
                name.to_string(),
                ColumnMetric::Variance,
                MetricValue::Float(descriptive::population_variance(&values)),
            ),
            (
                name.to_string(),
                ColumnMetric::Skewness,
                MetricValue::Float(descriptive::skewness(&values)),
            ),
            (
                name.to_string(),
                ColumnMetric::Kurtosis,
                MetricValue::Float(descriptive::excess_kurtosis(&values)),
            ),
            (name.to_string(), ColumnMetric::P25, MetricValue::Float(p25)),
            (name.to_string(), ColumnMetric::P75, MetricValue::Float(p75)),
            (
                name.to_string(),
                ColumnMetric::Iqr,
                MetricValue::Float(p75 - p25),
            ),
        ];
        metrics.push((
            name.to_string(),
            ColumnMetric::OutliersCount,
            MetricValue::Count(outliers as u64),
        ));
        metrics.push((
            name.to_string(),
            ColumnMetric::OutliersPercentage,
            MetricValue::Float(outliers as f64 / count * 100.0),
        ));
        metrics
    }

    fn temporal_kpis(table: &Table, report: &mut KpiReport) {
        for column in table.columns_of_type(ColumnType::Datetime) {
            let mut timestamps = column.timestamps();
            if timestamps.is_empty() {
                continue;
            }
            timestamps.sort();
            let name = column.name();
            let earliest = timestamps[0];
            let latest = *timestamps.last().expect("non-empty");

            report.insert_column(
                name,
                ColumnMetric::Earliest,
                MetricValue::Text(Cell::Timestamp(earliest).display()),
            );
            report.insert_column(
                name,
                ColumnMetric::Latest,
                MetricValue::Text(Cell::Timestamp(latest).display()),
            );
            report.insert_column(
                name,
                ColumnMetric::DateRangeDays,
                MetricValue::Count((latest - earliest).num_days().max(0) as u64),
            );

            report.insert_column(
                name,
                ColumnMetric::WeekdayDistribution,
                MetricValue::Breakdown(frequency_table(
                    timestamps
                        .iter()
                        .map(|ts| ts.weekday().num_days_from_monday().to_string()),
                )),
            );
            report.insert_column(
                name,
                ColumnMetric::MonthDistribution,
                MetricValue::Breakdown(frequency_table(
                    timestamps.iter().map(|ts| ts.month().to_string()),
                )),
            );
            report.insert_column(
                name,
                ColumnMetric::YearDistribution,
                MetricValue::Breakdown(frequency_table(
                    timestamps.iter().map(|ts| ts.year().to_string()),
                )),
            );
            report.insert_column(
                name,
                ColumnMetric::QuarterlyDistribution,
                MetricValue::Breakdown(frequency_table(
                    timestamps
                        .iter()
                        .map(|ts| ((ts.month() - 1) / 3 + 1).to_string()),
                )),
            );

            // Gap analysis needs at least two points; otherwise both keys
            // are omitted.
            if timestamps.len() >= 2 {
                let gaps: Vec<f64> = timestamps
                    .windows(2)
                    .map(|pair| (pair[1] - pair[0]).num_seconds() as f64 / 3600.0)
                    .collect();
                report.insert_column(
                    name,
                    ColumnMetric::AvgTimeGapHours,
                    MetricValue::Float(descriptive::mean(&gaps)),
                );
                report.insert_column(
                    name,
                    ColumnMetric::MaxTimeGapHours,
                    MetricValue::Float(gaps.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b))),
                );
            }
        }
    }

    fn categorical_kpis(table: &Table, report: &mut KpiReport) {
        for column in table.columns_of_type(ColumnType::Categorical) {
            let displays = column.display_values();
            if displays.is_empty() {
                continue;
            }
            let name = column.name();
            let total = displays.len() as f64;
            let counts = frequency_table(displays.into_iter());
            let count_values: Vec<u64> = counts.iter().map(|(_, c)| *c).collect();
            let (mode, mode_frequency) = counts[0].clone();

            report.insert_column(
                name,
                ColumnMetric::UniqueCount,
                MetricValue::Count(counts.len() as u64),
            );
            report.insert_column(name, ColumnMetric::Mode, MetricValue::Text(mode));
            report.insert_column(
                name,
                ColumnMetric::ModeFrequency,
                MetricValue::Count(mode_frequency),
            );
            report.insert_column(
                name,
                ColumnMetric::ModePercentage,
                MetricValue::Float(mode_frequency as f64 / total * 100.0),
            );
            report.insert_column(
                name,
                ColumnMetric::Entropy,
                MetricValue::Float(descriptive::shannon_entropy(&count_values)),
            );
            report.insert_column(
                name,
                ColumnMetric::GiniCoefficient,
                MetricValue::Float(descriptive::gini_concentration(&count_values)),
            );
            report.insert_column(
                name,
                ColumnMetric::Top5Values,
                MetricValue::Breakdown(counts.iter().take(5).cloned().collect()),
            );
            let bottom_start = counts.len().saturating_sub(5);
            report.insert_column(
                name,
                ColumnMetric::Bottom5Values,
                MetricValue::Breakdown(counts[bottom_start..].to_vec()),
            );
            report.insert_column(
                name,
                ColumnMetric::CardinalityRatio,
                MetricValue::Float(counts.len() as f64 / total),
            );
        }
    }

    fn quality_kpis(table: &Table, report: &mut KpiReport) {
        let missing = table.total_missing_cells();
        report.insert_table(
            TableMetric::TotalMissingValues,
            MetricValue::Count(missing as u64),
        );
        let missing_ratio = missing as f64 / table.total_cells() as f64;
        report.insert_table(
            TableMetric::MissingValuesPercentage,
            MetricValue::Float(missing_ratio * 100.0),
        );

        let with_missing = table
            .columns()
            .iter()
            .filter(|c| c.missing_count() > 0)
            .count();
        report.insert_table(
            TableMetric::ColumnsWithMissingData,
            MetricValue::Count(with_missing as u64),
        );
        report.insert_table(
            TableMetric::ColumnsCompleteData,
            MetricValue::Count((table.column_count() - with_missing) as u64),
        );

        let duplicates = table.duplicate_row_count();
        let duplicate_ratio = duplicates as f64 / table.row_count() as f64;
        report.insert_table(
            TableMetric::DuplicateRows,
            MetricValue::Count(duplicates as u64),
        );
        report.insert_table(
            TableMetric::DuplicatePercentage,
            MetricValue::Float(duplicate_ratio * 100.0),
        );

        // Deliberately simpler than the validator's banded quality score;
        // the two are distinct metrics and may disagree.
        let consistency = ((1.0 - missing_ratio - duplicate_ratio) * 100.0).clamp(0.0, 100.0);
        report.insert_table(
            TableMetric::DataConsistencyScore,
            MetricValue::Float(consistency),
        );
    }

    fn performance_kpis(table: &Table, report: &mut KpiReport) {
        let start = Instant::now();
        let summary = Self::describe(table);
        let elapsed = start.elapsed().as_secs_f64();
        // Consume the summary so the timing covers real work.
        debug_assert!(summary.len() <= table.column_count());

        report.insert_table(
            TableMetric::ProcessingTimeSeconds,
            MetricValue::Float(elapsed),
        );
        report.insert_table(
            TableMetric::MemoryEfficiencyMbPerRecord,
            MetricValue::Float(
                table.estimated_bytes() as f64 / 1024.0 / 1024.0 / table.row_count() as f64,
            ),
        );

        let cardinalities: Vec<f64> = table
            .columns()
            .iter()
            .map(|c| c.distinct_count() as f64)
            .collect();
        report.insert_table(
            TableMetric::AvgColumnCardinality,
            MetricValue::Float(descriptive::mean(&cardinalities)),
        );
        let threshold = table.row_count() as f64 * HIGH_CARDINALITY_RATIO;
        let high = table
            .columns()
            .iter()
            .filter(|c| c.distinct_count() as f64 > threshold)
            .count();
        report.insert_table(
            TableMetric::HighCardinalityColumns,
            MetricValue::Count(high as u64),
        );
    }

    /// Describe-style summary of every numeric column: count, mean, std,
    /// min, quartiles, max. Only its wall-clock cost is reported.
    fn describe(table: &Table) -> Vec<(String, [f64; 8])> {
        table
            .columns_of_type(ColumnType::Numerical)
            .iter()
            .filter_map(|column| {
                let mut values = column.numeric_values();
                if values.is_empty() {
                    return None;
                }
                values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
                Some((
                    column.name().to_string(),
                    [
                        values.len() as f64,
                        descriptive::mean(&values),
                        descriptive::population_std(&values),
                        values[0],
                        descriptive::percentile(&values, 25.0),
                        descriptive::median(&values),
                        descriptive::percentile(&values, 75.0),
                        *values.last().expect("non-empty"),
                    ],
                ))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{DataCleaner, DataLoader};

    const EPS: f64 = 1e-9;

    fn load(csv: &str) -> Table {
        let mut table = DataLoader::parse_bytes(csv.as_bytes()).unwrap();
        DataCleaner::new().clean(&mut table).unwrap();
        table
    }

    #[test]
    fn test_numeric_metrics_and_outlier_fence() {
        let table = load("v\n1\n2\n3\n4\n5\n100\n");
        let report = KpiCalculator::compute(&table);

        assert_eq!(
            report.column_metric("v", ColumnMetric::OutliersCount),
            Some(&MetricValue::Count(1))
        );
        let mean = report
            .column_metric("v", ColumnMetric::Mean)
            .and_then(|v| v.as_f64())
            .unwrap();
        assert!((mean - 115.0 / 6.0).abs() < EPS);
        let iqr = report
            .column_metric("v", ColumnMetric::Iqr)
            .and_then(|v| v.as_f64())
            .unwrap();
        assert!((iqr - 2.5).abs() < EPS);
    }

    #[test]
    fn test_degenerate_numeric_column_yields_nan_shape() {
        let table = load("v\n7\n7\n");
        // Duplicate row removal leaves a single value; shape stats are NaN,
        // never a panic.
        let report = KpiCalculator::compute(&table);
        let skew = report
            .column_metric("v", ColumnMetric::Skewness)
            .and_then(|v| v.as_f64())
            .unwrap();
        assert!(skew.is_nan());
    }

    #[test]
    fn test_categorical_metrics() {
        let table = load("c,k\nred,1\nred,2\nblue,3\ngreen,4\n");
        let report = KpiCalculator::compute(&table);

        assert_eq!(
            report.column_metric("c", ColumnMetric::Mode),
            Some(&MetricValue::Text("red".into()))
        );
        assert_eq!(
            report.column_metric("c", ColumnMetric::UniqueCount),
            Some(&MetricValue::Count(3))
        );
        let entropy = report
            .column_metric("c", ColumnMetric::Entropy)
            .and_then(|v| v.as_f64())
            .unwrap();
        assert!(entropy > 0.0 && entropy <= (3.0f64).log2() + EPS);
        let cardinality = report
            .column_metric("c", ColumnMetric::CardinalityRatio)
            .and_then(|v| v.as_f64())
            .unwrap();
        assert!((cardinality - 0.75).abs() < EPS);
    }

    #[test]
    fn test_temporal_metrics() {
        let table = load("event_date,k\n2023-01-01,1\n2023-01-03,2\n");
        let report = KpiCalculator::compute(&table);

        assert_eq!(
            report.column_metric("event_date", ColumnMetric::DateRangeDays),
            Some(&MetricValue::Count(2))
        );
        let gap = report
            .column_metric("event_date", ColumnMetric::AvgTimeGapHours)
            .and_then(|v| v.as_f64())
            .unwrap();
        assert!((gap - 48.0).abs() < EPS);
    }

    #[test]
    fn test_single_timestamp_omits_gap_metrics() {
        let table = load("event_date,k\n2023-01-01,1\n");
        let report = KpiCalculator::compute(&table);
        assert!(report
            .column_metric("event_date", ColumnMetric::AvgTimeGapHours)
            .is_none());
        assert!(report
            .column_metric("event_date", ColumnMetric::MaxTimeGapHours)
            .is_none());
    }

    #[test]
    fn test_consistency_score_formula() {
        // 1 missing cell out of 8, no duplicates.
        let table = load("a,b\n1,x\n2,y\n3,z\n4,\n");
        let report = KpiCalculator::compute(&table);
        let consistency = report
            .table_metric(TableMetric::DataConsistencyScore)
            .and_then(|v| v.as_f64())
            .unwrap();
        assert!((consistency - (1.0 - 1.0 / 8.0) * 100.0).abs() < EPS);
        assert!((0.0..=100.0).contains(&consistency));
    }

    #[test]
    fn test_flatten_uses_composite_keys() {
        let table = load("v,c\n1,x\n2,y\n");
        let flat = KpiCalculator::compute(&table).flatten();
        assert!(flat.contains_key("v_mean"));
        assert!(flat.contains_key("c_mode"));
        assert!(flat.contains_key("total_records"));
        assert_eq!(flat["total_records"], serde_json::json!(2));
    }

    #[test]
    fn test_high_cardinality_columns() {
        let table = load("id,c\n1,x\n2,x\n3,x\n4,x\n");
        let report = KpiCalculator::compute(&table);
        assert_eq!(
            report.table_metric(TableMetric::HighCardinalityColumns),
            Some(&MetricValue::Count(1))
        );
    }

    #[test]
    fn test_frequency_table_orders_by_count_then_first_seen() {
        let counts = frequency_table(
            ["b", "a", "a", "c", "b", "a"]
                .iter()
                .map(|s| s.to_string()),
        );
        assert_eq!(counts[0], ("a".to_string(), 3));
        assert_eq!(counts[1], ("b".to_string(), 2));
        assert_eq!(counts[2], ("c".to_string(), 1));
    }
}
