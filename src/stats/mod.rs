//! Statistics module - descriptive measures, KPI computation, correlation

pub mod descriptive;

mod correlation;
mod kpi;

pub use correlation::CorrelationMatrix;
pub use kpi::{ColumnMetric, KpiCalculator, KpiReport, MetricValue, TableMetric};
