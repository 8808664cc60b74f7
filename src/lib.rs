//! Dashgen - CSV Data Profiling & Dashboard KPI Engine
//!
//! Loads a tabular dataset, infers column types, scores data quality, and
//! computes the statistical summaries that drive dashboard KPIs and chart
//! configuration. Chart rendering is delegated to an external surface that
//! consumes the series and metric maps produced here.

pub mod charts;
pub mod config;
pub mod dashboard;
pub mod data;
pub mod quality;
pub mod stats;

pub use dashboard::DashboardGenerator;
