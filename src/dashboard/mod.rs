//! Dashboard module - session orchestration

mod generator;

pub use generator::{
    ChartConfigError, ChartSuggestion, ColumnSummary, DashboardGenerator, DataSummary, LoadError,
    RenderedChart,
};
