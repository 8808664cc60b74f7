//! Chart Specification Module
//! User-declared chart requests, validated against the current table at
//! creation time and stored by the dashboard in display order.

use crate::data::FilterSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
#[error("Invalid chart type: {0}")]
pub struct UnknownChartType(pub String);

/// Available chart types for data visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Pie,
    Bar,
    Line,
    Histogram,
    Scatter,
    Treemap,
    Funnel,
}

impl ChartType {
    pub const ALL: [ChartType; 7] = [
        ChartType::Pie,
        ChartType::Bar,
        ChartType::Line,
        ChartType::Histogram,
        ChartType::Scatter,
        ChartType::Treemap,
        ChartType::Funnel,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartType::Pie => "pie",
            ChartType::Bar => "bar",
            ChartType::Line => "line",
            ChartType::Histogram => "histogram",
            ChartType::Scatter => "scatter",
            ChartType::Treemap => "treemap",
            ChartType::Funnel => "funnel",
        }
    }

    /// Human-readable name for selection UIs.
    pub fn display_name(&self) -> &'static str {
        match self {
            ChartType::Pie => "Pie Chart",
            ChartType::Bar => "Bar Chart",
            ChartType::Line => "Line Chart",
            ChartType::Histogram => "Histogram",
            ChartType::Scatter => "Scatter Plot",
            ChartType::Treemap => "Treemap",
            ChartType::Funnel => "Funnel Chart",
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartType {
    type Err = UnknownChartType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pie" => Ok(ChartType::Pie),
            "bar" => Ok(ChartType::Bar),
            "line" => Ok(ChartType::Line),
            "histogram" => Ok(ChartType::Histogram),
            "scatter" => Ok(ChartType::Scatter),
            "treemap" => Ok(ChartType::Treemap),
            "funnel" => Ok(ChartType::Funnel),
            other => Err(UnknownChartType(other.to_string())),
        }
    }
}

/// One configured chart: a value object holding the source column, the
/// chart type, a title, the scatter secondary column when present, and the
/// filter state captured when the chart was added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub column: String,
    pub chart_type: ChartType,
    pub title: String,
    pub secondary_column: Option<String>,
    pub filters: FilterSet,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_type_round_trips_through_string() {
        for chart_type in ChartType::ALL {
            assert_eq!(chart_type.as_str().parse::<ChartType>(), Ok(chart_type));
        }
    }

    #[test]
    fn test_unknown_chart_type_rejected() {
        assert_eq!(
            "sunburst".parse::<ChartType>(),
            Err(UnknownChartType("sunburst".to_string()))
        );
    }
}
