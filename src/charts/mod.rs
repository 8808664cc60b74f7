//! Charts module - chart specifications and series building

mod builder;
mod spec;

pub use builder::{ChartBuilder, ChartError, RenderableSeries};
pub use spec::{ChartSpec, ChartType, UnknownChartType};
