//! Charts module - Chart configuration, surfaces and rendering

mod config;
mod configurator;
mod plotter;
mod renderer;
mod surface;

pub use config::{
    AxisSpec, ChartConfig, ChartKind, FieldKey, RendererConfig, CHART_TITLE, X_AXIS_TITLE,
    YEAR_MAX, YEAR_MIN, Y_AXIS_TITLE,
};
pub use configurator::{ChartConfigurator, ConfigureError};
pub use plotter::ChartPlotter;
pub use renderer::{RenderError, StaticChartRenderer};
pub use surface::{PresentError, Surface, SurfaceHost, SurfaceKind, SurfaceSpec};
