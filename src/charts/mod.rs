//! Charts module - figure adapters, interactive plotting and PNG export

pub mod figure;
pub mod geo;
mod plotter;
mod renderer;

pub use figure::{BarFigure, ChoroplethFigure, GeoBubbleFigure};
pub use plotter::ChartPlotter;
pub use renderer::{RenderError, StaticChartRenderer};
