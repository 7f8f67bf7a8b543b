// File: crates/trend-core/src/lib.rs
// Summary: Core library entry point; exports public API for chart construction and interaction.

pub mod chart;
pub mod series;
pub mod layout;
pub mod render;
pub mod surface;
pub mod hit;
pub mod theme;
pub mod format;
pub mod types;

pub use chart::{ChartConfig, ChartController};
pub use series::{ActiveRanges, Dataset, RangeKey, SeriesDefinition};
pub use layout::{compute_points, Geometry, PlotLayout, PlottedPoint};
pub use render::render;
pub use surface::{FixedHost, Surface, SurfaceError, SurfaceHost};
pub use hit::{nearest_point, Tooltip};
pub use theme::Theme;
pub use format::ValueFormatter;
pub use types::Insets;
