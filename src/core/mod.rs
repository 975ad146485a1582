pub mod axis_scale;
pub mod category;
pub mod format;
pub mod grid;
pub mod line_series;
pub mod measure;
pub mod point_scale;
pub mod primitives;
pub mod scale;
pub mod small_multiple;
pub mod statistics;
pub mod text;
pub mod time_scale;
pub mod types;

pub use axis_scale::AxisScale;
pub use category::{Category, CategoryKind, CategoryValue};
pub use format::{CategoryFormatter, DateFormat, DisplayUnits, NumberFormat, ValueFormatter};
pub use grid::{ColumnMode, GridSize, GridSpec, RowMode, calculate_grid_size};
pub use line_series::{LinePath, PathPoint, project_area_polygons, project_line_paths};
pub use measure::{LineStyle, Measure, MeasureRole, MeasureSeries, MeasureValue, TooltipEntry};
pub use point_scale::PointScale;
pub use scale::{LinearScale, evenly_spaced_ticks};
pub use small_multiple::{GridPosition, SmallMultiple, grid_position};
pub use statistics::{SeriesEndpoints, Statistics};
pub use text::{HeuristicTextMeasurer, TextMeasurer, TextProperties, is_placeholder};
pub use time_scale::TimeScale;
pub use types::{Margin, Size, Viewport};
