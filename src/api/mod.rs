//! Host-facing layer: settings, data ingestion, layout resolution and the
//! engine facade that turns them into render frames.

mod axis;
mod axis_geometry_resolver;
mod axis_render_frame_builder;
mod engine;
mod engine_accessors;
mod engine_init;
mod engine_snapshot;
mod layout;
mod layout_constants;
mod layout_controller;
mod line_series_render_frame_builder;
mod multiple_cells;
mod render_frame_builder;
mod settings;
mod validation;
mod view_model;

pub use axis::{Axis, AxisKind, AxisTextGeometry, AxisTick};
pub use axis_geometry_resolver::{
    TitleOrientation, fits, resolve_category_tick_label_height, resolve_title_geometry,
    resolve_value_tick_count, resolve_value_tick_label_width, tailor_category_tick_labels,
};
pub use engine::SmallMultiplesEngine;
pub use engine_accessors::CellHit;
pub use engine_snapshot::LayoutSnapshot;
pub use layout::{
    GridLayout, GridTrack, HeadingGeometry, LayoutConfiguration, LegendFootprint, MultipleLayout,
    ResolvedLayout,
};
pub use layout_constants::{LayoutConstants, recommended_value_tick_count};
pub use layout_controller::{
    LayoutRequest, MAX_LAYOUT_PASSES, ResolutionState, resolve_category_axis,
    resolve_chart_viewport, resolve_grid_pass, resolve_layout, resolve_titles,
    resolve_value_axis, resolve_value_domain,
};
pub use multiple_cells::{MultipleCell, resolve_multiple_cells, zebra_background};
pub use settings::{
    BorderSettings, CategoryAxisSettings, FontSettings, GridlineSettings, HeadingPosition,
    HeadingSettings, LayoutSettings, LegendPosition, LegendSettings, LineSettings,
    ValueAxisSettings, VisualSettings, ZebraSettings, ZebraStripeMode,
    effective_border_width, effective_category_labels_visible, effective_category_title_visible,
    effective_value_labels_visible, effective_value_title_visible,
};
pub use validation::{
    BORDER_WIDTH_RANGE_PX, MAX_PRECISION, MULTIPLE_SIZE_RANGE_PX, NUMBER_OF_COLUMNS_RANGE,
    SPACING_RANGE_PX,
};
pub use view_model::{
    CategoryColumn, DataRow, DataSet, MeasureColumn, ViewModel, build_view_model,
};
