//! Multi-pass layout resolution for one update cycle.
//!
//! Every step is a function from the previous [`ResolutionState`] to the
//! next one. The cycle always starts from [`ResolutionState::reset`], so no
//! scratch state survives between updates.

use smallvec::{SmallVec, smallvec};
use tracing::{debug, trace, warn};

use crate::core::{
    AxisScale, Category, CategoryFormatter, GridSize, GridSpec, LinearScale, Size, Statistics,
    TextMeasurer, ValueFormatter, Viewport, calculate_grid_size, evenly_spaced_ticks,
};
use crate::render::TextHAlign;

use super::axis_geometry_resolver::{
    TitleOrientation, resolve_category_tick_label_height, resolve_title_geometry,
    resolve_value_tick_count, resolve_value_tick_label_width, tailor_category_tick_labels,
};
use super::{
    Axis, AxisKind, AxisTextGeometry, AxisTick, GridLayout, GridTrack, HeadingGeometry,
    HeadingPosition, LayoutConfiguration, LayoutConstants, LegendFootprint, LegendPosition,
    MultipleLayout, ResolvedLayout, ValueAxisSettings, VisualSettings,
    effective_border_width, effective_category_labels_visible, effective_category_title_visible,
    effective_value_labels_visible, effective_value_title_visible,
    recommended_value_tick_count,
};

/// Upper bound on grid passes per cycle: the initial pass plus one
/// collapse-driven retry. A collapse discovered after the budget is spent is
/// accepted as final.
pub const MAX_LAYOUT_PASSES: u8 = 2;

/// Tick count used when rounding the value domain outwards.
const VALUE_DOMAIN_NICE_TICKS: usize = 10;

/// Sample used to size the heading band; covers ascenders and descenders.
const HEADING_SAMPLE_TEXT: &str = "Xg";

/// Everything one layout cycle reads. Borrowed for the cycle only.
#[derive(Debug, Clone, Copy)]
pub struct LayoutRequest<'a> {
    pub viewport: Viewport,
    pub settings: &'a VisualSettings,
    pub constants: &'a LayoutConstants,
    pub item_count: usize,
    pub category: &'a Category,
    pub value_domain: LinearScale,
    pub value_formatter: &'a dyn ValueFormatter,
    pub category_formatter: &'a CategoryFormatter,
    pub measurer: &'a dyn TextMeasurer,
    pub legend: Option<LegendFootprint>,
    pub value_title: &'a str,
    pub category_title: &'a str,
}

/// Scratch state threaded through the passes of one cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolutionState {
    pub visual_viewport: Viewport,
    /// Chart viewport before tick-label space is taken; every grid pass
    /// starts from here.
    pub base_chart_viewport: Viewport,
    pub chart_viewport: Viewport,
    pub title_origin: (f64, f64),
    pub x_origin: f64,
    pub y_origin: f64,
    pub grid: GridSize,
    pub multiple: MultipleLayout,
    pub value_axis: Axis,
    pub category_axis: Axis,
    pub value_labels_forced_collapsed: bool,
    pub category_labels_forced_collapsed: bool,
    pub passes: u8,
}

impl ResolutionState {
    #[must_use]
    pub fn reset(viewport: Viewport) -> Self {
        Self {
            visual_viewport: viewport,
            base_chart_viewport: viewport,
            chart_viewport: viewport,
            title_origin: (0.0, 0.0),
            x_origin: 0.0,
            y_origin: 0.0,
            grid: GridSize::default(),
            multiple: MultipleLayout::default(),
            value_axis: Axis::new(AxisKind::Value),
            category_axis: Axis::new(AxisKind::Category),
            value_labels_forced_collapsed: false,
            category_labels_forced_collapsed: false,
            passes: 0,
        }
    }

    fn can_retry(&self) -> bool {
        self.passes < MAX_LAYOUT_PASSES
    }
}

/// Value-axis domain: explicit bounds win over data statistics.
///
/// `Some(0.0)` is a real bound; only `None` falls back to the data. The
/// result is rounded outwards except where a bound was pinned explicitly.
#[must_use]
pub fn resolve_value_domain(statistics: &Statistics, settings: &ValueAxisSettings) -> LinearScale {
    let (mut start, mut end) = match (settings.start.or(statistics.min), settings.end.or(statistics.max)) {
        (Some(start), Some(end)) => (start, end),
        (Some(start), None) => (start, start + 1.0),
        (None, Some(end)) => (end - 1.0, end),
        (None, None) => (0.0, 1.0),
    };
    if start >= end {
        if settings.end.is_none() {
            end = start + start.abs().max(1.0);
        } else {
            start = end - end.abs().max(1.0);
        }
    }
    LinearScale::normalized(start, end).nice(
        VALUE_DOMAIN_NICE_TICKS,
        settings.start.is_some(),
        settings.end.is_some(),
    )
}

/// Runs one full layout cycle.
#[must_use]
pub fn resolve_layout(request: &LayoutRequest<'_>) -> ResolvedLayout {
    let state = ResolutionState::reset(request.viewport);
    let state = resolve_titles(state, request);
    let state = resolve_chart_viewport(state, request);
    let state = resolve_grid_pass(state, request);
    let state = resolve_value_axis(state, request);
    let state = resolve_category_axis(state, request);

    debug!(
        item_count = request.item_count,
        columns = state.grid.columns,
        rows = state.grid.rows,
        passes = state.passes,
        value_ticks = state.value_axis.tick_count,
        value_labels_collapsed = state.value_axis.tick_labels.collapsed,
        category_labels_collapsed = state.category_axis.tick_labels.collapsed,
        "resolved small-multiples layout"
    );
    finish(state)
}

/// Reserves space for both master titles out of the visual viewport.
#[must_use]
pub fn resolve_titles(mut state: ResolutionState, request: &LayoutRequest<'_>) -> ResolutionState {
    let settings = request.settings;
    let constants = request.constants;

    let value_title = resolve_title_geometry(
        request.measurer,
        request.value_title,
        &settings.value_axis.title_font.text_properties(),
        effective_value_title_visible(&settings.value_axis),
        constants.axis_title_padding_px,
        TitleOrientation::Vertical,
        state.visual_viewport.width,
        constants.minimum_viewport_width,
    );
    if value_title.is_visible() {
        state.visual_viewport = state.visual_viewport.shrink_width(value_title.size.width);
    }

    let category_title = resolve_title_geometry(
        request.measurer,
        request.category_title,
        &settings.category_axis.title_font.text_properties(),
        effective_category_title_visible(&settings.category_axis),
        constants.axis_title_padding_px,
        TitleOrientation::Horizontal,
        state.visual_viewport.height,
        constants.minimum_viewport_height,
    );
    if category_title.is_visible() {
        state.visual_viewport = state.visual_viewport.shrink_height(category_title.size.height);
    }

    trace!(
        value_title_collapsed = value_title.collapsed,
        category_title_collapsed = category_title.collapsed,
        width = state.visual_viewport.width,
        height = state.visual_viewport.height,
        "resolved axis titles"
    );
    state.value_axis.title = value_title;
    state.category_axis.title = category_title;
    state
}

/// Subtracts the legend footprint and fixes the chart origin.
#[must_use]
pub fn resolve_chart_viewport(
    mut state: ResolutionState,
    request: &LayoutRequest<'_>,
) -> ResolutionState {
    let mut chart = state.visual_viewport;
    let mut origin = (0.0, 0.0);
    if let Some(legend) = request.legend.filter(|_| request.settings.legend.show) {
        let width = if legend.width.is_finite() { legend.width.max(0.0) } else { 0.0 };
        let height = if legend.height.is_finite() { legend.height.max(0.0) } else { 0.0 };
        match request.settings.legend.position {
            LegendPosition::Top => {
                chart = chart.shrink_height(height);
                origin.1 = height;
            }
            LegendPosition::Bottom => chart = chart.shrink_height(height),
            LegendPosition::Left => {
                chart = chart.shrink_width(width);
                origin.0 = width;
            }
            LegendPosition::Right => chart = chart.shrink_width(width),
        }
    }
    state.title_origin = origin;
    state.x_origin = origin.0 + state.value_axis.title.size.width;
    state.y_origin = origin.1;
    state.base_chart_viewport = chart;
    state.chart_viewport = chart;
    state
}

/// One grid pass: tick-label space, grid size, cell geometry, and the
/// content-sized chart viewport.
#[must_use]
pub fn resolve_grid_pass(mut state: ResolutionState, request: &LayoutRequest<'_>) -> ResolutionState {
    let settings = request.settings;
    let constants = request.constants;
    let mut available = state.base_chart_viewport;

    let value_labels = if state.value_labels_forced_collapsed {
        AxisTextGeometry::collapsed(String::new())
    } else {
        let (low, high) = request.value_domain.domain();
        resolve_value_tick_label_width(
            request.measurer,
            &request.value_formatter.format(low),
            &request.value_formatter.format(high),
            &settings.value_axis.label_font.text_properties(),
            effective_value_labels_visible(&settings.value_axis),
            constants.axis_label_padding_px,
            available.width,
            constants.minimum_viewport_width,
        )
    };
    if value_labels.is_visible() {
        available = available.shrink_width(value_labels.size.width);
    }

    let category_labels = match request.category.extents() {
        Some((first, last)) if !state.category_labels_forced_collapsed => {
            resolve_category_tick_label_height(
                request.measurer,
                &request.category_formatter.format(first),
                &request.category_formatter.format(last),
                &settings.category_axis.label_font.text_properties(),
                effective_category_labels_visible(&settings.category_axis),
                constants.axis_label_padding_px,
                available.height,
                constants.minimum_viewport_height,
            )
        }
        _ => AxisTextGeometry::collapsed(String::new()),
    };
    if category_labels.is_visible() {
        available = available.shrink_height(category_labels.size.height);
    }

    let grid = calculate_grid_size(
        request.item_count,
        available.width,
        available.height,
        &grid_spec(settings, constants),
    );
    let multiple = resolve_multiple_layout(grid, value_labels.size.width, request);

    let required = grid.required_size();
    state.chart_viewport = Viewport::new(
        required.width + multiple.x_offset,
        required.height + category_labels.size.height,
    );
    state.grid = grid;
    state.multiple = multiple;
    state.value_axis.tick_labels = value_labels;
    state.category_axis.tick_labels = category_labels;
    state.passes = state.passes.saturating_add(1);

    trace!(
        pass = state.passes,
        columns = grid.columns,
        rows = grid.rows,
        cell_width = grid.cell_outer.width,
        cell_height = grid.cell_outer.height,
        "grid pass"
    );
    state
}

/// Scale, tick count and ticks of the master value axis. A tick count of
/// zero with label space still reserved triggers one collapse-driven retry.
#[must_use]
pub fn resolve_value_axis(mut state: ResolutionState, request: &LayoutRequest<'_>) -> ResolutionState {
    let settings = &request.settings.value_axis;
    let inner_height = state.multiple.inner.height;
    let scale = request.value_domain.with_range(inner_height, 0.0);
    let properties = settings.label_font.text_properties();

    let labels_visible = state.value_axis.tick_labels.is_visible();
    let text_height = request
        .measurer
        .measure(&state.value_axis.tick_labels.text, &properties)
        .height;
    let tick_count = if state.grid.columns == 0 {
        0
    } else {
        resolve_value_tick_count(
            recommended_value_tick_count(inner_height),
            text_height,
            inner_height,
        )
    };

    if tick_count == 0 && labels_visible {
        if state.can_retry() {
            trace!(inner_height, "value tick labels do not fit, collapsing");
            state.value_labels_forced_collapsed = true;
            let state = resolve_grid_pass(state, request);
            return resolve_value_axis(state, request);
        }
        warn!(inner_height, "value tick labels collapsed after the final pass");
        state = release_value_tick_labels(state);
    }

    let ticks = evenly_spaced_ticks(scale.domain(), tick_count)
        .into_iter()
        .map(|value| AxisTick {
            value,
            position: scale.map(value),
            label: if state.value_axis.tick_labels.is_visible() {
                request.value_formatter.format(value)
            } else {
                String::new()
            },
            anchor: TextHAlign::Right,
        })
        .collect();

    state.value_axis.scale = Some(AxisScale::Linear(scale));
    state.value_axis.tick_count = tick_count;
    state.value_axis.ticks = ticks;
    state
}

/// Scale and the two extreme ticks of the master category axis. When every
/// tailored label degrades to a placeholder the row is collapsed and, if the
/// pass budget allows, the grid and value axis are resolved again.
#[must_use]
pub fn resolve_category_axis(
    mut state: ResolutionState,
    request: &LayoutRequest<'_>,
) -> ResolutionState {
    let category = request.category;
    let inner_width = state.multiple.inner.width;
    let scale = AxisScale::for_category(category, inner_width);

    let indices: SmallVec<[usize; 2]> = match category.len() {
        0 => SmallVec::new(),
        1 => smallvec![0],
        len => smallvec![0, len - 1],
    };
    let raw_labels: Vec<String> = indices
        .iter()
        .filter_map(|index| category.get(*index))
        .map(|value| request.category_formatter.format(value))
        .collect();
    let (labels, informative) = tailor_category_tick_labels(
        request.measurer,
        &raw_labels,
        &request.settings.category_axis.label_font.text_properties(),
        inner_width,
    );

    if !informative && state.category_axis.tick_labels.is_visible() {
        if state.can_retry() {
            trace!(inner_width, "category tick labels degraded, collapsing");
            state.category_labels_forced_collapsed = true;
            let state = resolve_grid_pass(state, request);
            let state = resolve_value_axis(state, request);
            return resolve_category_axis(state, request);
        }
        warn!(inner_width, "category tick labels collapsed after the final pass");
        state = release_category_tick_labels(state);
    }

    let labels_visible = state.category_axis.tick_labels.is_visible();
    let last = indices.len().saturating_sub(1);
    let ticks = indices
        .iter()
        .zip(labels)
        .enumerate()
        .filter_map(|(slot, (index, label))| {
            let value = category.get(*index)?;
            let anchor = match (indices.len(), slot) {
                (1, _) => TextHAlign::Center,
                (_, 0) => TextHAlign::Left,
                (_, slot) if slot == last => TextHAlign::Right,
                _ => TextHAlign::Center,
            };
            Some(AxisTick {
                value: value.as_continuous().unwrap_or(*index as f64),
                position: scale.position(category, *index)?,
                label: if labels_visible { label } else { String::new() },
                anchor,
            })
        })
        .collect::<Vec<_>>();

    state.category_axis.scale = Some(scale);
    state.category_axis.tick_count = ticks.len();
    state.category_axis.ticks = ticks;
    state
}

/// Collapses the value tick-label band without another grid pass and hands
/// its width back to the chart viewport. Cell sizes stay as resolved.
fn release_value_tick_labels(mut state: ResolutionState) -> ResolutionState {
    let reserved = state.value_axis.tick_labels.size.width;
    state.value_axis.tick_labels = AxisTextGeometry::collapsed(String::new());
    state.multiple.x_offset = 0.0;
    state.chart_viewport = state.chart_viewport.shrink_width(reserved);
    state
}

/// Category counterpart of [`release_value_tick_labels`]: the label row's
/// height leaves the chart viewport.
fn release_category_tick_labels(mut state: ResolutionState) -> ResolutionState {
    let reserved = state.category_axis.tick_labels.size.height;
    state.category_axis.tick_labels = AxisTextGeometry::collapsed(String::new());
    state.chart_viewport = state.chart_viewport.shrink_height(reserved);
    state
}

fn grid_spec(settings: &VisualSettings, constants: &LayoutConstants) -> GridSpec {
    let layout = &settings.layout;
    GridSpec {
        column_mode: layout.column_mode,
        row_mode: layout.row_mode,
        column_count: layout.number_of_columns.map(|columns| columns as usize),
        column_cap: constants.column_cap,
        multiple_width: layout.multiple_width,
        multiple_height: layout.multiple_height,
        column_spacing: layout.spacing_between_columns,
        row_spacing: layout.spacing_between_rows,
        border_width: effective_border_width(&settings.border),
        minimum_cell_size: constants.minimum_cell_size,
    }
}

fn resolve_multiple_layout(
    grid: GridSize,
    x_offset: f64,
    request: &LayoutRequest<'_>,
) -> MultipleLayout {
    if grid.columns == 0 {
        return MultipleLayout::default();
    }
    let settings = request.settings;
    let margin = request.constants.multiple_margin;
    let outer = grid.cell_outer;
    let border_offset = effective_border_width(&settings.border) / 2.0;
    let content_height = (outer.height - margin.vertical()).max(0.0);

    let heading = if settings.heading.show {
        let height = request
            .measurer
            .measure(HEADING_SAMPLE_TEXT, &settings.heading.font.text_properties())
            .height
            + request.constants.heading_padding_px;
        // A heading that would eat the whole plot area collapses.
        (height < content_height).then(|| HeadingGeometry {
            position: settings.heading.position,
            y: match settings.heading.position {
                HeadingPosition::Top => border_offset,
                HeadingPosition::Bottom => border_offset + outer.height - height,
            },
            width: outer.width,
            height,
        })
    } else {
        None
    };
    let heading_height = heading.map_or(0.0, |heading| heading.height);

    MultipleLayout {
        outer,
        inner: Size::new(
            (outer.width - margin.horizontal()).max(0.0),
            (content_height - heading_height).max(0.0),
        ),
        margin,
        heading,
        x_offset,
        border_offset,
    }
}

fn finish(state: ResolutionState) -> ResolvedLayout {
    let grid = state.grid;
    let required = grid.required_size();
    ResolvedLayout {
        layout: LayoutConfiguration {
            visual_viewport: state.visual_viewport,
            chart_viewport: state.chart_viewport,
            grid: GridLayout {
                rows: GridTrack {
                    count: grid.rows,
                    width: required.width,
                    height: grid.row_height,
                },
                columns: GridTrack {
                    count: grid.columns,
                    width: grid.column_width,
                    height: required.height,
                },
            },
            multiple: state.multiple,
            x_origin: state.x_origin,
            y_origin: state.y_origin,
            title_origin: state.title_origin,
            passes: state.passes,
        },
        value_axis: state.value_axis,
        category_axis: state.category_axis,
    }
}
