use serde::{Deserialize, Serialize};

use crate::core::{GridPosition, Margin, Size, Viewport, grid_position};

use super::{Axis, HeadingPosition};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GridTrack {
    pub count: usize,
    pub width: f64,
    pub height: f64,
}

/// `rows.height` is the row pitch and `rows.width` the full grid width;
/// `columns.width` is the column pitch and `columns.height` the full grid
/// height.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GridLayout {
    pub rows: GridTrack,
    pub columns: GridTrack,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeadingGeometry {
    pub position: HeadingPosition,
    /// Offset of the heading band from the cell's outer top.
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Geometry shared by every small multiple.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MultipleLayout {
    pub outer: Size,
    pub inner: Size,
    pub margin: Margin,
    pub heading: Option<HeadingGeometry>,
    /// Horizontal space reserved left of the grid for value-axis tick labels.
    pub x_offset: f64,
    /// Half the border stroke, so strokes are not clipped.
    pub border_offset: f64,
}

impl MultipleLayout {
    /// Offset of the plot area from the cell's outer top-left corner.
    #[must_use]
    pub fn inner_origin(&self) -> (f64, f64) {
        let heading_above = self
            .heading
            .filter(|heading| heading.position == HeadingPosition::Top)
            .map_or(0.0, |heading| heading.height);
        (
            self.border_offset + self.margin.left,
            self.border_offset + self.margin.top + heading_above,
        )
    }
}

/// Output of one layout cycle, consumed read-only by rendering.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutConfiguration {
    /// Host viewport after axis titles.
    pub visual_viewport: Viewport,
    /// Space used by the grid and its tick labels.
    pub chart_viewport: Viewport,
    pub grid: GridLayout,
    pub multiple: MultipleLayout,
    /// Left edge of the chart viewport in host coordinates.
    pub x_origin: f64,
    /// Top edge of the chart viewport in host coordinates.
    pub y_origin: f64,
    /// Top-left corner of the legend-free area; titles are placed from here.
    pub title_origin: (f64, f64),
    /// Number of grid passes the cycle needed.
    pub passes: u8,
}

impl LayoutConfiguration {
    #[must_use]
    pub fn grid_position(&self, index: usize) -> Option<GridPosition> {
        grid_position(index, self.grid.columns.count)
    }

    /// Outer top-left corner of the cell at `index` in host coordinates.
    #[must_use]
    pub fn cell_origin(&self, index: usize) -> Option<(f64, f64)> {
        let position = self.grid_position(index)?;
        Some((
            self.x_origin + self.multiple.x_offset + position.column as f64 * self.grid.columns.width,
            self.y_origin + position.row as f64 * self.grid.rows.height,
        ))
    }

    /// Top edge of the category tick-label row.
    #[must_use]
    pub fn grid_bottom(&self) -> f64 {
        self.y_origin + self.grid.columns.height
    }
}

/// Space the host legend occupies inside the host viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LegendFootprint {
    pub width: f64,
    pub height: f64,
}

/// Layout plus both master axes for one cycle.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResolvedLayout {
    pub layout: LayoutConfiguration,
    pub value_axis: Axis,
    pub category_axis: Axis,
}
