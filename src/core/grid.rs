//! Grid sizing: turns an item count and available space into rows, columns
//! and cell sizes.
//!
//! Spacing only applies between cells, so a single row or column never pays
//! for it. Border stroke width is reserved per cell before space is divided.

use serde::{Deserialize, Serialize};

use crate::core::Size;

/// How the number of columns is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ColumnMode {
    /// Column count from configuration (or the data-reduction cap), cell
    /// width derived from available width.
    #[default]
    ColumnCount,
    /// Cell width from configuration, column count derived from available
    /// width.
    Flow,
}

/// How row height is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RowMode {
    /// Rows share the available height.
    #[default]
    FitToViewport,
    /// Cell height from configuration.
    FixedHeight,
}

/// Inputs of a grid sizing pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    pub column_mode: ColumnMode,
    pub row_mode: RowMode,
    /// Explicit column count; `None` falls back to `column_cap`.
    pub column_count: Option<usize>,
    pub column_cap: usize,
    pub multiple_width: f64,
    pub multiple_height: f64,
    pub column_spacing: f64,
    pub row_spacing: f64,
    /// Border stroke width reserved per cell; zero when borders are off.
    pub border_width: f64,
    pub minimum_cell_size: f64,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            column_mode: ColumnMode::default(),
            row_mode: RowMode::default(),
            column_count: None,
            column_cap: 75,
            multiple_width: 200.0,
            multiple_height: 150.0,
            column_spacing: 10.0,
            row_spacing: 10.0,
            border_width: 0.0,
            minimum_cell_size: 40.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GridSize {
    pub columns: usize,
    pub rows: usize,
    /// Horizontal pitch of one column: cell + spacing + border.
    pub column_width: f64,
    /// Vertical pitch of one row: cell + spacing + border.
    pub row_height: f64,
    pub cell_outer: Size,
}

impl GridSize {
    /// Space the grid occupies when laid out at its pitch.
    #[must_use]
    pub fn required_size(self) -> Size {
        Size::new(
            self.columns as f64 * self.column_width,
            self.rows as f64 * self.row_height,
        )
    }
}

/// Number of columns for `item_count` items. Zero only when there are no items.
#[must_use]
pub fn resolve_column_count(item_count: usize, available_width: f64, spec: &GridSpec) -> usize {
    if item_count == 0 {
        return 0;
    }
    let columns = match spec.column_mode {
        ColumnMode::Flow => {
            let pitch = spec.multiple_width + spec.column_spacing + spec.border_width;
            let fitting = if pitch > 0.0 && available_width.is_finite() {
                (available_width.max(0.0) / pitch).floor() as usize
            } else {
                1
            };
            fitting.max(1)
        }
        ColumnMode::ColumnCount => spec.column_count.unwrap_or(spec.column_cap).max(1),
    };
    columns.min(item_count)
}

#[must_use]
pub fn resolve_row_count(item_count: usize, columns: usize) -> usize {
    if columns == 0 {
        return 0;
    }
    item_count.div_ceil(columns)
}

/// Computes grid dimensions and cell sizes for the available space.
#[must_use]
pub fn calculate_grid_size(
    item_count: usize,
    available_width: f64,
    available_height: f64,
    spec: &GridSpec,
) -> GridSize {
    let columns = resolve_column_count(item_count, available_width, spec);
    let rows = resolve_row_count(item_count, columns);
    if columns == 0 || rows == 0 {
        return GridSize::default();
    }

    let column_spacing = if columns > 1 { spec.column_spacing } else { 0.0 };
    let row_spacing = if rows > 1 { spec.row_spacing } else { 0.0 };

    let (column_width, cell_width) = match spec.column_mode {
        ColumnMode::Flow => {
            let cell_width = spec.multiple_width.max(spec.minimum_cell_size);
            (cell_width + column_spacing + spec.border_width, cell_width)
        }
        ColumnMode::ColumnCount => {
            let column_width = available_width.max(0.0) / columns as f64;
            let cell_width =
                (column_width - column_spacing - spec.border_width).max(spec.minimum_cell_size);
            (
                column_width.max(cell_width + column_spacing + spec.border_width),
                cell_width,
            )
        }
    };

    let (row_height, cell_height) = match spec.row_mode {
        RowMode::FixedHeight => {
            let cell_height = spec.multiple_height.max(spec.minimum_cell_size);
            (cell_height + row_spacing + spec.border_width, cell_height)
        }
        RowMode::FitToViewport => {
            let row_height = (available_height.max(0.0) / rows as f64 - spec.border_width)
                .max(spec.minimum_cell_size);
            let cell_height = (row_height - row_spacing).max(spec.minimum_cell_size);
            (
                row_height.max(cell_height + row_spacing),
                cell_height,
            )
        }
    };

    GridSize {
        columns,
        rows,
        column_width,
        row_height,
        cell_outer: Size::new(cell_width, cell_height),
    }
}
