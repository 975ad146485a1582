use serde::{Deserialize, Serialize};

use crate::core::MeasureSeries;

/// One grid cell of the chart: a facet with its per-measure series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmallMultiple {
    pub name: String,
    pub series: Vec<MeasureSeries>,
    /// `true` when any contained value is highlighted by cross-filtering.
    pub highlighted: bool,
}

/// Row and column of a cell, derived from its flattened index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridPosition {
    pub row: usize,
    pub column: usize,
}

/// Derives the grid position of the multiple at `index`.
///
/// Returns `None` for a grid without columns.
#[must_use]
pub fn grid_position(index: usize, columns: usize) -> Option<GridPosition> {
    if columns == 0 {
        return None;
    }
    Some(GridPosition {
        row: index / columns,
        column: index % columns,
    })
}
