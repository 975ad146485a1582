use serde::{Deserialize, Serialize};

use crate::core::Margin;

/// Fixed layout parameters that are not user settings.
///
/// Passed into the engine at construction; there is no process-wide copy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConstants {
    /// Cells never shrink below this outer size.
    pub minimum_cell_size: f64,
    /// Column count used when the user has not set one.
    pub column_cap: usize,
    /// Width that must remain after reserving horizontal axis text.
    pub minimum_viewport_width: f64,
    /// Height that must remain after reserving vertical axis text.
    pub minimum_viewport_height: f64,
    pub axis_label_padding_px: f64,
    pub axis_title_padding_px: f64,
    pub heading_padding_px: f64,
    /// Padding between a cell's outer box and its plot area.
    pub multiple_margin: Margin,
}

impl Default for LayoutConstants {
    fn default() -> Self {
        Self {
            minimum_cell_size: 40.0,
            column_cap: 75,
            minimum_viewport_width: 80.0,
            minimum_viewport_height: 60.0,
            axis_label_padding_px: 4.0,
            axis_title_padding_px: 4.0,
            heading_padding_px: 4.0,
            multiple_margin: Margin::uniform(4.0),
        }
    }
}

/// Host-style recommended value-axis tick count for a plot height.
#[must_use]
pub fn recommended_value_tick_count(available_height: f64) -> usize {
    if !available_height.is_finite() || available_height <= 0.0 {
        0
    } else if available_height > 300.0 {
        6
    } else if available_height > 150.0 {
        4
    } else if available_height > 60.0 {
        3
    } else {
        2
    }
}
