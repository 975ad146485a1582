use serde::{Deserialize, Serialize};

use crate::core::{GridPosition, SmallMultiple};
use crate::render::Color;

use super::{LayoutConfiguration, ZebraSettings, ZebraStripeMode};

/// Placement of one small multiple in host coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultipleCell {
    pub index: usize,
    pub name: String,
    pub row: usize,
    pub column: usize,
    /// Outer top-left corner.
    pub x: f64,
    pub y: f64,
    pub background: Color,
    pub highlighted: bool,
}

#[must_use]
pub fn zebra_background(settings: &ZebraSettings, position: GridPosition) -> Color {
    let alternate = match settings.mode {
        ZebraStripeMode::None => false,
        ZebraStripeMode::Row => position.row % 2 == 1,
        ZebraStripeMode::Column => position.column % 2 == 1,
    };
    if alternate {
        settings.alternate_color
    } else {
        settings.background_color
    }
}

/// Places every multiple on the resolved grid. Empty when the grid has no
/// columns.
#[must_use]
pub fn resolve_multiple_cells(
    multiples: &[SmallMultiple],
    layout: &LayoutConfiguration,
    zebra: &ZebraSettings,
) -> Vec<MultipleCell> {
    multiples
        .iter()
        .enumerate()
        .filter_map(|(index, multiple)| {
            let position = layout.grid_position(index)?;
            let (x, y) = layout.cell_origin(index)?;
            Some(MultipleCell {
                index,
                name: multiple.name.clone(),
                row: position.row,
                column: position.column,
                x,
                y,
                background: zebra_background(zebra, position),
                highlighted: multiple.highlighted,
            })
        })
        .collect()
}
