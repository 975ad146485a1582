use crate::core::{AxisScale, CategoryValue, Viewport};
use crate::render::Renderer;

use super::multiple_cells::resolve_multiple_cells;
use super::{
    LayoutConstants, LayoutConfiguration, MultipleCell, ResolvedLayout, SmallMultiplesEngine,
    ViewModel, VisualSettings,
};

/// Result of a host-coordinate hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellHit {
    pub multiple_index: usize,
    pub category_index: usize,
}

impl<R: Renderer> SmallMultiplesEngine<R> {
    #[must_use]
    pub fn settings(&self) -> &VisualSettings {
        &self.settings
    }

    #[must_use]
    pub fn layout_constants(&self) -> &LayoutConstants {
        &self.constants
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn view_model(&self) -> Option<&ViewModel> {
        self.view_model.as_ref()
    }

    #[must_use]
    pub fn resolved_layout(&self) -> &ResolvedLayout {
        &self.resolved
    }

    #[must_use]
    pub fn layout(&self) -> &LayoutConfiguration {
        &self.resolved.layout
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn multiple_cells(&self) -> Vec<MultipleCell> {
        self.view_model
            .as_ref()
            .map(|view_model| {
                resolve_multiple_cells(
                    &view_model.multiples,
                    &self.resolved.layout,
                    &self.settings.zebra,
                )
            })
            .unwrap_or_default()
    }

    /// Category nearest to `x`, measured from the left edge of a cell's plot
    /// area. Pixels outside the plot area clamp to the edge categories.
    #[must_use]
    pub fn nearest_category(&self, x: f64) -> Option<&CategoryValue> {
        let view_model = self.view_model.as_ref()?;
        let scale: AxisScale = self.resolved.category_axis.scale?;
        scale.nearest_value(&view_model.category, x)
    }

    /// Maps a host pixel to the multiple under it and its nearest category.
    #[must_use]
    pub fn hit_test(&self, x: f64, y: f64) -> Option<CellHit> {
        let view_model = self.view_model.as_ref()?;
        let scale = self.resolved.category_axis.scale?;
        let layout = &self.resolved.layout;
        let outer = layout.multiple.outer;
        let border_offset = layout.multiple.border_offset;
        let (inner_x, _) = layout.multiple.inner_origin();
        let cell = self.multiple_cells().into_iter().find(|cell| {
            let left = cell.x + border_offset;
            let top = cell.y + border_offset;
            x >= left && x <= left + outer.width && y >= top && y <= top + outer.height
        })?;
        let category_index = scale.nearest_index(&view_model.category, x - cell.x - inner_x)?;
        Some(CellHit {
            multiple_index: cell.index,
            category_index,
        })
    }
}
