use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{MultipleCell, ResolvedLayout, SmallMultiplesEngine};

/// Serializable deterministic layout snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub viewport: Viewport,
    pub resolved: ResolvedLayout,
    pub cells: Vec<MultipleCell>,
}

impl<R: Renderer> SmallMultiplesEngine<R> {
    #[must_use]
    pub fn layout_snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot {
            viewport: self.viewport,
            resolved: self.resolved.clone(),
            cells: self.multiple_cells(),
        }
    }

    /// Pretty JSON of [`Self::layout_snapshot`]. Identical inputs produce
    /// byte-identical output.
    pub fn layout_snapshot_json(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.layout_snapshot())
            .map_err(|err| ChartError::Serialization(format!("layout snapshot: {err}")))
    }
}
