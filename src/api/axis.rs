use serde::{Deserialize, Serialize};

use crate::core::{AxisScale, Size};
use crate::render::TextHAlign;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AxisKind {
    #[default]
    Value,
    Category,
}

/// Resolved box of one piece of axis text (title or tick-label band).
///
/// A collapsed box has zero size and reserves no space.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisTextGeometry {
    pub text: String,
    pub size: Size,
    pub collapsed: bool,
}

impl AxisTextGeometry {
    #[must_use]
    pub fn collapsed(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            size: Size::ZERO,
            collapsed: true,
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        !self.collapsed
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    /// Domain coordinate: the value, a millisecond timestamp, or the point index.
    pub value: f64,
    /// Pixel offset inside a cell's plot area.
    pub position: f64,
    /// Display text; empty when tick labels are collapsed.
    pub label: String,
    pub anchor: TextHAlign,
}

/// Per-axis scratch state, rebuilt at the start of every cycle.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Axis {
    pub kind: AxisKind,
    pub scale: Option<AxisScale>,
    pub tick_count: usize,
    pub ticks: Vec<AxisTick>,
    pub title: AxisTextGeometry,
    pub tick_labels: AxisTextGeometry,
}

impl Axis {
    #[must_use]
    pub fn new(kind: AxisKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }
}
