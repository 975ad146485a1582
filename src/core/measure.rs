use serde::{Deserialize, Serialize};

use crate::core::{CategoryValue, NumberFormat};
use crate::render::{Color, LineStrokeStyle};

/// Whether a measure is drawn or only feeds tooltips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MeasureRole {
    #[default]
    DataPoint,
    Tooltip,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub color: Color,
    pub stroke_width: f64,
    pub stroke_style: LineStrokeStyle,
    pub show_area: bool,
    pub area_opacity: f64,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: Color::rgb(0.004, 0.722, 0.667),
            stroke_width: 2.0,
            stroke_style: LineStrokeStyle::Solid,
            show_area: false,
            area_opacity: 0.4,
        }
    }
}

/// One numeric column of the data set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measure {
    pub name: String,
    pub role: MeasureRole,
    pub format: NumberFormat,
    pub style: LineStyle,
}

impl Measure {
    #[must_use]
    pub fn new(name: impl Into<String>, role: MeasureRole) -> Self {
        Self {
            name: name.into(),
            role,
            format: NumberFormat::default(),
            style: LineStyle::default(),
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: NumberFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn is_plotted(&self) -> bool {
        self.role == MeasureRole::DataPoint
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipEntry {
    pub display_name: String,
    pub value: Option<f64>,
}

/// One (category, value) pair of a measure inside one small multiple.
///
/// `value == None` means "no data": the line breaks at this point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasureValue {
    pub category: CategoryValue,
    pub category_index: usize,
    pub value: Option<f64>,
    pub role: MeasureRole,
    pub highlighted: bool,
    pub selection_id: Option<String>,
    pub tooltip: Vec<TooltipEntry>,
}

/// All values of one measure inside one small multiple, in data order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasureSeries {
    pub measure_index: usize,
    pub values: Vec<MeasureValue>,
}

impl MeasureSeries {
    /// First and last non-null values.
    #[must_use]
    pub fn endpoints(&self) -> Option<(&MeasureValue, &MeasureValue)> {
        let first = self.values.iter().find(|value| value.value.is_some())?;
        let last = self.values.iter().rev().find(|value| value.value.is_some())?;
        Some((first, last))
    }
}
