use serde::{Deserialize, Serialize};

use crate::core::{ColumnMode, DisplayUnits, LineStyle, RowMode, TextProperties};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, LineStrokeStyle, TextHAlign};

use super::validation::validate_settings;

/// Font used by one piece of chart text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSettings {
    pub font_family: String,
    pub font_size_px: f64,
    pub color: Color,
}

impl Default for FontSettings {
    fn default() -> Self {
        Self {
            font_family: "Segoe UI".to_owned(),
            font_size_px: 11.0,
            color: Color::rgb(0.4, 0.4, 0.4),
        }
    }
}

impl FontSettings {
    #[must_use]
    pub fn text_properties(&self) -> TextProperties {
        TextProperties::new(self.font_family.clone(), self.font_size_px)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    pub column_mode: ColumnMode,
    pub row_mode: RowMode,
    /// Explicit column count for [`ColumnMode::ColumnCount`].
    pub number_of_columns: Option<u32>,
    pub multiple_width: f64,
    pub multiple_height: f64,
    pub spacing_between_columns: f64,
    pub spacing_between_rows: f64,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            column_mode: ColumnMode::ColumnCount,
            row_mode: RowMode::FitToViewport,
            number_of_columns: None,
            multiple_width: 200.0,
            multiple_height: 150.0,
            spacing_between_columns: 10.0,
            spacing_between_rows: 10.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum HeadingPosition {
    #[default]
    Top,
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadingSettings {
    pub show: bool,
    pub font: FontSettings,
    pub position: HeadingPosition,
    pub alignment: TextHAlign,
}

impl Default for HeadingSettings {
    fn default() -> Self {
        Self {
            show: true,
            font: FontSettings {
                font_size_px: 12.0,
                color: Color::rgb(0.25, 0.25, 0.25),
                ..FontSettings::default()
            },
            position: HeadingPosition::Top,
            alignment: TextHAlign::Left,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridlineSettings {
    pub show: bool,
    pub color: Color,
    pub stroke_width: f64,
    pub stroke_style: LineStrokeStyle,
}

impl Default for GridlineSettings {
    fn default() -> Self {
        Self {
            show: true,
            color: Color::rgb(0.85, 0.85, 0.85),
            stroke_width: 1.0,
            stroke_style: LineStrokeStyle::Dashed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueAxisSettings {
    pub show: bool,
    pub show_labels: bool,
    pub label_font: FontSettings,
    pub show_title: bool,
    pub title_font: FontSettings,
    /// Title override; defaults to the plotted measure names.
    pub title_text: Option<String>,
    pub gridlines: GridlineSettings,
    /// Explicit lower bound. `Some(0.0)` is a real bound, `None` uses data.
    pub start: Option<f64>,
    /// Explicit upper bound. `None` uses data.
    pub end: Option<f64>,
    pub display_units: DisplayUnits,
    pub precision: Option<u8>,
}

impl Default for ValueAxisSettings {
    fn default() -> Self {
        Self {
            show: true,
            show_labels: true,
            label_font: FontSettings::default(),
            show_title: false,
            title_font: FontSettings {
                font_size_px: 12.0,
                ..FontSettings::default()
            },
            title_text: None,
            gridlines: GridlineSettings::default(),
            start: None,
            end: None,
            display_units: DisplayUnits::Auto,
            precision: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryAxisSettings {
    pub show: bool,
    pub show_labels: bool,
    pub label_font: FontSettings,
    pub show_title: bool,
    pub title_font: FontSettings,
    /// Title override; defaults to the category column name.
    pub title_text: Option<String>,
    pub gridlines: GridlineSettings,
    /// strftime pattern for date categories.
    pub date_pattern: String,
}

impl Default for CategoryAxisSettings {
    fn default() -> Self {
        Self {
            show: true,
            show_labels: true,
            label_font: FontSettings::default(),
            show_title: false,
            title_font: FontSettings {
                font_size_px: 12.0,
                ..FontSettings::default()
            },
            title_text: None,
            gridlines: GridlineSettings {
                show: false,
                ..GridlineSettings::default()
            },
            date_pattern: crate::core::format::DEFAULT_DATE_PATTERN.to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderSettings {
    pub show: bool,
    pub stroke_width: f64,
    pub color: Color,
}

impl Default for BorderSettings {
    fn default() -> Self {
        Self {
            show: false,
            stroke_width: 1.0,
            color: Color::rgb(0.8, 0.8, 0.8),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ZebraStripeMode {
    #[default]
    None,
    Row,
    Column,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZebraSettings {
    pub mode: ZebraStripeMode,
    pub background_color: Color,
    pub alternate_color: Color,
}

impl Default for ZebraSettings {
    fn default() -> Self {
        Self {
            mode: ZebraStripeMode::None,
            background_color: Color::WHITE,
            alternate_color: Color::rgb(0.96, 0.96, 0.96),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LegendPosition {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendSettings {
    pub show: bool,
    pub position: LegendPosition,
}

impl Default for LegendSettings {
    fn default() -> Self {
        Self {
            show: true,
            position: LegendPosition::Top,
        }
    }
}

/// Default line styling; measures without their own style take the palette
/// colour at their plotted index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineSettings {
    pub stroke_width: f64,
    pub stroke_style: LineStrokeStyle,
    pub show_area: bool,
    pub area_opacity: f64,
    pub palette: Vec<Color>,
}

impl Default for LineSettings {
    fn default() -> Self {
        Self {
            stroke_width: 2.0,
            stroke_style: LineStrokeStyle::Solid,
            show_area: false,
            area_opacity: 0.4,
            palette: vec![
                Color::rgb(0.004, 0.722, 0.667),
                Color::rgb(0.216, 0.275, 0.282),
                Color::rgb(0.992, 0.392, 0.361),
                Color::rgb(0.949, 0.784, 0.067),
                Color::rgb(0.373, 0.420, 0.427),
                Color::rgb(0.541, 0.831, 0.922),
            ],
        }
    }
}

impl LineSettings {
    #[must_use]
    pub fn style_for(&self, plotted_index: usize) -> LineStyle {
        let color = if self.palette.is_empty() {
            LineStyle::default().color
        } else {
            self.palette[plotted_index % self.palette.len()]
        };
        LineStyle {
            color,
            stroke_width: self.stroke_width,
            stroke_style: self.stroke_style,
            show_area: self.show_area,
            area_opacity: self.area_opacity,
        }
    }
}

/// All user configuration for the visual.
///
/// Every field has a default so partial JSON documents load.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VisualSettings {
    #[serde(default)]
    pub layout: LayoutSettings,
    #[serde(default)]
    pub heading: HeadingSettings,
    #[serde(default)]
    pub value_axis: ValueAxisSettings,
    #[serde(default)]
    pub category_axis: CategoryAxisSettings,
    #[serde(default)]
    pub border: BorderSettings,
    #[serde(default)]
    pub zebra: ZebraSettings,
    #[serde(default)]
    pub legend: LegendSettings,
    #[serde(default)]
    pub lines: LineSettings,
}

impl VisualSettings {
    /// Parses and validates settings from JSON.
    pub fn from_json(json: &str) -> ChartResult<Self> {
        let settings: Self = serde_json::from_str(json)
            .map_err(|err| ChartError::Serialization(format!("settings: {err}")))?;
        validate_settings(&settings)?;
        Ok(settings)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|err| ChartError::Serialization(format!("settings: {err}")))
    }
}

#[must_use]
pub fn effective_value_labels_visible(settings: &ValueAxisSettings) -> bool {
    settings.show && settings.show_labels
}

#[must_use]
pub fn effective_value_title_visible(settings: &ValueAxisSettings) -> bool {
    settings.show && settings.show_title
}

#[must_use]
pub fn effective_category_labels_visible(settings: &CategoryAxisSettings) -> bool {
    settings.show && settings.show_labels
}

#[must_use]
pub fn effective_category_title_visible(settings: &CategoryAxisSettings) -> bool {
    settings.show && settings.show_title
}

/// Border stroke reserved per cell, zero when borders are off.
#[must_use]
pub fn effective_border_width(settings: &BorderSettings) -> f64 {
    if settings.show {
        settings.stroke_width
    } else {
        0.0
    }
}
