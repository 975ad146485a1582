use crate::core::format::DateFormat;
use crate::error::{ChartError, ChartResult};

use super::{FontSettings, GridlineSettings, LayoutConstants, VisualSettings};

pub const SPACING_RANGE_PX: (f64, f64) = (0.0, 50.0);
pub const BORDER_WIDTH_RANGE_PX: (f64, f64) = (1.0, 5.0);
pub const NUMBER_OF_COLUMNS_RANGE: (u32, u32) = (1, 75);
pub const MULTIPLE_SIZE_RANGE_PX: (f64, f64) = (40.0, 500.0);
pub const MAX_PRECISION: u8 = 10;

pub(crate) fn validate_settings(settings: &VisualSettings) -> ChartResult<()> {
    let layout = &settings.layout;
    validate_range(
        "layout.spacing_between_columns",
        layout.spacing_between_columns,
        SPACING_RANGE_PX,
    )?;
    validate_range(
        "layout.spacing_between_rows",
        layout.spacing_between_rows,
        SPACING_RANGE_PX,
    )?;
    validate_range(
        "layout.multiple_width",
        layout.multiple_width,
        MULTIPLE_SIZE_RANGE_PX,
    )?;
    validate_range(
        "layout.multiple_height",
        layout.multiple_height,
        MULTIPLE_SIZE_RANGE_PX,
    )?;
    if let Some(columns) = layout.number_of_columns {
        let (min, max) = NUMBER_OF_COLUMNS_RANGE;
        if !(min..=max).contains(&columns) {
            return Err(ChartError::InvalidSettings(format!(
                "layout.number_of_columns must be between {min} and {max}"
            )));
        }
    }

    validate_range(
        "border.stroke_width",
        settings.border.stroke_width,
        BORDER_WIDTH_RANGE_PX,
    )?;

    validate_font("heading.font", &settings.heading.font)?;
    validate_font("value_axis.label_font", &settings.value_axis.label_font)?;
    validate_font("value_axis.title_font", &settings.value_axis.title_font)?;
    validate_font("category_axis.label_font", &settings.category_axis.label_font)?;
    validate_font("category_axis.title_font", &settings.category_axis.title_font)?;
    validate_gridlines("value_axis.gridlines", settings.value_axis.gridlines)?;
    validate_gridlines("category_axis.gridlines", settings.category_axis.gridlines)?;

    let value_axis = &settings.value_axis;
    if value_axis
        .precision
        .is_some_and(|precision| precision > MAX_PRECISION)
    {
        return Err(ChartError::InvalidSettings(format!(
            "value_axis.precision must be <= {MAX_PRECISION}"
        )));
    }
    for (name, bound) in [("start", value_axis.start), ("end", value_axis.end)] {
        if bound.is_some_and(|value| !value.is_finite()) {
            return Err(ChartError::InvalidSettings(format!(
                "value_axis.{name} must be finite"
            )));
        }
    }
    if matches!((value_axis.start, value_axis.end), (Some(start), Some(end)) if start >= end) {
        return Err(ChartError::InvalidSettings(
            "value_axis.start must be < value_axis.end".to_owned(),
        ));
    }

    if !DateFormat::is_valid_pattern(&settings.category_axis.date_pattern) {
        return Err(ChartError::InvalidSettings(
            "category_axis.date_pattern is not a valid strftime pattern".to_owned(),
        ));
    }

    let lines = &settings.lines;
    if !lines.stroke_width.is_finite() || lines.stroke_width <= 0.0 {
        return Err(ChartError::InvalidSettings(
            "lines.stroke_width must be finite and > 0".to_owned(),
        ));
    }
    if !(0.0..=1.0).contains(&lines.area_opacity) {
        return Err(ChartError::InvalidSettings(
            "lines.area_opacity must be between 0 and 1".to_owned(),
        ));
    }

    for color in lines.palette.iter().copied().chain([
        settings.border.color,
        settings.zebra.background_color,
        settings.zebra.alternate_color,
    ]) {
        color
            .validate()
            .map_err(|err| ChartError::InvalidSettings(err.to_string()))?;
    }

    Ok(())
}

pub(crate) fn validate_layout_constants(constants: &LayoutConstants) -> ChartResult<()> {
    for (name, value) in [
        ("minimum_cell_size", constants.minimum_cell_size),
        ("minimum_viewport_width", constants.minimum_viewport_width),
        ("minimum_viewport_height", constants.minimum_viewport_height),
        ("axis_label_padding_px", constants.axis_label_padding_px),
        ("axis_title_padding_px", constants.axis_title_padding_px),
        ("heading_padding_px", constants.heading_padding_px),
        ("multiple_margin.top", constants.multiple_margin.top),
        ("multiple_margin.bottom", constants.multiple_margin.bottom),
        ("multiple_margin.left", constants.multiple_margin.left),
        ("multiple_margin.right", constants.multiple_margin.right),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidSettings(format!(
                "layout constant `{name}` must be finite and >= 0"
            )));
        }
    }
    if constants.column_cap == 0 {
        return Err(ChartError::InvalidSettings(
            "layout constant `column_cap` must be > 0".to_owned(),
        ));
    }
    Ok(())
}

fn validate_range(name: &str, value: f64, (min, max): (f64, f64)) -> ChartResult<()> {
    if !value.is_finite() || value < min || value > max {
        return Err(ChartError::InvalidSettings(format!(
            "{name} must be between {min} and {max}"
        )));
    }
    Ok(())
}

fn validate_font(name: &str, font: &FontSettings) -> ChartResult<()> {
    if !font.font_size_px.is_finite() || font.font_size_px <= 0.0 {
        return Err(ChartError::InvalidSettings(format!(
            "{name}.font_size_px must be finite and > 0"
        )));
    }
    font.color
        .validate()
        .map_err(|err| ChartError::InvalidSettings(format!("{name}: {err}")))
}

fn validate_gridlines(name: &str, gridlines: GridlineSettings) -> ChartResult<()> {
    if !gridlines.stroke_width.is_finite() || gridlines.stroke_width <= 0.0 {
        return Err(ChartError::InvalidSettings(format!(
            "{name}.stroke_width must be finite and > 0"
        )));
    }
    gridlines
        .color
        .validate()
        .map_err(|err| ChartError::InvalidSettings(format!("{name}: {err}")))
}

#[cfg(test)]
mod tests {
    use super::validate_settings;
    use crate::api::VisualSettings;

    #[test]
    fn defaults_are_valid() {
        assert!(validate_settings(&VisualSettings::default()).is_ok());
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let mut settings = VisualSettings::default();
        settings.layout.spacing_between_columns = 51.0;
        assert!(validate_settings(&settings).is_err());

        let mut settings = VisualSettings::default();
        settings.layout.number_of_columns = Some(76);
        assert!(validate_settings(&settings).is_err());

        let mut settings = VisualSettings::default();
        settings.border.stroke_width = 0.5;
        assert!(validate_settings(&settings).is_err());

        let mut settings = VisualSettings::default();
        settings.value_axis.precision = Some(11);
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn explicit_zero_start_is_a_valid_bound() {
        let mut settings = VisualSettings::default();
        settings.value_axis.start = Some(0.0);
        settings.value_axis.end = Some(10.0);
        assert!(validate_settings(&settings).is_ok());

        settings.value_axis.end = Some(0.0);
        assert!(validate_settings(&settings).is_err());
    }
}
