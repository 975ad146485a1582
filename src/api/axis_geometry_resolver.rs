//! Space reservation for master axis titles and tick labels.
//!
//! Nothing here fails: when the viewport cannot afford a box, the box is
//! collapsed to zero and flagged instead.

use crate::core::{Size, TextMeasurer, TextProperties, is_placeholder};

use super::AxisTextGeometry;

/// Which viewport dimension an axis title consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleOrientation {
    /// Rotated value-axis title, consumes width.
    Vertical,
    /// Category-axis title, consumes height.
    Horizontal,
}

/// `true` when reserving `required` still leaves `minimum` of `available`.
#[must_use]
pub fn fits(available: f64, required: f64, minimum: f64) -> bool {
    available - required >= minimum
}

fn reserve(text: String, size: Size, required: f64, visible: bool, available: f64, minimum: f64) -> AxisTextGeometry {
    if visible && required > 0.0 && fits(available, required, minimum) {
        AxisTextGeometry {
            text,
            size,
            collapsed: false,
        }
    } else {
        AxisTextGeometry::collapsed(text)
    }
}

#[allow(clippy::too_many_arguments)]
#[must_use]
pub fn resolve_title_geometry(
    measurer: &dyn TextMeasurer,
    text: &str,
    properties: &TextProperties,
    visible: bool,
    padding: f64,
    orientation: TitleOrientation,
    available: f64,
    minimum: f64,
) -> AxisTextGeometry {
    let measured = measurer.measure(text, properties);
    if measured.width <= 0.0 || measured.height <= 0.0 {
        return AxisTextGeometry::collapsed(text);
    }
    let required = measured.height + padding;
    let size = match orientation {
        TitleOrientation::Vertical => Size::new(required, measured.width),
        TitleOrientation::Horizontal => Size::new(measured.width, required),
    };
    reserve(text.to_owned(), size, required, visible, available, minimum)
}

/// Width of the value-axis tick-label column, sized by the lowest and
/// highest formatted domain values.
#[allow(clippy::too_many_arguments)]
#[must_use]
pub fn resolve_value_tick_label_width(
    measurer: &dyn TextMeasurer,
    low_label: &str,
    high_label: &str,
    properties: &TextProperties,
    visible: bool,
    padding: f64,
    available_width: f64,
    minimum_width: f64,
) -> AxisTextGeometry {
    let low = measurer.measure(low_label, properties);
    let high = measurer.measure(high_label, properties);
    let widest = if high.width >= low.width { high_label } else { low_label };
    let label_width = low.width.max(high.width);
    if label_width <= 0.0 {
        return AxisTextGeometry::collapsed(widest);
    }
    let required = label_width + padding;
    let size = Size::new(required, low.height.max(high.height));
    reserve(widest.to_owned(), size, required, visible, available_width, minimum_width)
}

/// Height of the category tick-label row. Only the first and last category
/// are labelled, anchored to the left and right cell edges.
#[allow(clippy::too_many_arguments)]
#[must_use]
pub fn resolve_category_tick_label_height(
    measurer: &dyn TextMeasurer,
    first_label: &str,
    last_label: &str,
    properties: &TextProperties,
    visible: bool,
    padding: f64,
    available_height: f64,
    minimum_height: f64,
) -> AxisTextGeometry {
    let first = measurer.measure(first_label, properties);
    let last = measurer.measure(last_label, properties);
    let label_height = first.height.max(last.height);
    if label_height <= 0.0 {
        return AxisTextGeometry::collapsed(first_label);
    }
    let required = label_height + padding;
    let size = Size::new(first.width + last.width, required);
    reserve(first_label.to_owned(), size, required, visible, available_height, minimum_height)
}

/// Decrements `recommended` until the labels stack inside `available_height`.
/// Zero means the tick labels do not fit at all.
#[must_use]
pub fn resolve_value_tick_count(
    recommended: usize,
    tick_text_height: f64,
    available_height: f64,
) -> usize {
    let mut tick_count = recommended;
    while tick_count > 0 && tick_count as f64 * tick_text_height >= available_height {
        tick_count -= 1;
    }
    tick_count
}

/// Tailors each category tick label to half the plot width.
///
/// The flag is `false` when every label degraded to an empty string or a
/// lone ellipsis, i.e. the row carries no information.
#[must_use]
pub fn tailor_category_tick_labels(
    measurer: &dyn TextMeasurer,
    labels: &[String],
    properties: &TextProperties,
    inner_width: f64,
) -> (Vec<String>, bool) {
    let max_width = (inner_width / 2.0).max(0.0);
    let tailored: Vec<String> = labels
        .iter()
        .map(|label| measurer.tailor(label, properties, max_width))
        .collect();
    let informative = tailored.iter().any(|label| !is_placeholder(label));
    (tailored, informative)
}

#[cfg(test)]
mod tests {
    use super::{
        TitleOrientation, fits, resolve_category_tick_label_height, resolve_title_geometry,
        resolve_value_tick_count, resolve_value_tick_label_width, tailor_category_tick_labels,
    };
    use crate::core::{HeuristicTextMeasurer, TextProperties};

    fn props() -> TextProperties {
        TextProperties::new("Segoe UI", 10.0)
    }

    #[test]
    fn fit_test_is_inclusive() {
        assert!(fits(100.0, 20.0, 80.0));
        assert!(!fits(100.0, 20.1, 80.0));
    }

    #[test]
    fn vertical_title_consumes_its_text_height_as_width() {
        let title = resolve_title_geometry(
            &HeuristicTextMeasurer,
            "Sales",
            &props(),
            true,
            4.0,
            TitleOrientation::Vertical,
            500.0,
            80.0,
        );
        assert!(!title.collapsed);
        assert_eq!(title.size.width, 16.0);
    }

    #[test]
    fn hidden_or_oversized_title_collapses() {
        let hidden = resolve_title_geometry(
            &HeuristicTextMeasurer,
            "Sales",
            &props(),
            false,
            4.0,
            TitleOrientation::Horizontal,
            500.0,
            60.0,
        );
        assert!(hidden.collapsed);
        assert_eq!(hidden.size.height, 0.0);

        let cramped = resolve_title_geometry(
            &HeuristicTextMeasurer,
            "Sales",
            &props(),
            true,
            4.0,
            TitleOrientation::Horizontal,
            70.0,
            60.0,
        );
        assert!(cramped.collapsed);
    }

    #[test]
    fn value_tick_labels_take_the_wider_extreme() {
        let labels = resolve_value_tick_label_width(
            &HeuristicTextMeasurer,
            "0",
            "1000",
            &props(),
            true,
            4.0,
            400.0,
            80.0,
        );
        assert_eq!(labels.text, "1000");
        assert!((labels.size.width - 28.8).abs() < 1e-9);
    }

    #[test]
    fn category_tick_row_collapses_when_viewport_is_short() {
        let labels = resolve_category_tick_label_height(
            &HeuristicTextMeasurer,
            "Jan",
            "Dec",
            &props(),
            true,
            4.0,
            70.0,
            60.0,
        );
        assert!(labels.collapsed);
        assert_eq!(labels.size.height, 0.0);
    }

    #[test]
    fn tick_count_decrements_until_labels_fit() {
        assert_eq!(resolve_value_tick_count(6, 12.0, 400.0), 6);
        assert_eq!(resolve_value_tick_count(6, 12.0, 50.0), 4);
        assert_eq!(resolve_value_tick_count(3, 12.0, 12.0), 0);
    }

    #[test]
    fn category_labels_are_invalid_when_all_degrade() {
        let labels = vec!["January".to_owned(), "December".to_owned()];
        let (_, valid) = tailor_category_tick_labels(&HeuristicTextMeasurer, &labels, &props(), 30.0);
        assert!(!valid);
        let (tailored, valid) =
            tailor_category_tick_labels(&HeuristicTextMeasurer, &labels, &props(), 200.0);
        assert!(valid);
        assert_eq!(tailored[0], "January");
    }
}
