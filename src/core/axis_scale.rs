use serde::{Deserialize, Serialize};

use crate::core::{Category, CategoryKind, CategoryValue, LinearScale, PointScale, TimeScale};

/// Category-axis scale, selected by the declared category kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AxisScale {
    Linear(LinearScale),
    Time(TimeScale),
    Point(PointScale),
}

impl AxisScale {
    /// Builds the scale for `category` over the pixel range `[0, width]`.
    ///
    /// Continuous domains span the first and last category in data order.
    #[must_use]
    pub fn for_category(category: &Category, width: f64) -> Self {
        let extents = category
            .extents()
            .and_then(|(first, last)| Some((first.as_continuous()?, last.as_continuous()?)));
        match (category.kind, extents) {
            (CategoryKind::Numeric, Some((first, last))) => {
                Self::Linear(LinearScale::normalized(first, last).with_range(0.0, width))
            }
            (CategoryKind::DateTime, Some((first, last))) => {
                Self::Time(TimeScale::from_millis(first, last).with_range(0.0, width))
            }
            _ => Self::Point(PointScale::new(category.len()).with_range(0.0, width)),
        }
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        match self {
            Self::Linear(scale) => scale.range(),
            Self::Time(scale) => scale.range(),
            Self::Point(scale) => scale.range(),
        }
    }

    /// Pixel position of the category value at `index`.
    #[must_use]
    pub fn position(self, category: &Category, index: usize) -> Option<f64> {
        match self {
            Self::Point(scale) => (index < scale.count()).then(|| scale.position(index)),
            Self::Linear(scale) => Some(scale.map(category.get(index)?.as_continuous()?)),
            Self::Time(scale) => Some(scale.map_millis(category.get(index)?.as_continuous()?)),
        }
    }

    /// Index of the category nearest to `pixel`.
    ///
    /// Total over non-empty domains: pixels outside the range clamp to the
    /// edge categories. Point scales use their explicit index mapping;
    /// continuous scales compare the pixel against every category position.
    #[must_use]
    pub fn nearest_index(self, category: &Category, pixel: f64) -> Option<usize> {
        if let Self::Point(scale) = self {
            return scale.nearest_index(pixel);
        }
        let (range_start, range_end) = self.range();
        let clamped = if pixel.is_finite() {
            pixel.clamp(range_start.min(range_end), range_start.max(range_end))
        } else {
            range_start
        };
        (0..category.len())
            .filter_map(|index| Some((index, self.position(category, index)?)))
            .min_by(|left, right| {
                (left.1 - clamped)
                    .abs()
                    .total_cmp(&(right.1 - clamped).abs())
                    .then(left.0.cmp(&right.0))
            })
            .map(|(index, _)| index)
    }

    #[must_use]
    pub fn nearest_value<'a>(self, category: &'a Category, pixel: f64) -> Option<&'a CategoryValue> {
        category.get(self.nearest_index(category, pixel)?)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::AxisScale;
    use crate::core::{Category, CategoryKind, CategoryValue};

    fn numeric(values: &[f64]) -> Category {
        let mut category = Category::new("x", CategoryKind::Numeric);
        for value in values {
            category.insert(CategoryValue::number(*value));
        }
        category
    }

    #[test]
    fn kind_selects_scale_variant() {
        let mut text = Category::new("t", CategoryKind::Text);
        text.insert(CategoryValue::text("a"));
        assert!(matches!(AxisScale::for_category(&text, 100.0), AxisScale::Point(_)));
        assert!(matches!(
            AxisScale::for_category(&numeric(&[1.0, 2.0]), 100.0),
            AxisScale::Linear(_)
        ));

        let mut dates = Category::new("d", CategoryKind::DateTime);
        dates.insert(CategoryValue::DateTime(
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        ));
        assert!(matches!(AxisScale::for_category(&dates, 100.0), AxisScale::Time(_)));
    }

    #[test]
    fn continuous_nearest_index_clamps_out_of_range() {
        let category = numeric(&[0.0, 10.0, 20.0, 40.0]);
        let scale = AxisScale::for_category(&category, 400.0);
        assert_eq!(scale.nearest_index(&category, 90.0), Some(1));
        assert_eq!(scale.nearest_index(&category, 310.0), Some(3));
        assert_eq!(scale.nearest_index(&category, -20.0), Some(0));
        assert_eq!(scale.nearest_index(&category, 9_999.0), Some(3));
    }

    #[test]
    fn empty_category_has_no_nearest_value() {
        let category = Category::new("t", CategoryKind::Text);
        let scale = AxisScale::for_category(&category, 100.0);
        assert_eq!(scale.nearest_value(&category, 10.0), None);
    }
}
