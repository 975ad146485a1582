use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{CategoryValue, MeasureRole, SmallMultiple};

/// First/last non-null point of one measure inside one multiple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesEndpoints {
    pub first: (CategoryValue, f64),
    pub last: (CategoryValue, f64),
}

/// Aggregates over plotted values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Statistics {
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Keyed by `(multiple index, measure index)`.
    pub endpoints: IndexMap<(usize, usize), SeriesEndpoints>,
}

impl Statistics {
    /// Computes global min/max over non-null `DataPoint` values.
    ///
    /// Tooltip-role values and nulls are ignored.
    #[must_use]
    pub fn compute(multiples: &[SmallMultiple]) -> Self {
        let mut statistics = Self::default();
        for (multiple_index, multiple) in multiples.iter().enumerate() {
            for series in &multiple.series {
                let mut plotted = series
                    .values
                    .iter()
                    .filter(|value| value.role == MeasureRole::DataPoint)
                    .filter_map(|value| value.value.map(|number| (value, number)))
                    .peekable();
                if plotted.peek().is_none() {
                    continue;
                }

                let mut first = None;
                let mut last = None;
                for (value, number) in plotted {
                    statistics.min = Some(statistics.min.map_or(number, |min| min.min(number)));
                    statistics.max = Some(statistics.max.map_or(number, |max| max.max(number)));
                    if first.is_none() {
                        first = Some((value.category.clone(), number));
                    }
                    last = Some((value.category.clone(), number));
                }
                if let (Some(first), Some(last)) = (first, last) {
                    statistics
                        .endpoints
                        .insert((multiple_index, series.measure_index), SeriesEndpoints { first, last });
                }
            }
        }
        statistics
    }
}

#[cfg(test)]
mod tests {
    use super::Statistics;
    use crate::core::{CategoryValue, MeasureRole, MeasureSeries, MeasureValue, SmallMultiple};

    fn value(index: usize, number: Option<f64>, role: MeasureRole) -> MeasureValue {
        MeasureValue {
            category: CategoryValue::number(index as f64),
            category_index: index,
            value: number,
            role,
            highlighted: false,
            selection_id: None,
            tooltip: Vec::new(),
        }
    }

    #[test]
    fn nulls_and_tooltip_values_are_excluded() {
        let multiple = SmallMultiple {
            name: "A".to_owned(),
            highlighted: false,
            series: vec![
                MeasureSeries {
                    measure_index: 0,
                    values: vec![
                        value(0, None, MeasureRole::DataPoint),
                        value(1, Some(4.0), MeasureRole::DataPoint),
                        value(2, Some(-2.0), MeasureRole::DataPoint),
                        value(3, None, MeasureRole::DataPoint),
                    ],
                },
                MeasureSeries {
                    measure_index: 1,
                    values: vec![value(0, Some(1_000.0), MeasureRole::Tooltip)],
                },
            ],
        };

        let statistics = Statistics::compute(&[multiple]);
        assert_eq!(statistics.min, Some(-2.0));
        assert_eq!(statistics.max, Some(4.0));

        let endpoints = &statistics.endpoints[&(0, 0)];
        assert_eq!(endpoints.first, (CategoryValue::number(1.0), 4.0));
        assert_eq!(endpoints.last, (CategoryValue::number(2.0), -2.0));
        assert!(!statistics.endpoints.contains_key(&(0, 1)));
    }

    #[test]
    fn empty_input_has_no_extremes() {
        let statistics = Statistics::compute(&[]);
        assert_eq!(statistics.min, None);
        assert_eq!(statistics.max, None);
    }
}
