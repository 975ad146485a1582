use serde::{Deserialize, Serialize};

use crate::core::{AxisScale, Category, LinearScale, MeasureSeries};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathPoint {
    pub x: f64,
    pub y: f64,
}

/// Contiguous run of non-null values in pixel space, local to a cell's
/// inner box.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LinePath {
    pub points: Vec<PathPoint>,
}

/// Projects a series into line paths.
///
/// A `None` value ends the current path: missing data is a gap, never a
/// zero. Runs of a single point are kept so renderers can draw a marker.
#[must_use]
pub fn project_line_paths(
    series: &MeasureSeries,
    category: &Category,
    category_scale: AxisScale,
    value_scale: LinearScale,
) -> Vec<LinePath> {
    let mut paths = Vec::new();
    let mut current = LinePath::default();

    for value in &series.values {
        let projected = value.value.and_then(|number| {
            let x = category_scale.position(category, value.category_index)?;
            Some(PathPoint {
                x,
                y: value_scale.map(number),
            })
        });
        match projected {
            Some(point) if point.x.is_finite() && point.y.is_finite() => current.points.push(point),
            _ => {
                if !current.points.is_empty() {
                    paths.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.points.is_empty() {
        paths.push(current);
    }

    paths
}

/// Closes each line path down to `baseline_y`, producing area polygons.
#[must_use]
pub fn project_area_polygons(paths: &[LinePath], baseline_y: f64) -> Vec<LinePath> {
    paths
        .iter()
        .filter(|path| path.points.len() >= 2)
        .map(|path| {
            let mut points = path.points.clone();
            if let (Some(first), Some(last)) = (path.points.first(), path.points.last()) {
                points.push(PathPoint {
                    x: last.x,
                    y: baseline_y,
                });
                points.push(PathPoint {
                    x: first.x,
                    y: baseline_y,
                });
            }
            LinePath { points }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{project_area_polygons, project_line_paths};
    use crate::core::{
        AxisScale, Category, CategoryKind, CategoryValue, LinearScale, MeasureRole, MeasureSeries,
        MeasureValue,
    };

    fn series(values: &[Option<f64>]) -> (Category, MeasureSeries) {
        let mut category = Category::new("x", CategoryKind::Text);
        let values = values
            .iter()
            .enumerate()
            .map(|(index, value)| {
                let label = CategoryValue::text(format!("c{index}"));
                let category_index = category.insert(label.clone());
                MeasureValue {
                    category: label,
                    category_index,
                    value: *value,
                    role: MeasureRole::DataPoint,
                    highlighted: false,
                    selection_id: None,
                    tooltip: Vec::new(),
                }
            })
            .collect();
        (
            category,
            MeasureSeries {
                measure_index: 0,
                values,
            },
        )
    }

    #[test]
    fn nulls_break_the_line_instead_of_dropping_to_zero() {
        let (category, series) = series(&[Some(1.0), Some(2.0), None, Some(3.0), Some(4.0), None]);
        let x_scale = AxisScale::for_category(&category, 50.0);
        let y_scale = LinearScale::normalized(0.0, 4.0).with_range(100.0, 0.0);

        let paths = project_line_paths(&series, &category, x_scale, y_scale);
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0].points.len(), 2);
        assert_eq!(paths[1].points.len(), 2);
        assert_eq!(paths[0].points[0].x, 0.0);
        assert_eq!(paths[0].points[0].y, 75.0);
        assert_eq!(paths[1].points[1].y, 0.0);
    }

    #[test]
    fn area_polygons_close_to_baseline_and_skip_single_points() {
        let (category, series) = series(&[Some(1.0), None, Some(2.0), Some(3.0)]);
        let x_scale = AxisScale::for_category(&category, 30.0);
        let y_scale = LinearScale::normalized(0.0, 4.0).with_range(100.0, 0.0);
        let paths = project_line_paths(&series, &category, x_scale, y_scale);
        assert_eq!(paths.len(), 2);

        let areas = project_area_polygons(&paths, 100.0);
        assert_eq!(areas.len(), 1);
        assert_eq!(areas[0].points.len(), 4);
        assert_eq!(areas[0].points[2].y, 100.0);
        assert_eq!(areas[0].points[3].x, areas[0].points[0].x);
    }
}
