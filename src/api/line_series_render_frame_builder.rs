use crate::core::{
    Category, LinePath, Measure, SmallMultiple, project_area_polygons, project_line_paths,
};
use crate::render::{PolylinePrimitive, RenderFrame, Renderer};

use super::render_frame_builder::PlotScales;
use super::{MultipleCell, SmallMultiplesEngine, ViewModel};

/// Alpha applied to multiples that are not highlighted while a
/// cross-filter highlight is active.
const DIMMED_ALPHA: f64 = 0.4;

/// Projected paths of one measure inside one multiple, local to the plot area.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct ProjectedSeries {
    pub measure_index: usize,
    pub lines: Vec<LinePath>,
    pub areas: Vec<LinePath>,
}

fn project_multiple(
    multiple: &SmallMultiple,
    category: &Category,
    measures: &[Measure],
    scales: PlotScales,
) -> Vec<ProjectedSeries> {
    let (low, high) = scales.value.domain();
    let baseline = scales.value.map(0.0_f64.clamp(low.min(high), low.max(high)));
    multiple
        .series
        .iter()
        .map(|series| {
            let lines = project_line_paths(series, category, scales.category, scales.value);
            let areas = match measures.get(series.measure_index) {
                Some(measure) if measure.style.show_area => project_area_polygons(&lines, baseline),
                _ => Vec::new(),
            };
            ProjectedSeries {
                measure_index: series.measure_index,
                lines,
                areas,
            }
        })
        .collect()
}

#[cfg(feature = "parallel-projection")]
fn project_all(view_model: &ViewModel, scales: PlotScales) -> Vec<Vec<ProjectedSeries>> {
    use rayon::prelude::*;

    view_model
        .multiples
        .par_iter()
        .map(|multiple| project_multiple(multiple, &view_model.category, &view_model.measures, scales))
        .collect()
}

#[cfg(not(feature = "parallel-projection"))]
fn project_all(view_model: &ViewModel, scales: PlotScales) -> Vec<Vec<ProjectedSeries>> {
    view_model
        .multiples
        .iter()
        .map(|multiple| project_multiple(multiple, &view_model.category, &view_model.measures, scales))
        .collect()
}

impl<R: Renderer> SmallMultiplesEngine<R> {
    pub(super) fn append_line_series_primitives(
        &self,
        frame: &mut RenderFrame,
        cells: &[MultipleCell],
        view_model: &ViewModel,
        scales: PlotScales,
    ) {
        let (inner_x, inner_y) = self.resolved.layout.multiple.inner_origin();
        let any_highlighted = view_model.multiples.iter().any(|multiple| multiple.highlighted);
        let projected = project_all(view_model, scales);

        for cell in cells {
            let Some(series_list) = projected.get(cell.index) else {
                continue;
            };
            let left = cell.x + inner_x;
            let top = cell.y + inner_y;
            let dimmed = any_highlighted && !cell.highlighted;

            for series in series_list {
                let Some(measure) = view_model.measures.get(series.measure_index) else {
                    continue;
                };
                let style = measure.style;
                let stroke_color = if dimmed {
                    style.color.with_alpha(style.color.alpha * DIMMED_ALPHA)
                } else {
                    style.color
                };
                let to_host = |path: &LinePath| -> Vec<(f64, f64)> {
                    path.points
                        .iter()
                        .map(|point| (left + point.x, top + point.y))
                        .collect()
                };

                for area in &series.areas {
                    frame.polylines.push(PolylinePrimitive {
                        points: to_host(area),
                        stroke_width: style.stroke_width,
                        stroke_color: stroke_color.with_alpha(0.0),
                        stroke_style: style.stroke_style,
                        fill_color: Some(stroke_color.with_alpha(stroke_color.alpha * style.area_opacity)),
                    });
                }
                for line in &series.lines {
                    frame.polylines.push(PolylinePrimitive {
                        points: to_host(line),
                        stroke_width: style.stroke_width,
                        stroke_color,
                        stroke_style: style.stroke_style,
                        fill_color: None,
                    });
                }
            }
        }
    }
}
