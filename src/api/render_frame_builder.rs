use crate::core::{AxisScale, LinearScale};
use crate::error::ChartResult;
use crate::render::{LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive};

use super::{MultipleCell, SmallMultiplesEngine, effective_border_width};

/// Scales every cell shares, resolved once per frame.
#[derive(Debug, Clone, Copy)]
pub(super) struct PlotScales {
    pub category: AxisScale,
    pub value: LinearScale,
}

impl<R: Renderer> SmallMultiplesEngine<R> {
    /// Materializes the current layout into backend-agnostic primitives.
    ///
    /// Without data the frame is empty.
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        let mut frame = RenderFrame::new(self.viewport);
        let Some(view_model) = &self.view_model else {
            return Ok(frame);
        };
        let cells = self.multiple_cells();

        self.append_cell_primitives(&mut frame, &cells);
        if let Some(scales) = self.plot_scales() {
            self.append_gridline_primitives(&mut frame, &cells, scales);
            self.append_line_series_primitives(&mut frame, &cells, view_model, scales);
        }
        self.append_axis_primitives(&mut frame);

        frame.validate()?;
        Ok(frame)
    }

    pub(super) fn plot_scales(&self) -> Option<PlotScales> {
        let category = self.resolved.category_axis.scale?;
        match self.resolved.value_axis.scale? {
            AxisScale::Linear(value) => Some(PlotScales { category, value }),
            AxisScale::Time(_) | AxisScale::Point(_) => None,
        }
    }

    fn append_cell_primitives(&self, frame: &mut RenderFrame, cells: &[MultipleCell]) {
        let layout = &self.resolved.layout;
        let multiple = layout.multiple;
        let border = &self.settings.border;
        let border_width = effective_border_width(border);
        let heading_settings = &self.settings.heading;
        let heading_properties = heading_settings.font.text_properties();
        let heading_width = (multiple.outer.width - multiple.margin.horizontal()).max(0.0);

        for cell in cells {
            let mut rect = RectPrimitive::new(
                cell.x + multiple.border_offset,
                cell.y + multiple.border_offset,
                multiple.outer.width,
                multiple.outer.height,
                cell.background,
            );
            if border_width > 0.0 {
                rect = rect.with_border(border_width, border.color);
            }
            frame.rects.push(rect);

            let Some(heading) = multiple.heading else {
                continue;
            };
            let text = self
                .measurer
                .tailor(&cell.name, &heading_properties, heading_width);
            if text.is_empty() {
                continue;
            }
            let left = cell.x + multiple.border_offset + multiple.margin.left;
            let x = match heading_settings.alignment {
                TextHAlign::Left => left,
                TextHAlign::Center => left + heading_width / 2.0,
                TextHAlign::Right => left + heading_width,
            };
            let y = cell.y + heading.y + self.constants.heading_padding_px / 2.0;
            frame.texts.push(TextPrimitive::new(
                text,
                x,
                y,
                heading_settings.font.font_size_px,
                heading_settings.font.color,
                heading_settings.alignment,
            ));
        }
    }

    fn append_gridline_primitives(
        &self,
        frame: &mut RenderFrame,
        cells: &[MultipleCell],
        scales: PlotScales,
    ) {
        let multiple = self.resolved.layout.multiple;
        let (inner_x, inner_y) = multiple.inner_origin();
        let inner = multiple.inner;
        let value_gridlines = self.settings.value_axis.gridlines;
        let category_gridlines = self.settings.category_axis.gridlines;
        let view_model_category = self.view_model.as_ref().map(|view_model| &view_model.category);

        for cell in cells {
            let left = cell.x + inner_x;
            let top = cell.y + inner_y;
            if value_gridlines.show && self.settings.value_axis.show {
                for tick in &self.resolved.value_axis.ticks {
                    let y = top + tick.position;
                    frame.lines.push(
                        LinePrimitive::new(
                            left,
                            y,
                            left + inner.width,
                            y,
                            value_gridlines.stroke_width,
                            value_gridlines.color,
                        )
                        .with_stroke_style(value_gridlines.stroke_style),
                    );
                }
            }
            if category_gridlines.show && self.settings.category_axis.show {
                let Some(category) = view_model_category else {
                    continue;
                };
                for index in 0..category.len() {
                    let Some(position) = scales.category.position(category, index) else {
                        continue;
                    };
                    let x = left + position;
                    frame.lines.push(
                        LinePrimitive::new(
                            x,
                            top,
                            x,
                            top + inner.height,
                            category_gridlines.stroke_width,
                            category_gridlines.color,
                        )
                        .with_stroke_style(category_gridlines.stroke_style),
                    );
                }
            }
        }
    }
}
