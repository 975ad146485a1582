use crate::render::{RenderFrame, Renderer, TextHAlign, TextPrimitive};

use super::SmallMultiplesEngine;

/// Counter-clockwise rotation of the value-axis title.
const VALUE_TITLE_ROTATION_DEG: f64 = 90.0;

impl<R: Renderer> SmallMultiplesEngine<R> {
    /// Master axes: value tick labels left of every grid row, category tick
    /// labels under every grid column, and both titles.
    pub(super) fn append_axis_primitives(&self, frame: &mut RenderFrame) {
        self.append_value_axis_labels(frame);
        self.append_category_axis_labels(frame);
        self.append_axis_titles(frame);
    }

    fn append_value_axis_labels(&self, frame: &mut RenderFrame) {
        let axis = &self.resolved.value_axis;
        if axis.tick_labels.collapsed {
            return;
        }
        let layout = &self.resolved.layout;
        let font = &self.settings.value_axis.label_font;
        let properties = font.text_properties();
        let (_, inner_y) = layout.multiple.inner_origin();
        let x = layout.x_origin + layout.multiple.x_offset - self.constants.axis_label_padding_px;

        for row in 0..layout.grid.rows.count {
            let top = layout.y_origin + row as f64 * layout.grid.rows.height + inner_y;
            for tick in axis.ticks.iter().filter(|tick| !tick.label.is_empty()) {
                let half_height = self.measurer.measure(&tick.label, &properties).height / 2.0;
                frame.texts.push(TextPrimitive::new(
                    tick.label.clone(),
                    x,
                    top + tick.position - half_height,
                    font.font_size_px,
                    font.color,
                    tick.anchor,
                ));
            }
        }
    }

    fn append_category_axis_labels(&self, frame: &mut RenderFrame) {
        let axis = &self.resolved.category_axis;
        if axis.tick_labels.collapsed {
            return;
        }
        let layout = &self.resolved.layout;
        let font = &self.settings.category_axis.label_font;
        let (inner_x, _) = layout.multiple.inner_origin();
        let y = layout.grid_bottom() + self.constants.axis_label_padding_px / 2.0;

        for column in 0..layout.grid.columns.count {
            let left =
                layout.x_origin + layout.multiple.x_offset + column as f64 * layout.grid.columns.width + inner_x;
            for tick in axis.ticks.iter().filter(|tick| !tick.label.is_empty()) {
                frame.texts.push(TextPrimitive::new(
                    tick.label.clone(),
                    left + tick.position,
                    y,
                    font.font_size_px,
                    font.color,
                    tick.anchor,
                ));
            }
        }
    }

    fn append_axis_titles(&self, frame: &mut RenderFrame) {
        let layout = &self.resolved.layout;
        let chart = layout.chart_viewport;
        let padding = self.constants.axis_title_padding_px / 2.0;

        let value_title = &self.resolved.value_axis.title;
        if value_title.is_visible() && !value_title.text.is_empty() {
            let font = &self.settings.value_axis.title_font;
            frame.texts.push(
                TextPrimitive::new(
                    value_title.text.clone(),
                    layout.title_origin.0 + padding,
                    layout.y_origin + chart.height / 2.0,
                    font.font_size_px,
                    font.color,
                    TextHAlign::Center,
                )
                .rotated(VALUE_TITLE_ROTATION_DEG),
            );
        }

        let category_title = &self.resolved.category_axis.title;
        if category_title.is_visible() && !category_title.text.is_empty() {
            let font = &self.settings.category_axis.title_font;
            frame.texts.push(TextPrimitive::new(
                category_title.text.clone(),
                layout.x_origin + layout.multiple.x_offset + layout.grid.rows.width / 2.0,
                layout.y_origin + chart.height + padding,
                font.font_size_px,
                font.color,
                TextHAlign::Center,
            ));
        }
    }
}
