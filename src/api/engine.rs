use std::sync::Arc;

use tracing::debug;

use crate::core::{
    Category, CategoryFormatter, DateFormat, LinearScale, NumberFormat, TextMeasurer,
    ValueFormatter, Viewport,
};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::layout_controller::{LayoutRequest, resolve_layout, resolve_value_domain};
use super::validation::validate_settings;
use super::view_model::build_view_model;
use super::{
    DataSet, LayoutConstants, LegendFootprint, ResolvedLayout, ViewModel, VisualSettings,
};

/// Host-facing facade of the small-multiples line chart.
///
/// Every data change rebuilds the view model and the layout from scratch;
/// resizes and settings changes only rerun what they affect. Nothing is
/// cached across cycles.
pub struct SmallMultiplesEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) settings: VisualSettings,
    pub(super) constants: LayoutConstants,
    pub(super) measurer: Box<dyn TextMeasurer>,
    pub(super) value_formatter: Option<Arc<dyn ValueFormatter>>,
    pub(super) legend: Option<LegendFootprint>,
    pub(super) viewport: Viewport,
    pub(super) data: Option<DataSet>,
    pub(super) view_model: Option<ViewModel>,
    pub(super) resolved: ResolvedLayout,
}

impl<R: Renderer> SmallMultiplesEngine<R> {
    /// Replaces the data set and runs a full update cycle.
    pub fn update_data(&mut self, data: DataSet, viewport: Viewport) -> ChartResult<()> {
        let viewport = viewport.validate()?;
        let view_model = build_view_model(&data, &self.settings.lines)?;
        self.viewport = viewport;
        self.data = Some(data);
        self.view_model = Some(view_model);
        self.relayout();
        Ok(())
    }

    /// Drops the data set; the next layout is an empty grid.
    pub fn clear_data(&mut self) {
        self.data = None;
        self.view_model = None;
        self.relayout();
    }

    /// Recomputes layout for a new host viewport without touching the data.
    pub fn resize(&mut self, viewport: Viewport) -> ChartResult<()> {
        self.viewport = viewport.validate()?;
        self.relayout();
        Ok(())
    }

    pub fn set_settings(&mut self, settings: VisualSettings) -> ChartResult<()> {
        validate_settings(&settings)?;
        let view_model = self
            .data
            .as_ref()
            .map(|data| build_view_model(data, &settings.lines))
            .transpose()?;
        self.settings = settings;
        self.view_model = view_model;
        self.relayout();
        Ok(())
    }

    /// Space taken by the host legend, `None` when the host draws none.
    pub fn set_legend_footprint(&mut self, legend: Option<LegendFootprint>) -> ChartResult<()> {
        if let Some(footprint) = legend {
            if !footprint.width.is_finite()
                || !footprint.height.is_finite()
                || footprint.width < 0.0
                || footprint.height < 0.0
            {
                return Err(ChartError::InvalidSettings(
                    "legend footprint must be finite and >= 0".to_owned(),
                ));
            }
        }
        self.legend = legend;
        self.relayout();
        Ok(())
    }

    /// Overrides the value-axis formatter; `None` restores the formatter
    /// derived from settings.
    pub fn set_value_formatter(&mut self, formatter: Option<Arc<dyn ValueFormatter>>) {
        self.value_formatter = formatter;
        self.relayout();
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub(super) fn resolved_value_formatter(&self) -> Arc<dyn ValueFormatter> {
        if let Some(formatter) = &self.value_formatter {
            return Arc::clone(formatter);
        }
        let settings = &self.settings.value_axis;
        let (start, end) = self.value_domain().domain();
        let mut format = NumberFormat::default()
            .with_display_units(settings.display_units)
            .with_reference(start.abs().max(end.abs()));
        if let Some(precision) = settings.precision {
            format = format.with_precision(precision);
        }
        Arc::new(format)
    }

    pub(super) fn category_formatter(&self) -> CategoryFormatter {
        CategoryFormatter {
            number: NumberFormat::default(),
            date: DateFormat::new(self.settings.category_axis.date_pattern.clone()),
        }
    }

    pub(super) fn value_domain(&self) -> LinearScale {
        let statistics = self
            .view_model
            .as_ref()
            .map(|view_model| view_model.statistics.clone())
            .unwrap_or_default();
        resolve_value_domain(&statistics, &self.settings.value_axis)
    }

    pub(super) fn value_title(&self) -> String {
        self.settings.value_axis.title_text.clone().unwrap_or_else(|| {
            self.view_model
                .as_ref()
                .map(ViewModel::value_title)
                .unwrap_or_default()
        })
    }

    pub(super) fn category_title(&self) -> String {
        self.settings.category_axis.title_text.clone().unwrap_or_else(|| {
            self.view_model
                .as_ref()
                .map(|view_model| view_model.category.name.clone())
                .unwrap_or_default()
        })
    }

    /// Runs one layout cycle from reset.
    pub(super) fn relayout(&mut self) {
        let empty_category = Category::default();
        let (category, item_count) = match &self.view_model {
            Some(view_model) => (&view_model.category, view_model.multiples.len()),
            None => (&empty_category, 0),
        };
        let value_formatter = self.resolved_value_formatter();
        let category_formatter = self.category_formatter();
        let value_title = self.value_title();
        let category_title = self.category_title();

        let resolved = resolve_layout(&LayoutRequest {
            viewport: self.viewport,
            settings: &self.settings,
            constants: &self.constants,
            item_count,
            category,
            value_domain: self.value_domain(),
            value_formatter: value_formatter.as_ref(),
            category_formatter: &category_formatter,
            measurer: self.measurer.as_ref(),
            legend: self.legend,
            value_title: &value_title,
            category_title: &category_title,
        });
        debug!(
            width = self.viewport.width,
            height = self.viewport.height,
            item_count,
            "layout cycle complete"
        );
        self.resolved = resolved;
    }
}
