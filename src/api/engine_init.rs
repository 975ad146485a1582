use crate::core::{HeuristicTextMeasurer, TextMeasurer, Viewport};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::validation::{validate_layout_constants, validate_settings};
use super::{LayoutConstants, ResolvedLayout, SmallMultiplesEngine, VisualSettings};

impl<R: Renderer> SmallMultiplesEngine<R> {
    /// Creates an engine with no data and an empty viewport.
    ///
    /// Uses [`HeuristicTextMeasurer`] and default [`LayoutConstants`] until
    /// replaced.
    pub fn new(renderer: R, settings: VisualSettings) -> ChartResult<Self> {
        validate_settings(&settings)?;
        let mut engine = Self {
            renderer,
            settings,
            constants: LayoutConstants::default(),
            measurer: Box::new(HeuristicTextMeasurer),
            value_formatter: None,
            legend: None,
            viewport: Viewport::default(),
            data: None,
            view_model: None,
            resolved: ResolvedLayout::default(),
        };
        engine.relayout();
        Ok(engine)
    }

    #[must_use]
    pub fn with_text_measurer(mut self, measurer: impl TextMeasurer + 'static) -> Self {
        self.measurer = Box::new(measurer);
        self.relayout();
        self
    }

    pub fn with_layout_constants(mut self, constants: LayoutConstants) -> ChartResult<Self> {
        validate_layout_constants(&constants)?;
        self.constants = constants;
        self.relayout();
        Ok(self)
    }
}
