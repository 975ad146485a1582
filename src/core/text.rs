use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::core::Size;

pub const ELLIPSIS: &str = "\u{2026}";

/// Font properties relevant to measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextProperties {
    pub font_family: String,
    pub font_size_px: f64,
}

impl TextProperties {
    #[must_use]
    pub fn new(font_family: impl Into<String>, font_size_px: f64) -> Self {
        Self {
            font_family: font_family.into(),
            font_size_px,
        }
    }
}

/// Text measurement capability.
///
/// Implementations must be deterministic: the layout engine measures the same
/// strings several times per cycle and relies on identical answers.
pub trait TextMeasurer: Debug {
    fn measure(&self, text: &str, properties: &TextProperties) -> Size;

    /// Truncates `text` so it fits in `max_width`, appending an ellipsis when
    /// characters were dropped. Returns an empty string when not even the
    /// ellipsis fits.
    fn tailor(&self, text: &str, properties: &TextProperties, max_width: f64) -> String {
        if self.measure(text, properties).width <= max_width {
            return text.to_owned();
        }
        if self.measure(ELLIPSIS, properties).width > max_width {
            return String::new();
        }

        let chars: Vec<char> = text.chars().collect();
        for keep in (0..chars.len()).rev() {
            let mut candidate: String = chars[..keep].iter().collect();
            candidate.push_str(ELLIPSIS);
            if self.measure(&candidate, properties).width <= max_width {
                return candidate;
            }
        }
        ELLIPSIS.to_owned()
    }
}

/// `true` for text that carries no information once tailored.
#[must_use]
pub fn is_placeholder(text: &str) -> bool {
    text.is_empty() || text == ELLIPSIS
}

/// Backend-independent width estimate based on glyph classes.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicTextMeasurer;

impl HeuristicTextMeasurer {
    pub const LINE_HEIGHT_RATIO: f64 = 1.2;
}

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, properties: &TextProperties) -> Size {
        if text.is_empty() || properties.font_size_px <= 0.0 {
            return Size::ZERO;
        }
        let units = text.chars().fold(0.0, |acc, ch| {
            acc + match ch {
                '0'..='9' => 0.62,
                '.' | ',' => 0.34,
                '-' | '+' | '%' => 0.42,
                ' ' => 0.33,
                '\u{2026}' => 1.0,
                _ => 0.58,
            }
        });
        Size::new(
            units * properties.font_size_px,
            properties.font_size_px * Self::LINE_HEIGHT_RATIO,
        )
    }
}
