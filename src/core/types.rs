use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Host-provided drawing area in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns `true` when both dimensions are finite and non-negative.
    ///
    /// A zero-sized viewport is accepted: layout degrades to collapsed
    /// geometry instead of failing.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width >= 0.0 && self.height >= 0.0
    }

    pub fn validate(self) -> ChartResult<Self> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Shrinks the width, never below zero.
    #[must_use]
    pub fn shrink_width(self, amount: f64) -> Self {
        Self {
            width: (self.width - amount).max(0.0),
            height: self.height,
        }
    }

    /// Shrinks the height, never below zero.
    #[must_use]
    pub fn shrink_height(self, amount: f64) -> Self {
        Self {
            width: self.width,
            height: (self.height - amount).max(0.0),
        }
    }
}

/// Width/height pair used for boxes that are not viewports.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub const ZERO: Self = Self::new(0.0, 0.0);
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Margin {
    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self {
            top: value,
            bottom: value,
            left: value,
            right: value,
        }
    }

    #[must_use]
    pub fn horizontal(self) -> f64 {
        self.left + self.right
    }

    #[must_use]
    pub fn vertical(self) -> f64 {
        self.top + self.bottom
    }
}
