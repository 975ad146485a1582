use serde::{Deserialize, Serialize};

/// Discrete, evenly spaced positions for categories without a natural order.
///
/// Unlike [`crate::core::LinearScale`] there is no continuous inverse, so the
/// scale keeps an explicit index <-> pixel mapping and resolves arbitrary
/// pixels to the nearest index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointScale {
    count: usize,
    range_start: f64,
    range_end: f64,
    padding: f64,
}

impl PointScale {
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            count,
            range_start: 0.0,
            range_end: 1.0,
            padding: 0.0,
        }
    }

    #[must_use]
    pub fn with_range(mut self, range_start: f64, range_end: f64) -> Self {
        self.range_start = range_start;
        self.range_end = range_end;
        self
    }

    /// Sets the outer padding in point steps.
    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = if padding.is_finite() {
            padding.max(0.0)
        } else {
            0.0
        };
        self
    }

    #[must_use]
    pub fn count(self) -> usize {
        self.count
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Signed distance between two neighbouring points.
    #[must_use]
    pub fn step(self) -> f64 {
        if self.count <= 1 {
            return 0.0;
        }
        let denominator = (self.count - 1) as f64 + 2.0 * self.padding;
        (self.range_end - self.range_start) / denominator
    }

    /// Pixel position of the point at `index`.
    ///
    /// A single point sits in the middle of the range.
    #[must_use]
    pub fn position(self, index: usize) -> f64 {
        if self.count <= 1 {
            return (self.range_start + self.range_end) * 0.5;
        }
        let step = self.step();
        self.range_start + step * (self.padding + index as f64)
    }

    /// Index of the point nearest to `pixel`, clamped to the first/last point
    /// for pixels outside the range. `None` only for an empty domain.
    #[must_use]
    pub fn nearest_index(self, pixel: f64) -> Option<usize> {
        if self.count == 0 {
            return None;
        }
        let step = self.step();
        if self.count == 1 || step == 0.0 || !pixel.is_finite() {
            return Some(0);
        }
        let raw = ((pixel - self.range_start) / step - self.padding).round();
        let last = (self.count - 1) as f64;
        Some(raw.clamp(0.0, last) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::PointScale;

    #[test]
    fn endpoints_touch_range_without_padding() {
        let scale = PointScale::new(5).with_range(0.0, 100.0);
        assert_eq!(scale.position(0), 0.0);
        assert_eq!(scale.position(4), 100.0);
        assert_eq!(scale.position(2), 50.0);
    }

    #[test]
    fn nearest_index_rounds_and_clamps() {
        let scale = PointScale::new(5).with_range(0.0, 100.0);
        assert_eq!(scale.nearest_index(12.4), Some(0));
        assert_eq!(scale.nearest_index(12.6), Some(1));
        assert_eq!(scale.nearest_index(-50.0), Some(0));
        assert_eq!(scale.nearest_index(500.0), Some(4));
    }

    #[test]
    fn nearest_index_handles_reversed_range() {
        let scale = PointScale::new(3).with_range(100.0, 0.0);
        assert_eq!(scale.nearest_index(95.0), Some(0));
        assert_eq!(scale.nearest_index(5.0), Some(2));
    }

    #[test]
    fn empty_and_single_point_domains() {
        assert_eq!(PointScale::new(0).nearest_index(3.0), None);
        let single = PointScale::new(1).with_range(0.0, 10.0);
        assert_eq!(single.position(0), 5.0);
        assert_eq!(single.nearest_index(-3.0), Some(0));
    }
}
