use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Continuous domain-to-pixel mapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start: 0.0,
            range_end: 1.0,
        })
    }

    /// Builds a scale that never fails.
    ///
    /// Non-finite bounds fall back to `[0, 1]`; a zero-width domain is widened
    /// by one unit on each side so a single distinct value still maps to the
    /// middle of the range.
    #[must_use]
    pub fn normalized(domain_start: f64, domain_end: f64) -> Self {
        let (start, end) = normalize_domain(domain_start, domain_end);
        Self {
            domain_start: start,
            domain_end: end,
            range_start: 0.0,
            range_end: 1.0,
        }
    }

    #[must_use]
    pub fn with_range(mut self, range_start: f64, range_end: f64) -> Self {
        self.range_start = range_start;
        self.range_end = range_end;
        self
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    /// Inverse of [`LinearScale::map`]. A zero-width range maps to the domain start.
    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let range_span = self.range_end - self.range_start;
        if range_span == 0.0 {
            return self.domain_start;
        }
        let normalized = (pixel - self.range_start) / range_span;
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }

    /// Extends the domain outwards to round step boundaries for `tick_count` ticks.
    ///
    /// `keep_start`/`keep_end` pin a bound so explicit overrides survive niceing.
    #[must_use]
    pub fn nice(self, tick_count: usize, keep_start: bool, keep_end: bool) -> Self {
        let (low, high) = if self.domain_start <= self.domain_end {
            (self.domain_start, self.domain_end)
        } else {
            (self.domain_end, self.domain_start)
        };
        let step = nice_step((high - low) / tick_count.max(1) as f64);
        if step == 0.0 {
            return self;
        }
        let nice_low = (low / step).floor() * step;
        let nice_high = (high / step).ceil() * step;
        let (mut start, mut end) = if self.domain_start <= self.domain_end {
            (nice_low, nice_high)
        } else {
            (nice_high, nice_low)
        };
        if keep_start {
            start = self.domain_start;
        }
        if keep_end {
            end = self.domain_end;
        }
        if start == end || !start.is_finite() || !end.is_finite() {
            return self;
        }
        Self {
            domain_start: start,
            domain_end: end,
            ..self
        }
    }
}

pub(crate) fn normalize_domain(start: f64, end: f64) -> (f64, f64) {
    match (start.is_finite(), end.is_finite()) {
        (true, true) if start != end => (start, end),
        (true, true) => (start - 1.0, end + 1.0),
        (true, false) => (start - 1.0, start + 1.0),
        (false, true) => (end - 1.0, end + 1.0),
        (false, false) => (0.0, 1.0),
    }
}

fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    let base = 10_f64.powf(power);
    let error = step / base;
    let nice = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    nice * base
}

/// Returns `tick_count` evenly spaced values from `range.0` to `range.1`, both ends included.
#[must_use]
pub fn evenly_spaced_ticks(range: (f64, f64), tick_count: usize) -> Vec<f64> {
    if tick_count == 0 {
        return Vec::new();
    }

    if tick_count == 1 {
        return vec![range.0];
    }

    let span = range.1 - range.0;
    let denominator = (tick_count - 1) as f64;
    (0..tick_count)
        .map(|index| {
            let ratio = (index as f64) / denominator;
            range.0 + span * ratio
        })
        .collect()
}
