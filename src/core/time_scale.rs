use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::LinearScale;
use crate::core::primitives::{datetime_to_unix_millis, unix_millis_to_datetime};

/// Continuous date scale.
///
/// Dates are mapped through their Unix millisecond timestamp, so the scale
/// shares the linear family and only differs in how values are formatted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    linear: LinearScale,
}

impl TimeScale {
    #[must_use]
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self::from_millis(datetime_to_unix_millis(start), datetime_to_unix_millis(end))
    }

    #[must_use]
    pub fn from_millis(start_ms: f64, end_ms: f64) -> Self {
        Self {
            linear: LinearScale::normalized(start_ms, end_ms),
        }
    }

    #[must_use]
    pub fn with_range(self, range_start: f64, range_end: f64) -> Self {
        Self {
            linear: self.linear.with_range(range_start, range_end),
        }
    }

    /// Domain as millisecond timestamps.
    #[must_use]
    pub fn domain_millis(self) -> (f64, f64) {
        self.linear.domain()
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        self.linear.range()
    }

    #[must_use]
    pub fn map(self, time: DateTime<Utc>) -> f64 {
        self.linear.map(datetime_to_unix_millis(time))
    }

    #[must_use]
    pub fn map_millis(self, millis: f64) -> f64 {
        self.linear.map(millis)
    }

    /// Maps a pixel back to a date. Returns `None` if the result falls
    /// outside chrono's representable range.
    #[must_use]
    pub fn invert(self, pixel: f64) -> Option<DateTime<Utc>> {
        unix_millis_to_datetime(self.linear.invert(pixel))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::TimeScale;

    #[test]
    fn maps_dates_linearly() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 1, 11, 0, 0, 0).unwrap();
        let mid = Utc.with_ymd_and_hms(2024, 1, 6, 0, 0, 0).unwrap();
        let scale = TimeScale::new(start, end).with_range(0.0, 200.0);

        assert_eq!(scale.map(start), 0.0);
        assert_eq!(scale.map(end), 200.0);
        assert_eq!(scale.map(mid), 100.0);
        assert_eq!(scale.invert(100.0), Some(mid));
    }
}
