use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};

/// Rounds half away from zero to `precision` decimal places.
///
/// Values `rust_decimal` cannot represent (very large magnitudes) are returned
/// unchanged.
#[must_use]
pub fn round_to_precision(value: f64, precision: u32) -> f64 {
    Decimal::from_f64(value)
        .map(|decimal| {
            decimal.round_dp_with_strategy(
                precision,
                rust_decimal::RoundingStrategy::MidpointAwayFromZero,
            )
        })
        .and_then(|rounded| rounded.to_f64())
        .unwrap_or(value)
}

#[must_use]
pub fn datetime_to_unix_millis(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64
}

#[must_use]
pub fn unix_millis_to_datetime(millis: f64) -> Option<DateTime<Utc>> {
    if !millis.is_finite() {
        return None;
    }
    DateTime::<Utc>::from_timestamp_millis(millis.round() as i64)
}
