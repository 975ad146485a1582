//! Number/date formatting used for axis labels and tooltips.
//!
//! Layout only cares about the length of the produced strings, so hosts can
//! plug their own locale-aware implementation through [`ValueFormatter`].

use std::fmt::Debug;

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use crate::core::CategoryValue;
use crate::core::primitives::{round_to_precision, unix_millis_to_datetime};

pub const DEFAULT_DATE_PATTERN: &str = "%Y-%m-%d";

/// Formatter capability: turns a number into display text.
pub trait ValueFormatter: Debug + Send + Sync {
    fn format(&self, value: f64) -> String;
}

/// Scaling applied before formatting a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DisplayUnits {
    /// Picks a unit from the magnitude of the reference value.
    #[default]
    Auto,
    None,
    Thousands,
    Millions,
    Billions,
    Trillions,
}

impl DisplayUnits {
    fn resolve(self, reference: f64) -> Self {
        if self != Self::Auto {
            return self;
        }
        let magnitude = if reference.is_finite() {
            reference.abs()
        } else {
            0.0
        };
        if magnitude >= 1e12 {
            Self::Trillions
        } else if magnitude >= 1e9 {
            Self::Billions
        } else if magnitude >= 1e6 {
            Self::Millions
        } else if magnitude >= 1e3 {
            Self::Thousands
        } else {
            Self::None
        }
    }

    fn divisor_and_suffix(self) -> (f64, &'static str) {
        match self {
            Self::Auto | Self::None => (1.0, ""),
            Self::Thousands => (1e3, "K"),
            Self::Millions => (1e6, "M"),
            Self::Billions => (1e9, "bn"),
            Self::Trillions => (1e12, "T"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct NumberFormat {
    #[serde(default)]
    pub display_units: DisplayUnits,
    /// Decimal places; `None` lets the formatter decide.
    #[serde(default)]
    pub precision: Option<u8>,
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub suffix: String,
    /// Value used to resolve [`DisplayUnits::Auto`], usually the largest
    /// absolute axis bound.
    #[serde(default)]
    pub reference: f64,
}

impl NumberFormat {
    #[must_use]
    pub fn with_precision(mut self, precision: u8) -> Self {
        self.precision = Some(precision);
        self
    }

    #[must_use]
    pub fn with_display_units(mut self, display_units: DisplayUnits) -> Self {
        self.display_units = display_units;
        self
    }

    #[must_use]
    pub fn with_reference(mut self, reference: f64) -> Self {
        self.reference = reference;
        self
    }
}

impl ValueFormatter for NumberFormat {
    fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }
        let units = self.display_units.resolve(self.reference);
        let (divisor, unit_suffix) = units.divisor_and_suffix();
        let scaled = value / divisor;
        let precision = match self.precision {
            Some(precision) => usize::from(precision),
            None if units != DisplayUnits::None => 1,
            None if scaled.fract() == 0.0 => 0,
            None => 2,
        };
        let mut rounded = round_to_precision(scaled, precision as u32);
        if rounded == 0.0 {
            // Avoid "-0".
            rounded = 0.0;
        }
        format!(
            "{}{rounded:.precision$}{unit_suffix}{}",
            self.prefix, self.suffix
        )
    }
}

/// `chrono` strftime formatter over Unix millisecond timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateFormat {
    pub pattern: String,
}

impl Default for DateFormat {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_DATE_PATTERN.to_owned(),
        }
    }
}

impl DateFormat {
    #[must_use]
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    #[must_use]
    pub fn is_valid_pattern(pattern: &str) -> bool {
        !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
    }
}

impl ValueFormatter for DateFormat {
    fn format(&self, value: f64) -> String {
        let Some(time) = unix_millis_to_datetime(value) else {
            return value.to_string();
        };
        let pattern = if Self::is_valid_pattern(&self.pattern) {
            self.pattern.as_str()
        } else {
            DEFAULT_DATE_PATTERN
        };
        time.format(pattern).to_string()
    }
}

/// Formats category values by kind.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CategoryFormatter {
    pub number: NumberFormat,
    pub date: DateFormat,
}

impl CategoryFormatter {
    #[must_use]
    pub fn format(&self, value: &CategoryValue) -> String {
        match value {
            CategoryValue::Number(number) => self.number.format(number.into_inner()),
            CategoryValue::DateTime(_) => value
                .as_continuous()
                .map(|millis| self.date.format(millis))
                .unwrap_or_default(),
            CategoryValue::Text(text) => text.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::{CategoryFormatter, DateFormat, DisplayUnits, NumberFormat, ValueFormatter};
    use crate::core::CategoryValue;

    #[test]
    fn auto_units_follow_reference_magnitude() {
        let format = NumberFormat::default().with_reference(2_500_000.0);
        assert_eq!(format.format(1_250_000.0), "1.3M");
        assert_eq!(format.format(0.0), "0.0M");
    }

    #[test]
    fn explicit_precision_rounds_half_away_from_zero() {
        let format = NumberFormat::default()
            .with_display_units(DisplayUnits::None)
            .with_precision(2);
        assert_eq!(format.format(1.125), "1.13");
        assert_eq!(format.format(-0.001), "0.00");
    }

    #[test]
    fn integers_drop_decimals_without_units() {
        let format = NumberFormat::default();
        assert_eq!(format.format(42.0), "42");
        assert_eq!(format.format(4.25), "4.25");
    }

    #[test]
    fn invalid_date_pattern_falls_back_to_default() {
        let millis = Utc
            .with_ymd_and_hms(2024, 3, 5, 0, 0, 0)
            .unwrap()
            .timestamp_millis() as f64;
        assert_eq!(DateFormat::new("%Y %").format(millis), "2024-03-05");
        assert_eq!(DateFormat::new("%d/%m").format(millis), "05/03");
    }

    #[test]
    fn category_formatter_passes_text_through() {
        let formatter = CategoryFormatter::default();
        assert_eq!(formatter.format(&CategoryValue::text("North")), "North");
        assert_eq!(formatter.format(&CategoryValue::number(3.0)), "3");
    }
}
