use chrono::{DateTime, Utc};
use indexmap::IndexSet;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::primitives::datetime_to_unix_millis;

/// Declared type of the category (x-axis) column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CategoryKind {
    Numeric,
    DateTime,
    /// Text categories are placed on a point scale in occurrence order.
    #[default]
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryValue {
    Number(OrderedFloat<f64>),
    DateTime(DateTime<Utc>),
    Text(String),
}

impl CategoryValue {
    #[must_use]
    pub fn number(value: f64) -> Self {
        Self::Number(OrderedFloat(value))
    }

    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    #[must_use]
    pub fn kind(&self) -> CategoryKind {
        match self {
            Self::Number(_) => CategoryKind::Numeric,
            Self::DateTime(_) => CategoryKind::DateTime,
            Self::Text(_) => CategoryKind::Text,
        }
    }

    /// Continuous coordinate of the value: the number itself, or the Unix
    /// millisecond timestamp for dates. Text has no continuous coordinate.
    #[must_use]
    pub fn as_continuous(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(value.into_inner()),
            Self::DateTime(time) => Some(datetime_to_unix_millis(*time)),
            Self::Text(_) => None,
        }
    }
}

/// Shared x-axis domain for every small multiple.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub kind: CategoryKind,
    values: IndexSet<CategoryValue>,
}

impl Category {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: CategoryKind) -> Self {
        Self {
            name: name.into(),
            kind,
            values: IndexSet::new(),
        }
    }

    /// Records a value, keeping the first-occurrence order. Returns its index.
    pub fn insert(&mut self, value: CategoryValue) -> usize {
        self.values.insert_full(value).0
    }

    #[must_use]
    pub fn values(&self) -> &IndexSet<CategoryValue> {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CategoryValue> {
        self.values.get_index(index)
    }

    #[must_use]
    pub fn index_of(&self, value: &CategoryValue) -> Option<usize> {
        self.values.get_index_of(value)
    }

    /// First and last values in data order. These are not sorted: a point
    /// axis keeps the source order, and continuous axes take the data's own
    /// first/last as their domain.
    #[must_use]
    pub fn extents(&self) -> Option<(&CategoryValue, &CategoryValue)> {
        Some((self.values.first()?, self.values.last()?))
    }
}

#[cfg(test)]
mod tests {
    use super::{Category, CategoryKind, CategoryValue};

    #[test]
    fn extents_follow_data_order_not_sort_order() {
        let mut category = Category::new("Month", CategoryKind::Text);
        for name in ["Mar", "Jan", "Feb", "Jan"] {
            category.insert(CategoryValue::text(name));
        }

        assert_eq!(category.len(), 3);
        let (first, last) = category.extents().expect("extents");
        assert_eq!(first, &CategoryValue::text("Mar"));
        assert_eq!(last, &CategoryValue::text("Feb"));
    }

    #[test]
    fn numeric_values_deduplicate() {
        let mut category = Category::new("x", CategoryKind::Numeric);
        assert_eq!(category.insert(CategoryValue::number(2.0)), 0);
        assert_eq!(category.insert(CategoryValue::number(1.0)), 1);
        assert_eq!(category.insert(CategoryValue::number(2.0)), 0);
        assert_eq!(category.index_of(&CategoryValue::number(1.0)), Some(1));
    }
}
