//! Data-set ingestion: groups flat rows into small multiples.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{
    Category, CategoryKind, CategoryValue, LineStyle, Measure, MeasureRole, MeasureSeries,
    MeasureValue, NumberFormat, SmallMultiple, Statistics, TooltipEntry,
};
use crate::error::{ChartError, ChartResult};

use super::LineSettings;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryColumn {
    pub name: String,
    pub kind: CategoryKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasureColumn {
    pub name: String,
    #[serde(default)]
    pub role: MeasureRole,
    #[serde(default)]
    pub format: NumberFormat,
    /// Overrides the palette style from [`LineSettings`].
    #[serde(default)]
    pub style: Option<LineStyle>,
}

impl MeasureColumn {
    #[must_use]
    pub fn new(name: impl Into<String>, role: MeasureRole) -> Self {
        Self {
            name: name.into(),
            role,
            format: NumberFormat::default(),
            style: None,
        }
    }
}

/// One input row: facet, category, and one value per measure column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataRow {
    pub small_multiple: String,
    pub category: CategoryValue,
    pub values: Vec<Option<f64>>,
    #[serde(default)]
    pub highlighted: bool,
    #[serde(default)]
    pub selection_id: Option<String>,
}

impl DataRow {
    #[must_use]
    pub fn new(
        small_multiple: impl Into<String>,
        category: CategoryValue,
        values: Vec<Option<f64>>,
    ) -> Self {
        Self {
            small_multiple: small_multiple.into(),
            category,
            values,
            highlighted: false,
            selection_id: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSet {
    pub category: CategoryColumn,
    pub small_multiple_column: String,
    pub measures: Vec<MeasureColumn>,
    #[serde(default)]
    pub rows: Vec<DataRow>,
}

impl DataSet {
    pub fn from_json(json: &str) -> ChartResult<Self> {
        serde_json::from_str(json).map_err(|err| ChartError::Serialization(format!("data set: {err}")))
    }
}

/// Everything rendering and layout need from the data, rebuilt on every
/// data change.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub category: Category,
    pub small_multiple_column: String,
    pub measures: Vec<Measure>,
    pub multiples: Vec<SmallMultiple>,
    pub statistics: Statistics,
}

impl ViewModel {
    pub fn plotted_measures(&self) -> impl Iterator<Item = &Measure> {
        self.measures.iter().filter(|measure| measure.is_plotted())
    }

    /// Default value-axis title: the plotted measure names.
    #[must_use]
    pub fn value_title(&self) -> String {
        self.plotted_measures()
            .map(|measure| measure.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Validates `data` and groups its rows by facet in first-occurrence order.
pub fn build_view_model(data: &DataSet, lines: &LineSettings) -> ChartResult<ViewModel> {
    if data.measures.is_empty() {
        return Err(ChartError::InvalidData(
            "data set must declare at least one measure".to_owned(),
        ));
    }
    if !data.measures.iter().any(|measure| measure.role == MeasureRole::DataPoint) {
        return Err(ChartError::InvalidData(
            "data set must declare at least one plotted measure".to_owned(),
        ));
    }

    let mut plotted_index = 0;
    let measures: Vec<Measure> = data
        .measures
        .iter()
        .map(|column| {
            let style = column.style.unwrap_or_else(|| lines.style_for(plotted_index));
            if column.role == MeasureRole::DataPoint {
                plotted_index += 1;
            }
            Measure::new(column.name.clone(), column.role)
                .with_format(column.format.clone())
                .with_style(style)
        })
        .collect();

    let mut category = Category::new(data.category.name.clone(), data.category.kind);
    let mut facets: IndexMap<&str, Vec<(usize, &DataRow)>> = IndexMap::new();
    for (row_index, row) in data.rows.iter().enumerate() {
        validate_row(row_index, row, data)?;
        let category_index = category.insert(row.category.clone());
        facets
            .entry(row.small_multiple.as_str())
            .or_default()
            .push((category_index, row));
    }

    let multiples: Vec<SmallMultiple> = facets
        .into_iter()
        .map(|(name, rows)| build_small_multiple(name, &rows, &measures))
        .collect();
    let statistics = Statistics::compute(&multiples);

    debug!(
        rows = data.rows.len(),
        multiples = multiples.len(),
        categories = category.len(),
        measures = measures.len(),
        "built view model"
    );

    Ok(ViewModel {
        category,
        small_multiple_column: data.small_multiple_column.clone(),
        measures,
        multiples,
        statistics,
    })
}

fn validate_row(row_index: usize, row: &DataRow, data: &DataSet) -> ChartResult<()> {
    if row.values.len() != data.measures.len() {
        return Err(ChartError::InvalidData(format!(
            "row {row_index} has {} values, expected {}",
            row.values.len(),
            data.measures.len()
        )));
    }
    if row.category.kind() != data.category.kind {
        return Err(ChartError::InvalidData(format!(
            "row {row_index} category is {:?}, column `{}` is {:?}",
            row.category.kind(),
            data.category.name,
            data.category.kind
        )));
    }
    if let CategoryValue::Number(number) = &row.category {
        if !number.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "row {row_index} category must be finite"
            )));
        }
    }
    if row.values.iter().flatten().any(|value| !value.is_finite()) {
        return Err(ChartError::InvalidData(format!(
            "row {row_index} values must be finite or null"
        )));
    }
    Ok(())
}

fn build_small_multiple(name: &str, rows: &[(usize, &DataRow)], measures: &[Measure]) -> SmallMultiple {
    let series = measures
        .iter()
        .enumerate()
        .filter(|(_, measure)| measure.is_plotted())
        .map(|(measure_index, _)| MeasureSeries {
            measure_index,
            values: rows
                .iter()
                .map(|(category_index, row)| MeasureValue {
                    category: row.category.clone(),
                    category_index: *category_index,
                    value: row.values[measure_index],
                    role: MeasureRole::DataPoint,
                    highlighted: row.highlighted,
                    selection_id: row.selection_id.clone(),
                    tooltip: tooltip_entries(row, measures),
                })
                .collect(),
        })
        .collect();

    SmallMultiple {
        name: name.to_owned(),
        series,
        highlighted: rows.iter().any(|(_, row)| row.highlighted),
    }
}

fn tooltip_entries(row: &DataRow, measures: &[Measure]) -> Vec<TooltipEntry> {
    measures
        .iter()
        .zip(&row.values)
        .filter(|(measure, _)| measure.role == MeasureRole::Tooltip)
        .map(|(measure, value)| TooltipEntry {
            display_name: measure.name.clone(),
            value: *value,
        })
        .collect()
}
