use chrono::{TimeZone, Utc};
use small_multiples::api::{
    CategoryColumn, DataRow, DataSet, LineSettings, MeasureColumn, build_view_model,
};
use small_multiples::core::{CategoryKind, CategoryValue, MeasureRole};
use small_multiples::ChartError;

const DATA_JSON: &str = r#"{
    "category": { "name": "Month", "kind": "Text" },
    "small_multiple_column": "Region",
    "measures": [
        { "name": "Sales", "role": "DataPoint" },
        { "name": "Target", "role": "DataPoint" },
        { "name": "Margin", "role": "Tooltip" }
    ],
    "rows": [
        { "small_multiple": "North", "category": { "Text": "Jan" }, "values": [10.0, 12.0, 900.0] },
        { "small_multiple": "North", "category": { "Text": "Feb" }, "values": [null, 14.0, -900.0] },
        { "small_multiple": "South", "category": { "Text": "Jan" }, "values": [4.0, null, null], "highlighted": true },
        { "small_multiple": "South", "category": { "Text": "Mar" }, "values": [22.0, 18.0, 1.0], "selection_id": "s-3" }
    ]
}"#;

#[test]
fn loads_data_set_from_json() {
    let data = DataSet::from_json(DATA_JSON).expect("valid json");
    let model = build_view_model(&data, &LineSettings::default()).expect("valid data");

    assert_eq!(model.multiples.len(), 2);
    assert_eq!(model.category.len(), 3);
    assert_eq!(model.value_title(), "Sales, Target");
    assert_eq!(model.small_multiple_column, "Region");
    assert_eq!(model.plotted_measures().count(), 2);
}

#[test]
fn statistics_ignore_nulls_and_tooltip_measures() {
    let data = DataSet::from_json(DATA_JSON).expect("valid json");
    let model = build_view_model(&data, &LineSettings::default()).expect("valid data");
    assert_eq!(model.statistics.min, Some(4.0));
    assert_eq!(model.statistics.max, Some(22.0));
}

#[test]
fn nulls_stay_null_in_series() {
    let data = DataSet::from_json(DATA_JSON).expect("valid json");
    let model = build_view_model(&data, &LineSettings::default()).expect("valid data");
    let north_sales = &model.multiples[0].series[0];
    assert_eq!(north_sales.values[0].value, Some(10.0));
    assert_eq!(north_sales.values[1].value, None);
    let (first, last) = north_sales.endpoints().expect("one non-null value");
    assert_eq!(first.value, Some(10.0));
    assert_eq!(last.value, Some(10.0));
}

#[test]
fn highlight_and_selection_are_carried() {
    let data = DataSet::from_json(DATA_JSON).expect("valid json");
    let model = build_view_model(&data, &LineSettings::default()).expect("valid data");
    assert!(!model.multiples[0].highlighted);
    assert!(model.multiples[1].highlighted);
    let south = &model.multiples[1].series[0].values;
    assert_eq!(south[1].selection_id.as_deref(), Some("s-3"));
    assert_eq!(south[1].category_index, 2);
    assert_eq!(south[1].tooltip[0].value, Some(1.0));
}

#[test]
fn measures_take_palette_colours_in_plotted_order() {
    let data = DataSet::from_json(DATA_JSON).expect("valid json");
    let lines = LineSettings::default();
    let model = build_view_model(&data, &lines).expect("valid data");
    assert_eq!(model.measures[0].style.color, lines.palette[0]);
    assert_eq!(model.measures[1].style.color, lines.palette[1]);
}

#[test]
fn rejects_non_finite_values() {
    let data = DataSet {
        category: CategoryColumn {
            name: "Week".to_owned(),
            kind: CategoryKind::Numeric,
        },
        small_multiple_column: "Store".to_owned(),
        measures: vec![MeasureColumn::new("Visitors", MeasureRole::DataPoint)],
        rows: vec![DataRow::new("A", CategoryValue::number(1.0), vec![Some(f64::INFINITY)])],
    };
    let err = build_view_model(&data, &LineSettings::default()).expect_err("must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn rejects_data_without_plotted_measures() {
    let data = DataSet {
        category: CategoryColumn {
            name: "Week".to_owned(),
            kind: CategoryKind::Numeric,
        },
        small_multiple_column: "Store".to_owned(),
        measures: vec![MeasureColumn::new("Margin", MeasureRole::Tooltip)],
        rows: Vec::new(),
    };
    assert!(build_view_model(&data, &LineSettings::default()).is_err());
}

#[test]
fn date_categories_keep_data_order() {
    let day = |d: u32| {
        CategoryValue::DateTime(Utc.with_ymd_and_hms(2024, 5, d, 0, 0, 0).single().expect("date"))
    };
    let data = DataSet {
        category: CategoryColumn {
            name: "Day".to_owned(),
            kind: CategoryKind::DateTime,
        },
        small_multiple_column: "Store".to_owned(),
        measures: vec![MeasureColumn::new("Visitors", MeasureRole::DataPoint)],
        rows: vec![
            DataRow::new("A", day(9), vec![Some(1.0)]),
            DataRow::new("A", day(2), vec![Some(2.0)]),
            DataRow::new("B", day(9), vec![Some(3.0)]),
        ],
    };
    let model = build_view_model(&data, &LineSettings::default()).expect("valid data");
    assert_eq!(model.category.len(), 2);
    let (first, last) = model.category.extents().expect("non-empty");
    assert_eq!(first, &day(9));
    assert_eq!(last, &day(2));
}

#[test]
fn malformed_json_is_a_serialization_error() {
    let err = DataSet::from_json("{ not json").expect_err("must fail");
    assert!(matches!(err, ChartError::Serialization(_)));
}
