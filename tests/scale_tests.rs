use approx::assert_relative_eq;
use chrono::{TimeZone, Utc};
use small_multiples::api::{VisualSettings, resolve_value_domain};
use small_multiples::core::{
    AxisScale, Category, CategoryKind, CategoryValue, LinearScale, PointScale, Statistics,
    evenly_spaced_ticks,
};

fn text_category(values: &[&str]) -> Category {
    let mut category = Category::new("Month", CategoryKind::Text);
    for value in values {
        category.insert(CategoryValue::text(*value));
    }
    category
}

#[test]
fn linear_scale_rejects_degenerate_domains() {
    assert!(LinearScale::new(1.0, 1.0).is_err());
    assert!(LinearScale::new(f64::NAN, 1.0).is_err());
    let widened = LinearScale::normalized(5.0, 5.0);
    assert_eq!(widened.domain(), (4.0, 6.0));
}

#[test]
fn value_scale_maps_upwards_in_pixels() {
    let scale = LinearScale::normalized(0.0, 100.0).with_range(200.0, 0.0);
    assert_relative_eq!(scale.map(0.0), 200.0);
    assert_relative_eq!(scale.map(25.0), 150.0);
    assert_relative_eq!(scale.invert(150.0), 25.0);
}

#[test]
fn evenly_spaced_ticks_include_both_bounds() {
    assert_eq!(evenly_spaced_ticks((0.0, 100.0), 3), vec![0.0, 50.0, 100.0]);
    assert_eq!(evenly_spaced_ticks((0.0, 100.0), 1), vec![0.0]);
    assert!(evenly_spaced_ticks((0.0, 100.0), 0).is_empty());
}

#[test]
fn text_categories_use_a_point_scale_in_data_order() {
    let category = text_category(&["Mar", "Jan", "Feb"]);
    let scale = AxisScale::for_category(&category, 100.0);
    assert!(matches!(scale, AxisScale::Point(_)));
    assert_eq!(scale.position(&category, 0), Some(0.0));
    assert_eq!(scale.position(&category, 2), Some(100.0));
    assert_eq!(category.extents().map(|(first, _)| first.clone()), Some(CategoryValue::text("Mar")));
}

#[test]
fn point_scale_lookup_clamps_outside_the_range() {
    let category = text_category(&["A", "B", "C", "D"]);
    let scale = AxisScale::for_category(&category, 90.0);
    assert_eq!(scale.nearest_index(&category, -500.0), Some(0));
    assert_eq!(scale.nearest_index(&category, 29.0), Some(1));
    assert_eq!(scale.nearest_index(&category, 46.0), Some(2));
    assert_eq!(scale.nearest_index(&category, 10_000.0), Some(3));
    assert_eq!(
        scale.nearest_value(&category, 61.0),
        Some(&CategoryValue::text("C"))
    );
}

#[test]
fn point_scale_padding_moves_points_inwards() {
    let scale = PointScale::new(3).with_range(0.0, 100.0).with_padding(0.5);
    assert_relative_eq!(scale.position(0), 100.0 / 6.0, epsilon = 1e-9);
    assert_relative_eq!(scale.position(2), 500.0 / 6.0, epsilon = 1e-9);
    assert_eq!(scale.nearest_index(0.0), Some(0));
}

#[test]
fn numeric_categories_map_continuously() {
    let mut category = Category::new("Week", CategoryKind::Numeric);
    for value in [1.0, 2.0, 5.0] {
        category.insert(CategoryValue::number(value));
    }
    let scale = AxisScale::for_category(&category, 400.0);
    assert!(matches!(scale, AxisScale::Linear(_)));
    assert_relative_eq!(scale.position(&category, 1).expect("in domain"), 100.0);
    assert_eq!(scale.nearest_index(&category, 240.0), Some(1));
    assert_eq!(scale.nearest_index(&category, 320.0), Some(2));
}

#[test]
fn date_categories_use_a_time_scale() {
    let mut category = Category::new("Day", CategoryKind::DateTime);
    for day in [1, 11, 21] {
        let time = Utc.with_ymd_and_hms(2024, 3, day, 0, 0, 0).single().expect("valid date");
        category.insert(CategoryValue::DateTime(time));
    }
    let scale = AxisScale::for_category(&category, 200.0);
    assert!(matches!(scale, AxisScale::Time(_)));
    assert_relative_eq!(scale.position(&category, 1).expect("in domain"), 100.0);
}

#[test]
fn explicit_zero_start_is_not_the_same_as_unset() {
    let statistics = Statistics {
        min: Some(20.0),
        max: Some(80.0),
        ..Statistics::default()
    };
    let mut settings = VisualSettings::default().value_axis;

    settings.start = Some(0.0);
    let (start, _) = resolve_value_domain(&statistics, &settings).domain();
    assert_eq!(start, 0.0);

    settings.start = None;
    let (start, end) = resolve_value_domain(&statistics, &settings).domain();
    assert_eq!(start, 20.0);
    assert_eq!(end, 80.0);
}

#[test]
fn explicit_bounds_are_kept_exactly() {
    let statistics = Statistics {
        min: Some(3.3),
        max: Some(97.7),
        ..Statistics::default()
    };
    let mut settings = VisualSettings::default().value_axis;
    settings.start = Some(-7.5);
    settings.end = Some(103.25);
    assert_eq!(resolve_value_domain(&statistics, &settings).domain(), (-7.5, 103.25));
}
