use proptest::prelude::*;
use small_multiples::core::{ColumnMode, GridSpec, RowMode, calculate_grid_size};

fn column_mode() -> impl Strategy<Value = ColumnMode> {
    prop_oneof![Just(ColumnMode::ColumnCount), Just(ColumnMode::Flow)]
}

fn row_mode() -> impl Strategy<Value = RowMode> {
    prop_oneof![Just(RowMode::FitToViewport), Just(RowMode::FixedHeight)]
}

proptest! {
    #[test]
    fn grid_covers_items_without_an_empty_row(
        item_count in 0usize..400,
        width in 0.0f64..4_000.0,
        height in 0.0f64..4_000.0,
        column_mode in column_mode(),
        row_mode in row_mode(),
        column_count in proptest::option::of(1usize..=75),
        multiple_width in 40.0f64..500.0,
        spacing in 0.0f64..50.0,
        border_width in prop_oneof![Just(0.0f64), 1.0f64..5.0],
    ) {
        let spec = GridSpec {
            column_mode,
            row_mode,
            column_count,
            multiple_width,
            column_spacing: spacing,
            row_spacing: spacing,
            border_width,
            ..GridSpec::default()
        };
        let grid = calculate_grid_size(item_count, width, height, &spec);

        prop_assert!(grid.rows * grid.columns >= item_count);
        if item_count == 0 {
            prop_assert_eq!(grid.columns, 0);
            prop_assert_eq!(grid.rows, 0);
        } else {
            prop_assert!(grid.columns >= 1);
            prop_assert!(grid.columns <= item_count);
            prop_assert!(grid.rows * grid.columns < item_count + grid.columns);
        }
    }

    #[test]
    fn cells_respect_minimum_size_and_fit_their_pitch(
        item_count in 1usize..200,
        width in 0.0f64..3_000.0,
        height in 0.0f64..3_000.0,
        column_mode in column_mode(),
        row_mode in row_mode(),
        spacing in 0.0f64..50.0,
    ) {
        let spec = GridSpec {
            column_mode,
            row_mode,
            column_spacing: spacing,
            row_spacing: spacing,
            ..GridSpec::default()
        };
        let grid = calculate_grid_size(item_count, width, height, &spec);

        prop_assert!(grid.cell_outer.width >= spec.minimum_cell_size);
        prop_assert!(grid.cell_outer.height >= spec.minimum_cell_size);
        prop_assert!(grid.cell_outer.width <= grid.column_width + 1e-9);
        prop_assert!(grid.cell_outer.height <= grid.row_height + 1e-9);
    }

    #[test]
    fn flow_mode_column_count_is_monotonic_in_width(
        item_count in 1usize..200,
        width in 0.0f64..3_000.0,
        extra in 0.0f64..1_000.0,
        multiple_width in 40.0f64..500.0,
        spacing in 0.0f64..50.0,
    ) {
        let spec = GridSpec {
            column_mode: ColumnMode::Flow,
            multiple_width,
            column_spacing: spacing,
            ..GridSpec::default()
        };
        let narrow = calculate_grid_size(item_count, width, 500.0, &spec);
        let wide = calculate_grid_size(item_count, width + extra, 500.0, &spec);
        prop_assert!(wide.columns >= narrow.columns);
    }
}
