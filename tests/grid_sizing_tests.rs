use approx::assert_relative_eq;
use small_multiples::core::{ColumnMode, GridSpec, RowMode, calculate_grid_size, grid_position};

fn flow(multiple_width: f64, column_spacing: f64) -> GridSpec {
    GridSpec {
        column_mode: ColumnMode::Flow,
        multiple_width,
        column_spacing,
        ..GridSpec::default()
    }
}

#[test]
fn flow_mode_without_spacing_fills_one_row() {
    let grid = calculate_grid_size(4, 200.0, 300.0, &flow(50.0, 0.0));
    assert_eq!(grid.columns, 4);
    assert_eq!(grid.rows, 1);
}

#[test]
fn flow_mode_spacing_pushes_a_cell_to_the_next_row() {
    let grid = calculate_grid_size(4, 200.0, 300.0, &flow(50.0, 10.0));
    assert_eq!(grid.columns, 3);
    assert_eq!(grid.rows, 2);
    assert_relative_eq!(grid.cell_outer.width, 50.0);
}

#[test]
fn column_count_mode_uses_cap_when_unset() {
    let spec = GridSpec {
        column_cap: 20,
        ..GridSpec::default()
    };
    let grid = calculate_grid_size(10, 800.0, 300.0, &spec);
    assert_eq!((grid.columns, grid.rows), (10, 1));

    let spec = GridSpec {
        column_cap: 4,
        ..GridSpec::default()
    };
    let grid = calculate_grid_size(10, 800.0, 300.0, &spec);
    assert_eq!((grid.columns, grid.rows), (4, 3));
}

#[test]
fn explicit_column_count_wins_over_cap() {
    let spec = GridSpec {
        column_count: Some(2),
        column_cap: 20,
        ..GridSpec::default()
    };
    let grid = calculate_grid_size(5, 800.0, 300.0, &spec);
    assert_eq!((grid.columns, grid.rows), (2, 3));
}

#[test]
fn fit_to_viewport_shares_height_between_rows() {
    let spec = GridSpec {
        column_count: Some(2),
        row_mode: RowMode::FitToViewport,
        row_spacing: 10.0,
        ..GridSpec::default()
    };
    let grid = calculate_grid_size(4, 400.0, 300.0, &spec);
    assert_eq!(grid.rows, 2);
    assert_relative_eq!(grid.row_height, 150.0);
    assert_relative_eq!(grid.cell_outer.height, 140.0);
    assert_relative_eq!(grid.required_size().height, 300.0);
}

#[test]
fn fixed_height_ignores_available_height() {
    let spec = GridSpec {
        column_count: Some(3),
        row_mode: RowMode::FixedHeight,
        multiple_height: 100.0,
        row_spacing: 10.0,
        ..GridSpec::default()
    };
    let grid = calculate_grid_size(6, 600.0, 50.0, &spec);
    assert_eq!(grid.rows, 2);
    assert_relative_eq!(grid.cell_outer.height, 100.0);
    assert_relative_eq!(grid.required_size().height, 220.0);
}

#[test]
fn degenerate_inputs_never_panic() {
    for (items, width, height) in [(0, 500.0, 500.0), (3, 0.0, 0.0), (3, -10.0, f64::NAN)] {
        let grid = calculate_grid_size(items, width, height, &GridSpec::default());
        assert!(grid.columns <= items);
        assert!(grid.cell_outer.width.is_finite());
        assert!(grid.cell_outer.height.is_finite());
    }
}

#[test]
fn grid_positions_are_row_major() {
    let positions: Vec<_> = (0..5)
        .filter_map(|index| grid_position(index, 2))
        .map(|position| (position.row, position.column))
        .collect();
    assert_eq!(positions, [(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)]);
}
