use crate::*;
use proptest::prelude::*;

#[test]
fn grid_dimensions_for_small_counts() {
    let cases = [(0, 0, 0), (1, 1, 1), (2, 2, 1), (3, 2, 2), (5, 3, 2), (9, 3, 3), (10, 4, 3)];
    for (count, width, height) in cases {
        let g = GridDimensions::for_count(count);
        assert_eq!((g.width, g.height), (width, height), "count={count}");
    }
}

#[test]
fn grid_slots_are_column_major() {
    let g = GridDimensions::for_count(5);
    assert_eq!(g.slot(0), Some((0, 0)));
    assert_eq!(g.slot(1), Some((0, 1)));
    assert_eq!(g.slot(2), Some((1, 0)));
    assert_eq!(g.slot(4), Some((2, 0)));
    assert_eq!(g.slot(6), None);
}

#[test]
fn heat_map_standardizer_accepts_cells_and_empty_lists() {
    let reg = StandardizerRegistry::with_all_kinds();
    let data = reg
        .standardize(
            VisualizationKind::HeatMapUsingBars,
            r#"{"cells": [{"x": 0, "z": 0, "intensity": 0.2}, {"x": 1, "z": 0, "intensity": 1.7}]}"#,
        )
        .unwrap();
    let heat = data.as_heat_map().unwrap();
    assert_eq!(heat.cells.len(), 2);
    assert_eq!(heat.cells[1], HeatMapCell::new(1, 0, 1.7));

    let empty = reg
        .standardize(VisualizationKind::HeatMapUsingBars, r#"{"cells": []}"#)
        .unwrap();
    assert_eq!(empty.as_heat_map().unwrap().grid().capacity(), 0);
}

#[test]
fn heat_map_standardizer_rejects_negative_coordinates() {
    let reg = StandardizerRegistry::with_all_kinds();
    let err = reg
        .standardize(
            VisualizationKind::HeatMapUsingBars,
            r#"{"cells": [{"x": -1, "z": 0, "intensity": 0.2}]}"#,
        )
        .unwrap_err();
    assert!(matches!(err, Error::Parse { .. }));
}

proptest! {
    #[test]
    fn prop_grid_holds_every_cell(count in 0usize..10_000) {
        let g = GridDimensions::for_count(count);
        prop_assert!(g.capacity() >= count);
        if count > 0 {
            prop_assert_eq!(g.width, (count as f64).sqrt().ceil() as usize);
            prop_assert_eq!(g.height, count.div_ceil(g.width));
            prop_assert!(g.slot(count - 1).is_some());
        }
    }
}
