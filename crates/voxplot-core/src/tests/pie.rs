use crate::*;
use proptest::prelude::*;

fn standardize(raw: &str) -> Result<ProcessedData> {
    StandardizerRegistry::with_all_kinds().standardize(VisualizationKind::PieChart, raw)
}

#[test]
fn pie_standardizer_keeps_slice_order() {
    let data = standardize(
        r#"{"slices": [{"label": "Slice A", "value": 10}, {"label": "Slice B", "value": 70}, {"label": "Slice C", "value": 20}]}"#,
    )
    .unwrap();
    let pie = data.as_pie_chart().unwrap();
    let labels: Vec<&str> = pie.slices.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["Slice A", "Slice B", "Slice C"]);
    assert_eq!(pie.total(), 100.0);
    assert_eq!(pie.angle_sizes().unwrap(), vec![36.0, 252.0, 72.0]);
}

#[test]
fn pie_standardizer_rejects_zero_total() {
    for raw in [
        r#"{"slices": []}"#,
        r#"{"slices": [{"label": "a", "value": 0}, {"label": "b", "value": 0}]}"#,
    ] {
        let err = standardize(raw).unwrap_err();
        assert!(
            matches!(err, Error::DegenerateInput { kind: VisualizationKind::PieChart, .. }),
            "{raw}: {err}"
        );
    }
}

#[test]
fn pie_standardizer_rejects_negative_values() {
    let err = standardize(r#"{"slices": [{"label": "dogs", "value": -60.67}, {"label": "rats", "value": 40.12}]}"#)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Degenerate input (pie_chart): \"dogs\" has invalid value: -60.67. Slice values must be >= 0."
    );
}

#[test]
fn pie_angles_are_undefined_without_positive_total() {
    assert!(PieChartData::default().angle_sizes().is_none());
}

proptest! {
    #[test]
    fn prop_pie_angles_sum_to_full_turn(values in prop::collection::vec(0.0f64..1.0e4, 1..32)) {
        let mut pie = PieChartData::default();
        for (i, v) in values.iter().enumerate() {
            pie.push_slice(PieSliceData::new(format!("s{i}"), *v));
        }
        prop_assume!(pie.total() > 0.0);
        let sum: f64 = pie.angle_sizes().unwrap().iter().sum();
        prop_assert!((sum - 360.0).abs() < 1e-9);
    }
}
