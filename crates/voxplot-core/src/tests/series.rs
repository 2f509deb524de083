use crate::*;

#[test]
fn multi_series_standardizer_defaults_missing_fields() {
    let reg = StandardizerRegistry::with_all_kinds();
    let data = reg
        .standardize(
            VisualizationKind::MultiSeriesBarChart,
            r#"{"series": [{"altitude": 1000, "values": [15, 25, 35]}, {"values": [10]}, {}]}"#,
        )
        .unwrap();
    let ms = data.as_multi_series().unwrap();
    assert_eq!(ms.series.len(), 3);
    assert_eq!(ms.series[1].altitude, 0.0);
    assert!(ms.series[2].values.is_empty());
    assert_eq!(ms.max_value(), 35.0);
    assert_eq!(ms.max_altitude(), 1000.0);
    assert_eq!(ms.value_count(), 4);
}

#[test]
fn multi_series_standardizer_requires_series_field() {
    let reg = StandardizerRegistry::with_all_kinds();
    let err = reg
        .standardize(VisualizationKind::MultiSeriesBarChart, r#"{"values": [1]}"#)
        .unwrap_err();
    assert!(err.to_string().starts_with("Data parse error (multi_series_bar_chart)"));
}

#[test]
fn stacked_standardizer_accepts_segment_alias_and_keeps_ragged_bars() {
    let reg = StandardizerRegistry::with_all_kinds();
    let data = reg
        .standardize(
            VisualizationKind::StackedMultiSeriesBarChart,
            r#"{"series": [
                {"bars": [{"segments": [3, 8, 2]}, {"segment_values": [4, 6]}]},
                {"bars": [{"segments": [1, 2, 8]}]}
            ]}"#,
        )
        .unwrap();
    let stacked = data.as_stacked_multi_series().unwrap();
    assert_eq!(stacked.series[0].bars[1].segments, vec![4.0, 6.0]);
    assert_eq!(stacked.max_stacked_total(), 13.0);
    assert_eq!(stacked.leading_bar_count(), 2);
    assert_eq!(
        stacked.segment_count_mismatches(),
        vec![SegmentCountMismatch {
            series_index: 0,
            bar_index: 1,
            expected: 3,
            found: 2,
        }]
    );
}

#[test]
fn mutation_helpers_are_available_to_callers() {
    let mut ms = MultiSeriesData::default();
    ms.push_series(SeriesData::new(0.0, vec![10.0, 20.0, 30.0]));
    assert_eq!(ms.max_value(), 30.0);
    ms.clear();
    assert_eq!(ms.max_value(), 0.0);

    let mut stacked = StackedMultiSeriesData::default();
    stacked.push_series(StackedSeriesData::new(vec![StackedBarData::new(vec![1.0, 2.0])]));
    assert_eq!(stacked.max_stacked_total(), 3.0);
    stacked.clear();
    assert_eq!(stacked.leading_bar_count(), 0);
}

#[test]
fn processed_data_reports_its_kind() {
    let data: ProcessedData = MultiSeriesData::default().into();
    assert_eq!(data.kind(), VisualizationKind::MultiSeriesBarChart);
    assert!(data.as_scatter().is_none());
    assert!(data.as_multi_series().is_some());

    let json = serde_json::to_value(&data).unwrap();
    assert_eq!(json["kind"], "multi_series_bar_chart");
}
