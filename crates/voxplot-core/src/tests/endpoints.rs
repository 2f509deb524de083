use crate::*;

#[test]
fn local_defaults_cover_served_kinds_only() {
    let table = EndpointTable::local_defaults();
    assert_eq!(
        table.resolve(VisualizationKind::ScatterPlot),
        "http://127.0.0.1:8000/scatterplot/data"
    );
    assert_eq!(
        table.resolve(VisualizationKind::HeatMapUsingBars),
        "http://127.0.0.1:8001/graph/heatmap-using-bars"
    );
    assert_eq!(table.resolve(VisualizationKind::MultiSeriesBarChart), "");

    let err = table
        .require(VisualizationKind::StackedMultiSeriesBarChart)
        .unwrap_err();
    assert!(matches!(err, Error::MissingEndpoint { .. }));
    assert!(!err.is_retryable());
}

#[test]
fn endpoint_table_loads_from_json_and_merges() {
    let overrides = EndpointTable::from_json_str(
        r#"{"multi_series_bar_chart": "http://data.local/bars", "pie_chart": "http://data.local/pie"}"#,
    )
    .unwrap();
    let mut table = EndpointTable::local_defaults();
    table.merge(&overrides);
    assert_eq!(
        table.require(VisualizationKind::MultiSeriesBarChart).unwrap(),
        "http://data.local/bars"
    );
    assert_eq!(table.resolve(VisualizationKind::PieChart), "http://data.local/pie");
    assert_eq!(table.iter().count(), 4);

    assert!(matches!(
        EndpointTable::from_json_str(r#"{"bar_chart": "x"}"#),
        Err(Error::Config(_))
    ));
}
