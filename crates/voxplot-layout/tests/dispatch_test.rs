use voxplot_core::{MultiSeriesData, ProcessedData, SeriesData, VisualizationKind};
use voxplot_layout::{Error, LayoutConfig, VisualizationDispatcher, VisualizationHandler};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn default_dispatcher_handles_every_kind() {
    let dispatcher = VisualizationDispatcher::default();
    for kind in VisualizationKind::ALL {
        let handler = dispatcher.create(kind).expect("handler");
        assert_eq!(handler.kind(), kind);
    }
    let handler = dispatcher.create_for_tag("pie_chart").expect("handler");
    assert_eq!(handler.kind(), VisualizationKind::PieChart);
}

#[test]
fn unknown_or_unregistered_kinds_are_unsupported() {
    let dispatcher = VisualizationDispatcher::default();
    let err = dispatcher.create_for_tag("radar_chart").unwrap_err();
    assert!(matches!(
        err,
        Error::Core(voxplot_core::Error::UnsupportedKind { .. })
    ));

    let mut dispatcher = VisualizationDispatcher::empty(LayoutConfig::default());
    assert!(dispatcher.create(VisualizationKind::PieChart).is_err());
    dispatcher.insert(VisualizationKind::PieChart, |config| {
        Box::new(voxplot_layout::chart::PieChart::new(config))
    });
    assert!(dispatcher.contains(VisualizationKind::PieChart));
    assert!(dispatcher.create(VisualizationKind::PieChart).is_ok());
}

#[test]
fn handler_rejects_the_wrong_variant() {
    let dispatcher = VisualizationDispatcher::default();
    let mut pie = dispatcher.create(VisualizationKind::PieChart).expect("handler");
    let data = ProcessedData::MultiSeries(MultiSeriesData::new(vec![SeriesData::new(
        1.0,
        vec![1.0],
    )]));
    let err = pie.render(&data).unwrap_err();
    assert!(matches!(
        err,
        Error::TypeMismatch {
            expected: VisualizationKind::PieChart,
            found: VisualizationKind::MultiSeriesBarChart
        }
    ));
}

#[test]
fn config_overrides_flow_into_layouts() {
    let config = LayoutConfig::from_json_str(r#"{ "bar": { "base_width": 1.0 } }"#).expect("config");
    assert!(close(config.bar.base_width, 1.0));
    assert!(close(config.bar.scaling_factor, 0.2));
    assert!(close(config.pie.radius, 0.3));

    let dispatcher = VisualizationDispatcher::with_config(config);
    let data = ProcessedData::MultiSeries(MultiSeriesData::new(vec![SeriesData::new(
        1.0,
        vec![10.0],
    )]));
    let pass = dispatcher.render(&data).expect("render");
    assert!(close(pass.primitives[0].scale.x, 0.2));
}

#[test]
fn invalid_config_is_reported() {
    let err = LayoutConfig::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}
