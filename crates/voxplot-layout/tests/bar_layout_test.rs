use voxplot_core::{MultiSeriesData, ProcessedData, SeriesData};
use voxplot_layout::axis::{MAX_VALUE_STEPS, value_steps};
use voxplot_layout::chart::MultiSeriesBarChart;
use voxplot_layout::element::{BarArgs, BarLayout};
use voxplot_layout::{
    Anchor, ColorRef, LineKind, MultiSeriesAxes, PassStage, ScatterAxes, VisualizationHandler,
};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn two_series() -> ProcessedData {
    ProcessedData::MultiSeries(MultiSeriesData::new(vec![
        SeriesData::new(100.0, vec![10.0, 20.0, 30.0]),
        SeriesData::new(200.0, vec![5.0, 15.0]),
    ]))
}

#[test]
fn bar_heights_follow_value_over_ten() {
    let layout = BarLayout::default();
    let heights: Vec<f64> = [10.0, 20.0, 30.0]
        .into_iter()
        .enumerate()
        .map(|(value_index, value)| {
            layout
                .layout(BarArgs {
                    value,
                    value_index,
                    series_index: 0,
                })
                .scale
                .y
        })
        .collect();
    assert!(close(heights[0], 1.0));
    assert!(close(heights[1], 2.0));
    assert!(close(heights[2], 3.0));
}

#[test]
fn bars_rest_on_the_floor_and_are_spaced_by_twice_their_width() {
    let layout = BarLayout::default();
    assert!(close(layout.adjusted_width(), 0.1));
    assert!(close(layout.spacing(), 0.2));

    let bar = layout.layout(BarArgs {
        value: 20.0,
        value_index: 2,
        series_index: 1,
    });
    assert!(close(bar.bottom(), 0.0));
    assert!(close(bar.position.x, 0.4));
    assert!(close(bar.position.z, 0.2));
    assert!(close(bar.scale.x, 0.1) && close(bar.scale.z, 0.1));
}

#[test]
fn tiny_and_negative_values_get_the_minimum_height() {
    let layout = BarLayout::default();
    for value in [0.0, 0.5, -40.0, f64::NAN] {
        let bar = layout.layout(BarArgs {
            value,
            value_index: 0,
            series_index: 0,
        });
        assert!(close(bar.scale.y, 0.1), "value {value}");
    }
}

#[test]
fn multi_series_pass_colors_each_series_and_fits_the_volume() {
    let data = two_series();
    let pass = MultiSeriesBarChart::default().render(&data).expect("render");

    assert_eq!(pass.primitives.len(), 5);
    assert!(pass.is_complete());
    for bar in &pass.primitives[..3] {
        assert_eq!(bar.color_index(), Some(0));
    }
    for bar in &pass.primitives[3..] {
        assert_eq!(bar.color_index(), Some(1));
    }
    assert!(
        matches!(&pass.primitives[0].color, ColorRef::Palette { name, .. } if name == "BlueGradient")
    );

    let volume = pass.volume.expect("volume");
    assert!(close(volume.center.x, 0.2));
    assert!(close(volume.center.y, 1.5));
    assert!(close(volume.center.z, 0.1));
    assert!(close(volume.size.x, 0.51));
    assert!(close(volume.size.y, 3.01));
    assert!(close(volume.size.z, 0.31));
    for bar in &pass.primitives {
        assert!(volume.contains(bar.position));
    }
    assert_eq!(pass.planes.len(), 3);
}

#[test]
fn multi_series_axes_label_values_series_and_altitudes() {
    let pass = MultiSeriesBarChart::default()
        .render(&two_series())
        .expect("render");

    let texts: Vec<&str> = pass.labels.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "0.0", "6.0", "12.0", "18.0", "24.0", "30.0", "S1", "S2", "100.0", "200.0"
        ]
    );
    assert!(pass.labels[..6].iter().all(|l| l.anchor == Anchor::MiddleRight));
    assert!(pass.labels[6..].iter().all(|l| l.anchor == Anchor::MiddleCenter));

    assert_eq!(pass.lines_of(LineKind::Axis).count(), 3);
    assert_eq!(pass.lines_of(LineKind::Gridline).count(), 6);

    let volume = pass.volume.expect("volume");
    let h = volume.half_size();
    let top = &pass.labels[5];
    assert!(close(top.position.y, volume.center.y + h.y));
    assert!(close(top.position.x, volume.center.x - h.x * 1.1));

    // Altitude 100 of max 200 sits halfway along X.
    let first_altitude = &pass.labels[8];
    assert!(close(first_altitude.position.x, volume.center.x));
    let second_altitude = &pass.labels[9];
    assert!(close(second_altitude.position.x, volume.center.x + h.x));
}

#[test]
fn single_series_label_is_centered_along_z() {
    let data = ProcessedData::MultiSeries(MultiSeriesData::new(vec![SeriesData::new(
        0.0,
        vec![10.0],
    )]));
    let pass = MultiSeriesBarChart::default().render(&data).expect("render");
    let volume = pass.volume.expect("volume");

    let series = pass
        .labels
        .iter()
        .find(|l| l.text == "S1")
        .expect("series label");
    assert!(close(series.position.z, volume.center.z));

    // Zero max altitude puts the altitude label at the start of X.
    let altitude = pass.labels.last().expect("altitude label");
    assert_eq!(altitude.text, "0.0");
    assert!(close(altitude.position.x, volume.center.x - volume.half_size().x));
}

#[test]
fn large_values_use_more_steps() {
    let data = ProcessedData::MultiSeries(MultiSeriesData::new(vec![SeriesData::new(
        1.0,
        vec![120.0],
    )]));
    let pass = MultiSeriesBarChart::default().render(&data).expect("render");
    assert_eq!(pass.lines_of(LineKind::Gridline).count(), 13);
}

#[test]
fn axis_type_mismatch_keeps_the_bars() {
    let mut chart = MultiSeriesBarChart::default().with_axis_layout(Box::new(ScatterAxes));
    let pass = chart.render(&two_series()).expect("render");

    assert_eq!(pass.primitives.len(), 5);
    assert!(pass.labels.is_empty());
    assert_eq!(pass.lines_of(LineKind::Axis).count(), 3);
    assert_eq!(pass.diagnostics.len(), 1);
    assert_eq!(pass.diagnostics[0].stage, PassStage::AxisNumbers);
    assert!(pass.diagnostics[0].message.contains("scatter_plot"));
}

#[test]
fn repeated_renders_do_not_accumulate() {
    let mut chart = MultiSeriesBarChart::default().with_axis_layout(Box::new(MultiSeriesAxes));
    let data = two_series();
    let first = chart.render(&data).expect("render");
    let second = chart.render(&data).expect("render");
    assert_eq!(first, second);
    assert_eq!(second.primitives.len(), 5);
}

#[test]
fn oversized_value_axis_is_skipped_but_bars_render() {
    let data = ProcessedData::MultiSeries(MultiSeriesData::new(vec![SeriesData::new(
        1.0,
        vec![1e12, 5.0],
    )]));
    let pass = MultiSeriesBarChart::default().render(&data).expect("render");

    assert_eq!(pass.primitives.len(), 2);
    assert!(pass.volume.is_some());
    assert!(pass.labels.is_empty());
    assert_eq!(pass.lines_of(LineKind::Gridline).count(), 0);
    assert_eq!(pass.lines_of(LineKind::Axis).count(), 3);
    assert_eq!(pass.diagnostics.len(), 1);
    assert_eq!(pass.diagnostics[0].stage, PassStage::AxisNumbers);
    assert!(pass.diagnostics[0].message.contains("limit 1000"));
}

#[test]
fn value_steps_saturate_and_the_limit_is_inclusive() {
    assert_eq!(value_steps(0.0), 5);
    assert_eq!(value_steps(10_000.0), MAX_VALUE_STEPS);
    assert_eq!(value_steps(1e300), usize::MAX);

    let data = ProcessedData::MultiSeries(MultiSeriesData::new(vec![SeriesData::new(
        1.0,
        vec![10_000.0],
    )]));
    let pass = MultiSeriesBarChart::default().render(&data).expect("render");
    assert!(pass.is_complete());
    assert_eq!(pass.lines_of(LineKind::Gridline).count(), MAX_VALUE_STEPS + 1);
}
