use bell_atomizer_toolbox::atomizer::{ChartAxis, InvalidInput};
use bell_atomizer_toolbox::chart::{
    map_to_pixel, operating_point, pixel_to_model, ChartCalibration, PlotArea, REFERENCE_CHART,
};

fn near(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

#[test]
fn corners_reproduce_pixel_bounds() {
    let anchor = REFERENCE_CHART.anchor_for(600, 400);
    for ((mx, my), (px, py)) in anchor.corners() {
        let (x, y) = map_to_pixel(mx, my, &anchor).expect("corner is positive");
        assert!(near(x, px, 1e-9), "x: {x} vs {px}");
        assert!(near(y, py, 1e-9), "y: {y} vs {py}");
    }
}

#[test]
fn reference_chart_has_row_zero_at_the_top() {
    let anchor = REFERENCE_CHART.anchor_for(600, 400);
    let (_, y_low) = map_to_pixel(1.0, REFERENCE_CHART.y_log_min, &anchor).expect("valid");
    let (_, y_high) = map_to_pixel(1.0, REFERENCE_CHART.y_log_max, &anchor).expect("valid");
    assert!(near(y_low, 400.0, 1e-9));
    assert!(near(y_high, 0.0, 1e-9));
}

#[test]
fn decade_steps_are_evenly_spaced() {
    let anchor = REFERENCE_CHART.anchor_for(600, 400);
    let (x1, _) = map_to_pixel(1e-3, 1.0, &anchor).expect("valid");
    let (x2, _) = map_to_pixel(1e-2, 1.0, &anchor).expect("valid");
    let (x3, _) = map_to_pixel(1e-1, 1.0, &anchor).expect("valid");
    assert!(near(x2 - x1, 100.0, 1e-9));
    assert!(near(x3 - x2, 100.0, 1e-9));
}

#[test]
fn pixel_to_model_inverts_mapping() {
    let anchor = REFERENCE_CHART.anchor_for(1234, 567);
    let (px, py) = map_to_pixel(2.5e-3, 0.4, &anchor).expect("valid");
    let (kb, b) = pixel_to_model(px, py, &anchor);
    assert!(near(kb / 2.5e-3, 1.0, 1e-9));
    assert!(near(b / 0.4, 1.0, 1e-9));
}

#[test]
fn inset_plot_area_is_respected() {
    let calibration = ChartCalibration {
        plot_area: PlotArea {
            left: 0.1,
            top: 0.05,
            right: 0.9,
            bottom: 0.85,
        },
        ..REFERENCE_CHART
    };
    let anchor = calibration.anchor_for(1000, 1000);
    let (x, y) = map_to_pixel(1e-4, 1e-2, &anchor).expect("valid");
    assert!(near(x, 100.0, 1e-9));
    assert!(near(y, 850.0, 1e-9));
}

#[test]
fn non_positive_coordinates_are_rejected() {
    let anchor = REFERENCE_CHART.anchor_for(600, 400);
    assert_eq!(
        map_to_pixel(0.0, 1.0, &anchor),
        Err(InvalidInput::ChartCoordinate {
            axis: ChartAxis::X,
            value: 0.0
        })
    );
    assert_eq!(
        map_to_pixel(1.0, -2.0, &anchor),
        Err(InvalidInput::ChartCoordinate {
            axis: ChartAxis::Y,
            value: -2.0
        })
    );
    assert!(map_to_pixel(f64::NAN, 1.0, &anchor).is_err());
}

#[test]
fn reference_operating_point_lies_above_the_chart() {
    let anchor = REFERENCE_CHART.anchor_for(600, 400);
    let point = operating_point(2.006_172_839_506e-4, 3.981_628_559_52, &anchor).expect("valid");
    assert!(!point.within_chart);
    assert!(near(point.pixel_x, 30.236_834_643_6, 1e-6));
    assert!(point.pixel_y < 0.0);
}

#[test]
fn point_inside_range_is_flagged() {
    let anchor = REFERENCE_CHART.anchor_for(600, 400);
    let point = operating_point(1e-2, 0.5, &anchor).expect("valid");
    assert!(point.within_chart);
    assert!((0.0..=600.0).contains(&point.pixel_x));
    assert!((0.0..=400.0).contains(&point.pixel_y));
}
