use std::path::PathBuf;

use bell_atomizer_toolbox::app;
use bell_atomizer_toolbox::atomizer::{compute_all, InputParameters, InvalidInput};
use bell_atomizer_toolbox::chart::{
    provider_for_source, render_overlay, AssetUnavailable, ChartCalibration, FileImageProvider,
    ImageProvider, RasterImage, REFERENCE_CHART,
};
use bell_atomizer_toolbox::config::ChartSourceConfig;
use image::{Rgba, RgbaImage};

/// 메모리 속 이미지를 돌려주는 테스트용 공급자.
struct InMemoryProvider {
    width: u32,
    height: u32,
}

impl ImageProvider for InMemoryProvider {
    fn describe(&self) -> String {
        "in-memory".into()
    }

    fn fetch(&self) -> Result<RasterImage, AssetUnavailable> {
        RasterImage::from_rgba(RgbaImage::from_pixel(
            self.width,
            self.height,
            Rgba([255, 255, 255, 255]),
        ))
    }
}

fn inside_chart_input() -> InputParameters {
    // Kb ≈ 4.0e-4, B ≈ 1.2 → 차트 안쪽
    InputParameters {
        volume_flow_ml_min: 100.0,
        rotation_speed_rpm: 5_000.0,
        bell_diameter_mm: 65.0,
        cone_angle_deg: 55.0,
        fluid_density_kg_m3: 1200.0,
        fluid_viscosity_mpa_s: 100.0,
        surface_tension_mn_m: 30.0,
    }
}

#[test]
fn evaluation_with_injected_raster_places_marker() {
    let provider = InMemoryProvider {
        width: 600,
        height: 400,
    };
    let raster = app::load_chart(&provider).expect("in-memory raster");
    let eval = compute_all(&InputParameters::default(), Ok(&raster), &REFERENCE_CHART)
        .expect("default input is valid");
    let overlay = eval.chart.expect("chart available");
    assert_eq!((overlay.image_width, overlay.image_height), (600, 400));
    assert_eq!(overlay.calibration_version, REFERENCE_CHART.version);
    assert!((overlay.point.model_x - eval.derived.edge_loading).abs() < 1e-15);
    assert!((overlay.point.model_y - eval.derived.operating_number).abs() < 1e-12);
}

#[test]
fn overlay_records_the_calibration_used() {
    let raster = InMemoryProvider {
        width: 100,
        height: 100,
    }
    .fetch()
    .expect("raster");
    let calibration = ChartCalibration {
        version: "inset-test",
        ..REFERENCE_CHART
    };
    let eval = compute_all(&InputParameters::default(), Ok(&raster), &calibration).expect("valid");
    assert_eq!(eval.chart.expect("chart").calibration_version, "inset-test");
}

#[test]
fn numbers_survive_missing_chart() {
    let reason = AssetUnavailable::Transport("connection refused".into());
    let eval = compute_all(&InputParameters::default(), Err(&reason), &REFERENCE_CHART)
        .expect("numbers do not depend on the chart");
    assert_eq!(eval.chart, Err(reason));
    assert!(eval.derived.operating_number > 0.0);
    assert!(eval.derived.film_thickness_um > 0.0);
}

#[test]
fn invalid_input_aborts_before_the_chart() {
    let raster = InMemoryProvider {
        width: 10,
        height: 10,
    }
    .fetch()
    .expect("raster");
    let mut input = InputParameters::default();
    input.surface_tension_mn_m = 0.0;
    let result = compute_all(&input, Ok(&raster), &REFERENCE_CHART);
    assert!(matches!(result, Err(InvalidInput::NotPositive { .. })));
}

#[test]
fn chart_availability_does_not_change_the_verdict() {
    let raster = InMemoryProvider {
        width: 60,
        height: 40,
    }
    .fetch()
    .expect("raster");
    let reason = AssetUnavailable::Disabled;
    for flow in [60.0, 1e-160] {
        let mut input = InputParameters::default();
        input.volume_flow_ml_min = flow;
        let with_chart = compute_all(&input, Ok(&raster), &REFERENCE_CHART);
        let without_chart = compute_all(&input, Err(&reason), &REFERENCE_CHART);
        assert_eq!(with_chart.is_ok(), without_chart.is_ok(), "flow={flow}");
        if let (Ok(a), Ok(b)) = (&with_chart, &without_chart) {
            assert_eq!(a.derived, b.derived);
        } else {
            assert_eq!(
                with_chart.as_ref().err(),
                without_chart.as_ref().err(),
                "flow={flow}"
            );
        }
    }
}

#[test]
fn overlay_marks_a_point_inside_the_chart() {
    let raster = InMemoryProvider {
        width: 600,
        height: 400,
    }
    .fetch()
    .expect("raster");
    let eval = compute_all(&inside_chart_input(), Ok(&raster), &REFERENCE_CHART).expect("valid");
    let overlay = eval.chart.expect("chart");
    assert!(overlay.point.within_chart, "point: {:?}", overlay.point);
    let image = render_overlay(&raster, &overlay.point);
    let px = image.get_pixel(overlay.point.pixel_x as u32, overlay.point.pixel_y as u32);
    assert_ne!(*px, Rgba([255, 255, 255, 255]));
    assert_eq!(*image.get_pixel(0, 0), Rgba([255, 255, 255, 255]));
}

#[test]
fn missing_file_is_an_io_failure() {
    let provider = FileImageProvider {
        path: PathBuf::from("this/does/not/exist.jpg"),
    };
    assert!(matches!(provider.fetch(), Err(AssetUnavailable::Io(_))));
}

#[test]
fn garbage_bytes_fail_to_decode() {
    assert!(matches!(
        RasterImage::decode(b"definitely not an image"),
        Err(AssetUnavailable::Decode(_))
    ));
}

#[test]
fn empty_raster_is_rejected() {
    assert_eq!(
        RasterImage::from_rgba(RgbaImage::new(0, 5)),
        Err(AssetUnavailable::EmptyRaster)
    );
}

#[test]
fn file_provider_round_trips_a_png() {
    let path = std::env::temp_dir().join(format!("bell_chart_{}.png", std::process::id()));
    RgbaImage::from_pixel(8, 4, Rgba([10, 20, 30, 255]))
        .save(&path)
        .expect("write temp png");
    let provider = provider_for_source(
        path.to_str().expect("utf-8 temp path"),
        std::time::Duration::from_secs(1),
        1024,
    );
    let raster = provider.fetch().expect("decode png");
    assert_eq!((raster.width(), raster.height()), (8, 4));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn offline_and_disabled_sources_yield_disabled() {
    let cfg = ChartSourceConfig::default();
    let provider = app::select_provider(None, true, &cfg);
    assert_eq!(app::load_chart(provider.as_ref()).err(), Some(AssetUnavailable::Disabled));

    let cfg = ChartSourceConfig {
        enabled: false,
        ..ChartSourceConfig::default()
    };
    let provider = app::select_provider(None, false, &cfg);
    assert_eq!(provider.fetch().err(), Some(AssetUnavailable::Disabled));
}

#[test]
fn explicit_source_overrides_configuration() {
    let cfg = ChartSourceConfig {
        local_path: Some("configured.png".into()),
        ..ChartSourceConfig::default()
    };
    assert_eq!(app::select_provider(None, false, &cfg).describe(), "configured.png");
    assert_eq!(
        app::select_provider(Some("other.jpg"), false, &cfg).describe(),
        "other.jpg"
    );
    assert_eq!(
        app::select_provider(Some("https://example.org/c.jpg"), false, &cfg).describe(),
        "https://example.org/c.jpg"
    );
}
