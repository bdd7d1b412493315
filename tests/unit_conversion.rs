use bell_atomizer_toolbox::{
    conversion::{convert, parse_quantity, ConversionError},
    quantity::QuantityKind,
    units::{convert_rotation, convert_volume_flow, RotationUnit, VolumeFlowUnit},
};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * b.abs().max(1.0)
}

#[test]
fn bare_numbers_use_the_practical_unit() {
    assert_eq!(parse_quantity(QuantityKind::VolumeFlow, " 60 "), Ok(60.0));
    assert_eq!(parse_quantity(QuantityKind::RotationSpeed, "5e4"), Ok(50_000.0));
}

#[test]
fn volume_flow_units() {
    let v = parse_quantity(QuantityKind::VolumeFlow, "3.6 l/h").expect("l/h");
    assert!(approx(v, 60.0), "v={v}");
    let v = parse_quantity(QuantityKind::VolumeFlow, "0.06 l/min").expect("l/min");
    assert!(approx(v, 60.0), "v={v}");
    let m3s = convert_volume_flow(
        60.0,
        VolumeFlowUnit::MilliliterPerMinute,
        VolumeFlowUnit::CubicMeterPerSecond,
    );
    assert!(approx(m3s, 1e-6));
}

#[test]
fn rotation_units() {
    let rpm = parse_quantity(QuantityKind::RotationSpeed, "500 1/s").expect("1/s");
    assert!(approx(rpm, 30_000.0));
    let omega = convert_rotation(
        50_000.0,
        RotationUnit::RevolutionPerMinute,
        RotationUnit::RadianPerSecond,
    );
    assert!(approx(omega, 5235.987_755_982_988));
    assert_eq!(
        convert_rotation(1.5, RotationUnit::RadianPerSecond, RotationUnit::RadianPerSecond),
        1.5
    );
}

#[test]
fn material_property_units() {
    let mpa_s = parse_quantity(QuantityKind::Viscosity, "0.02Pa.s").expect("Pa.s");
    assert!(approx(mpa_s, 20.0));
    let mpa_s = parse_quantity(QuantityKind::Viscosity, "20 cP").expect("cP");
    assert!(approx(mpa_s, 20.0));
    let rho = parse_quantity(QuantityKind::Density, "1.3 g/cm3").expect("g/cm3");
    assert!(approx(rho, 1300.0));
    let sigma = parse_quantity(QuantityKind::SurfaceTension, "30 dyn/cm").expect("dyn/cm");
    assert!(approx(sigma, 30.0));
}

#[test]
fn length_and_angle_units() {
    let mm = parse_quantity(QuantityKind::Length, "6 cm").expect("cm");
    assert!(approx(mm, 60.0));
    let mm = parse_quantity(QuantityKind::Length, "1 in").expect("in");
    assert!(approx(mm, 25.4));
    let deg = convert(QuantityKind::Angle, std::f64::consts::PI, "rad", "deg").expect("rad");
    assert!(approx(deg, 180.0));
}

#[test]
fn german_grad_means_degree() {
    assert_eq!(parse_quantity(QuantityKind::Angle, "55 Grad"), Ok(55.0));
    assert_eq!(parse_quantity(QuantityKind::Angle, "55 grad"), Ok(55.0));
}

#[test]
fn unknown_unit_is_reported_with_its_kind() {
    assert_eq!(
        parse_quantity(QuantityKind::SurfaceTension, "30 psi"),
        Err(ConversionError::UnknownUnit {
            kind: QuantityKind::SurfaceTension,
            unit: "psi".into()
        })
    );
}

#[test]
fn malformed_numbers_are_rejected() {
    assert_eq!(
        parse_quantity(QuantityKind::Length, ""),
        Err(ConversionError::Empty)
    );
    assert!(matches!(
        parse_quantity(QuantityKind::Length, "abc"),
        Err(ConversionError::InvalidNumber(_))
    ));
    assert!(matches!(
        parse_quantity(QuantityKind::Length, "1.2.3 mm"),
        Err(ConversionError::InvalidNumber(_))
    ));
}
