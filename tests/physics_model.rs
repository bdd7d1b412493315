use bell_atomizer_toolbox::atomizer::{
    compute_derived, to_si, DerivedQuantity, InputField, InputParameters, InvalidInput,
};

fn close(actual: f64, expected: f64, rel: f64) -> bool {
    ((actual - expected) / expected).abs() <= rel
}

fn reference_input() -> InputParameters {
    InputParameters {
        volume_flow_ml_min: 60.0,
        rotation_speed_rpm: 50_000.0,
        bell_diameter_mm: 60.0,
        cone_angle_deg: 55.0,
        fluid_density_kg_m3: 1300.0,
        fluid_viscosity_mpa_s: 20.0,
        surface_tension_mn_m: 30.0,
    }
}

#[test]
fn reference_scenario_matches_hand_calculation() {
    let si = to_si(&reference_input()).expect("valid input");
    let d = compute_derived(&si).expect("finite result");
    assert!(close(d.angular_velocity_rad_s, 5235.987_755_982_988, 1e-9));
    assert!(close(d.rim_speed_m_s, 157.079_632_679_489_6, 1e-9));
    assert!(close(d.film_thickness_um, 7.136_324_426_628, 1e-6), "delta={}", d.film_thickness_um);
    assert!(close(d.ohnesorge, 1.307_440_900_921e-2, 1e-6), "Oh={}", d.ohnesorge);
    assert!(close(d.edge_loading, 2.006_172_839_506e-4, 1e-6), "Kb={}", d.edge_loading);
    assert!(close(d.weber, 2.566_097_144_283e8, 1e-6), "We={}", d.weber);
    assert!(close(d.operating_number, 3.981_628_559_52, 1e-6), "B={}", d.operating_number);
}

#[test]
fn si_conversion_of_reference_input() {
    let si = to_si(&reference_input()).expect("valid input");
    assert!(close(si.volume_flow_m3_s(), 1e-6, 1e-12));
    assert!(close(si.diameter_m(), 0.06, 1e-12));
    assert!(close(si.viscosity_pa_s(), 0.02, 1e-12));
    assert!(close(si.surface_tension_n_m(), 0.03, 1e-12));
    assert_eq!(si.density_kg_m3(), 1300.0);
    assert_eq!(si.cone_angle_deg(), 55.0);
}

#[test]
fn repeated_evaluation_is_bit_identical() {
    let si = to_si(&reference_input()).expect("valid input");
    let a = compute_derived(&si).expect("finite");
    let b = compute_derived(&si).expect("finite");
    assert_eq!(a.operating_number.to_bits(), b.operating_number.to_bits());
    assert_eq!(a.film_thickness_um.to_bits(), b.film_thickness_um.to_bits());
    assert_eq!(a, b);
}

#[test]
fn results_are_positive_over_a_parameter_sweep() {
    for flow in [1.0, 60.0, 500.0] {
        for rpm in [1_000.0, 30_000.0, 70_000.0] {
            for cone in [1.0, 55.0, 179.0] {
                let mut input = reference_input();
                input.volume_flow_ml_min = flow;
                input.rotation_speed_rpm = rpm;
                input.cone_angle_deg = cone;
                let d = compute_derived(&to_si(&input).expect("valid")).expect("finite");
                for v in [
                    d.film_thickness_um,
                    d.ohnesorge,
                    d.edge_loading,
                    d.weber,
                    d.operating_number,
                ] {
                    assert!(v.is_finite() && v > 0.0, "flow={flow} rpm={rpm} cone={cone}");
                }
            }
        }
    }
}

#[test]
fn doubling_flow_quadruples_edge_loading() {
    let base = compute_derived(&to_si(&reference_input()).expect("valid")).expect("finite");
    let mut doubled = reference_input();
    doubled.volume_flow_ml_min *= 2.0;
    let d = compute_derived(&to_si(&doubled).expect("valid")).expect("finite");
    assert!(close(d.edge_loading, base.edge_loading * 4.0, 1e-12));
    assert_eq!(d.weber, base.weber);
    assert_eq!(d.ohnesorge, base.ohnesorge);
}

#[test]
fn higher_surface_tension_lowers_weber_and_edge_loading() {
    let base = compute_derived(&to_si(&reference_input()).expect("valid")).expect("finite");
    let mut stiff = reference_input();
    stiff.surface_tension_mn_m = 60.0;
    let d = compute_derived(&to_si(&stiff).expect("valid")).expect("finite");
    assert!(d.weber < base.weber);
    assert!(d.edge_loading < base.edge_loading);
    assert!(d.ohnesorge < base.ohnesorge);
    assert_eq!(d.film_thickness_um, base.film_thickness_um);
}

#[test]
fn cone_angle_bounds_are_rejected() {
    for angle in [0.0, 180.0, -10.0, 200.0] {
        let mut input = reference_input();
        input.cone_angle_deg = angle;
        assert_eq!(
            to_si(&input),
            Err(InvalidInput::ConeAngleOutOfRange { value: angle })
        );
    }
}

#[test]
fn zero_rotation_and_negative_density_are_rejected() {
    let mut input = reference_input();
    input.rotation_speed_rpm = 0.0;
    let err = to_si(&input).unwrap_err();
    assert_eq!(err.field(), Some(InputField::RotationSpeed));

    let mut input = reference_input();
    input.fluid_density_kg_m3 = -1300.0;
    assert_eq!(
        to_si(&input),
        Err(InvalidInput::NotPositive {
            field: InputField::FluidDensity,
            value: -1300.0
        })
    );
}

#[test]
fn nan_and_infinity_are_rejected() {
    let mut input = reference_input();
    input.fluid_viscosity_mpa_s = f64::NAN;
    assert!(matches!(
        to_si(&input),
        Err(InvalidInput::NotFinite {
            field: InputField::FluidViscosity,
            ..
        })
    ));

    let mut input = reference_input();
    input.bell_diameter_mm = f64::INFINITY;
    assert!(matches!(
        to_si(&input),
        Err(InvalidInput::NotFinite {
            field: InputField::BellDiameter,
            ..
        })
    ));
}

#[test]
fn overflow_is_reported_instead_of_returned() {
    let mut input = reference_input();
    input.rotation_speed_rpm = 1e200;
    let si = to_si(&input).expect("finite positive input passes validation");
    assert!(matches!(
        compute_derived(&si),
        Err(InvalidInput::NonFiniteResult { .. })
    ));
}

#[test]
fn overflow_names_the_first_offending_quantity() {
    let mut input = reference_input();
    input.volume_flow_ml_min = 1e300;
    let si = to_si(&input).expect("valid");
    match compute_derived(&si) {
        Err(InvalidInput::NonFiniteResult { quantity }) => {
            assert_ne!(quantity, DerivedQuantity::AngularVelocity);
        }
        other => panic!("expected overflow, got {other:?}"),
    }
}

#[test]
fn tiny_flow_underflowing_edge_loading_is_rejected() {
    let mut input = reference_input();
    input.volume_flow_ml_min = 1e-160;
    let si = to_si(&input).expect("positive finite input passes validation");
    assert_eq!(
        compute_derived(&si),
        Err(InvalidInput::ResultUnderflow {
            quantity: DerivedQuantity::EdgeLoading
        })
    );
}
