use bell_atomizer_toolbox::atomizer::{compute_derived, to_si, DerivedQuantity, InputParameters};
use bell_atomizer_toolbox::i18n::keys;
use bell_atomizer_toolbox::report::{format_dimensionless, format_film_thickness, result_rows};

#[test]
fn dimensionless_numbers_use_two_decimals_in_exponent_form() {
    assert_eq!(format_dimensionless(0.013_074_409), "1.31e-02");
    assert_eq!(format_dimensionless(256_609_714.4), "2.57e+08");
    assert_eq!(format_dimensionless(2.0e-100), "2.00e-100");
    assert_eq!(format_dimensionless(-4.5), "-4.50e+00");
    assert_eq!(format_film_thickness(7.136_324), "7.14 µm");
}

#[test]
fn default_rows_are_in_display_order() {
    let si = to_si(&InputParameters::default()).expect("valid defaults");
    let rows = result_rows(&compute_derived(&si).expect("finite"));
    let order: Vec<DerivedQuantity> = rows.iter().map(|r| r.quantity).collect();
    assert_eq!(
        order,
        vec![
            DerivedQuantity::Ohnesorge,
            DerivedQuantity::EdgeLoading,
            DerivedQuantity::Weber,
            DerivedQuantity::OperatingNumber,
            DerivedQuantity::FilmThickness,
            DerivedQuantity::AngularVelocity,
            DerivedQuantity::RimSpeed,
        ]
    );
    assert_eq!(rows[3].value, "3.98e+00");
    assert_eq!(rows[4].value, "7.14 µm");
    assert_eq!(rows[5].value, "5235.99 rad/s");
}

#[test]
fn film_thickness_has_its_own_section() {
    let si = to_si(&InputParameters::default()).expect("valid defaults");
    let rows = result_rows(&compute_derived(&si).expect("finite"));
    for row in &rows[..4] {
        assert_eq!(row.heading_key, keys::RESULT_HEADING);
    }
    assert_eq!(rows[4].quantity, DerivedQuantity::FilmThickness);
    assert_eq!(rows[4].heading_key, keys::RESULT_FILM_HEADING);
}
