//! 계산 결과의 표시 형식. CLI와 GUI가 같은 문자열을 쓰도록 한곳에 둔다.

use crate::atomizer::{DerivedQuantities, DerivedQuantity};
use crate::i18n::keys;

/// 무차원 수: 소수 둘째 자리까지의 지수 표기. 지수는 부호와 두 자리 이상으로 맞춘다(`3.98e+00`).
pub fn format_dimensionless(value: f64) -> String {
    let raw = format!("{value:.2e}");
    let Some((mantissa, exponent)) = raw.split_once('e') else {
        return raw;
    };
    match exponent.parse::<i32>() {
        Ok(exp) => {
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exp.unsigned_abs())
        }
        Err(_) => raw,
    }
}

/// 막 두께: 소수 둘째 자리, µm.
pub fn format_film_thickness(value_um: f64) -> String {
    format!("{value_um:.2} µm")
}

/// 결과 표의 한 줄.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub quantity: DerivedQuantity,
    /// 이 행이 속한 구역 제목의 번역 키
    pub heading_key: &'static str,
    /// 번역 키
    pub label_key: &'static str,
    pub symbol: &'static str,
    pub value: String,
}

/// 표시 순서대로 결과 행을 만든다. 같은 구역의 행은 연속해서 나온다.
pub fn result_rows(d: &DerivedQuantities) -> Vec<ResultRow> {
    vec![
        ResultRow {
            quantity: DerivedQuantity::Ohnesorge,
            heading_key: keys::RESULT_HEADING,
            label_key: "result.ohnesorge",
            symbol: "Oh",
            value: format_dimensionless(d.ohnesorge),
        },
        ResultRow {
            quantity: DerivedQuantity::EdgeLoading,
            heading_key: keys::RESULT_HEADING,
            label_key: "result.edge_loading",
            symbol: "Kb",
            value: format_dimensionless(d.edge_loading),
        },
        ResultRow {
            quantity: DerivedQuantity::Weber,
            heading_key: keys::RESULT_HEADING,
            label_key: "result.weber",
            symbol: "We",
            value: format_dimensionless(d.weber),
        },
        ResultRow {
            quantity: DerivedQuantity::OperatingNumber,
            heading_key: keys::RESULT_HEADING,
            label_key: "result.operating_number",
            symbol: "B",
            value: format_dimensionless(d.operating_number),
        },
        ResultRow {
            quantity: DerivedQuantity::FilmThickness,
            heading_key: keys::RESULT_FILM_HEADING,
            label_key: "result.film_thickness",
            symbol: "δ",
            value: format_film_thickness(d.film_thickness_um),
        },
        ResultRow {
            quantity: DerivedQuantity::AngularVelocity,
            heading_key: keys::RESULT_FILM_HEADING,
            label_key: "result.angular_velocity",
            symbol: "ω",
            value: format!("{:.2} rad/s", d.angular_velocity_rad_s),
        },
        ResultRow {
            quantity: DerivedQuantity::RimSpeed,
            heading_key: keys::RESULT_FILM_HEADING,
            label_key: "result.rim_speed",
            symbol: "v",
            value: format!("{:.2} m/s", d.rim_speed_m_s),
        },
    ]
}
