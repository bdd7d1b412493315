//! 회전 벨 분무 공정의 무차원 수 및 막 두께 계산.
//!
//! 모든 식은 SI 단위 입력을 받는 닫힌 형태의 대수식이다. 분수 지수에 들어가는 값이 항상
//! 0 이상이 되도록 입력은 `to_si` 단계에서 검증된다.

use std::f64::consts::PI;

use super::input::{DerivedQuantity, InvalidInput, SiParameters};

/// 계산된 물리량 묶음.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedQuantities {
    /// 각속도 ω [rad/s]
    pub angular_velocity_rad_s: f64,
    /// 벨 가장자리 원주 속도 v = ω·r [m/s]
    pub rim_speed_m_s: f64,
    /// 벨 가장자리 막 두께 δ [µm]
    pub film_thickness_um: f64,
    /// 오네조르게 수 Oh
    pub ohnesorge: f64,
    /// 가장자리 부하 Kb
    pub edge_loading: f64,
    /// 웨버 수 We
    pub weber: f64,
    /// 운전 특성수 B
    pub operating_number: f64,
}

/// 회전수 [1/min]를 각속도 [rad/s]로 변환한다.
pub fn angular_velocity(rotation_speed_rpm: f64) -> f64 {
    2.0 * PI * rotation_speed_rpm / 60.0
}

/// 벨 가장자리의 막 두께를 µm 단위로 계산한다.
///
/// δ = [ 3·V̇·η / (ρ·2π·ω²·r²·sin β) ]^(1/3)
pub fn film_thickness_um(
    volume_flow_m3_s: f64,
    viscosity_pa_s: f64,
    density_kg_m3: f64,
    omega_rad_s: f64,
    radius_m: f64,
    cone_angle_deg: f64,
) -> f64 {
    let beta_rad = cone_angle_deg.to_radians();
    let numerator = 3.0 * volume_flow_m3_s * viscosity_pa_s;
    let denominator =
        density_kg_m3 * 2.0 * PI * omega_rad_s.powi(2) * radius_m.powi(2) * beta_rad.sin();
    (numerator / denominator).powf(1.0 / 3.0) * 1e6
}

/// Oh = η / √(ρ·σ·D). 반경이 아닌 전체 직경을 사용한다.
pub fn ohnesorge(
    viscosity_pa_s: f64,
    density_kg_m3: f64,
    surface_tension_n_m: f64,
    diameter_m: f64,
) -> f64 {
    viscosity_pa_s / (density_kg_m3 * surface_tension_n_m * diameter_m).sqrt()
}

/// Kb = V̇²·ρ / (σ·D³)
pub fn edge_loading(
    volume_flow_m3_s: f64,
    density_kg_m3: f64,
    surface_tension_n_m: f64,
    diameter_m: f64,
) -> f64 {
    volume_flow_m3_s.powi(2) * density_kg_m3 / (surface_tension_n_m * diameter_m.powi(3))
}

/// We = ω²·D³·ρ / σ
pub fn weber(
    omega_rad_s: f64,
    diameter_m: f64,
    density_kg_m3: f64,
    surface_tension_n_m: f64,
) -> f64 {
    omega_rad_s.powi(2) * diameter_m.powi(3) * density_kg_m3 / surface_tension_n_m
}

/// B = We^0.5 · Kb^(5/6) · Oh^(10/36)
pub fn operating_number(weber: f64, edge_loading: f64, ohnesorge: f64) -> f64 {
    weber.sqrt() * edge_loading.powf(5.0 / 6.0) * ohnesorge.powf(10.0 / 36.0)
}

/// SI 파라미터로부터 모든 물리량을 계산한다.
///
/// 검증된 입력이라도 극단적인 값에서는 오버플로가 날 수 있으므로 결과가 유한하지 않으면
/// `InvalidInput::NonFiniteResult`를, 0으로 언더플로하면 `InvalidInput::ResultUnderflow`를 반환한다.
pub fn compute_derived(si: &SiParameters) -> Result<DerivedQuantities, InvalidInput> {
    let omega = angular_velocity(si.rotation_speed_rpm());
    let radius = si.diameter_m() / 2.0;
    let delta = film_thickness_um(
        si.volume_flow_m3_s(),
        si.viscosity_pa_s(),
        si.density_kg_m3(),
        omega,
        radius,
        si.cone_angle_deg(),
    );
    let oh = ohnesorge(
        si.viscosity_pa_s(),
        si.density_kg_m3(),
        si.surface_tension_n_m(),
        si.diameter_m(),
    );
    let kb = edge_loading(
        si.volume_flow_m3_s(),
        si.density_kg_m3(),
        si.surface_tension_n_m(),
        si.diameter_m(),
    );
    let we = weber(
        omega,
        si.diameter_m(),
        si.density_kg_m3(),
        si.surface_tension_n_m(),
    );
    let b = operating_number(we, kb, oh);

    let derived = DerivedQuantities {
        angular_velocity_rad_s: omega,
        rim_speed_m_s: omega * radius,
        film_thickness_um: delta,
        ohnesorge: oh,
        edge_loading: kb,
        weber: we,
        operating_number: b,
    };
    check_results(&derived)?;
    log::debug!(
        "derived: omega={omega:.3} rad/s, delta={delta:.4} um, Oh={oh:.4e}, Kb={kb:.4e}, We={we:.4e}, B={b:.4e}"
    );
    Ok(derived)
}

fn check_results(d: &DerivedQuantities) -> Result<(), InvalidInput> {
    let checks = [
        (DerivedQuantity::AngularVelocity, d.angular_velocity_rad_s),
        (DerivedQuantity::RimSpeed, d.rim_speed_m_s),
        (DerivedQuantity::FilmThickness, d.film_thickness_um),
        (DerivedQuantity::Ohnesorge, d.ohnesorge),
        (DerivedQuantity::EdgeLoading, d.edge_loading),
        (DerivedQuantity::Weber, d.weber),
        (DerivedQuantity::OperatingNumber, d.operating_number),
    ];
    // 오버플로를 먼저 본다. 분모가 무한대가 되면 다른 값이 0으로 떨어지기 때문이다.
    if let Some((quantity, _)) = checks.iter().find(|(_, v)| !v.is_finite()) {
        return Err(InvalidInput::NonFiniteResult { quantity: *quantity });
    }
    // 양의 입력에서는 모든 결과가 0보다 크다. 0은 언더플로이며 로그 축에도 올릴 수 없다.
    if let Some((quantity, _)) = checks.iter().find(|(_, v)| *v <= 0.0) {
        return Err(InvalidInput::ResultUnderflow { quantity: *quantity });
    }
    Ok(())
}
