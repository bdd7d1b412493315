use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// 회전 속도 단위. 내부 기준은 rad/s(각속도)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RotationUnit {
    RadianPerSecond,
    /// 1/min (rpm)
    RevolutionPerMinute,
    /// 1/s
    RevolutionPerSecond,
}

fn to_rad_per_s(value: f64, unit: RotationUnit) -> f64 {
    match unit {
        RotationUnit::RadianPerSecond => value,
        RotationUnit::RevolutionPerMinute => 2.0 * PI * value / 60.0,
        RotationUnit::RevolutionPerSecond => 2.0 * PI * value,
    }
}

fn from_rad_per_s(value: f64, unit: RotationUnit) -> f64 {
    match unit {
        RotationUnit::RadianPerSecond => value,
        RotationUnit::RevolutionPerMinute => value * 60.0 / (2.0 * PI),
        RotationUnit::RevolutionPerSecond => value / (2.0 * PI),
    }
}

/// 회전 속도를 변환한다.
pub fn convert_rotation(value: f64, from: RotationUnit, to: RotationUnit) -> f64 {
    if from == to {
        return value;
    }
    let base = to_rad_per_s(value, from);
    from_rad_per_s(base, to)
}
