use serde::{Deserialize, Serialize};

/// 각도 단위. 내부 기준은 도(°)이며, 라디안 변환은 사용하는 시점에 수행한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AngleUnit {
    Degree,
    Radian,
}

/// 각도를 변환한다.
pub fn convert_angle(value: f64, from: AngleUnit, to: AngleUnit) -> f64 {
    match (from, to) {
        (AngleUnit::Degree, AngleUnit::Radian) => value.to_radians(),
        (AngleUnit::Radian, AngleUnit::Degree) => value.to_degrees(),
        _ => value,
    }
}
