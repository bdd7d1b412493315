use serde::{Deserialize, Serialize};

/// 체적 유량 단위. 내부 기준은 m³/s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeFlowUnit {
    CubicMeterPerSecond,
    MilliliterPerMinute,
    LiterPerMinute,
    LiterPerHour,
}

fn to_m3_per_s(value: f64, unit: VolumeFlowUnit) -> f64 {
    match unit {
        VolumeFlowUnit::CubicMeterPerSecond => value,
        // ml -> m³ 먼저, 그 다음 min -> s
        VolumeFlowUnit::MilliliterPerMinute => value / 1e6 / 60.0,
        VolumeFlowUnit::LiterPerMinute => value / 1e3 / 60.0,
        VolumeFlowUnit::LiterPerHour => value / 1e3 / 3600.0,
    }
}

fn from_m3_per_s(value: f64, unit: VolumeFlowUnit) -> f64 {
    match unit {
        VolumeFlowUnit::CubicMeterPerSecond => value,
        VolumeFlowUnit::MilliliterPerMinute => value * 60.0 * 1e6,
        VolumeFlowUnit::LiterPerMinute => value * 60.0 * 1e3,
        VolumeFlowUnit::LiterPerHour => value * 3600.0 * 1e3,
    }
}

/// 체적 유량을 변환한다.
pub fn convert_volume_flow(value: f64, from: VolumeFlowUnit, to: VolumeFlowUnit) -> f64 {
    let base = to_m3_per_s(value, from);
    from_m3_per_s(base, to)
}
