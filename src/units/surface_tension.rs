use serde::{Deserialize, Serialize};

/// 표면장력 단위. 내부 기준은 N/m이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfaceTensionUnit {
    NewtonPerMeter,
    MilliNewtonPerMeter,
    /// 1 dyn/cm = 1 mN/m
    DynePerCentimeter,
}

fn to_n_per_m(value: f64, unit: SurfaceTensionUnit) -> f64 {
    match unit {
        SurfaceTensionUnit::NewtonPerMeter => value,
        SurfaceTensionUnit::MilliNewtonPerMeter | SurfaceTensionUnit::DynePerCentimeter => {
            value / 1000.0
        }
    }
}

fn from_n_per_m(value: f64, unit: SurfaceTensionUnit) -> f64 {
    match unit {
        SurfaceTensionUnit::NewtonPerMeter => value,
        SurfaceTensionUnit::MilliNewtonPerMeter | SurfaceTensionUnit::DynePerCentimeter => {
            value * 1000.0
        }
    }
}

/// 표면장력을 변환한다.
pub fn convert_surface_tension(
    value: f64,
    from: SurfaceTensionUnit,
    to: SurfaceTensionUnit,
) -> f64 {
    let base = to_n_per_m(value, from);
    from_n_per_m(base, to)
}
