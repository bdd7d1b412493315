use serde::{Deserialize, Serialize};

use crate::quantity::QuantityKind;
use crate::units::{
    convert_length, convert_surface_tension, convert_viscosity, convert_volume_flow, LengthUnit,
    SurfaceTensionUnit, ViscosityUnit, VolumeFlowUnit,
};

/// 사용자 입력 항목. 오류 메시지에서 어느 항목이 잘못되었는지 알리는 데 쓴다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    VolumeFlow,
    RotationSpeed,
    BellDiameter,
    ConeAngle,
    FluidDensity,
    FluidViscosity,
    SurfaceTension,
}

impl InputField {
    pub const ALL: [InputField; 7] = [
        InputField::VolumeFlow,
        InputField::RotationSpeed,
        InputField::BellDiameter,
        InputField::ConeAngle,
        InputField::FluidDensity,
        InputField::FluidViscosity,
        InputField::SurfaceTension,
    ];

    /// 설정 파일 및 번역 키에 사용하는 식별자.
    pub fn key(&self) -> &'static str {
        match self {
            InputField::VolumeFlow => "volume_flow",
            InputField::RotationSpeed => "rotation_speed",
            InputField::BellDiameter => "bell_diameter",
            InputField::ConeAngle => "cone_angle",
            InputField::FluidDensity => "fluid_density",
            InputField::FluidViscosity => "fluid_viscosity",
            InputField::SurfaceTension => "surface_tension",
        }
    }

    pub fn quantity(&self) -> QuantityKind {
        match self {
            InputField::VolumeFlow => QuantityKind::VolumeFlow,
            InputField::RotationSpeed => QuantityKind::RotationSpeed,
            InputField::BellDiameter => QuantityKind::Length,
            InputField::ConeAngle => QuantityKind::Angle,
            InputField::FluidDensity => QuantityKind::Density,
            InputField::FluidViscosity => QuantityKind::Viscosity,
            InputField::SurfaceTension => QuantityKind::SurfaceTension,
        }
    }

    pub fn unit(&self) -> &'static str {
        self.quantity().practical_unit()
    }
}

impl std::fmt::Display for InputField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]", self.key(), self.unit())
    }
}

/// 계산 결과 중 하나를 가리킨다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivedQuantity {
    AngularVelocity,
    RimSpeed,
    FilmThickness,
    Ohnesorge,
    EdgeLoading,
    Weber,
    OperatingNumber,
}

/// 차트 축.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartAxis {
    X,
    Y,
}

/// 입력 전제 조건 위반. 어떤 값이 왜 거부되었는지 담는다.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidInput {
    /// NaN 또는 무한대
    NotFinite { field: InputField, value: f64 },
    /// 0 이하
    NotPositive { field: InputField, value: f64 },
    /// 콘 각도가 (0°, 180°) 밖
    ConeAngleOutOfRange { value: f64 },
    /// 로그 축에 매핑할 수 없는 좌표(0 이하 또는 비유한)
    ChartCoordinate { axis: ChartAxis, value: f64 },
    /// 입력은 유효하지만 계산 중 오버플로가 발생함
    NonFiniteResult { quantity: DerivedQuantity },
    /// 입력은 유효하지만 계산 결과가 0으로 언더플로함
    ResultUnderflow { quantity: DerivedQuantity },
}

impl std::fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidInput::NotFinite { field, value } => {
                write!(f, "{field}: value must be a finite number (got {value})")
            }
            InvalidInput::NotPositive { field, value } => {
                write!(f, "{field}: value must be greater than zero (got {value})")
            }
            InvalidInput::ConeAngleOutOfRange { value } => write!(
                f,
                "{}: angle must lie strictly between 0° and 180° (got {value})",
                InputField::ConeAngle
            ),
            InvalidInput::ChartCoordinate { axis, value } => write!(
                f,
                "chart {axis:?} coordinate must be positive for a log axis (got {value})"
            ),
            InvalidInput::NonFiniteResult { quantity } => write!(
                f,
                "{quantity:?} overflowed; the inputs are outside the representable range"
            ),
            InvalidInput::ResultUnderflow { quantity } => write!(
                f,
                "{quantity:?} underflowed to zero; the inputs are outside the representable range"
            ),
        }
    }
}

impl std::error::Error for InvalidInput {}

impl InvalidInput {
    /// 오류가 특정 입력 항목에 해당하면 그 항목을 돌려준다.
    pub fn field(&self) -> Option<InputField> {
        match self {
            InvalidInput::NotFinite { field, .. } | InvalidInput::NotPositive { field, .. } => {
                Some(*field)
            }
            InvalidInput::ConeAngleOutOfRange { .. } => Some(InputField::ConeAngle),
            _ => None,
        }
    }
}

/// 실무 단위로 입력된 공정 파라미터.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputParameters {
    /// 도료 체적 유량 [ml/min]
    pub volume_flow_ml_min: f64,
    /// 벨 회전수 [1/min]
    pub rotation_speed_rpm: f64,
    /// 벨 직경 [mm]
    pub bell_diameter_mm: f64,
    /// 벨 윤곽(콘) 각도 [°]
    pub cone_angle_deg: f64,
    /// 도료 밀도 [kg/m³]
    pub fluid_density_kg_m3: f64,
    /// 도료 점도 [mPa·s]
    pub fluid_viscosity_mpa_s: f64,
    /// 표면장력 [mN/m]
    pub surface_tension_mn_m: f64,
}

impl Default for InputParameters {
    fn default() -> Self {
        Self {
            volume_flow_ml_min: 60.0,
            rotation_speed_rpm: 50_000.0,
            bell_diameter_mm: 60.0,
            cone_angle_deg: 55.0,
            fluid_density_kg_m3: 1300.0,
            fluid_viscosity_mpa_s: 20.0,
            surface_tension_mn_m: 30.0,
        }
    }
}

impl InputParameters {
    pub fn get(&self, field: InputField) -> f64 {
        match field {
            InputField::VolumeFlow => self.volume_flow_ml_min,
            InputField::RotationSpeed => self.rotation_speed_rpm,
            InputField::BellDiameter => self.bell_diameter_mm,
            InputField::ConeAngle => self.cone_angle_deg,
            InputField::FluidDensity => self.fluid_density_kg_m3,
            InputField::FluidViscosity => self.fluid_viscosity_mpa_s,
            InputField::SurfaceTension => self.surface_tension_mn_m,
        }
    }

    pub fn get_mut(&mut self, field: InputField) -> &mut f64 {
        match field {
            InputField::VolumeFlow => &mut self.volume_flow_ml_min,
            InputField::RotationSpeed => &mut self.rotation_speed_rpm,
            InputField::BellDiameter => &mut self.bell_diameter_mm,
            InputField::ConeAngle => &mut self.cone_angle_deg,
            InputField::FluidDensity => &mut self.fluid_density_kg_m3,
            InputField::FluidViscosity => &mut self.fluid_viscosity_mpa_s,
            InputField::SurfaceTension => &mut self.surface_tension_mn_m,
        }
    }

    /// 전제 조건을 모두 확인한다. 첫 번째 위반 항목을 오류로 반환한다.
    pub fn validate(&self) -> Result<(), InvalidInput> {
        for field in InputField::ALL {
            let value = self.get(field);
            if !value.is_finite() {
                return Err(InvalidInput::NotFinite { field, value });
            }
            if field == InputField::ConeAngle {
                if value <= 0.0 || value >= 180.0 {
                    return Err(InvalidInput::ConeAngleOutOfRange { value });
                }
            } else if value <= 0.0 {
                return Err(InvalidInput::NotPositive { field, value });
            }
        }
        Ok(())
    }
}

/// SI 단위로 환산된 파라미터. `to_si`를 통해서만 만들어지므로 항상 검증을 통과한 값이다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiParameters {
    volume_flow_m3_s: f64,
    rotation_speed_rpm: f64,
    diameter_m: f64,
    cone_angle_deg: f64,
    density_kg_m3: f64,
    viscosity_pa_s: f64,
    surface_tension_n_m: f64,
}

impl SiParameters {
    /// 체적 유량 V̇ [m³/s]
    pub fn volume_flow_m3_s(&self) -> f64 {
        self.volume_flow_m3_s
    }

    /// 회전수 n [1/min]. 각속도 변환은 물리 모델에서 수행한다.
    pub fn rotation_speed_rpm(&self) -> f64 {
        self.rotation_speed_rpm
    }

    /// 벨 직경 D [m]
    pub fn diameter_m(&self) -> f64 {
        self.diameter_m
    }

    /// 콘 각도 β [°]
    pub fn cone_angle_deg(&self) -> f64 {
        self.cone_angle_deg
    }

    /// 밀도 ρ [kg/m³]
    pub fn density_kg_m3(&self) -> f64 {
        self.density_kg_m3
    }

    /// 점도 η [Pa·s]
    pub fn viscosity_pa_s(&self) -> f64 {
        self.viscosity_pa_s
    }

    /// 표면장력 σ [N/m]
    pub fn surface_tension_n_m(&self) -> f64 {
        self.surface_tension_n_m
    }
}

/// 실무 단위 입력을 검증한 뒤 SI 단위로 환산한다.
pub fn to_si(input: &InputParameters) -> Result<SiParameters, InvalidInput> {
    input.validate()?;
    Ok(SiParameters {
        volume_flow_m3_s: convert_volume_flow(
            input.volume_flow_ml_min,
            VolumeFlowUnit::MilliliterPerMinute,
            VolumeFlowUnit::CubicMeterPerSecond,
        ),
        rotation_speed_rpm: input.rotation_speed_rpm,
        diameter_m: convert_length(
            input.bell_diameter_mm,
            LengthUnit::Millimeter,
            LengthUnit::Meter,
        ),
        cone_angle_deg: input.cone_angle_deg,
        density_kg_m3: input.fluid_density_kg_m3,
        viscosity_pa_s: convert_viscosity(
            input.fluid_viscosity_mpa_s,
            ViscosityUnit::MilliPascalSecond,
            ViscosityUnit::PascalSecond,
        ),
        surface_tension_n_m: convert_surface_tension(
            input.surface_tension_mn_m,
            SurfaceTensionUnit::MilliNewtonPerMeter,
            SurfaceTensionUnit::NewtonPerMeter,
        ),
    })
}
