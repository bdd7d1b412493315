use crate::quantity::QuantityKind;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    UnknownUnit { kind: QuantityKind, unit: String },
    /// 숫자로 해석할 수 없는 값
    InvalidNumber(String),
    /// 빈 입력
    Empty,
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownUnit { kind, unit } => {
                write!(f, "unknown unit '{unit}' for {kind:?}")
            }
            ConversionError::InvalidNumber(s) => write!(f, "not a number: '{s}'"),
            ConversionError::Empty => write!(f, "empty value"),
        }
    }
}

impl std::error::Error for ConversionError {}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `ml/min`, `l/h`, `rpm`, `rad/s`, `mm`, `in`, `deg`,
/// `g/cm3`, `cP`, `Pa.s`, `dyn/cm` 등을 사용할 수 있다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::VolumeFlow => {
            let from = parse_volume_flow_unit(from_unit_str)?;
            let to = parse_volume_flow_unit(to_unit_str)?;
            Ok(convert_volume_flow(value, from, to))
        }
        QuantityKind::RotationSpeed => {
            let from = parse_rotation_unit(from_unit_str)?;
            let to = parse_rotation_unit(to_unit_str)?;
            Ok(convert_rotation(value, from, to))
        }
        QuantityKind::Length => {
            let from = parse_length_unit(from_unit_str)?;
            let to = parse_length_unit(to_unit_str)?;
            Ok(convert_length(value, from, to))
        }
        QuantityKind::Angle => {
            let from = parse_angle_unit(from_unit_str)?;
            let to = parse_angle_unit(to_unit_str)?;
            Ok(convert_angle(value, from, to))
        }
        QuantityKind::Density => {
            let from = parse_density_unit(from_unit_str)?;
            let to = parse_density_unit(to_unit_str)?;
            Ok(convert_density(value, from, to))
        }
        QuantityKind::Viscosity => {
            let from = parse_viscosity_unit(from_unit_str)?;
            let to = parse_viscosity_unit(to_unit_str)?;
            Ok(convert_viscosity(value, from, to))
        }
        QuantityKind::SurfaceTension => {
            let from = parse_surface_tension_unit(from_unit_str)?;
            let to = parse_surface_tension_unit(to_unit_str)?;
            Ok(convert_surface_tension(value, from, to))
        }
    }
}

/// `"60"`, `"1 l/min"`, `"0.02Pa.s"` 형태의 입력을 해당 물리량의 실무 단위 값으로 환산한다.
///
/// 단위를 생략하면 실무 단위(`QuantityKind::practical_unit`)로 간주한다.
pub fn parse_quantity(kind: QuantityKind, text: &str) -> Result<f64, ConversionError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ConversionError::Empty);
    }
    let split = text
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')))
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    let (number, unit) = text.split_at(split);
    let value: f64 = number
        .trim()
        .parse()
        .map_err(|_| ConversionError::InvalidNumber(number.trim().to_string()))?;
    let unit = unit.trim();
    if unit.is_empty() {
        return Ok(value);
    }
    convert(kind, value, unit, kind.practical_unit())
}

fn unknown(kind: QuantityKind, s: &str) -> ConversionError {
    ConversionError::UnknownUnit {
        kind,
        unit: s.to_string(),
    }
}

fn parse_volume_flow_unit(s: &str) -> Result<VolumeFlowUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m3/s" | "m^3/s" | "m³/s" => Ok(VolumeFlowUnit::CubicMeterPerSecond),
        "ml/min" | "cm3/min" | "ccm" => Ok(VolumeFlowUnit::MilliliterPerMinute),
        "l/min" | "lpm" => Ok(VolumeFlowUnit::LiterPerMinute),
        "l/h" | "lph" => Ok(VolumeFlowUnit::LiterPerHour),
        _ => Err(unknown(QuantityKind::VolumeFlow, s)),
    }
}

fn parse_rotation_unit(s: &str) -> Result<RotationUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "rad/s" => Ok(RotationUnit::RadianPerSecond),
        "1/min" | "rpm" | "min-1" | "min^-1" | "u/min" => Ok(RotationUnit::RevolutionPerMinute),
        "1/s" | "rps" | "hz" => Ok(RotationUnit::RevolutionPerSecond),
        _ => Err(unknown(QuantityKind::RotationSpeed, s)),
    }
}

fn parse_length_unit(s: &str) -> Result<LengthUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m" | "meter" | "metre" => Ok(LengthUnit::Meter),
        "mm" => Ok(LengthUnit::Millimeter),
        "cm" => Ok(LengthUnit::Centimeter),
        "in" | "inch" | "\"" => Ok(LengthUnit::Inch),
        _ => Err(unknown(QuantityKind::Length, s)),
    }
}

fn parse_angle_unit(s: &str) -> Result<AngleUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        // "grad"는 독일어의 도(°)이다. 그라디안(gon)이 아니다.
        "°" | "deg" | "degree" | "grad" => Ok(AngleUnit::Degree),
        "rad" | "radian" => Ok(AngleUnit::Radian),
        _ => Err(unknown(QuantityKind::Angle, s)),
    }
}

fn parse_density_unit(s: &str) -> Result<DensityUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "kg/m3" | "kg/m^3" | "kg/m³" => Ok(DensityUnit::KgPerCubicMeter),
        "g/cm3" | "g/cm^3" | "g/cm³" | "g/ml" => Ok(DensityUnit::GramPerCubicCentimeter),
        "kg/l" => Ok(DensityUnit::KgPerLiter),
        _ => Err(unknown(QuantityKind::Density, s)),
    }
}

fn parse_viscosity_unit(s: &str) -> Result<ViscosityUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "pa·s" | "pa.s" | "pas" | "pa*s" => Ok(ViscosityUnit::PascalSecond),
        "mpa·s" | "mpa.s" | "mpas" | "mpa*s" => Ok(ViscosityUnit::MilliPascalSecond),
        "cp" | "cps" => Ok(ViscosityUnit::Centipoise),
        "p" | "poise" => Ok(ViscosityUnit::Poise),
        _ => Err(unknown(QuantityKind::Viscosity, s)),
    }
}

fn parse_surface_tension_unit(s: &str) -> Result<SurfaceTensionUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "n/m" => Ok(SurfaceTensionUnit::NewtonPerMeter),
        "mn/m" => Ok(SurfaceTensionUnit::MilliNewtonPerMeter),
        "dyn/cm" => Ok(SurfaceTensionUnit::DynePerCentimeter),
        _ => Err(unknown(QuantityKind::SurfaceTension, s)),
    }
}
