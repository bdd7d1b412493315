/// 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    VolumeFlow,
    RotationSpeed,
    Length,
    Angle,
    Density,
    Viscosity,
    SurfaceTension,
}

impl QuantityKind {
    /// 입력 폼에서 사용하는 실무 단위 표기.
    pub fn practical_unit(&self) -> &'static str {
        match self {
            QuantityKind::VolumeFlow => "ml/min",
            QuantityKind::RotationSpeed => "1/min",
            QuantityKind::Length => "mm",
            QuantityKind::Angle => "°",
            QuantityKind::Density => "kg/m³",
            QuantityKind::Viscosity => "mPa·s",
            QuantityKind::SurfaceTension => "mN/m",
        }
    }
}
