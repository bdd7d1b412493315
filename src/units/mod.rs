//! 단위 정의 및 변환 모듈 모음.

pub mod angle;
pub mod density;
pub mod length;
pub mod rotation;
pub mod surface_tension;
pub mod viscosity;
pub mod volume_flow;

pub use angle::{convert_angle, AngleUnit};
pub use density::{convert_density, DensityUnit};
pub use length::{convert_length, LengthUnit};
pub use rotation::{convert_rotation, RotationUnit};
pub use surface_tension::{convert_surface_tension, SurfaceTensionUnit};
pub use viscosity::{convert_viscosity, ViscosityUnit};
pub use volume_flow::{convert_volume_flow, VolumeFlowUnit};
