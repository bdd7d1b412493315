//! 분류 차트 매핑과 차트 이미지 처리.

pub mod calibration;
pub mod image_provider;
pub mod mapper;
pub mod overlay;

pub use calibration::{ChartAnchor, ChartCalibration, PixelBounds, PlotArea, REFERENCE_CHART};
pub use image_provider::{
    provider_for_source, AssetUnavailable, FileImageProvider, HttpImageProvider, ImageProvider,
    OfflineProvider, RasterImage,
};
pub use mapper::{map_to_pixel, operating_point, pixel_to_model, OperatingPoint};
pub use overlay::{render_overlay, save_overlay};

/// 특정 래스터에 대해 계산된 운전점 표시 정보.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartOverlay {
    pub anchor: ChartAnchor,
    pub point: OperatingPoint,
    pub image_width: u32,
    pub image_height: u32,
    /// 사용한 보정 레코드의 버전
    pub calibration_version: &'static str,
}
