//! 회전 벨 분무 계산 코어: 단위 환산 → 물리 모델 → 차트 매핑.
//!
//! 입력이 바뀔 때마다 한 번 호출되는 순수 함수들로만 구성되며 내부 상태가 없다.

pub mod input;
pub mod model;

pub use input::{
    to_si, ChartAxis, DerivedQuantity, InputField, InputParameters, InvalidInput, SiParameters,
};
pub use model::{
    angular_velocity, compute_derived, edge_loading, film_thickness_um, ohnesorge,
    operating_number, weber, DerivedQuantities,
};

use crate::chart::{self, AssetUnavailable, ChartCalibration, ChartOverlay, RasterImage};

/// 한 번의 평가 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub si: SiParameters,
    pub derived: DerivedQuantities,
    /// 차트가 없으면 이유를 담는다. 수치 결과는 이와 무관하게 유효하다.
    pub chart: Result<ChartOverlay, AssetUnavailable>,
}

/// 입력 한 세트를 끝까지 평가한다.
///
/// 차트 이미지는 호출자가 미리 확보해 넘긴다. 이미지가 없으면 수치 결과만 채우고
/// `chart`에 사유를 남긴다. 입력 오류는 전체 평가를 중단한다.
pub fn compute_all(
    input: &InputParameters,
    raster: Result<&RasterImage, &AssetUnavailable>,
    calibration: &ChartCalibration,
) -> Result<Evaluation, InvalidInput> {
    let si = to_si(input)?;
    let derived = compute_derived(&si)?;
    let chart = match raster {
        Ok(raster) => {
            let anchor = calibration.anchor_for(raster.width(), raster.height());
            log::debug!(
                "chart calibration {} on {}x{} raster: {:?}",
                calibration.version,
                raster.width(),
                raster.height(),
                anchor.pixel_bounds
            );
            let point =
                chart::operating_point(derived.edge_loading, derived.operating_number, &anchor)?;
            if !point.within_chart {
                log::warn!(
                    "operating point (Kb={:.3e}, B={:.3e}) lies outside the chart range",
                    point.model_x,
                    point.model_y
                );
            }
            Ok(ChartOverlay {
                anchor,
                point,
                image_width: raster.width(),
                image_height: raster.height(),
                calibration_version: calibration.version,
            })
        }
        Err(reason) => Err(reason.clone()),
    };
    Ok(Evaluation { si, derived, chart })
}
