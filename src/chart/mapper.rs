use super::calibration::ChartAnchor;
use crate::atomizer::{ChartAxis, InvalidInput};

/// 차트 위의 운전점. 모델 좌표(Kb, B)와 이미지 픽셀 좌표를 함께 담는다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingPoint {
    pub model_x: f64,
    pub model_y: f64,
    pub pixel_x: f64,
    pub pixel_y: f64,
    /// 축 범위 안에 있는지 여부. 범위 밖이면 마커가 이미지 밖에 놓인다.
    pub within_chart: bool,
}

fn log_fraction(value: f64, min: f64, max: f64) -> f64 {
    (value.log10() - min.log10()) / (max.log10() - min.log10())
}

fn check_coordinate(axis: ChartAxis, value: f64) -> Result<(), InvalidInput> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(InvalidInput::ChartCoordinate { axis, value })
    }
}

/// 로그-로그 모델 좌표를 선형 픽셀 좌표로 변환한다.
pub fn map_to_pixel(
    model_x: f64,
    model_y: f64,
    anchor: &ChartAnchor,
) -> Result<(f64, f64), InvalidInput> {
    check_coordinate(ChartAxis::X, model_x)?;
    check_coordinate(ChartAxis::Y, model_y)?;
    let b = &anchor.pixel_bounds;
    let px = b.x0 + log_fraction(model_x, anchor.x_log_min, anchor.x_log_max) * (b.x1 - b.x0);
    let py = b.y0 + log_fraction(model_y, anchor.y_log_min, anchor.y_log_max) * (b.y1 - b.y0);
    Ok((px, py))
}

/// `map_to_pixel`의 역변환. 커서 위치의 (Kb, B) 값을 표시할 때 사용한다.
pub fn pixel_to_model(pixel_x: f64, pixel_y: f64, anchor: &ChartAnchor) -> (f64, f64) {
    let b = &anchor.pixel_bounds;
    let fx = (pixel_x - b.x0) / (b.x1 - b.x0);
    let fy = (pixel_y - b.y0) / (b.y1 - b.y0);
    let lx = anchor.x_log_min.log10() + fx * (anchor.x_log_max.log10() - anchor.x_log_min.log10());
    let ly = anchor.y_log_min.log10() + fy * (anchor.y_log_max.log10() - anchor.y_log_min.log10());
    (10f64.powf(lx), 10f64.powf(ly))
}

/// 모델 좌표로부터 운전점을 만든다.
pub fn operating_point(
    model_x: f64,
    model_y: f64,
    anchor: &ChartAnchor,
) -> Result<OperatingPoint, InvalidInput> {
    let (pixel_x, pixel_y) = map_to_pixel(model_x, model_y, anchor)?;
    Ok(OperatingPoint {
        model_x,
        model_y,
        pixel_x,
        pixel_y,
        within_chart: anchor.contains(model_x, model_y),
    })
}
