//! 기준 분류 차트 이미지의 보정값.
//!
//! 보정값은 특정 이미지 파일 하나에 1:1로 묶여 있다. 이미지의 해상도나 잘라낸 영역이
//! 바뀌면 이 모듈의 `REFERENCE_CHART`만 다시 맞추면 되고, 계산식은 건드리지 않는다.

/// 이미지 안에서 로그-로그 축이 차지하는 영역. 이미지 폭/높이에 대한 비율(0~1)로 표현한다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

/// 축 범위와 플롯 영역을 묶은, 버전이 붙은 보정 레코드.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartCalibration {
    /// 보정 버전. 이미지가 교체되면 함께 올린다.
    pub version: &'static str,
    /// 보정에 사용한 원본 이미지 위치
    pub source_url: &'static str,
    /// x축(가장자리 부하 Kb) 범위
    pub x_log_min: f64,
    pub x_log_max: f64,
    /// y축(운전 특성수 B) 범위
    pub y_log_min: f64,
    pub y_log_max: f64,
    pub plot_area: PlotArea,
}

/// 픽셀 좌표계의 축 모서리. (x0, y0)는 (x_log_min, y_log_min), (x1, y1)은 (x_log_max, y_log_max)에 대응한다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelBounds {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

/// 해석된 래스터 크기에 맞춘 보정값.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartAnchor {
    pub x_log_min: f64,
    pub x_log_max: f64,
    pub y_log_min: f64,
    pub y_log_max: f64,
    pub pixel_bounds: PixelBounds,
}

/// Weckerle(2003) 분류도. 이미지는 축 영역 전체에 늘려서 표시되며 0행이 위쪽(B 최대)이다.
pub const REFERENCE_CHART: ChartCalibration = ChartCalibration {
    version: "diagramm-jpg-v1",
    source_url: "https://raw.githubusercontent.com/dubbehendrik/Zerfallsarten/main/Diagramm.jpg",
    x_log_min: 1e-4,
    x_log_max: 1e2,
    y_log_min: 1e-2,
    y_log_max: 3e0,
    plot_area: PlotArea {
        left: 0.0,
        top: 0.0,
        right: 1.0,
        bottom: 1.0,
    },
};

impl ChartCalibration {
    /// 주어진 이미지 크기(px)에 대한 앵커를 만든다.
    pub fn anchor_for(&self, width: u32, height: u32) -> ChartAnchor {
        let w = f64::from(width);
        let h = f64::from(height);
        ChartAnchor {
            x_log_min: self.x_log_min,
            x_log_max: self.x_log_max,
            y_log_min: self.y_log_min,
            y_log_max: self.y_log_max,
            pixel_bounds: PixelBounds {
                x0: self.plot_area.left * w,
                y0: self.plot_area.bottom * h,
                x1: self.plot_area.right * w,
                y1: self.plot_area.top * h,
            },
        }
    }
}

impl ChartAnchor {
    /// 네 모서리를 (모델 좌표, 픽셀 좌표) 쌍으로 돌려준다. 보정 확인용.
    pub fn corners(&self) -> [((f64, f64), (f64, f64)); 4] {
        let b = &self.pixel_bounds;
        [
            ((self.x_log_min, self.y_log_min), (b.x0, b.y0)),
            ((self.x_log_max, self.y_log_min), (b.x1, b.y0)),
            ((self.x_log_min, self.y_log_max), (b.x0, b.y1)),
            ((self.x_log_max, self.y_log_max), (b.x1, b.y1)),
        ]
    }

    /// 모델 좌표가 축 범위 안에 있는지 확인한다.
    pub fn contains(&self, model_x: f64, model_y: f64) -> bool {
        (self.x_log_min..=self.x_log_max).contains(&model_x)
            && (self.y_log_min..=self.y_log_max).contains(&model_y)
    }
}
