use std::path::Path;

use image::{Rgba, RgbaImage};

use super::image_provider::RasterImage;
use super::mapper::OperatingPoint;

const MARKER_FILL: Rgba<u8> = Rgba([220, 20, 20, 255]);
const MARKER_EDGE: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// 이미지 크기에 비례한 마커 반지름(px).
pub fn marker_radius(width: u32, height: u32) -> f64 {
    (f64::from(width.min(height)) / 60.0).max(4.0)
}

/// 차트 사본 위에 운전점 마커(빨간 원)를 그린다.
///
/// 운전점이 이미지 밖이면 마커는 잘린 채로(또는 전혀) 그려지지 않는다.
pub fn render_overlay(raster: &RasterImage, point: &OperatingPoint) -> RgbaImage {
    let mut canvas = raster.pixels().clone();
    let radius = marker_radius(canvas.width(), canvas.height());
    draw_marker(&mut canvas, point.pixel_x, point.pixel_y, radius);
    canvas
}

fn draw_marker(canvas: &mut RgbaImage, cx: f64, cy: f64, radius: f64) {
    let edge = (radius * 0.2).max(1.0);
    let outer = radius + edge;
    let x_min = (cx - outer).floor().max(0.0);
    let y_min = (cy - outer).floor().max(0.0);
    let x_max = (cx + outer).ceil().min(f64::from(canvas.width()) - 1.0);
    let y_max = (cy + outer).ceil().min(f64::from(canvas.height()) - 1.0);
    if x_min > x_max || y_min > y_max {
        return;
    }
    for y in (y_min as u32)..=(y_max as u32) {
        for x in (x_min as u32)..=(x_max as u32) {
            let dx = f64::from(x) + 0.5 - cx;
            let dy = f64::from(y) + 0.5 - cy;
            let dist = (dx * dx + dy * dy).sqrt();
            if dist <= radius {
                canvas.put_pixel(x, y, MARKER_FILL);
            } else if dist <= outer {
                canvas.put_pixel(x, y, MARKER_EDGE);
            }
        }
    }
}

/// 오버레이 이미지를 파일로 저장한다. 형식은 확장자로 결정된다(PNG 권장).
pub fn save_overlay(image: &RgbaImage, path: &Path) -> Result<(), image::ImageError> {
    image.save(path)?;
    log::info!("overlay written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank(w: u32, h: u32) -> RasterImage {
        RasterImage::from_rgba(RgbaImage::from_pixel(w, h, Rgba([255, 255, 255, 255]))).unwrap()
    }

    fn point_at(x: f64, y: f64) -> OperatingPoint {
        OperatingPoint {
            model_x: 1.0,
            model_y: 1.0,
            pixel_x: x,
            pixel_y: y,
            within_chart: true,
        }
    }

    #[test]
    fn marker_is_drawn_at_point() {
        let out = render_overlay(&blank(300, 200), &point_at(150.0, 100.0));
        assert_eq!(*out.get_pixel(150, 100), MARKER_FILL);
        assert_eq!(*out.get_pixel(10, 10), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn point_outside_image_leaves_canvas_untouched() {
        let src = blank(120, 80);
        let out = render_overlay(&src, &point_at(500.0, -300.0));
        assert_eq!(&out, src.pixels());
    }
}
