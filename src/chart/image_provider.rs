//! 기준 차트 이미지를 가져오는 외부 협력자.
//!
//! 계산 코어는 이미 디코딩된 `RasterImage`만 받는다. 네트워크/파일 입출력은 모두
//! `ImageProvider` 구현 쪽에 있고, 호출자가 어떤 구현을 쓸지 주입한다.

use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

use image::RgbaImage;

/// 차트 이미지를 사용할 수 없는 이유. 수치 결과에는 영향을 주지 않는다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetUnavailable {
    /// 설정 또는 `--offline`으로 차트가 꺼져 있음
    Disabled,
    /// 아직 불러오는 중
    Loading,
    /// 연결/타임아웃 등 전송 오류
    Transport(String),
    /// HTTP 상태 코드 오류
    HttpStatus(u16),
    /// 응답이 이미지가 아님 (Content-Type)
    NotAnImage(String),
    /// 응답 크기 제한 초과
    TooLarge { limit_bytes: u64 },
    /// 파일 입출력 오류
    Io(String),
    /// 이미지 디코딩 실패
    Decode(String),
    /// 폭 또는 높이가 0인 이미지
    EmptyRaster,
}

impl std::fmt::Display for AssetUnavailable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetUnavailable::Disabled => write!(f, "chart loading is disabled"),
            AssetUnavailable::Loading => write!(f, "chart is still loading"),
            AssetUnavailable::Transport(e) => write!(f, "network error: {e}"),
            AssetUnavailable::HttpStatus(code) => write!(f, "server answered HTTP {code}"),
            AssetUnavailable::NotAnImage(ct) => {
                write!(f, "response is not an image (Content-Type: {ct})")
            }
            AssetUnavailable::TooLarge { limit_bytes } => {
                write!(f, "image exceeds the {limit_bytes} byte limit")
            }
            AssetUnavailable::Io(e) => write!(f, "file error: {e}"),
            AssetUnavailable::Decode(e) => write!(f, "image could not be decoded: {e}"),
            AssetUnavailable::EmptyRaster => write!(f, "image has no pixels"),
        }
    }
}

impl std::error::Error for AssetUnavailable {}

/// 메모리에 디코딩된 RGBA 래스터.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterImage {
    pixels: RgbaImage,
}

impl RasterImage {
    /// 인코딩된 바이트(PNG/JPEG)를 디코딩한다.
    pub fn decode(bytes: &[u8]) -> Result<Self, AssetUnavailable> {
        let img =
            image::load_from_memory(bytes).map_err(|e| AssetUnavailable::Decode(e.to_string()))?;
        Self::from_rgba(img.to_rgba8())
    }

    pub fn from_rgba(pixels: RgbaImage) -> Result<Self, AssetUnavailable> {
        if pixels.width() == 0 || pixels.height() == 0 {
            return Err(AssetUnavailable::EmptyRaster);
        }
        Ok(Self { pixels })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// egui 텍스처 업로드 등에 쓰는 RGBA 바이트열.
    pub fn as_rgba_bytes(&self) -> &[u8] {
        self.pixels.as_raw()
    }
}

/// 차트 이미지 공급자.
pub trait ImageProvider {
    /// 로그/알림에 표시할 출처 설명.
    fn describe(&self) -> String;

    fn fetch(&self) -> Result<RasterImage, AssetUnavailable>;
}

/// HTTP(S)로 이미지를 내려받는다.
#[derive(Debug, Clone)]
pub struct HttpImageProvider {
    pub url: String,
    pub timeout: Duration,
    pub max_bytes: u64,
}

impl ImageProvider for HttpImageProvider {
    fn describe(&self) -> String {
        self.url.clone()
    }

    fn fetch(&self) -> Result<RasterImage, AssetUnavailable> {
        log::info!("fetching chart image from {}", self.url);
        let agent = ureq::AgentBuilder::new().timeout(self.timeout).build();
        let response = agent.get(&self.url).call().map_err(|e| match e {
            ureq::Error::Status(code, _) => AssetUnavailable::HttpStatus(code),
            ureq::Error::Transport(t) => AssetUnavailable::Transport(t.to_string()),
        })?;
        let content_type = response.content_type().to_string();
        if !content_type.starts_with("image") {
            return Err(AssetUnavailable::NotAnImage(content_type));
        }
        let mut bytes = Vec::new();
        response
            .into_reader()
            .take(self.max_bytes + 1)
            .read_to_end(&mut bytes)
            .map_err(|e| AssetUnavailable::Io(e.to_string()))?;
        if bytes.len() as u64 > self.max_bytes {
            return Err(AssetUnavailable::TooLarge {
                limit_bytes: self.max_bytes,
            });
        }
        log::debug!("chart image downloaded: {} bytes", bytes.len());
        RasterImage::decode(&bytes)
    }
}

/// 로컬 파일에서 이미지를 읽는다.
#[derive(Debug, Clone)]
pub struct FileImageProvider {
    pub path: PathBuf,
}

impl ImageProvider for FileImageProvider {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<RasterImage, AssetUnavailable> {
        log::info!("loading chart image from {}", self.path.display());
        let bytes = fs::read(&self.path).map_err(|e| AssetUnavailable::Io(e.to_string()))?;
        RasterImage::decode(&bytes)
    }
}

/// 항상 `Disabled`를 돌려주는 공급자. 오프라인 실행에 사용한다.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineProvider;

impl ImageProvider for OfflineProvider {
    fn describe(&self) -> String {
        "offline".to_string()
    }

    fn fetch(&self) -> Result<RasterImage, AssetUnavailable> {
        Err(AssetUnavailable::Disabled)
    }
}

/// `http://`/`https://`로 시작하면 HTTP 공급자, 그 외에는 파일 경로로 해석한다.
pub fn provider_for_source(
    source: &str,
    timeout: Duration,
    max_bytes: u64,
) -> Box<dyn ImageProvider + Send> {
    let source = source.trim();
    let lower = source.to_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        Box::new(HttpImageProvider {
            url: source.to_string(),
            timeout,
            max_bytes,
        })
    } else {
        Box::new(FileImageProvider {
            path: PathBuf::from(source),
        })
    }
}
