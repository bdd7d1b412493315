use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::atomizer::InputParameters;
use crate::chart::REFERENCE_CHART;

/// 기본 설정 파일 이름.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 차트 이미지 출처 설정.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSourceConfig {
    /// false이면 차트를 불러오지 않고 수치 결과만 표시한다.
    pub enabled: bool,
    pub url: String,
    /// 지정되면 URL 대신 로컬 파일을 사용한다.
    pub local_path: Option<String>,
    pub timeout_secs: u64,
    pub max_bytes: u64,
}

impl Default for ChartSourceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            url: REFERENCE_CHART.source_url.to_string(),
            local_path: None,
            timeout_secs: 10,
            max_bytes: 16 * 1024 * 1024,
        }
    }
}

impl ChartSourceConfig {
    /// 실제로 사용할 출처(로컬 파일 우선).
    pub fn source(&self) -> &str {
        self.local_path.as_deref().unwrap_or(&self.url)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드(auto/en/de)
    pub language: String,
    /// 외부 언어팩 디렉터리
    pub language_pack_dir: Option<String>,
    /// 로그 레벨(error/warn/info/debug/trace)
    pub log_level: Option<String>,
    /// GUI 창 투명도(0.3~1.0)
    pub window_alpha: f32,
    pub chart: ChartSourceConfig,
    /// 입력 폼 초기값
    pub defaults: InputParameters,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            language_pack_dir: None,
            log_level: None,
            window_alpha: 1.0,
            chart: ChartSourceConfig::default(),
            defaults: InputParameters::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Parse(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config file I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::Serialize(e) => write!(f, "config serialization error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Parse(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// 설정 파일을 로드한다. 파일이 없으면 기본 설정을 돌려준다(파일은 만들지 않는다).
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        log::debug!("configuration loaded from {}", path.display());
        Ok(cfg)
    } else {
        log::debug!("{} not found, using defaults", path.display());
        Ok(Config::default())
    }
}

impl Config {
    /// 설정을 파일에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        log::info!("configuration saved to {}", path.display());
        Ok(())
    }
}
