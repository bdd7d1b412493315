use std::path::Path;

use crate::atomizer::{self, Evaluation, InputField, InputParameters, InvalidInput};
use crate::chart::{
    self, provider_for_source, AssetUnavailable, ImageProvider, OfflineProvider, RasterImage,
    REFERENCE_CHART,
};
use crate::config::{ChartSourceConfig, Config, ConfigError};
use crate::conversion::ConversionError;
use crate::i18n::{keys, Translator};
use crate::ui_cli::{self, CliArgs};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 터미널 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(ConfigError),
    /// 명령행 값 해석 오류
    Argument {
        field: InputField,
        source: ConversionError,
    },
    /// 입력 전제 조건 위반
    Input(InvalidInput),
    /// 오버레이 이미지 저장 오류
    Overlay(image::ImageError),
    /// 표준 입력이 닫힘
    EndOfInput,
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "I/O error: {e}"),
            AppError::Config(e) => write!(f, "configuration error: {e}"),
            AppError::Argument { field, source } => {
                write!(f, "--{}: {source}", field.key().replace('_', "-"))
            }
            AppError::Input(e) => write!(f, "invalid input: {e}"),
            AppError::Overlay(e) => write!(f, "could not write overlay image: {e}"),
            AppError::EndOfInput => write!(f, "input closed"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<InvalidInput> for AppError {
    fn from(value: InvalidInput) -> Self {
        AppError::Input(value)
    }
}

impl From<image::ImageError> for AppError {
    fn from(value: image::ImageError) -> Self {
        AppError::Overlay(value)
    }
}

/// 명령행/설정에 따라 차트 이미지 공급자를 고른다.
///
/// 우선순위: `--offline` → `--chart` → 설정의 `local_path` → 설정의 `url`.
pub fn select_provider(
    cli_source: Option<&str>,
    offline: bool,
    cfg: &ChartSourceConfig,
) -> Box<dyn ImageProvider + Send> {
    if offline || (!cfg.enabled && cli_source.is_none()) {
        return Box::new(OfflineProvider);
    }
    let source = cli_source.unwrap_or_else(|| cfg.source());
    provider_for_source(source, cfg.timeout(), cfg.max_bytes)
}

/// 공급자에서 차트를 가져온다. 실패는 경고로만 남기고 사유를 돌려준다.
pub fn load_chart(provider: &dyn ImageProvider) -> Result<RasterImage, AssetUnavailable> {
    provider.fetch().map_err(|reason| {
        if reason != AssetUnavailable::Disabled {
            log::warn!("chart from {} unavailable: {reason}", provider.describe());
        }
        reason
    })
}

/// 평가 한 번: 계산 코어 호출 + 필요하면 오버레이 저장.
fn evaluate_once(
    tr: &Translator,
    input: &InputParameters,
    raster: &Result<RasterImage, AssetUnavailable>,
    overlay_path: Option<&Path>,
) -> Result<Evaluation, AppError> {
    let eval = atomizer::compute_all(input, raster.as_ref(), &REFERENCE_CHART)?;
    ui_cli::print_report(tr, input, &eval);
    if let Some(path) = overlay_path {
        match (raster, &eval.chart) {
            (Ok(raster), Ok(overlay)) => {
                let image = chart::render_overlay(raster, &overlay.point);
                chart::save_overlay(&image, path)?;
                println!(
                    "{}",
                    tr.tf(
                        keys::CHART_OVERLAY_WRITTEN,
                        &[("path", path.display().to_string())]
                    )
                );
            }
            _ => println!("{}", tr.t(keys::CHART_OVERLAY_SKIPPED)),
        }
    }
    Ok(eval)
}

/// CLI 애플리케이션을 실행한다.
pub fn run(args: &CliArgs, config: &Config, tr: &Translator) -> Result<(), AppError> {
    let mut input = args.apply_to(&config.defaults)?;
    let provider = select_provider(args.chart.as_deref(), args.offline, &config.chart);
    let raster = load_chart(provider.as_ref());

    if !args.interactive {
        evaluate_once(tr, &input, &raster, args.overlay.as_deref())?;
        return Ok(());
    }

    loop {
        input = match ui_cli::prompt_parameters(tr, &input) {
            Ok(p) => p,
            Err(AppError::EndOfInput) => break,
            Err(e) => return Err(e),
        };
        match evaluate_once(tr, &input, &raster, args.overlay.as_deref()) {
            Ok(_) => {}
            Err(AppError::Input(e)) => {
                println!("{}: {e}", tr.t(keys::ERROR_INVALID_INPUT));
            }
            Err(AppError::Overlay(e)) => {
                println!("{}: {e}", tr.t(keys::ERROR_PREFIX));
            }
            Err(e) => return Err(e),
        }
        match ui_cli::ask_again(tr) {
            Ok(true) => continue,
            Ok(false) | Err(AppError::EndOfInput) => break,
            Err(e) => return Err(e),
        }
    }
    println!("{}", tr.t(keys::APP_EXIT));
    Ok(())
}
