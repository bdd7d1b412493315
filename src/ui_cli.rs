use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;

use crate::app::AppError;
use crate::atomizer::{Evaluation, InputField, InputParameters};
use crate::conversion;
use crate::i18n::{keys, Translator};
use crate::report;

/// 회전 벨 분무 무차원 수 계산기 (터미널 버전).
#[derive(Debug, Clone, Parser)]
#[command(name = "bell_atomizer_toolbox_cli", version, about)]
pub struct CliArgs {
    /// 설정 파일 경로
    #[arg(long, default_value = crate::config::DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
    /// 표시 언어 (auto/en/de)
    #[arg(long, short = 'L')]
    pub lang: Option<String>,
    /// 로그 레벨 (error/warn/info/debug/trace)
    #[arg(long)]
    pub log_level: Option<String>,
    /// 파라미터를 대화식으로 입력받고 반복 계산한다
    #[arg(long, short = 'i')]
    pub interactive: bool,
    /// 도료 체적 유량, 예: "60" 또는 "3.6 l/h" (기본 단위 ml/min)
    #[arg(long)]
    pub volume_flow: Option<String>,
    /// 회전수 (기본 단위 1/min)
    #[arg(long)]
    pub rotation_speed: Option<String>,
    /// 벨 직경 (기본 단위 mm)
    #[arg(long)]
    pub bell_diameter: Option<String>,
    /// 콘 각도 (기본 단위 °)
    #[arg(long)]
    pub cone_angle: Option<String>,
    /// 도료 밀도 (기본 단위 kg/m³)
    #[arg(long)]
    pub density: Option<String>,
    /// 점도 (기본 단위 mPa·s)
    #[arg(long)]
    pub viscosity: Option<String>,
    /// 표면장력 (기본 단위 mN/m)
    #[arg(long)]
    pub surface_tension: Option<String>,
    /// 차트 이미지 출처(URL 또는 파일 경로). 설정값을 덮어쓴다
    #[arg(long)]
    pub chart: Option<String>,
    /// 차트 이미지를 불러오지 않는다
    #[arg(long)]
    pub offline: bool,
    /// 운전점을 표시한 차트를 PNG로 저장한다
    #[arg(long)]
    pub overlay: Option<PathBuf>,
}

impl CliArgs {
    fn raw_value(&self, field: InputField) -> Option<&str> {
        let v = match field {
            InputField::VolumeFlow => &self.volume_flow,
            InputField::RotationSpeed => &self.rotation_speed,
            InputField::BellDiameter => &self.bell_diameter,
            InputField::ConeAngle => &self.cone_angle,
            InputField::FluidDensity => &self.density,
            InputField::FluidViscosity => &self.viscosity,
            InputField::SurfaceTension => &self.surface_tension,
        };
        v.as_deref()
    }

    /// 명령행에 주어진 값으로 기본값을 덮어쓴다.
    pub fn apply_to(&self, base: &InputParameters) -> Result<InputParameters, AppError> {
        let mut params = *base;
        for field in InputField::ALL {
            if let Some(raw) = self.raw_value(field) {
                let value = conversion::parse_quantity(field.quantity(), raw)
                    .map_err(|e| AppError::Argument { field, source: e })?;
                *params.get_mut(field) = value;
            }
        }
        Ok(params)
    }
}

/// 각 항목을 차례로 물어본다. 빈 줄이면 현재 값을 유지한다.
pub fn prompt_parameters(
    tr: &Translator,
    current: &InputParameters,
) -> Result<InputParameters, AppError> {
    println!("\n{}", tr.t(keys::CLI_PARAMS_HEADING));
    println!("{}", tr.t(keys::CLI_UNIT_HINT));
    let mut params = *current;
    for field in InputField::ALL {
        let prompt = tr.tf(
            keys::CLI_PROMPT_FIELD,
            &[
                ("label", field_label(tr, field)),
                ("value", format!("{}", current.get(field))),
                ("unit", field.unit().to_string()),
            ],
        );
        loop {
            let line = read_line(&prompt)?;
            if line.trim().is_empty() {
                break;
            }
            match conversion::parse_quantity(field.quantity(), &line) {
                Ok(v) => {
                    *params.get_mut(field) = v;
                    break;
                }
                Err(e) => println!(
                    "{}: {e}. {}",
                    tr.t(keys::ERROR_PREFIX),
                    tr.t(keys::ERROR_INVALID_NUMBER)
                ),
            }
        }
    }
    Ok(params)
}

/// 계속할지 묻는다. 기본값은 "예"이다.
pub fn ask_again(tr: &Translator) -> Result<bool, AppError> {
    let answer = read_line(&tr.t(keys::CLI_PROMPT_AGAIN))?;
    let answer = answer.trim().to_lowercase();
    Ok(!matches!(answer.as_str(), "n" | "no" | "nein" | "q" | "quit" | "0"))
}

pub fn field_label(tr: &Translator, field: InputField) -> String {
    tr.t(&format!("field.{}", field.key()))
}

/// 입력값과 계산 결과를 출력한다.
pub fn print_report(tr: &Translator, input: &InputParameters, eval: &Evaluation) {
    println!("\n=== {} ===", tr.t(keys::APP_TITLE));
    println!("-- {} --", tr.t(keys::INPUT_HEADING));
    for field in InputField::ALL {
        println!(
            "  {:<24} {:>12} {}",
            field_label(tr, field),
            input.get(field),
            field.unit()
        );
    }
    let mut heading = "";
    for row in report::result_rows(&eval.derived) {
        if row.heading_key != heading {
            heading = row.heading_key;
            println!("-- {} --", tr.t(heading));
        }
        println!("  {:<24} {:<3} = {}", tr.t(row.label_key), row.symbol, row.value);
    }
    println!("-- {} --", tr.t(keys::CHART_HEADING));
    match &eval.chart {
        Ok(overlay) => {
            println!(
                "  {} (Kb={}, B={})",
                tr.t(keys::CHART_POINT),
                report::format_dimensionless(overlay.point.model_x),
                report::format_dimensionless(overlay.point.model_y)
            );
            println!(
                "  {}",
                tr.tf(
                    keys::CHART_POSITION,
                    &[
                        ("x", format!("{:.1}", overlay.point.pixel_x)),
                        ("y", format!("{:.1}", overlay.point.pixel_y)),
                    ]
                )
            );
            if !overlay.point.within_chart {
                println!("  {}", tr.t(keys::CHART_OUTSIDE));
            }
            println!(
                "  {}",
                tr.tf(
                    keys::CHART_CALIBRATION,
                    &[("version", overlay.calibration_version.to_string())]
                )
            );
        }
        Err(reason) => println!(
            "  {}",
            tr.tf(keys::CHART_UNAVAILABLE, &[("reason", reason.to_string())])
        ),
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    let n = io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    if n == 0 {
        return Err(AppError::EndOfInput);
    }
    Ok(buf)
}
