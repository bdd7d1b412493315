use std::process::ExitCode;

use bell_atomizer_toolbox::i18n::{self, Translator};
use bell_atomizer_toolbox::ui_cli::CliArgs;
use bell_atomizer_toolbox::{app, config, logging};
use clap::Parser;

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() -> ExitCode {
    match try_run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();
    let cfg = config::load_or_default(&args.config)?;
    logging::init_logging(args.log_level.as_deref().or(cfg.log_level.as_deref()));

    let lang = i18n::resolve_language(args.lang.as_deref(), Some(cfg.language.as_str()));
    let tr = Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());
    log::debug!("language: {}", tr.language().as_code());

    app::run(&args, &cfg, &tr)?;
    Ok(())
}
