use log::LevelFilter;
use std::io::Write;

/// 로그 레벨 결정 순서: 명시 인자 → `RUST_LOG` → info.
pub fn resolve_level(level: Option<&str>) -> LevelFilter {
    level
        .and_then(|l| l.trim().parse::<LevelFilter>().ok())
        .or_else(|| {
            std::env::var("RUST_LOG")
                .ok()
                .and_then(|v| v.trim().parse().ok())
        })
        .unwrap_or(LevelFilter::Info)
}

/// env_logger를 초기화한다. 두 번째 호출부터는 무시된다.
pub fn init_logging(level: Option<&str>) {
    let log_level = resolve_level(level);
    let result = env_logger::Builder::new()
        .filter_level(log_level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {:5}] {}",
                buf.timestamp_seconds(),
                record.level(),
                record.args()
            )
        })
        .try_init();
    if result.is_ok() {
        log::debug!("logger initialized (level: {log_level})");
    }
}
