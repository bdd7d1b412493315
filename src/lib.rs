//! 회전 벨 분무기의 무차원 수 계산과 분열 형태 차트 매핑.
//! 계산 코어는 라이브러리로 두고 CLI와 GUI가 함께 사용한다.

pub mod app;
pub mod atomizer;
pub mod chart;
pub mod config;
pub mod conversion;
pub mod i18n;
pub mod logging;
pub mod quantity;
pub mod report;
pub mod ui_cli;
pub mod units;
