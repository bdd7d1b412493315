use bell_atomizer_toolbox::config::{load_or_default, Config};

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("{name}_{}.toml", std::process::id()))
}

#[test]
fn missing_file_gives_defaults_without_creating_it() {
    let path = temp_path("bell_config_missing");
    let _ = std::fs::remove_file(&path);
    let cfg = load_or_default(&path).expect("defaults");
    assert_eq!(cfg, Config::default());
    assert!(!path.exists());
}

#[test]
fn saved_configuration_loads_back() {
    let path = temp_path("bell_config_roundtrip");
    let mut cfg = Config::default();
    cfg.language = "de".into();
    cfg.window_alpha = 0.8;
    cfg.chart.enabled = false;
    cfg.chart.local_path = Some("chart.png".into());
    cfg.defaults.rotation_speed_rpm = 42_000.0;
    cfg.save(&path).expect("save");
    let loaded = load_or_default(&path).expect("load");
    assert_eq!(loaded, cfg);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn partial_file_fills_in_defaults() {
    let path = temp_path("bell_config_partial");
    std::fs::write(&path, "language = \"en\"\n[defaults]\ncone_angle_deg = 45.0\n").expect("write");
    let cfg = load_or_default(&path).expect("load");
    assert_eq!(cfg.language, "en");
    assert_eq!(cfg.defaults.cone_angle_deg, 45.0);
    assert_eq!(cfg.defaults.rotation_speed_rpm, 50_000.0);
    assert!(cfg.chart.enabled);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn malformed_file_is_a_parse_error() {
    let path = temp_path("bell_config_broken");
    std::fs::write(&path, "language = [unterminated").expect("write");
    assert!(load_or_default(&path).is_err());
    let _ = std::fs::remove_file(&path);
}
