use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const APP_TITLE: &str = "app.title";
    pub const APP_EXIT: &str = "app.exit";
    pub const ERROR_PREFIX: &str = "error.prefix";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const ERROR_INVALID_INPUT: &str = "error.invalid_input";

    pub const INPUT_HEADING: &str = "input.heading";
    pub const INPUT_RESET: &str = "input.reset";

    pub const RESULT_HEADING: &str = "result.heading";
    pub const RESULT_FILM_HEADING: &str = "result.film_heading";

    pub const CHART_HEADING: &str = "chart.heading";
    pub const CHART_LOADING: &str = "chart.loading";
    pub const CHART_UNAVAILABLE: &str = "chart.unavailable";
    pub const CHART_OUTSIDE: &str = "chart.outside";
    pub const CHART_AXIS_X: &str = "chart.axis_x";
    pub const CHART_AXIS_Y: &str = "chart.axis_y";
    pub const CHART_POINT: &str = "chart.point";
    pub const CHART_POSITION: &str = "chart.position";
    pub const CHART_HOVER: &str = "chart.hover";
    pub const CHART_RELOAD: &str = "chart.reload";
    pub const CHART_LOAD_FILE: &str = "chart.load_file";
    pub const CHART_OVERLAY_WRITTEN: &str = "chart.overlay_written";
    pub const CHART_OVERLAY_SKIPPED: &str = "chart.overlay_skipped";
    pub const CHART_CALIBRATION: &str = "chart.calibration";

    pub const CLI_PARAMS_HEADING: &str = "cli.params_heading";
    pub const CLI_PROMPT_FIELD: &str = "cli.prompt_field";
    pub const CLI_PROMPT_AGAIN: &str = "cli.prompt_again";
    pub const CLI_UNIT_HINT: &str = "cli.unit_hint";

    pub const HELP_BUTTON: &str = "help.button";
    pub const HELP_TITLE: &str = "help.title";
    pub const HELP_INTRO: &str = "help.intro";
    pub const HELP_FORMULAS: &str = "help.formulas";
    pub const HELP_REFERENCE: &str = "help.reference";

    pub const SETTINGS_TITLE: &str = "settings.title";
    pub const SETTINGS_LANGUAGE: &str = "settings.language";
    pub const SETTINGS_LANGUAGE_AUTO: &str = "settings.language_auto";
    pub const SETTINGS_ALPHA: &str = "settings.alpha";
    pub const SETTINGS_SAVE: &str = "settings.save";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    De,
}

impl Language {
    fn from_code(code: &str) -> Self {
        if code.trim().to_lowercase().starts_with("de") {
            Language::De
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(en/de)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        if overrides.is_some() {
            log::debug!("language pack loaded for {lang_code}");
        }
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩 → 선택 언어 → 영어 → 키 자체 순으로 찾는다.
    pub fn t(&self, key: &str) -> String {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v.clone();
        }
        let builtin = match self.lang {
            Language::De => de(key).or_else(|| en(key)),
            Language::En => en(key),
        };
        builtin.map(str::to_string).unwrap_or_else(|| key.to_string())
    }

    /// `{name}` 자리표시자를 채운 번역을 반환한다.
    pub fn tf(&self, key: &str, vars: &[(&str, String)]) -> String {
        fill_template(&self.t(key), vars)
    }
}

/// 템플릿 문자열의 `{name}`을 값으로 치환한다.
pub fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (k, v) in vars {
        out = out.replace(&format!("{{{k}}}"), v);
    }
    out
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("de") => Some("de".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "de" => Some("de".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 [section] 아래 key = "value".
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

/// 중첩 테이블을 점(.)으로 이어진 평면 키로 펼친다.
pub fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        APP_TITLE => "Breakup Modes at the Rotary Bell",
        APP_EXIT => "Exiting.",
        ERROR_PREFIX => "Error",
        ERROR_INVALID_NUMBER => "Please enter a number (optionally followed by a unit).",
        ERROR_INVALID_INPUT => "Invalid input",
        INPUT_HEADING => "Parameters",
        INPUT_RESET => "Reset to defaults",
        "field.volume_flow" => "Paint volume flow",
        "field.rotation_speed" => "Rotational speed",
        "field.bell_diameter" => "Bell diameter",
        "field.cone_angle" => "Contour angle",
        "field.fluid_density" => "Paint density",
        "field.fluid_viscosity" => "Viscosity",
        "field.surface_tension" => "Surface tension",
        RESULT_HEADING => "Dimensionless numbers",
        RESULT_FILM_HEADING => "Film thickness at the bell edge",
        "result.ohnesorge" => "Ohnesorge number",
        "result.edge_loading" => "Edge loading",
        "result.weber" => "Weber number",
        "result.operating_number" => "Operating number",
        "result.film_thickness" => "Film thickness",
        "result.angular_velocity" => "Angular velocity",
        "result.rim_speed" => "Rim speed",
        CHART_HEADING => "Classification chart",
        CHART_LOADING => "Loading chart image…",
        CHART_UNAVAILABLE => "Chart unavailable ({reason}). The numbers above are still valid.",
        CHART_OUTSIDE => "The operating point lies outside the chart range.",
        CHART_AXIS_X => "Edge loading Kb",
        CHART_AXIS_Y => "Operating number B",
        CHART_POINT => "Operating point",
        CHART_POSITION => "Marker position: x={x} px, y={y} px",
        CHART_HOVER => "Cursor: Kb={x}, B={y}",
        CHART_RELOAD => "Reload chart",
        CHART_LOAD_FILE => "Load chart from file…",
        CHART_OVERLAY_WRITTEN => "Overlay written to {path}",
        CHART_OVERLAY_SKIPPED => "Overlay not written: chart unavailable.",
        CHART_CALIBRATION => "Chart calibration: {version}",
        CLI_PARAMS_HEADING => "Enter parameters (empty line keeps the value shown in brackets):",
        CLI_PROMPT_FIELD => "{label} [{value} {unit}]: ",
        CLI_PROMPT_AGAIN => "Evaluate another set? [Y/n]: ",
        CLI_UNIT_HINT => "Values may carry a unit, e.g. \"1 l/min\", \"0.02 Pa.s\", \"5 rad/s\".",
        HELP_BUTTON => "Help",
        HELP_TITLE => "Notes on use",
        HELP_INTRO => "This tool computes dimensionless numbers for paint atomization at rotary bells: Ohnesorge number (Oh), edge loading (Kb), Weber number (We) and operating number (B). It also estimates the film thickness at the bell edge (δ).",
        HELP_FORMULAS => "ω = 2π·n/60\nδ = ∛( 3·V̇·η / (ρ·2π·ω²·r²·sin β) )\nOh = η / √(ρ·σ·D)\nKb = V̇²·ρ / (σ·D³)\nWe = ω²·D³·ρ / σ\nB = We^0.5 · Kb^(5/6) · Oh^(10/36)",
        HELP_REFERENCE => "Chart adapted from: Weckerle, G., Dissertation, Universität Stuttgart, 2003 (powder slurry).",
        SETTINGS_TITLE => "Settings",
        SETTINGS_LANGUAGE => "Language",
        SETTINGS_LANGUAGE_AUTO => "System",
        SETTINGS_ALPHA => "Window transparency",
        SETTINGS_SAVE => "Save settings",
        SETTINGS_SAVED => "Saved.",
        _ => return None,
    })
}

fn de(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        APP_TITLE => "Zerfallsarten an Rotationsglocke",
        APP_EXIT => "Programm wird beendet.",
        ERROR_PREFIX => "Fehler",
        ERROR_INVALID_NUMBER => "Bitte eine Zahl eingeben (optional mit Einheit).",
        ERROR_INVALID_INPUT => "Ungültige Eingabe",
        INPUT_HEADING => "Parameter",
        INPUT_RESET => "Standardwerte",
        "field.volume_flow" => "Lackvolumenstrom",
        "field.rotation_speed" => "Drehzahl",
        "field.bell_diameter" => "Glockendurchmesser",
        "field.cone_angle" => "Konturwinkel",
        "field.fluid_density" => "Lackdichte",
        "field.fluid_viscosity" => "Viskosität",
        "field.surface_tension" => "Oberflächenspannung",
        RESULT_HEADING => "Berechnete Kennzahlen",
        RESULT_FILM_HEADING => "Filmdicke am Glockenrand",
        "result.ohnesorge" => "Ohnesorge-Zahl",
        "result.edge_loading" => "Kantenbelastung",
        "result.weber" => "Weber-Zahl",
        "result.operating_number" => "Betriebskennzahl",
        "result.film_thickness" => "Filmdicke",
        "result.angular_velocity" => "Winkelgeschwindigkeit",
        "result.rim_speed" => "Umfangsgeschwindigkeit",
        CHART_HEADING => "Zerfallsdiagramm",
        CHART_LOADING => "Diagramm wird geladen…",
        CHART_UNAVAILABLE => "Diagramm nicht verfügbar ({reason}). Die Kennzahlen oben bleiben gültig.",
        CHART_OUTSIDE => "Der Betriebspunkt liegt außerhalb des Diagrammbereichs.",
        CHART_AXIS_X => "Lackkennzahl",
        CHART_AXIS_Y => "Betriebskennzahl",
        CHART_POINT => "Betriebspunkt",
        CHART_POSITION => "Markerposition: x={x} px, y={y} px",
        CHART_HOVER => "Cursor: Kb={x}, B={y}",
        CHART_RELOAD => "Diagramm neu laden",
        CHART_LOAD_FILE => "Diagramm aus Datei laden…",
        CHART_OVERLAY_WRITTEN => "Overlay gespeichert: {path}",
        CHART_OVERLAY_SKIPPED => "Kein Overlay gespeichert: Diagramm nicht verfügbar.",
        CHART_CALIBRATION => "Diagrammkalibrierung: {version}",
        CLI_PARAMS_HEADING => "Parameter eingeben (leere Zeile übernimmt den Wert in Klammern):",
        CLI_PROMPT_AGAIN => "Weiteren Parametersatz berechnen? [J/n]: ",
        CLI_UNIT_HINT => "Werte dürfen eine Einheit tragen, z. B. \"1 l/min\", \"0.02 Pa.s\", \"5 rad/s\".",
        HELP_BUTTON => "Hinweise",
        HELP_TITLE => "Hinweise zur Verwendung",
        HELP_INTRO => "Diese App berechnet dimensionslose Kennzahlen für die Lackzerstäubung an Rotationsglocken: Ohnesorge-Zahl (Oh), Kantenbelastung (Kb), Weber-Zahl (We) und Betriebskennzahl (B). Zusätzlich wird die Filmdicke am Glockenrand (δ) berechnet.",
        HELP_REFERENCE => "Abbildung in Anlehnung an: Weckerle, G., Dissertation, Universität Stuttgart, 2003 (Pulver-Slurry).",
        SETTINGS_TITLE => "Einstellungen",
        SETTINGS_LANGUAGE => "Sprache",
        SETTINGS_LANGUAGE_AUTO => "System",
        SETTINGS_ALPHA => "Fenstertransparenz",
        SETTINGS_SAVE => "Einstellungen speichern",
        SETTINGS_SAVED => "Gespeichert.",
        _ => return None,
    })
}
