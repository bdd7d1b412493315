#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::time::Duration;
use std::{env, fs, thread};

use bell_atomizer_toolbox::{
    app,
    atomizer::{self, Evaluation, InputField, InputParameters, InvalidInput},
    chart::{
        self, AssetUnavailable, ChartOverlay, FileImageProvider, ImageProvider, OperatingPoint,
        RasterImage, REFERENCE_CHART,
    },
    config, i18n,
    i18n::keys,
    logging, report,
};
use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en/de)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if (a == "--lang" || a == "-L") && i + 1 < args.len() {
            cli_lang = Some(args[i + 1].clone());
            i += 1;
        }
        i += 1;
    }

    let config_path = PathBuf::from(config::DEFAULT_CONFIG_PATH);
    let app_cfg = match config::load_or_default(&config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{e}; using default configuration");
            config::Config::default()
        }
    };
    logging::init_logging(app_cfg.log_level.as_deref());

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size([1100.0, 720.0])
        .with_transparent(true);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        "Bell Atomizer Toolbox",
        options,
        Box::new(move |cc| {
            Box::new(GuiApp::new(
                app_cfg,
                config_path,
                cli_lang.as_deref(),
                Some(cc.egui_ctx.clone()),
            ))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: img.to_rgba8().into_raw(),
        width: w,
        height: h,
    })
}

/// 차트 이미지 로딩 상태.
enum ChartState {
    Loading(Receiver<Result<RasterImage, AssetUnavailable>>),
    Ready {
        raster: RasterImage,
        texture: Option<egui::TextureHandle>,
    },
    Unavailable(AssetUnavailable),
}

/// 운전점의 이미지 픽셀 좌표를 화면에 그려진 이미지 사각형 안의 위치로 옮긴다.
fn marker_position(point: &OperatingPoint, image_size: (u32, u32), rect: egui::Rect) -> egui::Pos2 {
    let sx = rect.width() / image_size.0.max(1) as f32;
    let sy = rect.height() / image_size.1.max(1) as f32;
    egui::pos2(
        rect.min.x + point.pixel_x as f32 * sx,
        rect.min.y + point.pixel_y as f32 * sy,
    )
}

/// `marker_position`의 역: 화면 위치 → 이미지 픽셀 좌표.
fn screen_to_image(pos: egui::Pos2, image_size: (u32, u32), rect: egui::Rect) -> (f64, f64) {
    let fx = f64::from((pos.x - rect.min.x) / rect.width());
    let fy = f64::from((pos.y - rect.min.y) / rect.height());
    (fx * f64::from(image_size.0), fy * f64::from(image_size.1))
}

fn field_speed(field: InputField) -> f64 {
    match field {
        InputField::RotationSpeed => 100.0,
        InputField::FluidDensity => 5.0,
        InputField::ConeAngle => 0.5,
        _ => 0.1,
    }
}

struct GuiApp {
    config: config::Config,
    config_path: PathBuf,
    tr: i18n::Translator,
    lang_input: String,
    window_alpha: f32,
    settings_status: Option<String>,
    show_help: bool,
    show_settings: bool,
    input: InputParameters,
    /// 마지막 평가와 그때의 입력. 입력이나 차트가 바뀔 때만 다시 계산한다.
    evaluation: Option<(InputParameters, Result<Evaluation, InvalidInput>)>,
    chart: ChartState,
    ctx: Option<egui::Context>,
}

impl GuiApp {
    fn new(
        config: config::Config,
        config_path: PathBuf,
        cli_lang: Option<&str>,
        ctx: Option<egui::Context>,
    ) -> Self {
        let lang_code = i18n::resolve_language(cli_lang, Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        log::info!("GUI language resolved: {lang_code}");
        let mut s = Self {
            lang_input: config.language.clone(),
            window_alpha: config.window_alpha.clamp(0.3, 1.0),
            input: config.defaults,
            config,
            config_path,
            tr,
            settings_status: None,
            show_help: false,
            show_settings: false,
            evaluation: None,
            chart: ChartState::Unavailable(AssetUnavailable::Disabled),
            ctx,
        };
        s.reload_chart();
        s
    }

    /// 설정된 출처에서 차트를 다시 불러온다.
    fn reload_chart(&mut self) {
        if !self.config.chart.enabled {
            self.set_chart(ChartState::Unavailable(AssetUnavailable::Disabled));
            return;
        }
        let provider = app::select_provider(None, false, &self.config.chart);
        self.spawn_fetch(provider);
    }

    fn spawn_fetch(&mut self, provider: Box<dyn ImageProvider + Send>) {
        let (tx, rx) = mpsc::channel();
        let ctx = self.ctx.clone();
        thread::spawn(move || {
            let result = app::load_chart(provider.as_ref());
            // 창이 닫혀 수신자가 없으면 결과는 버린다.
            let _ = tx.send(result);
            if let Some(ctx) = ctx {
                ctx.request_repaint();
            }
        });
        self.set_chart(ChartState::Loading(rx));
    }

    fn set_chart(&mut self, state: ChartState) {
        self.chart = state;
        self.evaluation = None;
    }

    fn poll_chart(&mut self) {
        let ChartState::Loading(rx) = &self.chart else {
            return;
        };
        let next = match rx.try_recv() {
            Ok(Ok(raster)) => ChartState::Ready {
                raster,
                texture: None,
            },
            Ok(Err(reason)) => ChartState::Unavailable(reason),
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => {
                ChartState::Unavailable(AssetUnavailable::Io("loader thread stopped".into()))
            }
        };
        self.set_chart(next);
    }

    fn refresh_evaluation(&mut self) {
        if matches!(&self.evaluation, Some((last, _)) if *last == self.input) {
            return;
        }
        let loading = AssetUnavailable::Loading;
        let raster = match &self.chart {
            ChartState::Ready { raster, .. } => Ok(raster),
            ChartState::Unavailable(reason) => Err(reason),
            ChartState::Loading(_) => Err(&loading),
        };
        let result = atomizer::compute_all(&self.input, raster, &REFERENCE_CHART);
        if let Err(e) = &result {
            log::debug!("evaluation rejected: {e}");
        }
        self.evaluation = Some((self.input, result));
    }

    fn ui_inputs(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.tr.t(keys::INPUT_HEADING));
        ui.separator();
        egui::Grid::new("inputs")
            .num_columns(2)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                for field in InputField::ALL {
                    ui.label(self.tr.t(&format!("field.{}", field.key())));
                    ui.add(
                        egui::DragValue::new(self.input.get_mut(field))
                            .speed(field_speed(field))
                            .suffix(format!(" {}", field.unit())),
                    );
                    ui.end_row();
                }
            });
        ui.add_space(6.0);
        if ui.button(self.tr.t(keys::INPUT_RESET)).clicked() {
            self.input = self.config.defaults;
        }
    }

    fn ui_results(&self, ui: &mut egui::Ui, eval: &Evaluation) {
        let rows = report::result_rows(&eval.derived);
        let mut headings: Vec<&'static str> = Vec::new();
        for row in &rows {
            if !headings.contains(&row.heading_key) {
                headings.push(row.heading_key);
            }
        }
        for heading in headings {
            ui.heading(self.tr.t(heading));
            egui::Grid::new(("results", heading))
                .num_columns(3)
                .striped(true)
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    for row in rows.iter().filter(|r| r.heading_key == heading) {
                        ui.label(self.tr.t(row.label_key));
                        ui.strong(row.symbol);
                        ui.monospace(row.value.as_str());
                        ui.end_row();
                    }
                });
            ui.add_space(6.0);
        }
    }

    fn ui_chart(&mut self, ui: &mut egui::Ui, overlay: Option<&ChartOverlay>) {
        ui.horizontal(|ui| {
            ui.heading(self.tr.t(keys::CHART_HEADING));
            if ui.button(self.tr.t(keys::CHART_RELOAD)).clicked() {
                self.reload_chart();
            }
            if ui.button(self.tr.t(keys::CHART_LOAD_FILE)).clicked() {
                if let Some(path) = FileDialog::new()
                    .add_filter("image", &["png", "jpg", "jpeg"])
                    .pick_file()
                {
                    self.spawn_fetch(Box::new(FileImageProvider { path }));
                }
            }
        });
        ui.separator();

        let tr = &self.tr;
        match &mut self.chart {
            ChartState::Loading(_) => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(tr.t(keys::CHART_LOADING));
                });
            }
            ChartState::Unavailable(reason) => {
                ui.label(tr.tf(keys::CHART_UNAVAILABLE, &[("reason", reason.to_string())]));
            }
            ChartState::Ready { raster, texture } => {
                let image_size = (raster.width(), raster.height());
                let texture = texture.get_or_insert_with(|| {
                    let color = egui::ColorImage::from_rgba_unmultiplied(
                        [image_size.0 as usize, image_size.1 as usize],
                        raster.as_rgba_bytes(),
                    );
                    ui.ctx()
                        .load_texture("chart", color, egui::TextureOptions::LINEAR)
                });

                let avail = ui.available_width().max(200.0);
                let scale = avail / image_size.0 as f32;
                let size = egui::vec2(avail, image_size.1 as f32 * scale);
                let (rect, response) = ui.allocate_exact_size(size, egui::Sense::hover());
                let painter = ui.painter_at(rect);
                painter.image(
                    texture.id(),
                    rect,
                    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    egui::Color32::WHITE,
                );

                if let Some(overlay) = overlay {
                    let center = marker_position(&overlay.point, image_size, rect);
                    let radius = (chart::overlay::marker_radius(image_size.0, image_size.1)
                        as f32
                        * scale)
                        .max(4.0);
                    painter.circle(
                        center,
                        radius,
                        egui::Color32::from_rgb(220, 20, 20),
                        egui::Stroke::new(1.5, egui::Color32::BLACK),
                    );
                    ui.label(format!(
                        "{}: Kb={}, B={}",
                        tr.t(keys::CHART_POINT),
                        report::format_dimensionless(overlay.point.model_x),
                        report::format_dimensionless(overlay.point.model_y)
                    ));
                    if !overlay.point.within_chart {
                        ui.colored_label(egui::Color32::YELLOW, tr.t(keys::CHART_OUTSIDE));
                    }
                    ui.small(tr.tf(
                        keys::CHART_CALIBRATION,
                        &[("version", overlay.calibration_version.to_string())],
                    ));

                    if let Some(pos) = response.hover_pos() {
                        let (px, py) = screen_to_image(pos, image_size, rect);
                        let (kb, b) = chart::pixel_to_model(px, py, &overlay.anchor);
                        ui.label(tr.tf(
                            keys::CHART_HOVER,
                            &[
                                ("x", report::format_dimensionless(kb)),
                                ("y", report::format_dimensionless(b)),
                            ],
                        ));
                    }
                }
                ui.small(format!(
                    "{} / {}",
                    tr.t(keys::CHART_AXIS_X),
                    tr.t(keys::CHART_AXIS_Y)
                ));
            }
        }
    }

    fn ui_help(&mut self, ctx: &egui::Context) {
        let tr = &self.tr;
        egui::Window::new(tr.t(keys::HELP_TITLE))
            .collapsible(false)
            .resizable(true)
            .open(&mut self.show_help)
            .show(ctx, |ui| {
                ui.label(tr.t(keys::HELP_INTRO));
                ui.separator();
                ui.monospace(tr.t(keys::HELP_FORMULAS));
                ui.separator();
                ui.small(tr.t(keys::HELP_REFERENCE));
                ui.small(tr.tf(
                    keys::CHART_CALIBRATION,
                    &[("version", REFERENCE_CHART.version.to_string())],
                ));
            });
    }

    fn ui_settings(&mut self, ctx: &egui::Context) {
        let mut open = self.show_settings;
        egui::Window::new(self.tr.t(keys::SETTINGS_TITLE))
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label(self.tr.t(keys::SETTINGS_ALPHA));
                ui.add(egui::Slider::new(&mut self.window_alpha, 0.3..=1.0).text("alpha"));
                ui.separator();
                ui.label(self.tr.t(keys::SETTINGS_LANGUAGE));
                egui::ComboBox::from_id_source("lang_choice")
                    .selected_text(&self.lang_input)
                    .show_ui(ui, |ui| {
                        ui.selectable_value(
                            &mut self.lang_input,
                            "auto".into(),
                            self.tr.t(keys::SETTINGS_LANGUAGE_AUTO),
                        );
                        ui.selectable_value(&mut self.lang_input, "en".into(), "English");
                        ui.selectable_value(&mut self.lang_input, "de".into(), "Deutsch");
                    });
                if ui.button(self.tr.t(keys::SETTINGS_SAVE)).clicked() {
                    self.config.language = self.lang_input.clone();
                    self.config.window_alpha = self.window_alpha;
                    let resolved = i18n::resolve_language(None, Some(&self.config.language));
                    self.tr = i18n::Translator::new_with_pack(
                        &resolved,
                        self.config.language_pack_dir.as_deref(),
                    );
                    self.settings_status = Some(match self.config.save(&self.config_path) {
                        Ok(()) => self.tr.t(keys::SETTINGS_SAVED),
                        Err(e) => format!("{}: {e}", self.tr.t(keys::ERROR_PREFIX)),
                    });
                }
                if let Some(msg) = &self.settings_status {
                    ui.label(msg);
                }
            });
        self.show_settings = open;
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.poll_chart();
        if matches!(self.chart, ChartState::Loading(_)) {
            ctx.request_repaint_after(Duration::from_millis(200));
        }

        let mut style = (*ctx.style()).clone();
        style.interaction.selectable_labels = false;
        style.visuals.window_fill = style.visuals.window_fill.linear_multiply(self.window_alpha);
        style.visuals.panel_fill = style.visuals.panel_fill.linear_multiply(self.window_alpha);
        ctx.set_style(style);

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(self.tr.t(keys::APP_TITLE));
                ui.separator();
                if ui.button(self.tr.t(keys::HELP_BUTTON)).clicked() {
                    self.show_help = true;
                }
                if ui.button(self.tr.t(keys::SETTINGS_TITLE)).clicked() {
                    self.show_settings = true;
                }
            });
        });

        if self.show_help {
            self.ui_help(ctx);
        }
        if self.show_settings {
            self.ui_settings(ctx);
        }

        egui::SidePanel::left("inputs_panel")
            .resizable(true)
            .default_width(300.0)
            .show(ctx, |ui| self.ui_inputs(ui));

        self.refresh_evaluation();
        let evaluation = self.evaluation.as_ref().map(|(_, r)| r.clone());

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| match &evaluation {
                    Some(Ok(eval)) => {
                        self.ui_results(ui, eval);
                        ui.add_space(12.0);
                        self.ui_chart(ui, eval.chart.as_ref().ok());
                    }
                    Some(Err(e)) => {
                        ui.colored_label(
                            egui::Color32::LIGHT_RED,
                            format!("{}: {e}", self.tr.t(keys::ERROR_INVALID_INPUT)),
                        );
                        ui.add_space(12.0);
                        self.ui_chart(ui, None);
                    }
                    None => self.ui_chart(ui, None),
                });
        });
    }
}
