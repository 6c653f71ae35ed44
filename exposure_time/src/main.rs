// main.rs - Exposure time grid: a sweeping 10ms timing reference for cameras
// Uses grid.rs / layout.rs / animator.rs for the model and ui.rs for drawing

use anyhow::Context as _;
use eframe::egui;
use egui::TextureHandle;

mod animator;
mod canvas;
mod config;
mod grid;
mod layout;
mod logging;
mod position;
mod renderer;
mod surface;
mod theme;
mod timer;
mod ui;

use config::DisplayConfig;
use surface::DisplaySurface;
use theme::ThemeNotice;
use timer::TimerDriver;

fn main() -> anyhow::Result<()> {
    logging::init_logging(log::LevelFilter::Info);

    let config = DisplayConfig::default();
    let runtime = tokio::runtime::Runtime::new().context("failed to start the timer runtime")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.title.clone())
            .with_inner_size(config.window_min_size)
            .with_min_inner_size(config.window_min_size),
        ..Default::default()
    };

    log::info!(
        "starting, tick every {:?}, clock offset {} ms",
        config.update_interval,
        config.time_offset_ms
    );

    let title = config.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Box::new(ExposureTime::new(cc, config, runtime))),
    )
    .map_err(|err| anyhow::anyhow!("window terminated with an error: {err}"))
}

/// The window's only content: the grid surface, its GPU texture and the timer
/// that keeps it moving.
pub struct ExposureTime {
    pub config: DisplayConfig,
    surface: DisplaySurface,
    texture: Option<TextureHandle>,
    notice: ThemeNotice,
    _timer: TimerDriver,
}

impl ExposureTime {
    pub fn new(cc: &eframe::CreationContext<'_>, config: DisplayConfig, runtime: tokio::runtime::Runtime) -> Self {
        let notice = ThemeNotice::apply(&cc.egui_ctx, &config.preferred_theme);
        let timer = TimerDriver::start(runtime, config.update_interval, cc.egui_ctx.clone());

        Self {
            surface: DisplaySurface::new(config.palette, config.time_offset_ms),
            texture: None,
            notice,
            _timer: timer,
            config,
        }
    }
}
