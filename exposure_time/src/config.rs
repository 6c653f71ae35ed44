// config.rs - Display settings

use std::time::Duration;

use egui::Color32;

pub const WINDOW_MIN_WIDTH: f32 = 980.0;
pub const WINDOW_MIN_HEIGHT: f32 = 150.0;

/// Colours used by the grid renderer and the animator.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub background: Color32,
    pub outline: Color32,
    pub lit: Color32,
    pub label: Color32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color32::BLACK,
            outline: Color32::DARK_GRAY,
            lit: Color32::WHITE,
            label: Color32::DARK_GRAY,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DisplayConfig {
    pub title: String,
    pub update_interval: Duration,
    /// Added to the wall clock before resolving the lit cell.
    pub time_offset_ms: i64,
    pub preferred_theme: String,
    pub window_min_size: [f32; 2],
    pub palette: Palette,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: "Exposure Time".to_owned(),
            update_interval: Duration::from_millis(1),
            time_offset_ms: 0,
            preferred_theme: "dark".to_owned(),
            window_min_size: [WINDOW_MIN_WIDTH, WINDOW_MIN_HEIGHT],
            palette: Palette::default(),
        }
    }
}
