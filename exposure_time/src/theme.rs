// theme.rs - Preferred look and feel

use anyhow::bail;
use egui::Visuals;

/// Looks up the named visual theme.
pub fn visuals_for(name: &str) -> anyhow::Result<Visuals> {
    match name.to_ascii_lowercase().as_str() {
        "dark" => Ok(Visuals::dark()),
        "light" => Ok(Visuals::light()),
        other => bail!("look and feel \"{other}\" is not available, using the default"),
    }
}

/// Startup notice shown once when the preferred theme could not be applied.
#[derive(Debug, Default)]
pub struct ThemeNotice {
    message: Option<String>,
}

impl ThemeNotice {
    /// Applies the preferred theme, or records why it could not be.
    pub fn apply(ctx: &egui::Context, preferred: &str) -> Self {
        match visuals_for(preferred) {
            Ok(visuals) => {
                ctx.set_visuals(visuals);
                Self::default()
            }
            Err(err) => {
                log::warn!("{err:#}");
                Self { message: Some(err.to_string()) }
            }
        }
    }

    #[cfg(test)]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Shows the notice as a small dialog until the user dismisses it.
    pub fn show(&mut self, ctx: &egui::Context) {
        let Some(message) = &self.message else { return };
        let mut dismissed = false;
        egui::Window::new("Theme")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(message.as_str());
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        if dismissed {
            self.message = None;
        }
    }
}
