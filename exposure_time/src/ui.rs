// ui.rs - Frame update: measure, tick, upload, paint

use eframe::egui;
use egui::{Align2, Color32, FontId, Rect, TextureOptions, Vec2};

use crate::ExposureTime;
use crate::canvas::Canvas;
use crate::layout::PixelRect;
use crate::position;
use crate::renderer::LABEL_FONT_SIZE;

const TEXTURE_NAME: &str = "exposure-grid";

impl eframe::App for ExposureTime {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(self.config.palette.background))
            .show(ctx, |ui| {
                let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::hover());
                let area = response.rect;

                // One canvas pixel per logical point
                let width = area.width().floor().max(0.0) as usize;
                let height = area.height().floor().max(0.0) as usize;
                let reallocated = self.surface.ensure_size(width, height);
                let dirty = self.surface.advance(position::epoch_millis());
                self.upload(ctx, reallocated, dirty);

                if let Some(texture) = &self.texture {
                    painter.image(
                        texture.id(),
                        Rect::from_min_size(area.min, texture.size_vec2()),
                        Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                        Color32::WHITE,
                    );
                }

                for label in self.surface.labels() {
                    painter.text(
                        area.min + Vec2::new(label.anchor[0], label.anchor[1]),
                        Align2::CENTER_BOTTOM,
                        &label.text,
                        FontId::proportional(LABEL_FONT_SIZE),
                        self.config.palette.label,
                    );
                }
            });

        self.notice.show(ctx);
    }
}

/// How much of the canvas a frame has to send to the GPU.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Upload {
    Full,
    Partial(PixelRect),
    Skip,
}

/// A new texture or a reallocated canvas needs everything, otherwise only the
/// part of the dirty region that lies on the canvas.
fn plan_upload(canvas: &Canvas, has_texture: bool, reallocated: bool, dirty: Option<PixelRect>) -> Upload {
    if reallocated || !has_texture {
        return Upload::Full;
    }
    match dirty.and_then(|r| canvas.clip(r)) {
        Some(region) => Upload::Partial(region),
        None => Upload::Skip,
    }
}

impl ExposureTime {
    fn upload(&mut self, ctx: &egui::Context, reallocated: bool, dirty: Option<PixelRect>) {
        let Some(canvas) = self.surface.canvas() else { return };

        match plan_upload(canvas, self.texture.is_some(), reallocated, dirty) {
            Upload::Skip => {}
            Upload::Partial(region) => {
                if let (Some(texture), Some(image)) = (&mut self.texture, canvas.crop(region)) {
                    texture.set_partial([region.x as usize, region.y as usize], image, TextureOptions::NEAREST);
                }
            }
            Upload::Full => match &mut self.texture {
                Some(texture) => texture.set(canvas.image().clone(), TextureOptions::NEAREST),
                None => {
                    self.texture = Some(ctx.load_texture(TEXTURE_NAME, canvas.image().clone(), TextureOptions::NEAREST));
                }
            },
        }
    }
}
