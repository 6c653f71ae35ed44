// canvas.rs - Offscreen pixel buffer the grid is drawn into

use egui::{Color32, ColorImage};

use crate::layout::PixelRect;

/// CPU-side image that is uploaded to the window as a texture.
/// All drawing is clipped to the canvas bounds.
pub struct Canvas {
    image: ColorImage,
}

impl Canvas {
    /// Allocates a canvas of at least 1x1 pixels filled with `background`.
    pub fn new(width: usize, height: usize, background: Color32) -> Self {
        Self {
            image: ColorImage::new([width.max(1), height.max(1)], background),
        }
    }

    pub fn width(&self) -> usize {
        self.image.size[0]
    }

    pub fn height(&self) -> usize {
        self.image.size[1]
    }

    pub fn image(&self) -> &ColorImage {
        &self.image
    }

    #[cfg(test)]
    pub fn pixel(&self, x: usize, y: usize) -> Color32 {
        self.image.pixels[y * self.width() + x]
    }

    pub fn fill(&mut self, color: Color32) {
        self.image.pixels.fill(color);
    }

    pub fn fill_rect(&mut self, rect: PixelRect, color: Color32) {
        let Some(rect) = self.clip(rect) else { return };
        let width = self.width();
        for y in rect.y..rect.bottom() {
            let start = y as usize * width + rect.x as usize;
            self.image.pixels[start..start + rect.w as usize].fill(color);
        }
    }

    /// Draws the one-pixel border lying just inside `rect`.
    pub fn stroke_rect(&mut self, rect: PixelRect, color: Color32) {
        if rect.is_empty() {
            return;
        }
        self.fill_rect(PixelRect::new(rect.x, rect.y, rect.w, 1), color);
        self.fill_rect(PixelRect::new(rect.x, rect.bottom() - 1, rect.w, 1), color);
        self.fill_rect(PixelRect::new(rect.x, rect.y, 1, rect.h), color);
        self.fill_rect(PixelRect::new(rect.right() - 1, rect.y, 1, rect.h), color);
    }

    /// Intersection of `rect` with the canvas, `None` when nothing is left.
    pub fn clip(&self, rect: PixelRect) -> Option<PixelRect> {
        let x0 = rect.x.max(0);
        let y0 = rect.y.max(0);
        let x1 = rect.right().min(self.width() as i32);
        let y1 = rect.bottom().min(self.height() as i32);
        let clipped = PixelRect::new(x0, y0, x1 - x0, y1 - y0);
        (!clipped.is_empty()).then_some(clipped)
    }

    /// Copies a region out as a standalone image for partial texture upload.
    pub fn crop(&self, rect: PixelRect) -> Option<ColorImage> {
        let rect = self.clip(rect)?;
        let width = self.width();
        let mut pixels = Vec::with_capacity((rect.w * rect.h) as usize);
        for y in rect.y..rect.bottom() {
            let start = y as usize * width + rect.x as usize;
            pixels.extend_from_slice(&self.image.pixels[start..start + rect.w as usize]);
        }
        Some(ColorImage {
            size: [rect.w as usize, rect.h as usize],
            pixels,
        })
    }
}
