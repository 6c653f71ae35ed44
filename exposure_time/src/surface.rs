// surface.rs - Offscreen buffer lifecycle and per-tick drawing

use crate::animator::AnimationState;
use crate::canvas::Canvas;
use crate::config::Palette;
use crate::layout::{Layout, PixelRect};
use crate::position;
use crate::renderer::{self, Label};

enum SurfaceState {
    Uninitialized,
    Ready {
        size: [usize; 2],
        layout: Layout,
        canvas: Canvas,
        labels: Vec<Label>,
    },
}

/// Owns the offscreen buffer and keeps it in step with the window size and
/// the wall clock.
pub struct DisplaySurface {
    state: SurfaceState,
    animation: AnimationState,
    palette: Palette,
    time_offset_ms: i64,
}

impl DisplaySurface {
    pub fn new(palette: Palette, time_offset_ms: i64) -> Self {
        Self {
            state: SurfaceState::Uninitialized,
            animation: AnimationState::default(),
            palette,
            time_offset_ms,
        }
    }

    #[cfg(test)]
    pub fn is_ready(&self) -> bool {
        matches!(self.state, SurfaceState::Ready { .. })
    }

    /// Reallocates the buffer and redraws the static grid when the observed
    /// size differs from the current one. Returns true when that happened.
    pub fn ensure_size(&mut self, width: usize, height: usize) -> bool {
        let size = [width.max(1), height.max(1)];
        if let SurfaceState::Ready { size: current, .. } = &self.state {
            if *current == size {
                return false;
            }
        }

        let layout = Layout::compute(size[0] as i32, size[1] as i32);
        let mut canvas = Canvas::new(size[0], size[1], self.palette.background);
        let labels = renderer::render_grid(&mut canvas, &layout, &self.palette);
        self.animation.reset();

        log::debug!(
            "surface allocated: {}x{} px, cell {} px, margins {}/{}",
            size[0],
            size[1],
            layout.cell_size,
            layout.left_margin,
            layout.top_margin
        );

        self.state = SurfaceState::Ready { size, layout, canvas, labels };
        true
    }

    /// Advances the animation to `epoch_ms`. Clears the previous run, lights
    /// the new one and returns the changed region, or `None` if nothing moved
    /// or the surface has not been sized yet.
    pub fn advance(&mut self, epoch_ms: i64) -> Option<PixelRect> {
        let SurfaceState::Ready { layout, canvas, .. } = &mut self.state else {
            return None;
        };

        let lead = position::resolve(epoch_ms, self.time_offset_ms);
        let repaint = self.animation.tick(layout, lead)?;

        if let Some(old) = repaint.clear {
            for &cell in old.cells() {
                canvas.fill_rect(layout.cell_rect(cell), self.palette.background);
            }
        }
        for &cell in repaint.draw.cells() {
            canvas.fill_rect(layout.cell_rect(cell), self.palette.lit);
        }
        self.animation.apply(&repaint);

        log::trace!("repaint {:?} lead {:?}", repaint.region, repaint.draw.lead());
        Some(repaint.region)
    }

    pub fn canvas(&self) -> Option<&Canvas> {
        match &self.state {
            SurfaceState::Ready { canvas, .. } => Some(canvas),
            SurfaceState::Uninitialized => None,
        }
    }

    pub fn labels(&self) -> &[Label] {
        match &self.state {
            SurfaceState::Ready { labels, .. } => labels,
            SurfaceState::Uninitialized => &[],
        }
    }

    #[cfg(test)]
    pub fn layout(&self) -> Option<Layout> {
        match &self.state {
            SurfaceState::Ready { layout, .. } => Some(*layout),
            SurfaceState::Uninitialized => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Cell, COLUMNS, ROWS};

    fn lit_cells(surface: &DisplaySurface) -> Vec<Cell> {
        let canvas = surface.canvas().unwrap();
        let layout = surface.layout().unwrap();
        let lit = Palette::default().lit;
        let mut cells = Vec::new();
        for row in 0..ROWS {
            for col in 0..COLUMNS {
                let r = layout.cell_rect(Cell::new(col, row));
                if canvas.pixel(r.x as usize, r.y as usize) == lit {
                    cells.push(Cell::new(col, row));
                }
            }
        }
        cells
    }

    #[test]
    fn starts_uninitialized() {
        let mut surface = DisplaySurface::new(Palette::default(), 0);
        assert!(!surface.is_ready());
        assert!(surface.canvas().is_none());
        assert!(surface.labels().is_empty());
        assert_eq!(surface.advance(0), None);
    }

    #[test]
    fn first_size_allocates_and_same_size_is_noop() {
        let mut surface = DisplaySurface::new(Palette::default(), 0);
        assert!(surface.ensure_size(980, 150));
        assert!(surface.is_ready());
        assert!(!surface.ensure_size(980, 150));
        assert_eq!(surface.labels().len(), 11);
    }

    #[test]
    fn resize_reallocates_and_redraws() {
        let mut surface = DisplaySurface::new(Palette::default(), 0);
        surface.ensure_size(980, 150);
        surface.advance(0);
        assert!(surface.ensure_size(1200, 400));
        let canvas = surface.canvas().unwrap();
        assert_eq!((canvas.width(), canvas.height()), (1200, 400));
        assert_eq!(surface.layout(), Some(Layout::compute(1200, 400)));
        assert!(lit_cells(&surface).is_empty());
    }

    #[test]
    fn zero_size_window_is_clamped() {
        let mut surface = DisplaySurface::new(Palette::default(), 0);
        assert!(surface.ensure_size(0, 0));
        let canvas = surface.canvas().unwrap();
        assert_eq!((canvas.width(), canvas.height()), (1, 1));
        surface.advance(0);
    }

    #[test]
    fn advance_lights_exactly_three_cells() {
        let mut surface = DisplaySurface::new(Palette::default(), 0);
        surface.ensure_size(980, 150);

        assert!(surface.advance(1_250).is_some());
        assert_eq!(lit_cells(&surface), [Cell::new(25, 1), Cell::new(26, 1), Cell::new(27, 1)]);

        assert!(surface.advance(1_260).is_some());
        assert_eq!(lit_cells(&surface), [Cell::new(26, 1), Cell::new(27, 1), Cell::new(28, 1)]);
    }

    #[test]
    fn advance_within_same_bucket_is_noop() {
        let mut surface = DisplaySurface::new(Palette::default(), 0);
        surface.ensure_size(980, 150);
        assert!(surface.advance(1_250).is_some());
        assert_eq!(surface.advance(1_253), None);
    }

    #[test]
    fn wrapped_run_is_lit_across_rows() {
        let mut surface = DisplaySurface::new(Palette::default(), 0);
        surface.ensure_size(980, 150);
        surface.advance(9_980);
        assert_eq!(lit_cells(&surface), [Cell::new(0, 0), Cell::new(98, 9), Cell::new(99, 9)]);
    }

    #[test]
    fn offset_moves_the_run() {
        let mut surface = DisplaySurface::new(Palette::default(), 100);
        surface.ensure_size(980, 150);
        surface.advance(0);
        assert_eq!(lit_cells(&surface)[0], Cell::new(10, 0));
    }
}
