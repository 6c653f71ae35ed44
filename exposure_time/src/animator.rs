// animator.rs - Per-tick lit run bookkeeping

use crate::grid::{Cell, LitRun};
use crate::layout::{Layout, PixelRect};

/// What changed between two ticks.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Repaint {
    /// Previously lit run to clear, `None` on the first tick after the surface is (re)created.
    pub clear: Option<LitRun>,
    pub draw: LitRun,
    /// Bounding rectangle of every cell in `clear` and `draw`.
    pub region: PixelRect,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AnimationState {
    last_run: Option<LitRun>,
}

impl AnimationState {
    #[cfg(test)]
    pub fn last_run(&self) -> Option<LitRun> {
        self.last_run
    }

    /// Forgets the lit run, used when the buffer has been redrawn from scratch.
    pub fn reset(&mut self) {
        self.last_run = None;
    }

    /// Computes the repaint needed to move the lit run to start at `lead`.
    /// Returns `None` when the run has not moved.
    pub fn tick(&self, layout: &Layout, lead: Cell) -> Option<Repaint> {
        let draw = LitRun::starting_at(lead);
        if self.last_run == Some(draw) {
            return None;
        }

        let clear = self.last_run;
        let region = clear
            .iter()
            .chain(std::iter::once(&draw))
            .flat_map(|run| run.cells().iter())
            .map(|&cell| layout.cell_rect(cell))
            .reduce(PixelRect::union)
            .unwrap_or_default();

        Some(Repaint { clear, draw, region })
    }

    pub fn apply(&mut self, repaint: &Repaint) {
        self.last_run = Some(repaint.draw);
    }
}
