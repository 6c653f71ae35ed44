// layout.rs - Cell size and margins for a given canvas size

use crate::grid::{Cell, COLUMNS, GROUP, ROWS};

// Layout configuration, in canvas pixels
pub const CANVAS_MIN_WIDTH: i32 = 330;
pub const CANVAS_MIN_HEIGHT: i32 = 80;
pub const LEFT_MARGIN: i32 = 10;
pub const TOP_MARGIN: i32 = 20;                       // room for the column labels
pub const GROUP_SPACING: i32 = 1;                     // extra gap after every GROUP cells

const GROUP_GAPS: i32 = (COLUMNS / GROUP) as i32;

/// Axis-aligned pixel rectangle (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl PixelRect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(self) -> i32 {
        self.y + self.h
    }

    pub fn is_empty(self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Smallest rectangle covering both.
    pub fn union(self, other: PixelRect) -> PixelRect {
        let x0 = self.x.min(other.x);
        let y0 = self.y.min(other.y);
        let x1 = self.right().max(other.right());
        let y1 = self.bottom().max(other.bottom());
        PixelRect::new(x0, y0, x1 - x0, y1 - y0)
    }

    /// Grows the rectangle by `n` pixels on every side.
    pub fn inflate(self, n: i32) -> PixelRect {
        PixelRect::new(self.x - n, self.y - n, self.w + 2 * n, self.h + 2 * n)
    }
}

/// Derived placement of the grid inside a canvas.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Layout {
    pub cell_size: i32,
    pub left_margin: i32,
    pub top_margin: i32,
}

impl Layout {
    /// Fits 100 grouped columns and 10 rows centred in `width` x `height`.
    /// The tighter of the two axes decides the cell size. Sizes below the
    /// minimum canvas are treated as the minimum.
    pub fn compute(width: i32, height: i32) -> Self {
        let width = width.max(CANVAS_MIN_WIDTH);
        let height = height.max(CANVAS_MIN_HEIGHT);

        let by_width = (width - (LEFT_MARGIN + GROUP_GAPS * GROUP_SPACING)) / COLUMNS as i32;
        let by_height = (height - TOP_MARGIN - GROUP_SPACING - 1) / ROWS as i32;
        let cell_size = by_width.min(by_height).max(1);
        let used_width = GROUP_GAPS * GROUP_SPACING + cell_size * COLUMNS as i32;
        let left_margin = (width - used_width) / 2;

        let used_height = TOP_MARGIN + GROUP_SPACING + cell_size * ROWS as i32;
        let top_margin = TOP_MARGIN + ((height - used_height) / 2).max(0);

        Self { cell_size, left_margin, top_margin }
    }

    /// Side of the lit square inside a cell outline.
    pub fn interior_size(&self) -> i32 {
        (self.cell_size - 2).max(1)
    }

    /// The lit interior of a cell.
    pub fn cell_rect(&self, cell: Cell) -> PixelRect {
        let col = cell.col as i32;
        let row = cell.row as i32;
        let group = GROUP as i32;
        let x = self.left_margin + col * self.cell_size + (col / group) * GROUP_SPACING;
        let y = self.top_margin + row * self.cell_size + (row / group) * GROUP_SPACING;
        let side = self.interior_size();
        PixelRect::new(x, y, side, side)
    }

    /// The one-pixel frame drawn around a cell's interior.
    pub fn outline_rect(&self, cell: Cell) -> PixelRect {
        self.cell_rect(cell).inflate(1)
    }
}
