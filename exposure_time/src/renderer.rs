// renderer.rs - Static grid: outlines, column labels and axis caption

use crate::canvas::Canvas;
use crate::config::Palette;
use crate::grid::{Cell, COLUMNS, ROWS};
use crate::layout::Layout;

pub const LABEL_FONT_SIZE: f32 = 11.0;
const LABEL_LINE_HEIGHT: i32 = 14;
const LABEL_GAP: i32 = 5;                             // between label baseline and grid
const LABEL_EVERY: usize = 10;                        // columns
const CAPTION: &str = "time / ms";

/// Text placed over the canvas. The anchor is the centre of the text's
/// bottom edge, in canvas pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub anchor: [f32; 2],
}

/// Clears the canvas and draws all cell outlines. Returns the labels for the
/// host to draw on top, since the canvas holds pixels only.
pub fn render_grid(canvas: &mut Canvas, layout: &Layout, palette: &Palette) -> Vec<Label> {
    canvas.fill(palette.background);

    for row in 0..ROWS {
        for col in 0..COLUMNS {
            canvas.stroke_rect(layout.outline_rect(Cell::new(col, row)), palette.outline);
        }
    }

    let label_y = (layout.top_margin - LABEL_GAP) as f32;
    let mut labels: Vec<Label> = (0..COLUMNS)
        .step_by(LABEL_EVERY)
        .map(|col| {
            let rect = layout.cell_rect(Cell::new(col, 0));
            let centre = rect.x - 1 + layout.cell_size / 2;
            Label {
                text: (col * 10).to_string(),
                anchor: [centre as f32, label_y],
            }
        })
        .collect();

    labels.push(Label {
        text: CAPTION.to_owned(),
        anchor: [
            canvas.width() as f32 / 2.0,
            (layout.top_margin - (LABEL_LINE_HEIGHT + LABEL_GAP)) as f32,
        ],
    });

    labels
}
