// grid.rs - Grid coordinates and the lit run

// Compile-time grid shape
pub const COLUMNS: usize = 100;                       // 10ms buckets within one second
pub const ROWS: usize = 10;                           // seconds
pub const GROUP: usize = 5;                           // cells per visual group
pub const RUN_LEN: usize = 3;                         // lit cells per tick

/// One grid position: `col` is the 10ms bucket, `row` the second.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Cell {
    pub col: usize,
    pub row: usize,
}

impl Cell {
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    /// The cell 10ms later. Column 99 wraps to 0 on the next row, row 9 wraps to 0.
    pub fn next(self) -> Self {
        if self.col + 1 < COLUMNS {
            Self::new(self.col + 1, self.row)
        } else {
            Self::new(0, (self.row + 1) % ROWS)
        }
    }
}

/// Three horizontally contiguous cells starting at the lead cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LitRun {
    cells: [Cell; RUN_LEN],
}

impl LitRun {
    pub fn starting_at(lead: Cell) -> Self {
        let second = lead.next();
        let third = second.next();
        Self { cells: [lead, second, third] }
    }

    pub fn lead(&self) -> Cell {
        self.cells[0]
    }

    pub fn cells(&self) -> &[Cell; RUN_LEN] {
        &self.cells
    }

    /// Number of distinct rows touched by the run (1 or 2).
    #[cfg(test)]
    pub fn row_span(&self) -> usize {
        if self.cells.iter().all(|c| c.row == self.cells[0].row) { 1 } else { 2 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_advances_column() {
        assert_eq!(Cell::new(4, 3).next(), Cell::new(5, 3));
    }

    #[test]
    fn next_wraps_column_onto_next_row() {
        assert_eq!(Cell::new(99, 3).next(), Cell::new(0, 4));
    }

    #[test]
    fn next_wraps_last_cell_to_origin() {
        assert_eq!(Cell::new(99, 9).next(), Cell::new(0, 0));
    }

    #[test]
    fn run_inside_a_row() {
        let run = LitRun::starting_at(Cell::new(10, 2));
        assert_eq!(run.cells(), &[Cell::new(10, 2), Cell::new(11, 2), Cell::new(12, 2)]);
        assert_eq!(run.row_span(), 1);
    }

    #[test]
    fn run_wrapping_rows() {
        let run = LitRun::starting_at(Cell::new(98, 9));
        assert_eq!(run.cells(), &[Cell::new(98, 9), Cell::new(99, 9), Cell::new(0, 0)]);
        assert_eq!(run.row_span(), 2);
    }

    #[test]
    fn every_run_is_contiguous_and_spans_at_most_two_rows() {
        for row in 0..ROWS {
            for col in 0..COLUMNS {
                let run = LitRun::starting_at(Cell::new(col, row));
                assert!(run.row_span() <= 2);
                let cells = run.cells();
                for pair in cells.windows(2) {
                    assert_eq!(pair[0].next(), pair[1]);
                }
            }
        }
    }
}
