// position.rs - Wall clock to grid cell

use std::time::{SystemTime, UNIX_EPOCH};

use crate::grid::Cell;

/// Length of one full sweep of the grid.
pub const PERIOD_MS: i64 = 10_000;

/// Half a bucket, so times round to the nearest 10ms instead of truncating.
const ROUNDING_MS: i64 = 5;

/// Resolves a wall-clock instant in epoch milliseconds to the cell that
/// represents it. `offset_ms` shifts the reading and may be negative.
pub fn resolve(epoch_ms: i64, offset_ms: i64) -> Cell {
    let time = (ROUNDING_MS + epoch_ms + offset_ms).rem_euclid(PERIOD_MS); // 0 to 9999
    let seconds = time / 1000;                                              // 0 to 9
    let millis = time % 1000;                                               // 0 to 999
    Cell::new((millis / 10) as usize, seconds as usize)
}

/// Current system time in milliseconds since the Unix epoch.
/// A clock set before the epoch reads as zero.
pub fn epoch_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{COLUMNS, ROWS};

    #[test]
    fn start_of_period_is_origin() {
        assert_eq!(resolve(0, 0), Cell::new(0, 0));
        assert_eq!(resolve(1_700_000_000_000, 0), Cell::new(0, 0));
    }

    #[test]
    fn end_of_period_is_last_cell() {
        // 9990 + 5 = 9995
        assert_eq!(resolve(9_990, 0), Cell::new(99, 9));
    }

    #[test]
    fn rounds_to_nearest_bucket() {
        assert_eq!(resolve(4, 0), Cell::new(0, 0));
        assert_eq!(resolve(5, 0), Cell::new(1, 0));
        assert_eq!(resolve(9_995, 0), Cell::new(0, 0));
    }

    #[test]
    fn offset_shifts_reading() {
        assert_eq!(resolve(0, 1_250), Cell::new(25, 1));
        assert_eq!(resolve(0, -10), Cell::new(99, 9));
    }

    #[test]
    fn always_in_range() {
        for t in (-25_000..25_000).step_by(7) {
            let cell = resolve(t, 0);
            assert!(cell.col < COLUMNS);
            assert!(cell.row < ROWS);
        }
    }

    #[test]
    fn ten_ms_advances_one_cell() {
        let base = 1_700_000_123_456;
        for step in 0..2_000 {
            let t = base + step * 10;
            assert_eq!(resolve(t + 10, 0), resolve(t, 0).next());
        }
    }

    #[test]
    fn clock_is_after_epoch() {
        assert!(epoch_millis() > 0);
    }
}
