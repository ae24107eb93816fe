
use log::trace;

use crate::distance::costs::CostModel;

/// Number of cells in the stack-resident scratch area used for short inputs
pub const SCRATCH_CELLS: usize = 1000;
/// Longest column dimension that still fits in the scratch area, i.e. `2 * len + 3 <= SCRATCH_CELLS`
pub const SHORT_LEN_THRESHOLD: usize = (SCRATCH_CELLS - 3) / 2;

/// Size of the circular buffer for a given column length.
/// Two rows of interior cells, plus one so the transposition look-back is not overwritten before it is read.
pub fn radix_for(from_len: usize) -> usize {
    2 * from_len + 3
}

/// All of the mutable state for one sweep over the DP grid.
/// Conceptually, `from` runs left to right (columns) and `to` runs top to bottom (rows).
/// Row 0 and column 0 of the grid are never stored, they are derived from the insert/delete costs on demand.
/// Only the last `radix` interior cells are kept, addressed modulo `radix` relative to the write cursor `index`.
pub struct DpContext<'a> {
    /// The column sequence, always non-empty
    from: &'a [u8],
    /// The row sequence, always non-empty
    to: &'a [u8],
    /// Costs for this sweep
    costs: CostModel,
    /// Circular storage, exactly `radix` cells long
    buffer: &'a mut [u64],
    /// Modulus for all buffer offsets
    radix: usize,
    /// Next cell to write
    index: usize,
    /// Smallest value written in the current row
    low: u64,
    /// Number of interior cells written so far
    cells_computed: u64,
    /// Number of rows fully written so far
    rows_computed: usize,
}

impl<'a> DpContext<'a> {
    /// Creates a new context over the provided storage.
    /// # Arguments
    /// * `from` - the column sequence, must be non-empty
    /// * `to` - the row sequence, must be non-empty
    /// * `costs` - the cost model for this sweep
    /// * `storage` - backing cells, at least `radix_for(from.len())` long; extra cells are ignored
    pub fn new(from: &'a [u8], to: &'a [u8], costs: CostModel, storage: &'a mut [u64]) -> Self {
        assert!(!from.is_empty() && !to.is_empty(), "DpContext requires non-empty sequences");
        let radix = radix_for(from.len());
        assert!(storage.len() >= radix, "DpContext storage is too small: {} < {radix}", storage.len());
        Self {
            from,
            to,
            costs,
            buffer: &mut storage[..radix],
            radix,
            index: 0,
            low: 0,
            cells_computed: 0,
            rows_computed: 0,
        }
    }

    pub fn cells_computed(&self) -> u64 {
        self.cells_computed
    }

    pub fn rows_computed(&self) -> usize {
        self.rows_computed
    }

    /// The most recently written cell, which is the answer once the sweep stops.
    pub fn result(&self) -> u64 {
        self.buffer[self.wrap(self.index + self.radix - 1)]
    }

    /// Runs the full sweep, returning true if it stopped early because a row minimum exceeded `ceiling`.
    /// The early exit only counts when rows were actually skipped.
    /// # Arguments
    /// * `ceiling` - if Some, stop once every cell in a row is above this value
    pub fn sweep(&mut self, ceiling: Option<u64>) -> bool {
        self.first_row();
        for row in 1..self.to.len() {
            self.next_row(row);
            if let Some(ceiling) = ceiling {
                if self.low > ceiling && row + 1 < self.to.len() {
                    trace!("Row {row} minimum {} exceeds ceiling {ceiling}, stopping", self.low);
                    return true;
                }
            }
        }
        false
    }

    /// Fills in the first stored row, where every north neighbor is on the implicit row 0.
    fn first_row(&mut self) {
        let ins = self.costs.insert_cost();
        let del = self.costs.delete_cost();

        self.buffer[0] = (ins + del).min(self.substitution(0, 0));
        self.low = self.buffer[0];
        self.index = 1;

        for col in 1..self.from.len() {
            let c = col as u64;
            let value = (c * del + self.substitution(col, 0))
                .min((c + 1) * del + ins)
                .min(self.buffer[self.index - 1] + del);
            self.buffer[self.index] = value;
            self.low = self.low.min(value);
            self.index += 1;
        }

        self.cells_computed += self.from.len() as u64;
        self.rows_computed += 1;
    }

    /// Fills in one row after the first, one column at a time.
    /// # Arguments
    /// * `row` - 0-based index into `to` for the row being written
    fn next_row(&mut self, row: usize) {
        let ins = self.costs.insert_cost();
        let del = self.costs.delete_cost();
        let swap = self.costs.swap_cost();

        for col in 0..self.from.len() {
            let mut value = (self.north_west(row, col) + self.substitution(col, row))
                .min(self.north(row, col + 1) + ins)
                .min(self.west(row + 1, col) + del);

            // adjacent transposition, e.g. "ab" -> "ba"
            if col > 0 && self.from[col] == self.to[row - 1] && self.from[col - 1] == self.to[row] {
                value = value.min(self.two_back(row - 1, col - 1) + swap);
            }

            self.buffer[self.index] = value;
            if col == 0 || value < self.low {
                self.low = value;
            }
            self.index = self.wrap(self.index + 1);
        }

        self.cells_computed += self.from.len() as u64;
        self.rows_computed += 1;
    }

    fn substitution(&self, col: usize, row: usize) -> u64 {
        if self.from[col] == self.to[row] {
            0
        } else {
            self.costs.substitute_cost()
        }
    }

    fn wrap(&self, offset: usize) -> usize {
        offset % self.radix
    }

    /// Value of grid cell (`x`, `y`), where `x` counts `to` bytes and `y` counts `from` bytes.
    /// Cells on row 0 or column 0 are computed, everything else comes from the buffer at `offset`.
    fn grid(&self, x: usize, y: usize, offset: usize) -> u64 {
        if x == 0 {
            y as u64 * self.costs.delete_cost()
        } else if y == 0 {
            x as u64 * self.costs.insert_cost()
        } else {
            self.buffer[self.wrap(offset)]
        }
    }

    fn north_west(&self, x: usize, y: usize) -> u64 {
        self.grid(x, y, self.index + self.from.len() + 2)
    }

    fn north(&self, x: usize, y: usize) -> u64 {
        self.grid(x, y, self.index + self.from.len() + 3)
    }

    fn west(&self, x: usize, y: usize) -> u64 {
        self.grid(x, y, self.index + self.radix - 1)
    }

    fn two_back(&self, x: usize, y: usize) -> u64 {
        self.grid(x, y, self.index + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radix() {
        assert_eq!(radix_for(1), 5);
        assert_eq!(radix_for(SHORT_LEN_THRESHOLD), 999);
        assert!(radix_for(SHORT_LEN_THRESHOLD) <= SCRATCH_CELLS);
        assert!(radix_for(SHORT_LEN_THRESHOLD + 1) > SCRATCH_CELLS);
    }

    #[test]
    fn test_one_two_unit() {
        // grid for "one" across and "two" down with unit costs:
        //   _ o n e
        // _ 0 1 2 3
        // t 1 1 2 3
        // w 2 2 2 3
        // o 3 2 3 3
        let mut storage = vec![0; radix_for(3)];
        let mut context = DpContext::new(b"one", b"two", CostModel::unit(), &mut storage);
        assert!(!context.sweep(None));
        assert_eq!(context.result(), 3);
        assert_eq!(context.cells_computed(), 9);
        assert_eq!(context.rows_computed(), 3);
    }

    #[test]
    fn test_single_cells() {
        let mut storage = vec![0; SCRATCH_CELLS];
        let mut context = DpContext::new(b"a", b"a", CostModel::default(), &mut storage);
        context.sweep(None);
        assert_eq!(context.result(), 0);

        // substitution is 3, but delete + insert is only 2
        let mut context = DpContext::new(b"a", b"b", CostModel::default(), &mut storage);
        context.sweep(None);
        assert_eq!(context.result(), 2);
    }

    #[test]
    fn test_oversized_storage_is_trimmed() {
        // leftover values from a prior sweep must not leak into the next one
        let mut storage = vec![u64::MAX / 4; SCRATCH_CELLS];
        let mut context = DpContext::new(b"abc", b"abd", CostModel::unit(), &mut storage);
        context.sweep(None);
        assert_eq!(context.result(), 1);
    }

    #[test]
    #[should_panic]
    fn test_storage_too_small() {
        let mut storage = vec![0; 4];
        let _context = DpContext::new(b"ab", b"ab", CostModel::unit(), &mut storage);
    }
}
