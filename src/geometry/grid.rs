//! Row-major grid addressing over a flat vertex buffer.
//!
//! The host authors its vertex buffer as a grid of rows with a fixed width.
//! Nothing in the buffer records that width, so the layout is supplied
//! alongside it and never verified: a wrong width yields wrong neighbors,
//! not an error.

use std::ops::Range;

/// Row-major grid view of `len` cells with `dim` cells per row.
///
/// The last row may be shorter than `dim` when `len` is not a multiple of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    dim: usize,
    len: usize,
}

impl GridLayout {
    /// Creates a layout for `len` cells with `dim` cells per row.
    ///
    /// # Panics
    /// Panics if `dim` is zero.
    pub fn new(dim: usize, len: usize) -> Self {
        assert!(dim > 0, "grid row width must be positive");
        Self { dim, len }
    }

    /// Cells per row.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of rows, counting a trailing partial row.
    pub fn rows(&self) -> usize {
        self.len.div_ceil(self.dim)
    }

    /// Row of cell `i`.
    pub fn row_of(&self, i: usize) -> usize {
        i / self.dim
    }

    /// Column of cell `i`.
    pub fn col_of(&self, i: usize) -> usize {
        i % self.dim
    }

    /// Linear index range covered by `row`.
    pub fn row_range(&self, row: usize) -> Range<usize> {
        let start = (row * self.dim).min(self.len);
        let end = ((row + 1) * self.dim).min(self.len);
        start..end
    }

    /// Number of cells in `col`, which shrinks by one when the last row is
    /// partial and does not reach this column.
    pub fn column_len(&self, col: usize) -> usize {
        if col >= self.dim || col >= self.len {
            return 0;
        }
        (self.len - col).div_ceil(self.dim)
    }

    /// Raw linear offset `i + rows * dim + cols`, kept only when it lands
    /// inside the buffer.
    ///
    /// No wrapping or clamping is applied: a column offset that runs past a
    /// row edge lands in the neighboring row.
    pub fn offset(&self, i: usize, rows: isize, cols: isize) -> Option<usize> {
        let pos = i as isize + rows * self.dim as isize + cols;
        if pos >= 0 && (pos as usize) < self.len {
            Some(pos as usize)
        } else {
            None
        }
    }

    pub fn same_row(&self, a: usize, b: usize) -> bool {
        self.row_of(a) == self.row_of(b)
    }

    pub fn same_column(&self, a: usize, b: usize) -> bool {
        self.col_of(a) == self.col_of(b)
    }

    /// Cell reached from `i` by the window offset `(rows, cols)`, if it is in
    /// bounds and shares `i`'s row or column.
    ///
    /// Offsets that land on a cell crossing both the row and the column of
    /// `i` are rejected, which turns a square window into a plus shape.
    pub fn cross_neighbor(&self, i: usize, rows: isize, cols: isize) -> Option<usize> {
        self.offset(i, rows, cols)
            .filter(|&pos| self.same_row(i, pos) || self.same_column(i, pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_and_column_of() {
        let grid = GridLayout::new(4, 16);
        assert_eq!(grid.row_of(5), 1);
        assert_eq!(grid.col_of(5), 1);
        assert_eq!(grid.row_of(15), 3);
        assert_eq!(grid.col_of(15), 3);
        assert_eq!(grid.rows(), 4);
    }

    #[test]
    fn test_partial_last_row() {
        let grid = GridLayout::new(3, 7);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.row_range(2), 6..7);
        assert_eq!(grid.column_len(0), 3);
        assert_eq!(grid.column_len(1), 2);
        assert_eq!(grid.column_len(2), 2);
        assert_eq!(grid.row_range(5), 7..7);
    }

    #[test]
    fn test_offset_bounds() {
        let grid = GridLayout::new(4, 16);
        assert_eq!(grid.offset(5, 1, 1), Some(10));
        assert_eq!(grid.offset(0, -1, 0), None);
        assert_eq!(grid.offset(15, 0, 1), None);
        // Column overflow spills into the next row.
        assert_eq!(grid.offset(3, 0, 1), Some(4));
    }

    #[test]
    fn test_cross_neighbor_rejects_diagonals() {
        let grid = GridLayout::new(4, 16);
        assert_eq!(grid.cross_neighbor(5, 0, 1), Some(6));
        assert_eq!(grid.cross_neighbor(5, 1, 0), Some(9));
        assert_eq!(grid.cross_neighbor(5, 1, 1), None);
        assert_eq!(grid.cross_neighbor(5, -1, -1), None);
        // Row spill: lands in the next row and a different column.
        assert_eq!(grid.cross_neighbor(3, 0, 1), None);
    }

    #[test]
    #[should_panic]
    fn test_zero_width_panics() {
        let _ = GridLayout::new(0, 4);
    }
}
