//! Square grid storage and character-map rendering.

use crate::types::{CellKind, Point};

/// Square matrix of cell kinds representing the maze.
///
/// This structure owns the cells of an `N` by `N` maze. It is indexed by one-based
/// [`Point`]s and stored zero-based in row-major order. Every access is bounds checked
/// against the dimension; writes outside the grid are rejected, never clamped. The grid is
/// the single source of truth for occupancy.
#[derive(Debug)]
pub(crate) struct Grid {
    /// Side length of the square grid.
    ///
    /// This field holds the dimension `N` fixed at construction. All valid coordinates
    /// satisfy `1 <= row, col <= N`.
    dimension: usize,
    /// Cell storage in row-major order.
    ///
    /// This field holds the `N * N` cells backing the grid, all starting out empty.
    cells: Vec<CellKind>,
}

impl Grid {
    /// Allocates a new grid with every cell empty.
    ///
    /// This function produces the `dimension` by `dimension` matrix the builder mutates
    /// during the load phase. Allocation failure aborts the process, which is the only
    /// acceptable outcome for the generator; there is no recovery path without a grid.
    pub(crate) fn new(dimension: usize) -> Self {
        Self {
            dimension,
            cells: vec![CellKind::Empty; dimension * dimension],
        }
    }

    /// Returns the side length of the grid.
    pub(crate) const fn dimension(&self) -> usize {
        self.dimension
    }

    /// Translates a one-based point into an index into the cell storage.
    ///
    /// This function performs the bounds check shared by every read and write. It returns
    /// `None` for any point with a component outside `1..=N`, including negative components.
    fn index(&self, point: Point) -> Option<usize> {
        let row = usize::try_from(point.row).ok()?;
        let col = usize::try_from(point.col).ok()?;
        if !(1..=self.dimension).contains(&row) || !(1..=self.dimension).contains(&col) {
            return None;
        }

        Some((row - 1) * self.dimension + (col - 1))
    }

    /// Reads the cell kind at a point.
    ///
    /// This function returns `None` when the point falls outside the grid.
    pub(crate) fn get(&self, point: Point) -> Option<CellKind> {
        self.cells.get(self.index(point)?).copied()
    }

    /// Writes a cell kind at a point, reporting whether the write happened.
    ///
    /// This function stores `kind` at `point` and returns `true` when the point lies inside
    /// the grid. Out-of-range writes leave the grid untouched and return `false` so the
    /// caller can report the rejected placement.
    pub(crate) fn set(&mut self, point: Point, kind: CellKind) -> bool {
        let Some(index) = self.index(point) else {
            return false;
        };

        if let Some(cell) = self.cells.get_mut(index) {
            *cell = kind;
        }

        true
    }

    /// Determines whether the cell at a point holds anything other than empty.
    ///
    /// This function treats out-of-range points as not occupied. That permissive default
    /// keeps the occupancy query total over every point the configuration can produce.
    pub(crate) fn is_occupied(&self, point: Point) -> bool {
        self.get(point).is_some_and(|kind| kind != CellKind::Empty)
    }

    /// Counts the cells that are still empty.
    ///
    /// This function supports the capacity check performed before random obstacle
    /// placement.
    pub(crate) fn free_cells(&self) -> usize {
        self.cells
            .iter()
            .filter(|kind| **kind == CellKind::Empty)
            .count()
    }

    /// Renders the grid as the character map written to the output file.
    ///
    /// This function emits `N` lines of `N` symbol characters with a newline after every
    /// row and no header or delimiters, matching the format the consuming exercise reads.
    pub(crate) fn render(&self) -> String {
        if self.dimension == 0 {
            return String::new();
        }

        let mut output = String::with_capacity(self.dimension * (self.dimension + 1));
        for row in self.cells.chunks(self.dimension) {
            for kind in row {
                output.push(kind.symbol());
            }
            output.push('\n');
        }

        output
    }
}
