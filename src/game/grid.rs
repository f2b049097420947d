use crate::consts;
use rand::Rng;

/// A position on the grid, in grid units.  Coordinates are signed so that a
/// position just off the edge of the grid can be represented.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub(crate) struct Cell {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Cell {
    pub(crate) const fn new(x: i32, y: i32) -> Cell {
        Cell { x, y }
    }
}

/// The playing field: a `width`×`height` area divided into square cells with
/// sides of length `seg_size`
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Grid {
    width: i32,
    height: i32,
    seg_size: i32,
}

impl Grid {
    /// `width` and `height` should be positive multiples of `seg_size`.
    pub(crate) const fn new(width: i32, height: i32, seg_size: i32) -> Grid {
        Grid {
            width,
            height,
            seg_size,
        }
    }

    pub(crate) fn seg_size(self) -> i32 {
        self.seg_size
    }

    /// Number of cells in each row
    pub(crate) fn columns(self) -> i32 {
        self.width / self.seg_size
    }

    /// Number of cells in each column
    pub(crate) fn rows(self) -> i32 {
        self.height / self.seg_size
    }

    /// Test whether `cell` lies inside the grid
    pub(crate) fn contains(self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.x) && (0..self.height).contains(&cell.y)
    }

    /// Return a uniformly random grid-aligned cell
    pub(crate) fn random_cell<R: Rng>(self, rng: &mut R) -> Cell {
        let col = rng.random_range(0..self.columns());
        let row = rng.random_range(0..self.rows());
        Cell::new(col * self.seg_size, row * self.seg_size)
    }

    /// Iterate over every cell in the grid, row by row
    pub(crate) fn cells(self) -> impl Iterator<Item = Cell> {
        let seg = self.seg_size;
        let columns = self.columns();
        (0..self.rows())
            .flat_map(move |row| (0..columns).map(move |col| Cell::new(col * seg, row * seg)))
    }
}

impl Default for Grid {
    fn default() -> Grid {
        Grid::new(consts::WIDTH, consts::HEIGHT, consts::SEG_SIZE)
    }
}
