//=========================================================================
// Grid
//=========================================================================
//
// Toroidal board of cells and the two-pass generation step.
//
// Architecture:
//   Grid
//     ├─ cells: Vec<Cell>   (column-major, index = x * height + y)
//     └─ dims:  GridDimensions (fixed for the grid's lifetime)
//
// Generation:
//   compute_all_neighbor_counts()   reads alive, writes live_neighbors
//        ↓  (full pass completes for every cell)
//   advance_all_cells(renderer)     reads live_neighbors, writes alive,
//                                   draws each cell
//
// The passes are never fused: a cell's tally must come from the previous
// generation only, so no transition may run until every tally is stored.
//
// Wrap-around uses a true modulo (`rem_euclid`), so neighbor lookups never
// leave [0, width) × [0, height).
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;
use rand::Rng;

//=== Internal Dependencies ===============================================

use super::cell::Cell;
use super::config::validate_probability;
use super::error::{LifeError, Result};
use super::render::Renderer;

//=== Moore Neighborhood ==================================================

/// Offsets of the 8 Moore neighbors, `(dx, dy)`.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
];

/// Wraps `coord` onto `[0, dimension)`, handling negative values.
fn wrap(coord: isize, dimension: usize) -> usize {
    coord.rem_euclid(dimension as isize) as usize
}

//=== GridDimensions ======================================================

/// Size of a grid in cells, plus the pixel size of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDimensions {
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
    /// Edge length of one cell in drawable pixels.
    pub cell_pixel_size: u32,
}

impl GridDimensions {
    /// Columns and rows needed to cover a drawable area, rounding up.
    pub fn covering(pixel_width: u32, pixel_height: u32, cell_pixel_size: u32) -> Result<Self> {
        if cell_pixel_size == 0 {
            return Err(LifeError::InvalidCellSize(cell_pixel_size));
        }

        Ok(Self {
            width: pixel_width.div_ceil(cell_pixel_size) as usize,
            height: pixel_height.div_ceil(cell_pixel_size) as usize,
            cell_pixel_size,
        })
    }

    fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(LifeError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.cell_pixel_size == 0 {
            return Err(LifeError::InvalidCellSize(self.cell_pixel_size));
        }
        Ok(())
    }

    fn cell_count(&self) -> usize {
        self.width * self.height
    }
}

//=== Grid ================================================================

/// Rectangular toroidal board.
///
/// Every `(x, y)` with `x < width` and `y < height` maps to exactly one
/// [`Cell`]. Indexing outside that range is a programming error and
/// panics.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    dims: GridDimensions,
    cells: Vec<Cell>,
}

impl Grid {
    //--- Construction -----------------------------------------------------

    /// Allocates a `width × height` grid and seeds every cell alive with
    /// probability `alive_probability`.
    ///
    /// Does not draw anything.
    ///
    /// # Errors
    ///
    /// - [`LifeError::InvalidDimensions`] if either dimension is zero
    /// - [`LifeError::InvalidCellSize`] if `cell_pixel_size` is zero
    /// - [`LifeError::InvalidAliveProbability`] unless `0 < p <= 1`
    pub fn initialize<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        cell_pixel_size: u32,
        alive_probability: f64,
        rng: &mut R,
    ) -> Result<Self> {
        let dims = GridDimensions {
            width,
            height,
            cell_pixel_size,
        };
        dims.validate()?;
        validate_probability(alive_probability)?;

        let cells: Vec<Cell> = (0..dims.cell_count())
            .map(|_| Cell::new(rng.gen_bool(alive_probability)))
            .collect();

        let grid = Self { dims, cells };
        debug!(
            target: "grid",
            "Seeded {}x{} grid: {} of {} cells alive",
            width,
            height,
            grid.alive_count(),
            grid.cells.len()
        );
        Ok(grid)
    }

    /// Builds an all-dead grid with the listed cells alive.
    ///
    /// Coordinates are wrapped onto the board, so `(width, 0)` names the
    /// same cell as `(0, 0)`.
    pub fn from_alive_cells(
        width: usize,
        height: usize,
        cell_pixel_size: u32,
        alive: &[(usize, usize)],
    ) -> Result<Self> {
        let dims = GridDimensions {
            width,
            height,
            cell_pixel_size,
        };
        dims.validate()?;

        let mut grid = Self {
            dims,
            cells: vec![Cell::default(); dims.cell_count()],
        };
        for &(x, y) in alive {
            grid.set_alive(x % width, y % height, true);
        }
        Ok(grid)
    }

    //--- Queries ----------------------------------------------------------

    /// `(width, height, cell_pixel_size)` for sizing a drawing surface.
    pub fn dimensions(&self) -> GridDimensions {
        self.dims
    }

    pub fn width(&self) -> usize {
        self.dims.width
    }

    pub fn height(&self) -> usize {
        self.dims.height
    }

    pub fn cell(&self, x: usize, y: usize) -> &Cell {
        &self.cells[self.index(x, y)]
    }

    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.cell(x, y).is_alive()
    }

    /// Number of live cells on the board.
    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Coordinates of every live cell, column by column.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let height = self.dims.height;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_alive())
            .map(move |(i, _)| (i / height, i % height))
    }

    //--- Mutation ---------------------------------------------------------

    pub fn set_alive(&mut self, x: usize, y: usize, alive: bool) {
        let i = self.index(x, y);
        self.cells[i].set_alive(alive);
    }

    //--- Neighborhood -----------------------------------------------------

    /// The 8 Moore neighbors of `(x, y)`, wrapped onto the torus.
    ///
    /// On boards narrower than 3 cells some wrapped coordinates coincide
    /// (and may name `(x, y)` itself); each is still reported.
    pub fn neighbor_coordinates(&self, x: usize, y: usize) -> [(usize, usize); 8] {
        let (w, h) = (self.dims.width, self.dims.height);
        NEIGHBOR_OFFSETS.map(|(dx, dy)| {
            (
                wrap(x as isize + dx, w),
                wrap(y as isize + dy, h),
            )
        })
    }

    fn live_neighbor_count(&self, x: usize, y: usize) -> u8 {
        self.neighbor_coordinates(x, y)
            .iter()
            .filter(|&&(nx, ny)| self.is_alive(nx, ny))
            .count() as u8
    }

    //--- Generation Passes ------------------------------------------------

    /// Pass 1: stores each cell's live-neighbor tally.
    ///
    /// Reads only `alive` flags, writes only tallies, so every tally
    /// reflects the board as it was before this generation.
    pub fn compute_all_neighbor_counts(&mut self) {
        for x in 0..self.dims.width {
            for y in 0..self.dims.height {
                let count = self.live_neighbor_count(x, y);
                let i = self.index(x, y);
                self.cells[i].set_neighbor_count(count);
            }
        }
    }

    /// Pass 2: applies B3/S23 to every cell and draws its new state.
    ///
    /// Must follow [`Grid::compute_all_neighbor_counts`] for the same
    /// generation.
    pub fn advance_all_cells<R: Renderer + ?Sized>(&mut self, renderer: &mut R) {
        let size = self.dims.cell_pixel_size;
        for x in 0..self.dims.width {
            for y in 0..self.dims.height {
                let i = self.index(x, y);
                let cell = &mut self.cells[i];
                cell.next_generation();
                renderer.draw_cell(x, y, size, cell.is_alive());
            }
        }
    }

    /// Draws every cell in its current state without advancing.
    pub fn draw_all<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        let size = self.dims.cell_pixel_size;
        for x in 0..self.dims.width {
            for y in 0..self.dims.height {
                renderer.draw_cell(x, y, size, self.is_alive(x, y));
            }
        }
    }

    /// Runs one full generation: both passes, in order.
    pub fn step<R: Renderer + ?Sized>(&mut self, renderer: &mut R) {
        self.compute_all_neighbor_counts();
        self.advance_all_cells(renderer);
    }

    //--- Internal Helpers -------------------------------------------------

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.dims.width && y < self.dims.height,
            "cell ({}, {}) outside {}x{} grid",
            x,
            y,
            self.dims.width,
            self.dims.height
        );
        x * self.dims.height + y
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
