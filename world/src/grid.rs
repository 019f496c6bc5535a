//! Dense grid topology with obstacle flags and precomputed neighbor lists.

use autosnake_core::CellCoord;

/// Immutable-topology 2D grid of cells addressed in row-major order.
///
/// Neighbor lists are computed once at construction in the fixed order up,
/// right, down, left (boundary-clipped, never wrapping) so that searches
/// discover cells in a stable, reproducible order. Obstacle flags are the
/// only mutable state and are refreshed every tick.
#[derive(Clone, Debug)]
pub struct Grid {
    width: i32,
    height: i32,
    obstacles: Vec<bool>,
    neighbors: Vec<[Option<u32>; 4]>,
}

impl Grid {
    /// Allocates a `width x height` grid and precomputes neighbor lists.
    ///
    /// # Panics
    ///
    /// Panics when either dimension is not positive.
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        assert!(
            width >= 1 && height >= 1,
            "grid dimensions must be positive, got {width}x{height}"
        );

        let cell_count = (width as usize) * (height as usize);
        let mut neighbors = vec![[None; 4]; cell_count];
        for y in 0..height {
            for x in 0..width {
                let index = (y * width + x) as usize;
                let mut slots = [None; 4];
                let mut cursor = 0;
                // Fixed discovery order: up, right, down, left.
                if y > 0 {
                    slots[cursor] = Some(((y - 1) * width + x) as u32);
                    cursor += 1;
                }
                if x + 1 < width {
                    slots[cursor] = Some((y * width + x + 1) as u32);
                    cursor += 1;
                }
                if y + 1 < height {
                    slots[cursor] = Some(((y + 1) * width + x) as u32);
                    cursor += 1;
                }
                if x > 0 {
                    slots[cursor] = Some((y * width + x - 1) as u32);
                }
                neighbors[index] = slots;
            }
        }

        Self {
            width,
            height,
            obstacles: vec![false; cell_count],
            neighbors,
        }
    }

    /// Number of cell columns in the grid.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Number of cell rows in the grid.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Total number of cells held by the grid.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.obstacles.len()
    }

    /// Reports whether the provided coordinate addresses a grid cell.
    #[must_use]
    pub const fn contains(&self, cell: CellCoord) -> bool {
        cell.x() >= 0 && cell.x() < self.width && cell.y() >= 0 && cell.y() < self.height
    }

    /// Flat row-major index of the provided cell.
    ///
    /// # Panics
    ///
    /// Panics when the cell lies outside the grid; callers are expected to
    /// check [`Grid::contains`] first.
    #[must_use]
    pub fn cell_index(&self, cell: CellCoord) -> usize {
        assert!(
            self.contains(cell),
            "cell {cell:?} outside {}x{} grid",
            self.width,
            self.height
        );
        (cell.y() * self.width + cell.x()) as usize
    }

    /// Coordinate of the cell stored at the provided flat index.
    ///
    /// # Panics
    ///
    /// Panics when the index is out of range.
    #[must_use]
    pub fn cell_at(&self, index: usize) -> CellCoord {
        assert!(
            index < self.cell_count(),
            "cell index {index} out of range for {}x{} grid",
            self.width,
            self.height
        );
        let index = index as i32;
        CellCoord::new(index % self.width, index / self.width)
    }

    /// Marks or clears the obstacle flag of a single cell.
    ///
    /// # Panics
    ///
    /// Panics when the cell lies outside the grid.
    pub fn set_obstacle(&mut self, cell: CellCoord, flag: bool) {
        let index = self.cell_index(cell);
        self.obstacles[index] = flag;
    }

    /// Reports whether the provided cell is currently an obstacle.
    ///
    /// # Panics
    ///
    /// Panics when the cell lies outside the grid.
    #[must_use]
    pub fn is_obstacle(&self, cell: CellCoord) -> bool {
        self.obstacles[self.cell_index(cell)]
    }

    /// Clears every obstacle flag.
    pub fn reset_obstacles(&mut self) {
        self.obstacles.fill(false);
    }

    /// Iterator over the precomputed neighbors of a cell, in discovery order.
    ///
    /// # Panics
    ///
    /// Panics when the cell lies outside the grid.
    pub fn neighbors(&self, cell: CellCoord) -> impl Iterator<Item = CellCoord> + '_ {
        self.neighbors[self.cell_index(cell)]
            .into_iter()
            .flatten()
            .map(|index| self.cell_at(index as usize))
    }
}
