#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic A* planner operating over the world's grid.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use autosnake_core::{CellCoord, Path, SearchError};
use autosnake_world::Grid;

/// Sentinel larger than any reachable cost on a bounded grid.
const INFINITY: u32 = u32::MAX;

/// Shortest-path service owning a reusable search scratch arena.
///
/// The scratch holds the per-cell `g`, `h`, `f`, and predecessor values for
/// one search at a time and is fully reset at the start of every call, so
/// nothing leaks between the replans issued on consecutive ticks.
#[derive(Debug, Default)]
pub struct Planner {
    scratch: SearchScratch,
}

impl Planner {
    /// Creates a planner with an empty scratch arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes a least-cost path between two cells over the current
    /// obstacle flags.
    ///
    /// Returns `Ok(None)` when no path exists; that is an expected outcome,
    /// not an error. The goal's own obstacle flag never blocks entry since
    /// it is the destination. Identical grid state always yields an
    /// identical path: the open set breaks `f` ties by discovery order.
    pub fn find_path(
        &mut self,
        grid: &Grid,
        start: CellCoord,
        goal: CellCoord,
    ) -> Result<Option<Path>, SearchError> {
        if !grid.contains(start) {
            return Err(SearchError::StartOutOfBounds(start));
        }
        if !grid.contains(goal) {
            return Err(SearchError::GoalOutOfBounds(goal));
        }

        self.scratch.reset(grid, goal);
        let start_index = grid.cell_index(start);
        let goal_index = grid.cell_index(goal);
        self.scratch.g[start_index] = 0;
        self.scratch.f[start_index] = self.scratch.h[start_index];

        let mut open = BinaryHeap::new();
        let mut sequence: u64 = 0;
        open.push(OpenEntry {
            f: self.scratch.f[start_index],
            seq: sequence,
            cell: start_index as u32,
        });

        while let Some(entry) = open.pop() {
            let current = entry.cell as usize;
            // Stale duplicate left behind by a later relaxation.
            if entry.f != self.scratch.f[current] {
                continue;
            }
            if current == goal_index {
                return Ok(Some(self.reconstruct(grid, goal_index)));
            }

            let current_g = self.scratch.g[current];
            for neighbor_cell in grid.neighbors(grid.cell_at(current)) {
                if neighbor_cell != goal && grid.is_obstacle(neighbor_cell) {
                    continue;
                }

                let neighbor = grid.cell_index(neighbor_cell);
                let tentative_g = current_g.saturating_add(1);
                if tentative_g < self.scratch.g[neighbor] {
                    self.scratch.previous[neighbor] = Some(current as u32);
                    self.scratch.g[neighbor] = tentative_g;
                    self.scratch.f[neighbor] = tentative_g.saturating_add(self.scratch.h[neighbor]);
                    sequence += 1;
                    open.push(OpenEntry {
                        f: self.scratch.f[neighbor],
                        seq: sequence,
                        cell: neighbor as u32,
                    });
                }
            }
        }

        Ok(None)
    }

    fn reconstruct(&self, grid: &Grid, goal_index: usize) -> Path {
        let mut cells = vec![grid.cell_at(goal_index)];
        let mut cursor = goal_index;
        while let Some(previous) = self.scratch.previous[cursor] {
            cursor = previous as usize;
            cells.push(grid.cell_at(cursor));
        }
        cells.reverse();
        Path::from_cells(cells)
    }
}

/// Per-search cell state stored in a flat arena indexed like the grid.
#[derive(Debug, Default)]
struct SearchScratch {
    g: Vec<u32>,
    h: Vec<u32>,
    f: Vec<u32>,
    previous: Vec<Option<u32>>,
}

impl SearchScratch {
    /// Resets every cell to `g = inf`, `h = heuristic`, `f = inf`,
    /// `previous = none` for a fresh search toward the provided goal.
    fn reset(&mut self, grid: &Grid, goal: CellCoord) {
        let cell_count = grid.cell_count();
        self.g.clear();
        self.g.resize(cell_count, INFINITY);
        self.f.clear();
        self.f.resize(cell_count, INFINITY);
        self.previous.clear();
        self.previous.resize(cell_count, None);

        self.h.clear();
        self.h.reserve(cell_count);
        for index in 0..cell_count {
            self.h.push(heuristic(grid.cell_at(index), goal));
        }
    }
}

/// Rounded-up Euclidean distance between a cell and the goal.
fn heuristic(cell: CellCoord, goal: CellCoord) -> u32 {
    let dx = f64::from(cell.x() - goal.x());
    let dy = f64::from(cell.y() - goal.y());
    (dx * dx + dy * dy).sqrt().ceil() as u32
}

/// Open-set entry ordered so the binary heap pops the smallest `f` first and
/// breaks ties by discovery order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct OpenEntry {
    f: u32,
    seq: u64,
    cell: u32,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
