#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the autosnake engine.
//!
//! This crate defines the message surface that connects the adapter, the
//! authoritative world, and the pure systems. The tick controller submits
//! [`Command`] values describing desired mutations, the world executes those
//! commands via its `apply` entry point, and then broadcasts [`Event`] values
//! for observers to react to deterministically. Systems consume immutable
//! snapshots and respond exclusively with new commands.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Canonical banner emitted when the experience boots.
pub const WELCOME_BANNER: &str = "autosnake ready.";

/// Location of a single grid cell expressed as signed x and y coordinates.
///
/// Coordinates are signed because the agent's head may leave the grid for
/// exactly one tick before the run ends; every other component deals in
/// in-bounds cells only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    x: i32,
    y: i32,
}

impl CellCoord {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Horizontal component of the coordinate.
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Vertical component of the coordinate.
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Computes the Manhattan distance between two cell coordinates.
    #[must_use]
    pub fn manhattan_distance(self, other: CellCoord) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Returns the cell one step away in the provided direction.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Cardinal movement directions available to the agent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Movement toward decreasing y.
    North,
    /// Movement toward increasing x.
    East,
    /// Movement toward increasing y.
    South,
    /// Movement toward decreasing x.
    West,
}

impl Direction {
    /// Unit offset applied to a cell when stepping in this direction.
    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::North => (0, -1),
            Self::East => (1, 0),
            Self::South => (0, 1),
            Self::West => (-1, 0),
        }
    }

    /// Direction pointing the opposite way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// Derives the cardinal direction leading from one cell to an adjacent one.
    ///
    /// Returns `None` when the two cells are not grid-adjacent, including the
    /// case where they coincide.
    #[must_use]
    pub fn between(from: CellCoord, to: CellCoord) -> Option<Self> {
        let x_diff = from.x().abs_diff(to.x());
        let y_diff = from.y().abs_diff(to.y());
        if x_diff + y_diff != 1 {
            return None;
        }

        if x_diff == 1 {
            if to.x() > from.x() {
                Some(Self::East)
            } else {
                Some(Self::West)
            }
        } else if to.y() > from.y() {
            Some(Self::South)
        } else {
            Some(Self::North)
        }
    }
}

/// Ordered sequence of cells from a search start (inclusive) to its goal
/// (inclusive), produced by one planner invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    cells: Vec<CellCoord>,
}

impl Path {
    /// Wraps an ordered cell sequence as a path.
    #[must_use]
    pub fn from_cells(cells: Vec<CellCoord>) -> Self {
        Self { cells }
    }

    /// Cells that make up the path, start first.
    #[must_use]
    pub fn cells(&self) -> &[CellCoord] {
        &self.cells
    }

    /// Number of cells on the path, including both endpoints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Reports whether the path contains no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell the agent should occupy after consuming the first step, if the
    /// path is longer than a single cell.
    #[must_use]
    pub fn second(&self) -> Option<CellCoord> {
        self.cells.get(1).copied()
    }
}

/// Lifecycle of a single simulation run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RunStatus {
    /// The simulation accepts and processes ticks.
    Running,
    /// The run ended; all further ticks are no-ops.
    Over,
}

/// Reasons a running simulation transitions to [`RunStatus::Over`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOverReason {
    /// The agent's head left the grid bounds.
    OutOfBounds,
    /// The agent's head collided with a non-head body segment.
    SelfCollision,
    /// No path to the target existed across all relocation attempts.
    TargetUnreachable,
}

/// Commands that express all permissible world mutations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Configures the world's grid using the provided dimensions.
    ConfigureGrid {
        /// Number of cell columns laid out in the grid.
        width: i32,
        /// Number of cell rows laid out in the grid.
        height: i32,
    },
    /// Advances the simulation clock by one tick and refreshes obstacle
    /// flags from the agent body.
    Tick,
    /// Moves the current target to the provided cell.
    PlaceTarget {
        /// Cell the agent should pathfind toward from now on.
        cell: CellCoord,
    },
    /// Advances every agent segment one cell, steering the head as provided.
    StepAgent {
        /// Heading the head adopts before the step.
        heading: Direction,
    },
    /// Appends a new tail segment behind the agent's current tail.
    GrowAgent,
    /// Transitions the run into its terminal state.
    EndRun {
        /// Condition that ended the run.
        reason: GameOverReason,
    },
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// Confirms that the grid was reconfigured.
    GridConfigured {
        /// Number of cell columns in the new grid.
        width: i32,
        /// Number of cell rows in the new grid.
        height: i32,
    },
    /// Indicates that the simulation clock advanced.
    TickStarted {
        /// Index of the tick that just began, starting at 1.
        tick: u64,
    },
    /// Confirms that the target moved to a new cell.
    TargetPlaced {
        /// Cell now holding the target.
        cell: CellCoord,
    },
    /// Confirms that the agent's head moved between two cells.
    AgentAdvanced {
        /// Cell the head occupied before moving.
        from: CellCoord,
        /// Cell the head occupies after the move.
        to: CellCoord,
        /// Heading the head followed for the step.
        heading: Direction,
    },
    /// Confirms that the agent gained a tail segment.
    AgentGrew {
        /// Cell occupied by the freshly appended tail segment.
        tail: CellCoord,
    },
    /// Announces that the run reached its terminal state.
    RunEnded {
        /// Condition that ended the run.
        reason: GameOverReason,
    },
}

/// Immutable representation of a single agent segment used for queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SegmentSnapshot {
    /// Grid cell currently occupied by the segment.
    pub cell: CellCoord,
    /// Direction the segment will move along on the next step.
    pub heading: Direction,
}

/// Read-only, head-first snapshot of the agent's body.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AgentView {
    snapshots: Vec<SegmentSnapshot>,
}

impl AgentView {
    /// Creates a new agent view from head-first segment snapshots.
    #[must_use]
    pub fn from_snapshots(snapshots: Vec<SegmentSnapshot>) -> Self {
        Self { snapshots }
    }

    /// Snapshot of the head segment, if the body is non-empty.
    #[must_use]
    pub fn head(&self) -> Option<SegmentSnapshot> {
        self.snapshots.first().copied()
    }

    /// Iterator over the captured segments in head-first order.
    pub fn iter(&self) -> impl Iterator<Item = &SegmentSnapshot> {
        self.snapshots.iter()
    }

    /// Number of segments composing the body.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Reports whether the body holds no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Reports whether any segment occupies the provided cell.
    #[must_use]
    pub fn occupies(&self, cell: CellCoord) -> bool {
        self.snapshots.iter().any(|segment| segment.cell == cell)
    }

    /// Reports whether a non-head segment occupies the provided cell.
    #[must_use]
    pub fn body_occupies(&self, cell: CellCoord) -> bool {
        self.snapshots
            .iter()
            .skip(1)
            .any(|segment| segment.cell == cell)
    }

    /// Consumes the view, yielding the underlying snapshots.
    #[must_use]
    pub fn into_vec(self) -> Vec<SegmentSnapshot> {
        self.snapshots
    }
}

/// Errors raised when a search is invoked with invalid endpoints.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// The search start cell lies outside the grid.
    #[error("search start {0:?} lies outside the grid")]
    StartOutOfBounds(CellCoord),
    /// The search goal cell lies outside the grid.
    #[error("search goal {0:?} lies outside the grid")]
    GoalOutOfBounds(CellCoord),
}

/// Faults that abort a simulation tick.
///
/// These indicate broken invariants rather than expected outcomes; callers
/// should surface them instead of retrying.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum TickFault {
    /// A reconstructed path contained two consecutive cells that are not
    /// grid-adjacent.
    #[error("path cells {from:?} and {to:?} are not grid-adjacent")]
    PathNotAdjacent {
        /// First cell of the offending pair.
        from: CellCoord,
        /// Second cell of the offending pair.
        to: CellCoord,
    },
    /// The planner rejected its endpoints.
    #[error(transparent)]
    Search(#[from] SearchError),
}

#[cfg(test)]
mod tests {
    use super::{CellCoord, Direction, GameOverReason, Path};
    use serde::{de::DeserializeOwned, Serialize};

    #[test]
    fn manhattan_distance_matches_expectation() {
        let origin = CellCoord::new(1, 1);
        let destination = CellCoord::new(4, 3);
        assert_eq!(origin.manhattan_distance(destination), 5);
        assert_eq!(destination.manhattan_distance(origin), 5);
    }

    #[test]
    fn step_applies_unit_offsets() {
        let origin = CellCoord::new(3, 3);
        assert_eq!(origin.step(Direction::North), CellCoord::new(3, 2));
        assert_eq!(origin.step(Direction::East), CellCoord::new(4, 3));
        assert_eq!(origin.step(Direction::South), CellCoord::new(3, 4));
        assert_eq!(origin.step(Direction::West), CellCoord::new(2, 3));
    }

    #[test]
    fn direction_between_neighbors() {
        let origin = CellCoord::new(3, 3);
        assert_eq!(
            Direction::between(origin, CellCoord::new(3, 2)),
            Some(Direction::North)
        );
        assert_eq!(
            Direction::between(origin, CellCoord::new(4, 3)),
            Some(Direction::East)
        );
        assert_eq!(
            Direction::between(origin, CellCoord::new(3, 4)),
            Some(Direction::South)
        );
        assert_eq!(
            Direction::between(origin, CellCoord::new(2, 3)),
            Some(Direction::West)
        );
        assert_eq!(Direction::between(origin, origin), None);
        assert_eq!(Direction::between(origin, CellCoord::new(5, 3)), None);
        assert_eq!(Direction::between(origin, CellCoord::new(4, 4)), None);
    }

    #[test]
    fn opposite_directions_round_trip() {
        for direction in [
            Direction::North,
            Direction::East,
            Direction::South,
            Direction::West,
        ] {
            assert_eq!(direction.opposite().opposite(), direction);
        }
    }

    #[test]
    fn path_exposes_second_cell() {
        let path = Path::from_cells(vec![CellCoord::new(0, 0), CellCoord::new(1, 0)]);
        assert_eq!(path.len(), 2);
        assert_eq!(path.second(), Some(CellCoord::new(1, 0)));

        let trivial = Path::from_cells(vec![CellCoord::new(0, 0)]);
        assert_eq!(trivial.second(), None);
    }

    fn assert_round_trip<T>(value: &T)
    where
        T: Serialize + DeserializeOwned + PartialEq + std::fmt::Debug,
    {
        let bytes = bincode::serialize(value).expect("serialize");
        let restored: T = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(&restored, value);
    }

    #[test]
    fn cell_coord_round_trips_through_bincode() {
        assert_round_trip(&CellCoord::new(-1, 7));
    }

    #[test]
    fn direction_round_trips_through_bincode() {
        assert_round_trip(&Direction::West);
    }

    #[test]
    fn game_over_reason_round_trips_through_bincode() {
        assert_round_trip(&GameOverReason::SelfCollision);
    }
}
