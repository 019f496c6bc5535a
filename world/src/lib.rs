#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative world state management for autosnake.
//!
//! The world owns the grid, the agent, and the current target. All mutations
//! flow through [`apply`]; all reads flow through [`query`].

mod agent;
mod grid;

pub use agent::{Agent, Segment};
pub use grid::Grid;

use autosnake_core::{CellCoord, Command, Direction, Event, RunStatus, WELCOME_BANNER};

const DEFAULT_GRID_WIDTH: i32 = 10;
const DEFAULT_GRID_HEIGHT: i32 = 10;
const DEFAULT_HEADING: Direction = Direction::East;

/// Represents the authoritative autosnake world state.
#[derive(Debug)]
pub struct World {
    banner: &'static str,
    grid: Grid,
    agent: Agent,
    target: Option<CellCoord>,
    status: RunStatus,
    tick_index: u64,
}

impl World {
    /// Creates a new world with the default grid ready for simulation.
    #[must_use]
    pub fn new() -> Self {
        Self::sized(DEFAULT_GRID_WIDTH, DEFAULT_GRID_HEIGHT)
    }

    fn sized(width: i32, height: i32) -> Self {
        let grid = Grid::new(width, height);
        let agent = Agent::new(spawn_cell(width, height), DEFAULT_HEADING);
        Self {
            banner: WELCOME_BANNER,
            grid,
            agent,
            target: None,
            status: RunStatus::Running,
            tick_index: 0,
        }
    }

    /// Clears all obstacle flags and marks every in-bounds non-head segment.
    fn refresh_obstacles(&mut self) {
        self.grid.reset_obstacles();
        for segment in self.agent.segments().iter().skip(1) {
            if self.grid.contains(segment.cell()) {
                self.grid.set_obstacle(segment.cell(), true);
            }
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

/// Cell the agent's head spawns on: the grid center.
fn spawn_cell(width: i32, height: i32) -> CellCoord {
    CellCoord::new(width / 2, height / 2)
}

/// Applies the provided command to the world, mutating state deterministically.
///
/// Movement, growth, and tick commands are ignored once the run is over;
/// only [`Command::ConfigureGrid`] revives a finished world.
///
/// # Panics
///
/// Panics when [`Command::ConfigureGrid`] carries non-positive dimensions or
/// [`Command::PlaceTarget`] names a cell outside the grid; both indicate a
/// caller bug rather than a runtime condition.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::ConfigureGrid { width, height } => {
            *world = World::sized(width, height);
            out_events.push(Event::GridConfigured { width, height });
        }
        Command::Tick => {
            if world.status == RunStatus::Over {
                return;
            }
            world.tick_index = world.tick_index.saturating_add(1);
            world.refresh_obstacles();
            out_events.push(Event::TickStarted {
                tick: world.tick_index,
            });
        }
        Command::PlaceTarget { cell } => {
            if world.status == RunStatus::Over {
                return;
            }
            assert!(
                world.grid.contains(cell),
                "target {cell:?} outside {}x{} grid",
                world.grid.width(),
                world.grid.height()
            );
            world.target = Some(cell);
            out_events.push(Event::TargetPlaced { cell });
        }
        Command::StepAgent { heading } => {
            if world.status == RunStatus::Over {
                return;
            }
            let from = world.agent.head().cell();
            world.agent.advance(heading);
            out_events.push(Event::AgentAdvanced {
                from,
                to: world.agent.head().cell(),
                heading,
            });
        }
        Command::GrowAgent => {
            if world.status == RunStatus::Over {
                return;
            }
            let tail = world.agent.grow();
            out_events.push(Event::AgentGrew { tail });
        }
        Command::EndRun { reason } => {
            if world.status == RunStatus::Over {
                return;
            }
            world.status = RunStatus::Over;
            out_events.push(Event::RunEnded { reason });
        }
    }
}

/// Replaces the agent body with an explicit segment chain.
///
/// Test scaffolding for scenarios that need a pre-shaped body, such as a
/// boxed-in head; regular callers grow the agent through commands instead.
#[cfg(feature = "scenario_scaffolding")]
pub fn install_agent(world: &mut World, segments: Vec<Segment>) {
    world.agent = Agent::from_segments(segments);
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use super::{Grid, World};
    use autosnake_core::{AgentView, CellCoord, RunStatus, SegmentSnapshot};

    /// Retrieves the welcome banner that adapters may display.
    #[must_use]
    pub fn welcome_banner(world: &World) -> &'static str {
        world.banner
    }

    /// Provides read-only access to the world's grid.
    #[must_use]
    pub fn grid(world: &World) -> &Grid {
        &world.grid
    }

    /// Captures a head-first, read-only view of the agent's body.
    #[must_use]
    pub fn agent_view(world: &World) -> AgentView {
        let snapshots = world
            .agent
            .segments()
            .iter()
            .map(|segment| SegmentSnapshot {
                cell: segment.cell(),
                heading: segment.heading(),
            })
            .collect();
        AgentView::from_snapshots(snapshots)
    }

    /// Snapshot of the agent's head segment.
    #[must_use]
    pub fn head(world: &World) -> SegmentSnapshot {
        let head = world.agent.head();
        SegmentSnapshot {
            cell: head.cell(),
            heading: head.heading(),
        }
    }

    /// Cell currently holding the target, if one has been placed.
    #[must_use]
    pub fn target(world: &World) -> Option<CellCoord> {
        world.target
    }

    /// Lifecycle state of the current run.
    #[must_use]
    pub fn status(world: &World) -> RunStatus {
        world.status
    }

    /// Number of ticks processed since the last grid configuration.
    #[must_use]
    pub fn tick_index(world: &World) -> u64 {
        world.tick_index
    }
}
