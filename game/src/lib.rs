#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Tick controller coupling the A* planner to agent motion and growth.
//!
//! One [`Simulation::tick`] is one atomic unit of work: refresh obstacles
//! from the agent body, replan toward the target, translate the first path
//! step into a heading, move, consume the target, and evaluate termination.
//! The external driver serializes ticks; nothing here suspends mid-tick.

use autosnake_core::{
    AgentView, CellCoord, Command, Direction, Event, GameOverReason, Path, RunStatus, TickFault,
};
use autosnake_system_placement::{self as placement, Placement};
use autosnake_system_planner::Planner;
use autosnake_world::{self as world, query, World};

/// Default number of target relocations attempted within a single tick
/// before the tick is treated as having no path.
pub const DEFAULT_RELOCATION_ATTEMPTS: u32 = 12;

/// Construction parameters for a [`Simulation`].
#[derive(Clone, Copy, Debug)]
pub struct Config {
    width: i32,
    height: i32,
    rng_seed: u64,
    relocation_attempts: u32,
    initial_target: Option<CellCoord>,
}

impl Config {
    /// Creates a configuration for a `width x height` grid, measured in
    /// cells, with the provided placement seed.
    #[must_use]
    pub const fn new(width: i32, height: i32, rng_seed: u64) -> Self {
        Self {
            width,
            height,
            rng_seed,
            relocation_attempts: DEFAULT_RELOCATION_ATTEMPTS,
            initial_target: None,
        }
    }

    /// Overrides the per-tick target relocation bound.
    #[must_use]
    pub const fn with_relocation_attempts(mut self, attempts: u32) -> Self {
        self.relocation_attempts = attempts;
        self
    }

    /// Pins the first target to a known cell instead of sampling one,
    /// which keeps scenario setups deterministic regardless of seed.
    #[must_use]
    pub const fn with_initial_target(mut self, cell: CellCoord) -> Self {
        self.initial_target = Some(cell);
        self
    }
}

/// Owns the world and the systems, advancing the run one tick at a time.
#[derive(Debug)]
pub struct Simulation {
    world: World,
    planner: Planner,
    placement: Placement,
    relocation_attempts: u32,
}

impl Simulation {
    /// Builds a simulation with a fresh world configured per `config`.
    ///
    /// # Panics
    ///
    /// Panics when the configured dimensions are not positive or the pinned
    /// initial target lies outside the grid.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let mut setup_events = Vec::new();
        let mut world = World::new();
        world::apply(
            &mut world,
            Command::ConfigureGrid {
                width: config.width,
                height: config.height,
            },
            &mut setup_events,
        );

        let mut simulation = Self::from_world(world, config.rng_seed, config.relocation_attempts);
        match config.initial_target {
            Some(cell) => world::apply(
                &mut simulation.world,
                Command::PlaceTarget { cell },
                &mut setup_events,
            ),
            None => simulation.relocate_target(&mut setup_events),
        }
        simulation
    }

    /// Wraps an existing world, leaving its agent and target untouched.
    ///
    /// A missing target is placed on the first tick.
    #[must_use]
    pub fn from_world(world: World, rng_seed: u64, relocation_attempts: u32) -> Self {
        Self {
            world,
            planner: Planner::new(),
            placement: Placement::new(placement::Config::new(rng_seed)),
            relocation_attempts,
        }
    }

    /// Advances the simulation by one step, returning the events produced.
    ///
    /// Once the run is over this is a no-op yielding no events; an external
    /// reset reconstructs the simulation instead.
    pub fn tick(&mut self) -> Result<Vec<Event>, TickFault> {
        let mut events = Vec::new();
        if query::status(&self.world) == RunStatus::Over {
            return Ok(events);
        }

        // A target the head already sits on is consumed before any movement
        // attempt this tick.
        self.consume_target(&mut events);

        world::apply(&mut self.world, Command::Tick, &mut events);

        let head = query::head(&self.world).cell;
        let path = self.plan_with_relocation(head, &mut events)?;

        let heading = match path.as_ref().and_then(Path::second) {
            Some(next) => Direction::between(head, next)
                .ok_or(TickFault::PathNotAdjacent { from: head, to: next })?,
            None => query::head(&self.world).heading,
        };

        world::apply(&mut self.world, Command::StepAgent { heading }, &mut events);
        self.consume_target(&mut events);

        if let Some(reason) = self.termination_reason(path.is_none()) {
            log::info!("run ended after {} ticks: {reason:?}", self.tick_index());
            world::apply(&mut self.world, Command::EndRun { reason }, &mut events);
        }

        Ok(events)
    }

    /// Reports whether the run reached its terminal state.
    #[must_use]
    pub fn is_over(&self) -> bool {
        query::status(&self.world) == RunStatus::Over
    }

    /// Head-first, read-only view of the agent's segments.
    #[must_use]
    pub fn agent(&self) -> AgentView {
        query::agent_view(&self.world)
    }

    /// Cell currently holding the target, if one has been placed.
    #[must_use]
    pub fn target(&self) -> Option<CellCoord> {
        query::target(&self.world)
    }

    /// Grid dimensions in cell units.
    #[must_use]
    pub fn grid_dimensions(&self) -> (i32, i32) {
        let grid = query::grid(&self.world);
        (grid.width(), grid.height())
    }

    /// Number of ticks processed so far.
    #[must_use]
    pub fn tick_index(&self) -> u64 {
        query::tick_index(&self.world)
    }

    /// Searches for a path from the head to the target, relocating the
    /// target up to the configured bound when it is unreachable.
    fn plan_with_relocation(
        &mut self,
        head: CellCoord,
        events: &mut Vec<Event>,
    ) -> Result<Option<Path>, TickFault> {
        if query::target(&self.world).is_none() {
            self.relocate_target(events);
        }

        let mut attempts = 0;
        loop {
            let Some(target) = query::target(&self.world) else {
                return Ok(None);
            };

            let path = self
                .planner
                .find_path(query::grid(&self.world), head, target)?;
            if let Some(path) = path {
                return Ok(Some(path));
            }

            attempts += 1;
            if attempts >= self.relocation_attempts {
                return Ok(None);
            }
            log::debug!(
                "no path from {head:?} to {target:?}; relocating target (attempt {attempts})"
            );
            self.relocate_target(events);
        }
    }

    /// Grows the agent and relocates the target when the head sits on it.
    fn consume_target(&mut self, events: &mut Vec<Event>) {
        let head = query::head(&self.world).cell;
        if query::target(&self.world) == Some(head) {
            world::apply(&mut self.world, Command::GrowAgent, events);
            self.relocate_target(events);
        }
    }

    /// Places the target on a uniformly random cell not occupied by the
    /// agent.
    fn relocate_target(&mut self, events: &mut Vec<Event>) {
        let (width, height) = {
            let grid = query::grid(&self.world);
            (grid.width(), grid.height())
        };
        let agent = query::agent_view(&self.world);
        let cell = self
            .placement
            .place(width, height, |cell| agent.occupies(cell));
        world::apply(&mut self.world, Command::PlaceTarget { cell }, events);
    }

    /// First termination condition that holds, if any: head out of bounds,
    /// self-collision, or no path across all relocation attempts.
    fn termination_reason(&self, path_missing: bool) -> Option<GameOverReason> {
        let agent = query::agent_view(&self.world);
        let head = agent.head()?;

        if !query::grid(&self.world).contains(head.cell) {
            return Some(GameOverReason::OutOfBounds);
        }
        if agent.body_occupies(head.cell) {
            return Some(GameOverReason::SelfCollision);
        }
        if path_missing {
            return Some(GameOverReason::TargetUnreachable);
        }
        None
    }
}
