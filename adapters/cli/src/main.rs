#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that drives the autosnake simulation at a fixed
//! cadence and draws the board as ASCII.

use std::{thread, time::Duration};

use anyhow::Context;
use clap::Parser;

use autosnake_core::{CellCoord, Event, WELCOME_BANNER};
use autosnake_game::{Config, Simulation};

/// Command-line arguments controlling the run.
#[derive(Debug, Parser)]
#[command(name = "autosnake", about = "Self-steering snake on a pathfinding grid")]
struct Args {
    /// Grid width in cells.
    #[arg(long, default_value_t = 20)]
    width: i32,

    /// Grid height in cells.
    #[arg(long, default_value_t = 12)]
    height: i32,

    /// Seed for deterministic target placement.
    #[arg(long, default_value_t = 0x5eed)]
    seed: u64,

    /// Milliseconds between ticks.
    #[arg(long, default_value_t = 50)]
    tick_ms: u64,

    /// Upper bound on the number of ticks before the run is cut short.
    #[arg(long, default_value_t = 10_000)]
    max_ticks: u64,
}

/// Entry point for the autosnake command-line interface.
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    anyhow::ensure!(
        args.width >= 1 && args.height >= 1,
        "grid dimensions must be positive, got {}x{}",
        args.width,
        args.height
    );

    println!("{WELCOME_BANNER}");
    let mut simulation = Simulation::new(Config::new(args.width, args.height, args.seed));
    let cadence = Duration::from_millis(args.tick_ms);

    for _ in 0..args.max_ticks {
        if simulation.is_over() {
            break;
        }

        let events = simulation.tick().context("simulation tick faulted")?;
        for event in &events {
            match event {
                Event::AgentGrew { tail } => {
                    log::debug!("agent grew a segment at {tail:?}");
                }
                Event::RunEnded { reason } => {
                    println!("game over: {reason:?}");
                }
                _ => {}
            }
        }

        render(&simulation);
        thread::sleep(cadence);
    }

    println!(
        "ticks: {}, body length: {}",
        simulation.tick_index(),
        simulation.agent().len()
    );
    Ok(())
}

/// Draws the grid with `@` for the head, `o` for body segments, and `*` for
/// the target.
fn render(simulation: &Simulation) {
    let (width, height) = simulation.grid_dimensions();
    let agent = simulation.agent();
    let head = agent.head().map(|segment| segment.cell);
    let target = simulation.target();

    let mut board = String::with_capacity(((width + 1) * height) as usize);
    for y in 0..height {
        for x in 0..width {
            let cell = CellCoord::new(x, y);
            let glyph = if head == Some(cell) {
                '@'
            } else if agent.occupies(cell) {
                'o'
            } else if target == Some(cell) {
                '*'
            } else {
                '.'
            };
            board.push(glyph);
        }
        board.push('\n');
    }
    println!("{board}");
}
