use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

pub use utils::Pos;
mod utils;

pub use world::{Board, Cell, World};
pub mod world;

pub use sim::{Sim, SimHandle};
mod sim;

pub use patterns::Pattern;
mod patterns;

pub use view::View;
mod view;

pub use config::Config;
mod config;

mod error;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

fn seed(board: &mut Board, config: &Config) -> Result<()> {
    let anchor = config.anchor();
    match &config.file {
        Some(path) => {
            let cells = patterns::load(path)?;
            info!(path = %path.display(), cells = cells.len(), "seeding from file");
            patterns::place_cells(board, anchor, cells);
        }
        None => {
            info!(pattern = ?config.pattern, x = anchor.x, y = anchor.y, "seeding pattern");
            config.pattern.place(board, anchor);
        }
    }
    Ok(())
}

pub fn main() -> Result<()> {
    init_tracing();
    let config = Config::parse();
    config.validate()?;

    let mut board = Board::new(config.width, config.height)?;
    seed(&mut board, &config)?;
    info!(
        width = config.width,
        height = config.height,
        delay = config.delay,
        generations = ?config.generations,
        "starting simulation",
    );

    let sim = Sim::new(board, config.interval()?, config.generations);
    let mut view = if config.headless {
        View::headless(config.symbols())
    } else {
        View::terminal(config.symbols(), sim.handle())
            .context("failed to put the terminal in raw mode")?
    };

    let state = sim
        .run(|world, generation| view.show(world, generation))
        .context("failed to draw the board")?;
    drop(view);

    info!(
        generation = state.generation(),
        alive = state.world().actives().len(),
        "simulation finished",
    );
    Ok(())
}
