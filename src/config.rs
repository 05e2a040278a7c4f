use std::{path::PathBuf, time::Duration};

use clap::Parser;

use crate::{error::ConfigError, pos, view::Symbols, Pattern, Pos};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "torgol",
    version,
    about = "Conway's game of life on a toroidal board, rendered in the terminal"
)]
pub struct Config {
    /// Board width in cells.
    #[arg(long, default_value_t = 64)]
    pub width: usize,
    /// Board height in cells.
    #[arg(long, default_value_t = 32)]
    pub height: usize,
    /// Seconds to wait between two generations.
    #[arg(long, default_value_t = 0.1)]
    pub delay: f64,
    #[arg(long, default_value_t = 'O')]
    pub alive: char,
    #[arg(long, default_value_t = ' ')]
    pub dead: char,
    #[arg(long, default_value_t = '#')]
    pub border: char,
    /// Seed pattern placed at the anchor.
    #[arg(long, value_enum, default_value_t = Pattern::RPentomino)]
    pub pattern: Pattern,
    /// Pattern file where `#` marks a live cell, replaces `--pattern`.
    #[arg(short, long)]
    pub file: Option<PathBuf>,
    /// Anchor column, defaults to the middle of the board.
    #[arg(long, allow_negative_numbers = true)]
    pub anchor_x: Option<i32>,
    /// Anchor row, defaults to the middle of the board.
    #[arg(long, allow_negative_numbers = true)]
    pub anchor_y: Option<i32>,
    /// Stop after this many generations instead of running until interrupted.
    #[arg(short, long)]
    pub generations: Option<u64>,
    /// Print frames one after another instead of redrawing the terminal.
    #[arg(long)]
    pub headless: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::parse_from(["torgol"])
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroDimension { axis: "width" });
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroDimension { axis: "height" });
        }
        self.interval()?;
        Ok(())
    }

    /// the delay as a duration, rejecting values no duration can hold.
    pub fn interval(&self) -> Result<Duration, ConfigError> {
        Duration::try_from_secs_f64(self.delay).map_err(|_| ConfigError::InvalidDelay(self.delay))
    }

    pub fn symbols(&self) -> Symbols {
        Symbols {
            alive: self.alive,
            dead: self.dead,
            border: self.border,
        }
    }

    pub fn anchor(&self) -> Pos {
        let x = self.anchor_x.unwrap_or((self.width / 2) as i32);
        let y = self.anchor_y.unwrap_or((self.height / 2) as i32);
        pos!(x, y)
    }
}
