//! Command-line interface for the quoridor binary.

use std::time::Duration;

use clap::{Parser, ValueEnum};
use quoridor_engine::config::{DEFAULT_FENCE_COUNT, DEFAULT_GRID_SIZE};
use quoridor_engine::{Bot, ConfigError, GameConfig, Player};

use crate::session::Seat;

/// Quoridor in the terminal, against a friend or the bot
#[derive(Parser, Debug)]
#[command(name = "quoridor")]
#[command(about = "Play Quoridor in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Tiles per side of the board
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
    pub grid_size: u8,

    /// Fences each player starts with
    #[arg(long, default_value_t = DEFAULT_FENCE_COUNT)]
    pub fences: u8,

    /// Which players the bot controls
    #[arg(long, value_enum, default_value_t = BotSeats::P2)]
    pub bot: BotSeats,

    /// Pause before each bot action, in milliseconds
    #[arg(long, default_value_t = 1300)]
    pub think_ms: u64,

    /// Seed for the bots, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,

    /// Stop after this many actions even if nobody has won
    #[arg(long)]
    pub max_turns: Option<usize>,

    /// Print the final position as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotSeats {
    None,
    P1,
    P2,
    Both,
}

impl BotSeats {
    pub fn controls(self, player: Player) -> bool {
        match self {
            BotSeats::None => false,
            BotSeats::P1 => player == Player::One,
            BotSeats::P2 => player == Player::Two,
            BotSeats::Both => true,
        }
    }
}

impl Cli {
    pub fn game_config(&self) -> Result<GameConfig, ConfigError> {
        GameConfig::new(self.grid_size, self.fences)
    }

    pub fn think_time(&self) -> Duration {
        Duration::from_millis(self.think_ms)
    }

    /// Who sits in each chair, Player 1 first.
    pub fn seats(&self) -> [Seat; 2] {
        Player::ALL.map(|player| {
            if !self.bot.controls(player) {
                return Seat::Human;
            }
            let bot = match self.seed {
                Some(seed) => Bot::seeded(player, seed.wrapping_add(player.index() as u64)),
                None => Bot::new(player),
            };
            Seat::Bot(Box::new(bot))
        })
    }
}
