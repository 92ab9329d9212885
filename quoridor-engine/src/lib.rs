pub mod action;
pub mod board;
pub mod bot;
pub mod config;
pub mod engine;
pub mod error;
pub mod fence;
pub mod legality;
pub mod player;
pub mod reach;
pub mod search;

pub use action::Action;
pub use board::{Board, Direction, Pawns, Tile};
pub use bot::{Bot, Plan, Reason};
pub use config::GameConfig;
pub use engine::{FenceOutcome, Game, GameState, Snapshot};
pub use error::{BotError, ConfigError, QuoridorError};
pub use fence::{Alignment, FenceBudget, FenceLedger, FenceSegment};
pub use legality::{MoveContext, Reachable};
pub use player::Player;
