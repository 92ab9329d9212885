use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use quoridor_engine::{Bot, Game, GameState, Player};
use tracing::{debug, info};

use crate::error::CliError;
use crate::input::{Command, USAGE};

pub enum Seat {
    Human,
    Bot(Box<Bot>),
}

enum Flow {
    Continue,
    Quit,
}

/// Drives one game between two seats over a text terminal.
pub struct Session<R, W> {
    game: Game,
    seats: [Seat; 2],
    input: R,
    output: W,
    think: Duration,
    max_turns: Option<usize>,
    plies: usize,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(game: Game, seats: [Seat; 2], input: R, output: W) -> Self {
        Session {
            game,
            seats,
            input,
            output,
            think: Duration::ZERO,
            max_turns: None,
            plies: 0,
        }
    }

    pub fn with_think_time(mut self, think: Duration) -> Self {
        self.think = think;
        self
    }

    pub fn with_max_turns(mut self, max_turns: Option<usize>) -> Self {
        self.max_turns = max_turns;
        self
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn plies(&self) -> usize {
        self.plies
    }

    /// Play until someone wins, the game stalls, a human quits or the turn
    /// limit is hit.
    pub fn run(&mut self) -> Result<GameState, CliError> {
        loop {
            writeln!(self.output, "{}", self.game)?;
            if !self.game.state().is_ongoing() {
                break;
            }
            if self.max_turns.is_some_and(|max| self.plies >= max) {
                info!(plies = self.plies, "turn limit reached");
                writeln!(self.output, "Turn limit reached")?;
                break;
            }

            let player = self.game.turn();
            let flow = if matches!(self.seats[player.index()], Seat::Bot(_)) {
                self.bot_turn(player)?
            } else {
                self.human_turn(player)?
            };
            if let Flow::Quit = flow {
                info!(%player, "player quit");
                break;
            }
        }

        let state = self.game.state();
        info!(%state, plies = self.plies, "session over");
        Ok(state)
    }

    fn human_turn(&mut self, player: Player) -> Result<Flow, CliError> {
        write!(self.output, "{player}> ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(Flow::Quit);
        }

        match line.parse::<Command>() {
            Ok(Command::Quit) => return Ok(Flow::Quit),
            Ok(Command::Help) => writeln!(self.output, "{USAGE}")?,
            Ok(Command::Play(action)) => match self.game.apply(player, &action) {
                Ok(_) => {
                    self.plies += 1;
                    debug!(%player, %action, "human played");
                }
                Err(e) => writeln!(self.output, "Rejected {action}: {e}")?,
            },
            Err(e) => writeln!(self.output, "{e}")?,
        }
        Ok(Flow::Continue)
    }

    fn bot_turn(&mut self, player: Player) -> Result<Flow, CliError> {
        if !self.think.is_zero() {
            thread::sleep(self.think);
        }

        let Seat::Bot(bot) = &mut self.seats[player.index()] else {
            return Ok(Flow::Continue);
        };
        let action = bot.play(&mut self.game)?;
        self.plies += 1;
        writeln!(self.output, "{player} plays {action}")?;
        Ok(Flow::Continue)
    }
}
