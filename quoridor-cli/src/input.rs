//! Parsing of the line-based commands a human player types.

use std::fmt;
use std::str::FromStr;

use quoridor_engine::{Action, Alignment, Tile};

pub const USAGE: &str = "\
Commands:
  m <col> <row>   move your pawn
  v <col> <row>   vertical fence on the left edge of the tile
  h <col> <row>   horizontal fence on the top edge of the tile
  ?               show this help
  q               quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play(Action),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    Empty,
    UnknownCommand(String),
    MissingCoordinate,
    BadCoordinate(String),
    TrailingInput(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Empty => write!(f, "Type a command, or ? for help"),
            InputError::UnknownCommand(s) => write!(f, "Unknown command: {s}"),
            InputError::MissingCoordinate => write!(f, "Expected a column and a row"),
            InputError::BadCoordinate(s) => write!(f, "Not a coordinate: {s}"),
            InputError::TrailingInput(s) => write!(f, "Unexpected input: {s}"),
        }
    }
}

impl std::error::Error for InputError {}

impl FromStr for Command {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let verb = words.next().ok_or(InputError::Empty)?.to_ascii_lowercase();

        let command = match verb.as_str() {
            "q" | "quit" => Command::Quit,
            "?" | "help" => Command::Help,
            "m" | "move" => Command::Play(Action::Move(tile(&mut words)?)),
            "v" | "h" => {
                let alignment: Alignment = verb.parse().map_err(InputError::UnknownCommand)?;
                let anchor = tile(&mut words)?;
                Command::Play(Action::fence(alignment, anchor.col, anchor.row))
            }
            _ => return Err(InputError::UnknownCommand(verb)),
        };

        match words.next() {
            Some(extra) => Err(InputError::TrailingInput(extra.to_string())),
            None => Ok(command),
        }
    }
}

fn tile<'a>(words: &mut impl Iterator<Item = &'a str>) -> Result<Tile, InputError> {
    let mut coordinate = || {
        let word = words.next().ok_or(InputError::MissingCoordinate)?;
        word.parse::<u8>()
            .map_err(|_| InputError::BadCoordinate(word.to_string()))
    };
    let col = coordinate()?;
    let row = coordinate()?;
    Ok(Tile::new(col, row))
}
