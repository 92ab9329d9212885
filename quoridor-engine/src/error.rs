use std::fmt;

/// Why the engine refused a command. A refused command changes nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoridorError {
    OutOfTurn,
    OutOfBounds,
    NotReachable,
    FenceBudgetExhausted,
    FenceAlreadyPlaced,
    BreaksFairPlay,
    GameAlreadyOver,
}

impl QuoridorError {
    /// The fence was otherwise legal but would cut a player off from their goal.
    pub fn is_fair_play_violation(&self) -> bool {
        matches!(self, QuoridorError::BreaksFairPlay)
    }
}

impl fmt::Display for QuoridorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuoridorError::OutOfTurn => write!(f, "out of turn"),
            QuoridorError::OutOfBounds => write!(f, "out of bounds"),
            QuoridorError::NotReachable => write!(f, "tile not reachable"),
            QuoridorError::FenceBudgetExhausted => write!(f, "no fences left"),
            QuoridorError::FenceAlreadyPlaced => write!(f, "fence already placed"),
            QuoridorError::BreaksFairPlay => write!(f, "breaks the fair play rule"),
            QuoridorError::GameAlreadyOver => write!(f, "game already over"),
        }
    }
}

impl std::error::Error for QuoridorError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    GridTooSmall { size: u8, min: u8 },
    GridTooLarge { size: u8, max: u8 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::GridTooSmall { size, min } => {
                write!(f, "grid size {size} is below the minimum of {min}")
            }
            ConfigError::GridTooLarge { size, max } => {
                write!(f, "grid size {size} exceeds the maximum of {max}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotError {
    /// The engine refused the bot before it could choose anything.
    Rejected(QuoridorError),
    /// Neither the chosen action nor any plain move was accepted.
    NoLegalMove,
}

impl fmt::Display for BotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BotError::Rejected(e) => write!(f, "bot action rejected: {e}"),
            BotError::NoLegalMove => write!(f, "bot has no legal move"),
        }
    }
}

impl std::error::Error for BotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BotError::Rejected(e) => Some(e),
            BotError::NoLegalMove => None,
        }
    }
}

impl From<QuoridorError> for BotError {
    fn from(e: QuoridorError) -> Self {
        BotError::Rejected(e)
    }
}
