use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::action::Action;
use crate::board::{Board, Pawns, Tile};
use crate::config::GameConfig;
use crate::error::{ConfigError, QuoridorError};
use crate::fence::{Alignment, FenceBudget, FenceLedger, FenceSegment};
use crate::legality::{MoveContext, Reachable, reachable_tiles};
use crate::player::Player;
use crate::reach;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameState {
    Ongoing,
    #[serde(rename = "player_1_win")]
    Player1Win,
    #[serde(rename = "player_2_win")]
    Player2Win,
    Stalemate,
}

impl GameState {
    pub fn won_by(player: Player) -> Self {
        match player {
            Player::One => GameState::Player1Win,
            Player::Two => GameState::Player2Win,
        }
    }

    pub fn is_ongoing(&self) -> bool {
        matches!(self, GameState::Ongoing)
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            GameState::Player1Win => Some(Player::One),
            GameState::Player2Win => Some(Player::Two),
            GameState::Ongoing | GameState::Stalemate => None,
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameState::Ongoing => write!(f, "ongoing"),
            GameState::Player1Win => write!(f, "player_1_win"),
            GameState::Player2Win => write!(f, "player_2_win"),
            GameState::Stalemate => write!(f, "stalemate"),
        }
    }
}

impl std::str::FromStr for GameState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ongoing" => Ok(GameState::Ongoing),
            "player_1_win" => Ok(GameState::Player1Win),
            "player_2_win" => Ok(GameState::Player2Win),
            "stalemate" => Ok(GameState::Stalemate),
            _ => Err(format!("unknown game state: {s}")),
        }
    }
}

/// Result of a fence command, as a presentation layer needs to report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FenceOutcome {
    Accepted,
    RejectedIllegal,
    RejectedUnfair,
}

impl From<&Result<GameState, QuoridorError>> for FenceOutcome {
    fn from(result: &Result<GameState, QuoridorError>) -> Self {
        match result {
            Ok(_) => FenceOutcome::Accepted,
            Err(e) if e.is_fair_play_violation() => FenceOutcome::RejectedUnfair,
            Err(_) => FenceOutcome::RejectedIllegal,
        }
    }
}

/// Read-only view of a session for presentation layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub grid_size: u8,
    pub pawns: Pawns,
    pub budget: FenceBudget,
    pub vertical: Vec<Tile>,
    pub horizontal: Vec<Tile>,
    pub turn: Player,
    pub state: GameState,
}

/// A game session. The only place board state is ever mutated.
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    board: Board,
    pawns: Pawns,
    fences: FenceLedger,
    budget: FenceBudget,
    turn: Player,
    state: GameState,
}

impl Default for Game {
    fn default() -> Self {
        Self::create(GameConfig::default())
    }
}

impl Game {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::create(config))
    }

    /// 9x9 board, 10 fences each.
    pub fn standard() -> Self {
        Self::default()
    }

    fn create(config: GameConfig) -> Self {
        let board = Board::new(config.grid_size);
        Game {
            config,
            board,
            pawns: Pawns::starting(&board),
            fences: FenceLedger::new(config.grid_size),
            budget: FenceBudget::new(config.fence_count),
            turn: Player::One,
            state: GameState::Ongoing,
        }
    }

    // -- Accessors --

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn pawns(&self) -> &Pawns {
        &self.pawns
    }

    pub fn pawn(&self, player: Player) -> Tile {
        self.pawns.get(player)
    }

    pub fn fences(&self) -> &FenceLedger {
        &self.fences
    }

    pub fn budget(&self) -> &FenceBudget {
        &self.budget
    }

    pub fn fences_remaining(&self, player: Player) -> u8 {
        self.budget.get(player)
    }

    // -- Queries --

    /// The current position, optionally with one fence that is not on the board.
    pub fn context(&self, hypothetical: Option<FenceSegment>) -> MoveContext<'_> {
        MoveContext {
            board: self.board,
            fences: self.fences.with(hypothetical),
            pawns: self.pawns,
        }
    }

    /// Tiles the player's pawn may move to right now, jumps included.
    pub fn legal_moves(&self, player: Player) -> Reachable {
        reachable_tiles(&self.context(None), player, self.pawn(player), true)
    }

    /// A player can act if their pawn can move or they still hold a fence.
    pub fn has_legal_action(&self, player: Player) -> bool {
        !self.legal_moves(player).is_empty() || self.budget.get(player) > 0
    }

    /// Whether both players keep a route to their goal row with `fence` added.
    pub fn is_fair(&self, fence: FenceSegment) -> bool {
        let ctx = self.context(Some(fence));
        reach::has_path_to_goal(&ctx, Player::One) && reach::has_path_to_goal(&ctx, Player::Two)
    }

    /// Checks shared by every command: the game is live and it is `player`'s turn.
    pub fn ensure_can_act(&self, player: Player) -> Result<(), QuoridorError> {
        if !self.state.is_ongoing() {
            return Err(QuoridorError::GameAlreadyOver);
        }
        if player != self.turn {
            return Err(QuoridorError::OutOfTurn);
        }
        Ok(())
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid_size: self.board.size(),
            pawns: self.pawns,
            budget: self.budget.clone(),
            vertical: self.fences.vertical().to_vec(),
            horizontal: self.fences.horizontal().to_vec(),
            turn: self.turn,
            state: self.state,
        }
    }

    // -- Game actions --

    pub fn try_move(&mut self, player: Player, target: Tile) -> Result<GameState, QuoridorError> {
        self.ensure_can_act(player)
            .and_then(|()| self.check_move(player, target))
            .inspect_err(|e| trace!(%player, %target, error = %e, "pawn move rejected"))?;

        self.pawns.set(player, target);
        debug!(%player, %target, "pawn moved");

        if self.board.is_goal_tile(player, target) {
            self.state = GameState::won_by(player);
            debug!(%player, "goal reached");
        } else {
            self.check_stalemate(player.opp());
        }
        self.turn = self.turn.opp();
        Ok(self.state)
    }

    pub fn try_place_fence(
        &mut self,
        player: Player,
        alignment: Alignment,
        anchor: Tile,
    ) -> Result<GameState, QuoridorError> {
        let fence = FenceSegment::new(alignment, anchor);
        self.ensure_can_act(player)
            .and_then(|()| self.check_fence(player, fence))
            .inspect_err(|e| trace!(%player, %fence, error = %e, "fence rejected"))?;

        self.fences.insert(fence);
        self.budget.spend(player);
        debug!(
            %player,
            %fence,
            remaining = self.budget.get(player),
            "fence placed"
        );

        self.check_stalemate(player.opp());
        self.turn = self.turn.opp();
        Ok(self.state)
    }

    /// Boolean form of [`Game::try_move`].
    pub fn move_pawn(&mut self, player: Player, target: Tile) -> bool {
        self.try_move(player, target).is_ok()
    }

    /// [`Game::try_place_fence`], with fair-play refusals told apart.
    pub fn place_fence(&mut self, player: Player, alignment: Alignment, anchor: Tile) -> FenceOutcome {
        FenceOutcome::from(&self.try_place_fence(player, alignment, anchor))
    }

    pub fn apply(&mut self, player: Player, action: &Action) -> Result<GameState, QuoridorError> {
        match *action {
            Action::Move(tile) => self.try_move(player, tile),
            Action::Fence(fence) => self.try_place_fence(player, fence.alignment, fence.anchor),
        }
    }

    // -- Internal helpers --

    fn check_move(&self, player: Player, target: Tile) -> Result<(), QuoridorError> {
        if !self.board.in_bounds(target) {
            return Err(QuoridorError::OutOfBounds);
        }
        if !self.legal_moves(player).contains(&target) {
            return Err(QuoridorError::NotReachable);
        }
        Ok(())
    }

    fn check_fence(&self, player: Player, fence: FenceSegment) -> Result<(), QuoridorError> {
        if self.budget.get(player) == 0 {
            return Err(QuoridorError::FenceBudgetExhausted);
        }
        if !self.board.in_bounds(fence.anchor) {
            return Err(QuoridorError::OutOfBounds);
        }
        if self.fences.contains(fence) {
            return Err(QuoridorError::FenceAlreadyPlaced);
        }
        if !self.is_fair(fence) {
            return Err(QuoridorError::BreaksFairPlay);
        }
        Ok(())
    }

    fn check_stalemate(&mut self, next: Player) {
        if !self.has_legal_action(next) {
            self.state = GameState::Stalemate;
            debug!(player = %next, "no legal action left, stalemate");
        }
    }
}

#[cfg(test)]
impl Game {
    /// Test setup that skips the rules entirely.
    pub(crate) fn set_pawn(&mut self, player: Player, tile: Tile) {
        self.pawns.set(player, tile);
    }

    pub(crate) fn set_turn(&mut self, player: Player) {
        self.turn = player;
    }

    pub(crate) fn insert_fence(&mut self, fence: FenceSegment) {
        self.fences.insert(fence);
    }
}

impl fmt::Display for Game {
    /// ASCII board. `1`/`2` are pawns, `x` marks tiles the player to move can
    /// step to, `|` and `---` are fences.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.board.size();
        let highlight = if self.state.is_ongoing() {
            self.legal_moves(self.turn)
        } else {
            Reachable::new()
        };

        write!(f, "   ")?;
        for col in 0..size {
            write!(f, "{col:^4}")?;
        }
        writeln!(f)?;

        for row in 0..=size {
            write!(f, "   ")?;
            for col in 0..size {
                let wall = self.fences.contains(FenceSegment::horizontal(Tile::new(col, row)));
                write!(f, "+{}", if wall { "---" } else { "   " })?;
            }
            writeln!(f, "+")?;

            if row == size {
                break;
            }

            write!(f, "{row:>2} ")?;
            for col in 0..=size {
                let tile = Tile::new(col, row);
                let wall = self.fences.contains(FenceSegment::vertical(tile));
                write!(f, "{}", if wall { '|' } else { ' ' })?;
                if col == size {
                    break;
                }
                let mark = match self.pawns.occupant(tile) {
                    Some(p) => char::from(b'0' + p.number()),
                    None if highlight.contains(&tile) => 'x',
                    None => '.',
                };
                write!(f, " {mark} ")?;
            }
            writeln!(f)?;
        }

        writeln!(
            f,
            "Fences left: P1 {}, P2 {}",
            self.budget.player1, self.budget.player2
        )?;
        match self.state {
            GameState::Ongoing => write!(f, "{} to move", self.turn),
            GameState::Stalemate => write!(f, "Stalemate"),
            GameState::Player1Win => write!(f, "{} wins", Player::One),
            GameState::Player2Win => write!(f, "{} wins", Player::Two),
        }
    }
}
