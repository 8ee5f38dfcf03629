//! Game aggregate and turn state machine.
//!
//! A `Game` owns the board shape, the player count, the active rule set
//! and the current state. Moves go through [`Game::apply_move`], which
//! validates them, asks the rule set for the next state, checks the result
//! against the engine contract and only then commits it. A rejected move
//! leaves the game exactly as it was.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::core::{Board, GameConfig, GameError, GameState, GameStatus, Move, Player};
use crate::rules::{MoveList, RuleSet};

/// One game instance.
///
/// Cloning is cheap: the rule set is shared and the board is persistent.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    rule_set: Arc<dyn RuleSet>,
    state: GameState,
    status: GameStatus,
}

impl Game {
    /// Start a new game.
    ///
    /// Fails with `InvalidPlayerCount` or `InvalidDimensions` if `config`
    /// is outside what the engine and the rule set support.
    pub fn new(rule_set: Arc<dyn RuleSet>, config: GameConfig) -> Result<Self, GameError> {
        config.validate(rule_set.player_range())?;

        let to_move = rule_set.initial_to_move();
        if !to_move.participates(config.num_players) {
            return Err(violation(
                rule_set.as_ref(),
                format!("opened with {to_move} in a {}-player game", config.num_players),
            ));
        }

        let board = rule_set.initial_board(config.num_rows, config.num_cols);
        let state = GameState::new(to_move, 0, board);
        let game = Self::from_position(rule_set, config.num_players, state)?;

        debug!(
            rule_set = game.rule_set.name(),
            rows = game.num_rows(),
            cols = game.num_cols(),
            players = game.num_players(),
            "game created"
        );
        Ok(game)
    }

    /// Resume from an arbitrary position.
    ///
    /// The board shape is taken from `state`. Useful for analysing
    /// positions and for tests.
    pub fn from_position(
        rule_set: Arc<dyn RuleSet>,
        num_players: usize,
        state: GameState,
    ) -> Result<Self, GameError> {
        let config = GameConfig::new(state.board.num_rows(), state.board.num_cols(), num_players);
        config.validate(rule_set.player_range())?;

        if !state.to_move.participates(num_players) {
            return Err(GameError::NonParticipant {
                player: state.to_move,
                num_players,
            });
        }

        let mut game = Self {
            config,
            rule_set,
            state,
            status: GameStatus::Ongoing,
        };
        game.status = game.classify();
        Ok(game)
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.config.num_rows
    }

    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.config.num_cols
    }

    #[must_use]
    pub fn num_players(&self) -> usize {
        self.config.num_players
    }

    #[must_use]
    pub fn rule_set(&self) -> &Arc<dyn RuleSet> {
        &self.rule_set
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.state.board
    }

    #[must_use]
    pub fn to_move(&self) -> Player {
        self.state.to_move
    }

    #[must_use]
    pub fn move_num(&self) -> usize {
        self.state.move_num
    }

    /// Player after `to_move` in cyclic turn order.
    #[must_use]
    pub fn next_player(&self) -> Player {
        self.state.to_move.next(self.config.num_players)
    }

    /// Status of the current position, computed when it was reached.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Legal moves in the current position, in row-major order.
    ///
    /// Empty once the game is over.
    #[must_use]
    pub fn valid_moves(&self) -> MoveList {
        if self.status.is_terminal() {
            return MoveList::new();
        }
        let mut moves = self.rule_set.valid_moves(self);
        moves.sort_unstable();
        moves.dedup();
        moves
    }

    /// Like [`valid_moves`](Self::valid_moves), but fails with
    /// `RuleSetViolation` if the rule set offers a move off the board.
    pub fn checked_valid_moves(&self) -> Result<MoveList, GameError> {
        let moves = self.valid_moves();
        let stray = moves
            .iter()
            .copied()
            .find(|mv| !self.board().contains(mv.row, mv.col));
        match stray {
            Some(mv) => Err(self.off_board(mv)),
            None => Ok(moves),
        }
    }

    #[must_use]
    pub fn is_win(&self, player: Player) -> bool {
        self.rule_set.is_win(self, player)
    }

    #[must_use]
    pub fn is_tie(&self) -> bool {
        self.rule_set.is_tie(self)
    }

    // === Transitions ===

    /// Play `mv` for the player to move.
    ///
    /// Returns the status of the new position.
    pub fn apply_move(&mut self, mv: Move) -> Result<GameStatus, GameError> {
        let next = self.successor(mv).map_err(|err| {
            warn!(move_num = self.move_num(), %mv, %err, "move rejected");
            err
        })?;
        *self = next;

        debug!(
            move_num = self.move_num(),
            %mv,
            to_move = %self.to_move(),
            status = ?self.status,
            "move applied"
        );
        Ok(self.status)
    }

    /// Play `mv` on behalf of `player`.
    ///
    /// Fails with `OutOfTurn` unless `player` is the player to move.
    pub fn apply_move_as(&mut self, player: Player, mv: Move) -> Result<GameStatus, GameError> {
        if player != self.to_move() {
            warn!(%player, to_move = %self.to_move(), "out-of-turn move rejected");
            return Err(GameError::OutOfTurn {
                submitted: player,
                to_move: self.to_move(),
            });
        }
        self.apply_move(mv)
    }

    /// The game that results from playing `mv`, without touching `self`.
    pub fn successor(&self, mv: Move) -> Result<Game, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::MoveAfterTerminal {
                status: self.status,
            });
        }
        if !self.checked_valid_moves()?.contains(&mv) {
            return Err(GameError::InvalidMove { mv });
        }
        self.child(mv)
    }

    /// Apply a move already known to be valid.
    ///
    /// The transition result is still checked against the engine contract.
    pub(crate) fn child(&self, mv: Move) -> Result<Game, GameError> {
        if !self.board().contains(mv.row, mv.col) {
            return Err(self.off_board(mv));
        }

        let next_state = self.rule_set.transition(self, mv);
        self.check_transition(&next_state)?;

        let mut next = Self {
            config: self.config.clone(),
            rule_set: Arc::clone(&self.rule_set),
            state: next_state,
            status: GameStatus::Ongoing,
        };
        next.status = next.classify();
        Ok(next)
    }

    /// Classify the current position.
    ///
    /// The rule set's tie test runs first. Otherwise each player's win
    /// test runs in turn order; a single winner wins, and more than one
    /// is a tie rather than an arbitrary pick.
    fn classify(&self) -> GameStatus {
        if self.is_tie() {
            return GameStatus::Tie;
        }

        let mut winners = Player::all(self.num_players()).filter(|&p| self.is_win(p));
        match (winners.next(), winners.next()) {
            (None, _) => GameStatus::Ongoing,
            (Some(winner), None) => GameStatus::win(winner),
            (Some(_), Some(_)) => GameStatus::Tie,
        }
    }

    fn check_transition(&self, next: &GameState) -> Result<(), GameError> {
        let detail = if next.move_num != self.move_num() + 1 {
            Some(format!(
                "move number went from {} to {}",
                self.move_num(),
                next.move_num
            ))
        } else if !next.to_move.participates(self.num_players()) {
            Some(format!(
                "handed the turn to {} in a {}-player game",
                next.to_move,
                self.num_players()
            ))
        } else if next.board.num_rows() != self.num_rows() || next.board.num_cols() != self.num_cols() {
            Some(format!(
                "board changed shape from {}x{} to {}x{}",
                self.num_rows(),
                self.num_cols(),
                next.board.num_rows(),
                next.board.num_cols()
            ))
        } else {
            None
        };

        match detail {
            Some(detail) => Err(self.reject(detail)),
            None => Ok(()),
        }
    }

    fn off_board(&self, mv: Move) -> GameError {
        self.reject(format!(
            "offered {mv} outside the {}x{} board",
            self.num_rows(),
            self.num_cols()
        ))
    }

    /// Report a rule set contract violation.
    fn reject(&self, detail: String) -> GameError {
        let err = violation(self.rule_set.as_ref(), detail);
        warn!(%err, "rule set output rejected");
        err
    }
}

fn violation(rule_set: &dyn RuleSet, detail: String) -> GameError {
    GameError::RuleSetViolation {
        rule_set: rule_set.name().to_string(),
        detail,
    }
}
