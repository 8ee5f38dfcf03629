//! Handle-based boundary over running games.

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::config::{ControllerConfig, Seat};
use crate::core::{
    BoardCell, GameConfig, GameError, GameStatus, Move, Player, PlayerConversionError, PlayerMap,
};
use crate::engine::Game;
use crate::games::RuleSetRegistry;
use crate::rules::RuleSet;
use crate::search::{EvaluationFunction, Searcher};

/// Opaque reference to a game owned by a [`GameController`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameHandle(u64);

impl GameHandle {
    #[cfg(feature = "python")]
    pub(crate) fn from_id(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn id(self) -> u64 {
        self.0
    }
}

impl fmt::Display for GameHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "game #{}", self.0)
    }
}

#[derive(Debug)]
struct Session {
    game: Game,
    seats: PlayerMap<Seat>,
}

/// Creates games, answers queries about them and applies moves.
///
/// Queries never change state. The only mutations are
/// [`submit_human_move`](Self::submit_human_move) and
/// [`request_ai_move`](Self::request_ai_move), and a rejected call leaves
/// the game as it was.
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
///
/// use npmm::controller::{ControllerConfig, GameController};
/// use npmm::core::{GameStatus, Move};
/// use npmm::games::PushUpFour;
/// use npmm::search::SearchConfig;
///
/// let config = ControllerConfig::default().with_search(SearchConfig::default().with_depth(2));
/// let mut controller = GameController::new(Arc::new(PushUpFour::default()), config);
///
/// let game = controller.create_game(2).unwrap();
/// controller.submit_human_move(game, Move::new(5, 3)).unwrap();
/// let reply = controller.request_ai_move(game).unwrap();
///
/// assert_eq!(controller.get_move_num(game).unwrap(), 2);
/// assert_eq!(controller.get_game_status(game).unwrap(), GameStatus::Ongoing);
/// assert_eq!(reply.row, 5);
/// ```
#[derive(Debug)]
pub struct GameController {
    rule_set: Arc<dyn RuleSet>,
    config: ControllerConfig,
    searcher: Searcher,
    sessions: FxHashMap<GameHandle, Session>,
    next_handle: u64,
}

impl GameController {
    /// Create a controller whose games use `rule_set`.
    pub fn new(rule_set: Arc<dyn RuleSet>, config: ControllerConfig) -> Self {
        Self {
            searcher: Searcher::new(config.search.clone()),
            rule_set,
            config,
            sessions: FxHashMap::default(),
            next_handle: 0,
        }
    }

    /// Create a controller for the rule set registered under `name`.
    pub fn from_registry(
        registry: &RuleSetRegistry,
        name: &str,
        config: ControllerConfig,
    ) -> Result<Self, GameError> {
        Ok(Self::new(registry.get(name)?, config))
    }

    /// Set the evaluator computer seats use at the search depth limit.
    pub fn with_evaluator<E: EvaluationFunction + 'static>(mut self, evaluator: E) -> Self {
        self.searcher = self.searcher.with_evaluator(evaluator);
        self
    }

    #[must_use]
    pub fn rule_set(&self) -> &Arc<dyn RuleSet> {
        &self.rule_set
    }

    #[must_use]
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Searcher used for computer seats; its stats cover the latest AI move.
    #[must_use]
    pub fn searcher(&self) -> &Searcher {
        &self.searcher
    }

    /// Number of live games.
    #[must_use]
    pub fn game_count(&self) -> usize {
        self.sessions.len()
    }

    // === Lifecycle ===

    /// Start a game for `num_players` with Player 0 human and the rest
    /// computer-controlled.
    pub fn create_game(&mut self, num_players: usize) -> Result<GameHandle, GameError> {
        self.create_game_with_seats(&Seat::default_layout(num_players))
    }

    /// Start a game with one seat per player.
    pub fn create_game_with_seats(&mut self, seats: &[Seat]) -> Result<GameHandle, GameError> {
        let (num_rows, num_cols) = self
            .config
            .dimensions
            .unwrap_or_else(|| self.rule_set.default_dimensions());
        let game = Game::new(
            Arc::clone(&self.rule_set),
            GameConfig::new(num_rows, num_cols, seats.len()),
        )?;

        let handle = GameHandle(self.next_handle);
        self.next_handle += 1;

        let seats = PlayerMap::new(seats.len(), |p| seats[p.index()]);
        debug!(%handle, rule_set = self.rule_set.name(), players = game.num_players(), "game opened");
        self.sessions.insert(handle, Session { game, seats });
        Ok(handle)
    }

    /// Drop a game; its handle becomes invalid.
    pub fn discard_game(&mut self, handle: GameHandle) -> Result<(), GameError> {
        match self.sessions.remove(&handle) {
            Some(_) => {
                debug!(%handle, "game discarded");
                Ok(())
            }
            None => Err(GameError::UnknownHandle(handle.0)),
        }
    }

    // === Queries ===

    /// Read-only view of a game.
    pub fn game(&self, handle: GameHandle) -> Result<&Game, GameError> {
        self.session(handle).map(|s| &s.game)
    }

    /// Seat of `player`, who must take part in the game.
    pub fn seat(&self, handle: GameHandle, player: Player) -> Result<Seat, GameError> {
        let session = self.session(handle)?;
        if !player.participates(session.game.num_players()) {
            return Err(PlayerConversionError {
                value: player.index(),
            }
            .into());
        }
        Ok(session.seats[player])
    }

    /// Board as rows of cells, top row first.
    pub fn get_board(&self, handle: GameHandle) -> Result<Vec<Vec<BoardCell>>, GameError> {
        self.game(handle).map(|g| g.board().to_rows())
    }

    pub fn get_to_move(&self, handle: GameHandle) -> Result<Player, GameError> {
        self.game(handle).map(Game::to_move)
    }

    pub fn get_move_num(&self, handle: GameHandle) -> Result<usize, GameError> {
        self.game(handle).map(Game::move_num)
    }

    pub fn get_game_status(&self, handle: GameHandle) -> Result<GameStatus, GameError> {
        self.game(handle).map(Game::status)
    }

    /// Legal moves as `(row, col)` pairs in row-major order; empty once
    /// the game is over.
    pub fn get_valid_moves(&self, handle: GameHandle) -> Result<Vec<(usize, usize)>, GameError> {
        let moves = self.game(handle)?.checked_valid_moves()?;
        Ok(moves.into_iter().map(Into::into).collect())
    }

    // === Mutations ===

    /// Apply a move for the human seated at `to_move`.
    pub fn submit_human_move(&mut self, handle: GameHandle, mv: Move) -> Result<(), GameError> {
        let session = Self::ready(&mut self.sessions, handle, Seat::Human)?;
        session.game.apply_move(mv)?;
        Ok(())
    }

    /// Search for and apply a move for the computer seated at `to_move`.
    pub fn request_ai_move(&mut self, handle: GameHandle) -> Result<Move, GameError> {
        let session = Self::ready(&mut self.sessions, handle, Seat::Computer)?;
        let mv = self.searcher.best_move(&session.game)?;
        session.game.apply_move(mv)?;
        Ok(mv)
    }

    fn session(&self, handle: GameHandle) -> Result<&Session, GameError> {
        self.sessions
            .get(&handle)
            .ok_or(GameError::UnknownHandle(handle.0))
    }

    /// Session for `handle` if it is still running and the player to move
    /// sits in `seat`.
    fn ready(
        sessions: &mut FxHashMap<GameHandle, Session>,
        handle: GameHandle,
        seat: Seat,
    ) -> Result<&mut Session, GameError> {
        let session = sessions
            .get_mut(&handle)
            .ok_or(GameError::UnknownHandle(handle.0))?;

        let status = session.game.status();
        if status.is_terminal() {
            warn!(%handle, %status, "move requested after the game ended");
            return Err(GameError::MoveAfterTerminal { status });
        }

        let player = session.game.to_move();
        if session.seats[player] != seat {
            warn!(%handle, %player, ?seat, "move requested from the wrong seat");
            return Err(match seat {
                Seat::Human => GameError::NotHumanTurn { player },
                Seat::Computer => GameError::NotComputerTurn { player },
            });
        }
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::{Othello, PushUpFour};
    use crate::search::SearchConfig;

    fn controller() -> GameController {
        GameController::new(
            Arc::new(PushUpFour::default()),
            ControllerConfig::default().with_search(SearchConfig::default().with_depth(2)),
        )
    }

    #[test]
    fn test_invalid_player_count_yields_no_handle() {
        let mut c = controller();
        assert_eq!(
            c.create_game(5).unwrap_err(),
            GameError::InvalidPlayerCount {
                requested: 5,
                min: 2,
                max: 4
            }
        );
        assert_eq!(c.create_game(1).unwrap_err(), GameError::InvalidPlayerCount {
            requested: 1,
            min: 2,
            max: 4
        });
        assert_eq!(c.game_count(), 0);
    }

    #[test]
    fn test_default_dimensions_from_rule_set() {
        let mut c = GameController::new(Arc::new(Othello), ControllerConfig::default());
        let game = c.create_game(2).unwrap();
        let board = c.get_board(game).unwrap();
        assert_eq!((board.len(), board[0].len()), (8, 8));
    }

    #[test]
    fn test_dimension_override() {
        let mut c = GameController::new(
            Arc::new(PushUpFour::default()),
            ControllerConfig::default().with_dimensions(4, 5),
        );
        let game = c.create_game(3).unwrap();
        assert_eq!(c.get_valid_moves(game).unwrap().len(), 5);
    }

    #[test]
    fn test_seats_enforced() {
        let mut c = controller();
        let game = c.create_game(2).unwrap();

        assert_eq!(
            c.request_ai_move(game).unwrap_err(),
            GameError::NotComputerTurn {
                player: Player::Player0
            }
        );
        c.submit_human_move(game, Move::new(5, 0)).unwrap();
        assert_eq!(
            c.submit_human_move(game, Move::new(5, 1)).unwrap_err(),
            GameError::NotHumanTurn {
                player: Player::Player1
            }
        );
        assert_eq!(c.get_move_num(game).unwrap(), 1);
    }

    #[test]
    fn test_discard() {
        let mut c = controller();
        let game = c.create_game(2).unwrap();
        c.discard_game(game).unwrap();
        assert_eq!(
            c.get_to_move(game).unwrap_err(),
            GameError::UnknownHandle(game.id())
        );
        assert_eq!(
            c.discard_game(game).unwrap_err(),
            GameError::UnknownHandle(game.id())
        );
    }

    #[test]
    fn test_handles_are_independent() {
        let mut c = controller();
        let a = c.create_game(2).unwrap();
        let b = c.create_game(4).unwrap();
        assert_ne!(a, b);

        c.submit_human_move(a, Move::new(5, 6)).unwrap();
        assert_eq!(c.get_move_num(a).unwrap(), 1);
        assert_eq!(c.get_move_num(b).unwrap(), 0);
        assert_eq!(c.seat(b, Player::Player3).unwrap(), Seat::Computer);
        assert!(c.seat(a, Player::Player2).is_err());
    }

    #[test]
    fn test_from_registry() {
        let registry = RuleSetRegistry::with_builtin();
        let c = GameController::from_registry(&registry, "othello", ControllerConfig::default())
            .unwrap();
        assert_eq!(c.rule_set().name(), "othello");
        assert_eq!(
            GameController::from_registry(&registry, "checkers", ControllerConfig::default())
                .unwrap_err(),
            GameError::UnknownRuleSet("checkers".to_string())
        );
    }
}
