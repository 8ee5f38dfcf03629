//! Position evaluation for depth-limited search.
//!
//! Scores are per-player shares of a unit total: a won position gives
//! the winner 1.0, a tie splits 1.0 evenly. Evaluators score the
//! non-terminal positions where the search stops; whatever they return
//! is normalized onto the same scale before use.

use std::fmt::Debug;
use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

use crate::core::{GameRng, GameStatus, Player, PlayerMap};
use crate::engine::Game;
use crate::rules::RunDetector;

/// Scores a non-terminal position for every player.
pub trait EvaluationFunction: Debug + Send + Sync {
    /// Per-player value of `game`. Larger is better; negative entries
    /// are treated as zero.
    fn evaluate(&self, game: &Game) -> PlayerMap<f64>;
}

/// Exact scores for a finished game.
///
/// Returns `None` while the game is ongoing.
#[must_use]
pub fn terminal_scores(status: GameStatus, num_players: usize) -> Option<PlayerMap<f64>> {
    match status {
        GameStatus::Ongoing => None,
        GameStatus::Tie => Some(PlayerMap::with_value(num_players, 1.0 / num_players as f64)),
        won => {
            let winner = won.winner()?;
            Some(PlayerMap::new(num_players, |p| if p == winner { 1.0 } else { 0.0 }))
        }
    }
}

/// Clamp negatives to zero and scale so the entries sum to 1.
///
/// An all-zero map becomes uniform.
#[must_use]
pub fn normalize(mut scores: PlayerMap<f64>) -> PlayerMap<f64> {
    for v in scores.values_mut() {
        if !v.is_finite() || *v < 0.0 {
            *v = 0.0;
        }
    }

    let total: f64 = scores.values().sum();
    let uniform = 1.0 / scores.player_count() as f64;
    for v in scores.values_mut() {
        *v = if total > 0.0 { *v / total } else { uniform };
    }
    scores
}

/// Every position is worth the same to everyone.
#[derive(Clone, Copy, Debug, Default)]
pub struct NeutralEvaluation;

impl EvaluationFunction for NeutralEvaluation {
    fn evaluate(&self, game: &Game) -> PlayerMap<f64> {
        PlayerMap::with_value(game.num_players(), 1.0 / game.num_players() as f64)
    }
}

/// Random split of the unit total, keyed on the position.
///
/// The same position always receives the same split for a given seed,
/// so searches stay reproducible.
#[derive(Clone, Copy, Debug)]
pub struct RandomEvaluation {
    seed: u64,
}

impl RandomEvaluation {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl EvaluationFunction for RandomEvaluation {
    fn evaluate(&self, game: &Game) -> PlayerMap<f64> {
        let mut hasher = FxHasher::default();
        game.state().hash(&mut hasher);

        let shares = GameRng::keyed(self.seed, hasher.finish()).simplex(game.num_players());
        PlayerMap::new(game.num_players(), |p| shares[p.index()])
    }
}

/// Rewards windows that only one player has pieces in.
///
/// Each window of `run_length` cells holding `c` pieces of a single
/// player (and no others) adds `c * c` to that player. Every player
/// starts from 1 so an empty board evaluates as uniform.
#[derive(Clone, Copy, Debug)]
pub struct RunHeuristic {
    detector: RunDetector,
}

impl RunHeuristic {
    #[must_use]
    pub fn new(run_length: usize) -> Self {
        Self {
            detector: RunDetector::new(run_length),
        }
    }
}

impl EvaluationFunction for RunHeuristic {
    fn evaluate(&self, game: &Game) -> PlayerMap<f64> {
        let board = game.board();
        let mut scores = PlayerMap::with_value(game.num_players(), 1.0);

        for window in self.detector.windows(board.num_rows(), board.num_cols()) {
            let mut owner: Option<Player> = None;
            let mut count = 0usize;
            let mut contested = false;
            for cell in window.cells(board).flatten() {
                match owner {
                    Some(p) if p != cell => {
                        contested = true;
                        break;
                    }
                    _ => {
                        owner = Some(cell);
                        count += 1;
                    }
                }
            }

            if let (false, Some(p)) = (contested, owner) {
                if p.participates(game.num_players()) {
                    scores[p] += (count * count) as f64;
                }
            }
        }

        scores
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::core::{Board, GameConfig, GameState};
    use crate::games::PushUpFour;

    fn game_at(text: &str, players: usize) -> Game {
        Game::from_position(
            Arc::new(PushUpFour::default()),
            players,
            GameState::new(Player::Player0, 0, Board::parse(text).unwrap()),
        )
        .unwrap()
    }

    fn total(scores: &PlayerMap<f64>) -> f64 {
        scores.values().sum()
    }

    #[test]
    fn test_terminal_scores() {
        let win = terminal_scores(GameStatus::Player1Win, 3).unwrap();
        assert_eq!(win.values().copied().collect::<Vec<_>>(), vec![0.0, 1.0, 0.0]);

        let tie = terminal_scores(GameStatus::Tie, 4).unwrap();
        assert!(tie.values().all(|&v| (v - 0.25).abs() < 1e-12));

        assert!(terminal_scores(GameStatus::Ongoing, 2).is_none());
    }

    #[test]
    fn test_normalize() {
        let mut raw = PlayerMap::with_value(3, 0.0);
        raw[Player::Player0] = 3.0;
        raw[Player::Player1] = -2.0;
        raw[Player::Player2] = 1.0;

        let scores = normalize(raw);
        assert!((scores[Player::Player0] - 0.75).abs() < 1e-12);
        assert_eq!(scores[Player::Player1], 0.0);
        assert!((total(&scores) - 1.0).abs() < 1e-12);

        let zeros = normalize(PlayerMap::with_value(2, 0.0));
        assert_eq!(zeros[Player::Player0], 0.5);
    }

    #[test]
    fn test_neutral_is_uniform() {
        let game = Game::new(Arc::new(PushUpFour::default()), GameConfig::default().with_players(4)).unwrap();
        let scores = NeutralEvaluation.evaluate(&game);
        assert!(scores.values().all(|&v| v == 0.25));
    }

    #[test]
    fn test_random_is_keyed_on_position() {
        let eval = RandomEvaluation::new(7);
        let a = game_at("....\n..0.", 3);
        let b = game_at("....\n.0..", 3);

        let first = eval.evaluate(&a);
        assert_eq!(first, eval.evaluate(&a));
        assert_ne!(first, eval.evaluate(&b));
        assert!((total(&first) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_run_heuristic_prefers_open_lines() {
        let game = game_at(
            "......
             ......
             .000..
             1.....",
            2,
        );
        let scores = normalize(RunHeuristic::new(4).evaluate(&game));
        assert!(scores[Player::Player0] > scores[Player::Player1]);
    }

    #[test]
    fn test_run_heuristic_empty_board_uniform() {
        let game = game_at("....\n....", 2);
        let scores = RunHeuristic::new(4).evaluate(&game);
        assert_eq!(scores[Player::Player0], scores[Player::Player1]);
    }
}
