//! Depth-limited game-tree search.
//!
//! Two opponent models are supported:
//!
//! - **Max-n**: every node belongs to the player to move, who picks the
//!   child maximizing their own component of the score vector. Because
//!   scores are non-negative and sum to 1, a child whose mover already
//!   secured more than `1 - b` (where `b` is the parent's best so far)
//!   can never be chosen by the parent, so its remaining siblings are
//!   skipped (shallow pruning).
//! - **Paranoid**: the searching player maximizes their component and
//!   everyone else minimizes it, which reduces to alpha-beta.
//!
//! Children are explored in row-major move order and only a strictly
//! better score replaces the incumbent, so ties resolve to the lowest
//! coordinate and the chosen move is deterministic for a fixed config.

use std::time::Instant;

use tracing::debug;

use crate::core::{GameError, Move, Player, PlayerMap};
use crate::engine::Game;

use super::config::{SearchConfig, SearchMode};
use super::eval::{normalize, terminal_scores, EvaluationFunction, RandomEvaluation};
use super::stats::SearchStats;

/// Result of a search from one position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchOutcome {
    /// Move chosen for the player to move.
    pub best_move: Move,

    /// Expected share of the searching player after `best_move`.
    pub value: f64,
}

/// Search context.
///
/// Owns the configuration, the evaluator used at the depth limit and the
/// statistics of the most recent search.
#[derive(Debug)]
pub struct Searcher {
    config: SearchConfig,
    evaluator: Box<dyn EvaluationFunction>,
    stats: SearchStats,
}

impl Searcher {
    /// Create a searcher scoring depth-limit positions with a
    /// [`RandomEvaluation`] seeded from `config`.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            evaluator: Box::new(RandomEvaluation::new(config.seed)),
            config,
            stats: SearchStats::default(),
        }
    }

    /// Set a custom evaluator.
    pub fn with_evaluator<E: EvaluationFunction + 'static>(mut self, evaluator: E) -> Self {
        self.evaluator = Box::new(evaluator);
        self
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Statistics of the most recent search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Best move for the player to move in `game`.
    pub fn best_move(&mut self, game: &Game) -> Result<Move, GameError> {
        self.analyze(game).map(|outcome| outcome.best_move)
    }

    /// Search `game` and report the chosen move with its value.
    ///
    /// Fails with `MoveAfterTerminal` on a finished game and with
    /// `SearchInvariantViolation` if an ongoing position offers no moves.
    /// Rule set contract violations met during the search are returned
    /// as-is.
    pub fn analyze(&mut self, game: &Game) -> Result<SearchOutcome, GameError> {
        let start = Instant::now();
        self.stats.reset();

        let status = game.status();
        if status.is_terminal() {
            return Err(GameError::MoveAfterTerminal { status });
        }

        let depth = self.config.depth.max(1);
        let root = game.to_move();
        let outcome = match self.config.mode {
            SearchMode::MaxN => {
                let (scores, best) = self.max_n(game, depth, None)?;
                let best_move = best.ok_or(GameError::SearchInvariantViolation {
                    move_num: game.move_num(),
                })?;
                SearchOutcome {
                    best_move,
                    value: scores[root],
                }
            }
            SearchMode::Paranoid => self.paranoid_root(game, depth, root)?,
        };

        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            mode = ?self.config.mode,
            depth,
            player = %root,
            best_move = %outcome.best_move,
            value = outcome.value,
            nodes = self.stats.nodes,
            pruned = self.stats.pruned,
            time_us = self.stats.time_us,
            "search complete"
        );
        Ok(outcome)
    }

    /// Score `game` with the depth-limit evaluator, or exactly if it is over.
    fn score(&mut self, game: &Game) -> PlayerMap<f64> {
        match terminal_scores(game.status(), game.num_players()) {
            Some(scores) => {
                self.stats.terminal_hits += 1;
                scores
            }
            None => {
                self.stats.leaves += 1;
                normalize(self.evaluator.evaluate(game))
            }
        }
    }

    /// Max-n value of `game`.
    ///
    /// `bound` is the parent's mover and the best component it has
    /// secured so far.
    fn max_n(
        &mut self,
        game: &Game,
        depth: u32,
        bound: Option<(Player, f64)>,
    ) -> Result<(PlayerMap<f64>, Option<Move>), GameError> {
        self.stats.nodes += 1;
        if depth == 0 || game.status().is_terminal() {
            return Ok((self.score(game), None));
        }

        let mover = game.to_move();
        let mut best: Option<(PlayerMap<f64>, Move)> = None;
        for mv in game.checked_valid_moves()? {
            let child = game.child(mv)?;
            let own_bound = best.as_ref().map(|(scores, _)| (mover, scores[mover]));
            let (scores, _) = self.max_n(&child, depth - 1, own_bound)?;

            if best.as_ref().map_or(true, |(b, _)| scores[mover] > b[mover]) {
                let secured = scores[mover];
                best = Some((scores, mv));

                if let Some((parent, parent_best)) = bound {
                    if parent != mover && secured > 1.0 - parent_best {
                        self.stats.pruned += 1;
                        break;
                    }
                }
            }
        }

        match best {
            Some((scores, mv)) => Ok((scores, Some(mv))),
            None => Err(GameError::SearchInvariantViolation {
                move_num: game.move_num(),
            }),
        }
    }

    fn paranoid_root(
        &mut self,
        game: &Game,
        depth: u32,
        root: Player,
    ) -> Result<SearchOutcome, GameError> {
        self.stats.nodes += 1;

        let mut alpha = f64::NEG_INFINITY;
        let mut best: Option<SearchOutcome> = None;
        for mv in game.checked_valid_moves()? {
            let child = game.child(mv)?;
            let value = self.paranoid(&child, depth - 1, alpha, f64::INFINITY, root)?;
            if best.map_or(true, |b| value > b.value) {
                best = Some(SearchOutcome {
                    best_move: mv,
                    value,
                });
                alpha = alpha.max(value);
            }
        }

        best.ok_or(GameError::SearchInvariantViolation {
            move_num: game.move_num(),
        })
    }

    /// Alpha-beta on `root`'s component.
    fn paranoid(
        &mut self,
        game: &Game,
        depth: u32,
        mut alpha: f64,
        mut beta: f64,
        root: Player,
    ) -> Result<f64, GameError> {
        self.stats.nodes += 1;
        if depth == 0 || game.status().is_terminal() {
            return Ok(self.score(game)[root]);
        }

        let moves = game.checked_valid_moves()?;
        if moves.is_empty() {
            return Err(GameError::SearchInvariantViolation {
                move_num: game.move_num(),
            });
        }

        let maximizing = game.to_move() == root;
        let mut value = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };

        for mv in moves {
            let child = game.child(mv)?;
            let score = self.paranoid(&child, depth - 1, alpha, beta, root)?;
            if maximizing {
                value = value.max(score);
                alpha = alpha.max(value);
            } else {
                value = value.min(score);
                beta = beta.min(value);
            }

            if alpha >= beta {
                self.stats.pruned += 1;
                break;
            }
        }

        Ok(value)
    }
}
