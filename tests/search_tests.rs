//! Search integration tests across rule sets and player counts.

use std::sync::Arc;

use npmm::core::{Board, GameConfig, GameState, GameStatus, Move, Player};
use npmm::engine::Game;
use npmm::games::{ConnectFour, Othello, PushUpFour};
use npmm::search::{NeutralEvaluation, RunHeuristic, SearchConfig, SearchMode, Searcher};

fn shallow(mode: SearchMode) -> Searcher {
    Searcher::new(SearchConfig::default().with_depth(3).with_mode(mode))
}

// =============================================================================
// Basic Search Tests
// =============================================================================

#[test]
fn test_returns_valid_move() {
    for players in 2..=4 {
        let game = Game::new(
            Arc::new(PushUpFour::default()),
            GameConfig::default().with_players(players),
        )
        .unwrap();

        for mode in [SearchMode::MaxN, SearchMode::Paranoid] {
            let mv = shallow(mode).best_move(&game).unwrap();
            assert!(game.valid_moves().contains(&mv), "{players} players, {mode:?}");
        }
    }
}

#[test]
fn test_default_depth_on_small_board() {
    let game = Game::new(Arc::new(PushUpFour::new(3)), GameConfig::new(3, 4, 2)).unwrap();
    let mut searcher = Searcher::new(SearchConfig::default());
    let mv = searcher.best_move(&game).unwrap();

    assert!(game.valid_moves().contains(&mv));
    assert!(searcher.stats().nodes > 1);
}

#[test]
fn test_othello_search() {
    let game = Game::new(Arc::new(Othello), GameConfig::new(6, 6, 2)).unwrap();
    let mv = shallow(SearchMode::MaxN).best_move(&game).unwrap();
    assert!(game.valid_moves().contains(&mv));
}

// =============================================================================
// Tactics
// =============================================================================

#[test]
fn test_third_player_takes_win() {
    // Player 2 completes a bottom-row run by pushing column 3.
    let board = Board::parse(
        "......
         ......
         ......
         ......
         01....
         222.10",
    )
    .unwrap();
    let game = Game::from_position(
        Arc::new(PushUpFour::default()),
        3,
        GameState::new(Player::Player2, 9, board),
    )
    .unwrap();

    let mut searcher = Searcher::new(SearchConfig::default().with_depth(3));
    let outcome = searcher.analyze(&game).unwrap();
    assert_eq!(outcome.best_move, Move::new(5, 3));
    assert_eq!(outcome.value, 1.0);

    let next = game.successor(outcome.best_move).unwrap();
    assert_eq!(next.status(), GameStatus::Player2Win);
}

#[test]
fn test_heuristic_blocks_open_three() {
    // Player 0 threatens (5, 3) in ConnectFour.
    let board = Board::parse(
        ".......
         .......
         .......
         .......
         .1.....
         000.1..",
    )
    .unwrap();
    let game = Game::from_position(
        Arc::new(ConnectFour::default()),
        2,
        GameState::new(Player::Player1, 5, board),
    )
    .unwrap();

    for mode in [SearchMode::MaxN, SearchMode::Paranoid] {
        let mut searcher = Searcher::new(SearchConfig::default().with_depth(2).with_mode(mode))
            .with_evaluator(RunHeuristic::new(4));
        assert_eq!(searcher.best_move(&game).unwrap(), Move::new(5, 3), "{mode:?}");
    }
}

// =============================================================================
// Determinism Tests
// =============================================================================

#[test]
fn test_deterministic_with_seed() {
    let game = Game::new(
        Arc::new(PushUpFour::default()),
        GameConfig::default().with_players(3),
    )
    .unwrap();
    let config = SearchConfig::default().with_depth(4).with_seed(12345);

    let first = Searcher::new(config.clone()).analyze(&game).unwrap();
    let second = Searcher::new(config).analyze(&game).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_neutral_evaluation_prefers_lowest_coordinate() {
    let game = Game::new(Arc::new(ConnectFour::default()), GameConfig::default()).unwrap();
    let mut searcher = Searcher::new(SearchConfig::default().with_depth(2))
        .with_evaluator(NeutralEvaluation);
    assert_eq!(searcher.best_move(&game).unwrap(), Move::new(5, 0));
}

// =============================================================================
// Full games
// =============================================================================

#[test]
fn test_computer_vs_computer_finishes() {
    for players in 2..=4 {
        let mut game = Game::new(
            Arc::new(PushUpFour::default()),
            GameConfig::new(5, 5, players),
        )
        .unwrap();
        let mut searcher = Searcher::new(SearchConfig::default().with_depth(2))
            .with_evaluator(RunHeuristic::new(4));

        while !game.status().is_terminal() {
            let mv = searcher.best_move(&game).unwrap();
            game.apply_move(mv).unwrap();
        }
        assert!(game.move_num() <= 25);
    }
}
