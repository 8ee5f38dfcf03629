//! Controller bindings for Python.

use numpy::PyArray2;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::controller::{ControllerConfig, GameController, GameHandle, Seat};
use crate::core::Move;
use crate::games::RuleSetRegistry;
use crate::search::{SearchConfig, SearchMode};

use super::py_core::{to_py_err, PyGameStatus};

fn parse_seat(seat: &str) -> PyResult<Seat> {
    match seat {
        "human" => Ok(Seat::Human),
        "computer" => Ok(Seat::Computer),
        other => Err(PyValueError::new_err(format!(
            "unknown seat `{other}`; expected `human` or `computer`"
        ))),
    }
}

/// Python wrapper for GameController.
///
/// Games are referred to by integer handles. Board cells are reported
/// as player indices with -1 for empty.
#[pyclass(name = "GameController")]
pub struct PyGameController {
    inner: GameController,
}

#[pymethods]
impl PyGameController {
    /// Create a controller for a registered rule set.
    ///
    /// # Arguments
    /// - rule_set: Name of a built-in rule set (see `rule_sets()`)
    /// - rows, cols: Board size; both or neither (default: rule set's own)
    /// - depth: Search depth for computer seats
    /// - paranoid: Use paranoid search instead of max-n
    /// - seed: Seed for the search evaluator
    #[new]
    #[pyo3(signature = (
        rule_set = "push_up_four",
        rows = None,
        cols = None,
        depth = 7,
        paranoid = false,
        seed = 42
    ))]
    fn new(
        rule_set: &str,
        rows: Option<usize>,
        cols: Option<usize>,
        depth: u32,
        paranoid: bool,
        seed: u64,
    ) -> PyResult<Self> {
        let mode = if paranoid {
            SearchMode::Paranoid
        } else {
            SearchMode::MaxN
        };
        let mut config = ControllerConfig::default().with_search(
            SearchConfig::default()
                .with_depth(depth)
                .with_mode(mode)
                .with_seed(seed),
        );
        match (rows, cols) {
            (Some(r), Some(c)) => config = config.with_dimensions(r, c),
            (None, None) => {}
            _ => return Err(PyValueError::new_err("rows and cols must be given together")),
        }

        let inner = GameController::from_registry(&RuleSetRegistry::with_builtin(), rule_set, config)
            .map_err(to_py_err)?;
        Ok(Self { inner })
    }

    /// Names of the built-in rule sets.
    #[staticmethod]
    fn rule_sets() -> Vec<String> {
        RuleSetRegistry::with_builtin()
            .names()
            .into_iter()
            .map(String::from)
            .collect()
    }

    /// Start a game with Player 0 human and the rest computer.
    fn create_game(&mut self, num_players: usize) -> PyResult<u64> {
        self.inner
            .create_game(num_players)
            .map(GameHandle::id)
            .map_err(to_py_err)
    }

    /// Start a game with explicit seats, e.g. `["human", "computer", "human"]`.
    fn create_game_with_seats(&mut self, seats: Vec<String>) -> PyResult<u64> {
        let seats = seats
            .iter()
            .map(|s| parse_seat(s))
            .collect::<PyResult<Vec<_>>>()?;
        self.inner
            .create_game_with_seats(&seats)
            .map(GameHandle::id)
            .map_err(to_py_err)
    }

    fn discard_game(&mut self, handle: u64) -> PyResult<()> {
        self.inner
            .discard_game(GameHandle::from_id(handle))
            .map_err(to_py_err)
    }

    /// Board as a (rows, cols) int8 array.
    fn get_board<'py>(&self, py: Python<'py>, handle: u64) -> PyResult<Bound<'py, PyArray2<i8>>> {
        let rows: Vec<Vec<i8>> = self
            .inner
            .get_board(GameHandle::from_id(handle))
            .map_err(to_py_err)?
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|cell| cell.map_or(-1, |p| p.index() as i8))
                    .collect()
            })
            .collect();

        PyArray2::from_vec2_bound(py, &rows).map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn get_to_move(&self, handle: u64) -> PyResult<usize> {
        self.inner
            .get_to_move(GameHandle::from_id(handle))
            .map(|p| p.index())
            .map_err(to_py_err)
    }

    fn get_move_num(&self, handle: u64) -> PyResult<usize> {
        self.inner
            .get_move_num(GameHandle::from_id(handle))
            .map_err(to_py_err)
    }

    fn get_game_status(&self, handle: u64) -> PyResult<PyGameStatus> {
        self.inner
            .get_game_status(GameHandle::from_id(handle))
            .map(PyGameStatus)
            .map_err(to_py_err)
    }

    fn get_valid_moves(&self, handle: u64) -> PyResult<Vec<(usize, usize)>> {
        self.inner
            .get_valid_moves(GameHandle::from_id(handle))
            .map_err(to_py_err)
    }

    /// Play a human move. Raises `ValueError` if it is rejected.
    fn make_human_move(&mut self, handle: u64, row: usize, col: usize) -> PyResult<()> {
        self.inner
            .submit_human_move(GameHandle::from_id(handle), Move::new(row, col))
            .map_err(to_py_err)
    }

    /// Let the computer move. Returns the `(row, col)` it played.
    fn make_ai_move(&mut self, py: Python<'_>, handle: u64) -> PyResult<(usize, usize)> {
        let handle = GameHandle::from_id(handle);
        let inner = &mut self.inner;
        py.allow_threads(|| inner.request_ai_move(handle))
            .map(Into::into)
            .map_err(to_py_err)
    }

    fn __repr__(&self) -> String {
        format!(
            "GameController(rule_set={}, games={})",
            self.inner.rule_set().name(),
            self.inner.game_count()
        )
    }
}
