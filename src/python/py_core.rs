//! Core type bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{GameError, GameStatus};

/// Convert an engine error into a Python `ValueError`.
pub(crate) fn to_py_err(err: GameError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python wrapper for GameStatus.
#[pyclass(name = "GameStatus")]
#[derive(Clone, Debug)]
pub struct PyGameStatus(pub GameStatus);

#[pymethods]
impl PyGameStatus {
    /// True once the game has a winner or is tied.
    #[getter]
    fn is_terminal(&self) -> bool {
        self.0.is_terminal()
    }

    #[getter]
    fn is_tie(&self) -> bool {
        self.0 == GameStatus::Tie
    }

    /// Index of the winning player, if any.
    #[getter]
    fn winner(&self) -> Option<usize> {
        self.0.winner().map(|p| p.index())
    }

    fn __repr__(&self) -> String {
        format!("GameStatus({})", self.0)
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
