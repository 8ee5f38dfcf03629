//! Python bindings for the npmm game engine.
//!
//! Exposes the controller boundary so a Python UI or runtime can host
//! games against the computer.
//!
//! # Quick Start
//!
//! ```python
//! import npmm
//!
//! controller = npmm.GameController("push_up_four", depth=5)
//! game = controller.create_game(3)
//!
//! controller.make_human_move(game, 5, 3)
//! while not controller.get_game_status(game).is_terminal and controller.get_to_move(game) != 0:
//!     controller.make_ai_move(game)
//!
//! board = controller.get_board(game)  # numpy int8 array, -1 = empty
//! ```

use pyo3::prelude::*;

mod py_controller;
mod py_core;

pub use py_controller::*;
pub use py_core::*;

/// npmm: N-player N-in-a-row games with a search-based opponent.
#[pymodule]
fn npmm(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGameStatus>()?;
    m.add_class::<PyGameController>()?;
    Ok(())
}
