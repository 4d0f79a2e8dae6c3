//! Core type bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Command, Facing, Position};

/// Python wrapper for Command.
#[pyclass(name = "Command")]
#[derive(Clone, Debug)]
pub struct PyCommand(pub Command);

#[pymethods]
impl PyCommand {
    /// Create a command by name: forward, backward, left, right or reset.
    #[new]
    fn new(name: &str) -> PyResult<Self> {
        let command = match name {
            "forward" => Command::MoveForward,
            "backward" => Command::MoveBackward,
            "left" => Command::TurnLeft,
            "right" => Command::TurnRight,
            "reset" => Command::Reset,
            other => {
                return Err(PyValueError::new_err(format!("unknown command: {other}")));
            }
        };
        Ok(Self(command))
    }

    /// Map a keyboard key name (e.g. "ArrowUp") to a command.
    #[staticmethod]
    pub fn from_key(key: &str) -> Option<Self> {
        Command::from_key(key).map(Self)
    }

    #[getter]
    fn name(&self) -> String {
        self.0.to_string()
    }

    fn __repr__(&self) -> String {
        format!("Command({})", self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        Command::ALL.iter().position(|&c| c == self.0).unwrap_or(0) as u64
    }
}

pub(crate) fn position_tuple(pos: Position) -> (usize, usize) {
    (pos.x, pos.y)
}

pub(crate) fn facing_name(facing: Facing) -> String {
    facing.to_string()
}
