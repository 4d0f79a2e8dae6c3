//! Session bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::background::ImageRef;
use crate::core::{BoardConfig, Status};
use crate::locale::{Language, Localizer};
use crate::session::Session;

use super::py_core::{facing_name, position_tuple, PyCommand};

/// Python wrapper for Session.
///
/// Owns one game; notices come back already translated.
#[pyclass(name = "Session")]
pub struct PySession {
    session: Session,
    localizer: Localizer,
}

#[pymethods]
impl PySession {
    /// Create a new session.
    ///
    /// # Arguments
    /// - size: Grid dimension
    /// - honey: Number of honey drops
    /// - seed: RNG seed, or None for a random board
    /// - language: "es" or "en"
    #[new]
    #[pyo3(signature = (size = 5, honey = 4, seed = None, language = "es"))]
    fn new(size: usize, honey: usize, seed: Option<u64>, language: &str) -> PyResult<Self> {
        let language = Language::from_code(language)
            .ok_or_else(|| PyValueError::new_err(format!("unsupported language: {language}")))?;
        let config = BoardConfig::new().with_size(size).with_random_honey(honey);
        let session = match seed {
            Some(seed) => Session::new(config, seed),
            None => Session::from_entropy(config),
        }
        .map_err(|e| PyValueError::new_err(e.to_string()))?;

        Ok(Self {
            session,
            localizer: Localizer::new(language),
        })
    }

    /// Apply a command. Returns the translated notice, if any.
    fn dispatch(&mut self, command: &PyCommand) -> Option<String> {
        let outcome = self.session.dispatch(command.0);
        outcome.notice.map(|n| self.localizer.notice(&n))
    }

    /// Apply the command bound to a key; unbound keys do nothing.
    fn press(&mut self, key: &str) -> Option<String> {
        let command = PyCommand::from_key(key)?;
        self.dispatch(&command)
    }

    fn reset(&mut self) {
        self.session.reset();
    }

    /// Switch language and return the new code.
    fn toggle_language(&mut self) -> &'static str {
        self.localizer.toggle().code()
    }

    #[pyo3(signature = (url = None))]
    fn set_background(&mut self, url: Option<String>) {
        self.session.set_background(url.map(ImageRef::new));
    }

    #[getter]
    fn background(&self) -> Option<String> {
        self.session.background().map(|b| b.as_str().to_string())
    }

    #[getter]
    fn position(&self) -> (usize, usize) {
        position_tuple(self.session.state().agent().position)
    }

    #[getter]
    fn facing(&self) -> String {
        facing_name(self.session.state().agent().facing)
    }

    #[getter]
    fn collected(&self) -> u32 {
        self.session.state().collected()
    }

    #[getter]
    fn total(&self) -> u32 {
        self.session.state().total()
    }

    #[getter]
    fn won(&self) -> bool {
        self.session.state().status() == Status::Won
    }

    #[getter]
    fn jar_fill_percent(&self) -> u32 {
        self.session.snapshot().jar_fill_percent()
    }

    /// Cell names, rows top to bottom.
    fn cells(&self) -> Vec<Vec<String>> {
        self.session
            .state()
            .board()
            .rows()
            .into_iter()
            .map(|row| row.into_iter().map(|c| format!("{c:?}")).collect())
            .collect()
    }

    /// Plain-text rendering of the board.
    fn render(&self) -> String {
        self.session.snapshot().to_string()
    }

    fn __repr__(&self) -> String {
        let (x, y) = self.position();
        format!(
            "Session(pos=({}, {}), facing={}, honey={}/{})",
            x,
            y,
            self.facing(),
            self.collected(),
            self.total()
        )
    }
}
