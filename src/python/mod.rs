//! Python bindings for the bee-grid engine.
//!
//! # Quick Start
//!
//! ```python
//! import bee_grid
//!
//! session = bee_grid.Session(seed=42, language="en")
//! session.dispatch(bee_grid.Command("right"))
//! notice = session.press("ArrowUp")
//! print(session.render())
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_session;

pub use py_core::*;
pub use py_session::*;

/// bee_grid: drive a honey-collecting bee around a grid.
#[pymodule]
fn bee_grid(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCommand>()?;
    m.add_class::<PySession>()?;

    Ok(())
}
