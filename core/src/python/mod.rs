//! Python bindings for radclass
//!
//! Lets a Python function host delegate report classification to the
//! compiled keyword tables.

// Suppress false positive warnings from PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use pyo3::prelude::*;

mod errors;
mod functions;

pub use errors::*;
pub use functions::*;

/// Python module definition
#[pymodule]
fn _radclass(py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Register exception classes
    m.add(
        "RadclassError",
        py.get_type_bound::<errors::PyRadclassError>(),
    )?;
    m.add("PatternError", py.get_type_bound::<errors::PyPatternError>())?;
    m.add(
        "InvalidRequestError",
        py.get_type_bound::<errors::PyInvalidRequestError>(),
    )?;

    // Register functions
    m.add_function(wrap_pyfunction!(py_normalize_title, m)?)?;
    m.add_function(wrap_pyfunction!(py_process_cr, m)?)?;
    m.add_function(wrap_pyfunction!(py_detect_exam_type, m)?)?;
    m.add_function(wrap_pyfunction!(py_handle_cr_processing, m)?)?;
    m.add_function(wrap_pyfunction!(py_handle_get_exam_type, m)?)?;

    // Add version
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
