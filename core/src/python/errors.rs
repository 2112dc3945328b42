//! Python exception types for radclass

// Suppress warnings from PyO3's create_exception! macro about gil-refs feature
#![allow(unexpected_cfgs)]

use pyo3::{create_exception, exceptions::PyException, prelude::*};

// Base exception
create_exception!(
    radclass,
    PyRadclassError,
    PyException,
    "Base exception for all radclass errors"
);

create_exception!(
    radclass,
    PyPatternError,
    PyRadclassError,
    "Keyword pattern could not be compiled"
);

create_exception!(
    radclass,
    PyInvalidRequestError,
    PyRadclassError,
    "Request body unreadable or missing a required field"
);

/// Convert Rust RadclassError to appropriate Python exception
pub fn convert_error(err: crate::error::RadclassError) -> PyErr {
    use crate::error::RadclassError;

    match err {
        RadclassError::PatternError(msg) => PyPatternError::new_err(msg),
        RadclassError::InvalidBody(msg) => PyInvalidRequestError::new_err(msg),
        RadclassError::MissingField(name) => {
            PyInvalidRequestError::new_err(format!("Missing field: {}", name))
        }
        other => PyRadclassError::new_err(other.to_string()),
    }
}
