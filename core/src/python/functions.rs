//! Python wrappers for the classification API and function handlers

use pyo3::prelude::*;

use super::errors::convert_error;
use crate::api::{ExamTypeDetector, ReportProcessor};
use crate::functions::FunctionName;

/// Expand abbreviated exam-title keywords
///
/// Example:
///     >>> from radclass import normalize_title
///     >>> normalize_title("coloscanner")
///     'COLOSCANNER (SCANNER DU COLON)'
#[pyfunction]
#[pyo3(name = "normalize_title")]
pub fn py_normalize_title(text: &str) -> PyResult<String> {
    ExamTypeDetector::normalize(text).map_err(convert_error)
}

/// Process a report
///
/// Returns:
///     tuple[str, str, bool]: (report body, normalized title, is interventional)
#[pyfunction]
#[pyo3(name = "process_cr")]
pub fn py_process_cr(cr: &str, titre: &str) -> PyResult<(String, String, bool)> {
    let report = ReportProcessor::process(cr, titre).map_err(convert_error)?;
    Ok((
        report.processed_cr,
        report.processed_title,
        report.is_interventional_cr,
    ))
}

/// Classify an exam title: RADIO, SCANNER, IRM, ECHOGRAPHIE, Mammographie or AUTRE
#[pyfunction]
#[pyo3(name = "detect_exam_type")]
pub fn py_detect_exam_type(text: &str) -> PyResult<String> {
    ExamTypeDetector::detect(text)
        .map(|t| t.label().to_string())
        .map_err(convert_error)
}

/// Run the report processing handler on a raw JSON body
///
/// Returns:
///     tuple[int, str]: (status code, JSON response body)
#[pyfunction]
#[pyo3(name = "handle_cr_processing")]
pub fn py_handle_cr_processing(body: &[u8]) -> (u16, String) {
    let resp = FunctionName::CrProcessing.handle(body);
    (resp.status_code, resp.body)
}

/// Run the exam-type handler on a raw JSON body
///
/// Returns:
///     tuple[int, str]: (status code, JSON response body)
#[pyfunction]
#[pyo3(name = "handle_get_exam_type")]
pub fn py_handle_get_exam_type(body: &[u8]) -> (u16, String) {
    let resp = FunctionName::GetExamType.handle(body);
    (resp.status_code, resp.body)
}
