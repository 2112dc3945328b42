use crate::classification::{
    classify_exam_type, is_interventional, lexicon, normalize_title, Lexicon,
};
use crate::error::Result;
use crate::types::ExamType;
use serde::Serialize;

/// Report processor for interventional radiology detection
///
/// Expands the exam title and decides whether the report describes an
/// interventional procedure.
///
/// # Example
///
/// ```
/// use radclass_core::ReportProcessor;
///
/// let report = ReportProcessor::process(
///     "Anesthésie locale. Prélèvement de trois carottes.",
///     "Biopsie hépatique",
/// )
/// .unwrap();
///
/// assert_eq!(report.processed_cr, "Anesthésie locale. Prélèvement de trois carottes.");
/// assert_eq!(report.processed_title, "Biopsie hépatique");
/// assert!(report.is_interventional_cr);
/// ```
pub struct ReportProcessor;

impl ReportProcessor {
    /// Processes a report with the shared lexicon
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in keyword patterns cannot be compiled.
    pub fn process(cr: &str, titre: &str) -> Result<ProcessedReport> {
        Ok(Self::process_with(lexicon()?, cr, titre))
    }

    /// Processes a report against the given lexicon
    ///
    /// The body is returned unchanged; detection runs on the normalized title.
    pub fn process_with(lexicon: &Lexicon, cr: &str, titre: &str) -> ProcessedReport {
        let processed_title = normalize_title(lexicon, titre);
        let is_interventional_cr = is_interventional(lexicon, cr, &processed_title);

        ProcessedReport {
            processed_cr: cr.to_string(),
            processed_title,
            is_interventional_cr,
        }
    }
}

/// Result of report processing
///
/// Field names match the JSON response of the report processing function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessedReport {
    /// Report body, unchanged
    pub processed_cr: String,

    /// Exam title with abbreviations expanded
    pub processed_title: String,

    /// Whether the report describes an interventional procedure
    pub is_interventional_cr: bool,
}

/// Exam type detection from free-text titles
pub struct ExamTypeDetector;

impl ExamTypeDetector {
    /// Detects the modality of an exam title with the shared lexicon
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in keyword patterns cannot be compiled.
    pub fn detect(title: &str) -> Result<ExamType> {
        Ok(classify_exam_type(lexicon()?, title))
    }

    /// Expands title abbreviations with the shared lexicon
    pub fn normalize(title: &str) -> Result<String> {
        Ok(normalize_title(lexicon()?, title))
    }
}
