pub mod api;
pub mod classification;
pub mod cli;
pub mod error;
pub mod functions;
pub mod types;

#[cfg(feature = "python")]
pub mod python;

pub use api::{ExamTypeDetector, ProcessedReport, ReportProcessor};
pub use cli::report::TextReport;
pub use error::{RadclassError, Result};
pub use functions::{FunctionName, FunctionResponse};
pub use types::*;
