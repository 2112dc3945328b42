//! Core type definitions
//!
//! - [`ExamType`]: imaging modality categories (RADIO, SCANNER, IRM, ...)

mod exam_type;

pub use exam_type::ExamType;
