//! Keyword-driven classification of radiology report text
//!
//! - [`normalize_title`]: expands exam-title abbreviations
//! - [`is_interventional`]: flags interventional radiology reports
//! - [`classify_exam_type`]: maps an exam title to a modality
//!
//! All three read the compiled tables of a [`Lexicon`]; [`lexicon()`] returns
//! the shared process-wide instance.

pub mod exam_type;
pub mod interventional;
pub mod lexicon;
pub mod normalize;
pub mod tables;

pub use exam_type::classify_exam_type;
pub use interventional::is_interventional;
pub use lexicon::{lexicon, warm_up, KeywordList, KeywordTable, Lexicon};
pub use normalize::normalize_title;
