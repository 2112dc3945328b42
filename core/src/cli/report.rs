use crate::api::ProcessedReport;
use std::fmt;

/// Longest body excerpt shown in a text report, in characters
const CR_EXCERPT_CHARS: usize = 80;

/// Text report formatter for processed reports
pub struct TextReport<'a> {
    report: &'a ProcessedReport,
}

impl<'a> TextReport<'a> {
    /// Creates a new text report
    pub fn new(report: &'a ProcessedReport) -> Self {
        Self { report }
    }

    fn cr_excerpt(&self) -> String {
        let cr = &self.report.processed_cr;
        if cr.chars().count() > CR_EXCERPT_CHARS {
            let cut: String = cr.chars().take(CR_EXCERPT_CHARS).collect();
            format!("{}...", cut)
        } else {
            cr.clone()
        }
    }
}

impl<'a> fmt::Display for TextReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Report Classification")?;
        writeln!(f, "=====================")?;
        writeln!(f)?;
        writeln!(f, "Title:          {}", self.report.processed_title)?;
        writeln!(f, "Report:         {}", self.cr_excerpt())?;
        writeln!(
            f,
            "Interventional: {}",
            if self.report.is_interventional_cr {
                "yes"
            } else {
                "no"
            }
        )?;

        Ok(())
    }
}
