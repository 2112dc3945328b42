use serde::Serialize;
use std::fmt;

/// Imaging modality category of an exam title
///
/// Declaration order is the category matching order: when a title hits
/// keywords of several categories, the first one declared wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ExamType {
    #[serde(rename = "RADIO")]
    Radio,
    #[serde(rename = "SCANNER")]
    Scanner,
    #[serde(rename = "IRM")]
    Irm,
    #[serde(rename = "ECHOGRAPHIE")]
    Echographie,
    #[serde(rename = "Mammographie")]
    Mammographie,
    #[serde(rename = "AUTRE")]
    Autre,
}

impl ExamType {
    /// Every category that can be matched by keyword, in matching order
    pub const MATCHABLE: [ExamType; 5] = [
        ExamType::Radio,
        ExamType::Scanner,
        ExamType::Irm,
        ExamType::Echographie,
        ExamType::Mammographie,
    ];

    /// Returns the label used on the wire
    pub fn label(&self) -> &'static str {
        match self {
            ExamType::Radio => "RADIO",
            ExamType::Scanner => "SCANNER",
            ExamType::Irm => "IRM",
            ExamType::Echographie => "ECHOGRAPHIE",
            ExamType::Mammographie => "Mammographie",
            ExamType::Autre => "AUTRE",
        }
    }
}

impl fmt::Display for ExamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(ExamType::Radio.label(), "RADIO");
        assert_eq!(ExamType::Mammographie.to_string(), "Mammographie");
        assert_eq!(ExamType::Autre.to_string(), "AUTRE");
    }

    #[test]
    fn test_serialize_uses_label() {
        let json = serde_json::to_string(&ExamType::Echographie).unwrap();
        assert_eq!(json, "\"ECHOGRAPHIE\"");
    }
}
