use crate::types::ExamType;

use super::lexicon::Lexicon;
use super::normalize::normalize_title;

/// Classifies a free-text exam title into an imaging modality
///
/// # Algorithm
///
/// 1. Lowercase the title
/// 2. Expand abbreviations with the title replacement table
/// 3. Lowercase again (expansions are uppercase)
/// 4. Return the first category, in declared order, with a keyword that is
///    a substring of the result
/// 5. Default → AUTRE
pub fn classify_exam_type(lexicon: &Lexicon, title: &str) -> ExamType {
    let normalized = normalize_title(lexicon, &title.to_lowercase()).to_lowercase();

    lexicon
        .categories
        .iter()
        .find(|(_, words)| words.iter().any(|word| normalized.contains(word)))
        .map(|(category, _)| *category)
        .unwrap_or(ExamType::Autre)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classification::lexicon;
    use rstest::rstest;

    #[rstest]
    #[case("IRM du genou", ExamType::Irm)]
    #[case("mammographie bilatérale", ExamType::Mammographie)]
    #[case("consultation de suivi", ExamType::Autre)]
    #[case("Radiographie du thorax", ExamType::Radio)]
    #[case("TDM thoraco-abdominale", ExamType::Scanner)]
    #[case("Tomodensitométrie cérébrale", ExamType::Scanner)]
    #[case("Échographie pelvienne", ExamType::Echographie)]
    #[case("ultrasound abdomen", ExamType::Echographie)]
    #[case("Imagerie par résonance magnétique", ExamType::Irm)]
    #[case("examen du sein droit", ExamType::Mammographie)]
    fn test_direct_keywords(#[case] title: &str, #[case] expected: ExamType) {
        assert_eq!(classify_exam_type(lexicon().unwrap(), title), expected);
    }

    #[rstest]
    #[case("Doppler des TSA", ExamType::Echographie)]
    #[case("ASP", ExamType::Radio)]
    #[case("ARM des membres inférieurs", ExamType::Irm)]
    #[case("Cystographie rétrograde", ExamType::Radio)]
    #[case("ostéodensitométrie", ExamType::Radio)]
    fn test_keywords_from_expansion(#[case] title: &str, #[case] expected: ExamType) {
        assert_eq!(classify_exam_type(lexicon().unwrap(), title), expected);
    }

    #[test]
    fn test_first_category_wins() {
        let lex = lexicon().unwrap();
        assert_eq!(classify_exam_type(lex, "radio et scanner du genou"), ExamType::Radio);
        assert_eq!(classify_exam_type(lex, "IRM et échographie"), ExamType::Irm);
        assert_eq!(classify_exam_type(lex, "écho mammaire et mammographie"), ExamType::Echographie);
    }

    #[test]
    fn test_expansion_can_shadow_later_category() {
        // "tomographie" expands to a RADIOGRAPHIE description, ahead of ECHOGRAPHIE
        assert_eq!(
            classify_exam_type(lexicon().unwrap(), "échotomographie"),
            ExamType::Radio
        );
    }

    #[test]
    fn test_whitespace_title() {
        assert_eq!(classify_exam_type(lexicon().unwrap(), "   "), ExamType::Autre);
    }
}
