use super::lexicon::Lexicon;

/// Expands abbreviated exam-title keywords into their canonical descriptions
///
/// Each entry of the replacement table is applied case-insensitively to the
/// output of the previous one, so an expansion can be expanded again by a
/// later entry. Matching is plain substring matching: `asp` also fires
/// inside longer words.
///
/// # Example
///
/// ```
/// use radclass_core::classification::{lexicon, normalize_title};
///
/// let lex = lexicon().unwrap();
/// assert_eq!(
///     normalize_title(lex, "Doppler MI"),
///     "DOPPLER (ECHOGRAPHIE DES VAISSEAUX) MI"
/// );
/// ```
pub fn normalize_title(lexicon: &Lexicon, text: &str) -> String {
    lexicon.title_replacements.apply(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classification::lexicon;
    use rstest::rstest;

    #[rstest]
    #[case("cone beam", "CONE BEAM (RADIOGRAPHIE DES DENTS)")]
    #[case("Pangonogramme", "PANGONOGRAMME (RADIOGRAPHIE DES DENTS)")]
    #[case("TOGD", "TOGD (RADIOGRAPHIE DE L'\u{0152}SOPHAGE ET DE L'ESTOMAC )")]
    #[case("bili IRM", "BILI IRM (IRM DES VOIES BILIAIRES)")]
    #[case("entéro irm", "ENTERO IRM (IRM DE L'INTESTIN)")]
    #[case("angio irm", "ENGIO IRM (IRM ANGIOGRAPHIQUE DES VAISEAUX SANGUINS)")]
    fn test_expands_keyword(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize_title(lexicon().unwrap(), input), expected);
    }

    #[test]
    fn test_keeps_surrounding_text() {
        let out = normalize_title(lexicon().unwrap(), "Doppler veineux des membres");
        assert_eq!(out, "DOPPLER (ECHOGRAPHIE DES VAISSEAUX) veineux des membres");
    }

    #[test]
    fn test_matches_inside_words() {
        // "asp" has no boundary anchors
        let out = normalize_title(lexicon().unwrap(), "rasp");
        assert_eq!(out, "rASP (RADIOGRAPHIE DE L'ABDOMEN SANS PRÉPARATION)");
    }

    #[test]
    fn test_later_entry_rewrites_earlier_expansion() {
        let out = normalize_title(lexicon().unwrap(), "urocanner");
        assert_eq!(
            out,
            "UROSCANNER (SCANNER DES VOIES URINAIRES) (SCANNER DES REINS)"
        );
    }

    #[test]
    fn test_idempotent_without_keywords() {
        let lex = lexicon().unwrap();
        let once = normalize_title(lex, "radiographie du thorax");
        assert_eq!(once, "radiographie du thorax");
        assert_eq!(normalize_title(lex, &once), once);
    }

    #[test]
    fn test_self_matching_expansion_grows() {
        let lex = lexicon().unwrap();
        let once = normalize_title(lex, "cone beam");
        let twice = normalize_title(lex, &once);
        assert_ne!(once, twice);
        assert!(twice.starts_with(&once[..9]));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize_title(lexicon().unwrap(), ""), "");
    }
}
