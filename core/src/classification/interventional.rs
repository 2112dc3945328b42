use log::debug;

use super::lexicon::Lexicon;

/// Flags a report describing an interventional radiology procedure
///
/// Returns `true` when the body vocabulary (anesthesia, consent, asepsis,
/// procedure) appears in `cr`, or a procedure name (biopsy, drainage,
/// embolisation...) appears in `titre`. Both tests are case-insensitive and
/// anchored on word boundaries.
///
/// Callers pass the already normalized title. Empty strings are not
/// rejected here.
pub fn is_interventional(lexicon: &Lexicon, cr: &str, titre: &str) -> bool {
    if lexicon.body_keywords.is_match(cr) {
        debug!(
            "Interventional body keywords: {:?}",
            lexicon.body_keywords.matching_patterns(cr)
        );
        return true;
    }

    if lexicon.title_keywords.is_match(titre) {
        debug!(
            "Interventional title keywords: {:?}",
            lexicon.title_keywords.matching_patterns(titre)
        );
        return true;
    }

    false
}
