//! Keyword tables shared by both functions
//!
//! Raw pattern text only; [`super::lexicon`] compiles them once per process.

use crate::types::ExamType;

/// Title abbreviations and their canonical expansions
///
/// Applied case-insensitively, one after another, in this order. A
/// replacement may be rewritten again by a later entry (`urocanner` is
/// expanded by both the `urocanner` and `uroscanner` rows).
pub const TITLE_REPLACEMENTS: &[(&str, &str)] = &[
    (
        r"acromioclaviculaire",
        "ACROMIOCLAVICULAIRE (RADIOGRAPHIE DE L'ARTICULATION ACROMIO-CLAVICULAIRE)",
    ),
    (r"pangonogramme", "PANGONOGRAMME (RADIOGRAPHIE DES DENTS)"),
    (r"asp", "ASP (RADIOGRAPHIE DE L'ABDOMEN SANS PRÉPARATION)"),
    (r"urocanner", "UROSCANNER (SCANNER DES REINS)"),
    (r"arm", "ARM (IRM DES VAISSEAUX SANGUINS)"),
    (r"bili irm", "BILI IRM (IRM DES VOIES BILIAIRES)"),
    (r"entero irm", "ENTERO IRM (IRM DE L'INTESTIN)"),
    (r"entéro irm", "ENTERO IRM (IRM DE L'INTESTIN)"),
    (
        r"angio irm",
        "ENGIO IRM (IRM ANGIOGRAPHIQUE DES VAISEAUX SANGUINS)",
    ),
    (r"uroscanner", "UROSCANNER (SCANNER DES VOIES URINAIRES)"),
    (r"dacryoscanner", "DACRYOSCANNER (SCANNER DES VOIES LACRYMALES)"),
    (r"coroscanner", "COROSCANNER (SCANNER DES ARTERES DU COEUR)"),
    (r"entéroscanner", "ENTEROSCANNER (SCANNER DU L'INTESTIN)"),
    (r"coloscanner", "COLOSCANNER (SCANNER DU COLON)"),
    (r"arthro-scanner", "ARTHRO-SCANNER (SCANNER DES ARTICULATIONS )"),
    (r"arthro-irm", "ARTHRO-IRM (IRM DES ARTICULATIONS )"),
    (
        r"ostéodensitométrie",
        "OSTÉODENSITOMÉTRIE (RADIOGRAPHIE DES OS )",
    ),
    (r"cystographie", "CYSTOGRAPHIE (RADIOGRAPHIE DE LA VESSIE )"),
    (
        r"discographie",
        "DISCOGRAPHIE (RADIOGRAPHIE DE DISQUE INTERVERTÉBRAL )",
    ),
    (
        r"togd",
        "TOGD (RADIOGRAPHIE DE L'\u{0152}SOPHAGE ET DE L'ESTOMAC )",
    ),
    (r"urographie", "UROGRAPHIE (RADIOGRAPHIEE DES VOIES URINAIRES )"),
    (
        r"hystérographie",
        "HYSTÉROGRAPHIE (RADIOGRAPHIE DE LA CAVITÉ UTÉRINE )",
    ),
    (
        r"hystérosalpingographie",
        "HYSTÉROSALPINGOGRAPHIE (RADIOGRAPHIE DE LA CAVITÉ UTÉRINE )",
    ),
    (r"cone beam", "CONE BEAM (RADIOGRAPHIE DES DENTS)"),
    (r"tomographie", "TOMOGRAPHIE (RADIOGRAPHIE DES DENTS)"),
    (r"doppler", "DOPPLER (ECHOGRAPHIE DES VAISSEAUX)"),
];

/// Procedure names that mark an interventional exam title
pub const TITLE_INTERVENTIONAL_KEYWORDS: &[&str] = &[
    r"\bm[íi]cro[- ]?biopsie(s)?\b",
    r"\bbiopsie(s)?\b",
    r"\bdrainage(s)?\b",
    r"\bpose(s)?[- ]?de[- ]?cath[éeèe]ter(s)?\b",
    r"\bembolisation(s)?\b",
    r"\bangioplastie(s)?\b",
    r"\bradio[- ]?fr[éeèe]quence(s)?\b",
    r"\bablation(s)?\b",
    r"\bmicro[- ]?ondes\b",
    r"\bcimentoplastie(s)?\b",
    r"\bfiltre(s)?[- ]?cave(s)?\b",
    r"\bthrombectomie(s)?\b",
    r"\bthrombolyse(s)?\b",
    r"\bponction(s)?\b",
    r"\bcyto[- ]?ponction(s)?\b",
    r"\bTIPS\b",
    r"\bgastrostomie(s)?\b",
    r"\bnéphrostomie(s)?\b",
    r"\bcholangiographie(s)?\b",
    r"\bangiographie(s)?\b",
    r"\bfistulographie(s)?\b",
    r"\bdilatation(s)?\b",
    r"\binjection(s)?\b",
    r"\bfermeture(s)?\b",
    r"\btraitement(s)?\b",
    r"\bpose(s)?[- ]?de\b",
    r"\bscl[éeèe]ro[- ]?th[éeèe]rapie(s)?\b",
    r"\bmise(s)?[- ]?en[- ]?place[- ]?de\b",
    r"\breconstruction(s)?\b",
    r"\bcryo[- ]?ablation(s)?\b",
];

/// Procedure vocabulary that marks an interventional report body
pub const BODY_INTERVENTIONAL_KEYWORDS: &[&str] = &[
    r"\banesth[éeèe]sie(s)?\b",
    r"\bproc[éeèe]dure(s)?\b",
    r"\basepsie(s)?\b",
    r"\bconsentement(s)?\b",
];

/// Lowercase substrings identifying each exam category, in matching order
pub const CATEGORY_KEYWORDS: &[(ExamType, &[&str])] = &[
    (
        ExamType::Radio,
        &["radio", "radiographie", "x-ray", "rayon x"],
    ),
    (
        ExamType::Scanner,
        &["scanner", "tdm", "tomodensitométri", "scan"],
    ),
    (
        ExamType::Irm,
        &["irm", "imagerie par résonance magnétique"],
    ),
    (
        ExamType::Echographie,
        &[
            "echo",
            "écho",
            "échographie",
            "echographie",
            "ultrason",
            "ultrasound",
            "échotomographie",
            "ultrasonore",
        ],
    ),
    (
        ExamType::Mammographie,
        &[
            "mammographie",
            "mammogramme",
            "mammo",
            "mamographie",
            "examen du sein",
            "imagerie mammaire",
        ],
    ),
];
