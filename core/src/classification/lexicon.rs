use crate::error::Result;
use crate::types::ExamType;
use log::debug;
use regex::{NoExpand, Regex, RegexBuilder, RegexSet, RegexSetBuilder};
use std::sync::OnceLock;

use super::tables::{
    BODY_INTERVENTIONAL_KEYWORDS, CATEGORY_KEYWORDS, TITLE_INTERVENTIONAL_KEYWORDS,
    TITLE_REPLACEMENTS,
};

/// Ordered case-insensitive pattern → replacement table
#[derive(Debug, Clone)]
pub struct KeywordTable {
    entries: Vec<(Regex, &'static str)>,
}

impl KeywordTable {
    /// Compiles every pattern of `raw`, keeping table order
    pub fn compile(raw: &[(&str, &'static str)]) -> std::result::Result<Self, regex::Error> {
        let entries = raw
            .iter()
            .map(|(pattern, replacement)| {
                RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .map(|re| (re, *replacement))
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self { entries })
    }

    /// Rewrites `text` with each entry in turn
    ///
    /// Every pass sees the output of the previous one. Replacements are
    /// inserted literally.
    pub fn apply(&self, text: &str) -> String {
        let mut out = text.to_string();
        for (re, replacement) in &self.entries {
            out = re.replace_all(&out, NoExpand(replacement)).into_owned();
        }
        out
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Set of case-insensitive patterns tested together; any hit counts
#[derive(Debug, Clone)]
pub struct KeywordList {
    set: RegexSet,
}

impl KeywordList {
    pub fn compile(patterns: &[&str]) -> std::result::Result<Self, regex::Error> {
        let set = RegexSetBuilder::new(patterns)
            .case_insensitive(true)
            .build()?;
        Ok(Self { set })
    }

    /// Returns `true` if at least one pattern matches anywhere in `text`
    pub fn is_match(&self, text: &str) -> bool {
        self.set.is_match(text)
    }

    /// Returns the source text of every pattern matching `text`
    pub fn matching_patterns(&self, text: &str) -> Vec<&str> {
        self.set
            .matches(text)
            .into_iter()
            .map(|i| self.set.patterns()[i].as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}

/// All compiled tables used by report processing and exam-type detection
#[derive(Debug, Clone)]
pub struct Lexicon {
    /// Title abbreviation expansions
    pub title_replacements: KeywordTable,

    /// Interventional procedure names, tested against the title
    pub title_keywords: KeywordList,

    /// Interventional vocabulary, tested against the report body
    pub body_keywords: KeywordList,

    /// Category substrings, in matching order
    pub categories: &'static [(ExamType, &'static [&'static str])],
}

impl Lexicon {
    /// Compiles the built-in tables
    pub fn compile() -> std::result::Result<Self, regex::Error> {
        let lexicon = Self {
            title_replacements: KeywordTable::compile(TITLE_REPLACEMENTS)?,
            title_keywords: KeywordList::compile(TITLE_INTERVENTIONAL_KEYWORDS)?,
            body_keywords: KeywordList::compile(BODY_INTERVENTIONAL_KEYWORDS)?,
            categories: CATEGORY_KEYWORDS,
        };
        debug!(
            "Compiled lexicon: {} replacements, {} title keywords, {} body keywords",
            lexicon.title_replacements.len(),
            lexicon.title_keywords.len(),
            lexicon.body_keywords.len()
        );
        Ok(lexicon)
    }
}

/// Returns the process-wide lexicon, compiling it on first use
///
/// # Errors
///
/// Returns [`crate::RadclassError::PatternError`] if a built-in pattern does
/// not compile. The failure is cached; later calls report the same error.
pub fn lexicon() -> Result<&'static Lexicon> {
    static LEXICON: OnceLock<std::result::Result<Lexicon, regex::Error>> = OnceLock::new();
    LEXICON
        .get_or_init(Lexicon::compile)
        .as_ref()
        .map_err(|e| e.clone().into())
}

/// Compiles the lexicon ahead of the first request
pub fn warm_up() -> Result<()> {
    lexicon().map(|_| ())
}
