//! Regex anchor parser.
//!
//! Older lexicon tooling located the lexical category marker with a regular
//! expression and walked backwards from it to find the lemma. It agrees with
//! [`StructuralParser`](super::parser::StructuralParser) on well-formed
//! analyses, but it searches raw text rather than whole segments, so tags
//! that merely begin like a marker (`+V+TAx`) are accepted here. Prefer the
//! structural parser for new code.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{MorphodictError, Result};
use crate::morphology::category::LexicalCategory;
use crate::morphology::parser::{AnalysisParser, ParsedAnalysis, to_owned_tags};

/// Lexical category marker. The diminutive `+D` must be followed by another
/// tag, so it is matched together with that tag's leading `+`.
static CATEGORY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?P<category>\+N\+A(?:\+D\+)?|\+N\+I(?:\+D\+)?|\+V\+AI|\+V\+T[AI]|\+V\+II|(?:\+Num)?\+Ipc|\+Pron)",
    )
    .expect("category pattern is a valid regex")
});

#[derive(Clone, Copy, Debug, Default)]
pub struct AnchorParser;

impl AnchorParser {
    pub fn new() -> Self {
        AnchorParser
    }

    /// Byte offset where the category marker starts, and its category code.
    fn locate(analysis: &str) -> Option<(usize, LexicalCategory)> {
        let found = CATEGORY_PATTERN.captures(analysis)?.name("category")?;

        let code: String = found
            .as_str()
            .trim_end_matches('+')
            .trim_start_matches("+Num")
            .chars()
            .filter(|c| *c != '+')
            .collect();

        code.parse().ok().map(|category| (found.start(), category))
    }
}

impl AnalysisParser for AnchorParser {
    fn partition(&self, analysis: &str) -> Result<ParsedAnalysis> {
        let (end, category) =
            Self::locate(analysis).ok_or_else(|| MorphodictError::parse(analysis))?;

        let lemma_start = analysis[..end].rfind('+').map_or(0, |plus| plus + 1);
        let lemma = &analysis[lemma_start..end];
        if lemma.is_empty() {
            return Err(MorphodictError::parse(analysis));
        }

        let prefix_tags = if lemma_start > 1 {
            to_owned_tags(&analysis[..lemma_start - 1].split('+').collect::<Vec<_>>())
        } else {
            Vec::new()
        };
        let suffix_tags = to_owned_tags(&analysis[end + 1..].split('+').collect::<Vec<_>>());

        Ok(ParsedAnalysis {
            prefix_tags,
            lemma: lemma.to_string(),
            suffix_tags,
            category,
        })
    }

    fn name(&self) -> &'static str {
        "anchor"
    }
}
