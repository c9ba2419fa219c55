//! Partitioning of FST analysis strings.
//!
//! An analysis is a `+`-joined run of segments such as
//! `PV/e+PV/ki+atamihêw+V+TA+Cnj+1Pl+2SgO`: zero or more prefix tags, the
//! lemma, then the suffix tags starting with the lexical category marker.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{MorphodictError, Result};
use crate::morphology::category::LexicalCategory;

/// Tag families that may appear before the lemma: preverbs (`PV/e`),
/// initial change (`IC`), person prefixes and reduplication (`Rdpl...`).
const PREFIX_TAG_FAMILIES: &[&str] = &["PV", "IC", "1", "2", "3", "Rdpl"];

/// An analysis split into the tags before the lemma, the lemma, and the tags
/// after it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedAnalysis {
    pub prefix_tags: Vec<String>,
    pub lemma: String,
    pub suffix_tags: Vec<String>,
    /// Category named by the first marker among the suffix tags
    pub category: LexicalCategory,
}

impl ParsedAnalysis {
    /// Consume into `(prefix tags, lemma, suffix tags)`.
    pub fn into_parts(self) -> (Vec<String>, String, Vec<String>) {
        (self.prefix_tags, self.lemma, self.suffix_tags)
    }
}

impl fmt::Display for ParsedAnalysis {
    /// Reassembles the analysis string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tag in &self.prefix_tags {
            write!(f, "{tag}+")?;
        }
        f.write_str(&self.lemma)?;
        for tag in &self.suffix_tags {
            write!(f, "+{tag}")?;
        }
        Ok(())
    }
}

/// Trait for strategies that partition analysis strings.
///
/// Only [`partition`](Self::partition) is required. The `extract_*`
/// accessors are defined in terms of it and degrade to `None` where
/// `partition` would fail, since they are used on display paths where a
/// missing category should not abort anything.
pub trait AnalysisParser: Send + Sync + fmt::Debug {
    /// Split `analysis` into prefix tags, lemma and suffix tags.
    ///
    /// Fails with [`MorphodictError::Parse`] when no lexical category marker
    /// is found.
    fn partition(&self, analysis: &str) -> Result<ParsedAnalysis>;

    /// Get the name of this parser (for debugging and logging).
    fn name(&self) -> &'static str;

    fn extract_lemma(&self, analysis: &str) -> Option<String> {
        self.partition(analysis).ok().map(|parsed| parsed.lemma)
    }

    fn extract_lexical_category(&self, analysis: &str) -> Option<LexicalCategory> {
        self.partition(analysis).ok().map(|parsed| parsed.category)
    }

    /// Lemma and category from a single parse.
    fn extract_lemma_and_category(&self, analysis: &str) -> Option<(String, LexicalCategory)> {
        self.partition(analysis)
            .ok()
            .map(|parsed| (parsed.lemma, parsed.category))
    }
}

/// Segment grammar parser.
///
/// The lemma is the segment right before the first lexical category marker
/// that is preceded only by prefix tags (segments starting with one of the
/// prefix tag families). The marker and everything after it are the suffix
/// tags. A lemma may itself look like a prefix tag (`3+Num+Ipc`), so the
/// leading run of prefix-like segments is only an upper bound on the number
/// of prefix tags.
#[derive(Clone, Copy, Debug, Default)]
pub struct StructuralParser;

impl StructuralParser {
    pub fn new() -> Self {
        StructuralParser
    }
}

impl AnalysisParser for StructuralParser {
    fn partition(&self, analysis: &str) -> Result<ParsedAnalysis> {
        let segments: Vec<&str> = analysis.split('+').collect();
        if segments.iter().any(|segment| segment.is_empty()) {
            return Err(MorphodictError::parse(analysis));
        }

        let max_prefix_len = segments[..segments.len() - 1]
            .iter()
            .take_while(|segment| is_prefix_tag(segment))
            .count();

        let (prefix_len, category) = (0..=max_prefix_len)
            .find_map(|prefix_len| {
                LexicalCategory::match_marker(&segments[prefix_len + 1..])
                    .map(|(category, _)| (prefix_len, category))
            })
            .ok_or_else(|| MorphodictError::parse(analysis))?;
        let suffix = &segments[prefix_len + 1..];

        Ok(ParsedAnalysis {
            prefix_tags: to_owned_tags(&segments[..prefix_len]),
            lemma: segments[prefix_len].to_string(),
            suffix_tags: to_owned_tags(suffix),
            category,
        })
    }

    fn name(&self) -> &'static str {
        "structural"
    }
}

fn is_prefix_tag(segment: &str) -> bool {
    PREFIX_TAG_FAMILIES
        .iter()
        .any(|family| segment.starts_with(family))
}

pub(crate) fn to_owned_tags(tags: &[&str]) -> Vec<String> {
    tags.iter().map(|tag| tag.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partition(analysis: &str) -> Result<ParsedAnalysis> {
        StructuralParser::new().partition(analysis)
    }

    #[test]
    fn test_single_prefix_tag() {
        let parsed = partition("PV/e+fakeword+N+I").unwrap();
        assert_eq!(parsed.prefix_tags, vec!["PV/e"]);
        assert_eq!(parsed.lemma, "fakeword");
        assert_eq!(parsed.suffix_tags, vec!["N", "I"]);
        assert_eq!(parsed.category, LexicalCategory::NounInanimate);
    }

    #[test]
    fn test_no_prefix_tags() {
        let (prefix, lemma, suffix) = partition("fakeword+N+I").unwrap().into_parts();
        assert!(prefix.is_empty());
        assert_eq!(lemma, "fakeword");
        assert_eq!(suffix, vec!["N", "I"]);
    }

    #[test]
    fn test_multiple_prefix_tags() {
        let parsed = partition("PV/e+PV/ki+atamihêw+V+TA+Cnj+1Pl+2SgO").unwrap();
        assert_eq!(parsed.prefix_tags, vec!["PV/e", "PV/ki"]);
        assert_eq!(parsed.lemma, "atamihêw");
        assert_eq!(parsed.suffix_tags, vec!["V", "TA", "Cnj", "1Pl", "2SgO"]);
        assert_eq!(parsed.category, LexicalCategory::VerbTransitiveAnimate);
    }

    #[test]
    fn test_reduplication_and_initial_change_prefixes() {
        let parsed = partition("Rdpl/S+IC+nipâw+V+AI+Cnj+3Sg").unwrap();
        assert_eq!(parsed.prefix_tags, vec!["Rdpl/S", "IC"]);
        assert_eq!(parsed.lemma, "nipâw");
        assert_eq!(parsed.category, LexicalCategory::VerbAnimateIntransitive);
    }

    #[test]
    fn test_derived_noun() {
        let parsed = partition("nêhiyawasinahikan+N+I+Der/Dim+N+I+Px1Sg+Loc").unwrap();
        assert!(parsed.prefix_tags.is_empty());
        assert_eq!(parsed.lemma, "nêhiyawasinahikan");
        assert_eq!(parsed.suffix_tags.len(), 7);
        assert_eq!(parsed.category, LexicalCategory::NounInanimate);
    }

    #[test]
    fn test_particles_and_pronouns() {
        let parsed = partition("nîso+Num+Ipc").unwrap();
        assert_eq!(parsed.lemma, "nîso");
        assert_eq!(parsed.suffix_tags, vec!["Num", "Ipc"]);
        assert_eq!(parsed.category, LexicalCategory::Particle);

        let parsed = partition("awa+Pron+Dem+Prox+I+Sg").unwrap();
        assert_eq!(parsed.category, LexicalCategory::Pronoun);
    }

    #[test]
    fn test_lemma_that_looks_like_a_prefix_tag() {
        let parsed = partition("3+Num+Ipc").unwrap();
        assert!(parsed.prefix_tags.is_empty());
        assert_eq!(parsed.lemma, "3");
        assert_eq!(parsed.suffix_tags, vec!["Num", "Ipc"]);
        assert_eq!(parsed.category, LexicalCategory::Particle);

        let parsed = partition("PV/e+1+Num+Ipc").unwrap();
        assert_eq!(parsed.prefix_tags, vec!["PV/e"]);
        assert_eq!(parsed.lemma, "1");
        assert_eq!(parsed.suffix_tags, vec!["Num", "Ipc"]);

        let parsed = partition("IC+ICEword+V+AI+Ind+3Sg").unwrap();
        assert_eq!(parsed.prefix_tags, vec!["IC"]);
        assert_eq!(parsed.lemma, "ICEword");
    }

    #[test]
    fn test_suffix_tags_start_with_the_marker() {
        assert!(partition("nipâw+Foo+V+AI").unwrap_err().is_parse());
        assert!(partition("PV/e+nipâw+Ind+V+AI").unwrap_err().is_parse());

        for analysis in [
            "PV/e+fakeword+N+I",
            "PV/e+PV/ki+atamihêw+V+TA+Cnj+1Pl+2SgO",
            "3+Num+Ipc",
            "awa+Pron+Dem+Prox+I+Sg",
        ] {
            let parsed = partition(analysis).unwrap();
            let (category, _) = LexicalCategory::match_marker(&parsed.suffix_tags).unwrap();
            assert_eq!(category, parsed.category, "{analysis}");
        }
    }

    #[test]
    fn test_unparsable_analyses() {
        for analysis in [
            "not+a+valid+analysis",
            "",
            "nipâw",
            "nipâw++V+AI",
            "PV/e+",
            "masinahikan+N+Dim+Px1Sg+Loc",
        ] {
            let err = partition(analysis).unwrap_err();
            assert!(err.is_parse(), "expected a parse error for {analysis:?}");
        }
    }

    #[test]
    fn test_extractors_degrade_to_none() {
        let parser = StructuralParser::new();
        assert_eq!(parser.extract_lemma("not+a+valid+analysis"), None);
        assert_eq!(parser.extract_lexical_category("not+a+valid+analysis"), None);
        assert_eq!(parser.extract_lemma_and_category("nipâw"), None);
    }

    #[test]
    fn test_extractors_agree_with_partition() {
        let parser = StructuralParser::new();
        let analysis = "PV/e+wîcihêw+V+TA+Cnj+1Sg+2SgO";
        let parsed = parser.partition(analysis).unwrap();
        assert_eq!(parser.extract_lemma(analysis), Some(parsed.lemma.clone()));
        assert_eq!(
            parser.extract_lexical_category(analysis),
            Some(LexicalCategory::VerbTransitiveAnimate)
        );
        assert_eq!(
            parser.extract_lemma_and_category(analysis),
            Some((parsed.lemma, parsed.category))
        );
    }

    #[test]
    fn test_display_reassembles_the_analysis() {
        let analysis = "PV/e+PV/ki+atamihêw+V+TA+Cnj+1Pl+2SgO";
        assert_eq!(partition(analysis).unwrap().to_string(), analysis);
    }
}
