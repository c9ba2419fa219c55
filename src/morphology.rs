//! Parsing of FST morphological analyses.
//!
//! This module turns analyzer output such as
//! `PV/e+PV/ki+atamihêw+V+TA+Cnj+1Pl+2SgO` into its prefix tags, lemma and
//! suffix tags, and derives a simplified [`LexicalCategory`] from the suffix
//! tags.
//!
//! The free functions below use the [`StructuralParser`].
//!
//! # Examples
//!
//! ```
//! use morphodict::morphology::{partition_analysis, extract_lemma_and_category, LexicalCategory};
//!
//! let parsed = partition_analysis("PV/e+fakeword+N+I").unwrap();
//! assert_eq!(parsed.prefix_tags, vec!["PV/e"]);
//! assert_eq!(parsed.lemma, "fakeword");
//! assert_eq!(parsed.suffix_tags, vec!["N", "I"]);
//!
//! assert_eq!(
//!     extract_lemma_and_category("nipâw+V+AI+Ind+Prs+3Sg"),
//!     Some(("nipâw".to_string(), LexicalCategory::VerbAnimateIntransitive))
//! );
//! assert!(partition_analysis("not+a+valid+analysis").is_err());
//! ```

pub mod anchor;
pub mod category;
pub mod parser;
pub mod pos;

pub use anchor::AnchorParser;
pub use category::LexicalCategory;
pub use parser::{AnalysisParser, ParsedAnalysis, StructuralParser};

use crate::error::Result;

/// Split an analysis into prefix tags, lemma and suffix tags.
pub fn partition_analysis(analysis: &str) -> Result<ParsedAnalysis> {
    StructuralParser.partition(analysis)
}

/// The lemma of an analysis, or `None` when it has no category marker.
pub fn extract_lemma(analysis: &str) -> Option<String> {
    StructuralParser.extract_lemma(analysis)
}

/// The lexical category of an analysis, or `None` when it has no marker.
pub fn extract_lexical_category(analysis: &str) -> Option<LexicalCategory> {
    StructuralParser.extract_lexical_category(analysis)
}

pub fn extract_lemma_and_category(analysis: &str) -> Option<(String, LexicalCategory)> {
    StructuralParser.extract_lemma_and_category(analysis)
}

/// Presentational part of speech using the [`StructuralParser`].
pub fn presentational_pos(
    pos: &str,
    inflectional_category: &str,
    analysis: &str,
) -> Option<&'static str> {
    pos::presentational_pos(&StructuralParser, pos, inflectional_category, analysis)
}
