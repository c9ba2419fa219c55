//! # morphodict
//!
//! Lookup core for a Plains Cree (nêhiyawêwin) dictionary.
//!
//! ## Features
//!
//! - Diacritic- and case-insensitive normalization of wordforms
//! - Prefix and suffix search over the lexicon, backed by `fst` tries
//! - Partitioning of morphological analyses into prefix tags, lemma and
//!   suffix tags, with lexical category detection
//! - Relabelling of tag sequences into linguistic, English or nêhiyawêwin
//!   labels, by longest matching prefix
//!
//! ```
//! use morphodict::morphology::{LexicalCategory, extract_lemma_and_category};
//! use morphodict::normalize::normalize;
//!
//! assert_eq!(normalize("Nipâw").as_str(), "nipaw");
//! assert_eq!(
//!     extract_lemma_and_category("nipâw+V+AI+Ind+3Sg"),
//!     Some(("nipâw".to_string(), LexicalCategory::VerbAnimateIntransitive))
//! );
//! ```

pub mod affix;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod morphology;
pub mod normalize;
pub mod relabel;

pub mod prelude {
    pub use crate::affix::{AffixSearcher, SharedAffixSearcher, WordformId};
    pub use crate::config::EngineConfig;
    pub use crate::engine::{AnalysisDescription, DictionaryEngine};
    pub use crate::error::{MorphodictError, Result};
    pub use crate::morphology::{AnalysisParser, LexicalCategory, ParsedAnalysis};
    pub use crate::normalize::{Normalizer, SimplifiedForm, normalize};
    pub use crate::relabel::{LabelFriendliness, LabelSetting, Relabelling};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
