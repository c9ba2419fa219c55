//! Prefix and suffix search over normalized wordforms.
//!
//! The index is built once from `(text, id)` pairs supplied by the lexicon
//! store and is read-only afterwards. Prefix queries walk a forward trie over
//! simplified forms; suffix queries are prefix queries on a second trie built
//! from the character-reversed forms.

pub mod searcher;
pub mod shared;
pub mod wordforms;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use searcher::AffixSearcher;
pub use shared::SharedAffixSearcher;
pub use wordforms::{load_wordforms, read_wordforms};

/// Identifier of a wordform, assigned by the lexicon store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordformId(pub u64);

impl From<u64> for WordformId {
    fn from(id: u64) -> Self {
        WordformId(id)
    }
}

impl fmt::Display for WordformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
