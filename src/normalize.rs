//! Wordform normalization for affix search keys.
//!
//! A [`SimplifiedForm`] is what the affix index stores and what queries are
//! compared against: the raw wordform lower-cased with locale-independent
//! Unicode case mapping, decomposed (NFD), and stripped of every combining
//! mark. For Plains Cree SRO this folds `â ê î ô` and `ā ē ī ō` onto their
//! base vowels.
//!
//! # Examples
//!
//! ```
//! use morphodict::normalize::normalize;
//!
//! assert_eq!(normalize("Nêhiyawêwin").as_str(), "nehiyawewin");
//! assert_eq!(normalize("wāpamēw").as_str(), "wapamew");
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// A case-folded, diacritic-free wordform used only as an index key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SimplifiedForm(String);

impl SimplifiedForm {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// The form with its characters in reverse order, as stored in the
    /// suffix trie.
    pub fn reversed(&self) -> String {
        self.0.chars().rev().collect()
    }
}

impl Deref for SimplifiedForm {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for SimplifiedForm {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SimplifiedForm {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SimplifiedForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Converts raw wordforms into simplified index keys.
///
/// Implementations must be total and idempotent:
/// `n.normalize(n.normalize(x).as_str()) == n.normalize(x)`.
pub trait Normalizer: Send + Sync + fmt::Debug {
    /// Simplify `text` into an index key.
    fn normalize(&self, text: &str) -> SimplifiedForm;

    /// Get the name of this normalizer (for debugging and logging).
    fn name(&self) -> &'static str;
}

/// Lower-cases and strips combining diacritics.
///
/// This is the normalizer used for Plains Cree wordforms written in
/// Standard Roman Orthography.
#[derive(Clone, Copy, Debug, Default)]
pub struct CreeNormalizer;

impl CreeNormalizer {
    pub fn new() -> Self {
        CreeNormalizer
    }
}

impl Normalizer for CreeNormalizer {
    fn normalize(&self, text: &str) -> SimplifiedForm {
        // Lower-casing first: some lowercase mappings introduce combining
        // marks (U+0130 -> "i\u{307}"), which the decomposition pass removes.
        let lowered = text.to_lowercase();
        SimplifiedForm(lowered.nfd().filter(|c| !is_combining_mark(*c)).collect())
    }

    fn name(&self) -> &'static str {
        "cree"
    }
}

/// Normalize `text` with the default [`CreeNormalizer`].
pub fn normalize(text: &str) -> SimplifiedForm {
    CreeNormalizer.normalize(text)
}
