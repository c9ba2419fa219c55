//! FST-backed affix searcher.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use ahash::AHashMap;
use fst::automaton::{Automaton, Str};
use fst::{IntoStreamer, Set, Streamer};
use log::debug;

use crate::affix::WordformId;
use crate::error::{MorphodictError, Result};
use crate::normalize::{CreeNormalizer, Normalizer, SimplifiedForm};

/// Enables prefix and suffix searches given a list of wordforms and their ids.
///
/// Several raw wordforms may share one simplified form (for example forms
/// that differ only by diacritics); their ids are kept in insertion order.
///
/// # Examples
///
/// ```
/// use morphodict::affix::{AffixSearcher, WordformId};
///
/// let searcher = AffixSearcher::new(vec![
///     ("nipâw", WordformId(1)),
///     ("nipâwin", WordformId(2)),
///     ("kinipâw", WordformId(3)),
/// ])
/// .unwrap();
///
/// assert_eq!(searcher.search_by_prefix("NIPA"), vec![WordformId(1), WordformId(2)]);
/// assert_eq!(searcher.search_by_suffix("pâw"), vec![WordformId(1), WordformId(3)]);
/// ```
pub struct AffixSearcher {
    /// Simplified forms, in lexicographic order
    prefixes: Set<Vec<u8>>,
    /// Character-reversed simplified forms
    suffixes: Set<Vec<u8>>,
    /// Simplified form -> ids in insertion order
    text_to_ids: AHashMap<SimplifiedForm, Vec<WordformId>>,
    normalizer: Arc<dyn Normalizer>,
    wordform_count: usize,
}

impl fmt::Debug for AffixSearcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AffixSearcher")
            .field("forms", &self.text_to_ids.len())
            .field("wordforms", &self.wordform_count)
            .field("normalizer", &self.normalizer.name())
            .finish()
    }
}

impl AffixSearcher {
    /// Build a searcher using the default [`CreeNormalizer`].
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, WordformId)>,
        S: AsRef<str>,
    {
        Self::with_normalizer(words, Arc::new(CreeNormalizer::new()))
    }

    /// Build a searcher with a custom normalizer.
    ///
    /// Entries whose simplified form is empty are skipped.
    pub fn with_normalizer<I, S>(words: I, normalizer: Arc<dyn Normalizer>) -> Result<Self>
    where
        I: IntoIterator<Item = (S, WordformId)>,
        S: AsRef<str>,
    {
        let mut text_to_ids: AHashMap<SimplifiedForm, Vec<WordformId>> = AHashMap::new();
        let mut wordform_count = 0;
        let mut skipped = 0;

        for (raw_text, id) in words {
            let simplified = normalizer.normalize(raw_text.as_ref());
            if simplified.is_empty() {
                skipped += 1;
                continue;
            }
            text_to_ids.entry(simplified).or_default().push(id);
            wordform_count += 1;
        }

        let forward: BTreeSet<&str> = text_to_ids.keys().map(SimplifiedForm::as_str).collect();
        let reversed: BTreeSet<String> = text_to_ids.keys().map(SimplifiedForm::reversed).collect();

        let (prefixes, suffixes) = rayon::join(|| build_set(forward), || build_set(reversed));

        debug!(
            "built affix index: {} wordforms, {} distinct forms, {} skipped",
            wordform_count,
            text_to_ids.len(),
            skipped
        );

        Ok(AffixSearcher {
            prefixes: prefixes?,
            suffixes: suffixes?,
            text_to_ids,
            normalizer,
            wordform_count,
        })
    }

    /// Ids of every wordform whose simplified form starts with `prefix`.
    ///
    /// Results are ordered by simplified form, then by insertion order. An
    /// empty vector is returned when nothing matches or the query normalizes
    /// to the empty string.
    pub fn search_by_prefix(&self, prefix: &str) -> Vec<WordformId> {
        let prefix = self.normalizer.normalize(prefix);
        if prefix.is_empty() {
            return Vec::new();
        }

        let mut ids = Vec::new();
        for key in keys_with_prefix(&self.prefixes, prefix.as_str()) {
            if let Some(found) = self.text_to_ids.get(key.as_str()) {
                ids.extend_from_slice(found);
            }
        }
        ids
    }

    /// Ids of every wordform whose simplified form ends with `suffix`.
    ///
    /// Results are ordered by reversed simplified form, then by insertion
    /// order.
    pub fn search_by_suffix(&self, suffix: &str) -> Vec<WordformId> {
        let suffix = self.normalizer.normalize(suffix);
        if suffix.is_empty() {
            return Vec::new();
        }

        let mut ids = Vec::new();
        for reversed_key in keys_with_prefix(&self.suffixes, &suffix.reversed()) {
            let key: String = reversed_key.chars().rev().collect();
            if let Some(found) = self.text_to_ids.get(key.as_str()) {
                ids.extend_from_slice(found);
            }
        }
        ids
    }

    /// Ids stored under exactly this (raw) form, after normalization.
    pub fn exact(&self, text: &str) -> &[WordformId] {
        let simplified = self.normalizer.normalize(text);
        self.text_to_ids
            .get(simplified.as_str())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of distinct simplified forms.
    pub fn len(&self) -> usize {
        self.text_to_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text_to_ids.is_empty()
    }

    /// Number of indexed wordforms, counting collisions separately.
    pub fn wordform_count(&self) -> usize {
        self.wordform_count
    }

    pub fn normalizer(&self) -> &dyn Normalizer {
        self.normalizer.as_ref()
    }

    /// Shared handle to the normalizer, for building a replacement index.
    pub fn normalizer_arc(&self) -> Arc<dyn Normalizer> {
        Arc::clone(&self.normalizer)
    }
}

fn build_set<I, K>(sorted_keys: I) -> Result<Set<Vec<u8>>>
where
    I: IntoIterator<Item = K>,
    K: AsRef<[u8]>,
{
    Set::from_iter(sorted_keys)
        .map_err(|e| MorphodictError::other(format!("FST build error: {}", e)))
}

fn keys_with_prefix(set: &Set<Vec<u8>>, prefix: &str) -> Vec<String> {
    let matcher = Str::new(prefix).starts_with();
    let mut stream = set.search(matcher).into_stream();
    let mut keys = Vec::new();
    while let Some(key) = stream.next() {
        keys.push(String::from_utf8_lossy(key).into_owned());
    }
    keys
}
