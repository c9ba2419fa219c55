//! The relabelling table and its lookups.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use ahash::AHashMap;
use csv::{ReaderBuilder, StringRecord};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{MorphodictError, Result};
use crate::relabel::TAG_SEPARATOR;
use crate::relabel::friendliness::LabelFriendliness;

/// The label variants for one compound tag key.
///
/// A variant the table leaves blank (or omits on a short row) is `None`,
/// never an empty string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Labels {
    pub linguistic_short: Option<String>,
    pub linguistic_long: Option<String>,
    pub english: Option<String>,
    pub nehiyawewin: Option<String>,
}

impl Labels {
    pub fn get(&self, friendliness: LabelFriendliness) -> Option<&str> {
        match friendliness {
            LabelFriendliness::LinguisticShort => self.linguistic_short.as_deref(),
            LabelFriendliness::LinguisticLong => self.linguistic_long.as_deref(),
            LabelFriendliness::English => self.english.as_deref(),
            LabelFriendliness::Nehiyawewin => self.nehiyawewin.as_deref(),
        }
    }

    /// Whether every variant is absent.
    pub fn is_empty(&self) -> bool {
        LabelFriendliness::ALL.iter().all(|f| self.get(*f).is_none())
    }

    fn from_record(record: &StringRecord) -> Self {
        let column = |friendliness: LabelFriendliness| {
            record
                .get(friendliness.column())
                .filter(|label| !label.is_empty())
                .map(str::to_string)
        };

        Labels {
            linguistic_short: column(LabelFriendliness::LinguisticShort),
            linguistic_long: column(LabelFriendliness::LinguisticLong),
            english: column(LabelFriendliness::English),
            nehiyawewin: column(LabelFriendliness::Nehiyawewin),
        }
    }
}

/// Immutable mapping from compound tag keys to [`Labels`].
///
/// Built once at startup and shared by reference; there are no mutating
/// methods.
#[derive(Clone, Debug, Default)]
pub struct Relabelling {
    data: AHashMap<String, Labels>,
}

impl Relabelling {
    /// Build a table from already-parsed entries. Later duplicates win.
    pub fn from_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Labels)>,
        K: Into<String>,
    {
        let mut data = AHashMap::new();
        for (key, labels) in entries {
            data.insert(key.into(), labels);
        }
        Relabelling { data }
    }

    /// Parse a tab-separated relabelling table.
    ///
    /// Columns are: tag key, linguistic (short), linguistic (long), English,
    /// nêhiyawêwin, emoji (ignored). The first non-blank row is a header.
    /// Blank rows are skipped; short rows leave the missing variants absent.
    /// When a key repeats, the last row wins, and a last row with no label
    /// at all removes the key.
    pub fn from_tsv<R: Read>(reader: R) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_reader(reader);

        let mut data = AHashMap::new();
        let mut unlabelled = 0;
        let mut seen_header = false;

        for record in reader.records() {
            let record = record?;
            if record.iter().all(str::is_empty) {
                continue;
            }
            if !seen_header {
                seen_header = true;
                continue;
            }

            let key = record.get(0).unwrap_or_default();
            let labels = Labels::from_record(&record);
            if key.is_empty() || labels.is_empty() {
                unlabelled += 1;
                if !key.is_empty() && data.remove(key).is_some() {
                    debug!("relabelling row without labels removed earlier key {key:?}");
                }
                continue;
            }

            data.insert(key.to_string(), labels);
        }

        debug!(
            "loaded relabelling table: {} keys, {} rows without labels skipped",
            data.len(),
            unlabelled
        );

        Ok(Relabelling { data })
    }

    pub fn from_tsv_str(tsv: &str) -> Result<Self> {
        Self::from_tsv(tsv.as_bytes())
    }

    /// Load a relabelling table from a TSV file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            MorphodictError::relabelling(format!(
                "Failed to open relabelling table '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_tsv(BufReader::new(file))
    }

    /// Labels stored under exactly this compound key.
    pub fn get(&self, key: &str) -> Option<&Labels> {
        self.data.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Whether the full tag sequence, joined with `+`, is a known key.
    pub fn contains<S: AsRef<str>>(&self, tags: &[S]) -> bool {
        !tags.is_empty() && self.data.contains_key(&join_tags(tags))
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The most specific label for a prefix of `tags`.
    ///
    /// Tries the key formed by all tags, then drops tags from the end one at
    /// a time down to a single tag. A key whose requested variant is absent
    /// counts as a miss.
    pub fn get_longest<S: AsRef<str>>(
        &self,
        tags: &[S],
        friendliness: LabelFriendliness,
    ) -> Option<&str> {
        (1..=tags.len()).rev().find_map(|len| {
            self.data
                .get(&join_tags(&tags[..len]))
                .and_then(|labels| labels.get(friendliness))
        })
    }

    /// [`get_longest`](Self::get_longest) for exactly one tag.
    pub fn get_longest_one(&self, tag: &str, friendliness: LabelFriendliness) -> Option<&str> {
        self.get_longest(&[tag], friendliness)
    }

    /// A label for `tags`, falling back to the tags joined with `+`.
    pub fn relabel<'a, S: AsRef<str>>(
        &'a self,
        tags: &[S],
        friendliness: LabelFriendliness,
    ) -> Cow<'a, str> {
        match self.get_longest(tags, friendliness) {
            Some(label) => Cow::Borrowed(label),
            None => {
                let raw = join_tags(tags);
                warn!("Could not find relabelling for tags: {raw:?}");
                Cow::Owned(raw)
            }
        }
    }

    pub fn relabel_one(&self, tag: &str, friendliness: LabelFriendliness) -> Cow<'_, str> {
        self.relabel(&[tag], friendliness)
    }

    /// A view of the table fixed to one label variant.
    pub fn fetcher(&self, friendliness: LabelFriendliness) -> RelabelFetcher<'_> {
        RelabelFetcher {
            table: self,
            friendliness,
        }
    }

    pub fn linguistic_short(&self) -> RelabelFetcher<'_> {
        self.fetcher(LabelFriendliness::LinguisticShort)
    }

    pub fn linguistic_long(&self) -> RelabelFetcher<'_> {
        self.fetcher(LabelFriendliness::LinguisticLong)
    }

    pub fn english(&self) -> RelabelFetcher<'_> {
        self.fetcher(LabelFriendliness::English)
    }

    pub fn cree(&self) -> RelabelFetcher<'_> {
        self.fetcher(LabelFriendliness::Nehiyawewin)
    }
}

/// Lookups against a [`Relabelling`] for a single [`LabelFriendliness`].
#[derive(Clone, Copy, Debug)]
pub struct RelabelFetcher<'a> {
    table: &'a Relabelling,
    friendliness: LabelFriendliness,
}

impl<'a> RelabelFetcher<'a> {
    pub fn friendliness(&self) -> LabelFriendliness {
        self.friendliness
    }

    /// The label stored under exactly this key.
    pub fn get(&self, key: &str) -> Option<&'a str> {
        self.table
            .get(key)
            .and_then(|labels| labels.get(self.friendliness))
    }

    pub fn get_longest<S: AsRef<str>>(&self, tags: &[S]) -> Option<&'a str> {
        self.table.get_longest(tags, self.friendliness)
    }

    pub fn get_longest_one(&self, tag: &str) -> Option<&'a str> {
        self.table.get_longest_one(tag, self.friendliness)
    }

    pub fn relabel<S: AsRef<str>>(&self, tags: &[S]) -> Cow<'a, str> {
        self.table.relabel(tags, self.friendliness)
    }
}

fn join_tags<S: AsRef<str>>(tags: &[S]) -> String {
    tags.iter()
        .map(|tag| tag.as_ref())
        .collect::<Vec<_>>()
        .join(TAG_SEPARATOR)
}
