//! The assembled lookup engine.
//!
//! [`DictionaryEngine`] owns the built structures (affix index, relabelling
//! table, analysis parser) and is meant to be constructed once at startup
//! and handed to every consumer by reference or `Arc`.

use std::fmt;
use std::sync::Arc;

use ahash::AHashSet;
use log::info;
use serde::{Deserialize, Serialize};

use crate::affix::{AffixSearcher, SharedAffixSearcher, WordformId, load_wordforms};
use crate::config::EngineConfig;
use crate::error::Result;
use crate::morphology::pos::presentational_pos;
use crate::morphology::{AnalysisParser, LexicalCategory, StructuralParser};
use crate::relabel::{LabelSetting, Relabelling};

/// What the presentation layer needs to show for one analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisDescription {
    pub analysis: String,
    pub prefix_tags: Vec<String>,
    pub lemma: String,
    pub suffix_tags: Vec<String>,
    pub category: LexicalCategory,
    /// "Noun", "Verb", ...
    pub pos: Option<String>,
    /// Label for the suffix tags; the raw tags joined with `+` when the
    /// table has none.
    pub label: String,
}

pub struct DictionaryEngine {
    config: EngineConfig,
    affix: SharedAffixSearcher,
    relabelling: Arc<Relabelling>,
    parser: Arc<dyn AnalysisParser>,
}

impl fmt::Debug for DictionaryEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DictionaryEngine")
            .field("config", &self.config)
            .field("affix", &self.affix.current())
            .field("relabelling_keys", &self.relabelling.len())
            .field("parser", &self.parser.name())
            .finish()
    }
}

impl DictionaryEngine {
    pub fn new(config: EngineConfig, searcher: AffixSearcher, relabelling: Relabelling) -> Self {
        DictionaryEngine {
            config,
            affix: SharedAffixSearcher::new(searcher),
            relabelling: Arc::new(relabelling),
            parser: Arc::new(StructuralParser::new()),
        }
    }

    /// Load the relabelling table and wordform list named by `config`.
    ///
    /// Missing paths produce an empty table or index.
    pub fn from_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;

        let relabelling = match &config.relabelling_path {
            Some(path) => Relabelling::load_from_file(path)?,
            None => Relabelling::default(),
        };
        let words = match &config.wordforms_path {
            Some(path) => load_wordforms(path)?,
            None => Vec::new(),
        };
        let searcher = AffixSearcher::new(words)?;

        info!(
            "dictionary engine ready: {} forms indexed, {} relabelling keys",
            searcher.len(),
            relabelling.len()
        );

        Ok(Self::new(config, searcher, relabelling))
    }

    /// Use a different analysis parser.
    pub fn with_parser(mut self, parser: Arc<dyn AnalysisParser>) -> Self {
        self.parser = parser;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn relabelling(&self) -> &Relabelling {
        &self.relabelling
    }

    pub fn parser(&self) -> &dyn AnalysisParser {
        self.parser.as_ref()
    }

    /// Snapshot of the current affix index.
    pub fn affix(&self) -> Arc<AffixSearcher> {
        self.affix.current()
    }

    /// Build a new index from `words` and publish it to readers.
    pub fn rebuild_index<I, S>(&self, words: I) -> Result<()>
    where
        I: IntoIterator<Item = (S, WordformId)>,
        S: AsRef<str>,
    {
        let normalizer = self.affix.current().normalizer_arc();
        let searcher = AffixSearcher::with_normalizer(words, normalizer)?;
        info!("rebuilt affix index: {} forms", searcher.len());
        self.affix.replace(searcher);
        Ok(())
    }

    /// Wordform ids for a query.
    ///
    /// Exact matches come first, then (when affix search is enabled) prefix
    /// matches, then suffix matches. Each id appears once, and the list is
    /// cut at `max_affix_results`.
    pub fn search(&self, query: &str) -> Vec<WordformId> {
        let searcher = self.affix.current();
        let mut seen = AHashSet::new();
        let mut ids: Vec<WordformId> = Vec::new();

        let mut push_all = |found: &[WordformId]| {
            for id in found {
                if seen.insert(*id) {
                    ids.push(*id);
                }
            }
        };

        push_all(searcher.exact(query));
        if self.config.affix_search {
            push_all(searcher.search_by_prefix(query).as_slice());
            push_all(searcher.search_by_suffix(query).as_slice());
        }

        if let Some(max) = self.config.max_affix_results {
            ids.truncate(max);
        }
        ids
    }

    /// Parse `analysis` and label its suffix tags.
    ///
    /// Fails with a parse error when the analysis has no category marker.
    pub fn describe(
        &self,
        analysis: &str,
        setting: Option<LabelSetting>,
    ) -> Result<AnalysisDescription> {
        let parsed = self.parser.partition(analysis)?;
        let setting = setting.unwrap_or(self.config.label_setting);

        let label = self
            .relabelling
            .relabel(&parsed.suffix_tags, setting.friendliness())
            .into_owned();
        let pos = presentational_pos(self.parser.as_ref(), "", "", analysis).map(str::to_string);

        Ok(AnalysisDescription {
            analysis: analysis.to_string(),
            prefix_tags: parsed.prefix_tags,
            lemma: parsed.lemma,
            suffix_tags: parsed.suffix_tags,
            category: parsed.category,
            pos,
            label,
        })
    }

    /// Label for `tags` under the given (or configured) setting.
    pub fn relabel<S: AsRef<str>>(&self, tags: &[S], setting: Option<LabelSetting>) -> String {
        let setting = setting.unwrap_or(self.config.label_setting);
        self.relabelling
            .relabel(tags, setting.friendliness())
            .into_owned()
    }
}
