//! Engine configuration.
//!
//! ```json
//! {
//!   "relabelling_path": "res/crk.altlabel.tsv",
//!   "wordforms_path": "res/wordforms.tsv",
//!   "label_setting": "linguistic",
//!   "affix_search": true,
//!   "max_affix_results": 50
//! }
//! ```
//!
//! Every field is optional; missing fields take their [`Default`] values.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{MorphodictError, Result};
use crate::relabel::LabelSetting;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Relabelling TSV. Without one, every label falls back to raw tags.
    pub relabelling_path: Option<PathBuf>,
    /// Wordform list (`id<TAB>text` rows) used to build the affix index.
    pub wordforms_path: Option<PathBuf>,
    /// Label setting used when the caller does not pass one.
    pub label_setting: LabelSetting,
    /// Whether `search` broadens queries with prefix and suffix matches.
    pub affix_search: bool,
    /// Cap on the number of ids `search` returns. `None` means unlimited.
    pub max_affix_results: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            relabelling_path: None,
            wordforms_path: None,
            label_setting: LabelSetting::default(),
            affix_search: true,
            max_affix_results: None,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a JSON file and validate it.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            MorphodictError::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: EngineConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_affix_results == Some(0) {
            return Err(MorphodictError::config(
                "max_affix_results must be greater than zero",
            ));
        }
        Ok(())
    }

    pub fn with_relabelling_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.relabelling_path = Some(path.into());
        self
    }

    pub fn with_wordforms_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.wordforms_path = Some(path.into());
        self
    }

    pub fn with_label_setting(mut self, setting: LabelSetting) -> Self {
        self.label_setting = setting;
        self
    }

    pub fn with_max_affix_results(mut self, max: usize) -> Self {
        self.max_affix_results = Some(max);
        self
    }
}
