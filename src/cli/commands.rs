//! Command implementations for the morphodict CLI.

use std::sync::Arc;
use std::time::Instant;

use ahash::AHashMap;
use log::debug;

use crate::affix::{AffixSearcher, WordformId, load_wordforms};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::EngineConfig;
use crate::engine::DictionaryEngine;
use crate::error::{MorphodictError, Result};
use crate::morphology::AnchorParser;
use crate::normalize::normalize;
use crate::relabel::{LabelSetting, Relabelling};

/// Execute a CLI command.
pub fn execute_command(args: MorphodictArgs) -> Result<()> {
    let config = load_config(&args)?;
    match &args.command {
        Command::Normalize(normalize_args) => normalize_text(normalize_args, &args),
        Command::Partition(partition_args) => partition(partition_args, config, &args),
        Command::Relabel(relabel_args) => relabel(relabel_args, config, &args),
        Command::Search(search_args) => search(search_args, config, &args),
    }
}

fn load_config(args: &MorphodictArgs) -> Result<EngineConfig> {
    match &args.config {
        Some(path) => {
            debug!("loading config from {}", path.display());
            EngineConfig::load_from_file(path)
        }
        None => Ok(EngineConfig::default()),
    }
}

fn normalize_text(args: &NormalizeArgs, cli_args: &MorphodictArgs) -> Result<()> {
    let result = NormalizeResult {
        input: args.text.clone(),
        normalized: normalize(&args.text).into_string(),
    };
    output_result("Normalized form", &result, cli_args)
}

fn partition(args: &PartitionArgs, config: EngineConfig, cli_args: &MorphodictArgs) -> Result<()> {
    let mut config = config;
    config.wordforms_path = None;
    if let Some(labels) = &args.labels {
        config.relabelling_path = Some(labels.clone());
    }

    let mut engine = DictionaryEngine::from_config(config)?;
    if args.parser == ParserKind::Anchor {
        engine = engine.with_parser(Arc::new(AnchorParser::new()));
    }

    let description = engine.describe(&args.analysis, args.setting.map(LabelSetting::from))?;
    output_result("Analysis", &description, cli_args)
}

fn relabel(args: &RelabelArgs, config: EngineConfig, cli_args: &MorphodictArgs) -> Result<()> {
    let path = args
        .labels
        .as_ref()
        .or(config.relabelling_path.as_ref())
        .ok_or_else(|| {
            MorphodictError::config("no relabelling table given (use --labels or a config file)")
        })?;
    let relabelling = Relabelling::load_from_file(path)?;

    let setting = args
        .setting
        .map(LabelSetting::from)
        .unwrap_or(config.label_setting);
    let tags = args.tag_sequence();
    let found = relabelling
        .get_longest(&tags, setting.friendliness())
        .is_some();
    let label = relabelling
        .relabel(&tags, setting.friendliness())
        .into_owned();

    let result = RelabelResult {
        tags,
        setting: setting.to_string(),
        label,
        found,
    };
    output_result("Label", &result, cli_args)
}

fn search(args: &SearchArgs, config: EngineConfig, cli_args: &MorphodictArgs) -> Result<()> {
    let path = args
        .wordforms
        .clone()
        .or_else(|| config.wordforms_path.clone())
        .ok_or_else(|| {
            MorphodictError::config("no wordform list given (use --wordforms or a config file)")
        })?;

    let mut config = config;
    if let Some(limit) = args.limit {
        config.max_affix_results = Some(limit);
    }
    config.validate()?;

    let start_time = Instant::now();
    let words = load_wordforms(&path)?;
    let texts: AHashMap<WordformId, &str> = words
        .iter()
        .map(|(text, id)| (*id, text.as_str()))
        .collect();
    let searcher = AffixSearcher::new(words.iter().map(|(text, id)| (text.as_str(), *id)))?;
    debug!(
        "indexed {} forms from {} in {:?}",
        searcher.len(),
        path.display(),
        start_time.elapsed()
    );

    let start_time = Instant::now();
    let mut ids = match args.mode() {
        SearchMode::Prefix => searcher.search_by_prefix(&args.query),
        SearchMode::Suffix => searcher.search_by_suffix(&args.query),
        SearchMode::All => {
            let engine = DictionaryEngine::new(config.clone(), searcher, Relabelling::default());
            engine.search(&args.query)
        }
    };
    if let Some(max) = config.max_affix_results {
        ids.truncate(max);
    }

    let hits = ids
        .into_iter()
        .map(|id| SearchHit {
            id,
            text: texts.get(&id).map(|text| text.to_string()),
        })
        .collect();

    let result = SearchResults {
        query: args.query.clone(),
        mode: args.mode(),
        hits,
        duration_ms: start_time.elapsed().as_millis() as u64,
    };
    output_result("Search results", &result, cli_args)
}
