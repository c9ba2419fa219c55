//! Command line argument parsing for the morphodict CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::relabel::LabelSetting;

/// morphodict - Plains Cree dictionary lookup tools
#[derive(Parser, Debug, Clone)]
#[command(name = "morphodict")]
#[command(about = "Normalize, search and relabel Plains Cree wordforms and analyses")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct MorphodictArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Engine configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "MORPHODICT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl MorphodictArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }

    /// Log level for the effective verbosity; warnings by default.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbosity() {
            0 => LevelFilter::Off,
            1 => LevelFilter::Warn,
            2 => LevelFilter::Info,
            3 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the simplified (search) form of a text
    Normalize(NormalizeArgs),

    /// Split an analysis into prefix tags, lemma and suffix tags
    Partition(PartitionArgs),

    /// Look up the label for a tag sequence
    Relabel(RelabelArgs),

    /// Find wordforms by exact form, prefix or suffix
    Search(SearchArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct NormalizeArgs {
    /// Text to normalize
    #[arg(value_name = "TEXT")]
    pub text: String,
}

#[derive(Parser, Debug, Clone)]
pub struct PartitionArgs {
    /// Analysis string, e.g. "PV/e+wâpamêw+V+TA+Cnj+1Sg+3SgO"
    #[arg(value_name = "ANALYSIS")]
    pub analysis: String,

    /// Parser used to split the analysis
    #[arg(short, long, default_value = "structural")]
    pub parser: ParserKind,

    /// Relabelling table (TSV) used to label the suffix tags
    #[arg(short, long, value_name = "LABELS_TSV")]
    pub labels: Option<PathBuf>,

    /// Label setting (overrides the configured one)
    #[arg(short, long)]
    pub setting: Option<SettingArg>,
}

#[derive(Parser, Debug, Clone)]
pub struct RelabelArgs {
    /// Relabelling table (TSV)
    #[arg(short, long, value_name = "LABELS_TSV")]
    pub labels: Option<PathBuf>,

    /// Label setting (overrides the configured one)
    #[arg(short, long)]
    pub setting: Option<SettingArg>,

    /// Tags, either separately or joined with '+'
    #[arg(value_name = "TAG", required = true)]
    pub tags: Vec<String>,
}

impl RelabelArgs {
    /// The tag sequence, with '+'-joined arguments split apart.
    pub fn tag_sequence(&self) -> Vec<String> {
        self.tags
            .iter()
            .flat_map(|arg| arg.split('+'))
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Wordform list (TSV of id and text)
    #[arg(short, long, value_name = "WORDFORMS_TSV")]
    pub wordforms: Option<PathBuf>,

    /// Only match wordforms starting with the query
    #[arg(long)]
    pub prefix: bool,

    /// Only match wordforms ending with the query
    #[arg(long, conflicts_with = "prefix")]
    pub suffix: bool,

    /// Maximum number of results to return
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Query string
    #[arg(value_name = "QUERY")]
    pub query: String,
}

impl SearchArgs {
    pub fn mode(&self) -> SearchMode {
        if self.prefix {
            SearchMode::Prefix
        } else if self.suffix {
            SearchMode::Suffix
        } else {
            SearchMode::All
        }
    }
}

/// Which matches a search returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Exact, then prefix, then suffix matches
    All,
    Prefix,
    Suffix,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserKind {
    /// Split on prefix tag families and the lemma position
    Structural,
    /// Locate the lexical category marker with a pattern
    Anchor,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingArg {
    English,
    Linguistic,
    Nehiyawewin,
}

impl From<SettingArg> for LabelSetting {
    fn from(arg: SettingArg) -> Self {
        match arg {
            SettingArg::English => LabelSetting::English,
            SettingArg::Linguistic => LabelSetting::Linguistic,
            SettingArg::Nehiyawewin => LabelSetting::Nehiyawewin,
        }
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_search_command() {
        let args = MorphodictArgs::try_parse_from([
            "morphodict",
            "search",
            "--wordforms",
            "wordforms.tsv",
            "--suffix",
            "-n",
            "5",
            "pâw",
        ])
        .unwrap();

        if let Command::Search(search_args) = args.command {
            assert_eq!(search_args.wordforms, Some(PathBuf::from("wordforms.tsv")));
            assert_eq!(search_args.query, "pâw");
            assert_eq!(search_args.limit, Some(5));
            assert_eq!(search_args.mode(), SearchMode::Suffix);
        } else {
            panic!("Expected Search command");
        }
    }

    #[test]
    fn test_prefix_conflicts_with_suffix() {
        let result = MorphodictArgs::try_parse_from([
            "morphodict",
            "search",
            "--prefix",
            "--suffix",
            "nip",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_relabel_tags_are_split() {
        let args = MorphodictArgs::try_parse_from([
            "morphodict",
            "relabel",
            "--setting",
            "linguistic",
            "V+AI",
            "Ind",
        ])
        .unwrap();

        if let Command::Relabel(relabel_args) = args.command {
            assert_eq!(relabel_args.setting, Some(SettingArg::Linguistic));
            assert_eq!(relabel_args.tag_sequence(), vec!["V", "AI", "Ind"]);
        } else {
            panic!("Expected Relabel command");
        }
    }

    #[test]
    fn test_partition_defaults() {
        let args =
            MorphodictArgs::try_parse_from(["morphodict", "partition", "nipâw+V+AI+Ind+3Sg"])
                .unwrap();

        if let Command::Partition(partition_args) = args.command {
            assert_eq!(partition_args.parser, ParserKind::Structural);
            assert_eq!(partition_args.labels, None);
            assert_eq!(partition_args.setting, None);
        } else {
            panic!("Expected Partition command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        let args = MorphodictArgs::try_parse_from(["morphodict", "normalize", "x"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = MorphodictArgs::try_parse_from(["morphodict", "-vv", "normalize", "x"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args =
            MorphodictArgs::try_parse_from(["morphodict", "--quiet", "normalize", "x"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_log_levels() {
        let args = MorphodictArgs::try_parse_from(["morphodict", "-q", "normalize", "x"]).unwrap();
        assert_eq!(args.log_level(), LevelFilter::Off);

        let args = MorphodictArgs::try_parse_from(["morphodict", "normalize", "x"]).unwrap();
        assert_eq!(args.log_level(), LevelFilter::Warn);

        let args =
            MorphodictArgs::try_parse_from(["morphodict", "-vvv", "normalize", "x"]).unwrap();
        assert_eq!(args.log_level(), LevelFilter::Debug);
    }

    #[test]
    fn test_output_format() {
        let args =
            MorphodictArgs::try_parse_from(["morphodict", "--format", "json", "normalize", "x"])
                .unwrap();
        assert_eq!(args.output_format, OutputFormat::Json);
    }
}
