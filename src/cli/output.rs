//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::affix::WordformId;
use crate::cli::args::{MorphodictArgs, OutputFormat, SearchMode};
use crate::error::Result;

/// Result structure for `normalize`.
#[derive(Debug, Serialize, Deserialize)]
pub struct NormalizeResult {
    pub input: String,
    pub normalized: String,
}

/// Result structure for `relabel`.
#[derive(Debug, Serialize, Deserialize)]
pub struct RelabelResult {
    pub tags: Vec<String>,
    pub setting: String,
    pub label: String,
    /// Whether the table had an entry for some prefix of `tags`.
    pub found: bool,
}

/// One matched wordform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: WordformId,
    pub text: Option<String>,
}

/// Result structure for `search`.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResults {
    pub query: String,
    pub mode: SearchMode,
    pub hits: Vec<SearchHit>,
    pub duration_ms: u64,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(
    message: &str,
    result: &T,
    args: &MorphodictArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

fn output_human<T: Serialize>(message: &str, result: &T, args: &MorphodictArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;
    if value.get("hits").is_some() {
        output_search_results_human(&value);
    } else {
        output_generic_human(&value);
    }
    Ok(())
}

fn output_search_results_human(value: &serde_json::Value) {
    let hits = value
        .get("hits")
        .and_then(|h| h.as_array())
        .map(Vec::as_slice)
        .unwrap_or_default();

    if hits.is_empty() {
        println!("No matches.");
        return;
    }

    for hit in hits {
        let id = hit.get("id").map(format_value).unwrap_or_default();
        match hit.get("text").and_then(|t| t.as_str()) {
            Some(text) => println!("{id}\t{text}"),
            None => println!("{id}"),
        }
    }
}

fn output_generic_human(value: &serde_json::Value) {
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                println!("{key}: {}", format_value(val));
            }
        }
        _ => println!("{}", format_value(value)),
    }
}

fn output_json<T: Serialize>(result: &T, args: &MorphodictArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "-".to_string(),
    }
}
