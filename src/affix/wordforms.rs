//! Reading `(text, id)` pairs from a wordform list.
//!
//! The list is tab-separated with the id first:
//!
//! ```text
//! id	text
//! 1	nipâw
//! 2	nipâwin
//! ```
//!
//! A header row is recognised by a non-numeric first cell and skipped.
//! Blank rows are ignored.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::ReaderBuilder;
use log::debug;

use crate::affix::WordformId;
use crate::error::{MorphodictError, Result};

pub fn read_wordforms<R: Read>(reader: R) -> Result<Vec<(String, WordformId)>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut words = Vec::new();
    let mut first_row = true;

    for record in reader.records() {
        let record = record?;
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }

        let id_cell = record.get(0).unwrap_or_default().trim();
        let text = record.get(1).unwrap_or_default().trim();

        match id_cell.parse::<u64>() {
            Ok(id) => words.push((text.to_string(), WordformId(id))),
            Err(_) if first_row => debug!("skipping wordform list header: {id_cell:?}"),
            Err(_) => {
                let line = record.position().map_or(0, |p| p.line());
                return Err(MorphodictError::wordforms(format!(
                    "line {line}: invalid wordform id {id_cell:?}"
                )));
            }
        }
        first_row = false;
    }

    Ok(words)
}

pub fn load_wordforms<P: AsRef<Path>>(path: P) -> Result<Vec<(String, WordformId)>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        MorphodictError::wordforms(format!(
            "Failed to open wordform list '{}': {}",
            path.display(),
            e
        ))
    })?;
    read_wordforms(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_with_header() {
        let words = read_wordforms("id\ttext\n1\tnipâw\n\n2\tnipâwin\n".as_bytes()).unwrap();
        assert_eq!(
            words,
            vec![
                ("nipâw".to_string(), WordformId(1)),
                ("nipâwin".to_string(), WordformId(2)),
            ]
        );
    }

    #[test]
    fn test_read_without_header() {
        let words = read_wordforms("7\tmîcisow\n8\n".as_bytes()).unwrap();
        assert_eq!(
            words,
            vec![
                ("mîcisow".to_string(), WordformId(7)),
                (String::new(), WordformId(8)),
            ]
        );
    }

    #[test]
    fn test_bad_id_after_first_row() {
        let err = read_wordforms("1\tnipâw\nx\tbad\n".as_bytes()).unwrap_err();
        assert!(matches!(err, MorphodictError::Wordforms(_)));
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_missing_file() {
        let err = load_wordforms("/nonexistent/wordforms.tsv").unwrap_err();
        assert!(matches!(err, MorphodictError::Wordforms(_)));
    }
}
