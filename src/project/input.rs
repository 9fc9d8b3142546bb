//! Sentence file reading.

use std::path::Path;

use smol_str::SmolStr;
use tracing::debug;

use crate::error::{ParaphraseError, Result};

/// Marker words wrapped around every sentence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndPoints {
    pub start: SmolStr,
    pub end: SmolStr,
}

/// Split text into tokenized sentences, one per non-blank line.
pub fn parse_sentences(text: &str, end_points: Option<&EndPoints>) -> Vec<Vec<SmolStr>> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| -> Vec<SmolStr> {
            let words = line.split_whitespace().map(SmolStr::new);
            match end_points {
                Some(EndPoints { start, end }) => std::iter::once(start.clone())
                    .chain(words)
                    .chain(std::iter::once(end.clone()))
                    .collect(),
                None => words.collect(),
            }
        })
        .collect()
}

/// Read a UTF-8 sentence file, one whitespace-tokenized sentence per line.
pub fn read_sentences(path: &Path, end_points: Option<&EndPoints>) -> Result<Vec<Vec<SmolStr>>> {
    if !path.is_file() {
        return Err(ParaphraseError::InputNotFound {
            path: path.to_path_buf(),
        });
    }
    let text = std::fs::read_to_string(path)?;
    let sentences = parse_sentences(&text, end_points);
    debug!("Read {} sentence(s) from {}", sentences.len(), path.display());
    Ok(sentences)
}
