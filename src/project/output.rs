//! Output location and file naming.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// The kind of graph written to a file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GraphKind {
    /// Merged paraphrase graph.
    Paraphrase,
    /// Word automaton.
    Automaton,
}

impl GraphKind {
    /// File name suffix.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Paraphrase => "prp",
            Self::Automaton => "fsa",
        }
    }
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Paraphrase => write!(f, "paraphrase graph"),
            Self::Automaton => write!(f, "automaton"),
        }
    }
}

/// `<stem>[_we]_<prp|fsa>.graphml` for the given input file.
pub fn output_file_name(input: &Path, end_points: bool, kind: GraphKind) -> String {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let with_end_points = if end_points { "_we" } else { "" };
    format!("{stem}{with_end_points}_{}.graphml", kind.suffix())
}

/// The requested output directory, or the directory holding `input`.
pub fn output_dir(input: &Path, requested: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = requested {
        return Ok(dir.to_path_buf());
    }
    let input = input.canonicalize()?;
    Ok(input
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(".")))
}

/// Full output path, creating the output directory when needed.
pub fn output_path(
    input: &Path,
    requested: Option<&Path>,
    end_points: bool,
    kind: GraphKind,
) -> Result<PathBuf> {
    let dir = output_dir(input, requested)?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join(output_file_name(input, end_points, kind)))
}
