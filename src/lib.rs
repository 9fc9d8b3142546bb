//! # paraphrase-graph
//!
//! Builds paraphrase graphs from tokenized sentences. Every token starts
//! as its own node; nodes that share a word and an identical chain of
//! predecessor (or successor) words are merged until nothing changes. The
//! result, or a plain word automaton, is exported as yEd GraphML.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! cli         → Argument parsing, end-to-end run
//!   ↓
//! project     → YAML config, sentence input, output naming
//!   ↓
//! interchange → Render model, GraphML writer
//!   ↓
//! automaton   → Word automaton (no merging)
//! merge       → Chain comparison, rewiring, fixpoint engine
//!   ↓
//! graph       → Node arena, initial graph builder
//!   ↓
//! base, error → NodeId, Token, ParaphraseError
//! ```

// ============================================================================
// MODULES (dependency order: base → graph → merge → interchange → project → cli)
// ============================================================================

/// Foundation types: NodeId, Token
pub mod base;

/// Crate-wide error type
pub mod error;

/// Paraphrase graph arena and the initial per-token builder
pub mod graph;

/// Merge engine and observers
pub mod merge;

/// Word automaton builder
pub mod automaton;

/// Export formats: GraphML for yEd
pub mod interchange;

/// Configuration, input reading, output naming
pub mod project;

/// Command line interface
pub mod cli;

pub use base::{NodeId, Token};
pub use error::{ParaphraseError, Result};
pub use graph::{Direction, Node, ParaphraseGraph, build_initial_graph};
pub use merge::{MergeEngine, MergeReport, merge_to_fixpoint};

/// Build the initial graph for `sentences` and merge it to its fixpoint.
pub fn build_paraphrase_graph<W: AsRef<str>>(sentences: &[Vec<W>]) -> Result<ParaphraseGraph> {
    let mut graph = build_initial_graph(sentences)?;
    merge_to_fixpoint(&mut graph)?;
    Ok(graph)
}
