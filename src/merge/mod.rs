//! Node merging: the fixpoint that turns per-sentence chains into a shared
//! paraphrase graph.
//!
//! ```text
//! scan nodes in creation order
//!   └── word shared with other live nodes?
//!         ├── incoming chains equal → merge(current, candidate), rescan
//!         └── outgoing chains equal → merge(current, candidate), rescan
//! stop when a full scan merges nothing
//! ```
//!
//! A chain starts at the node itself, so two sentence-initial (or
//! sentence-final) nodes with the same word always match.

mod chain;
mod engine;
mod observer;
mod rewire;

pub use chain::{Chain, word_chain};
pub use engine::{LARGE_GRAPH_NODES, MergeEngine, MergeEvent, MergeReport, VERY_LARGE_GRAPH_NODES};
pub use observer::{MergeObserver, NoopObserver, TracingObserver};
pub use rewire::merge_nodes;

use crate::error::Result;
use crate::graph::ParaphraseGraph;

/// Run the merge engine to its fixpoint without an observer.
pub fn merge_to_fixpoint(graph: &mut ParaphraseGraph) -> Result<MergeReport> {
    MergeEngine::new().run(graph)
}
