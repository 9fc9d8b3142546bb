//! The paraphrase graph arena and its initial construction.
//!
//! ```text
//! ParaphraseGraph
//! └── nodes: IndexMap<NodeId, Node>   (creation order, shift-removed on merge)
//!       ├── tokens:   Vec<Token>      (owned, moved on merge)
//!       ├── incoming: Vec<NodeId>     (ids only, never references)
//!       └── outgoing: Vec<NodeId>
//! ```
//!
//! Adjacency is always symmetric: `b ∈ a.outgoing ⇔ a ∈ b.incoming`.

mod builder;
mod node;
mod paraphrase_graph;

pub use builder::{build_initial_graph, decompose};
pub use node::{Direction, Node};
pub use paraphrase_graph::ParaphraseGraph;
