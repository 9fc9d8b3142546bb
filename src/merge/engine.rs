use rustc_hash::FxHashSet;
use smol_str::SmolStr;
use tracing::{trace, warn};

use super::chain::word_chain;
use super::observer::{MergeObserver, NoopObserver};
use super::rewire::merge_nodes;
use crate::base::NodeId;
use crate::error::Result;
use crate::graph::{Direction, Node, ParaphraseGraph};

/// Initial node count above which the merge loop is reported as slow.
pub const LARGE_GRAPH_NODES: usize = 1000;

/// Initial node count above which the merge loop is reported as very slow.
pub const VERY_LARGE_GRAPH_NODES: usize = 2000;

/// A merge the engine decided on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MergeEvent {
    pub survivor: NodeId,
    pub doomed: NodeId,
    /// Word shared by both nodes.
    pub word: SmolStr,
    /// Which chains matched.
    pub direction: Direction,
}

/// Summary of one run of the engine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MergeReport {
    pub initial_nodes: usize,
    pub final_nodes: usize,
    /// Number of scans, including the final one that found nothing.
    pub passes: usize,
    pub incoming_merges: usize,
    pub outgoing_merges: usize,
}

impl MergeReport {
    pub fn merges(&self) -> usize {
        self.incoming_merges + self.outgoing_merges
    }
}

/// Fixpoint driver for node merging.
///
/// Each pass walks the live nodes in creation order. For a node whose word
/// is shared with other live nodes, the candidates are tried in creation
/// order: first the incoming chains are compared, then the outgoing chains.
/// The first exact match is merged into the scanned node and the scan starts
/// over. The run ends when a full pass merges nothing.
///
/// No attempt is made at asymptotic efficiency: a pass costs
/// O(nodes × candidates × chain length), and graphs beyond
/// [`LARGE_GRAPH_NODES`] nodes can take a long time.
#[derive(Debug, Default)]
pub struct MergeEngine<O = NoopObserver> {
    observer: O,
    /// Words held by exactly one live node. Merges only ever remove nodes,
    /// so a settled word stays settled for the rest of the run.
    settled: FxHashSet<SmolStr>,
}

impl MergeEngine<NoopObserver> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<O: MergeObserver> MergeEngine<O> {
    pub fn with_observer(observer: O) -> Self {
        Self {
            observer,
            settled: FxHashSet::default(),
        }
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Merge until the fixpoint, then validate the resulting graph.
    pub fn run(&mut self, graph: &mut ParaphraseGraph) -> Result<MergeReport> {
        self.settled.clear();

        let initial_nodes = graph.len();
        warn_if_large(initial_nodes);
        self.observer.on_start(initial_nodes);

        let mut report = MergeReport {
            initial_nodes,
            ..MergeReport::default()
        };

        loop {
            report.passes += 1;
            self.observer.on_pass(report.passes, graph.len());

            let Some(event) = self.find_merge(graph)? else {
                break;
            };
            merge_nodes(graph, &event.survivor, &event.doomed)?;
            match event.direction {
                Direction::Incoming => report.incoming_merges += 1,
                Direction::Outgoing => report.outgoing_merges += 1,
            }
            self.observer.on_merge(&event);
        }

        graph.validate()?;
        report.final_nodes = graph.len();
        self.observer.on_fixpoint(&report);
        Ok(report)
    }

    /// One scan over the live nodes. Returns the first merge found, or
    /// `None` at the fixpoint. The graph is not modified.
    pub fn find_merge(&mut self, graph: &ParaphraseGraph) -> Result<Option<MergeEvent>> {
        for node in graph.iter() {
            if self.settled.contains(node.word()) {
                continue;
            }

            let candidates = graph.ids_with_word(node.word(), node.id());
            if candidates.is_empty() {
                trace!("word '{}' settled", node.word());
                self.settled.insert(node.word().clone());
                continue;
            }

            for direction in [Direction::Incoming, Direction::Outgoing] {
                if let Some(doomed) = matching_candidate(graph, node, &candidates, direction)? {
                    return Ok(Some(MergeEvent {
                        survivor: node.id().clone(),
                        doomed,
                        word: node.word().clone(),
                        direction,
                    }));
                }
            }
        }
        Ok(None)
    }
}

/// First candidate whose chain equals the node's chain in `direction`.
fn matching_candidate(
    graph: &ParaphraseGraph,
    node: &Node,
    candidates: &[NodeId],
    direction: Direction,
) -> Result<Option<NodeId>> {
    let own = word_chain(graph, node.id(), direction)?;
    for candidate in candidates {
        if word_chain(graph, candidate, direction)? == own {
            return Ok(Some(candidate.clone()));
        }
    }
    Ok(None)
}

fn warn_if_large(initial_nodes: usize) {
    if initial_nodes > VERY_LARGE_GRAPH_NODES {
        warn!(
            "! Generation of the paraphrase graph with {} initial nodes could be very slow.",
            initial_nodes
        );
    } else if initial_nodes > LARGE_GRAPH_NODES {
        warn!(
            "! Generation of the paraphrase graph with {} initial nodes could be slow.",
            initial_nodes
        );
    }
}
