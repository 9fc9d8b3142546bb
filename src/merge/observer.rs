//! Progress reporting for the merge loop.

use tracing::{debug, info, trace};

use super::{MergeEvent, MergeReport};

/// Callbacks the merge engine invokes at pass boundaries.
///
/// Observers only watch; nothing they do affects which nodes get merged.
/// All methods default to doing nothing.
pub trait MergeObserver {
    /// Called once before the first pass.
    fn on_start(&mut self, initial_nodes: usize) {
        let _ = initial_nodes;
    }

    /// Called at the start of every scan over the live nodes.
    fn on_pass(&mut self, pass: usize, live_nodes: usize) {
        let _ = (pass, live_nodes);
    }

    /// Called after a merge has been applied.
    fn on_merge(&mut self, event: &MergeEvent) {
        let _ = event;
    }

    /// Called once the fixpoint is reached and the graph has been validated.
    fn on_fixpoint(&mut self, report: &MergeReport) {
        let _ = report;
    }
}

impl<O: MergeObserver + ?Sized> MergeObserver for &mut O {
    fn on_start(&mut self, initial_nodes: usize) {
        (**self).on_start(initial_nodes)
    }

    fn on_pass(&mut self, pass: usize, live_nodes: usize) {
        (**self).on_pass(pass, live_nodes)
    }

    fn on_merge(&mut self, event: &MergeEvent) {
        (**self).on_merge(event)
    }

    fn on_fixpoint(&mut self, report: &MergeReport) {
        (**self).on_fixpoint(report)
    }
}

/// Observer that ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl MergeObserver for NoopObserver {}

/// Observer that forwards events to `tracing`.
///
/// Pass progress is logged at info level every 50 live nodes, at trace level
/// otherwise.
#[derive(Clone, Copy, Debug)]
pub struct TracingObserver {
    progress_every: usize,
}

impl TracingObserver {
    pub fn new() -> Self {
        Self { progress_every: 50 }
    }

    /// Log pass progress at info level whenever the live node count is a
    /// multiple of `every`.
    pub fn with_progress_every(every: usize) -> Self {
        Self {
            progress_every: every.max(1),
        }
    }
}

impl Default for TracingObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl MergeObserver for TracingObserver {
    fn on_start(&mut self, initial_nodes: usize) {
        debug!("Merging graph with {} initial nodes", initial_nodes);
    }

    fn on_pass(&mut self, pass: usize, live_nodes: usize) {
        if live_nodes % self.progress_every == 0 {
            info!("- merging turn with {} nodes", live_nodes);
        } else {
            trace!("pass {} over {} nodes", pass, live_nodes);
        }
    }

    fn on_merge(&mut self, event: &MergeEvent) {
        debug!(
            "merged '{}' into '{}' (word '{}', {} chain)",
            event.doomed, event.survivor, event.word, event.direction
        );
    }

    fn on_fixpoint(&mut self, report: &MergeReport) {
        info!(
            "Fixpoint after {} merges in {} passes ({} -> {} nodes)",
            report.merges(),
            report.passes,
            report.initial_nodes,
            report.final_nodes
        );
    }
}
