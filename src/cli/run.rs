//! One end-to-end run: read, build, export.

use std::path::PathBuf;

use tracing::info;

use super::args::{Args, Mode};
use crate::automaton::build_automaton;
use crate::error::Result;
use crate::graph::build_initial_graph;
use crate::interchange::{GraphFormat, GraphMl, RenderGraph};
use crate::merge::{MergeEngine, TracingObserver};
use crate::project::{Config, output_path, read_sentences};

/// Execute a run described by `args` and return the path of the written
/// GraphML file.
pub fn execute(args: &Args) -> Result<PathBuf> {
    let config = match &args.config {
        Some(path) => Config::from_path(path)?,
        None => Config::bundled()?,
    };

    info!("Reading sentences from {}", args.input_filename.display());
    let end_points = args.end_points.then(|| config.end_points());
    let sentences = read_sentences(&args.input_filename, end_points.as_ref())?;
    info!("Read {} sentence(s)", sentences.len());

    let render = match args.mode {
        Mode::Paraphrase => {
            let mut graph = build_initial_graph(&sentences)?;
            info!("Initial graph has {} nodes", graph.len());
            let report = MergeEngine::with_observer(TracingObserver::new()).run(&mut graph)?;
            info!(
                "Merged graph has {} nodes after {} merge(s)",
                report.final_nodes,
                report.merges()
            );
            RenderGraph::from(&graph)
        }
        Mode::Automaton => {
            let automaton = build_automaton(&sentences)?;
            info!(
                "Automaton has {} vertices and {} edges",
                automaton.vertices.len(),
                automaton.edges.len()
            );
            automaton
        }
    };

    let output = output_path(
        &args.input_filename,
        args.output_dir.as_deref(),
        args.end_points,
        args.mode.into(),
    )?;
    let graph_id = output
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    GraphMl::new(config.node_style(), graph_id).write_to_path(&render, &output)?;
    info!("Output written to {}", output.display());
    Ok(output)
}
