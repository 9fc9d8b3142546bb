//! Common trait for graph export formats.

use std::path::Path;

use super::model::RenderGraph;
use crate::error::Result;

/// Trait for graph export formats.
///
/// Implementations turn a [`RenderGraph`] into the bytes of one file. A
/// writer must reject graphs whose edges point at unknown vertices before
/// producing any output.
pub trait GraphFormat {
    /// Human-readable name of the format.
    fn name(&self) -> &'static str;

    /// File extension for this format, without the dot.
    fn extension(&self) -> &'static str;

    /// Serialize the graph.
    fn write(&self, graph: &RenderGraph) -> Result<Vec<u8>>;

    /// Serialize the graph and store it at `path`.
    ///
    /// The file is only created once serialization has succeeded.
    fn write_to_path(&self, graph: &RenderGraph, path: &Path) -> Result<()> {
        let bytes = self.write(graph)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}
