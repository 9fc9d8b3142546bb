//! Graph export formats.
//!
//! Both graph kinds are lowered to a standalone [`RenderGraph`] before
//! export, so writers never see merge-engine internals:
//!
//! ```text
//! ┌──────────────────┐     ┌──────────────────┐
//! │ ParaphraseGraph  │     │ build_automaton  │
//! └────────┬─────────┘     └────────┬─────────┘
//!          │ RenderGraph::from      │
//!          ▼                        ▼
//! ┌──────────────────────────────────────────┐
//! │ RenderGraph { vertices, edges }          │
//! └────────────────────┬─────────────────────┘
//!                      ▼
//! ┌──────────────────────────────────────────┐
//! │ GraphFormat::write(&RenderGraph)         │
//! │  - GraphMl (yEd flavoured GraphML)       │
//! └──────────────────────────────────────────┘
//! ```

mod format;
mod graphml;
mod model;

pub use format::GraphFormat;
pub use graphml::{GraphMl, escape_text, format_width, vertex_width};
pub use model::{NodeStyle, RenderEdge, RenderGraph, RenderVertex};
