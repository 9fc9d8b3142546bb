//! Standalone render model shared by all export formats.

use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use crate::error::{ParaphraseError, Result};
use crate::graph::ParaphraseGraph;

/// A vertex as it will be drawn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderVertex {
    pub id: String,
    pub label: SmolStr,
    /// Owns a sentence-initial token.
    pub is_start: bool,
    /// Owns a sentence-final token.
    pub is_end: bool,
}

impl RenderVertex {
    pub fn new(id: impl Into<String>, label: impl Into<SmolStr>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            is_start: false,
            is_end: false,
        }
    }
}

/// A directed edge between two vertex ids.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderEdge {
    pub id: String,
    pub source: String,
    pub target: String,
}

/// Vertices and edges in output order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderGraph {
    pub vertices: Vec<RenderVertex>,
    pub edges: Vec<RenderEdge>,
}

impl RenderGraph {
    /// Verify that vertex ids are unique and every edge endpoint names a
    /// vertex.
    pub fn check_endpoints(&self) -> Result<()> {
        let mut ids = FxHashSet::default();
        for vertex in &self.vertices {
            if !ids.insert(vertex.id.as_str()) {
                return Err(ParaphraseError::consistency(format!(
                    "vertex id '{}' appears twice",
                    vertex.id
                )));
            }
        }
        for edge in &self.edges {
            if !ids.contains(edge.source.as_str()) {
                return Err(ParaphraseError::consistency(format!(
                    "source node id '{}' of edge '{}' not in the graph",
                    edge.source, edge.id
                )));
            }
            if !ids.contains(edge.target.as_str()) {
                return Err(ParaphraseError::consistency(format!(
                    "outgoing node id '{}' requested by node '{}' not in the graph",
                    edge.target, edge.source
                )));
            }
        }
        Ok(())
    }
}

impl From<&ParaphraseGraph> for RenderGraph {
    /// One vertex per live node and one edge per outgoing adjacency, in
    /// creation order. Dangling ids are carried over unchanged so that the
    /// writer can report them.
    fn from(graph: &ParaphraseGraph) -> Self {
        let vertices = graph
            .iter()
            .map(|node| RenderVertex {
                id: node.id().to_string(),
                label: node.word().clone(),
                is_start: node.has_start_token(),
                is_end: node.has_end_token(),
            })
            .collect();
        let edges = graph
            .iter()
            .flat_map(|node| {
                node.outgoing().iter().map(move |target| RenderEdge {
                    id: format!("id_{}_{}_edge", node.id(), target),
                    source: node.id().to_string(),
                    target: target.to_string(),
                })
            })
            .collect();
        Self { vertices, edges }
    }
}

/// Colours and sizing used to draw vertices.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeStyle {
    pub color_general: String,
    pub color_start: String,
    pub color_end: String,
    /// Width of one label character.
    pub character_width: f64,
}

impl NodeStyle {
    /// Fill colour of a vertex. Start marking wins over end marking.
    pub fn background<'a>(&'a self, vertex: &RenderVertex) -> &'a str {
        if vertex.is_start {
            &self.color_start
        } else if vertex.is_end {
            &self.color_end
        } else {
            &self.color_general
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_initial_graph;

    fn style() -> NodeStyle {
        NodeStyle {
            color_general: "#general".to_string(),
            color_start: "#start".to_string(),
            color_end: "#end".to_string(),
            character_width: 7.0,
        }
    }

    #[test]
    fn test_from_paraphrase_graph() {
        let graph = build_initial_graph(&[vec!["a", "b"]]).unwrap();
        let render = RenderGraph::from(&graph);

        assert_eq!(render.vertices.len(), 2);
        assert!(render.vertices[0].is_start && !render.vertices[0].is_end);
        assert!(render.vertices[1].is_end && !render.vertices[1].is_start);
        assert_eq!(
            render.edges,
            vec![RenderEdge {
                id: "id_id_s0_t0_node_id_s0_t1_node_edge".to_string(),
                source: "id_s0_t0_node".to_string(),
                target: "id_s0_t1_node".to_string(),
            }]
        );
        render.check_endpoints().unwrap();
    }

    #[test]
    fn test_background_priority() {
        let style = style();
        let mut vertex = RenderVertex::new("v", "w");
        assert_eq!(style.background(&vertex), "#general");
        vertex.is_end = true;
        assert_eq!(style.background(&vertex), "#end");
        vertex.is_start = true;
        assert_eq!(style.background(&vertex), "#start");
    }

    #[test]
    fn test_check_endpoints() {
        let mut render = RenderGraph {
            vertices: vec![RenderVertex::new("a", "a")],
            edges: vec![RenderEdge {
                id: "e".to_string(),
                source: "a".to_string(),
                target: "gone".to_string(),
            }],
        };
        let err = render.check_endpoints().unwrap_err();
        assert!(err.to_string().contains("'gone'"), "{err}");

        render.edges.clear();
        render.vertices.push(RenderVertex::new("a", "again"));
        assert!(render.check_endpoints().is_err());
    }
}
