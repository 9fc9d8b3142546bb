//! yEd flavoured GraphML writer.
//!
//! Vertices become rounded rectangles with a fixed height of 30 and a width
//! derived from the label length. Every edge is a plain polyline with a
//! standard arrow at the target.

use std::borrow::Cow;
use std::io::Cursor;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use super::format::GraphFormat;
use super::model::{NodeStyle, RenderEdge, RenderGraph, RenderVertex};
use crate::error::{ParaphraseError, Result};

const GRAPHML_NAMESPACES: &[(&str, &str)] = &[
    ("xmlns", "http://graphml.graphdrawing.org/xmlns"),
    ("xmlns:java", "http://www.yworks.com/xml/yfiles-common/1.0/java"),
    (
        "xmlns:sys",
        "http://www.yworks.com/xml/yfiles-common/markup/primitives/2.0",
    ),
    ("xmlns:x", "http://www.yworks.com/xml/yfiles-common/markup/2.0"),
    ("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance"),
    ("xmlns:y", "http://www.yworks.com/xml/graphml"),
    ("xmlns:yed", "http://www.yworks.com/xml/yed/3"),
    (
        "xsi:schemaLocation",
        "http://graphml.graphdrawing.org/xmlns http://www.yworks.com/xml/schema/graphml/1.1/ygraphml.xsd",
    ),
];

const NODE_HEIGHT: &str = "30.0";
const LABEL_PADDING: f64 = 6.0;

/// Escape `& < > " '` in label text.
pub fn escape_text(text: &str) -> Cow<'_, str> {
    quick_xml::escape::escape(text)
}

/// Width of a vertex box for `label`, counted in characters.
pub fn vertex_width(label: &str, character_width: f64) -> f64 {
    LABEL_PADDING + label.chars().count() as f64 * character_width
}

/// Render a width with at least one decimal place (`27` becomes `27.0`).
pub fn format_width(width: f64) -> String {
    if width.fract() == 0.0 && width.is_finite() {
        format!("{width:.1}")
    } else {
        width.to_string()
    }
}

/// GraphML writer for yEd.
#[derive(Clone, Debug)]
pub struct GraphMl {
    style: NodeStyle,
    graph_id: String,
}

impl GraphMl {
    /// Create a writer. `graph_id` is stored as the id of the `<graph>`
    /// element, conventionally the output file name.
    pub fn new(style: NodeStyle, graph_id: impl Into<String>) -> Self {
        Self {
            style,
            graph_id: graph_id.into(),
        }
    }

    fn write_vertex<W: std::io::Write>(
        &self,
        writer: &mut Writer<W>,
        vertex: &RenderVertex,
    ) -> Result<()> {
        let mut node = BytesStart::new("node");
        node.push_attribute(("id", vertex.id.as_str()));
        emit(writer, Event::Start(node))?;

        let mut data = BytesStart::new("data");
        data.push_attribute(("key", "yednode"));
        emit(writer, Event::Start(data))?;
        emit(writer, Event::Start(BytesStart::new("y:ShapeNode")))?;

        let width = format_width(vertex_width(&vertex.label, self.style.character_width));
        let mut geometry = BytesStart::new("y:Geometry");
        geometry.push_attribute(("height", NODE_HEIGHT));
        geometry.push_attribute(("width", width.as_str()));
        emit(writer, Event::Empty(geometry))?;

        let mut fill = BytesStart::new("y:Fill");
        fill.push_attribute(("color", self.style.background(vertex)));
        fill.push_attribute(("transparent", "false"));
        emit(writer, Event::Empty(fill))?;

        let mut label = BytesStart::new("y:NodeLabel");
        label.push_attribute(("fontFamily", "Consolas"));
        label.push_attribute(("fontSize", "12"));
        if vertex.is_end {
            // Double frame for sentence-final vertices.
            label.push_attribute(("hasLineColor", "true"));
            label.push_attribute(("lineColor", "#000000"));
        }
        emit(writer, Event::Start(label))?;
        emit(
            writer,
            Event::Text(BytesText::from_escaped(escape_text(&vertex.label))),
        )?;
        emit(writer, Event::End(BytesEnd::new("y:NodeLabel")))?;

        let mut shape = BytesStart::new("y:Shape");
        shape.push_attribute(("type", "roundrectangle"));
        emit(writer, Event::Empty(shape))?;

        emit(writer, Event::End(BytesEnd::new("y:ShapeNode")))?;
        emit(writer, Event::End(BytesEnd::new("data")))?;
        emit(writer, Event::End(BytesEnd::new("node")))
    }

    fn write_edge<W: std::io::Write>(&self, writer: &mut Writer<W>, edge: &RenderEdge) -> Result<()> {
        let mut elem = BytesStart::new("edge");
        elem.push_attribute(("id", edge.id.as_str()));
        elem.push_attribute(("source", edge.source.as_str()));
        elem.push_attribute(("target", edge.target.as_str()));
        emit(writer, Event::Start(elem))?;

        let mut data = BytesStart::new("data");
        data.push_attribute(("key", "yededge"));
        emit(writer, Event::Start(data))?;
        emit(writer, Event::Start(BytesStart::new("y:PolyLineEdge")))?;

        let mut line = BytesStart::new("y:LineStyle");
        line.push_attribute(("color", "#000000"));
        line.push_attribute(("type", "line"));
        line.push_attribute(("width", "1.0"));
        emit(writer, Event::Empty(line))?;

        let mut arrows = BytesStart::new("y:Arrows");
        arrows.push_attribute(("source", "none"));
        arrows.push_attribute(("target", "standard"));
        emit(writer, Event::Empty(arrows))?;

        emit(writer, Event::End(BytesEnd::new("y:PolyLineEdge")))?;
        emit(writer, Event::End(BytesEnd::new("data")))?;
        emit(writer, Event::End(BytesEnd::new("edge")))
    }
}

impl GraphFormat for GraphMl {
    fn name(&self) -> &'static str {
        "GraphML"
    }

    fn extension(&self) -> &'static str {
        "graphml"
    }

    fn write(&self, graph: &RenderGraph) -> Result<Vec<u8>> {
        graph.check_endpoints()?;

        let mut buffer = Cursor::new(Vec::new());
        let mut writer = Writer::new_with_indent(&mut buffer, b' ', 2);

        emit(
            &mut writer,
            Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
        )?;

        let mut root = BytesStart::new("graphml");
        for &(name, value) in GRAPHML_NAMESPACES {
            root.push_attribute((name, value));
        }
        emit(&mut writer, Event::Start(root))?;
        emit(
            &mut writer,
            Event::Comment(BytesText::new(" keys for YEd ")),
        )?;
        for (target, id, kind) in [
            ("node", "yednode", "nodegraphics"),
            ("edge", "yededge", "edgegraphics"),
        ] {
            let mut key = BytesStart::new("key");
            key.push_attribute(("for", target));
            key.push_attribute(("id", id));
            key.push_attribute(("yfiles.type", kind));
            emit(&mut writer, Event::Empty(key))?;
        }

        let mut graph_elem = BytesStart::new("graph");
        graph_elem.push_attribute(("edgedefault", "directed"));
        graph_elem.push_attribute(("id", self.graph_id.as_str()));
        emit(&mut writer, Event::Start(graph_elem))?;

        for vertex in &graph.vertices {
            self.write_vertex(&mut writer, vertex)?;
        }
        for edge in &graph.edges {
            self.write_edge(&mut writer, edge)?;
        }

        emit(&mut writer, Event::End(BytesEnd::new("graph")))?;
        emit(&mut writer, Event::End(BytesEnd::new("graphml")))?;

        let mut output = buffer.into_inner();
        output.push(b'\n');
        Ok(output)
    }
}

fn emit<W: std::io::Write>(writer: &mut Writer<W>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| ParaphraseError::xml(format!("Write error: {e}")))
}
