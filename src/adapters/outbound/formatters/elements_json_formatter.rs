use crate::graph_rendering::domain::Graph;
use crate::ports::outbound::GraphFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub(super) struct Elements<'a> {
    nodes: Vec<Element<NodeData<'a>>>,
    edges: Vec<Element<EdgeData<'a>>>,
}

/// Graph front ends expect every record wrapped in a `data` object
#[derive(Debug, Serialize)]
struct Element<T> {
    data: T,
}

#[derive(Debug, Serialize)]
struct NodeData<'a> {
    id: &'a str,
}

#[derive(Debug, Serialize)]
struct EdgeData<'a> {
    source: &'a str,
    target: &'a str,
}

impl<'a> Elements<'a> {
    pub(super) fn from_graph(graph: &'a Graph) -> Self {
        Self {
            nodes: graph
                .nodes()
                .iter()
                .map(|node| Element {
                    data: NodeData { id: node.id() },
                })
                .collect(),
            edges: graph
                .edges()
                .iter()
                .map(|edge| Element {
                    data: EdgeData {
                        source: edge.source(),
                        target: edge.target(),
                    },
                })
                .collect(),
        }
    }
}

/// ElementsJsonFormatter adapter for the graph-rendering "elements" document
///
/// Produces `{"nodes": [{"data": {"id"}}], "edges": [{"data": {"source", "target"}}]}`,
/// the shape dagre and cytoscape based front ends consume directly.
pub struct ElementsJsonFormatter;

impl ElementsJsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ElementsJsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphFormatter for ElementsJsonFormatter {
    fn format(&self, graph: &Graph) -> Result<String> {
        let mut json = serde_json::to_string_pretty(&Elements::from_graph(graph))
            .map_err(|e| anyhow::anyhow!("Failed to serialize graph elements: {}", e))?;
        json.push('\n');
        Ok(json)
    }
}
