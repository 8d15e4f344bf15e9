use serde::Serialize;

/// Id of the synthetic node every root library hangs from
pub const APP_NODE_ID: &str = "App";

/// Node value object: one library, or the synthetic app root
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Node {
    id: String,
}

impl Node {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Edge value object: `source` depends on `target`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    source: String,
    target: String,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

/// Graph aggregate ready for a rendering front end
///
/// Holds exactly one [`APP_NODE_ID`] node with an edge to every root
/// library, plus one edge per (library, dependency) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl Graph {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.iter().any(|node| node.id() == id)
    }

    /// Number of library nodes, not counting the app root
    pub fn library_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|node| node.id() != APP_NODE_ID)
            .count()
    }

    /// Libraries linked directly from the app root
    pub fn root_libraries(&self) -> Vec<&str> {
        self.dependencies_of(APP_NODE_ID)
    }

    /// Targets of every edge leaving `id`, in edge order
    pub fn dependencies_of(&self, id: &str) -> Vec<&str> {
        self.edges
            .iter()
            .filter(|edge| edge.source() == id)
            .map(Edge::target)
            .collect()
    }
}
