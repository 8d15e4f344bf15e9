use crate::graph_rendering::domain::Graph;

/// GraphResponse - Response DTO from the render graph use case
///
/// Carries the domain graph; adapters pick the output format.
#[derive(Debug, Clone)]
pub struct GraphResponse {
    pub graph: Graph,
}

impl GraphResponse {
    pub fn new(graph: Graph) -> Self {
        Self { graph }
    }
}
