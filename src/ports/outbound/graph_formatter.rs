use crate::graph_rendering::domain::Graph;
use crate::shared::Result;

/// GraphFormatter port for turning a parsed graph into an output document
///
/// Each implementation owns one wire or display format (graph-rendering
/// JSON, Markdown, HTML); the domain graph knows none of them.
pub trait GraphFormatter {
    /// Formats the graph
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, graph: &Graph) -> Result<String>;
}
