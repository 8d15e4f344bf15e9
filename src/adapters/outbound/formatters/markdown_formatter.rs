use crate::graph_rendering::domain::{Graph, APP_NODE_ID};
use crate::ports::outbound::GraphFormatter;
use crate::shared::Result;
use std::fmt::Write;

/// Markdown table header for library information
const TABLE_HEADER: &str = "| Library | Dependencies |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str = "|---------|--------------|\n";

/// MarkdownFormatter adapter for a human-readable dependency report
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn render_summary(output: &mut String, graph: &Graph) -> std::fmt::Result {
        let roots = graph.root_libraries();
        let dependency_edges = graph.edges().len() - roots.len();

        writeln!(output, "## Summary")?;
        writeln!(output)?;
        writeln!(output, "- Libraries: {}", graph.library_count())?;
        writeln!(output, "- Root libraries: {}", roots.len())?;
        writeln!(output, "- Dependency edges: {}", dependency_edges)?;
        writeln!(output)
    }

    fn render_roots(output: &mut String, graph: &Graph) -> std::fmt::Result {
        writeln!(output, "## Root Libraries")?;
        writeln!(output)?;

        let roots = graph.root_libraries();
        if roots.is_empty() {
            // Only possible when every library sits on a dependency cycle
            writeln!(output, "*None*")?;
        }
        for root in roots {
            writeln!(output, "- {}", root)?;
        }
        writeln!(output)
    }

    fn render_libraries(output: &mut String, graph: &Graph) -> std::fmt::Result {
        writeln!(output, "## Libraries")?;
        writeln!(output)?;
        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);

        for node in graph.nodes().iter().filter(|n| n.id() != APP_NODE_ID) {
            let dependencies = graph.dependencies_of(node.id());
            let cell = if dependencies.is_empty() {
                "-".to_string()
            } else {
                dependencies
                    .iter()
                    .map(|dep| Self::escape_markdown_table_cell(dep))
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            writeln!(
                output,
                "| {} | {} |",
                Self::escape_markdown_table_cell(node.id()),
                cell
            )?;
        }
        Ok(())
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphFormatter for MarkdownFormatter {
    fn format(&self, graph: &Graph) -> Result<String> {
        let mut output = String::from("# Pod Dependency Graph\n\n");

        Self::render_summary(&mut output, graph)
            .and_then(|_| Self::render_roots(&mut output, graph))
            .and_then(|_| Self::render_libraries(&mut output, graph))
            .map_err(|e| anyhow::anyhow!("Failed to render Markdown report: {}", e))?;

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph_rendering::domain::{Edge, Node};

    fn sample_graph() -> Graph {
        Graph::new(
            vec![
                Node::new(APP_NODE_ID),
                Node::new("DentalPlan"),
                Node::new("LisaNeedsBraces"),
            ],
            vec![
                Edge::new(APP_NODE_ID, "DentalPlan"),
                Edge::new("DentalPlan", "LisaNeedsBraces"),
            ],
        )
    }

    #[test]
    fn test_format_summary() {
        let output = MarkdownFormatter::new().format(&sample_graph()).unwrap();

        assert!(output.starts_with("# Pod Dependency Graph"));
        assert!(output.contains("- Libraries: 2"));
        assert!(output.contains("- Root libraries: 1"));
        assert!(output.contains("- Dependency edges: 1"));
    }

    #[test]
    fn test_format_roots_and_table() {
        let output = MarkdownFormatter::new().format(&sample_graph()).unwrap();

        assert!(output.contains("## Root Libraries\n\n- DentalPlan\n"));
        assert!(output.contains(TABLE_HEADER));
        assert!(output.contains("| DentalPlan | LisaNeedsBraces |"));
        assert!(output.contains("| LisaNeedsBraces | - |"));
        assert!(!output.contains("| App |"));
    }

    #[test]
    fn test_format_no_roots() {
        let graph = Graph::new(
            vec![Node::new(APP_NODE_ID), Node::new("A"), Node::new("B")],
            vec![Edge::new("A", "B"), Edge::new("B", "A")],
        );
        let output = MarkdownFormatter::new().format(&graph).unwrap();

        assert!(output.contains("*None*"));
    }

    #[test]
    fn test_escape_markdown_table_cell() {
        assert_eq!(
            MarkdownFormatter::escape_markdown_table_cell("a|b\nc"),
            "a\\|b c"
        );
    }
}
