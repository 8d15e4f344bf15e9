use super::elements_json_formatter::Elements;
use crate::graph_rendering::domain::Graph;
use crate::ports::outbound::GraphFormatter;
use crate::shared::Result;

/// Placeholder replaced by the serialized graph elements
const ELEMENTS_PLACEHOLDER: &str = "__GRAPH_ELEMENTS__";

const PAGE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Pod dependency graph</title>
<script src="https://unpkg.com/cytoscape@3.28.1/dist/cytoscape.min.js"></script>
<script src="https://unpkg.com/dagre@0.8.5/dist/dagre.min.js"></script>
<script src="https://unpkg.com/cytoscape-dagre@2.5.0/cytoscape-dagre.js"></script>
<style>
  html, body { margin: 0; height: 100%; font-family: sans-serif; }
  #graph { width: 100%; height: 100%; }
</style>
</head>
<body>
<div id="graph"></div>
<script>
  const elements = __GRAPH_ELEMENTS__;
  cytoscape({
    container: document.getElementById("graph"),
    elements: elements,
    layout: { name: "dagre", rankDir: "LR" },
    style: [
      { selector: "node", style: { "label": "data(id)", "background-color": "#4a90d9" } },
      { selector: "node[id = 'App']", style: { "background-color": "#d9534f" } },
      { selector: "edge", style: { "curve-style": "bezier", "target-arrow-shape": "triangle" } }
    ]
  });
</script>
</body>
</html>
"##;

/// HtmlFormatter adapter producing a standalone page that draws the graph
///
/// The elements document is embedded inline and rendered client-side with
/// cytoscape and the dagre layout.
pub struct HtmlFormatter;

impl HtmlFormatter {
    pub fn new() -> Self {
        Self
    }

    /// A `</script>` inside a library name must not close the script block
    fn escape_for_script(json: &str) -> String {
        json.replace("</", "<\\/")
    }
}

impl Default for HtmlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphFormatter for HtmlFormatter {
    fn format(&self, graph: &Graph) -> Result<String> {
        let json = serde_json::to_string(&Elements::from_graph(graph))
            .map_err(|e| anyhow::anyhow!("Failed to serialize graph elements: {}", e))?;
        Ok(PAGE_TEMPLATE.replace(ELEMENTS_PLACEHOLDER, &Self::escape_for_script(&json)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph_rendering::domain::{Edge, Node, APP_NODE_ID};

    #[test]
    fn test_format_embeds_elements() {
        let graph = Graph::new(
            vec![Node::new(APP_NODE_ID), Node::new("CarHole")],
            vec![Edge::new(APP_NODE_ID, "CarHole")],
        );
        let output = HtmlFormatter::new().format(&graph).unwrap();

        assert!(output.starts_with("<!DOCTYPE html>"));
        assert!(output.contains(r#"{"data":{"id":"CarHole"}}"#));
        assert!(output.contains(r#"{"data":{"source":"App","target":"CarHole"}}"#));
        assert!(!output.contains(ELEMENTS_PLACEHOLDER));
    }

    #[test]
    fn test_format_escapes_closing_tags() {
        let graph = Graph::new(
            vec![Node::new(APP_NODE_ID), Node::new("</script>")],
            vec![Edge::new(APP_NODE_ID, "</script>")],
        );
        let output = HtmlFormatter::new().format(&graph).unwrap();

        assert!(output.contains(r#"<\/script>"#));
        assert_eq!(output.matches("</script>").count(), 4);
    }
}
