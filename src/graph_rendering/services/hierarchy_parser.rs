use crate::graph_rendering::domain::{Edge, Graph, Hierarchy, Node, APP_NODE_ID};
use crate::shared::error::ParseError;

/// Marker that ends the PODS section of a lockfile
const DEPENDENCIES_MARKER: &str = "DEPENDENCIES:";

/// HierarchyParser service turning lockfile text into a renderable graph
///
/// This service contains pure business logic. It has no I/O dependencies
/// and keeps no state between calls.
pub struct HierarchyParser;

impl HierarchyParser {
    /// Parses the full contents of a Podfile.lock into a graph
    ///
    /// # Arguments
    /// * `lockfile` - The raw lockfile text, with `\n` or `\r\n` line breaks
    ///
    /// # Returns
    /// A Graph rooted at the synthetic `App` node
    ///
    /// # Errors
    /// Returns a `ParseError` if:
    /// - The section contains no library headers
    /// - A dependency is never declared as a library at the top level
    /// - A library is named after the synthetic `App` root
    pub fn parse(lockfile: &str) -> Result<Graph, ParseError> {
        let line_break = if lockfile.contains('\r') { "\r\n" } else { "\n" };

        let section = Self::pods_section(lockfile);
        let hierarchy = Hierarchy::from_lines(section.split(line_break));

        if hierarchy.is_empty() {
            tracing::debug!("no library headers found in lockfile section");
            return Err(ParseError);
        }

        Self::validate(&hierarchy)?;

        let graph = Self::render(&hierarchy);
        tracing::debug!(
            nodes = graph.nodes().len(),
            edges = graph.edges().len(),
            "parsed lockfile hierarchy"
        );
        Ok(graph)
    }

    /// Returns the text before the DEPENDENCIES marker, or everything if absent
    fn pods_section(lockfile: &str) -> &str {
        lockfile
            .split_once(DEPENDENCIES_MARKER)
            .map_or(lockfile, |(section, _)| section)
    }

    /// Every dependency must also exist at the top level, and no library may
    /// take the root node's id
    fn validate(hierarchy: &Hierarchy) -> Result<(), ParseError> {
        if hierarchy.dependencies_of(APP_NODE_ID).is_some() {
            tracing::debug!(library = APP_NODE_ID, "library name collides with the root node");
            return Err(ParseError);
        }
        if let Some(dependency) = hierarchy.first_undeclared_dependency() {
            tracing::debug!(%dependency, "dependency is not declared as a library");
            return Err(ParseError);
        }
        Ok(())
    }

    fn render(hierarchy: &Hierarchy) -> Graph {
        let mut nodes = Vec::with_capacity(hierarchy.library_count() + 1);
        nodes.push(Node::new(APP_NODE_ID));

        let mut edges: Vec<Edge> = hierarchy
            .root_libraries()
            .into_iter()
            .map(|root| Edge::new(APP_NODE_ID, root))
            .collect();

        for (library, dependencies) in hierarchy.libraries() {
            nodes.push(Node::new(library.as_str()));
            edges.extend(
                dependencies
                    .iter()
                    .map(|dependency| Edge::new(library.as_str(), dependency.as_str())),
            );
        }

        Graph::new(nodes, edges)
    }
}
