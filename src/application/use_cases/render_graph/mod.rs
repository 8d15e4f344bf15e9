use crate::application::dto::{GraphRequest, GraphResponse};
use crate::graph_rendering::services::HierarchyParser;
use crate::ports::outbound::{LockfileReader, ProgressReporter};
use crate::shared::error::GraphError;
use crate::shared::Result;


/// RenderGraphUseCase - Core use case turning a lockfile into a graph
///
/// This use case orchestrates reading and parsing using generic dependency
/// injection for its infrastructure dependencies.
///
/// # Type Parameters
/// * `LR` - LockfileReader implementation
/// * `PR` - ProgressReporter implementation
pub struct RenderGraphUseCase<LR, PR> {
    lockfile_reader: LR,
    progress_reporter: PR,
}

impl<LR, PR> RenderGraphUseCase<LR, PR>
where
    LR: LockfileReader,
    PR: ProgressReporter,
{
    /// Creates a new RenderGraphUseCase with injected dependencies
    pub fn new(lockfile_reader: LR, progress_reporter: PR) -> Self {
        Self {
            lockfile_reader,
            progress_reporter,
        }
    }

    /// Executes the render graph use case
    ///
    /// # Arguments
    /// * `request` - Request naming the lockfile to read
    ///
    /// # Returns
    /// GraphResponse holding the parsed graph
    ///
    /// # Errors
    /// Returns an error if the lockfile cannot be read, or a
    /// `GraphError::LockfileParseError` if its contents do not form a
    /// consistent hierarchy.
    pub fn execute(&self, request: GraphRequest) -> Result<GraphResponse> {
        // Step 1: Read lockfile
        self.progress_reporter.report(&format!(
            "📖 Loading Podfile.lock from: {}",
            request.lockfile_path.display()
        ));
        let content = self.lockfile_reader.read_lockfile(&request.lockfile_path)?;

        // Step 2: Parse into a graph
        let graph = HierarchyParser::parse(&content).map_err(|e| {
            tracing::warn!(path = %request.lockfile_path.display(), "lockfile rejected by parser");
            GraphError::LockfileParseError {
                path: request.lockfile_path.clone(),
                details: e.to_string(),
            }
        })?;

        let root_count = graph.root_libraries().len();
        self.progress_reporter.report(&format!(
            "✅ Detected {} library(ies), {} root(s), {} dependency edge(s)",
            graph.library_count(),
            root_count,
            graph.edges().len() - root_count
        ));

        Ok(GraphResponse::new(graph))
    }
}
