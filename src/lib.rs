//! pod-graph - Dependency graph generator for CocoaPods projects
//!
//! This library turns the `PODS:` section of a `Podfile.lock` into a graph of
//! nodes and edges rooted at a synthetic `App` node, ready for a graph
//! rendering front end. It follows a hexagonal layout.
//!
//! # Architecture
//!
//! - **Domain Layer** (`graph_rendering`): Pure lockfile parsing and graph construction
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): File system, console and output format implementations
//! - **Shared** (`shared`): Error types and common utilities
//!
//! # Example
//!
//! ```
//! use pod_graph::prelude::*;
//!
//! let lockfile = "PODS:\n  - Alamofire (5.8.0)\n  - Moya (15.0.0):\n    - Alamofire (~> 5.0)\n";
//! let graph = HierarchyParser::parse(lockfile).unwrap();
//!
//! assert_eq!(graph.root_libraries(), vec!["Moya"]);
//! assert_eq!(graph.dependencies_of("Moya"), vec!["Alamofire"]);
//! ```

pub mod adapters;
pub mod application;
pub mod graph_rendering;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        ElementsJsonFormatter, HtmlFormatter, MarkdownFormatter,
    };
    pub use crate::application::dto::{GraphRequest, GraphResponse, OutputFormat};
    pub use crate::application::use_cases::RenderGraphUseCase;
    pub use crate::graph_rendering::domain::{Edge, Graph, Hierarchy, LineKind, Node, APP_NODE_ID};
    pub use crate::graph_rendering::services::HierarchyParser;
    pub use crate::ports::outbound::{
        GraphFormatter, LockfileReader, OutputPresenter, ProgressReporter,
    };
    pub use crate::shared::error::{GraphError, ParseError};
    pub use crate::shared::Result;
}
