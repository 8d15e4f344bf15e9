pub mod graph;
pub mod hierarchy;
pub mod line_kind;

pub use graph::{Edge, Graph, Node, APP_NODE_ID};
pub use hierarchy::Hierarchy;
pub use line_kind::LineKind;
