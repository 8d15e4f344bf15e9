/// Graph rendering domain - Pure lockfile parsing and graph construction
///
/// Nothing in this module performs I/O; it turns lockfile text into
/// domain objects and back into a renderable graph.
pub mod domain;
pub mod services;
