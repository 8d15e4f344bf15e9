/// Ports module defining interfaces for hexagonal architecture
///
/// The outbound ports are the only seams between the graph rendering core
/// and the outside world (file system, console, output formats).
pub mod outbound;
