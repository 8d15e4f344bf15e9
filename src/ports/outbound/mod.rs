/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to read lockfiles, render graphs and talk to the console.
pub mod graph_formatter;
pub mod lockfile_reader;
pub mod output_presenter;
pub mod progress_reporter;

pub use graph_formatter::GraphFormatter;
pub use lockfile_reader::LockfileReader;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
