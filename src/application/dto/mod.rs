/// Data Transfer Objects for application layer
///
/// DTOs carry data between the CLI adapter and the use case, keeping the
/// graph rendering domain free of CLI concerns.
mod graph_request;
mod graph_response;
mod output_format;

pub use graph_request::GraphRequest;
pub use graph_response::GraphResponse;
pub use output_format::OutputFormat;
