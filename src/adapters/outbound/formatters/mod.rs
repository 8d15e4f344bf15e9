/// Formatter adapters for the supported graph output formats
mod elements_json_formatter;
mod html_formatter;
mod markdown_formatter;

pub use elements_json_formatter::ElementsJsonFormatter;
pub use html_formatter::HtmlFormatter;
pub use markdown_formatter::MarkdownFormatter;
