use clap::Parser;
use pod_graph::application::dto::OutputFormat;
use pod_graph::shared::error::ExitCode;
use std::process;

/// Render the dependency graph of a CocoaPods project
#[derive(Parser, Debug)]
#[command(name = "pod-graph")]
#[command(version)]
#[command(about = "Render the dependency graph of a CocoaPods Podfile.lock", long_about = None)]
pub struct Args {
    /// Output format: json, markdown (md) or html [default: json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Podfile.lock, or a directory containing one (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<String>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Config file path (defaults to pod-graph.config.yml next to the lockfile)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    /// Only print errors on stderr
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Parses the process arguments, exiting on `--help`, `--version` or bad input
    pub fn parse_args() -> Self {
        Self::try_parse().unwrap_or_else(|e| {
            let code = Self::exit_code_for(&e);
            let _ = e.print();
            process::exit(code.as_i32());
        })
    }

    /// Help and version requests are not failures
    fn exit_code_for(error: &clap::Error) -> ExitCode {
        if error.use_stderr() {
            ExitCode::InvalidArguments
        } else {
            ExitCode::Success
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["pod-graph"]).unwrap();
        assert!(args.format.is_none());
        assert!(args.path.is_none());
        assert!(args.output.is_none());
        assert!(args.config.is_none());
        assert!(!args.quiet);
        assert!(!args.verbose);
    }

    #[test]
    fn test_args_format_parsing() {
        let args = Args::try_parse_from(["pod-graph", "-f", "MD"]).unwrap();
        assert_eq!(args.format, Some(OutputFormat::Markdown));

        let args = Args::try_parse_from(["pod-graph", "--format", "html"]).unwrap();
        assert_eq!(args.format, Some(OutputFormat::Html));
    }

    #[test]
    fn test_args_invalid_format() {
        assert!(Args::try_parse_from(["pod-graph", "-f", "svg"]).is_err());
    }

    #[test]
    fn test_args_all_flags() {
        let args = Args::try_parse_from([
            "pod-graph",
            "-p",
            "ios/Podfile.lock",
            "-o",
            "graph.json",
            "-c",
            "custom.yml",
            "-q",
            "-v",
        ])
        .unwrap();

        assert_eq!(args.path.as_deref(), Some("ios/Podfile.lock"));
        assert_eq!(args.output.as_deref(), Some("graph.json"));
        assert_eq!(args.config.as_deref(), Some("custom.yml"));
        assert!(args.quiet);
        assert!(args.verbose);
    }

    #[test]
    fn test_exit_code_for_invalid_arguments() {
        let err = Args::try_parse_from(["pod-graph", "--invalid-option"]).unwrap_err();
        assert_eq!(Args::exit_code_for(&err), ExitCode::InvalidArguments);
    }

    #[test]
    fn test_exit_code_for_help_and_version() {
        let err = Args::try_parse_from(["pod-graph", "--help"]).unwrap_err();
        assert_eq!(Args::exit_code_for(&err), ExitCode::Success);

        let err = Args::try_parse_from(["pod-graph", "--version"]).unwrap_err();
        assert_eq!(Args::exit_code_for(&err), ExitCode::Success);
    }
}
