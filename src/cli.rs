use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

use depsync::application::dto::OutputFormat;

/// Detect dependency version drift across go.mod files
#[derive(Parser, Debug)]
#[command(name = "depsync")]
#[command(version)]
#[command(
    about = "Report Go module dependencies required at different versions across go.mod files",
    long_about = None
)]
pub struct Args {
    /// go.mod files, go.work files or directories containing either
    /// (an empty path is the current directory)
    #[arg(value_name = "PATH", value_parser = clap::value_parser!(OsString))]
    pub paths: Vec<OsString>,

    /// Output format: text, json or markdown [default: text]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Ignore dependencies matching patterns (supports wildcards: *)
    /// Can be specified multiple times: -i "golang.org/x/*" -i "example.com/tools"
    #[arg(short, long = "ignore", value_name = "PATTERN")]
    pub ignore: Vec<String>,

    /// Skip requirements marked `// indirect`
    #[arg(long)]
    pub skip_indirect: bool,

    /// Config file path (defaults to ./depsync.config.yml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// One-line usage, printed when no path is given
    pub fn usage() -> String {
        Self::command().render_usage().to_string()
    }
}
