//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Linkfile reference tag generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: linkfile.toml)
    #[arg(short = 'C', long, default_value = "linkfile.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Render reference tags for project files
    #[command(visible_alias = "l")]
    Link {
        #[command(flatten)]
        args: LinkArgs,
    },

    /// Render reference tags for remote URLs
    #[command(visible_alias = "u")]
    Url {
        #[command(flatten)]
        args: UrlArgs,
    },

    /// Remove link constructs that reference a file
    #[command(visible_alias = "s")]
    Strip {
        #[command(flatten)]
        args: StripArgs,
    },

    /// Show the detected content kind of paths
    #[command(visible_alias = "c")]
    Classify {
        #[command(flatten)]
        args: ClassifyArgs,
    },
}

/// Link command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct LinkArgs {
    /// Target files to link
    #[arg(value_name = "TARGET", required = true, value_hint = clap::ValueHint::FilePath)]
    pub targets: Vec<PathBuf>,

    /// Host document receiving the tags
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub doc: PathBuf,

    /// Override the host document kind (html, php, css)
    #[arg(short = 'k', long, value_name = "KIND")]
    pub doc_kind: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Url command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct UrlArgs {
    /// URLs to link
    #[arg(value_name = "URL", required = true, value_hint = clap::ValueHint::Url)]
    pub urls: Vec<String>,

    /// Host document the tags are meant for
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub doc: Option<PathBuf>,

    /// Host document kind (html, php, css); required without --doc
    #[arg(short = 'k', long, value_name = "KIND")]
    pub doc_kind: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Strip command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct StripArgs {
    /// File whose references should be removed
    #[arg(value_name = "TARGET", value_hint = clap::ValueHint::FilePath)]
    pub target: PathBuf,

    /// Document to clean up
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub doc: PathBuf,

    /// Override the host document kind (html, php, css)
    #[arg(short = 'k', long, value_name = "KIND")]
    pub doc_kind: Option<String>,

    /// Override the target content kind
    #[arg(short = 't', long, value_name = "KIND")]
    pub target_kind: Option<String>,

    /// Rewrite the document in place instead of printing
    #[arg(short, long)]
    pub write: bool,
}

/// Classify command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ClassifyArgs {
    /// Paths to classify
    #[arg(value_name = "PATH", required = true, value_hint = clap::ValueHint::AnyPath)]
    pub paths: Vec<PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Shared output arguments
#[derive(clap::Args, Debug, Clone)]
pub struct OutputArgs {
    /// Emit JSON instead of plain lines
    #[arg(short, long)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,
}
