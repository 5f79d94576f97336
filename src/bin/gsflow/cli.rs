//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// gsflow - name file tooling for coupled GSFLOW/MODFLOW models
#[derive(Parser)]
#[command(name = "gsflow")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only report errors; do not list unopenable package files
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Flags shared by commands that parse a name file.
#[derive(Debug, Clone, Copy)]
pub struct GlobalOptions {
    pub quiet: bool,
}

impl Cli {
    pub fn global_options(&self) -> GlobalOptions {
        GlobalOptions { quiet: self.quiet }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the unit registry built from a name file
    Units(UnitsArgs),

    /// Show the unit assigned to one or more file types
    Find(FindArgs),

    /// Show georeference attributes from a name file header
    Header(HeaderArgs),

    /// List known package types and their reserved units
    Packages(PackagesArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// How package paths in a name file are resolved.
#[derive(Args)]
pub struct AnchorArgs {
    /// Model workspace directory (defaults to the name file's directory)
    #[arg(short, long, env = "GSFLOW_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// GSFLOW control file to resolve package paths against
    #[arg(short, long, conflicts_with = "workspace")]
    pub control_file: Option<PathBuf>,
}

#[derive(Args)]
pub struct UnitsArgs {
    /// Name file to parse
    pub name_file: PathBuf,

    #[command(flatten)]
    pub anchor: AnchorArgs,

    /// Emit JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct FindArgs {
    /// Name file to parse
    pub name_file: PathBuf,

    /// File types to look up (case-insensitive)
    #[arg(required = true)]
    pub filetypes: Vec<String>,

    #[command(flatten)]
    pub anchor: AnchorArgs,
}

#[derive(Args)]
pub struct HeaderArgs {
    /// Name file to read
    pub name_file: PathBuf,

    /// Emit JSON instead of key/value lines
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct PackagesArgs {
    /// Workspace whose .gsflow/config.toml overrides apply
    #[arg(short, long, default_value = ".")]
    pub workspace: PathBuf,

    /// Emit JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
