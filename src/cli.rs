use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use ctob::{BuildScope, WalkMode};

/// Default solution manifest, looked up in the working directory
pub const DEFAULT_MANIFEST: &str = "ctob-solution.toml";

/// ctob - run custom tools (code generators) before a build, only when stale
#[derive(Parser, Debug)]
#[command(name = "ctob")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI (NDJSON)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the custom tools of stale items
    Build(BuildArgs),

    /// Show what a build would regenerate, without running or recording anything
    Check(BuildArgs),

    /// List the reference files a template declares
    Refs {
        /// Template file to scan
        file: PathBuf,

        /// Resolve placeholders against this solution manifest
        #[arg(short, long)]
        manifest: Option<PathBuf>,

        /// Active configuration used for placeholder substitution
        #[arg(short, long)]
        configuration: Option<String>,
    },

    /// Edit the build toggles of an item
    Set {
        /// Item path
        item: PathBuf,

        /// Solution manifest
        #[arg(short, long, default_value = DEFAULT_MANIFEST)]
        manifest: PathBuf,

        /// Run the item's custom tool when a build begins
        #[arg(long, value_name = "BOOL")]
        run_on_build: Option<bool>,

        /// Run the item's custom tool on every build
        #[arg(long, value_name = "BOOL")]
        always_run: Option<bool>,
    },

    /// Show an item's toggles, session stamp and current verdict
    Show {
        /// Item path
        item: PathBuf,

        /// Solution manifest
        #[arg(short, long, default_value = DEFAULT_MANIFEST)]
        manifest: PathBuf,

        /// Active configuration (overrides the manifest)
        #[arg(short, long)]
        configuration: Option<String>,
    },
}

/// Inputs shared by `build` and `check`
#[derive(Args, Debug, Clone)]
pub struct BuildArgs {
    /// Solution manifest
    #[arg(short, long, default_value = DEFAULT_MANIFEST)]
    pub manifest: PathBuf,

    /// Build the whole solution or the current project only
    #[arg(long, value_enum, default_value_t = ScopeArg::Solution)]
    pub scope: ScopeArg,

    /// Current project for a project-scoped build
    #[arg(short, long)]
    pub project: Option<String>,

    /// Active configuration (overrides the manifest)
    #[arg(short, long)]
    pub configuration: Option<String>,

    /// How the walk descends into child items (overrides config)
    #[arg(long, value_enum)]
    pub walk_mode: Option<WalkModeArg>,

    /// Keep session stamps in per-project sidecar files
    #[arg(long)]
    pub sidecar: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScopeArg {
    Solution,
    Project,
}

impl From<ScopeArg> for BuildScope {
    fn from(scope: ScopeArg) -> Self {
        match scope {
            ScopeArg::Solution => BuildScope::Solution,
            ScopeArg::Project => BuildScope::Project,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WalkModeArg {
    Recursive,
    Legacy,
}

impl From<WalkModeArg> for WalkMode {
    fn from(mode: WalkModeArg) -> Self {
        match mode {
            WalkModeArg::Recursive => WalkMode::Recursive,
            WalkModeArg::Legacy => WalkMode::Legacy,
        }
    }
}
