//! ctob CLI - run custom tools (code generators) before a build
//!
//! Usage: ctob <COMMAND>
//!
//! Commands:
//!   build   Run the custom tools of stale items
//!   check   Show what a build would regenerate
//!   refs    List the reference files a template declares
//!   set     Edit the build toggles of an item
//!   show    Show an item's toggles, stamp and verdict

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build(args) => commands::build::cmd_build(&args, false, cli.json, cli.verbose),
        Commands::Check(args) => commands::build::cmd_build(&args, true, cli.json, cli.verbose),
        Commands::Refs {
            file,
            manifest,
            configuration,
        } => commands::refs::cmd_refs(
            &file,
            manifest.as_deref(),
            configuration.as_deref(),
            cli.json,
            cli.verbose,
        ),
        Commands::Set {
            item,
            manifest,
            run_on_build,
            always_run,
        } => commands::item::cmd_set(
            &manifest,
            &item,
            run_on_build,
            always_run,
            cli.json,
            cli.verbose,
        ),
        Commands::Show {
            item,
            manifest,
            configuration,
        } => commands::item::cmd_show(
            &manifest,
            &item,
            configuration.as_deref(),
            cli.json,
            cli.verbose,
        ),
    }
}
