mod cli;
mod commands;
mod config;
mod formatters;
mod setup_wizard;
mod tables;
mod terminal_progress_reporter;

use std::process;

use anyhow::Context;
use clap::Parser;
use fagen::fs::{FileSystem, real::RealFileSystem};
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

use crate::{
    cli::ClapCli,
    commands::{Project, dispatch_command},
    terminal_progress_reporter::TerminalProgressReporter,
};

fn main() -> anyhow::Result<()> {
    let args = ClapCli::parse();

    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_ansi(!args.no_color)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Unable to install the log subscriber")?;

    debug!("CLI arguments: {:#?}", &args);

    let fs = RealFileSystem;
    let project_dir = match args.project_dir.as_ref() {
        Some(dir) => fs.expand_path(dir),
        None => fs.current_dir(),
    }
    .context("Unable to determine the project directory")?;
    debug!(project_dir = %project_dir.display(), "using project directory");

    let project = Project::new(fs, project_dir);
    let reporter = TerminalProgressReporter::new(!args.no_color);

    let exit_code = dispatch_command(&args, &project, reporter);

    process::exit(exit_code)
}
