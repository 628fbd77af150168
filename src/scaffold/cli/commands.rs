//! # CLI Layer
//!
//! This module is **one possible UI client** for scaffold; the library does the
//! work. It is the only place that:
//! - Parses arguments
//! - Writes to stdout
//! - Decides the process exit code
//!
//! ## Flow
//!
//! 1. `--list` prints the component names and returns without looking at the
//!    filesystem.
//! 2. Otherwise the project is initialized from `--directory` (or the current
//!    directory), the component is generated, and the command messages are
//!    printed.
//! 3. Next steps are only printed when the primary file was written.
//!
//! Errors bubble up as [`scaffold::error::ScaffoldError`]; `main.rs` prints them
//! to stderr together with a hint when there is one.

use super::render::{print_messages, render_component_list, render_next_steps};
use super::setup::Cli;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use scaffold::api::{list_components, CmdMessage};
use scaffold::error::Result;
use scaffold::init::initialize;
use std::process::ExitCode;

pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.list {
        let result = list_components();
        print!("{}", render_component_list(&result.components));
        return Ok(ExitCode::SUCCESS);
    }

    let Some(component) = cli.component else {
        Cli::command()
            .error(
                ErrorKind::MissingRequiredArgument,
                "a component is required unless --list is given",
            )
            .exit();
    };

    let root = match cli.directory {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let ctx = initialize(&root)?;

    print_messages(
        &[CmdMessage::info(format!(
            "Adding {} to {}...",
            component, ctx.render.component_name
        ))],
        cli.verbose,
    );

    let result = ctx.api.generate(component, &ctx.render, cli.force)?;
    print_messages(&result.messages, cli.verbose);

    if !result.is_success() {
        return Ok(ExitCode::FAILURE);
    }

    let paths = ctx.api.paths();
    let edit_path = result
        .primary()
        .map(|primary| paths.display(&primary.path))
        .unwrap_or_default();
    let test_path = paths.display(&paths.test_file(component));
    print!("{}", render_next_steps(component, &edit_path, &test_path));

    Ok(ExitCode::SUCCESS)
}
