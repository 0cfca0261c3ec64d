//! ccon - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;

use color_console::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Demo => commands::demo::handle(),
        Commands::Confirm {
            message,
            default_no,
            json,
        } => commands::prompt::confirm(&message, !default_no, json),
        Commands::Choose {
            message,
            options,
            default,
            json,
        } => commands::prompt::choose(&message, &options, default, json),
        Commands::Pick {
            message,
            options,
            defaults,
            json,
        } => commands::prompt::pick(&message, &options, &defaults, json),
        Commands::Progress {
            max,
            delay_ms,
            style,
            show_non_interactive,
        } => commands::progress::handle(max, delay_ms, style, show_non_interactive),
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}
