//! xtask - Build tasks for ccon
//!
//! Run with: cargo xtask <command>
//!
//! Commands:
//! - gen-docs: Generate documentation (man pages, COMMANDS.md)

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Arg, Command, CommandFactory, Parser, Subcommand};

use color_console::cli::Cli;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build tasks for ccon")]
struct Xtask {
    #[command(subcommand)]
    command: XtaskCommand,
}

#[derive(Subcommand)]
enum XtaskCommand {
    /// Generate documentation from CLI definitions
    #[command(name = "gen-docs")]
    GenDocs {
        /// Output directory (default: docs/)
        #[arg(long, short, default_value = "docs")]
        output: PathBuf,

        /// Generate man pages
        #[arg(long)]
        man: bool,

        /// Generate COMMANDS.md
        #[arg(long)]
        markdown: bool,
    },
}

fn main() -> Result<()> {
    let args = Xtask::parse();

    match args.command {
        XtaskCommand::GenDocs {
            output,
            man,
            markdown,
        } => {
            // No format flag means every format
            let gen_all = !man && !markdown;

            if gen_all || man {
                generate_man_pages(&output)?;
            }
            if gen_all || markdown {
                generate_markdown(&output)?;
            }
        }
    }

    Ok(())
}

/// Generate man pages using clap_mangen
fn generate_man_pages(output: &Path) -> Result<()> {
    let man_dir = output.join("man");
    fs::create_dir_all(&man_dir).context("Failed to create man directory")?;

    let cmd = Cli::command();
    render_man(&cmd, &man_dir.join("ccon.1"))?;

    for subcommand in visible_subcommands(&cmd) {
        let path = man_dir.join(format!("ccon-{}.1", subcommand.get_name()));
        render_man(subcommand, &path)?;
    }

    println!("Man pages generated in {}", man_dir.display());
    Ok(())
}

/// Generate COMMANDS.md markdown documentation
fn generate_markdown(output: &Path) -> Result<()> {
    fs::create_dir_all(output).context("Failed to create output directory")?;

    let cmd = Cli::command();
    let mut markdown = String::new();

    markdown.push_str("# ccon Command Reference\n\n");
    markdown.push_str("This document is auto-generated from the CLI definitions.\n\n");
    markdown.push_str("## Table of Contents\n\n");
    for subcommand in visible_subcommands(&cmd) {
        let name = subcommand.get_name();
        markdown.push_str(&format!("- [{}](#ccon-{})\n", name, name));
    }
    markdown.push_str("\n---\n\n");

    markdown.push_str("## ccon\n\n");
    if let Some(about) = cmd.get_about() {
        markdown.push_str(&format!("{}\n\n", about));
    }
    if let Some(long_about) = cmd.get_long_about() {
        markdown.push_str(&format!("```\n{}\n```\n\n", long_about));
    }

    for subcommand in visible_subcommands(&cmd) {
        markdown.push_str(&format!("## ccon {}\n\n", subcommand.get_name()));
        if let Some(about) = subcommand.get_about() {
            markdown.push_str(&format!("{}\n\n", about));
        }

        let args: Vec<&Arg> = subcommand
            .get_arguments()
            .filter(|a| !matches!(a.get_id().as_str(), "help" | "version"))
            .collect();
        let positional: Vec<&Arg> = args.iter().copied().filter(|a| a.is_positional()).collect();
        let options: Vec<&Arg> = args.iter().copied().filter(|a| !a.is_positional()).collect();

        if !positional.is_empty() {
            markdown.push_str("### Arguments\n\n");
            for arg in positional {
                let name = format!("<{}>", arg.get_id().as_str().to_uppercase());
                push_arg(&mut markdown, &name, arg);
            }
            markdown.push('\n');
        }

        if !options.is_empty() {
            markdown.push_str("### Options\n\n");
            for arg in options {
                let long = arg.get_long().map(|l| format!("--{}", l));
                let short = arg.get_short().map(|s| format!("-{}", s));
                let flag = match (long, short) {
                    (Some(l), Some(s)) => format!("{}, {}", s, l),
                    (Some(l), None) => l,
                    (None, Some(s)) => s,
                    _ => continue,
                };
                push_arg(&mut markdown, &flag, arg);
            }
            markdown.push('\n');
        }

        if let Some(long_about) = subcommand.get_long_about() {
            markdown.push_str("### Description\n\n");
            markdown.push_str(&format!("```\n{}\n```\n\n", long_about));
        }
    }

    let path = output.join("COMMANDS.md");
    fs::write(&path, markdown).context("Failed to write COMMANDS.md")?;
    println!("Generated: {}", path.display());
    Ok(())
}

fn render_man(cmd: &Command, path: &Path) -> Result<()> {
    let mut buffer = Vec::new();
    clap_mangen::Man::new(cmd.clone()).render(&mut buffer)?;
    fs::write(path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Generated: {}", path.display());
    Ok(())
}

fn visible_subcommands(cmd: &Command) -> impl Iterator<Item = &Command> {
    cmd.get_subcommands().filter(|s| !s.is_hide_set())
}

fn push_arg(markdown: &mut String, name: &str, arg: &Arg) {
    markdown.push_str(&format!("- `{}`: ", name));
    if let Some(help) = arg.get_help() {
        markdown.push_str(&help.to_string());
    }
    markdown.push('\n');
}
