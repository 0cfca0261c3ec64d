//! Prompt command handlers (confirm, choose, pick)
//!
//! The answer goes to stdout after the prompt, as plain text or JSON, so
//! scripts can capture it.

use anyhow::{Context, Result};
use serde_json::json;

use color_console::Console;

/// Ask a yes/no question and print `true` or `false`.
#[cfg(not(tarpaulin_include))]
pub fn confirm(message: &str, default: bool, json: bool) -> Result<()> {
    let mut console = Console::new();
    let answer = console
        .acknowledgment(message, default)
        .context("Failed to read answer")?;
    if json {
        println!("{}", json!({ "answer": answer }));
    } else {
        println!("{}", answer);
    }
    Ok(())
}

/// Ask for one option and print its index and text.
#[cfg(not(tarpaulin_include))]
pub fn choose(message: &str, options: &[String], default: usize, json: bool) -> Result<()> {
    let mut console = Console::new();
    let (index, value) = console
        .choice(message, options, default)
        .context("Failed to read selection")?;
    if json {
        println!("{}", json!({ "index": index, "value": value }));
    } else {
        println!("{}\t{}", index, value);
    }
    Ok(())
}

/// Ask for several options and print one `index<TAB>text` line per pick.
#[cfg(not(tarpaulin_include))]
pub fn pick(message: &str, options: &[String], defaults: &[usize], json: bool) -> Result<()> {
    let mut console = Console::new();
    let (indices, values) = console
        .multi_choice(message, options, defaults)
        .context("Failed to read selection")?;
    if json {
        println!("{}", json!({ "indices": indices, "values": values }));
    } else {
        for (index, value) in indices.iter().zip(&values) {
            println!("{}\t{}", index, value);
        }
    }
    Ok(())
}
