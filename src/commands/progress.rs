//! Progress command handler

use std::thread;
use std::time::Duration;

use anyhow::Result;

use color_console::{Console, ConsoleConfig, ProgressStyle};

/// Step a progress bar from 0 to `max`.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    max: u64,
    delay_ms: u64,
    style: Option<ProgressStyle>,
    show_non_interactive: bool,
) -> Result<()> {
    let mut config = ConsoleConfig::from_env();
    if let Some(style) = style {
        config = config.with_progress(style);
    }
    let mut console = Console::with_config(config);
    let delay = Duration::from_millis(delay_ms);

    for step in 0..=max {
        console.progress(step, max, show_non_interactive)?;
        if !delay.is_zero() && step < max {
            thread::sleep(delay);
        }
    }
    if console.is_interactive() {
        console.message(["\n"])?;
    }
    Ok(())
}
