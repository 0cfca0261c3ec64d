//! Demo command handler

use std::thread;
use std::time::Duration;

use anyhow::Result;

use color_console::{Color, Console, ProgressStyle};

/// Walk through every style, the three prompts and both progress bars.
#[cfg(not(tarpaulin_include))]
pub fn handle() -> Result<()> {
    let mut console = Console::new();

    console.message(["\n"])?;
    console.message(["simple message\n"])?;
    console.success(["Success message\n"])?;
    console.warning(["Warning message\n"])?;
    console.error(["Error message\n"])?;

    for color in Color::ALL {
        console.fg(color)?;
        console.message([format!("{:?}", color)])?;
        console.reset()?;
        console.message([" "])?;
    }
    console.message(["\n"])?;
    for color in Color::ALL {
        console.bg(color)?;
        console.message([format!("{:?}", color)])?;
        console.reset()?;
        console.message([" "])?;
    }
    console.message(["\n"])?;

    let ok = console.acknowledgment("OK?", true)?;
    console.message([format!("{}\n", ok)])?;
    let cancel = console.acknowledgment("Cancel?", false)?;
    console.message([format!("{}\n", cancel)])?;

    let options = ["1", "2", "3", "Neither", "None"];
    let (index, value) = console.choice("Which choice are you going to make?", &options, 4)?;
    console.message([format!("({}, {})\n", index, value)])?;

    let (indices, values) =
        console.multi_choice("Which ones do you like?", &options, &[0, 2])?;
    console.message([format!("{:?} {:?}\n", indices, values)])?;

    for style in [ProgressStyle::Blocks, ProgressStyle::Pacman] {
        for step in 0..=40 {
            console.progress_with(style, step, 40, true)?;
            thread::sleep(Duration::from_millis(25));
        }
        console.message(["\n"])?;
    }
    Ok(())
}
