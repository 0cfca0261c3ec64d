//! Block-shade renderer: `█████░░░░░`.

use std::io::Write;

use super::BarLayout;
use crate::console::Console;
use crate::error::Result;

pub const FILLED: char = '\u{2588}';
pub const TRACK: char = '\u{2591}';

/// Draw the bar after the label.
pub fn draw<W: Write>(console: &mut Console<W>, layout: &BarLayout) -> Result<()> {
    let mut bar = String::with_capacity(1 + layout.width * 3);
    bar.push(' ');
    bar.extend(std::iter::repeat(FILLED).take(layout.filled));
    bar.extend(std::iter::repeat(TRACK).take(layout.remaining()));
    console.write_str(&bar)
}
