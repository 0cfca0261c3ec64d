//! Pacman renderer.
//!
//! Lays a row of dots and ghosts over the whole width, redraws the label on
//! top, then the eaten part as small dots and a bold yellow marker that
//! opens and closes with every step.

use std::io::Write;

use super::{BarLayout, ProgressSample};
use crate::console::Console;
use crate::error::Result;

const MOTIF: &str = "\u{2022} \u{2022} \u{15E3} ";
const MOTIF_WIDTH: usize = 6;
const EATEN: &str = "\u{00B7} ";
pub const MOUTH_CLOSED: char = '\u{25CF}';
pub const MOUTH_OPEN: char = '\u{25D6}';

/// Marker glyph for a step; alternates with the parity of `current`.
pub fn marker(sample: &ProgressSample) -> char {
    if sample.current % 2 == 0 {
        MOUTH_CLOSED
    } else {
        MOUTH_OPEN
    }
}

/// Draw the animation after the label.
pub fn draw<W: Write>(
    console: &mut Console<W>,
    layout: &BarLayout,
    sample: &ProgressSample,
) -> Result<()> {
    let track = MOTIF.repeat(layout.width.saturating_sub(1) / MOTIF_WIDTH);
    console.write_str(&track)?;
    console.draw_progress_label(&layout.label)?;

    let eaten = format!(" {}", EATEN.repeat(layout.filled / 2));
    console.write_str(&eaten)?;

    if layout.filled < layout.width {
        console.bold()?;
        console.yellow()?;
        let mut glyph = [0u8; 4];
        console.write_str(marker(sample).encode_utf8(&mut glyph))?;
        console.reset()?;
    }
    Ok(())
}
