//! Single-line progress bars.
//!
//! Each call redraws the whole line from column 0 (carriage return, no line
//! feed), so repeated calls animate in place. Two renderers exist, picked by
//! [`ProgressStyle`]:
//! - [`blocks`]: solid blocks over a light-shade track
//! - [`pacman`]: a marker eating through a row of dots
//!
//! Both fall back to an ASCII `[###   ]` bar when the output cannot carry
//! their glyphs.

pub mod blocks;
pub mod pacman;

use std::io::Write;

use tracing::trace;

use crate::config::ProgressStyle;
use crate::console::Console;
use crate::error::Result;
use crate::palette::Color;

/// One progress reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSample {
    pub current: u64,
    pub maximum: u64,
}

impl ProgressSample {
    pub fn new(current: u64, maximum: u64) -> Self {
        Self { current, maximum }
    }

    /// Values past the maximum count as done rather than as an error.
    pub fn is_complete(&self) -> bool {
        self.current >= self.maximum
    }

    /// `[Progress: NNN/MMM]`, current right-aligned to three places.
    pub fn label(&self) -> String {
        format!("[Progress: {:>3}/{}]", self.current, self.maximum)
    }
}

/// Geometry of one rendered bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarLayout {
    pub label: String,
    /// Cells available to the bar after the label.
    pub width: usize,
    /// Cells that represent completed work.
    pub filled: usize,
}

impl BarLayout {
    /// Fit a bar for `sample` into a line of `columns` cells.
    ///
    /// One column stays free at the end of the line, plus whatever the
    /// backend reserves for its cursor.
    pub fn compute(sample: &ProgressSample, columns: u16, reserved: u16) -> Self {
        let label = sample.label();
        let width = usize::from(columns)
            .saturating_sub(1)
            .saturating_sub(label.len())
            .saturating_sub(usize::from(reserved));
        let filled = if sample.is_complete() {
            width
        } else {
            // is_complete() is false, so maximum > current >= 0.
            (width as u128 * u128::from(sample.current) / u128::from(sample.maximum)) as usize
        };
        Self {
            label,
            width,
            filled,
        }
    }

    pub fn remaining(&self) -> usize {
        self.width - self.filled
    }

    /// The glyph-free bar: ` [###     ]`.
    pub fn ascii_bar(&self) -> String {
        format!(
            " [{}{}]",
            "#".repeat(self.filled.saturating_sub(2)),
            " ".repeat(self.remaining().saturating_sub(2))
        )
    }
}

impl<W: Write> Console<W> {
    /// Draw a progress bar for `current` out of `maximum`.
    ///
    /// When output is not a terminal nothing is drawn, unless
    /// `show_on_non_interactive` is set, in which case the plain label is
    /// written on its own line.
    pub fn progress(
        &mut self,
        current: u64,
        maximum: u64,
        show_on_non_interactive: bool,
    ) -> Result<()> {
        let style = self.config.progress;
        self.progress_with(style, current, maximum, show_on_non_interactive)
    }

    /// [`Console::progress`] with an explicit renderer.
    pub fn progress_with(
        &mut self,
        style: ProgressStyle,
        current: u64,
        maximum: u64,
        show_on_non_interactive: bool,
    ) -> Result<()> {
        let sample = ProgressSample::new(current, maximum);
        if !self.caps.interactive {
            if show_on_non_interactive {
                self.write_str(&sample.label())?;
                self.write_str("\n")?;
                self.flush()?;
            }
            return Ok(());
        }

        let columns = self.caps.terminal_size().columns;
        let layout = BarLayout::compute(&sample, columns, self.backend.reserved_columns());
        trace!(?style, width = layout.width, filled = layout.filled, "drawing progress");

        self.draw_progress_label(&layout.label)?;
        if !self.caps.unicode {
            self.write_str(&layout.ascii_bar())?;
            return self.flush();
        }

        let drawn = match style {
            ProgressStyle::Blocks => blocks::draw(self, &layout),
            ProgressStyle::Pacman => pacman::draw(self, &layout, &sample),
        };
        if let Err(e) = drawn {
            trace!(error = %e, "glyph bar failed, drawing ascii bar");
            self.reset()?;
            self.write_str(&layout.ascii_bar())?;
        }
        self.flush()
    }

    /// Return to column 0 and draw the label in bold green.
    pub(crate) fn draw_progress_label(&mut self, label: &str) -> Result<()> {
        self.emphasize(Color::Green)?;
        self.write_str("\r")?;
        self.write_str(label)?;
        self.relax()
    }
}
