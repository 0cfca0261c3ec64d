//! ANSI escape sequence backend.

use std::io::{self, Write};

use super::{Baseline, ColorBackend};
use crate::palette::{ColorCode, Palette, ANSI, ANSI_BOLD};

/// Soft terminal reset, then insert mode, origin mode and keypad mode off.
pub const SOFT_RESET: &str = "\x1b[!p\x1b[?3;4l\x1b[4l\x1b>";

const RESET_CODES: [ColorCode; 2] = [ColorCode::new(10), ColorCode::new(0)];

/// Accumulates SGR parameters.
///
/// Terminals only combine styles that arrive in one sequence, so every
/// change re-sends the full history: `green` then `bold` emits `ESC[32m`
/// followed by `ESC[32;01m`.
#[derive(Debug, Default)]
pub struct AnsiBackend {
    history: Vec<ColorCode>,
    emit: bool,
}

impl AnsiBackend {
    /// A backend that writes escape sequences only when `emit` is set.
    pub fn new(emit: bool) -> Self {
        Self {
            history: Vec::new(),
            emit,
        }
    }

    /// Codes applied since the last reset, oldest first.
    pub fn history(&self) -> &[ColorCode] {
        &self.history
    }

    fn write_history(&self, out: &mut dyn Write) -> io::Result<()> {
        if !self.emit {
            return Ok(());
        }
        let params: Vec<String> = self.history.iter().map(ToString::to_string).collect();
        write!(out, "\x1b[{}m", params.join(";"))
    }
}

impl ColorBackend for AnsiBackend {
    fn apply(&mut self, out: &mut dyn Write, code: ColorCode) -> io::Result<()> {
        self.history.push(code);
        self.write_history(out)?;
        out.flush()
    }

    fn reset(&mut self, out: &mut dyn Write) -> io::Result<()> {
        self.history.clear();
        if self.emit {
            out.write_all(SOFT_RESET.as_bytes())?;
        }
        // Two explicit resets: ESC[10m then ESC[10;00m.
        for code in RESET_CODES {
            self.history.push(code);
            self.write_history(out)?;
        }
        self.history.clear();
        out.flush()
    }

    fn bold(&mut self, out: &mut dyn Write) -> io::Result<()> {
        self.apply(out, ANSI_BOLD)
    }

    fn palette(&self) -> &'static Palette {
        &ANSI
    }

    fn baseline(&self) -> Baseline {
        if self.emit {
            Baseline::Ansi
        } else {
            Baseline::Untouched
        }
    }
}
