//! Attribute-word backend.
//!
//! Consoles like the Win32 one style text out of band: the program sets one
//! attribute word and everything written afterwards takes it. The platform
//! call sits behind [`AttributeConsole`]; this module keeps the bookkeeping.

use std::io::{self, Write};

use tracing::debug;

use super::{Baseline, ColorBackend};
use crate::palette::{ColorCode, Palette, WIN32};

/// Light grey on black, what a fresh console starts with.
pub const DEFAULT_ATTRIBUTES: u16 = 0x0007;

/// Reads and sets a console's current text attributes.
pub trait AttributeConsole {
    fn attributes(&self) -> io::Result<u16>;

    fn set_attributes(&mut self, attributes: u16) -> io::Result<()>;
}

/// Sets whole attribute words on an [`AttributeConsole`].
///
/// The console takes a full word rather than a delta, so `apply` is a plain
/// set. Callers combine foreground, background and intensity bits before
/// applying.
#[derive(Debug)]
pub struct AttributeBackend<C> {
    console: C,
    original: u16,
    emit: bool,
}

impl<C: AttributeConsole> AttributeBackend<C> {
    /// Snapshot the console's current attributes as the reset target.
    pub fn new(console: C, emit: bool) -> Self {
        let original = console.attributes().unwrap_or_else(|e| {
            debug!(error = %e, "could not read console attributes");
            DEFAULT_ATTRIBUTES
        });
        Self {
            console,
            original,
            emit,
        }
    }

    /// The attribute word captured at construction.
    pub fn original_attributes(&self) -> u16 {
        self.original
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    fn set(&mut self, out: &mut dyn Write, attributes: u16) -> io::Result<()> {
        // Text already buffered must be drawn with the previous attributes.
        out.flush()?;
        if self.emit {
            self.console.set_attributes(attributes)?;
        }
        out.flush()
    }
}

impl<C: AttributeConsole> ColorBackend for AttributeBackend<C> {
    fn apply(&mut self, out: &mut dyn Write, code: ColorCode) -> io::Result<()> {
        self.set(out, code.value())
    }

    fn reset(&mut self, out: &mut dyn Write) -> io::Result<()> {
        let original = self.original;
        self.set(out, original)
    }

    /// The console has no bold attribute; intensity is part of each color.
    fn bold(&mut self, _out: &mut dyn Write) -> io::Result<()> {
        Ok(())
    }

    fn palette(&self) -> &'static Palette {
        &WIN32
    }

    fn baseline(&self) -> Baseline {
        if self.emit {
            Baseline::Attributes(self.original)
        } else {
            Baseline::Untouched
        }
    }

    /// The blinking cursor takes a cell after the last character.
    fn reserved_columns(&self) -> u16 {
        1
    }
}
