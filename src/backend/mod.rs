//! Platform color backends.
//!
//! A backend turns [`ColorCode`]s into terminal state changes. Exactly one
//! backend is picked per console, once, by [`default_backend`]:
//! - [`AnsiBackend`] re-sends its whole escape history on every change
//! - [`AttributeBackend`] sets a console attribute word directly; on Windows
//!   it drives the real console as `Win32Backend`
//!
//! Both keep their bookkeeping when output is not a terminal and only skip
//! the emission, so a later reset stays consistent.

mod ansi;
mod attributes;
#[cfg(windows)]
mod win32;

pub use ansi::{AnsiBackend, SOFT_RESET};
pub use attributes::{AttributeBackend, AttributeConsole, DEFAULT_ATTRIBUTES};
#[cfg(windows)]
pub use win32::{Win32Backend, Win32Console};

use std::io::{self, Write};

use crate::palette::{ColorCode, Palette};

/// Style state machine shared by all platforms.
pub trait ColorBackend {
    /// Activate a style.
    fn apply(&mut self, out: &mut dyn Write, code: ColorCode) -> io::Result<()>;

    /// Return the terminal to the state captured at construction.
    fn reset(&mut self, out: &mut dyn Write) -> io::Result<()>;

    /// Turn on bold, where the platform has such a thing.
    fn bold(&mut self, out: &mut dyn Write) -> io::Result<()>;

    /// Color table for this backend.
    fn palette(&self) -> &'static Palette;

    /// A detached restore action for signal handlers.
    fn baseline(&self) -> Baseline;

    /// Columns the platform keeps for its own cursor at the end of a line.
    fn reserved_columns(&self) -> u16 {
        0
    }
}

/// How to put the terminal back without access to a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Baseline {
    /// Nothing was ever emitted.
    Untouched,
    /// Send the ANSI reset sequence.
    Ansi,
    /// Restore this console attribute word.
    Attributes(u16),
}

impl Baseline {
    /// Restore the terminal. `out` is the stream styled text went to.
    pub fn restore(self, out: &mut dyn Write) -> io::Result<()> {
        match self {
            Baseline::Untouched => Ok(()),
            Baseline::Ansi => {
                out.write_all(SOFT_RESET.as_bytes())?;
                out.write_all(b"\x1b[0m")?;
                out.flush()
            }
            Baseline::Attributes(attributes) => {
                out.flush()?;
                restore_attributes(attributes)
            }
        }
    }
}

#[cfg(windows)]
fn restore_attributes(attributes: u16) -> io::Result<()> {
    win32::set_attributes(attributes)
}

#[cfg(not(windows))]
fn restore_attributes(_attributes: u16) -> io::Result<()> {
    Ok(())
}

/// The backend for the platform this binary was built for.
pub fn default_backend(interactive: bool) -> Box<dyn ColorBackend> {
    #[cfg(windows)]
    {
        tracing::debug!(interactive, "using win32 console backend");
        Box::new(Win32Backend::new(Win32Console, interactive))
    }
    #[cfg(not(windows))]
    {
        tracing::debug!(interactive, "using ansi backend");
        Box::new(AnsiBackend::new(interactive))
    }
}
