//! The style facade.
//!
//! [`Console`] owns the output stream, the input source, the color backend and
//! the capabilities detected at construction. Dropping it resets the terminal,
//! so no exit path (early return, `?`, panic unwind) leaves styling behind.

use std::fmt::Display;
use std::io::{self, Stdout, Write};

use tracing::debug;

use crate::backend::{self, ColorBackend};
use crate::capability::Capabilities;
use crate::config::ConsoleConfig;
use crate::error::Result;
use crate::palette::{Color, Layer};
use crate::prompt::{LineSource, StdinSource};

/// Colored terminal output, prompts and progress bars.
pub struct Console<W: Write = Stdout> {
    pub(crate) out: W,
    pub(crate) input: Box<dyn LineSource>,
    pub(crate) backend: Box<dyn ColorBackend>,
    pub(crate) caps: Capabilities,
    pub(crate) config: ConsoleConfig,
}

impl<W: Write> std::fmt::Debug for Console<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console")
            .field("caps", &self.caps)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Console<Stdout> {
    /// A console on the real stdin/stdout, configured from the environment.
    pub fn new() -> Self {
        Self::with_config(ConsoleConfig::from_env())
    }

    /// A console on the real stdin/stdout with an explicit configuration.
    pub fn with_config(config: ConsoleConfig) -> Self {
        let caps = Capabilities::detect();
        let backend = backend::default_backend(caps.interactive);
        Self::with_backend(io::stdout(), StdinSource, backend, caps, config)
    }
}

impl Default for Console<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! named_colors {
    ($($fg:ident / $bg:ident => $color:expr;)*) => {
        $(
            #[doc = concat!("Switch the foreground to ", stringify!($fg), ".")]
            pub fn $fg(&mut self) -> Result<()> {
                self.fg($color)
            }

            #[doc = concat!("Switch the background to ", stringify!($fg), ".")]
            pub fn $bg(&mut self) -> Result<()> {
                self.bg($color)
            }
        )*
    };
}

impl<W: Write> Console<W> {
    /// A console writing ANSI sequences to `out` and reading answers from `input`.
    ///
    /// This is the constructor for tests and for hosts that render into
    /// something other than the process's stdout.
    pub fn with_writer<L>(out: W, input: L, caps: Capabilities, config: ConsoleConfig) -> Self
    where
        L: LineSource + 'static,
    {
        let backend = Box::new(backend::AnsiBackend::new(caps.interactive));
        Self::with_backend(out, input, backend, caps, config)
    }

    /// A console with every collaborator injected.
    pub fn with_backend<L>(
        out: W,
        input: L,
        backend: Box<dyn ColorBackend>,
        caps: Capabilities,
        config: ConsoleConfig,
    ) -> Self
    where
        L: LineSource + 'static,
    {
        let mut console = Self {
            out,
            input: Box::new(input),
            backend,
            caps,
            config,
        };
        if let Err(e) = console.reset() {
            debug!(error = %e, "initial terminal reset failed");
        }
        console
    }

    /// Capabilities detected (or injected) at construction.
    pub fn capabilities(&self) -> &Capabilities {
        &self.caps
    }

    pub fn is_interactive(&self) -> bool {
        self.caps.interactive
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// The output stream.
    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.out
    }

    /// Apply a foreground color.
    pub fn fg(&mut self, color: Color) -> Result<()> {
        let code = self.backend.palette().code(color, Layer::Foreground);
        self.backend.apply(&mut self.out, code)?;
        Ok(())
    }

    /// Apply a background color.
    pub fn bg(&mut self, color: Color) -> Result<()> {
        let code = self.backend.palette().code(color, Layer::Background);
        self.backend.apply(&mut self.out, code)?;
        Ok(())
    }

    named_colors! {
        black / bg_black => Color::Black;
        red / bg_red => Color::Red;
        green / bg_green => Color::Green;
        yellow / bg_yellow => Color::Yellow;
        blue / bg_blue => Color::Blue;
        magenta / bg_magenta => Color::Magenta;
        cyan / bg_cyan => Color::Cyan;
        white / bg_white => Color::White;
        grey / bg_grey => Color::GREY;
    }

    /// Turn on bold. A no-op on Windows consoles.
    pub fn bold(&mut self) -> Result<()> {
        self.backend.bold(&mut self.out)?;
        Ok(())
    }

    /// Drop all styling and return to the construction-time baseline.
    pub fn reset(&mut self) -> Result<()> {
        self.backend.reset(&mut self.out)?;
        Ok(())
    }

    /// Write the parts joined by single spaces, without a line break.
    pub fn message<I, T>(&mut self, parts: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Display,
    {
        let text = parts
            .into_iter()
            .map(|part| part.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        self.out.write_all(text.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    /// Bold green message.
    pub fn success<I, T>(&mut self, parts: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Display,
    {
        self.styled_message(Color::Green, parts)
    }

    /// Bold yellow message.
    pub fn warning<I, T>(&mut self, parts: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Display,
    {
        self.styled_message(Color::Yellow, parts)
    }

    /// Bold red message.
    pub fn error<I, T>(&mut self, parts: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Display,
    {
        self.styled_message(Color::Red, parts)
    }

    fn styled_message<I, T>(&mut self, color: Color, parts: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Display,
    {
        if !self.caps.interactive {
            return self.message(parts);
        }
        self.fg(color)?;
        self.bold()?;
        self.message(parts)?;
        self.reset()
    }

    /// Apply `color` and bold when interactive.
    pub(crate) fn emphasize(&mut self, color: Color) -> Result<()> {
        if self.caps.interactive {
            self.fg(color)?;
            self.bold()?;
        }
        Ok(())
    }

    /// Reset when interactive.
    pub(crate) fn relax(&mut self) -> Result<()> {
        if self.caps.interactive {
            self.reset()?;
        }
        Ok(())
    }

    pub(crate) fn write_str(&mut self, text: &str) -> Result<()> {
        self.out.write_all(text.as_bytes())?;
        Ok(())
    }

    pub(crate) fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> Drop for Console<W> {
    fn drop(&mut self) {
        if let Err(e) = self.reset() {
            debug!(error = %e, "terminal reset on drop failed");
        }
    }
}
