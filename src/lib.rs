//! color-console Library
//!
//! Colored text, yes/no and choice prompts, and single-line progress bars for
//! command-line programs. Works on ANSI terminals and on Windows consoles, and
//! falls back to plain text when standard output is not a terminal.
//!
//! ```no_run
//! use color_console::Console;
//!
//! let mut console = Console::new();
//! console.success(["Build", "finished\n"])?;
//! if console.acknowledgment("Deploy now?", false)? {
//!     for step in 0..=100 {
//!         console.progress(step, 100, false)?;
//!     }
//! }
//! # Ok::<(), color_console::ConsoleError>(())
//! ```

pub mod backend;
pub mod capability;
pub mod cli;
pub mod config;
pub mod console;
pub mod error;
pub mod interrupt;
pub mod palette;
pub mod progress;
pub mod prompt;

pub use backend::{AnsiBackend, Baseline, ColorBackend};
pub use capability::{Capabilities, TerminalSize};
pub use config::{ConsoleConfig, ProgressStyle};
pub use console::Console;
pub use error::{ConsoleError, Result};
pub use palette::{Color, ColorCode, Layer};
pub use progress::{BarLayout, ProgressSample};
pub use prompt::{LineReader, LineSource, StdinSource};
