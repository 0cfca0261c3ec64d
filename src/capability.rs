//! Terminal capability detection.
//!
//! Answers three questions about standard output: is it a terminal, how big is
//! it, and can it carry the glyphs used by the progress renderers.

use std::process::{Command, Stdio};

use tracing::{debug, trace};

/// Size used whenever the real terminal size cannot be determined.
pub const FALLBACK_SIZE: TerminalSize = TerminalSize {
    columns: 80,
    rows: 24,
};

/// Terminal dimensions in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalSize {
    pub columns: u16,
    pub rows: u16,
}

impl TerminalSize {
    pub fn new(columns: u16, rows: u16) -> Self {
        Self { columns, rows }
    }
}

/// What the output stream supports.
///
/// Computed once when a console is built and held by it, so tests can hand a
/// console any combination they like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Standard output is attached to a terminal device.
    pub interactive: bool,
    /// The output encoding can carry the progress glyphs.
    pub unicode: bool,
    size: Option<TerminalSize>,
}

impl Capabilities {
    /// Probe the real standard output.
    pub fn detect() -> Self {
        let caps = Self {
            interactive: atty::is(atty::Stream::Stdout),
            unicode: locale_is_utf8(|key| std::env::var(key).ok()),
            size: None,
        };
        debug!(
            interactive = caps.interactive,
            unicode = caps.unicode,
            "terminal capabilities detected"
        );
        caps
    }

    /// Capabilities with a pinned size, for tests and recordings.
    pub fn fixed(interactive: bool, size: TerminalSize) -> Self {
        Self {
            interactive,
            unicode: true,
            size: Some(size),
        }
    }

    /// Non-interactive output at the fallback size.
    pub fn non_interactive() -> Self {
        Self::fixed(false, FALLBACK_SIZE)
    }

    pub fn with_unicode(mut self, unicode: bool) -> Self {
        self.unicode = unicode;
        self
    }

    /// Current terminal size. Never fails; the worst case is 80x24.
    pub fn terminal_size(&self) -> TerminalSize {
        if let Some(size) = self.size {
            return size;
        }
        resolve_size(
            |key| std::env::var(key).ok(),
            platform_size(),
            self.interactive,
            stty_size,
        )
    }
}

/// Layered size lookup.
///
/// `COLUMNS`/`LINES` win when set, then the platform query, then (only when
/// attached to a terminal) `stty size`, then [`FALLBACK_SIZE`].
pub(crate) fn resolve_size<E, S>(
    env: E,
    platform: Option<TerminalSize>,
    interactive: bool,
    stty: S,
) -> TerminalSize
where
    E: Fn(&str) -> Option<String>,
    S: FnOnce() -> Option<TerminalSize>,
{
    let env_columns = env_dimension(&env, "COLUMNS");
    let env_rows = env_dimension(&env, "LINES");
    if let (Some(columns), Some(rows)) = (env_columns, env_rows) {
        trace!(columns, rows, "terminal size from environment");
        return TerminalSize { columns, rows };
    }

    let measured = match platform {
        Some(size) => {
            trace!(?size, "terminal size from platform query");
            size
        }
        None if !interactive => FALLBACK_SIZE,
        None => match stty() {
            Some(size) => {
                trace!(?size, "terminal size from stty");
                size
            }
            None => {
                debug!("terminal size unavailable, using fallback");
                FALLBACK_SIZE
            }
        },
    };

    TerminalSize {
        columns: env_columns.unwrap_or(measured.columns),
        rows: env_rows.unwrap_or(measured.rows),
    }
}

fn env_dimension<E>(env: &E, key: &str) -> Option<u16>
where
    E: Fn(&str) -> Option<String>,
{
    env(key)?.trim().parse::<u16>().ok().filter(|&n| n > 0)
}

fn platform_size() -> Option<TerminalSize> {
    let (terminal_size::Width(columns), terminal_size::Height(rows)) =
        terminal_size::terminal_size()?;
    Some(TerminalSize { columns, rows })
}

fn stty_size() -> Option<TerminalSize> {
    let output = Command::new("stty")
        .arg("size")
        .stdin(Stdio::inherit())
        .stderr(Stdio::null())
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    parse_stty_size(&String::from_utf8_lossy(&output.stdout))
}

/// Parse `stty size` output, which is "rows columns".
fn parse_stty_size(text: &str) -> Option<TerminalSize> {
    let mut parts = text.split_whitespace();
    let rows = parts.next()?.parse().ok()?;
    let columns = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(TerminalSize { columns, rows })
}

/// Whether the locale in effect encodes text as UTF-8.
#[cfg(unix)]
pub(crate) fn locale_is_utf8<E>(env: E) -> bool
where
    E: Fn(&str) -> Option<String>,
{
    ["LC_ALL", "LC_CTYPE", "LANG"]
        .iter()
        .filter_map(|key| env(key))
        .find(|value| !value.is_empty())
        .map(|value| {
            let value = value.to_ascii_lowercase();
            value.contains("utf-8") || value.contains("utf8")
        })
        .unwrap_or(true)
}

#[cfg(not(unix))]
pub(crate) fn locale_is_utf8<E>(_env: E) -> bool
where
    E: Fn(&str) -> Option<String>,
{
    true
}
