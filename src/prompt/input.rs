//! Where prompt answers come from.

use std::io::{self, BufRead};

/// A source of answer lines.
pub trait LineSource {
    /// Read one line without its terminator. `Ok(None)` means end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Whether reading blocks on a terminal, where Ctrl+C can arrive.
    fn is_terminal(&self) -> bool {
        false
    }
}

/// The process's standard input, locked only for the duration of a read.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinSource;

impl LineSource for StdinSource {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        read_one(&mut io::stdin().lock())
    }

    fn is_terminal(&self) -> bool {
        atty::is(atty::Stream::Stdin)
    }
}

/// Any buffered reader, e.g. a scripted answer file or an in-memory cursor.
#[derive(Debug)]
pub struct LineReader<R> {
    inner: R,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl<R: BufRead> LineSource for LineReader<R> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        read_one(&mut self.inner)
    }
}

fn read_one<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}
