//! Win32 console attributes through `crossterm_winapi`.

use std::io;

use crossterm_winapi::{Console, Handle, ScreenBuffer};

use super::attributes::{AttributeBackend, AttributeConsole};

/// The console attached to this process's standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct Win32Console;

impl AttributeConsole for Win32Console {
    fn attributes(&self) -> io::Result<u16> {
        let info = ScreenBuffer::current()?.info()?;
        Ok(info.attributes())
    }

    fn set_attributes(&mut self, attributes: u16) -> io::Result<()> {
        set_attributes(attributes)
    }
}

pub type Win32Backend = AttributeBackend<Win32Console>;

pub(super) fn set_attributes(attributes: u16) -> io::Result<()> {
    Console::from(Handle::current_out_handle()?).set_text_attribute(attributes)
}
