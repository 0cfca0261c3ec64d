//! Interactive prompts: acknowledgment, single choice, multiple choice.
//!
//! All three share one loop: write the prompt, read a line, parse it, and ask
//! again until the answer is valid. When output is not a terminal the prompt
//! is written once, followed by a warning, and the default is returned
//! without touching standard input.

mod input;
mod layout;

pub use input::{LineReader, LineSource, StdinSource};
pub use layout::{option_label, pack_columns};

use std::fmt::Display;
use std::io::{self, Write};

use tracing::trace;

use crate::console::Console;
use crate::error::{ConsoleError, Result};
use crate::interrupt::CancelGuard;
use crate::palette::Color;

/// Outcome of parsing one answer line.
enum Answer<T> {
    Accept(T),
    /// Ask again without comment.
    Retry,
    /// Ask again after printing why the answer was rejected.
    Explain(String),
}

/// Which prompt is asking, for the non-interactive warning.
#[derive(Debug, Clone, Copy)]
enum PromptKind {
    Acknowledgment,
    Choice,
}

impl PromptKind {
    fn name(self) -> &'static str {
        match self {
            PromptKind::Acknowledgment => "Acknowledgment",
            PromptKind::Choice => "Choice",
        }
    }
}

/// A pending request: what to show, and what to return when nobody answers.
struct PromptSpec<T> {
    text: String,
    kind: PromptKind,
    default: T,
}

impl<W: Write> Console<W> {
    /// Ask a yes/no question. An empty answer returns `default`.
    ///
    /// # Errors
    /// `InputClosed` when input ends before an answer, `Interrupted` when the
    /// [`LineSource`] reports an interrupted read, `Io` when the terminal
    /// cannot be written. Ctrl+C on a real terminal is not an error: the
    /// process is terminated after the terminal is restored.
    pub fn acknowledgment(&mut self, message: &str, default: bool) -> Result<bool> {
        let tail = if default { "[Y/n]" } else { "[y/N]" };
        let spec = PromptSpec {
            text: format!("{} {} ", message, tail),
            kind: PromptKind::Acknowledgment,
            default,
        };
        self.ask(spec, |answer| match answer.to_lowercase().as_str() {
            "" => Answer::Accept(default),
            "y" => Answer::Accept(true),
            "n" => Answer::Accept(false),
            _ => Answer::Retry,
        })
    }

    /// Ask for one option out of `options`, listed one per line.
    ///
    /// Returns the selected index and option. An empty answer selects
    /// `default`.
    ///
    /// # Errors
    /// `NoOptions` or `DefaultOutOfRange` for an invalid request, otherwise as
    /// [`Console::acknowledgment`].
    pub fn choice<'a, T: Display>(
        &mut self,
        message: &str,
        options: &'a [T],
        default: usize,
    ) -> Result<(usize, &'a T)> {
        if options.is_empty() {
            return Err(ConsoleError::NoOptions);
        }
        check_index(default, options.len())?;

        let mut text = format!("{}\n", message);
        for (i, option) in options.iter().enumerate() {
            text.push_str(&format!("{:2} - {}\n", i, option));
        }
        text.push_str(&format!("Enter your selection then ENTER [{}] ", default));

        let spec = PromptSpec {
            text,
            kind: PromptKind::Choice,
            default,
        };
        let index = self.ask(spec, |answer| {
            if answer.is_empty() {
                return Answer::Accept(default);
            }
            match answer.parse::<usize>() {
                Ok(index) if index < options.len() => Answer::Accept(index),
                Ok(_) => Answer::Retry,
                Err(e) => Answer::Explain(e.to_string()),
            }
        })?;
        Ok((index, &options[index]))
    }

    /// Ask for any number of options, packed into columns.
    ///
    /// The answer is a whitespace-separated list of indices, returned in the
    /// order typed (duplicates kept). An empty answer selects `defaults`.
    ///
    /// # Errors
    /// As [`Console::choice`].
    pub fn multi_choice<'a, T: Display>(
        &mut self,
        message: &str,
        options: &'a [T],
        defaults: &[usize],
    ) -> Result<(Vec<usize>, Vec<&'a T>)> {
        if options.is_empty() {
            return Err(ConsoleError::NoOptions);
        }
        for &index in defaults {
            check_index(index, options.len())?;
        }

        let labels: Vec<String> = options
            .iter()
            .enumerate()
            .map(|(i, option)| option_label(i, option))
            .collect();
        let width = usize::from(self.caps.terminal_size().columns);
        let default_text = defaults
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        let text = format!(
            "{}\n{}Enter your selection (space-separated) then ENTER [{}] ",
            message,
            pack_columns(&labels, width),
            default_text
        );

        let spec = PromptSpec {
            text,
            kind: PromptKind::Choice,
            default: defaults.to_vec(),
        };
        let indices = self.ask(spec, |answer| {
            if answer.is_empty() {
                return Answer::Accept(defaults.to_vec());
            }
            let mut picked = Vec::new();
            for token in answer.split_whitespace() {
                match token.parse::<usize>() {
                    Ok(index) if index < options.len() => picked.push(index),
                    Ok(_) => return Answer::Retry,
                    Err(e) => return Answer::Explain(e.to_string()),
                }
            }
            Answer::Accept(picked)
        })?;
        let values = indices.iter().map(|&i| &options[i]).collect();
        Ok((indices, values))
    }

    /// Style, run the prompt loop, reset. Cancellation resets unconditionally.
    fn ask<T, P>(&mut self, spec: PromptSpec<T>, parse: P) -> Result<T>
    where
        P: Fn(&str) -> Answer<T>,
    {
        self.emphasize(Color::Blue)?;
        match self.prompt_loop(spec, parse) {
            Ok(value) => {
                self.relax()?;
                Ok(value)
            }
            Err(e) => {
                let _ = self.reset();
                Err(e)
            }
        }
    }

    fn prompt_loop<T, P>(&mut self, spec: PromptSpec<T>, parse: P) -> Result<T>
    where
        P: Fn(&str) -> Answer<T>,
    {
        loop {
            self.write_str(&spec.text)?;
            self.flush()?;

            if !self.caps.interactive {
                self.warning([format!(
                    "\n > {} asked in non interactive mode, return default value\n",
                    spec.kind.name()
                )])?;
                return Ok(spec.default);
            }

            let line = self.read_answer()?;
            match parse(line.trim()) {
                Answer::Accept(value) => return Ok(value),
                Answer::Retry => trace!(answer = %line, "answer rejected"),
                Answer::Explain(reason) => {
                    trace!(answer = %line, %reason, "answer rejected");
                    self.write_str(&format!("{}\n", reason))?;
                }
            }
        }
    }

    fn read_answer(&mut self) -> Result<String> {
        let _guard = self
            .input
            .is_terminal()
            .then(|| CancelGuard::arm(self.backend.baseline()));
        match self.input.read_line() {
            Ok(Some(line)) => Ok(line),
            Ok(None) => Err(ConsoleError::InputClosed),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => Err(ConsoleError::Interrupted),
            Err(e) => Err(e.into()),
        }
    }
}

fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(ConsoleError::DefaultOutOfRange { index, len })
    }
}
