//! Progress renderer tests on a simulated 80-column terminal.

use std::io::Cursor;

use color_console::progress::pacman::{MOUTH_CLOSED, MOUTH_OPEN};
use color_console::{Capabilities, Console, ConsoleConfig, LineReader, ProgressStyle, TerminalSize};

use crate::helpers::{console, Screen, SgrState, SharedBuffer};

const LABEL_50: &str = "[Progress:  50/100]";

fn blocks() -> ConsoleConfig {
    ConsoleConfig::default().with_progress(ProgressStyle::Blocks)
}

fn pacman() -> ConsoleConfig {
    ConsoleConfig::default().with_progress(ProgressStyle::Pacman)
}

#[test]
fn half_way_block_bar_fills_half_the_width() {
    let (mut console, buffer) = console(true, 80, "", blocks());
    console.progress(50, 100, false).unwrap();

    let screen = Screen::render(&buffer.contents());
    let line = screen.last_line();
    assert!(line.starts_with(LABEL_50));

    let width = 80 - 1 - LABEL_50.len();
    assert_eq!(line.matches('\u{2588}').count(), width / 2);
    assert_eq!(line.matches('\u{2591}').count(), width - width / 2);
    assert_eq!(screen.style, SgrState::default());
}

#[test]
fn complete_block_bar_has_no_track_left() {
    let (mut console, buffer) = console(true, 80, "", blocks());
    console.progress(100, 100, false).unwrap();

    let line = Screen::render(&buffer.contents()).last_line();
    assert_eq!(line.matches('\u{2588}').count(), 80 - 1 - "[Progress: 100/100]".len());
    assert_eq!(line.matches('\u{2591}').count(), 0);
}

#[test]
fn overshoot_renders_as_complete() {
    let (mut console, buffer) = console(true, 80, "", blocks());
    console.progress(130, 100, false).unwrap();

    let line = Screen::render(&buffer.contents()).last_line();
    assert_eq!(line.matches('\u{2591}').count(), 0);
}

#[test]
fn repeated_calls_redraw_one_line() {
    let (mut console, buffer) = console(true, 80, "", blocks());
    for step in 0..=10 {
        console.progress(step, 10, false).unwrap();
    }
    let out = buffer.contents();
    assert!(!out.contains('\n'));
    assert_eq!(out.matches('\r').count(), 11);

    let screen = Screen::render(&out);
    assert_eq!(screen.lines.len(), 1);
    assert!(screen.last_line().starts_with("[Progress:  10/10]"));
}

#[test]
fn label_is_bold_green() {
    let (mut console, buffer) = console(true, 80, "", blocks());
    console.progress(1, 2, false).unwrap();
    let out = buffer.contents();
    let label_at = out.find("[Progress:").unwrap();
    let before = Screen::render(&out[..label_at]);
    assert_eq!(before.style.fg, Some(32));
    assert!(before.style.bold);
}

#[test]
fn pacman_marker_sits_after_eaten_dots() {
    let (mut console, buffer) = console(true, 80, "", pacman());
    console.progress(50, 100, false).unwrap();

    let screen = Screen::render(&buffer.contents());
    let line: Vec<char> = screen.last_line().chars().collect();
    let label_len = LABEL_50.len();
    let eaten: String = line[label_len..label_len + 31].iter().collect();

    assert_eq!(eaten, format!(" {}", "\u{00B7} ".repeat(15)));
    assert_eq!(line[label_len + 31], MOUTH_CLOSED);
    assert_eq!(screen.style, SgrState::default());
}

#[test]
fn pacman_marker_alternates_on_odd_steps() {
    let (mut console, buffer) = console(true, 80, "", pacman());
    console.progress(51, 100, false).unwrap();
    let line = Screen::render(&buffer.contents()).last_line();
    assert!(line.contains(MOUTH_OPEN));
    assert!(!line.contains(MOUTH_CLOSED));
}

#[test]
fn pacman_marker_is_bold_yellow() {
    let (mut console, buffer) = console(true, 80, "", pacman());
    console.progress(50, 100, false).unwrap();
    let out = buffer.contents();
    let marker_at = out.find(MOUTH_CLOSED).unwrap();
    let before = Screen::render(&out[..marker_at]);
    assert_eq!(before.style.fg, Some(33));
    assert!(before.style.bold);
}

#[test]
fn complete_pacman_has_no_marker() {
    let (mut console, buffer) = console(true, 80, "", pacman());
    console.progress(100, 100, false).unwrap();
    let line = Screen::render(&buffer.contents()).last_line();
    assert!(!line.contains(MOUTH_CLOSED));
    assert!(!line.contains(MOUTH_OPEN));
}

#[test]
fn missing_glyph_support_draws_ascii_bar() {
    let buffer = SharedBuffer::default();
    let caps = Capabilities::fixed(true, TerminalSize::new(80, 24)).with_unicode(false);
    let mut console = Console::with_writer(
        buffer.clone(),
        LineReader::new(Cursor::new("")),
        caps,
        pacman(),
    );
    buffer.clear();
    console.progress(50, 100, false).unwrap();

    let line = Screen::render(&buffer.contents()).last_line();
    let expected = format!("{} [{}{}]", LABEL_50, "#".repeat(28), " ".repeat(28));
    assert_eq!(line, expected);
    assert!(line.is_ascii());
}

#[test]
fn non_interactive_progress_is_silent_by_default() {
    let (mut console, buffer) = console(false, 80, "", blocks());
    console.progress(10, 100, false).unwrap();
    assert_eq!(buffer.contents(), "");
}

#[test]
fn non_interactive_progress_can_print_the_label() {
    let (mut console, buffer) = console(false, 80, "", blocks());
    console.progress(10, 100, true).unwrap();
    assert_eq!(buffer.contents(), "[Progress:  10/100]\n");
    insta::assert_snapshot!(buffer.contents().trim_end(), @"[Progress:  10/100]");
}

#[test]
fn explicit_style_overrides_config() {
    let (mut console, buffer) = console(true, 80, "", blocks());
    console
        .progress_with(ProgressStyle::Pacman, 2, 10, false)
        .unwrap();
    assert!(buffer.contents().contains(MOUTH_CLOSED));
}
