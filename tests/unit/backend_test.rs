//! Unit tests for backend module

use color_console::backend::SOFT_RESET;
use color_console::palette::ANSI;
use color_console::{AnsiBackend, Baseline, Color, ColorBackend, Layer};

const RESET_TAIL: &str = "\x1b[10m\x1b[10;00m";

fn apply(backend: &mut AnsiBackend, out: &mut Vec<u8>, color: Color, layer: Layer) {
    let code = backend.palette().code(color, layer);
    backend.apply(out, code).unwrap();
}

#[test]
fn every_change_resends_the_history() {
    let mut backend = AnsiBackend::new(true);
    let mut out = Vec::new();
    apply(&mut backend, &mut out, Color::Red, Layer::Foreground);
    apply(&mut backend, &mut out, Color::Blue, Layer::Background);
    backend.bold(&mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "\x1b[31m\x1b[31;44m\x1b[31;44;01m"
    );
    assert_eq!(backend.history().len(), 3);
}

#[test]
fn reset_emits_soft_reset_and_clears_history() {
    let mut backend = AnsiBackend::new(true);
    let mut out = Vec::new();
    apply(&mut backend, &mut out, Color::Green, Layer::Foreground);
    out.clear();

    backend.reset(&mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!("{}{}", SOFT_RESET, RESET_TAIL)
    );
    assert!(backend.history().is_empty());
}

#[test]
fn silent_backend_tracks_state_without_writing() {
    let mut backend = AnsiBackend::new(false);
    let mut out = Vec::new();
    apply(&mut backend, &mut out, Color::Cyan, Layer::Foreground);
    backend.bold(&mut out).unwrap();
    assert_eq!(backend.history().len(), 2);

    backend.reset(&mut out).unwrap();
    assert!(out.is_empty());
    assert!(backend.history().is_empty());
}

#[test]
fn baseline_depends_on_emission() {
    assert_eq!(AnsiBackend::new(true).baseline(), Baseline::Ansi);
    assert_eq!(AnsiBackend::new(false).baseline(), Baseline::Untouched);
    assert_eq!(AnsiBackend::new(true).reserved_columns(), 0);
}

#[test]
fn untouched_baseline_restores_nothing() {
    let mut out = Vec::new();
    Baseline::Untouched.restore(&mut out).unwrap();
    assert!(out.is_empty());
}

#[test]
fn ansi_baseline_sends_soft_reset_then_sgr_reset() {
    let mut out = Vec::new();
    Baseline::Ansi.restore(&mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!("{}\x1b[0m", SOFT_RESET)
    );
}

#[cfg(not(windows))]
#[test]
fn attribute_baseline_writes_no_bytes() {
    let mut out = Vec::new();
    Baseline::Attributes(0x07).restore(&mut out).unwrap();
    assert!(out.is_empty());
}

#[test]
fn ansi_palette_is_used() {
    let backend = AnsiBackend::new(true);
    assert!(std::ptr::eq(backend.palette(), &ANSI));
}
