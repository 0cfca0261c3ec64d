//! Ctrl+C handling while a prompt blocks on standard input.
//!
//! A blocked `read_line` cannot observe SIGINT, so the terminal would be left
//! styled when the process dies. [`CancelGuard`] arms a process-wide handler
//! that restores the terminal [`Baseline`] and then re-raises the signal with
//! its default disposition.
//!
//! The handler is installed on first use, and only if SIGINT still has its
//! default disposition. A host that already handles Ctrl+C keeps its handler.
//! Outside an armed guard the handler does exactly what the default
//! disposition would have done.

use std::io;
use std::sync::{Mutex, Once};

use tracing::debug;

use crate::backend::Baseline;

static ARMED: Mutex<Option<Baseline>> = Mutex::new(None);
static INSTALL: Once = Once::new();

/// Keeps the interrupt handler armed for as long as it lives.
#[derive(Debug)]
pub struct CancelGuard {
    _private: (),
}

impl CancelGuard {
    /// Arm the handler with the state to restore on interrupt.
    pub fn arm(baseline: Baseline) -> Self {
        install();
        if let Ok(mut slot) = ARMED.lock() {
            *slot = Some(baseline);
        }
        Self { _private: () }
    }

    /// Whether any guard is currently armed.
    pub fn is_armed() -> bool {
        ARMED.lock().map(|slot| slot.is_some()).unwrap_or(false)
    }
}

impl Drop for CancelGuard {
    fn drop(&mut self) {
        if let Ok(mut slot) = ARMED.lock() {
            *slot = None;
        }
    }
}

fn install() {
    INSTALL.call_once(|| match ctrlc::try_set_handler(on_interrupt) {
        Ok(()) => debug!("interrupt handler installed"),
        Err(e) => debug!(error = %e, "host owns SIGINT, interrupt handler not installed"),
    });
}

fn on_interrupt() {
    let baseline = ARMED.lock().ok().and_then(|mut slot| slot.take());
    if let Some(baseline) = baseline {
        let _ = baseline.restore(&mut io::stdout());
    }
    reraise();
}

#[cfg(unix)]
fn reraise() {
    // SAFETY: restoring the default disposition and raising is the documented
    // way to terminate "by signal"; no Rust state is touched afterwards.
    unsafe {
        libc::signal(libc::SIGINT, libc::SIG_DFL);
        libc::raise(libc::SIGINT);
    }
    std::process::exit(130);
}

#[cfg(not(unix))]
fn reraise() {
    std::process::exit(130);
}
