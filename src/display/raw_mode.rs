//! Raw terminal mode and alternate screen with panic-safe cleanup.

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use std::io;
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};

/// Tracks whether the terminal needs restoring (for the panic hook).
pub(crate) static SCREEN_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Guard that restores the terminal on drop, including during a panic.
pub struct ScreenGuard {
    active: bool,
}

impl ScreenGuard {
    /// Enter raw mode and the alternate screen.
    ///
    /// # Errors
    /// Returns an error if the terminal can't be switched (e.g. no TTY).
    pub fn enter() -> io::Result<Self> {
        install_panic_hook();

        enable_raw_mode()?;
        SCREEN_ACTIVE.store(true, Ordering::SeqCst);
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen, Hide) {
            restore();
            return Err(e);
        }

        Ok(Self { active: true })
    }

    /// Restore the terminal now; the later drop becomes a no-op.
    pub fn exit(&mut self) {
        if self.active {
            self.active = false;
            restore();
        }
    }
}

impl Drop for ScreenGuard {
    fn drop(&mut self) {
        self.exit();
    }
}

/// Best-effort terminal restore; errors are ignored.
fn restore() {
    if SCREEN_ACTIVE.swap(false, Ordering::SeqCst) {
        let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

/// Install a panic hook that restores the terminal before the panic
/// message prints. Only installs once.
pub(crate) fn install_panic_hook() {
    static HOOK_INSTALLED: AtomicBool = AtomicBool::new(false);

    if HOOK_INSTALLED.swap(true, Ordering::SeqCst) {
        return;
    }

    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        restore();
        original_hook(panic_info);
    }));
}
