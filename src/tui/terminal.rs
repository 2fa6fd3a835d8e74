//! Raw-mode terminal session.

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::{self, Write};
use tracing::{debug, info};

/// Raw mode, alternate screen and mouse capture for as long as it lives.
///
/// Dropping the guard restores the terminal, so every exit path after
/// `enable_raw_mode` (including a failed setup) leaves it usable.
pub struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalGuard<W> {
    /// Enables raw mode, then switches `out` to the alternate screen.
    pub fn enter(out: W) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self { out };
        execute!(guard.out, EnterAlternateScreen, EnableMouseCapture)?;
        debug!("Terminal in raw mode");
        Ok(guard)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        info!("Restoring terminal");
        let _ = disable_raw_mode();
        let _ = execute!(self.out, LeaveAlternateScreen, DisableMouseCapture, Show);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_leaves_alternate_screen_and_shows_cursor() {
        let mut buf = Vec::new();
        drop(TerminalGuard { out: &mut buf });
        let text = String::from_utf8(buf).expect("utf8");
        // Leave the alternate screen, then show the cursor.
        assert!(text.contains("\x1b[?1049l"), "{text:?}");
        assert!(text.contains("\x1b[?25h"), "{text:?}");
    }
}
