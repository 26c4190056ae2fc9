//! `TerminalReporter` — presentation-layer implementation of `ProgressReporter`.
//!
//! Wraps `&OutputContext` so the orchestrator can emit progress events
//! without depending on any presentation type directly. On a TTY, phases
//! show an indicatif spinner; otherwise plain status lines are printed.

use std::cell::RefCell;

use indicatif::ProgressBar;
use owo_colors::OwoColorize as _;

use crate::bootstrap::ProgressReporter;
use crate::output::{OutputContext, progress};

/// Terminal progress reporter that wraps an `OutputContext`.
pub struct TerminalReporter<'a> {
    ctx: &'a OutputContext,
    active: RefCell<Option<ProgressBar>>,
}

impl<'a> TerminalReporter<'a> {
    /// Create a new `TerminalReporter` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self {
            ctx,
            active: RefCell::new(None),
        }
    }

    fn clear_active(&self) {
        if let Some(pb) = self.active.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }

    fn plain_line(&self, message: &str) {
        if !self.ctx.quiet {
            println!("  {} {message}", "→".style(self.ctx.styles.step));
        }
    }
}

impl ProgressReporter for TerminalReporter<'_> {
    fn step(&self, message: &str) {
        self.clear_active();
        if self.ctx.show_progress() {
            *self.active.borrow_mut() = Some(progress::spinner(message));
        } else {
            self.plain_line(message);
        }
    }

    // The engine inherits the terminal next; an animated spinner would
    // garble its output, so this is always a plain line.
    fn handoff(&self, message: &str) {
        self.clear_active();
        self.plain_line(message);
    }

    fn success(&self, message: &str) {
        self.clear_active();
        if !self.ctx.quiet {
            println!("  {} {message}", "✓".style(self.ctx.styles.success));
        }
    }
}

impl Drop for TerminalReporter<'_> {
    fn drop(&mut self) {
        self.clear_active();
    }
}
