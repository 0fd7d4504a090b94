//! Terminal presenter for CLI runs.

use std::io::{self, Write};

use super::{Presenter, Slot};
use crate::cli::prompts;
use crate::terminal::{box_bottom, box_line, box_top};

/// Prints the pair inside a box, or as bare lines when quiet.
pub struct TerminalPresenter<W: Write> {
    out: W,
    quiet: bool,
}

impl TerminalPresenter<io::Stdout> {
    pub fn stdout(quiet: bool) -> Self {
        Self::new(io::stdout(), quiet)
    }
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W, quiet: bool) -> Self {
        Self { out, quiet }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn show(&mut self, slot: Slot, password: &str) {
        if self.quiet {
            let _ = writeln!(self.out, "{password}");
            return;
        }

        if slot == Slot::First {
            box_top(&mut self.out, "Passwords");
        }
        box_line(&mut self.out, &format!("{slot}) {password}"));
        if slot == Slot::Second {
            box_bottom(&mut self.out);
        }
        let _ = self.out.flush();
    }

    fn announce(&mut self, message: &str) {
        prompts::status(message);
    }
}
