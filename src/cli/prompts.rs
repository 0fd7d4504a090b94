//! Centralized warning, status and prompt messages for CLI output.
//!
//! Passwords go to stdout; everything here goes to stderr so piping the
//! output stays clean.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

use log::LevelFilter;

use crate::terminal::{GREEN, RED, RESET};

const YELLOW: &str = "\x1b[33m";

static QUIET: AtomicBool = AtomicBool::new(false);

/// Quiet mode also drops log warnings unless a log filter was set explicitly.
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
    if quiet && std::env::var_os(crate::LOG_ENV).is_none() {
        log::set_max_level(LevelFilter::Error);
    }
}

pub fn quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

pub fn is_interactive() -> bool {
    unsafe { libc::isatty(0) == 1 }
}

/// Prompts are skipped when quiet or when stdin is not a tty.
pub fn skip_prompt() -> bool {
    quiet() || !is_interactive()
}

/// Yellow warning, suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Red error. Errors are always shown.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Status announcement, suppressed in quiet mode.
pub fn status(msg: &str) {
    if !quiet() {
        eprintln!("{GREEN}{msg}{RESET}");
    }
}

/// Ask whether to continue without the clipboard. Returns true to keep the
/// terminal output, false to abort. Non-interactive runs continue silently.
pub fn clipboard_fallback_prompt(err: &str) -> bool {
    if skip_prompt() {
        return true;
    }

    eprintln!("Clipboard unavailable: {err}");
    eprint!("Keep the passwords on the terminal only? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_err() {
        return true;
    }
    let input = input.trim().to_lowercase();
    if input.is_empty() || input == "y" || input == "yes" {
        return true;
    }

    eprintln!("Aborted.");
    false
}
