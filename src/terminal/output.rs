//! Terminal output utilities.
//!
//! Box drawing and ANSI helpers. Box helpers write to any `Write` so the
//! presenters can be exercised against a buffer.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const UNDERLINE: &str = "\x1b[4m";
pub const RED: &str = "\x1b[38;5;9m";
pub const GREEN: &str = "\x1b[38;5;10m";
pub const DIM: &str = "\x1b[90m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

pub fn flush() {
    let _ = io::stdout().flush();
}

/// Reset terminal to sane state (fixes staggered text issues).
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}");
    flush();
}

pub fn print_error(msg: &str) {
    println!("{RED}{msg}{RESET}");
}

// ============================================================================
// Box Drawing (64 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 64;
const INNER_WIDTH: usize = BOX_WIDTH - 4;

/// ┌─ Title ─────┐
pub fn box_top<W: Write + ?Sized>(out: &mut W, title: &str) {
    let title_part = if title.is_empty() {
        String::new()
    } else {
        format!("─ {title} ")
    };
    let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
    let _ = writeln!(out, "┌{}{}┐", title_part, "─".repeat(remaining));
}

/// │ content     │
pub fn box_line<W: Write + ?Sized>(out: &mut W, content: &str) {
    let padding = INNER_WIDTH.saturating_sub(display_width(content));
    let _ = writeln!(out, "│ {}{} │", content, " ".repeat(padding));
}

/// │   content   │
pub fn box_line_center<W: Write + ?Sized>(out: &mut W, content: &str) {
    let total = INNER_WIDTH.saturating_sub(display_width(content));
    let left = total / 2;
    let _ = writeln!(
        out,
        "│ {}{}{} │",
        " ".repeat(left),
        content,
        " ".repeat(total - left)
    );
}

/// ├─────────────┤
pub fn box_rule<W: Write + ?Sized>(out: &mut W) {
    let _ = writeln!(out, "├{}┤", "─".repeat(BOX_WIDTH - 2));
}

/// └─────────────┘
pub fn box_bottom<W: Write + ?Sized>(out: &mut W) {
    let _ = writeln!(out, "└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Help row: flag column then description, wrapped to the box.
pub fn box_opt<W: Write + ?Sized>(out: &mut W, flag: &str, desc: &str) {
    const FLAG_COL: usize = 24;
    let desc_col = INNER_WIDTH - FLAG_COL;

    let mut lines: Vec<String> = Vec::new();
    for word in desc.split_whitespace() {
        match lines.last_mut() {
            Some(line) if line.len() + 1 + word.len() <= desc_col => {
                line.push(' ');
                line.push_str(word);
            }
            _ => lines.push(word.to_string()),
        }
    }
    if lines.is_empty() {
        lines.push(String::new());
    }

    for (i, line) in lines.iter().enumerate() {
        let left = if i == 0 { flag } else { "" };
        box_line(out, &format!("{left:<FLAG_COL$}{line}"));
    }
}

/// Display width ignoring ANSI escape sequences.
fn display_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}
