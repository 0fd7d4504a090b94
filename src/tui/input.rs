use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, read};

use crate::terminal::{RawModeGuard, flush, reset_terminal};

/// Upper bound on the digits accepted by the numeric editor.
const MAX_DIGITS: usize = 6;

/// Block for one key press in raw mode. Ctrl+C exits the program.
pub fn read_key() -> Option<KeyEvent> {
    let _guard = RawModeGuard::new().ok()?;

    loop {
        match read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                if is_ctrl(&key, 'c') {
                    reset_terminal();
                    println!();
                    std::process::exit(0);
                }
                return Some(key);
            }
            Ok(_) => {}
            Err(e) => {
                log::warn!("failed to read key: {e}");
                return None;
            }
        }
    }
}

fn is_ctrl(key: &KeyEvent, c: char) -> bool {
    key.code == KeyCode::Char(c) && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[derive(Debug, PartialEq)]
enum Edit {
    Continue,
    Accept,
    Cancel,
}

/// Apply one key to the digit buffer.
fn apply_key(digits: &mut String, key: &KeyEvent) -> Edit {
    match key.code {
        KeyCode::Esc => Edit::Cancel,
        _ if is_ctrl(key, 'q') => Edit::Cancel,
        _ if is_ctrl(key, 'u') => {
            digits.clear();
            Edit::Continue
        }
        KeyCode::Enter => Edit::Accept,
        KeyCode::Backspace => {
            digits.pop();
            Edit::Continue
        }
        KeyCode::Char(c) if c.is_ascii_digit() && digits.len() < MAX_DIGITS => {
            if digits == "0" {
                digits.clear();
            }
            digits.push(c);
            Edit::Continue
        }
        _ => Edit::Continue,
    }
}

/// Edit a number in place. Returns None when cancelled or left empty.
pub fn get_numeric_input(prompt: &str, initial_value: usize) -> Option<usize> {
    let mut digits = initial_value.to_string();

    let mut guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return None,
    };

    let mut last_len = digits.len();
    print!("{prompt}: {digits}");
    flush();

    let outcome = loop {
        let key = match read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => key,
            Ok(_) => continue,
            Err(_) => break Edit::Cancel,
        };
        if is_ctrl(&key, 'c') {
            reset_terminal();
            println!();
            std::process::exit(0);
        }

        match apply_key(&mut digits, &key) {
            Edit::Continue => {
                print!("\r{prompt}: {}", " ".repeat(last_len));
                print!("\r{prompt}: {digits}");
                flush();
                last_len = digits.len();
            }
            done => break done,
        }
    };

    guard.release();
    println!();

    match outcome {
        Edit::Accept => digits.parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn digits_edit_and_accept() {
        let mut digits = "16".to_string();
        assert_eq!(apply_key(&mut digits, &key(KeyCode::Backspace)), Edit::Continue);
        assert_eq!(apply_key(&mut digits, &key(KeyCode::Char('2'))), Edit::Continue);
        assert_eq!(apply_key(&mut digits, &key(KeyCode::Char('x'))), Edit::Continue);
        assert_eq!(apply_key(&mut digits, &key(KeyCode::Enter)), Edit::Accept);
        assert_eq!(digits, "12");
    }

    #[test]
    fn leading_zero_is_replaced() {
        let mut digits = "0".to_string();
        apply_key(&mut digits, &key(KeyCode::Char('8')));
        assert_eq!(digits, "8");
    }

    #[test]
    fn clear_and_cancel() {
        let mut digits = "123".to_string();
        apply_key(&mut digits, &ctrl('u'));
        assert!(digits.is_empty());
        assert_eq!(apply_key(&mut digits, &key(KeyCode::Esc)), Edit::Cancel);
        assert_eq!(apply_key(&mut digits, &ctrl('q')), Edit::Cancel);
    }

    #[test]
    fn digit_count_is_capped() {
        let mut digits = String::new();
        for _ in 0..10 {
            apply_key(&mut digits, &key(KeyCode::Char('9')));
        }
        assert_eq!(digits.len(), MAX_DIGITS);
    }
}
