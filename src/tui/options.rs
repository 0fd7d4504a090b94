use std::io;

use copypasta::ClipboardContext;
use crossterm::event::KeyCode;
use zeroize::Zeroizing;

use crate::pass::{MAX_LENGTH, PasswordPair, Presenter, Slot, copy_password, create_pair};
use crate::rng::Source;
use crate::settings::Settings;
use crate::terminal::{
    DIM, GREEN, RESET, box_bottom, box_line, box_rule, box_top, clear, reset_terminal,
};

use super::{
    get_numeric_input, mode_summary, print_help, print_main_footer, print_settings_menu, read_key,
};

const COPIED_BADGE: &str = "Password Copied";

/// Interactive presenter: remembers the current pair, the copied badges and
/// the latest status message between redraws.
#[derive(Default)]
pub struct Screen {
    passwords: [Zeroizing<String>; 2],
    copied: [bool; 2],
    status: String,
}

impl Presenter for Screen {
    fn show(&mut self, slot: Slot, password: &str) {
        let i = slot.index();
        self.passwords[i] = Zeroizing::new(password.to_owned());
        self.copied[i] = false;
    }

    fn announce(&mut self, message: &str) {
        self.status = message.to_owned();
    }

    fn mark_copied(&mut self, slot: Slot) {
        self.copied[slot.index()] = true;
    }
}

impl Screen {
    fn row(&self, slot: Slot) -> String {
        let i = slot.index();
        let mut row = format!("{slot}) {}", self.passwords[i].as_str());
        if self.copied[i] {
            row.push_str(&format!("  {GREEN}[{COPIED_BADGE}]{RESET}"));
        }
        row
    }

    fn draw(&self, settings: &Settings) {
        let out = &mut io::stdout();
        box_top(out, "Passwords");
        for slot in Slot::BOTH {
            box_line(out, &self.row(slot));
        }
        box_rule(out);
        box_line(out, &format!("{DIM}{}{RESET}", mode_summary(settings)));
        box_bottom(out);
        println!("{GREEN}{}{RESET}", self.status);
        print_main_footer();
    }
}

pub fn gen_main_menu() {
    reset_terminal();

    let mut settings = Settings::load_from_file().unwrap_or_else(|e| {
        log::warn!("failed to load settings: {e}");
        Settings::default()
    });
    let mut rng = Source::new(settings.rng);
    let mut screen = Screen::default();
    let mut clipboard: Option<ClipboardContext> = None;

    let mut pair = generate(&mut settings, &mut rng, &mut screen);

    loop {
        clear();
        screen.draw(&settings);

        let Some(key) = read_key() else { break };
        match key.code {
            KeyCode::Enter => pair = generate(&mut settings, &mut rng, &mut screen),
            KeyCode::Char(c @ ('1' | '2')) => {
                if let (Some(slot), Some(pair)) = (Slot::from_number(&c.to_string()), &pair) {
                    copy_slot(&mut clipboard, &mut screen, pair, slot);
                }
            }
            KeyCode::Char('s') => {
                match update_settings(&mut settings) {
                    Ok(()) => screen.announce("Settings saved."),
                    Err(e) => screen.announce(&format!("Failed to save settings: {e}")),
                }
                if rng.kind() != settings.rng {
                    rng = Source::new(settings.rng);
                }
            }
            KeyCode::Char('h') => {
                clear();
                print_help();
                println!("Press any key to return.");
                let _ = read_key();
            }
            KeyCode::Char('q') | KeyCode::Esc => break,
            _ => screen.announce("Unknown key."),
        }
    }

    clear();
}

fn generate(
    settings: &mut Settings,
    rng: &mut Source,
    screen: &mut Screen,
) -> Option<PasswordPair> {
    match create_pair(settings, rng, screen) {
        Ok(pair) => Some(pair),
        Err(e) => {
            screen.announce(&e.to_string());
            None
        }
    }
}

/// Copy through a lazily opened clipboard, reporting failures on the status line.
fn copy_slot(
    clipboard: &mut Option<ClipboardContext>,
    screen: &mut Screen,
    pair: &PasswordPair,
    slot: Slot,
) {
    if clipboard.is_none() {
        match ClipboardContext::new() {
            Ok(ctx) => *clipboard = Some(ctx),
            Err(e) => {
                screen.announce(&format!("Clipboard unavailable: {e}"));
                return;
            }
        }
    }

    if let Some(ctx) = clipboard.as_mut()
        && let Err(e) = copy_password(ctx, screen, pair, slot)
    {
        screen.announce(&e.to_string());
    }
}

/// Settings loop; saves on exit.
pub fn update_settings(settings: &mut Settings) -> crate::error::Result<()> {
    let mut error_txt = String::new();

    loop {
        clear();
        print_settings_menu(settings, &error_txt);
        error_txt.clear();

        let Some(key) = read_key() else { break };
        match key.code {
            KeyCode::Esc | KeyCode::Enter => break,
            KeyCode::Char(c) => {
                if let Err(msg) = apply_choice(c, settings) {
                    error_txt = msg;
                }
            }
            _ => {}
        }
    }

    settings.save_to_file()
}

/// Apply one settings menu choice. Returns the message to show on failure.
fn apply_choice(choice: char, settings: &mut Settings) -> Result<(), String> {
    match choice {
        '1' => {
            let current = settings.pass_length;
            if let Some(len) = get_numeric_input("Enter new password length", current) {
                set_length(settings, len)?;
            }
        }
        '2' => settings.numeric_only = !settings.numeric_only,
        '3' => settings.allow_numbers = !settings.allow_numbers,
        '4' => settings.allow_symbols = !settings.allow_symbols,
        '5' => settings.rng = settings.rng.toggled(),
        'r' => *settings = Settings::default(),
        'f' => {
            *settings = Settings::load_from_file()
                .map_err(|e| format!("Error loading settings: {e}"))?;
        }
        _ => return Err("Invalid input, please enter a valid menu option...".to_string()),
    }
    Ok(())
}

fn set_length(settings: &mut Settings, len: usize) -> Result<(), String> {
    if len > MAX_LENGTH {
        return Err(format!("Length must be at most {MAX_LENGTH}"));
    }
    settings.pass_length = len;
    Ok(())
}
