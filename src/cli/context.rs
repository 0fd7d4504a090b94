//! CLI context - bundles settings and flags for one run.

use copypasta::ClipboardContext;

use super::{CliFlags, prompts};
use crate::error::{Error, Result};
use crate::pass::output::TerminalPresenter;
use crate::pass::{PasswordPair, Slot, copy_password, create_pair};
use crate::rng::Source;
use crate::settings::Settings;
use crate::tui::print_help;

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
}

impl Context {
    /// Parse arguments and resolve the effective settings.
    pub fn new(args: Vec<String>) -> Result<Self> {
        let flags = super::parse(&args)?;
        log::debug!("cli flags: {flags:?}");
        prompts::set_quiet(flags.quiet);

        let mut settings = if flags.saved {
            Settings::load_from_file().unwrap_or_else(|e| {
                prompts::warn(&format!("Failed to load settings: {e}"));
                Settings::default()
            })
        } else {
            Settings::default()
        };
        apply_flags(&flags, &mut settings);

        Ok(Self { settings, flags })
    }

    pub fn run(&mut self) -> Result<()> {
        if self.flags.help {
            print_help();
            return Ok(());
        }
        if self.flags.version {
            println!("pairpass {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }

        if self.flags.save {
            match self.settings.save_to_file() {
                Ok(()) => prompts::status("Settings saved."),
                Err(e) => prompts::warn(&format!("Failed to save settings: {e}")),
            }
        }

        let mut rng = Source::new(self.settings.rng);
        let mut presenter = TerminalPresenter::stdout(self.flags.quiet);
        let pair = create_pair(&mut self.settings, &mut rng, &mut presenter)?;

        if let Some(slot) = self.flags.board {
            self.copy(&mut presenter, &pair, slot)?;
        }
        Ok(())
    }

    fn copy(
        &self,
        presenter: &mut TerminalPresenter<std::io::Stdout>,
        pair: &PasswordPair,
        slot: Slot,
    ) -> Result<()> {
        let mut clipboard = match ClipboardContext::new() {
            Ok(c) => c,
            Err(e) => {
                let reason = e.to_string();
                if prompts::clipboard_fallback_prompt(&reason) {
                    prompts::warn("Clipboard unavailable, nothing copied.");
                    return Ok(());
                }
                return Err(Error::Clipboard(reason));
            }
        };
        copy_password(&mut clipboard, presenter, pair, slot)
    }
}

/// Overlay explicit flags on top of the base settings.
fn apply_flags(flags: &CliFlags, settings: &mut Settings) {
    if let Some(length) = flags.length {
        settings.pass_length = length;
    }
    if flags.numeric {
        settings.numeric_only = true;
    }
    if flags.no_numbers {
        settings.allow_numbers = false;
    }
    if flags.no_symbols {
        settings.allow_symbols = false;
    }
    if let Some(kind) = flags.rng {
        settings.rng = kind;
    }
}
