//! Two-candidate generation and clipboard copy.
//!
//! The handlers here own no UI state. Callers pass in where the request comes
//! from, where the passwords go, and which random source and clipboard to use.

use std::fmt;

use copypasta::ClipboardProvider;
use zeroize::Zeroizing;

use super::generate::generate;
use super::request::GenerationRequest;
use crate::error::{Error, Result};
use crate::rng::RandomSource;

pub const GENERATED_STATUS: &str = "Two passwords generated.";

/// Position of a candidate within a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    First,
    Second,
}

impl Slot {
    pub const BOTH: [Slot; 2] = [Slot::First, Slot::Second];

    pub fn index(self) -> usize {
        match self {
            Slot::First => 0,
            Slot::Second => 1,
        }
    }

    /// Parse the 1-based number shown to users.
    pub fn from_number(n: &str) -> Option<Slot> {
        match n.trim() {
            "1" => Some(Slot::First),
            "2" => Some(Slot::Second),
            _ => None,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index() + 1)
    }
}

/// Builds the request for one generation event.
pub trait InputCollector {
    fn collect(&mut self) -> Result<GenerationRequest>;
}

/// Displays generated passwords and status messages.
pub trait Presenter {
    fn show(&mut self, slot: Slot, password: &str);

    fn announce(&mut self, message: &str);

    fn mark_copied(&mut self, _slot: Slot) {}
}

/// Two independently generated passwords, wiped on drop.
#[derive(Clone)]
pub struct PasswordPair {
    passwords: [Zeroizing<String>; 2],
}

impl PasswordPair {
    pub fn get(&self, slot: Slot) -> &str {
        &self.passwords[slot.index()]
    }
}

/// Generate two passwords from one request and present both.
pub fn create_pair<C, R, P>(
    collector: &mut C,
    rng: &mut R,
    presenter: &mut P,
) -> Result<PasswordPair>
where
    C: InputCollector + ?Sized,
    R: RandomSource + ?Sized,
    P: Presenter + ?Sized,
{
    let request = collector.collect()?;

    let first = Zeroizing::new(generate(&request, rng));
    let second = Zeroizing::new(generate(&request, rng));
    let pair = PasswordPair {
        passwords: [first, second],
    };

    for slot in Slot::BOTH {
        presenter.show(slot, pair.get(slot));
    }
    presenter.announce(GENERATED_STATUS);
    log::info!("generated password pair of length {}", request.length);

    Ok(pair)
}

/// Copy one password of `pair` to the clipboard.
pub fn copy_password<C, P>(
    clipboard: &mut C,
    presenter: &mut P,
    pair: &PasswordPair,
    slot: Slot,
) -> Result<()>
where
    C: ClipboardProvider + ?Sized,
    P: Presenter + ?Sized,
{
    clipboard
        .set_contents(pair.get(slot).to_owned())
        .map_err(|e| Error::Clipboard(e.to_string()))?;

    presenter.announce(&format!("Password {slot} copied."));
    presenter.mark_copied(slot);
    log::debug!("password {} copied to clipboard", slot);
    Ok(())
}
