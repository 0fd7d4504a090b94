//! Random sources for password generation.
//!
//! The generator only needs uniform integers below a bound, so it is written
//! against [`RandomSource`]. Any `rand::RngCore` satisfies it, which keeps
//! seeded generators usable in tests.

use std::fmt;
use std::str::FromStr;

use rand::rngs::{OsRng, SmallRng};
use rand::{Rng, RngCore, SeedableRng};

/// Uniform integer draws in `[0, n)`.
pub trait RandomSource {
    fn below(&mut self, n: usize) -> usize;
}

impl<R: RngCore> RandomSource for R {
    #[inline]
    fn below(&mut self, n: usize) -> usize {
        self.gen_range(0..n)
    }
}

/// Which generator backs a [`Source`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceKind {
    /// Small non-cryptographic PRNG. Matches the historical behaviour.
    #[default]
    Fast,
    /// Operating system CSPRNG.
    Secure,
}

impl SourceKind {
    pub fn toggled(self) -> Self {
        match self {
            SourceKind::Fast => SourceKind::Secure,
            SourceKind::Secure => SourceKind::Fast,
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            SourceKind::Fast => "fast (SmallRng, not cryptographic)",
            SourceKind::Secure => "secure (OS random source)",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Fast => write!(f, "fast"),
            SourceKind::Secure => write!(f, "secure"),
        }
    }
}

impl FromStr for SourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fast" => Ok(SourceKind::Fast),
            "secure" => Ok(SourceKind::Secure),
            other => Err(format!("unknown random source '{other}'")),
        }
    }
}

/// Random source selected at runtime from settings or flags.
pub enum Source {
    Fast(SmallRng),
    Secure(OsRng),
}

impl Source {
    pub fn new(kind: SourceKind) -> Self {
        log::debug!("using {} random source", kind);
        match kind {
            SourceKind::Fast => Source::Fast(SmallRng::from_entropy()),
            SourceKind::Secure => Source::Secure(OsRng),
        }
    }

    pub fn kind(&self) -> SourceKind {
        match self {
            Source::Fast(_) => SourceKind::Fast,
            Source::Secure(_) => SourceKind::Secure,
        }
    }
}

impl RngCore for Source {
    fn next_u32(&mut self) -> u32 {
        match self {
            Source::Fast(r) => r.next_u32(),
            Source::Secure(r) => r.next_u32(),
        }
    }

    fn next_u64(&mut self) -> u64 {
        match self {
            Source::Fast(r) => r.next_u64(),
            Source::Secure(r) => r.next_u64(),
        }
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        match self {
            Source::Fast(r) => r.fill_bytes(dest),
            Source::Secure(r) => r.fill_bytes(dest),
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        match self {
            Source::Fast(r) => r.try_fill_bytes(dest),
            Source::Secure(r) => r.try_fill_bytes(dest),
        }
    }
}
