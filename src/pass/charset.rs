//! Character pools and categories.

use crate::rng::RandomSource;

pub const DIGITS: &[u8] = b"0123456789";
pub const SYMBOLS: &[u8] = br#"!@#$%^&*()-_=+[]{};:'"\|,.<>/?`~"#;
pub const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A named character pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Digits,
    Symbols,
    Letters,
}

impl Category {
    /// The fixed draw set for category selection. Order is irrelevant,
    /// every entry has weight 1/3.
    pub const ALL: [Category; 3] = [Category::Digits, Category::Symbols, Category::Letters];

    pub fn pool(self) -> &'static [u8] {
        match self {
            Category::Digits => DIGITS,
            Category::Symbols => SYMBOLS,
            Category::Letters => LETTERS,
        }
    }

    /// Uniform draw over the whole 3-way set.
    #[inline]
    pub fn draw<R: RandomSource + ?Sized>(rng: &mut R) -> Category {
        Self::ALL[rng.below(Self::ALL.len())]
    }

    /// Uniform draw from this category's pool.
    #[inline]
    pub fn pick<R: RandomSource + ?Sized>(self, rng: &mut R) -> char {
        let pool = self.pool();
        pool[rng.below(pool.len())] as char
    }
}

#[cfg(test)]
impl Category {
    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.pool().contains(&(c as u8))
    }
}
