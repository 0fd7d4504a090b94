//! Password generation.
//!
//! Mixed mode picks a category first and a character second. Each category
//! carries 1/3 of the weight no matter how large its pool is, so with every
//! category enabled a given digit (1/30) is five times as likely as a given
//! letter (1/156). This weighting is part of the output distribution and is
//! kept as is.

use super::charset::Category;
use super::request::{GenerationRequest, Mode};
use crate::rng::RandomSource;

/// Generate a single password for `request`.
pub fn generate<R: RandomSource + ?Sized>(request: &GenerationRequest, rng: &mut R) -> String {
    log::debug!(
        "generating {} character(s) in {:?} mode",
        request.length,
        request.mode
    );

    let mut password = String::with_capacity(request.length);
    match request.mode {
        Mode::NumericOnly => {
            password.extend((0..request.length).map(|_| Category::Digits.pick(rng)));
        }
        Mode::Mixed { .. } => {
            for _ in 0..request.length {
                let category = draw_allowed(&request.mode, rng);
                password.push(category.pick(rng));
            }
        }
    }
    password
}

/// Rejection sampling over the fixed 3-way category set.
/// Terminates because Mixed mode always allows letters.
fn draw_allowed<R: RandomSource + ?Sized>(mode: &Mode, rng: &mut R) -> Category {
    loop {
        let category = Category::draw(rng);
        if mode.allows(category) {
            return category;
        }
        log::trace!("redrawing, {:?} not allowed", category);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;
    use crate::pass::charset::{DIGITS, LETTERS, SYMBOLS};

    /// Replays fixed draws, panicking on bounds it was not told about.
    struct Scripted {
        draws: VecDeque<(usize, usize)>,
    }

    impl Scripted {
        fn new(draws: &[(usize, usize)]) -> Self {
            Self {
                draws: draws.iter().copied().collect(),
            }
        }
    }

    impl RandomSource for Scripted {
        fn below(&mut self, n: usize) -> usize {
            let (bound, value) = self.draws.pop_front().expect("script exhausted");
            assert_eq!(bound, n, "unexpected bound");
            value
        }
    }

    fn seeded() -> SmallRng {
        SmallRng::seed_from_u64(0x5eed)
    }

    fn is_digit(c: char) -> bool {
        c.is_ascii_digit()
    }

    fn is_symbol(c: char) -> bool {
        Category::Symbols.contains(c)
    }

    #[test]
    fn length_is_exact() {
        let mut rng = seeded();
        for length in [0, 1, 8, 12, 64, 257] {
            for numeric_only in [true, false] {
                let req = GenerationRequest::new(length, numeric_only, true, true);
                assert_eq!(generate(&req, &mut rng).chars().count(), length);
            }
        }
    }

    #[test]
    fn zero_length_is_empty() {
        let req = GenerationRequest::new(0, false, true, true);
        assert_eq!(generate(&req, &mut seeded()), "");
    }

    #[test]
    fn numeric_only_yields_digits_whatever_the_flags() {
        let mut rng = seeded();
        for (numbers, symbols) in [(true, true), (false, false), (false, true)] {
            let req = GenerationRequest::new(8, true, numbers, symbols);
            let pw = generate(&req, &mut rng);
            assert_eq!(pw.len(), 8);
            assert!(pw.chars().all(is_digit), "{pw}");
        }
    }

    #[test]
    fn letters_only_when_both_flags_off() {
        let mut rng = seeded();
        for _ in 0..50 {
            let pw = generate(&GenerationRequest::new(12, false, false, false), &mut rng);
            assert_eq!(pw.len(), 12);
            assert!(pw.chars().all(|c| c.is_ascii_alphabetic()), "{pw}");
        }
    }

    #[test]
    fn no_symbols_when_symbols_off() {
        let mut rng = seeded();
        let pw = generate(&GenerationRequest::new(2_000, false, true, false), &mut rng);
        assert!(pw.chars().all(|c| is_digit(c) || c.is_ascii_alphabetic()));
        assert!(pw.chars().any(is_digit));
    }

    #[test]
    fn no_digits_when_numbers_off() {
        let mut rng = seeded();
        let pw = generate(&GenerationRequest::new(2_000, false, false, true), &mut rng);
        assert!(pw.chars().all(|c| is_symbol(c) || c.is_ascii_alphabetic()));
        assert!(pw.chars().any(is_symbol));
    }

    #[test]
    fn all_categories_observed_when_enabled() {
        let mut rng = seeded();
        let pw = generate(&GenerationRequest::new(2_000, false, true, true), &mut rng);
        assert!(pw.chars().any(is_digit));
        assert!(pw.chars().any(is_symbol));
        assert!(pw.chars().any(|c| c.is_ascii_alphabetic()));
        assert!(pw.chars().all(|c| c.is_ascii_graphic()));
    }

    #[test]
    fn rejected_categories_are_redrawn() {
        // Symbols, Digits, then Letters; pick LETTERS[5] = 'f'.
        let mut rng = Scripted::new(&[(3, 1), (3, 0), (3, 2), (LETTERS.len(), 5)]);
        let pw = generate(&GenerationRequest::new(1, false, false, false), &mut rng);
        assert_eq!(pw, "f");
        assert!(rng.draws.is_empty());
    }

    #[test]
    fn allowed_category_is_used_on_first_draw() {
        let mut rng = Scripted::new(&[
            (3, 0),
            (DIGITS.len(), 7),
            (3, 1),
            (SYMBOLS.len(), 0),
            (3, 2),
            (LETTERS.len(), 26),
        ]);
        let pw = generate(&GenerationRequest::new(3, false, true, true), &mut rng);
        assert_eq!(pw, "7!A");
    }

    #[test]
    fn numeric_only_never_draws_a_category() {
        let mut rng = Scripted::new(&[(10, 3), (10, 9)]);
        let pw = generate(&GenerationRequest::new(2, true, false, false), &mut rng);
        assert_eq!(pw, "39");
    }

    #[test]
    fn category_weighting_favours_small_pools() {
        let mut rng = seeded();
        let pw = generate(&GenerationRequest::new(120_000, false, true, true), &mut rng);

        let count = |target: char| pw.chars().filter(|&c| c == target).count();
        let digit_avg = DIGITS.iter().map(|&b| count(b as char)).sum::<usize>() / DIGITS.len();
        let letter_avg = LETTERS.iter().map(|&b| count(b as char)).sum::<usize>() / LETTERS.len();

        // Expected averages are 4000 and roughly 770.
        assert!(digit_avg > 3 * letter_avg, "{digit_avg} vs {letter_avg}");
    }

    #[test]
    fn identical_requests_give_equal_lengths() {
        let mut rng = seeded();
        let req = GenerationRequest::new(24, false, true, true);
        let a = generate(&req, &mut rng);
        let b = generate(&req, &mut rng);
        assert_eq!(a.len(), b.len());
        assert_ne!(a, b);
    }
}
