//! Guess feedback calculation and representation
//!
//! Comparing a guess against the secret yields one hint per slot:
//! - `Exact`   = right color in the right slot
//! - `Present` = right color in the wrong slot
//! - `Absent`  = color not in the remaining secret
//!
//! Hints are order-aligned with the guess slots, not sorted.

use super::{CODE_LENGTH, Code};
use serde::{Deserialize, Serialize};

/// Per-slot feedback level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hint {
    /// Right color in the right slot
    Exact,
    /// Right color, wrong slot
    Present,
    /// Color does not appear in the unmatched part of the secret
    Absent,
}

/// Feedback for a full guess row
///
/// Produced only by [`Feedback::evaluate`]; slot `i` of the feedback always
/// refers to slot `i` of the guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback([Hint; CODE_LENGTH]);

impl Feedback {
    /// All slots exact (winning feedback)
    pub const WIN: Self = Self([Hint::Exact; CODE_LENGTH]);

    /// Calculate the feedback for `guess` against `secret`
    ///
    /// Classic Mastermind semantics with duplicate colors handled correctly:
    /// each secret slot can satisfy at most one guess slot, and exact matches
    /// take priority over misplaced ones.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove those slots from the
    ///    available pool
    /// 2. Second pass: mark present-but-misplaced colors from the remaining
    ///    pool, consuming one secret slot per hit
    ///
    /// # Examples
    /// ```
    /// use chromacode::core::{Code, Color, Feedback, Hint};
    ///
    /// let secret = Code::new([Color::Red, Color::Green, Color::Brown, Color::Red]);
    /// let guess = Code::new([Color::Red, Color::Red, Color::Green, Color::Pink]);
    ///
    /// // Slot 0 is exact; the second Red matches the unmatched Red at slot 3;
    /// // Green matches slot 1; Pink is not in the remaining secret.
    /// assert_eq!(
    ///     Feedback::evaluate(&secret, &guess).hints(),
    ///     &[Hint::Exact, Hint::Present, Hint::Present, Hint::Absent]
    /// );
    /// ```
    #[must_use]
    pub fn evaluate(secret: &Code, guess: &Code) -> Self {
        let mut hints = [Hint::Absent; CODE_LENGTH];
        let mut available = secret.color_counts();

        // First pass: exact matches, consumed from the available pool
        // Allow: index needed to compare guess[i] with secret[i] and set hints[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..CODE_LENGTH {
            if guess.colors()[i] == secret.colors()[i] {
                hints[i] = Hint::Exact;

                if let Some(count) = available.get_mut(&guess.colors()[i]) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced colors from whatever the first pass left
        #[allow(clippy::needless_range_loop)]
        for i in 0..CODE_LENGTH {
            if hints[i] == Hint::Absent {
                let color = guess.colors()[i];
                if let Some(count) = available.get_mut(&color)
                    && *count > 0
                {
                    hints[i] = Hint::Present;
                    *count -= 1;
                }
            }
        }

        Self(hints)
    }

    /// The per-slot hints, order-aligned with the guess
    #[must_use]
    pub const fn hints(&self) -> &[Hint; CODE_LENGTH] {
        &self.0
    }

    /// True when every slot is an exact match
    #[must_use]
    pub fn is_win(self) -> bool {
        self == Self::WIN
    }

    /// Number of slots carrying the given hint level
    #[must_use]
    pub fn count(self, hint: Hint) -> usize {
        self.0.iter().filter(|&&h| h == hint).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color;

    #[test]
    fn self_evaluation_is_a_win() {
        for colors in [
            [Color::Red, Color::Green, Color::Brown, Color::Pink],
            [Color::Black, Color::Black, Color::Black, Color::Black],
            [Color::Magenta, Color::Gray, Color::Magenta, Color::Gray],
        ] {
            let code = Code::new(colors);
            let feedback = Feedback::evaluate(&code, &code);
            assert_eq!(feedback, Feedback::WIN);
            assert!(feedback.is_win());
        }
    }

    #[test]
    fn disjoint_codes_are_all_absent() {
        let secret = Code::new([Color::Purple, Color::Red, Color::Brown, Color::Green]);
        let guess = Code::new([Color::Pink, Color::Black, Color::Gray, Color::Magenta]);

        let feedback = Feedback::evaluate(&secret, &guess);
        assert_eq!(feedback.count(Hint::Exact), 0);
        assert_eq!(feedback.count(Hint::Present), 0);
        assert_eq!(feedback.count(Hint::Absent), 4);
    }

    #[test]
    fn duplicate_guess_color_consumes_one_secret_slot() {
        // Secret holds two Reds; the guess's three Reds can only be credited
        // twice (one exact, one misplaced).
        let secret = Code::new([Color::Red, Color::Green, Color::Brown, Color::Red]);
        let guess = Code::new([Color::Red, Color::Red, Color::Red, Color::Pink]);

        let feedback = Feedback::evaluate(&secret, &guess);
        assert_eq!(
            feedback.hints(),
            &[Hint::Exact, Hint::Present, Hint::Absent, Hint::Absent]
        );
    }

    #[test]
    fn misplaced_pair_with_mixed_duplicates() {
        let secret = Code::new([Color::Red, Color::Green, Color::Brown, Color::Red]);
        let guess = Code::new([Color::Red, Color::Red, Color::Green, Color::Pink]);

        let feedback = Feedback::evaluate(&secret, &guess);
        assert_eq!(
            feedback.hints(),
            &[Hint::Exact, Hint::Present, Hint::Present, Hint::Absent]
        );
    }

    #[test]
    fn exact_match_takes_priority_over_misplaced() {
        // The guess's slot-1 Green must not steal the secret's slot-2 Green
        // from the exact match at slot 2.
        let secret = Code::new([Color::Purple, Color::Brown, Color::Green, Color::Black]);
        let guess = Code::new([Color::Green, Color::Brown, Color::Green, Color::Gray]);

        let feedback = Feedback::evaluate(&secret, &guess);
        assert_eq!(
            feedback.hints(),
            &[Hint::Absent, Hint::Exact, Hint::Exact, Hint::Absent]
        );
    }

    #[test]
    fn exact_count_equals_positional_equality() {
        let mut rng = rand::rng();
        for _ in 0..200 {
            let secret = Code::random(&mut rng);
            let guess = Code::random(&mut rng);
            let feedback = Feedback::evaluate(&secret, &guess);

            let expected = secret
                .colors()
                .iter()
                .zip(guess.colors())
                .filter(|(s, g)| s == g)
                .count();
            assert_eq!(feedback.count(Hint::Exact), expected);
        }
    }

    #[test]
    fn credited_hints_never_exceed_color_multiplicity() {
        let mut rng = rand::rng();
        for _ in 0..200 {
            let secret = Code::random(&mut rng);
            let guess = Code::random(&mut rng);
            let feedback = Feedback::evaluate(&secret, &guess);

            for color in Color::ALL {
                let in_secret = secret.colors().iter().filter(|&&c| c == color).count();
                let in_guess = guess.colors().iter().filter(|&&c| c == color).count();
                let credited = guess
                    .colors()
                    .iter()
                    .zip(feedback.hints())
                    .filter(|&(&c, &h)| c == color && h != Hint::Absent)
                    .count();
                assert!(credited <= in_secret.min(in_guess));
            }
        }
    }

    #[test]
    fn win_constant_is_all_exact() {
        assert_eq!(Feedback::WIN.count(Hint::Exact), CODE_LENGTH);
        assert!(Feedback::WIN.is_win());
    }
}
