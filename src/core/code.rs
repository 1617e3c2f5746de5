//! Four-slot color codes
//!
//! A `Code` is an ordered combination of four palette colors. The same type
//! represents both the hidden secret and a fully committed guess.

use super::Color;
use rand::Rng;
use rustc_hash::FxHashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of slots in a code
pub const CODE_LENGTH: usize = 4;

/// An ordered combination of four colors
///
/// Repetition is allowed: `[Red, Red, Red, Red]` is a valid code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Code([Color; CODE_LENGTH]);

impl Code {
    /// Create a code from four colors
    #[must_use]
    pub const fn new(colors: [Color; CODE_LENGTH]) -> Self {
        Self(colors)
    }

    /// Draw a uniformly random code; repeated colors are allowed
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(std::array::from_fn(|_| Color::sample(rng)))
    }

    /// The colors in slot order
    #[must_use]
    pub const fn colors(&self) -> &[Color; CODE_LENGTH] {
        &self.0
    }

    /// The color at a specific slot (0-3)
    ///
    /// # Panics
    /// Panics if `slot >= CODE_LENGTH`
    #[must_use]
    pub const fn color_at(&self, slot: usize) -> Color {
        self.0[slot]
    }

    /// Occurrence count of each color in the code
    ///
    /// Used for feedback calculation with duplicate colors.
    pub(crate) fn color_counts(&self) -> FxHashMap<Color, u8> {
        let mut counts = FxHashMap::default();
        for &color in &self.0 {
            *counts.entry(color).or_insert(0u8) += 1;
        }
        counts
    }
}

impl From<[Color; CODE_LENGTH]> for Code {
    fn from(colors: [Color; CODE_LENGTH]) -> Self {
        Self(colors)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for color in &self.0 {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{color}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_exposes_colors_in_order() {
        let code = Code::new([Color::Red, Color::Green, Color::Black, Color::Red]);
        assert_eq!(code.color_at(0), Color::Red);
        assert_eq!(code.color_at(1), Color::Green);
        assert_eq!(code.color_at(2), Color::Black);
        assert_eq!(code.color_at(3), Color::Red);
    }

    #[test]
    fn random_codes_use_all_slots() {
        let mut rng = rand::rng();
        let code = Code::random(&mut rng);
        assert_eq!(code.colors().len(), CODE_LENGTH);
    }

    #[test]
    fn color_counts_handles_duplicates() {
        let code = Code::new([Color::Red, Color::Red, Color::Green, Color::Red]);
        let counts = code.color_counts();
        assert_eq!(counts.get(&Color::Red), Some(&3));
        assert_eq!(counts.get(&Color::Green), Some(&1));
        assert_eq!(counts.get(&Color::Black), None);
    }

    #[test]
    fn color_counts_all_unique() {
        let code = Code::new([Color::Purple, Color::Red, Color::Brown, Color::Green]);
        let counts = code.color_counts();
        assert_eq!(counts.len(), 4);
        assert!(counts.values().all(|&count| count == 1));
    }

    #[test]
    fn display_joins_color_names() {
        let code = Code::new([Color::Red, Color::Gray, Color::Pink, Color::Black]);
        assert_eq!(format!("{code}"), "Red Gray Pink Black");
    }

    #[test]
    fn serde_round_trip() {
        let code = Code::new([Color::Magenta, Color::Red, Color::Red, Color::Gray]);
        let json = serde_json::to_string(&code).unwrap();
        let back: Code = serde_json::from_str(&json).unwrap();
        assert_eq!(code, back);
    }
}
