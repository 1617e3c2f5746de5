//! The fixed eight-color palette
//!
//! A `Color` is a pure symbolic value; display metadata lives in a static
//! lookup so the game logic never touches presentation concerns.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the eight colors a code slot can take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Purple,
    Red,
    Brown,
    Green,
    Pink,
    Black,
    Gray,
    Magenta,
}

impl Color {
    /// Every palette color, in display order
    pub const ALL: [Self; 8] = [
        Self::Purple,
        Self::Red,
        Self::Brown,
        Self::Green,
        Self::Pink,
        Self::Black,
        Self::Gray,
        Self::Magenta,
    ];

    /// Human-readable name for display purposes
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Purple => "Purple",
            Self::Red => "Red",
            Self::Brown => "Brown",
            Self::Green => "Green",
            Self::Pink => "Pink",
            Self::Black => "Black",
            Self::Gray => "Gray",
            Self::Magenta => "Magenta",
        }
    }

    /// Draw a uniformly random palette color
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
