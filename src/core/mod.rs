//! Core domain types for the code-breaking game
//!
//! This module contains the fundamental domain types with no game-state
//! dependencies. All types here are pure, testable, and have clear
//! mathematical properties.

mod code;
mod color;
mod feedback;

pub use code::{CODE_LENGTH, Code};
pub use color::Color;
pub use feedback::{Feedback, Hint};
