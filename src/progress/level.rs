//! Level records

use serde::{Deserialize, Serialize};

use super::Location;

/// One level within a location
///
/// Identified by `(location, id)` with ids 1 through 5. The best score, once
/// set, only ever decreases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    pub(crate) id: u8,
    pub(crate) location: Location,
    pub(crate) is_unlocked: bool,
    pub(crate) is_completed: bool,
    pub(crate) best_score: Option<u32>,
}

impl Level {
    pub(crate) const fn new(location: Location, id: u8, is_unlocked: bool) -> Self {
        Self {
            id,
            location,
            is_unlocked,
            is_completed: false,
            best_score: None,
        }
    }

    /// 1-based id within the location
    #[must_use]
    pub const fn id(&self) -> u8 {
        self.id
    }

    /// Owning location
    #[must_use]
    pub const fn location(&self) -> Location {
        self.location
    }

    /// True once reachable from the level-selection screen
    #[must_use]
    pub const fn is_unlocked(&self) -> bool {
        self.is_unlocked
    }

    /// True once won at least once
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.is_completed
    }

    /// Fewest attempts any win of this level has taken
    #[must_use]
    pub const fn best_score(&self) -> Option<u32> {
        self.best_score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_level_carries_identity_and_lock_state() {
        let level = Level::new(Location::Japan, 3, false);
        assert_eq!(level.id(), 3);
        assert_eq!(level.location(), Location::Japan);
        assert!(!level.is_unlocked());
        assert!(!level.is_completed());
        assert_eq!(level.best_score(), None);
    }
}
