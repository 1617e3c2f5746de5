//! Achievements
//!
//! Five fixed achievements, each unlocked once by a specific feat and then
//! claimed once for coins. Neither flag is ever revoked.

use serde::{Deserialize, Serialize};

/// Coins paid out when any achievement is claimed
pub const ACHIEVEMENT_REWARD: u32 = 10;

/// The fixed achievement roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AchievementKind {
    FirstGuess,
    CodeBreaker,
    Persistence,
    WorldTraveler,
    Perfection,
}

/// Display metadata for an achievement
#[derive(Debug, Clone, Copy)]
pub struct AchievementInfo {
    pub title: &'static str,
    pub description: &'static str,
}

static ACHIEVEMENT_INFO: [AchievementInfo; 5] = [
    AchievementInfo {
        title: "First Guess",
        description: "Make your first attempt",
    },
    AchievementInfo {
        title: "Code Breaker",
        description: "Win a level",
    },
    AchievementInfo {
        title: "Persistence",
        description: "Make 10 attempts in a level",
    },
    AchievementInfo {
        title: "World Traveler",
        description: "Unlock a new location",
    },
    AchievementInfo {
        title: "Perfection",
        description: "Guess the code on first try",
    },
];

impl AchievementKind {
    /// Every achievement kind
    pub const ALL: [Self; 5] = [
        Self::FirstGuess,
        Self::CodeBreaker,
        Self::Persistence,
        Self::WorldTraveler,
        Self::Perfection,
    ];

    /// Static display metadata
    #[must_use]
    pub fn info(self) -> &'static AchievementInfo {
        &ACHIEVEMENT_INFO[self as usize]
    }
}

/// Unlock/claim state for one achievement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub(crate) kind: AchievementKind,
    pub(crate) is_unlocked: bool,
    pub(crate) is_claimed: bool,
}

impl Achievement {
    pub(crate) const fn new(kind: AchievementKind) -> Self {
        Self {
            kind,
            is_unlocked: false,
            is_claimed: false,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> AchievementKind {
        self.kind
    }

    #[must_use]
    pub const fn is_unlocked(&self) -> bool {
        self.is_unlocked
    }

    /// Only meaningful once unlocked
    #[must_use]
    pub const fn is_claimed(&self) -> bool {
        self.is_claimed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_metadata_is_complete() {
        for kind in AchievementKind::ALL {
            let info = kind.info();
            assert!(!info.title.is_empty());
            assert!(!info.description.is_empty());
        }
    }

    #[test]
    fn serde_uses_camel_case_names() {
        let json = serde_json::to_string(&AchievementKind::WorldTraveler).unwrap();
        assert_eq!(json, "\"worldTraveler\"");
        let back: AchievementKind = serde_json::from_str("\"firstGuess\"").unwrap();
        assert_eq!(back, AchievementKind::FirstGuess);
    }
}
