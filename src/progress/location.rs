//! Themed locations and their static display metadata
//!
//! Locations are fixed reference data: five of them, in tour order, each
//! holding five levels. Display strings live in a static lookup table so the
//! progression logic never carries presentation text.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Levels per location
pub const LEVELS_PER_LOCATION: u8 = 5;

/// A themed group of five sequential levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    France,
    Japan,
    Brazil,
    Egypt,
    Usa,
}

/// Display metadata for a location
#[derive(Debug, Clone, Copy)]
pub struct LocationInfo {
    /// Chapter title shown on the level-selection screen
    pub title: &'static str,
    /// One-liner the professor greets the player with
    pub professor_comment: &'static str,
    /// Story unlocked by finishing the location's last level
    pub secret_story: &'static str,
}

static LOCATION_INFO: [LocationInfo; 5] = [
    LocationInfo {
        title: "Versailles Code",
        professor_comment: "France invented fashion, but logic has a place here too!",
        secret_story: "The prestigious École Normale Supérieure in Paris has been training \
            brilliant minds since 1794. Its alumni include mathematicians, philosophers, and \
            Nobel Prize winners who shaped modern thought.",
    },
    LocationInfo {
        title: "Kyoto Mystery",
        professor_comment: "In the land of precision and detail, every code tells a story.",
        secret_story: "Kyoto University, founded in 1897, stands as Japan's second-oldest \
            university. Known for producing Nobel laureates and fostering innovative research \
            in science and technology.",
    },
    LocationInfo {
        title: "Amazon Code",
        professor_comment: "The Amazon holds many secrets - can you unlock this one?",
        secret_story: "The University of São Paulo, Brazil's largest and most prestigious \
            institution, leads Latin American research and has contributed groundbreaking \
            discoveries to global science.",
    },
    LocationInfo {
        title: "Pyramid Code",
        professor_comment: "Ancient pyramids, eternal mysteries. Let's decode the past!",
        secret_story: "Al-Azhar University in Cairo, founded in 970 AD, is one of the world's \
            oldest continuously operating universities, bridging ancient wisdom with modern \
            knowledge.",
    },
    LocationInfo {
        title: "Silicon Code",
        professor_comment: "Silicon Valley - where logic meets innovation!",
        secret_story: "Stanford University, located in the heart of Silicon Valley, has been \
            the birthplace of countless technological innovations that transformed our digital \
            world.",
    },
];

impl Location {
    /// Every location, in tour order
    pub const ALL: [Self; 5] = [Self::France, Self::Japan, Self::Brazil, Self::Egypt, Self::Usa];

    /// The location that opens after this one, if any
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::France => Some(Self::Japan),
            Self::Japan => Some(Self::Brazil),
            Self::Brazil => Some(Self::Egypt),
            Self::Egypt => Some(Self::Usa),
            Self::Usa => None,
        }
    }

    /// Static display metadata
    #[must_use]
    pub fn info(self) -> &'static LocationInfo {
        &LOCATION_INFO[self as usize]
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.info().title)
    }
}
