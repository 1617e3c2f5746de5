//! Progress summary for the stats command

use crate::progress::{
    AchievementKind, Level, Location, PlayerProgress, ShopItemKind,
};

/// Per-location completion counts
#[derive(Debug, Clone)]
pub struct LocationProgress {
    pub location: Location,
    pub unlocked: bool,
    pub completed: usize,
    pub total: usize,
    /// Best score across the location's completed levels
    pub best_score: Option<u32>,
    /// Compact per-level line: best score, `·` unlocked, `x` locked
    pub levels_line: String,
}

/// Snapshot of everything the stats command prints
#[derive(Debug, Clone)]
pub struct ProgressSummary {
    pub coins: u32,
    pub total_games_played: u32,
    pub total_levels_completed: u32,
    pub perfect_games: u32,
    pub streak_days: u32,
    pub achievements_unlocked: usize,
    pub achievements_claimed: usize,
    pub achievements_total: usize,
    pub items_owned: usize,
    pub items_total: usize,
    pub selected_background: String,
    pub selected_skin: String,
    pub locations: Vec<LocationProgress>,
}

/// Build a display summary from the ledger
#[must_use]
pub fn summarize(progress: &PlayerProgress) -> ProgressSummary {
    let locations = Location::ALL
        .iter()
        .map(|&location| {
            let levels = progress.levels_for(location);
            LocationProgress {
                location,
                unlocked: progress.unlocked_locations().contains(&location),
                completed: levels.iter().filter(|l| l.is_completed()).count(),
                total: levels.len(),
                best_score: levels.iter().filter_map(|l| l.best_score()).min(),
                levels_line: level_line(&levels),
            }
        })
        .collect();

    let achievements = progress.achievements();
    let background_name = item_name(progress, ShopItemKind::Background);
    let skin_name = item_name(progress, ShopItemKind::Skin);

    ProgressSummary {
        coins: progress.coins(),
        total_games_played: progress.stats().total_games_played,
        total_levels_completed: progress.stats().total_levels_completed,
        perfect_games: progress.stats().perfect_games,
        streak_days: progress.daily_reward().consecutive_days(),
        achievements_unlocked: achievements.iter().filter(|a| a.is_unlocked()).count(),
        achievements_claimed: achievements.iter().filter(|a| a.is_claimed()).count(),
        achievements_total: AchievementKind::ALL.len(),
        items_owned: progress.shop_items().iter().filter(|i| i.is_purchased()).count(),
        items_total: progress.shop_items().len(),
        selected_background: background_name,
        selected_skin: skin_name,
        locations,
    }
}

fn item_name(progress: &PlayerProgress, kind: ShopItemKind) -> String {
    let id = match kind {
        ShopItemKind::Background => progress.selected_background(),
        ShopItemKind::Skin => progress.selected_skin(),
    };
    progress
        .shop_items()
        .iter()
        .find(|i| i.kind() == kind && i.id() == id)
        .map_or_else(|| id.to_owned(), |i| i.name().to_owned())
}

/// Fraction of all levels completed, for the progress gauge
#[must_use]
pub fn completion_ratio(summary: &ProgressSummary) -> f64 {
    let total: usize = summary.locations.iter().map(|l| l.total).sum();
    if total == 0 {
        return 0.0;
    }
    let done: usize = summary.locations.iter().map(|l| l.completed).sum();
    done as f64 / total as f64
}

/// Levels of a location formatted as a short lock/score line
#[must_use]
pub fn level_line(levels: &[&Level]) -> String {
    levels
        .iter()
        .map(|level| {
            if level.is_completed() {
                level.best_score().map_or_else(|| "won".to_owned(), |s| s.to_string())
            } else if level.is_unlocked() {
                "·".to_owned()
            } else {
                "x".to_owned()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_progress_summarizes_to_zeroes() {
        let progress = PlayerProgress::new();
        let summary = summarize(&progress);

        assert_eq!(summary.coins, 0);
        assert_eq!(summary.total_levels_completed, 0);
        assert_eq!(summary.achievements_unlocked, 0);
        assert_eq!(summary.achievements_total, 5);
        assert_eq!(summary.locations.len(), 5);
        assert!(summary.locations[0].unlocked);
        assert!(!summary.locations[1].unlocked);
        assert_eq!(summary.selected_background, "Classic");
        assert!((completion_ratio(&summary)).abs() < f64::EPSILON);
    }

    #[test]
    fn completions_show_up_per_location() {
        let mut progress = PlayerProgress::new();
        progress.complete_level(Location::France, 1, 3);
        progress.complete_level(Location::France, 2, 5);

        let summary = summarize(&progress);
        let france = &summary.locations[0];
        assert_eq!(france.completed, 2);
        assert_eq!(france.total, 5);
        assert_eq!(france.best_score, Some(3));
        assert!((completion_ratio(&summary) - 2.0 / 25.0).abs() < 1e-9);
    }

    #[test]
    fn level_line_marks_lock_states() {
        let mut progress = PlayerProgress::new();
        progress.complete_level(Location::France, 1, 4);

        let line = level_line(&progress.levels_for(Location::France));
        assert_eq!(line, "4 · x x x");
    }
}
