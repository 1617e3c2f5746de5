//! The durable player-progress aggregate
//!
//! [`PlayerProgress`] is the single source of truth for everything the
//! player has earned: coins, level completion, achievements, shop purchases,
//! daily state, audio preferences, and lifetime statistics. Every field is
//! private and mutated only through the operations below; the session layer
//! persists the aggregate after each mutating call.
//!
//! Rejected operations follow the silent no-op convention: claims return 0,
//! purchases return false, selections simply do not change anything.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::achievement::{ACHIEVEMENT_REWARD, Achievement, AchievementKind};
use super::daily::{DAILY_TASK_REWARD, DailyReward, DailyTask, DailyTaskKind, default_tasks};
use super::level::Level;
use super::location::{LEVELS_PER_LOCATION, Location};
use super::shop::{ShopItem, ShopItemKind, default_catalog};

/// Coins awarded for the first completion of a level
pub const LEVEL_REWARD_COINS: u32 = 100;

/// Audio preference fields carried with the save
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AudioSettings {
    pub music_enabled: bool,
    pub sound_enabled: bool,
    pub music_volume: f32,
    pub sound_volume: f32,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            music_enabled: true,
            sound_enabled: true,
            music_volume: 0.7,
            sound_volume: 0.8,
        }
    }
}

/// Lifetime play statistics; every counter is monotonically non-decreasing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayStats {
    pub total_games_played: u32,
    pub total_levels_completed: u32,
    /// Levels won on the very first attempt
    pub perfect_games: u32,
}

/// The durable player-progress aggregate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerProgress {
    coins: u32,
    levels: Vec<Level>,
    achievements: Vec<Achievement>,
    shop_items: Vec<ShopItem>,
    daily_reward: DailyReward,
    #[serde(default = "default_tasks")]
    daily_tasks: Vec<DailyTask>,
    selected_background: String,
    selected_skin: String,
    current_location: Location,
    unlocked_locations: BTreeSet<Location>,
    #[serde(default)]
    audio: AudioSettings,
    #[serde(default)]
    stats: PlayStats,
}

impl Default for PlayerProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerProgress {
    /// Fresh progress: only France level 1 unlocked, empty pockets
    #[must_use]
    pub fn new() -> Self {
        let levels = Location::ALL
            .iter()
            .flat_map(|&location| {
                (1..=LEVELS_PER_LOCATION).map(move |id| {
                    Level::new(location, id, location == Location::France && id == 1)
                })
            })
            .collect();

        Self {
            coins: 0,
            levels,
            achievements: AchievementKind::ALL.iter().map(|&k| Achievement::new(k)).collect(),
            shop_items: default_catalog(),
            daily_reward: DailyReward::new(),
            daily_tasks: default_tasks(),
            selected_background: "default".to_owned(),
            selected_skin: "default".to_owned(),
            current_location: Location::France,
            unlocked_locations: BTreeSet::from([Location::France]),
            audio: AudioSettings::default(),
            stats: PlayStats::default(),
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    #[must_use]
    pub const fn coins(&self) -> u32 {
        self.coins
    }

    #[must_use]
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// The level identified by `(location, id)`, if it exists
    #[must_use]
    pub fn level(&self, location: Location, id: u8) -> Option<&Level> {
        self.levels.iter().find(|l| l.location == location && l.id == id)
    }

    /// All levels of one location, ordered by id
    #[must_use]
    pub fn levels_for(&self, location: Location) -> Vec<&Level> {
        let mut levels: Vec<&Level> =
            self.levels.iter().filter(|l| l.location == location).collect();
        levels.sort_by_key(|l| l.id);
        levels
    }

    /// The level the player should play next: the first unlocked but
    /// uncompleted level in tour order, falling back to the last unlocked
    /// level for replay once everything is done
    #[must_use]
    pub fn next_open_level(&self) -> Option<&Level> {
        for location in Location::ALL {
            for level in self.levels_for(location) {
                if level.is_unlocked && !level.is_completed {
                    return Some(level);
                }
            }
        }
        self.levels.iter().rev().find(|l| l.is_unlocked)
    }

    #[must_use]
    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    #[must_use]
    pub fn achievement(&self, kind: AchievementKind) -> Option<&Achievement> {
        self.achievements.iter().find(|a| a.kind == kind)
    }

    #[must_use]
    pub fn shop_items(&self) -> &[ShopItem] {
        &self.shop_items
    }

    /// Catalog entries of one kind, in catalog order
    #[must_use]
    pub fn shop_items_of(&self, kind: ShopItemKind) -> Vec<&ShopItem> {
        self.shop_items.iter().filter(|i| i.kind == kind).collect()
    }

    #[must_use]
    pub const fn daily_reward(&self) -> &DailyReward {
        &self.daily_reward
    }

    #[must_use]
    pub fn daily_tasks(&self) -> &[DailyTask] {
        &self.daily_tasks
    }

    #[must_use]
    pub fn selected_background(&self) -> &str {
        &self.selected_background
    }

    #[must_use]
    pub fn selected_skin(&self) -> &str {
        &self.selected_skin
    }

    /// Asset reference of the selected item of `kind`
    #[must_use]
    pub fn selected_asset(&self, kind: ShopItemKind) -> Option<&str> {
        let id = match kind {
            ShopItemKind::Background => &self.selected_background,
            ShopItemKind::Skin => &self.selected_skin,
        };
        self.shop_items
            .iter()
            .find(|i| i.kind == kind && &i.id == id)
            .map(|i| i.asset.as_str())
    }

    #[must_use]
    pub const fn current_location(&self) -> Location {
        self.current_location
    }

    #[must_use]
    pub const fn unlocked_locations(&self) -> &BTreeSet<Location> {
        &self.unlocked_locations
    }

    #[must_use]
    pub const fn audio(&self) -> &AudioSettings {
        &self.audio
    }

    #[must_use]
    pub const fn stats(&self) -> &PlayStats {
        &self.stats
    }

    // ------------------------------------------------------------------
    // Round outcomes
    // ------------------------------------------------------------------

    /// Record a won level
    ///
    /// Always updates the best score when `attempts` beats it and marks the
    /// complete-a-level daily task. The first completion of a level
    /// additionally pays [`LEVEL_REWARD_COINS`], bumps the statistics,
    /// unlocks the next level (or the next location after level 5), and
    /// re-checks the completion achievements. Repeated completions award
    /// nothing further.
    pub fn complete_level(&mut self, location: Location, level_id: u8, attempts: u32) {
        let Some(index) =
            self.levels.iter().position(|l| l.location == location && l.id == level_id)
        else {
            return;
        };

        self.mark_task_completed(DailyTaskKind::CompleteLevel);

        let was_completed = self.levels[index].is_completed;
        self.levels[index].is_completed = true;
        if self.levels[index].best_score.is_none_or(|best| attempts < best) {
            self.levels[index].best_score = Some(attempts);
        }

        if was_completed {
            return;
        }

        self.coins += LEVEL_REWARD_COINS;
        self.stats.total_levels_completed += 1;
        debug!(%location, level_id, attempts, "level completed for the first time");

        if attempts == 1 {
            self.stats.perfect_games += 1;
            self.unlock_achievement(AchievementKind::Perfection);
        }

        self.unlock_next_content(location, level_id);

        // Re-checked on every first completion; unlocking twice is a no-op
        if self.stats.total_levels_completed > 0 {
            self.unlock_achievement(AchievementKind::CodeBreaker);
        }
    }

    /// Record that a round was started
    pub fn record_game_played(&mut self) {
        self.stats.total_games_played += 1;
        self.unlock_achievement(AchievementKind::FirstGuess);
        self.mark_task_completed(DailyTaskKind::PlayGame);
    }

    /// Record that a round ran the full ten attempts
    pub fn record_persistent_play(&mut self) {
        self.unlock_achievement(AchievementKind::Persistence);
    }

    fn unlock_level(&mut self, location: Location, id: u8) {
        if let Some(level) =
            self.levels.iter_mut().find(|l| l.location == location && l.id == id)
        {
            level.is_unlocked = true;
        }
    }

    fn unlock_next_content(&mut self, location: Location, level_id: u8) {
        if level_id < LEVELS_PER_LOCATION {
            self.unlock_level(location, level_id + 1);
        } else if let Some(next) = location.next() {
            self.unlocked_locations.insert(next);
            self.unlock_level(next, 1);
            self.unlock_achievement(AchievementKind::WorldTraveler);
            info!(location = %next, "new location unlocked");
        }
    }

    // ------------------------------------------------------------------
    // Achievements
    // ------------------------------------------------------------------

    fn unlock_achievement(&mut self, kind: AchievementKind) {
        if let Some(achievement) =
            self.achievements.iter_mut().find(|a| a.kind == kind && !a.is_unlocked)
        {
            achievement.is_unlocked = true;
            debug!(?kind, "achievement unlocked");
        }
    }

    /// Claim an unlocked achievement, returning the coins awarded (0 when
    /// not claimable)
    pub fn claim_achievement(&mut self, kind: AchievementKind) -> u32 {
        let claimable = self
            .achievements
            .iter_mut()
            .find(|a| a.kind == kind && a.is_unlocked && !a.is_claimed);
        match claimable {
            Some(achievement) => {
                achievement.is_claimed = true;
                self.coins += ACHIEVEMENT_REWARD;
                ACHIEVEMENT_REWARD
            }
            None => 0,
        }
    }

    // ------------------------------------------------------------------
    // Shop
    // ------------------------------------------------------------------

    /// Buy a catalog item
    ///
    /// Fails (returning false, touching nothing) when the item is unknown,
    /// already owned, or too expensive.
    pub fn purchase_item(&mut self, kind: ShopItemKind, id: &str) -> bool {
        let Some(index) = self.shop_items.iter().position(|i| i.kind == kind && i.id == id)
        else {
            return false;
        };
        if self.shop_items[index].is_purchased || self.coins < self.shop_items[index].price {
            return false;
        }

        self.coins -= self.shop_items[index].price;
        self.shop_items[index].is_purchased = true;
        debug!(?kind, id, "shop item purchased");
        true
    }

    /// Select a background; ignored unless the item is owned or default
    pub fn select_background(&mut self, id: &str) {
        if self.is_selectable(ShopItemKind::Background, id) {
            self.selected_background = id.to_owned();
        }
    }

    /// Select a skin; ignored unless the item is owned or default
    pub fn select_skin(&mut self, id: &str) {
        if self.is_selectable(ShopItemKind::Skin, id) {
            self.selected_skin = id.to_owned();
        }
    }

    fn is_selectable(&self, kind: ShopItemKind, id: &str) -> bool {
        self.shop_items
            .iter()
            .any(|i| i.kind == kind && i.id == id && (i.is_purchased || i.is_default))
    }

    // ------------------------------------------------------------------
    // Dailies
    // ------------------------------------------------------------------

    /// Claim the daily login reward for `today`, returning the coins awarded
    /// (0 when already claimed today)
    pub fn claim_daily_reward(&mut self, today: NaiveDate) -> u32 {
        let reward = self.daily_reward.claim(today);
        self.coins += reward;
        reward
    }

    fn mark_task_completed(&mut self, kind: DailyTaskKind) {
        if let Some(task) = self.daily_tasks.iter_mut().find(|t| t.kind == kind) {
            task.is_completed = true;
        }
    }

    /// Claim a completed daily task, returning the coins awarded (0 when not
    /// claimable)
    pub fn claim_daily_task(&mut self, kind: DailyTaskKind) -> u32 {
        let claimable = self
            .daily_tasks
            .iter_mut()
            .find(|t| t.kind == kind && t.is_completed && !t.is_claimed);
        match claimable {
            Some(task) => {
                task.is_claimed = true;
                self.coins += DAILY_TASK_REWARD;
                DAILY_TASK_REWARD
            }
            None => 0,
        }
    }

    // ------------------------------------------------------------------
    // Settings
    // ------------------------------------------------------------------

    /// Set the music volume, deriving the enabled flag (muted = disabled)
    pub fn set_music_volume(&mut self, volume: f32) {
        let volume = volume.clamp(0.0, 1.0);
        self.audio.music_volume = volume;
        self.audio.music_enabled = volume > 0.0;
    }

    /// Set the effects volume, deriving the enabled flag (muted = disabled)
    pub fn set_sound_volume(&mut self, volume: f32) {
        let volume = volume.clamp(0.0, 1.0);
        self.audio.sound_volume = volume;
        self.audio.sound_enabled = volume > 0.0;
    }

    /// Move the map cursor; ignored for locations not yet unlocked
    pub fn set_current_location(&mut self, location: Location) {
        if self.unlocked_locations.contains(&location) {
            self.current_location = location;
        }
    }
}
