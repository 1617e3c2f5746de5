//! Player progression: levels, achievements, currency, shop, and dailies
//!
//! [`PlayerProgress`] is the single durable aggregate; everything else in
//! this module is either a record it owns or static reference data.

mod achievement;
mod daily;
mod ledger;
mod level;
mod location;
mod shop;

pub use achievement::{ACHIEVEMENT_REWARD, Achievement, AchievementInfo, AchievementKind};
pub use daily::{
    DAILY_REWARD_COINS, DAILY_TASK_REWARD, DailyReward, DailyTask, DailyTaskKind, MAX_STREAK_DAYS,
};
pub use ledger::{AudioSettings, LEVEL_REWARD_COINS, PlayStats, PlayerProgress};
pub use level::Level;
pub use location::{LEVELS_PER_LOCATION, Location, LocationInfo};
pub use shop::{ShopItem, ShopItemKind};
