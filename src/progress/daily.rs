//! Daily reward streak and daily tasks
//!
//! Calendar-day semantics throughout: a "day" is a calendar date, not a
//! 24-hour window. The current date is always passed in by the caller so
//! this module never reads the wall clock.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Coins for each daily login claim
pub const DAILY_REWARD_COINS: u32 = 10;

/// Longest streak the counter reports
pub const MAX_STREAK_DAYS: u32 = 7;

/// Coins for each completed daily task
pub const DAILY_TASK_REWARD: u32 = 10;

/// Daily login reward state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyReward {
    last_claim: Option<NaiveDate>,
    consecutive_days: u32,
}

impl DailyReward {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last_claim: None,
            consecutive_days: 0,
        }
    }

    /// True when no claim has been recorded for `today`'s calendar date
    #[must_use]
    pub fn can_claim(&self, today: NaiveDate) -> bool {
        self.last_claim.is_none_or(|last| last != today)
    }

    /// Record a claim for `today`, returning the coins awarded
    ///
    /// Returns 0 when today's reward was already claimed. A claim exactly one
    /// day after the previous one extends the streak (capped at
    /// [`MAX_STREAK_DAYS`]); a longer gap restarts it at 1.
    pub fn claim(&mut self, today: NaiveDate) -> u32 {
        if !self.can_claim(today) {
            return 0;
        }

        match self.last_claim {
            Some(last) => {
                let elapsed = today.signed_duration_since(last).num_days();
                if elapsed == 1 {
                    self.consecutive_days = (self.consecutive_days + 1).min(MAX_STREAK_DAYS);
                } else if elapsed > 1 {
                    self.consecutive_days = 1;
                }
                // elapsed < 0 means the clock moved backwards; leave the
                // streak untouched and just record the claim
            }
            None => self.consecutive_days = 1,
        }

        self.last_claim = Some(today);
        DAILY_REWARD_COINS
    }

    /// Date of the most recent claim
    #[must_use]
    pub const fn last_claim(&self) -> Option<NaiveDate> {
        self.last_claim
    }

    /// Current streak length in days
    #[must_use]
    pub const fn consecutive_days(&self) -> u32 {
        self.consecutive_days
    }
}

/// The fixed daily task roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DailyTaskKind {
    PlayGame,
    CompleteLevel,
}

impl DailyTaskKind {
    pub const ALL: [Self; 2] = [Self::PlayGame, Self::CompleteLevel];

    /// Task description shown in the rewards screen
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::PlayGame => "Play 1 game",
            Self::CompleteLevel => "Complete 1 level",
        }
    }
}

/// Completion/claim state for one daily task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTask {
    pub(crate) kind: DailyTaskKind,
    pub(crate) is_completed: bool,
    pub(crate) is_claimed: bool,
}

impl DailyTask {
    pub(crate) const fn new(kind: DailyTaskKind) -> Self {
        Self {
            kind,
            is_completed: false,
            is_claimed: false,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> DailyTaskKind {
        self.kind
    }

    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.is_completed
    }

    #[must_use]
    pub const fn is_claimed(&self) -> bool {
        self.is_claimed
    }
}

/// Fresh task list, one entry per kind
pub(crate) fn default_tasks() -> Vec<DailyTask> {
    DailyTaskKind::ALL.iter().map(|&kind| DailyTask::new(kind)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn first_claim_starts_the_streak() {
        let mut reward = DailyReward::new();
        let today = date(2025, 7, 23);

        assert!(reward.can_claim(today));
        assert_eq!(reward.claim(today), DAILY_REWARD_COINS);
        assert_eq!(reward.consecutive_days(), 1);
        assert_eq!(reward.last_claim(), Some(today));
    }

    #[test]
    fn same_day_second_claim_pays_nothing() {
        let mut reward = DailyReward::new();
        let today = date(2025, 7, 23);

        reward.claim(today);
        assert!(!reward.can_claim(today));
        assert_eq!(reward.claim(today), 0);
        assert_eq!(reward.consecutive_days(), 1);
    }

    #[test]
    fn next_day_claim_extends_the_streak() {
        let mut reward = DailyReward::new();
        reward.claim(date(2025, 7, 23));
        assert_eq!(reward.claim(date(2025, 7, 24)), DAILY_REWARD_COINS);
        assert_eq!(reward.consecutive_days(), 2);
    }

    #[test]
    fn skipped_day_restarts_the_streak() {
        let mut reward = DailyReward::new();
        reward.claim(date(2025, 7, 23));
        reward.claim(date(2025, 7, 24));
        assert_eq!(reward.consecutive_days(), 2);

        reward.claim(date(2025, 7, 27));
        assert_eq!(reward.consecutive_days(), 1);
    }

    #[test]
    fn streak_caps_at_seven_days() {
        let mut reward = DailyReward::new();
        for day in 1..=12 {
            reward.claim(date(2025, 7, day));
        }
        assert_eq!(reward.consecutive_days(), MAX_STREAK_DAYS);
    }

    #[test]
    fn streak_survives_month_boundaries() {
        let mut reward = DailyReward::new();
        reward.claim(date(2025, 7, 31));
        reward.claim(date(2025, 8, 1));
        assert_eq!(reward.consecutive_days(), 2);
    }

    #[test]
    fn backwards_clock_keeps_the_streak() {
        let mut reward = DailyReward::new();
        reward.claim(date(2025, 7, 23));
        reward.claim(date(2025, 7, 24));

        assert_eq!(reward.claim(date(2025, 7, 20)), DAILY_REWARD_COINS);
        assert_eq!(reward.consecutive_days(), 2);
        assert_eq!(reward.last_claim(), Some(date(2025, 7, 20)));
    }

    #[test]
    fn default_task_list_covers_every_kind() {
        let tasks = default_tasks();
        assert_eq!(tasks.len(), DailyTaskKind::ALL.len());
        for task in tasks {
            assert!(!task.is_completed());
            assert!(!task.is_claimed());
        }
    }
}
