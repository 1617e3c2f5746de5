//! Session wiring between rounds, progression, storage, and audio
//!
//! [`GameSession`] is the explicit context object a front-end holds for the
//! lifetime of the process: one ledger, one store, one audio sink. All
//! durable mutations flow through it so every one is followed by a save, and
//! round outcomes land in the ledger exactly once.

use chrono::Local;
use tracing::{debug, info};

use crate::audio::AudioSink;
use crate::progress::{AchievementKind, DailyTaskKind, Location, PlayerProgress, ShopItemKind};
use crate::round::{MAX_ATTEMPTS, Round, SubmitOutcome};
use crate::storage::{LOAD_TIMEOUT, ProgressStore};

/// One running game: ledger, store, and audio sink
pub struct GameSession<A: AudioSink> {
    progress: PlayerProgress,
    store: ProgressStore,
    audio: A,
}

impl<A: AudioSink> GameSession<A> {
    /// Load the ledger (bounded by the startup timeout) and apply its audio
    /// preferences to the sink
    #[must_use]
    pub fn bootstrap(store: ProgressStore, audio: A) -> Self {
        let progress = store.load_with_timeout(LOAD_TIMEOUT);
        let session = Self {
            progress,
            store,
            audio,
        };
        session.apply_audio_settings();
        info!("game session ready");
        session
    }

    /// Session over an already-loaded ledger (tests and tools)
    #[must_use]
    pub fn with_progress(progress: PlayerProgress, store: ProgressStore, audio: A) -> Self {
        Self {
            progress,
            store,
            audio,
        }
    }

    fn apply_audio_settings(&self) {
        let audio = self.progress.audio();
        self.audio.set_music_volume(audio.music_volume);
        self.audio.set_sound_volume(audio.sound_volume);
        if audio.music_enabled && audio.music_volume > 0.0 {
            self.audio.start_music();
        } else {
            self.audio.stop_music();
        }
    }

    /// Read access to the ledger
    #[must_use]
    pub const fn progress(&self) -> &PlayerProgress {
        &self.progress
    }

    /// The audio sink
    #[must_use]
    pub const fn audio(&self) -> &A {
        &self.audio
    }

    /// Click feedback for accepted interactions, honoring the sound toggle
    pub fn play_button_sound(&self) {
        if self.progress.audio().sound_enabled {
            self.audio.play_button_sound();
        }
    }

    // ------------------------------------------------------------------
    // Rounds
    // ------------------------------------------------------------------

    /// Start a round for an unlocked level
    ///
    /// Returns `None` when the level is unknown or still locked. Starting a
    /// round counts as a game played.
    pub fn start_round(&mut self, location: Location, level_id: u8) -> Option<Round> {
        let level = self.progress.level(location, level_id)?;
        if !level.is_unlocked() {
            debug!(%location, level_id, "refusing round for locked level");
            return None;
        }

        self.progress.record_game_played();
        self.store.save_in_background(&self.progress);

        let mut rng = rand::rng();
        Some(Round::new(&mut rng))
    }

    /// Submit the round's current row and wire any terminal outcome into
    /// the ledger
    ///
    /// A win completes the level; running the full ten attempts (won or
    /// lost) earns the persistence feat; terminal outcomes trigger the
    /// audio call points and a background save.
    pub fn submit_row(
        &mut self,
        round: &mut Round,
        location: Location,
        level_id: u8,
    ) -> SubmitOutcome {
        let outcome = round.submit_row();

        if !matches!(outcome, SubmitOutcome::Rejected)
            && round.attempts().len() as u32 == MAX_ATTEMPTS
        {
            self.progress.record_persistent_play();
        }

        match outcome {
            SubmitOutcome::Won { attempts } => {
                self.progress.complete_level(location, level_id, attempts);
                if self.progress.audio().sound_enabled {
                    self.audio.play_victory_sound();
                }
                self.store.save_in_background(&self.progress);
            }
            SubmitOutcome::Lost => {
                if self.progress.audio().sound_enabled {
                    self.audio.play_defeat_sound();
                }
                self.store.save_in_background(&self.progress);
            }
            SubmitOutcome::Continue | SubmitOutcome::Rejected => {}
        }

        outcome
    }

    // ------------------------------------------------------------------
    // Shop and claims
    // ------------------------------------------------------------------

    /// Buy a catalog item; positive feedback on success, negative on failure
    pub fn purchase_item(&mut self, kind: ShopItemKind, id: &str) -> bool {
        let purchased = self.progress.purchase_item(kind, id);
        if purchased {
            self.play_button_sound();
            self.store.save_in_background(&self.progress);
        } else if self.progress.audio().sound_enabled {
            self.audio.play_defeat_sound();
        }
        purchased
    }

    pub fn select_background(&mut self, id: &str) {
        self.progress.select_background(id);
        self.store.save_in_background(&self.progress);
    }

    pub fn select_skin(&mut self, id: &str) {
        self.progress.select_skin(id);
        self.store.save_in_background(&self.progress);
    }

    /// Claim an achievement; returns the coins awarded
    pub fn claim_achievement(&mut self, kind: AchievementKind) -> u32 {
        let reward = self.progress.claim_achievement(kind);
        if reward > 0 {
            self.store.save_in_background(&self.progress);
        }
        reward
    }

    /// Claim today's login reward; returns the coins awarded
    pub fn claim_daily_reward(&mut self) -> u32 {
        let today = Local::now().date_naive();
        let reward = self.progress.claim_daily_reward(today);
        if reward > 0 {
            self.store.save_in_background(&self.progress);
        }
        reward
    }

    /// Claim a completed daily task; returns the coins awarded
    pub fn claim_daily_task(&mut self, kind: DailyTaskKind) -> u32 {
        let reward = self.progress.claim_daily_task(kind);
        if reward > 0 {
            self.store.save_in_background(&self.progress);
        }
        reward
    }

    // ------------------------------------------------------------------
    // Settings and lifecycle
    // ------------------------------------------------------------------

    pub fn set_current_location(&mut self, location: Location) {
        self.progress.set_current_location(location);
        self.store.save_in_background(&self.progress);
    }

    pub fn set_music_volume(&mut self, volume: f32) {
        self.progress.set_music_volume(volume);
        let audio = self.progress.audio();
        self.audio.set_music_volume(audio.music_volume);
        if audio.music_enabled && audio.music_volume > 0.0 {
            self.audio.start_music();
        } else {
            self.audio.stop_music();
        }
        self.store.save_in_background(&self.progress);
    }

    pub fn set_sound_volume(&mut self, volume: f32) {
        self.progress.set_sound_volume(volume);
        self.audio.set_sound_volume(self.progress.audio().sound_volume);
        self.store.save_in_background(&self.progress);
    }

    /// Save synchronously and pause audio (app going to background)
    pub fn suspend(&self) {
        self.store.save(&self.progress);
        self.audio.pause_music();
    }

    /// Resume audio after a suspend
    pub fn resume(&self) {
        let audio = self.progress.audio();
        if audio.music_enabled && audio.music_volume > 0.0 {
            self.audio.resume_music();
        }
    }

    /// Final synchronous save and audio teardown
    pub fn shutdown(&self) {
        self.store.save(&self.progress);
        self.audio.stop_music();
    }

    /// Wipe the stored ledger and start over
    pub fn reset_progress(&mut self) {
        self.progress = self.store.reset();
        self.apply_audio_settings();
    }

    /// Decode-check the stored ledger
    #[must_use]
    pub fn validate_saved(&self) -> bool {
        self.store.validate()
    }

    /// Pretty JSON snapshot of the stored ledger
    #[must_use]
    pub fn export_snapshot(&self) -> Option<String> {
        self.store.export_snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::SilentAudio;
    use crate::core::{Code, Color};
    use crate::round::Outcome;

    const SECRET: [Color; 4] = [Color::Red, Color::Green, Color::Brown, Color::Pink];
    const WRONG: [Color; 4] = [Color::Black, Color::Black, Color::Black, Color::Black];

    fn test_session() -> (tempfile::TempDir, GameSession<SilentAudio>) {
        let dir = tempfile::tempdir().unwrap();
        let store = ProgressStore::with_path(dir.path().join("progress.json"));
        let session = GameSession::with_progress(PlayerProgress::new(), store, SilentAudio);
        (dir, session)
    }

    fn submit(
        session: &mut GameSession<SilentAudio>,
        round: &mut Round,
        colors: [Color; 4],
    ) -> SubmitOutcome {
        for color in colors {
            round.select_color(color);
        }
        session.submit_row(round, Location::France, 1)
    }

    #[test]
    fn starting_a_round_counts_a_game() {
        let (_dir, mut session) = test_session();

        assert!(session.start_round(Location::France, 1).is_some());
        assert_eq!(session.progress().stats().total_games_played, 1);
        assert!(
            session
                .progress()
                .achievement(AchievementKind::FirstGuess)
                .unwrap()
                .is_unlocked()
        );
    }

    #[test]
    fn locked_levels_refuse_rounds() {
        let (_dir, mut session) = test_session();

        assert!(session.start_round(Location::France, 2).is_none());
        assert!(session.start_round(Location::Japan, 1).is_none());
        assert_eq!(session.progress().stats().total_games_played, 0);
    }

    #[test]
    fn winning_a_round_completes_the_level() {
        let (_dir, mut session) = test_session();
        let mut round = Round::with_secret(Code::new(SECRET));

        let outcome = submit(&mut session, &mut round, SECRET);
        assert_eq!(outcome, SubmitOutcome::Won { attempts: 1 });

        let progress = session.progress();
        assert!(progress.level(Location::France, 1).unwrap().is_completed());
        assert_eq!(progress.coins(), 100);
        assert_eq!(progress.stats().perfect_games, 1);
    }

    #[test]
    fn losing_at_the_cap_earns_persistence() {
        let (_dir, mut session) = test_session();
        let mut round = Round::with_secret(Code::new(SECRET));

        for _ in 0..MAX_ATTEMPTS {
            submit(&mut session, &mut round, WRONG);
        }

        assert_eq!(round.outcome(), Outcome::Lost);
        let progress = session.progress();
        assert!(
            progress
                .achievement(AchievementKind::Persistence)
                .unwrap()
                .is_unlocked()
        );
        assert!(!progress.level(Location::France, 1).unwrap().is_completed());
    }

    #[test]
    fn winning_on_the_tenth_attempt_earns_persistence_too() {
        let (_dir, mut session) = test_session();
        let mut round = Round::with_secret(Code::new(SECRET));

        for _ in 1..MAX_ATTEMPTS {
            submit(&mut session, &mut round, WRONG);
        }
        let outcome = submit(&mut session, &mut round, SECRET);

        assert_eq!(
            outcome,
            SubmitOutcome::Won {
                attempts: MAX_ATTEMPTS
            }
        );
        assert!(
            session
                .progress()
                .achievement(AchievementKind::Persistence)
                .unwrap()
                .is_unlocked()
        );
    }

    #[test]
    fn purchase_failure_leaves_the_wallet_alone() {
        let (_dir, mut session) = test_session();

        assert!(!session.purchase_item(ShopItemKind::Skin, "cyber"));
        assert_eq!(session.progress().coins(), 0);
    }

    #[test]
    fn reset_returns_to_fresh_progress() {
        let (_dir, mut session) = test_session();
        let mut round = Round::with_secret(Code::new(SECRET));
        submit(&mut session, &mut round, SECRET);
        assert_eq!(session.progress().coins(), 100);

        session.reset_progress();
        assert_eq!(session.progress(), &PlayerProgress::new());
        assert!(session.validate_saved());
    }
}
