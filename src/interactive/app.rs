//! TUI application state and logic

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

use rand::prelude::IndexedRandom;

use crate::audio::AudioSink;
use crate::core::{CODE_LENGTH, Color};
use crate::progress::{LEVEL_REWARD_COINS, Location};
use crate::round::{Round, SubmitOutcome};
use crate::session::GameSession;

const VICTORY_MESSAGES: [&str; 5] = [
    "Excellent deduction! Your logical thinking is impressive.",
    "Brilliant work! You've cracked the code with skill and precision.",
    "Outstanding! Your analytical abilities are truly remarkable.",
    "Magnificent! Logic and patience have led you to victory.",
    "Superb reasoning! You've demonstrated the power of systematic thinking.",
];

const DEFEAT_MESSAGES: [&str; 5] = [
    "Don't worry! Even the greatest minds need multiple attempts. Try again!",
    "Close, but not quite there! Logic puzzles require patience and practice.",
    "Every failed attempt teaches us something valuable. Keep experimenting!",
    "The code remains hidden, but your determination will crack it eventually!",
    "Remember: systematic elimination is key. You'll get it next time!",
];

/// Why a popup is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    /// Professor greeting when a level begins
    Intro,
    Victory,
    Defeat,
}

/// A modal message; round input stays locked while it is visible
#[derive(Debug, Clone)]
pub struct Overlay {
    pub title: String,
    pub body: String,
    pub kind: OverlayKind,
}

/// Application state
pub struct App<A: AudioSink> {
    pub session: GameSession<A>,
    pub round: Round,
    pub location: Location,
    pub level_id: u8,
    pub overlay: Option<Overlay>,
    pub should_quit: bool,
}

impl<A: AudioSink> App<A> {
    /// Open the app on the next playable level
    #[must_use]
    pub fn new(mut session: GameSession<A>) -> Self {
        let (location, level_id) = session
            .progress()
            .next_open_level()
            .map_or((Location::France, 1), |l| (l.location(), l.id()));
        let round = session
            .start_round(location, level_id)
            .unwrap_or_else(|| Round::new(&mut rand::rng()));

        let mut app = Self {
            session,
            round,
            location,
            level_id,
            overlay: None,
            should_quit: false,
        };
        app.show_overlay(Overlay {
            title: location.info().title.to_owned(),
            body: location.info().professor_comment.to_owned(),
            kind: OverlayKind::Intro,
        });
        app
    }

    fn show_overlay(&mut self, overlay: Overlay) {
        self.round.lock_input();
        self.overlay = Some(overlay);
    }

    /// Close the popup and run its follow-up action
    pub fn dismiss_overlay(&mut self) {
        let Some(overlay) = self.overlay.take() else {
            return;
        };
        match overlay.kind {
            OverlayKind::Intro => self.round.unlock_input(),
            OverlayKind::Victory => self.advance_level(),
            OverlayKind::Defeat => self.restart_level(),
        }
    }

    fn start_level(&mut self, location: Location, level_id: u8) {
        if let Some(round) = self.session.start_round(location, level_id) {
            self.round = round;
            self.location = location;
            self.level_id = level_id;
        }
    }

    /// Move on to the next playable level after a win
    fn advance_level(&mut self) {
        let next = self
            .session
            .progress()
            .next_open_level()
            .map(|l| (l.location(), l.id()));
        if let Some((location, level_id)) = next {
            let entering_new_location = location != self.location;
            self.start_level(location, level_id);
            if entering_new_location {
                self.show_overlay(Overlay {
                    title: location.info().title.to_owned(),
                    body: location.info().professor_comment.to_owned(),
                    kind: OverlayKind::Intro,
                });
            }
        }
    }

    /// Replay the current level with a fresh secret
    pub fn restart_level(&mut self) {
        self.start_level(self.location, self.level_id);
    }

    fn submit(&mut self) {
        match self
            .session
            .submit_row(&mut self.round, self.location, self.level_id)
        {
            SubmitOutcome::Won { attempts } => {
                let mut rng = rand::rng();
                let message = VICTORY_MESSAGES.choose(&mut rng).unwrap_or(&VICTORY_MESSAGES[0]);
                let body = format!(
                    "{message}\n\nCracked in {attempts} {} — +{LEVEL_REWARD_COINS} coins.\n\nPress Enter to continue.",
                    if attempts == 1 { "attempt" } else { "attempts" }
                );
                self.show_overlay(Overlay {
                    title: "Code cracked!".to_owned(),
                    body,
                    kind: OverlayKind::Victory,
                });
            }
            SubmitOutcome::Lost => {
                let mut rng = rand::rng();
                let message = DEFEAT_MESSAGES.choose(&mut rng).unwrap_or(&DEFEAT_MESSAGES[0]);
                let secret = self
                    .round
                    .revealed_secret()
                    .map(ToString::to_string)
                    .unwrap_or_default();
                self.show_overlay(Overlay {
                    title: "Out of attempts".to_owned(),
                    body: format!(
                        "{message}\n\nThe code was: {secret}\n\nPress Enter to try again."
                    ),
                    kind: OverlayKind::Defeat,
                });
            }
            SubmitOutcome::Continue | SubmitOutcome::Rejected => {}
        }
    }

    /// Handle one key press
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.overlay.is_some() {
            match code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Esc => self.dismiss_overlay(),
                _ => {}
            }
            return;
        }

        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') => self.restart_level(),
            KeyCode::Char(c) => {
                if let Some(digit) = c.to_digit(10) {
                    let index = digit as usize;
                    if (1..=Color::ALL.len()).contains(&index) {
                        self.round.select_color(Color::ALL[index - 1]);
                        self.session.play_button_sound();
                    }
                }
            }
            KeyCode::Left => {
                let cursor = self.round.current_row().cursor();
                self.round.select_position(cursor.saturating_sub(1));
            }
            KeyCode::Right => {
                let cursor = self.round.current_row().cursor();
                self.round.select_position((cursor + 1).min(CODE_LENGTH - 1));
            }
            KeyCode::Enter => {
                if self.round.can_submit() {
                    self.submit();
                }
            }
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui<A: AudioSink>(app: App<A>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, A: AudioSink>(
    terminal: &mut Terminal<B>,
    mut app: App<A>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            app.session.shutdown();
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::SilentAudio;
    use crate::core::Code;
    use crate::progress::PlayerProgress;
    use crate::storage::ProgressStore;

    fn test_app() -> (tempfile::TempDir, App<SilentAudio>) {
        let dir = tempfile::tempdir().unwrap();
        let store = ProgressStore::with_path(dir.path().join("progress.json"));
        let session = GameSession::with_progress(PlayerProgress::new(), store, SilentAudio);
        (dir, App::new(session))
    }

    #[test]
    fn app_opens_on_the_first_level_with_an_intro() {
        let (_dir, app) = test_app();
        assert_eq!((app.location, app.level_id), (Location::France, 1));
        assert!(matches!(
            app.overlay.as_ref().map(|o| o.kind),
            Some(OverlayKind::Intro)
        ));
        assert!(!app.round.can_interact());
    }

    #[test]
    fn dismissing_the_intro_unlocks_input() {
        let (_dir, mut app) = test_app();
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        assert!(app.overlay.is_none());
        assert!(app.round.can_interact());
    }

    #[test]
    fn digit_keys_fill_the_row() {
        let (_dir, mut app) = test_app();
        app.dismiss_overlay();

        for key in ['1', '2', '3', '4'] {
            app.handle_key(KeyCode::Char(key), KeyModifiers::NONE);
        }
        assert!(app.round.can_submit());

        // 9 and 0 are not palette digits
        app.handle_key(KeyCode::Char('9'), KeyModifiers::NONE);
        app.handle_key(KeyCode::Char('0'), KeyModifiers::NONE);
        assert_eq!(app.round.attempts().len(), 0);
    }

    #[test]
    fn winning_submission_raises_the_victory_overlay() {
        let (_dir, mut app) = test_app();
        app.dismiss_overlay();
        app.round = Round::with_secret(Code::new([Color::Red; CODE_LENGTH]));

        for _ in 0..CODE_LENGTH {
            app.handle_key(KeyCode::Char('2'), KeyModifiers::NONE); // Red
        }
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);

        assert!(matches!(
            app.overlay.as_ref().map(|o| o.kind),
            Some(OverlayKind::Victory)
        ));
        assert!(
            app.session
                .progress()
                .level(Location::France, 1)
                .unwrap()
                .is_completed()
        );
    }

    #[test]
    fn victory_overlay_advances_to_the_next_level() {
        let (_dir, mut app) = test_app();
        app.dismiss_overlay();
        app.round = Round::with_secret(Code::new([Color::Red; CODE_LENGTH]));
        for _ in 0..CODE_LENGTH {
            app.handle_key(KeyCode::Char('2'), KeyModifiers::NONE);
        }
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);

        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!((app.location, app.level_id), (Location::France, 2));
        assert!(app.round.attempts().is_empty());
    }
}
