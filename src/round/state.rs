//! The round state machine
//!
//! States move `Playing -> Won` or `Playing -> Lost`, never back. Rejected
//! operations are silent no-ops rather than errors; callers are expected to
//! consult [`Round::can_interact`] / [`Round::can_submit`] first, mirroring
//! the machine's own admission checks.

use rand::Rng;

use super::CurrentRow;
use crate::core::{Code, Color, Feedback};

/// Maximum guesses per round
pub const MAX_ATTEMPTS: u32 = 10;

/// One committed guess and its feedback
///
/// Immutable once recorded; attempts are only ever appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attempt {
    guess: Code,
    feedback: Feedback,
    number: u32,
}

impl Attempt {
    /// The guessed colors
    #[must_use]
    pub const fn guess(&self) -> &Code {
        &self.guess
    }

    /// Feedback, order-aligned with the guess slots
    #[must_use]
    pub const fn feedback(&self) -> Feedback {
        self.feedback
    }

    /// 1-based position in the attempt history
    #[must_use]
    pub const fn number(&self) -> u32 {
        self.number
    }
}

/// Where the round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Playing,
    Won,
    Lost,
}

/// Result of a [`Round::submit_row`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The submission was not admissible (wrong state, incomplete row, or
    /// locked input) and nothing changed
    Rejected,
    /// Attempt recorded; the round continues with a fresh row
    Continue,
    /// The guess matched the secret
    Won {
        /// Number of attempts the win took
        attempts: u32,
    },
    /// The attempt cap was reached without a win
    Lost,
}

/// A single play session against one secret
#[derive(Debug, Clone)]
pub struct Round {
    secret: Code,
    row: CurrentRow,
    attempts: Vec<Attempt>,
    outcome: Outcome,
    input_locked: bool,
}

impl Round {
    /// Start a round with a freshly randomized secret
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::with_secret(Code::random(rng))
    }

    /// Start a round against a known secret (tools and tests)
    #[must_use]
    pub const fn with_secret(secret: Code) -> Self {
        Self {
            secret,
            row: CurrentRow::new(),
            attempts: Vec::new(),
            outcome: Outcome::Playing,
            input_locked: false,
        }
    }

    /// Current outcome
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Committed attempts, oldest first
    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    /// The row being assembled
    #[must_use]
    pub const fn current_row(&self) -> &CurrentRow {
        &self.row
    }

    /// Guesses still available
    #[must_use]
    pub fn attempts_left(&self) -> u32 {
        MAX_ATTEMPTS.saturating_sub(self.attempts.len() as u32)
    }

    /// True once the round is won or lost
    #[must_use]
    pub const fn is_over(&self) -> bool {
        !matches!(self.outcome, Outcome::Playing)
    }

    /// Block round input while an overlay is on screen
    pub fn lock_input(&mut self) {
        self.input_locked = true;
    }

    /// Re-admit round input
    pub fn unlock_input(&mut self) {
        self.input_locked = false;
    }

    /// True when color/position selection would be accepted
    #[must_use]
    pub const fn can_interact(&self) -> bool {
        matches!(self.outcome, Outcome::Playing) && !self.input_locked
    }

    /// True when a submission would be accepted
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.can_interact() && self.row.is_complete()
    }

    /// Place a color at the row cursor; no-op unless interaction is admitted
    pub fn select_color(&mut self, color: Color) {
        if !self.can_interact() {
            return;
        }
        self.row.place(color);
    }

    /// Move the row cursor; out-of-range or inadmissible calls are ignored
    pub fn select_position(&mut self, slot: usize) {
        if !self.can_interact() {
            return;
        }
        self.row.select(slot);
    }

    /// Commit the current row as an attempt
    ///
    /// Computes feedback against the secret, appends the attempt, and drives
    /// the state machine: all-exact feedback wins the round, the tenth
    /// attempt without a win loses it, anything else clears the row for the
    /// next guess.
    pub fn submit_row(&mut self) -> SubmitOutcome {
        if !self.can_submit() {
            return SubmitOutcome::Rejected;
        }
        let Some(guess) = self.row.as_code() else {
            return SubmitOutcome::Rejected;
        };

        let feedback = Feedback::evaluate(&self.secret, &guess);
        let number = self.attempts.len() as u32 + 1;
        self.attempts.push(Attempt {
            guess,
            feedback,
            number,
        });

        if feedback.is_win() {
            self.outcome = Outcome::Won;
            SubmitOutcome::Won { attempts: number }
        } else if number >= MAX_ATTEMPTS {
            self.outcome = Outcome::Lost;
            SubmitOutcome::Lost
        } else {
            self.row.clear();
            SubmitOutcome::Continue
        }
    }

    /// The secret, revealed only once the round is over
    #[must_use]
    pub const fn revealed_secret(&self) -> Option<&Code> {
        match self.outcome {
            Outcome::Playing => None,
            Outcome::Won | Outcome::Lost => Some(&self.secret),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: [Color; 4] = [Color::Red, Color::Green, Color::Brown, Color::Pink];
    const WRONG: [Color; 4] = [Color::Black, Color::Black, Color::Black, Color::Black];

    fn fill_row(round: &mut Round, colors: [Color; 4]) {
        round.select_position(0);
        for color in colors {
            round.select_color(color);
        }
    }

    #[test]
    fn fresh_round_is_playing_and_empty() {
        let round = Round::with_secret(Code::new(SECRET));
        assert_eq!(round.outcome(), Outcome::Playing);
        assert!(round.attempts().is_empty());
        assert_eq!(round.attempts_left(), MAX_ATTEMPTS);
        assert!(round.can_interact());
        assert!(!round.can_submit());
        assert_eq!(round.revealed_secret(), None);
    }

    #[test]
    fn submit_rejected_until_row_is_complete() {
        let mut round = Round::with_secret(Code::new(SECRET));
        round.select_color(Color::Red);
        assert_eq!(round.submit_row(), SubmitOutcome::Rejected);
        assert!(round.attempts().is_empty());
    }

    #[test]
    fn correct_guess_wins_on_any_attempt() {
        let mut round = Round::with_secret(Code::new(SECRET));

        fill_row(&mut round, WRONG);
        assert_eq!(round.submit_row(), SubmitOutcome::Continue);

        fill_row(&mut round, SECRET);
        assert_eq!(round.submit_row(), SubmitOutcome::Won { attempts: 2 });
        assert_eq!(round.outcome(), Outcome::Won);
        assert_eq!(round.revealed_secret(), Some(&Code::new(SECRET)));
    }

    #[test]
    fn tenth_wrong_attempt_loses_and_eleventh_is_never_recorded() {
        let mut round = Round::with_secret(Code::new(SECRET));

        for attempt in 1..MAX_ATTEMPTS {
            fill_row(&mut round, WRONG);
            assert_eq!(round.submit_row(), SubmitOutcome::Continue);
            assert_eq!(round.attempts().len() as u32, attempt);
        }

        fill_row(&mut round, WRONG);
        assert_eq!(round.submit_row(), SubmitOutcome::Lost);
        assert_eq!(round.outcome(), Outcome::Lost);
        assert_eq!(round.attempts().len() as u32, MAX_ATTEMPTS);

        // Terminal state: further operations change nothing
        assert_eq!(round.submit_row(), SubmitOutcome::Rejected);
        round.select_color(Color::Red);
        round.select_position(0);
        assert_eq!(round.attempts().len() as u32, MAX_ATTEMPTS);
    }

    #[test]
    fn winning_on_the_last_attempt_beats_the_cap() {
        let mut round = Round::with_secret(Code::new(SECRET));
        for _ in 1..MAX_ATTEMPTS {
            fill_row(&mut round, WRONG);
            round.submit_row();
        }

        fill_row(&mut round, SECRET);
        assert_eq!(
            round.submit_row(),
            SubmitOutcome::Won {
                attempts: MAX_ATTEMPTS
            }
        );
    }

    #[test]
    fn row_resets_between_attempts() {
        let mut round = Round::with_secret(Code::new(SECRET));
        fill_row(&mut round, WRONG);
        round.submit_row();

        assert!(!round.current_row().is_complete());
        assert_eq!(round.current_row().cursor(), 0);
    }

    #[test]
    fn locked_input_blocks_every_operation() {
        let mut round = Round::with_secret(Code::new(SECRET));
        fill_row(&mut round, SECRET);

        round.lock_input();
        assert!(!round.can_interact());
        assert!(!round.can_submit());
        assert_eq!(round.submit_row(), SubmitOutcome::Rejected);

        round.select_color(Color::Black);
        round.select_position(2);
        assert_eq!(round.current_row().cursor(), 3);

        round.unlock_input();
        assert_eq!(round.submit_row(), SubmitOutcome::Won { attempts: 1 });
    }

    #[test]
    fn secret_stays_hidden_while_playing() {
        let mut round = Round::with_secret(Code::new(SECRET));
        fill_row(&mut round, WRONG);
        round.submit_row();
        assert_eq!(round.revealed_secret(), None);
    }
}
