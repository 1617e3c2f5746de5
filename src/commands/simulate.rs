//! Round simulation
//!
//! Plays batches of standalone rounds against random secrets to exercise the
//! round engine and gather attempt statistics. Rounds here never touch the
//! ledger; this is a stress harness, not a play mode.

use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rand::prelude::IndexedRandom;
use rayon::prelude::*;

use crate::core::{Code, Color, Feedback};
use crate::round::{MAX_ATTEMPTS, Round, SubmitOutcome};

/// How simulated guesses are chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guesser {
    /// Uniformly random codes every attempt; wins are rare
    Random,
    /// Only guesses codes still consistent with the feedback so far
    Consistent,
}

impl Guesser {
    /// Create a guesser from a name string; defaults to consistent
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "random" => Self::Random,
            _ => Self::Consistent,
        }
    }

    /// Name for display
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Consistent => "consistent",
        }
    }
}

/// Outcome of one simulated round
#[derive(Debug, Clone, Copy)]
struct RoundReport {
    won: bool,
    attempts: u32,
}

/// Aggregate result of a simulation run
#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub guesser: Guesser,
    pub rounds: usize,
    pub wins: usize,
    pub losses: usize,
    /// `attempt_distribution[n - 1]` counts wins that took `n` attempts
    pub attempt_distribution: [usize; MAX_ATTEMPTS as usize],
}

impl SimulationResult {
    /// Fraction of rounds won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rounds == 0 {
            return 0.0;
        }
        self.wins as f64 / self.rounds as f64
    }

    /// Mean attempts across winning rounds, `None` without any win
    #[must_use]
    pub fn average_winning_attempts(&self) -> Option<f64> {
        if self.wins == 0 {
            return None;
        }
        let total: usize = self
            .attempt_distribution
            .iter()
            .enumerate()
            .map(|(i, count)| (i + 1) * count)
            .sum();
        Some(total as f64 / self.wins as f64)
    }
}

/// Every code over the palette (8^4 = 4096)
fn all_codes() -> Vec<Code> {
    let mut codes = Vec::with_capacity(4096);
    for a in Color::ALL {
        for b in Color::ALL {
            for c in Color::ALL {
                for d in Color::ALL {
                    codes.push(Code::new([a, b, c, d]));
                }
            }
        }
    }
    codes
}

fn submit_guess(round: &mut Round, guess: Code) -> SubmitOutcome {
    round.select_position(0);
    for &color in guess.colors() {
        round.select_color(color);
    }
    round.submit_row()
}

fn play_random_round<R: Rng + ?Sized>(rng: &mut R) -> RoundReport {
    let mut round = Round::new(rng);
    loop {
        match submit_guess(&mut round, Code::random(rng)) {
            SubmitOutcome::Continue => {}
            SubmitOutcome::Won { attempts } => {
                return RoundReport {
                    won: true,
                    attempts,
                };
            }
            SubmitOutcome::Lost => {
                return RoundReport {
                    won: false,
                    attempts: MAX_ATTEMPTS,
                };
            }
            SubmitOutcome::Rejected => unreachable!("guess rows are always complete"),
        }
    }
}

/// Play one round guessing only codes consistent with all feedback so far
///
/// Classic candidate elimination: after each attempt, keep exactly the codes
/// that would have produced the observed feedback had they been the secret.
fn play_consistent_round<R: Rng + ?Sized>(rng: &mut R) -> RoundReport {
    let mut round = Round::new(rng);
    let mut candidates = all_codes();

    loop {
        let guess = candidates
            .choose(rng)
            .copied()
            .unwrap_or_else(|| Code::random(rng));

        match submit_guess(&mut round, guess) {
            SubmitOutcome::Continue => {
                if let Some(last) = round.attempts().last() {
                    let observed = last.feedback();
                    candidates
                        .retain(|candidate| Feedback::evaluate(candidate, &guess) == observed);
                }
            }
            SubmitOutcome::Won { attempts } => {
                return RoundReport {
                    won: true,
                    attempts,
                };
            }
            SubmitOutcome::Lost => {
                return RoundReport {
                    won: false,
                    attempts: MAX_ATTEMPTS,
                };
            }
            SubmitOutcome::Rejected => unreachable!("guess rows are always complete"),
        }
    }
}

/// Run `rounds` independent rounds in parallel
#[must_use]
pub fn run_simulation(guesser: Guesser, rounds: usize) -> SimulationResult {
    let pb = ProgressBar::new(rounds as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let reports: Vec<RoundReport> = (0..rounds)
        .into_par_iter()
        .map(|_| {
            let mut rng = rand::rng();
            let report = match guesser {
                Guesser::Random => play_random_round(&mut rng),
                Guesser::Consistent => play_consistent_round(&mut rng),
            };
            pb.inc(1);
            report
        })
        .collect();
    pb.finish_and_clear();

    let mut result = SimulationResult {
        guesser,
        rounds,
        wins: 0,
        losses: 0,
        attempt_distribution: [0; MAX_ATTEMPTS as usize],
    };
    for report in reports {
        if report.won {
            result.wins += 1;
            result.attempt_distribution[report.attempts as usize - 1] += 1;
        } else {
            result.losses += 1;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_codes_enumerates_the_full_space() {
        let codes = all_codes();
        assert_eq!(codes.len(), 4096);
        assert_eq!(codes[0], Code::new([Color::Purple; 4]));
        assert_eq!(codes[4095], Code::new([Color::Magenta; 4]));
    }

    #[test]
    fn every_round_terminates_within_the_cap() {
        let mut rng = rand::rng();
        for _ in 0..20 {
            let report = play_random_round(&mut rng);
            assert!(report.attempts >= 1);
            assert!(report.attempts <= MAX_ATTEMPTS);
        }
    }

    #[test]
    fn consistent_guesser_wins_almost_always() {
        // Candidate elimination over 4096 codes typically finishes in four
        // to five attempts; losses are vanishingly rare
        let mut rng = rand::rng();
        let mut wins = 0;
        for _ in 0..10 {
            let report = play_consistent_round(&mut rng);
            assert!(report.attempts <= MAX_ATTEMPTS);
            if report.won {
                wins += 1;
            }
        }
        assert!(wins >= 8, "consistent guesser won only {wins}/10 rounds");
    }

    #[test]
    fn simulation_accounts_for_every_round() {
        let result = run_simulation(Guesser::Consistent, 8);
        assert_eq!(result.rounds, 8);
        assert_eq!(result.wins + result.losses, 8);
        assert_eq!(
            result.attempt_distribution.iter().sum::<usize>(),
            result.wins
        );
    }

    #[test]
    fn win_rate_handles_empty_runs() {
        let result = SimulationResult {
            guesser: Guesser::Random,
            rounds: 0,
            wins: 0,
            losses: 0,
            attempt_distribution: [0; MAX_ATTEMPTS as usize],
        };
        assert!((result.win_rate()).abs() < f64::EPSILON);
        assert_eq!(result.average_winning_attempts(), None);
    }
}
