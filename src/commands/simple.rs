//! Simple interactive CLI mode
//!
//! Text-based play loop without the TUI. Colors are entered as digits 1-8;
//! a full row submits automatically.

use std::io::{self, Write};

use anyhow::Result;
use colored::Colorize;

use crate::audio::AudioSink;
use crate::core::{CODE_LENGTH, Color};
use crate::output::formatters::{feedback_line, palette_line};
use crate::round::{MAX_ATTEMPTS, SubmitOutcome};
use crate::session::GameSession;

/// Run the simple text play loop
///
/// # Errors
///
/// Returns an error on I/O failures while reading user input.
pub fn run_simple<A: AudioSink>(session: &mut GameSession<A>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Chromacode - Text Mode                       ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Crack the secret 4-color code in 10 attempts.");
    println!("Enter a guess as four digits, e.g. '1352'. Hints per slot:");
    println!("  {} exact color and position", "●".green());
    println!("  {} color present elsewhere", "●".red());
    println!("  {} color not in the code\n", "·".dimmed());
    println!("Commands: 'q' to quit, 'r' to restart the level\n");
    println!("{}", palette_line());

    'levels: loop {
        let Some(level) = session.progress().next_open_level() else {
            break;
        };
        let (location, level_id) = (level.location(), level.id());

        println!("\n{}", "─".repeat(62).cyan());
        println!(
            "{} — level {}",
            location.info().title.bright_yellow().bold(),
            level_id
        );
        println!("{}", location.info().professor_comment.italic());
        println!("{}", "─".repeat(62).cyan());

        let Some(mut round) = session.start_round(location, level_id) else {
            // next_open_level only returns unlocked levels
            break;
        };

        loop {
            let input = prompt(&format!(
                "Guess {}/{}",
                round.attempts().len() + 1,
                MAX_ATTEMPTS
            ))?;

            match input.as_str() {
                "q" | "quit" | "exit" => {
                    session.shutdown();
                    println!("\nProgress saved. See you tomorrow!\n");
                    return Ok(());
                }
                "r" | "restart" => {
                    println!("\n🔄 Restarting the level!\n");
                    continue 'levels;
                }
                guess => {
                    let Some(colors) = parse_guess(guess) else {
                        println!(
                            "{}",
                            "Enter exactly four digits between 1 and 8, e.g. '1352'".red()
                        );
                        continue;
                    };

                    round.select_position(0);
                    for color in colors {
                        round.select_color(color);
                    }
                    session.play_button_sound();

                    match session.submit_row(&mut round, location, level_id) {
                        SubmitOutcome::Continue => {
                            let attempt = round.attempts().last().expect("attempt just recorded");
                            println!("  {}", feedback_line(attempt));
                        }
                        SubmitOutcome::Won { attempts } => {
                            let attempt = round.attempts().last().expect("attempt just recorded");
                            println!("  {}", feedback_line(attempt));
                            print_victory(attempts, session.progress().coins());
                            if !ask_continue()? {
                                session.shutdown();
                                return Ok(());
                            }
                            continue 'levels;
                        }
                        SubmitOutcome::Lost => {
                            let attempt = round.attempts().last().expect("attempt just recorded");
                            println!("  {}", feedback_line(attempt));
                            println!("\n{}", "The code kept its secret...".red().bold());
                            if let Some(secret) = round.revealed_secret() {
                                println!("It was: {}", secret.to_string().bright_white());
                            }
                            if !ask_continue()? {
                                session.shutdown();
                                return Ok(());
                            }
                            continue 'levels;
                        }
                        SubmitOutcome::Rejected => {
                            println!("{}", "That guess was not accepted.".red());
                        }
                    }
                }
            }
        }
    }

    session.shutdown();
    Ok(())
}

fn print_victory(attempts: u32, coins: u32) {
    println!("\n{}", "═".repeat(62).bright_cyan());
    println!(
        "{}",
        "  ✨  C O D E   C R A C K E D !  ✨  ".bright_green().bold()
    );
    println!("{}", "═".repeat(62).bright_cyan());

    let praise = match attempts {
        1 => "Perfect! First try!",
        2..=4 => "Brilliant deduction!",
        5..=7 => "Solid logical work!",
        _ => "Persistence pays off!",
    };
    println!("\n  {praise}");
    println!(
        "  Solved in {} {} — wallet now holds {} coins\n",
        attempts.to_string().bright_cyan().bold(),
        if attempts == 1 { "attempt" } else { "attempts" },
        coins.to_string().bright_yellow()
    );
}

fn parse_guess(input: &str) -> Option<[Color; CODE_LENGTH]> {
    let digits: Vec<usize> = input
        .chars()
        .map(|c| c.to_digit(10).map(|d| d as usize))
        .collect::<Option<Vec<_>>>()?;

    if digits.len() != CODE_LENGTH {
        return None;
    }

    let mut colors = [Color::Purple; CODE_LENGTH];
    for (slot, digit) in digits.into_iter().enumerate() {
        if !(1..=Color::ALL.len()).contains(&digit) {
            return None;
        }
        colors[slot] = Color::ALL[digit - 1];
    }
    Some(colors)
}

fn ask_continue() -> Result<bool> {
    let answer = prompt("Keep playing? (yes/no)")?;
    Ok(!matches!(answer.as_str(), "n" | "no" | "q" | "quit"))
}

fn prompt(label: &str) -> Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_lowercase())
}
