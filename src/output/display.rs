//! Display functions for command results

use colored::Colorize;

use super::formatters::{progress_bar, streak_bar};
use crate::commands::{ProgressSummary, SimulationResult, completion_ratio};

/// Print the stats command's ledger summary
pub fn print_progress_summary(summary: &ProgressSummary) {
    println!("\n{}", "═".repeat(62).cyan());
    println!(" {} ", "PLAYER PROGRESS".bright_cyan().bold());
    println!("{}", "═".repeat(62).cyan());

    println!(
        "\n💰 Coins:        {}",
        summary.coins.to_string().bright_yellow().bold()
    );
    println!(
        "🎮 Games played: {}   Levels won: {}   Perfect: {}",
        summary.total_games_played, summary.total_levels_completed, summary.perfect_games
    );
    println!("🔥 Daily streak: {}", streak_bar(summary.streak_days));

    let ratio = completion_ratio(summary);
    println!(
        "\n🌍 World progress: [{}] {:.0}%",
        progress_bar(ratio, 30).green(),
        ratio * 100.0
    );

    for entry in &summary.locations {
        let title = if entry.unlocked {
            entry.location.info().title.bright_white().bold()
        } else {
            format!("{} (locked)", entry.location.info().title).dimmed()
        };
        println!(
            "   {:<24} {}/{}  {}",
            title, entry.completed, entry.total, entry.levels_line
        );
    }

    println!(
        "\n🏆 Achievements: {} unlocked, {} claimed (of {})",
        summary.achievements_unlocked, summary.achievements_claimed, summary.achievements_total
    );
    println!(
        "🛍️  Shop:         {}/{} items owned — background '{}', skin '{}'",
        summary.items_owned, summary.items_total, summary.selected_background, summary.selected_skin
    );
    println!();
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(62).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(62).cyan());

    println!(
        "\nGuesser:  {}",
        result.guesser.name().bright_yellow().bold()
    );
    println!("Rounds:   {}", result.rounds);
    println!(
        "Won:      {} ({:.1}%)",
        result.wins.to_string().green(),
        result.win_rate() * 100.0
    );
    println!("Lost:     {}", result.losses.to_string().red());

    if let Some(average) = result.average_winning_attempts() {
        println!("Average attempts per win: {average:.2}");
    }

    let peak = result.attempt_distribution.iter().copied().max().unwrap_or(0);
    if peak > 0 {
        println!("\nWins by attempt count:");
        for (i, &count) in result.attempt_distribution.iter().enumerate() {
            let bar_len = count * 30 / peak;
            println!("  {:>2}: {:<30} {}", i + 1, "█".repeat(bar_len), count);
        }
    }
    println!();
}
