//! Formatting utilities for terminal output

use colored::{ColoredString, Colorize};

use crate::core::{Color, Feedback, Hint};
use crate::progress::MAX_STREAK_DAYS;
use crate::round::Attempt;

/// A colored block for one palette color
#[must_use]
pub fn color_block(color: Color) -> ColoredString {
    let (r, g, b) = match color {
        Color::Purple => (155, 89, 182),
        Color::Red => (231, 76, 60),
        Color::Brown => (150, 95, 60),
        Color::Green => (46, 204, 113),
        Color::Pink => (255, 130, 180),
        Color::Black => (90, 90, 90),
        Color::Gray => (170, 170, 170),
        Color::Magenta => (255, 0, 255),
    };
    "■".truecolor(r, g, b)
}

/// Per-slot hint symbols: green dot exact, red dot present, faint dot absent
#[must_use]
pub fn hint_symbols(feedback: Feedback) -> String {
    feedback
        .hints()
        .iter()
        .map(|hint| match hint {
            Hint::Exact => "●".green().to_string(),
            Hint::Present => "●".red().to_string(),
            Hint::Absent => "·".dimmed().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// One attempt rendered as numbered guess blocks plus hint symbols
#[must_use]
pub fn feedback_line(attempt: &Attempt) -> String {
    let blocks = attempt
        .guess()
        .colors()
        .iter()
        .map(|&color| color_block(color).to_string())
        .collect::<Vec<_>>()
        .join(" ");

    format!(
        "{:>2}. {}   {}",
        attempt.number(),
        blocks,
        hint_symbols(attempt.feedback())
    )
}

/// The palette with its input digits
#[must_use]
pub fn palette_line() -> String {
    Color::ALL
        .iter()
        .enumerate()
        .map(|(i, &color)| format!("{}{} {}", i + 1, color_block(color), color.name()))
        .collect::<Vec<_>>()
        .join("   ")
}

/// Login streak as a filled bar, e.g. `▰▰▰▱▱▱▱ 3/7`
#[must_use]
pub fn streak_bar(days: u32) -> String {
    let filled = days.min(MAX_STREAK_DAYS) as usize;
    let empty = MAX_STREAK_DAYS as usize - filled;
    format!("{}{} {days}/{MAX_STREAK_DAYS}", "▰".repeat(filled), "▱".repeat(empty))
}

/// Plain progress bar used by the stats gauge
#[must_use]
pub fn progress_bar(ratio: f64, width: usize) -> String {
    // Cast is safe: the ratio is clamped to [0, 1]
    let filled = ((ratio.clamp(0.0, 1.0)) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Code;
    use crate::round::Round;

    #[test]
    fn streak_bar_fills_and_caps() {
        assert_eq!(streak_bar(0), "▱▱▱▱▱▱▱ 0/7");
        assert_eq!(streak_bar(3), "▰▰▰▱▱▱▱ 3/7");
        assert_eq!(streak_bar(7), "▰▰▰▰▰▰▰ 7/7");
        // Counter can never exceed the cap, but the bar stays in bounds anyway
        assert_eq!(streak_bar(9), "▰▰▰▰▰▰▰ 9/7");
    }

    #[test]
    fn progress_bar_spans_the_width() {
        assert_eq!(progress_bar(0.0, 4), "░░░░");
        assert_eq!(progress_bar(0.5, 4), "██░░");
        assert_eq!(progress_bar(1.0, 4), "████");
        assert_eq!(progress_bar(7.3, 4), "████");
    }

    #[test]
    fn feedback_line_shows_the_attempt_number() {
        let mut round = Round::with_secret(Code::new([Color::Red; 4]));
        for _ in 0..4 {
            round.select_color(Color::Green);
        }
        round.submit_row();

        let line = feedback_line(&round.attempts()[0]);
        assert!(line.starts_with(" 1."));
    }

    #[test]
    fn palette_line_lists_every_color() {
        let line = palette_line();
        for color in Color::ALL {
            assert!(line.contains(color.name()));
        }
    }
}
