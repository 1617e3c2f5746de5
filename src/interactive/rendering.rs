//! TUI rendering with ratatui

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use super::app::App;
use crate::audio::AudioSink;
use crate::core::{Color as GameColor, Hint};
use crate::output::formatters;
use crate::round::{Attempt, MAX_ATTEMPTS};

/// Terminal color for a palette color
const fn palette_color(color: GameColor) -> Color {
    match color {
        GameColor::Purple => Color::Rgb(155, 89, 182),
        GameColor::Red => Color::Rgb(231, 76, 60),
        GameColor::Brown => Color::Rgb(150, 95, 60),
        GameColor::Green => Color::Rgb(46, 204, 113),
        GameColor::Pink => Color::Rgb(255, 130, 180),
        GameColor::Black => Color::Rgb(90, 90, 90),
        GameColor::Gray => Color::Rgb(170, 170, 170),
        GameColor::Magenta => Color::Rgb(255, 0, 255),
    }
}

/// Main UI rendering function
pub fn ui<A: AudioSink>(f: &mut Frame, app: &App<A>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(14),    // Main content
            Constraint::Length(3),  // Palette
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_sidebar(f, app, main_chunks[1]);

    render_palette(f, chunks[2]);
    render_status(f, app, chunks[3]);

    if let Some(overlay) = &app.overlay {
        render_overlay(f, &overlay.title, &overlay.body);
    }
}

fn render_header<A: AudioSink>(f: &mut Frame, app: &App<A>, area: Rect) {
    let title = format!(
        "🔐 CHROMACODE — {} · Level {}",
        app.location.info().title,
        app.level_id
    );
    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn attempt_line(attempt: &Attempt) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("{:>2}. ", attempt.number()),
        Style::default().fg(Color::DarkGray),
    )];

    for &color in attempt.guess().colors() {
        spans.push(Span::styled("⬤ ", Style::default().fg(palette_color(color))));
    }

    spans.push(Span::raw("  "));
    for hint in attempt.feedback().hints() {
        spans.push(match hint {
            Hint::Exact => Span::styled("● ", Style::default().fg(Color::Green)),
            Hint::Present => Span::styled("● ", Style::default().fg(Color::Red)),
            Hint::Absent => Span::styled("· ", Style::default().fg(Color::DarkGray)),
        });
    }

    Line::from(spans)
}

fn current_row_line<A: AudioSink>(app: &App<A>) -> Line<'static> {
    let row = app.round.current_row();
    let mut spans = vec![Span::styled(" >  ", Style::default().fg(Color::Yellow))];

    for (slot, cell) in row.slots().iter().enumerate() {
        let at_cursor = slot == row.cursor();
        let span = match cell {
            Some(color) => {
                let mut style = Style::default().fg(palette_color(*color));
                if at_cursor {
                    style = style.add_modifier(Modifier::UNDERLINED);
                }
                Span::styled("⬤ ", style)
            }
            None => {
                let style = if at_cursor {
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                Span::styled("◯ ", style)
            }
        };
        spans.push(span);
    }

    Line::from(spans)
}

fn render_board<A: AudioSink>(f: &mut Frame, app: &App<A>, area: Rect) {
    let mut lines: Vec<Line> = app.round.attempts().iter().map(attempt_line).collect();

    if !app.round.is_over() {
        lines.push(current_row_line(app));
    }

    for _ in lines.len()..MAX_ATTEMPTS as usize {
        lines.push(Line::from(Span::styled(
            "    · · · ·",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Board "),
    );
    f.render_widget(board, area);
}

fn render_sidebar<A: AudioSink>(f: &mut Frame, app: &App<A>, area: Rect) {
    let progress = app.session.progress();
    let stats = progress.stats();

    let achievements_unlocked = progress
        .achievements()
        .iter()
        .filter(|a| a.is_unlocked())
        .count();

    let lines = vec![
        Line::from(vec![
            Span::raw("Coins:     "),
            Span::styled(
                progress.coins().to_string(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!(
            "Streak:    {}",
            formatters::streak_bar(progress.daily_reward().consecutive_days())
        )),
        Line::from(""),
        Line::from(format!("Attempts left: {}", app.round.attempts_left())),
        Line::from(""),
        Line::from(format!("Games played:  {}", stats.total_games_played)),
        Line::from(format!("Levels won:    {}", stats.total_levels_completed)),
        Line::from(format!("Perfect games: {}", stats.perfect_games)),
        Line::from(format!(
            "Achievements:  {achievements_unlocked}/{}",
            progress.achievements().len()
        )),
        Line::from(""),
        Line::from(Span::styled(
            "● exact   ● present   · absent",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let sidebar = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Progress "),
    );
    f.render_widget(sidebar, area);
}

fn render_palette(f: &mut Frame, area: Rect) {
    let mut spans = Vec::with_capacity(GameColor::ALL.len() * 2);
    for (i, &color) in GameColor::ALL.iter().enumerate() {
        spans.push(Span::styled(
            format!(" {} ", i + 1),
            Style::default().fg(Color::White),
        ));
        spans.push(Span::styled("⬤  ", Style::default().fg(palette_color(color))));
    }

    let palette = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(" Palette "),
        );
    f.render_widget(palette, area);
}

fn render_status<A: AudioSink>(f: &mut Frame, app: &App<A>, area: Rect) {
    let help = if app.overlay.is_some() {
        "Enter: continue   q: quit"
    } else {
        "1-8: place color   ←/→: move cursor   Enter: check row   r: restart   q: quit"
    };
    let status = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(status, area);
}

/// Centered popup over the board
fn render_overlay(f: &mut Frame, title: &str, body: &str) {
    let area = centered_rect(54, 9, f.area());
    f.render_widget(Clear, area);

    let popup = Paragraph::new(body.to_owned())
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .title(format!(" {title} "))
                .style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(popup, area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
