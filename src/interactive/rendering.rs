//! TUI rendering with ratatui
//!
//! Draws the letter grid, the control region and the leaderboard screen.

use super::app::{App, MessageStyle, Route};
use super::grid::{CellView, Controls, GridView, project};
use crate::core::{Feedback, MAX_ATTEMPTS, WORD_LENGTH};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const CELL_WIDTH: u16 = 5;
const CELL_HEIGHT: u16 = 3;
const ORANGE: Color = Color::Rgb(230, 145, 56);

/// Main UI rendering function
pub fn ui<R>(f: &mut Frame, app: &App<'_, R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Controls
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    match app.route {
        Route::Game => {
            let view = project(app.session.state(), app.session.cursor());

            let main_chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Percentage(60), // Grid
                    Constraint::Percentage(40), // Messages
                ])
                .split(chunks[1]);

            render_grid(f, &view, main_chunks[0]);
            render_messages(f, app, main_chunks[1]);
            render_controls(f, &view.controls, chunks[2]);
        }
        Route::Leaderboard => {
            render_leaderboard(f, app, chunks[1]);
            render_leaderboard_help(f, chunks[2]);
        }
    }

    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled("Dash", Style::default().fg(Color::White)),
        Span::styled(
            "Words",
            Style::default().fg(ORANGE).add_modifier(Modifier::BOLD),
        ),
    ]);
    let header = Paragraph::new(title)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_grid(f: &mut Frame, view: &GridView, area: Rect) {
    let block = Block::default()
        .title(" Guesses ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let grid_width = CELL_WIDTH * WORD_LENGTH as u16;
    let grid_height = CELL_HEIGHT * MAX_ATTEMPTS as u16;
    let grid_area = centered(inner, grid_width, grid_height);

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(CELL_HEIGHT); MAX_ATTEMPTS])
        .split(grid_area);

    for (row, row_area) in view.rows.iter().zip(row_areas.iter()) {
        let cell_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(CELL_WIDTH); WORD_LENGTH])
            .split(*row_area);

        for (cell, cell_area) in row.iter().zip(cell_areas.iter()) {
            render_cell(f, cell, *cell_area);
        }
    }
}

fn render_cell(f: &mut Frame, cell: &CellView, area: Rect) {
    let background = match cell.feedback {
        Feedback::Correct => Color::Green,
        Feedback::Present => ORANGE,
        Feedback::None => Color::Reset,
    };

    let border_style = if cell.focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else if cell.editable {
        Style::default().fg(Color::Gray)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let letter = cell.letter.map_or(String::from(" "), String::from);
    let paragraph = Paragraph::new(letter)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .bg(background)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(if cell.focused {
                    BorderType::Thick
                } else {
                    BorderType::Plain
                })
                .border_style(border_style),
        );

    f.render_widget(paragraph, area);
}

fn render_messages<R>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_controls(f: &mut Frame, controls: &Controls, area: Rect) {
    let (title, lines, color) = match controls {
        Controls::Submit { enabled } => {
            let (label, style) = if *enabled {
                (
                    "[ Submit ]  Enter",
                    Style::default().fg(Color::Black).bg(Color::Green),
                )
            } else {
                ("[ Submit ]", Style::default().fg(Color::DarkGray))
            };
            (
                " Type letters | Backspace clears | Arrows move ",
                vec![Line::from(Span::styled(label, style))],
                Color::Yellow,
            )
        }
        Controls::Finished {
            won,
            message,
            actions,
        } => {
            let color = if *won { Color::Green } else { Color::Red };
            let buttons: Vec<Span> = actions
                .iter()
                .flat_map(|action| {
                    [
                        Span::styled(
                            format!("[ {} ]", action.label()),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                        Span::raw(format!(" {}   ", action.key())),
                    ]
                })
                .collect();
            (
                " Game Over ",
                vec![
                    Line::from(Span::styled(message.clone(), Style::default().fg(color))),
                    Line::from(buttons),
                ],
                color,
            )
        }
    };

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(color)),
    );

    f.render_widget(paragraph, area);
}

fn render_leaderboard<R>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let stats = &app.stats;
    let mut lines = vec![
        Line::from(format!("Games played: {}", stats.total_games)),
        Line::from(format!(
            "Games won:    {} ({:.0}%)",
            stats.games_won,
            stats.win_rate()
        )),
        Line::from(format!("Best score:   {}", stats.best_score)),
        Line::from(format!("Total points: {}", stats.total_score)),
        Line::from(""),
        Line::from("Wins by guesses:"),
    ];

    let max = stats.guess_distribution.iter().copied().max().unwrap_or(0).max(1);
    for (guesses, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
        let bar_width = count * 20 / max;
        lines.push(Line::from(vec![
            Span::raw(format!("  {guesses}: ")),
            Span::styled("█".repeat(bar_width), Style::default().fg(Color::Green)),
            Span::styled(
                "░".repeat(20 - bar_width),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw(format!(" {count}")),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Leaderboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(paragraph, area);
}

fn render_leaderboard_help(f: &mut Frame, area: Rect) {
    let help = Paragraph::new("Esc / b: back to game | q: quit")
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double),
        );
    f.render_widget(help, area);
}

fn render_status<R>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let state = app.session.state();

    let attempts_text = format!("Attempts left: {}", state.remaining_attempts());
    let attempts = Paragraph::new(attempts_text).alignment(Alignment::Center);
    f.render_widget(attempts, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let score_text = format!("Score: {}", state.score());
    let score = Paragraph::new(score_text).alignment(Alignment::Center);
    f.render_widget(score, chunks[2]);

    let help_text = if state.is_over() {
        "r: Restart | l: Leaderboard | q: Quit"
    } else {
        "Enter: Submit | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

/// A `width` × `height` rectangle centred in `area`, clipped to fit
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
