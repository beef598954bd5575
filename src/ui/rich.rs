use super::{centered, input_text, Skin, View, EMPTY_LIST_MESSAGE};
use crate::app::{EditField, Focus, Mode};
use chrono::Local;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, ListState, Paragraph},
    Frame,
};

struct Palette {
    background: Color,
    text: Color,
    muted: Color,
    accent: Color,
    done: Color,
    danger: Color,
}

const LIGHT: Palette = Palette {
    background: Color::White,
    text: Color::Black,
    muted: Color::DarkGray,
    accent: Color::Blue,
    done: Color::Green,
    danger: Color::Red,
};

const DARK: Palette = Palette {
    background: Color::Black,
    text: Color::White,
    muted: Color::Gray,
    accent: Color::LightBlue,
    done: Color::LightGreen,
    danger: Color::LightRed,
};

/// Card-style list with statistics, dates and a light/dark palette.
pub struct RichSkin;

impl Skin for RichSkin {
    fn draw(&self, frame: &mut Frame, view: &View) {
        let palette = if view.dark_mode { &DARK } else { &LIGHT };
        let base = Style::default().fg(palette.text).bg(palette.background);
        frame.render_widget(Block::default().style(base), frame.area());

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Min(4),
                Constraint::Length(1),
            ])
            .split(frame.area());

        draw_header(frame, chunks[0], palette);
        draw_stats(frame, chunks[1], view, palette);
        if let Some(error) = view.error {
            frame.render_widget(
                Paragraph::new(format!("{error} (Esc to dismiss)"))
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(palette.danger)),
                chunks[2],
            );
        }
        draw_form(frame, chunks[3], view, palette);
        draw_list(frame, chunks[4], view, palette);

        let help = match view.mode {
            Mode::ConfirmDelete { .. } => "y/Enter delete  n/Esc cancel".to_string(),
            Mode::Editing { .. } => "Enter save  Tab switch field  Esc cancel".to_string(),
            Mode::Browse => format!(
                "Tab focus  Enter add  Space toggle  e edit  d delete  Ctrl+T {}  q quit",
                if view.dark_mode { "light" } else { "dark" }
            ),
        };
        frame.render_widget(
            Paragraph::new(help).style(Style::default().fg(palette.muted)),
            chunks[5],
        );

        if let Mode::ConfirmDelete { id } = view.mode {
            draw_confirm(frame, view, id, palette);
        }
    }
}

fn draw_header(frame: &mut Frame, area: Rect, palette: &Palette) {
    let today = Local::now().format("%A, %B %-d, %Y").to_string();
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "Todo List",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(today, Style::default().fg(palette.muted)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.accent)),
    );
    frame.render_widget(header, area);
}

fn draw_stats(frame: &mut Frame, area: Rect, view: &View, palette: &Palette) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let counts = Paragraph::new(Line::from(vec![
        Span::raw(format!("Total: {}  ", view.stats.total)),
        Span::styled(
            format!("Active: {}  ", view.stats.active),
            Style::default().fg(palette.accent),
        ),
        Span::styled(
            format!("Completed: {}", view.stats.completed),
            Style::default().fg(palette.done),
        ),
    ]))
    .block(Block::default().title("Statistics").borders(Borders::ALL));
    frame.render_widget(counts, columns[0]);

    let gauge = Gauge::default()
        .block(Block::default().title("Progress").borders(Borders::ALL))
        .gauge_style(Style::default().fg(palette.done).bg(palette.background))
        .percent(view.stats.percent_complete());
    frame.render_widget(gauge, columns[1]);
}

fn draw_form(frame: &mut Frame, area: Rect, view: &View, palette: &Palette) {
    let fields = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let editing = match view.mode {
        Mode::Editing {
            title,
            description,
            field,
            ..
        } => Some((title.as_str(), description.as_str(), *field)),
        _ => None,
    };

    let inputs = match editing {
        Some((title, description, field)) => [
            ("Edit title", title, field == EditField::Title),
            (
                "Edit description (optional)",
                description,
                field == EditField::Description,
            ),
        ],
        None => [
            (
                "Title",
                view.title_input,
                view.focus == Focus::Title,
            ),
            (
                "Description (optional)",
                view.description_input,
                view.focus == Focus::Description,
            ),
        ],
    };

    for (i, (label, value, focused)) in inputs.into_iter().enumerate() {
        let border = if focused { palette.accent } else { palette.muted };
        frame.render_widget(
            Paragraph::new(input_text(value, focused)).block(
                Block::default()
                    .title(label)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border)),
            ),
            fields[i],
        );
    }
}

fn draw_list(frame: &mut Frame, area: Rect, view: &View, palette: &Palette) {
    let block = Block::default()
        .title(format!("Todos ({})", view.stats.total))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if view.focus == Focus::List {
            palette.accent
        } else {
            palette.muted
        }));

    if view.tasks.is_empty() {
        frame.render_widget(
            Paragraph::new(EMPTY_LIST_MESSAGE)
                .alignment(Alignment::Center)
                .style(Style::default().fg(palette.muted))
                .block(block),
            area,
        );
        return;
    }

    let items: Vec<ListItem> = view
        .tasks
        .iter()
        .map(|t| {
            let (marker, marker_style, title_style) = if t.completed {
                (
                    "✔ ",
                    Style::default().fg(palette.done),
                    Style::default()
                        .fg(palette.muted)
                        .add_modifier(Modifier::CROSSED_OUT),
                )
            } else {
                (
                    "○ ",
                    Style::default().fg(palette.accent),
                    Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
                )
            };
            let mut lines = vec![Line::from(vec![
                Span::styled(marker, marker_style),
                Span::styled(t.title.as_str(), title_style),
            ])];
            if !t.description.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("  {}", t.description),
                    Style::default().fg(palette.muted),
                )));
            }
            if let Some(created_at) = t.created_at {
                lines.push(Line::from(Span::styled(
                    format!("  added {}", created_at.format("%Y-%m-%d %H:%M")),
                    Style::default().fg(palette.muted),
                )));
            }
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("▌");
    let mut state = ListState::default().with_selected(Some(view.selected));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_confirm(frame: &mut Frame, view: &View, id: &str, palette: &Palette) {
    let title = view
        .tasks
        .iter()
        .find(|t| t.id == id)
        .map(|t| t.title.as_str())
        .unwrap_or_default();
    let area = centered(frame.area(), 50, 6);
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(vec![
            Line::from("Are you sure you want to delete this todo?"),
            Line::from(Span::styled(
                title,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "[y] Delete   [n] Cancel",
                Style::default().fg(palette.danger),
            )),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title("Confirm Delete")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.danger)),
        )
        .style(Style::default().fg(palette.text).bg(palette.background)),
        area,
    );
}
