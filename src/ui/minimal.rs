use super::{input_text, Skin, View, EMPTY_LIST_MESSAGE};
use crate::app::{EditField, Focus, Mode};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Plain checklist: title bar, the add form and the list.
pub struct MinimalSkin;

impl Skin for MinimalSkin {
    fn draw(&self, frame: &mut Frame, view: &View) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(frame.area());

        frame.render_widget(
            Paragraph::new("Todo List").style(Style::default().add_modifier(Modifier::BOLD)),
            chunks[0],
        );
        if let Some(error) = view.error {
            frame.render_widget(
                Paragraph::new(error).style(Style::default().fg(Color::Red)),
                chunks[1],
            );
        }

        let form = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[2]);
        for (i, (label, value, focus, field)) in [
            ("Title", view.title_input, Focus::Title, EditField::Title),
            (
                "Description",
                view.description_input,
                Focus::Description,
                EditField::Description,
            ),
        ]
        .into_iter()
        .enumerate()
        {
            let (title, value, focused) = match view.mode {
                Mode::Editing {
                    title,
                    description,
                    field: editing,
                    ..
                } => (
                    format!("Edit {}", label.to_lowercase()),
                    if i == 0 { title.as_str() } else { description.as_str() },
                    *editing == field,
                ),
                Mode::Browse => (label.to_string(), value, view.focus == focus),
                Mode::ConfirmDelete { .. } => (label.to_string(), value, false),
            };
            frame.render_widget(
                Paragraph::new(input_text(value, focused)).block(
                    Block::default()
                        .title(title)
                        .borders(Borders::ALL)
                        .border_style(if focused {
                            Style::default().fg(Color::Cyan)
                        } else {
                            Style::default()
                        }),
                ),
                form[i],
            );
        }

        let list_block = Block::default()
            .title("Todos")
            .borders(Borders::ALL)
            .border_style(if view.focus == Focus::List {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            });
        if view.tasks.is_empty() {
            frame.render_widget(Paragraph::new(EMPTY_LIST_MESSAGE).block(list_block), chunks[3]);
        } else {
            let items: Vec<ListItem> = view
                .tasks
                .iter()
                .map(|t| {
                    ListItem::new(Line::from(vec![
                        Span::raw(if t.completed { "[x] " } else { "[ ] " }),
                        Span::raw(t.title.as_str()),
                    ]))
                })
                .collect();
            let list = List::new(items)
                .block(list_block)
                .highlight_style(Style::default().add_modifier(Modifier::BOLD))
                .highlight_symbol("> ");
            let mut state = ListState::default().with_selected(Some(view.selected));
            frame.render_stateful_widget(list, chunks[3], &mut state);
        }

        let help = match view.mode {
            Mode::ConfirmDelete { .. } => "Delete this todo? y/n",
            Mode::Editing { .. } => "Enter save  Tab field  Esc cancel",
            Mode::Browse => "Tab focus  Enter add  Space toggle  e edit  d delete  q quit",
        };
        frame.render_widget(Paragraph::new(help), chunks[4]);
    }
}
