mod minimal;
mod rich;

pub use minimal::MinimalSkin;
pub use rich::RichSkin;

use crate::app::{App, Focus, Mode};
use crate::config::SkinKind;
use crate::storage::KeyValueStore;
use crate::store::Stats;
use crate::task::Task;
use crossterm::event::{self, Event};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    Frame, Terminal,
};
use std::io;

pub const EMPTY_LIST_MESSAGE: &str = "No todos yet! Add some.";

/// Everything a skin needs to draw one frame.
pub struct View<'a> {
    pub tasks: &'a [Task],
    pub title_input: &'a str,
    pub description_input: &'a str,
    pub focus: Focus,
    pub selected: usize,
    pub mode: &'a Mode,
    pub error: Option<&'a str>,
    pub dark_mode: bool,
    pub stats: Stats,
}

impl<'a> View<'a> {
    pub fn of<S: KeyValueStore>(app: &'a App<S>) -> Self {
        Self {
            tasks: app.tasks(),
            title_input: &app.title_input,
            description_input: &app.description_input,
            focus: app.focus,
            selected: app.selected,
            mode: &app.mode,
            error: app.error.as_deref(),
            dark_mode: app.store.dark_mode(),
            stats: app.store.stats(),
        }
    }
}

/// A rendering of the todo list. Skins are interchangeable; they only read
/// the [`View`].
pub trait Skin {
    fn draw(&self, frame: &mut Frame, view: &View);
}

pub fn skin_for(kind: SkinKind) -> Box<dyn Skin> {
    match kind {
        SkinKind::Minimal => Box::new(MinimalSkin),
        SkinKind::Rich => Box::new(RichSkin),
    }
}

pub fn run_app<B: Backend, S: KeyValueStore>(
    terminal: &mut Terminal<B>,
    app: &mut App<S>,
    skin: &dyn Skin,
) -> io::Result<()> {
    while !app.should_quit {
        terminal.draw(|f| skin.draw(f, &View::of(&*app)))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }
    }
    Ok(())
}

/// Input text with a trailing cursor when the field has focus.
fn input_text(value: &str, focused: bool) -> String {
    if focused {
        format!("{value}_")
    } else {
        value.to_string()
    }
}

fn centered(area: Rect, percent_x: u16, height: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
