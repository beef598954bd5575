//! Interaction state behind both skins: the add form, the list selection,
//! inline editing and delete confirmation. Key events come in, store
//! operations go out.

use crate::error::StoreError;
use crate::storage::KeyValueStore;
use crate::store::TodoStore;
use crate::task::Task;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Title,
    Description,
    List,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Title => Focus::Description,
            Focus::Description => Focus::List,
            Focus::List => Focus::Title,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Title,
    Description,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Browse,
    Editing {
        id: String,
        title: String,
        description: String,
        field: EditField,
    },
    ConfirmDelete {
        id: String,
    },
}

pub struct App<S: KeyValueStore> {
    pub store: TodoStore<S>,
    pub title_input: String,
    pub description_input: String,
    pub focus: Focus,
    pub selected: usize,
    pub mode: Mode,
    pub error: Option<String>,
    pub should_quit: bool,
}

impl<S: KeyValueStore> App<S> {
    pub fn new(store: TodoStore<S>) -> Self {
        Self {
            store,
            title_input: String::new(),
            description_input: String::new(),
            focus: Focus::Title,
            selected: 0,
            mode: Mode::Browse,
            error: None,
            should_quit: false,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.store.tasks().get(self.selected)
    }

    /// Submits the add form. The inputs are cleared only when the task was
    /// added.
    pub fn submit(&mut self) {
        match self
            .store
            .add(self.title_input.clone(), self.description_input.clone())
        {
            Ok(_) => {
                self.title_input.clear();
                self.description_input.clear();
                self.error = None;
                self.focus = Focus::Title;
            }
            Err(err @ StoreError::Storage(_)) => {
                // The task is in the list even though the write failed.
                self.title_input.clear();
                self.description_input.clear();
                self.report(err);
            }
            Err(err) => self.report(err),
        }
    }

    pub fn toggle_selected(&mut self) {
        let Some(id) = self.selected_task().map(|t| t.id.clone()) else {
            return;
        };
        if let Err(err) = self.store.toggle(&id) {
            self.report(err);
        }
    }

    pub fn begin_edit(&mut self) {
        if let Some(task) = self.selected_task() {
            self.mode = Mode::Editing {
                id: task.id.clone(),
                title: task.title.clone(),
                description: task.description.clone(),
                field: EditField::Title,
            };
        }
    }

    /// Saves the edit in progress. A blank title keeps the editor open.
    pub fn save_edit(&mut self) {
        let Mode::Editing {
            id,
            title,
            description,
            ..
        } = self.mode.clone()
        else {
            return;
        };
        if title.trim().is_empty() {
            self.report(StoreError::EmptyTitle);
            return;
        }
        let completed = self.store.get(&id).is_some_and(|t| t.completed);
        self.mode = Mode::Browse;
        match self.store.update(&id, title, description, completed) {
            Ok(_) => self.error = None,
            Err(err) => self.report(err),
        }
    }

    pub fn cancel(&mut self) {
        self.mode = Mode::Browse;
    }

    pub fn request_delete(&mut self) {
        if let Some(task) = self.selected_task() {
            self.mode = Mode::ConfirmDelete {
                id: task.id.clone(),
            };
        }
    }

    pub fn confirm_delete(&mut self) {
        let Mode::ConfirmDelete { id } = self.mode.clone() else {
            return;
        };
        self.mode = Mode::Browse;
        if let Err(err) = self.store.delete(&id) {
            self.report(err);
        }
        self.clamp_selection();
    }

    pub fn toggle_dark_mode(&mut self) {
        let enabled = !self.store.dark_mode();
        if let Err(err) = self.store.set_dark_mode(enabled) {
            self.report(err);
        }
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.tasks().len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        let len = self.tasks().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    fn report(&mut self, err: StoreError) {
        if !matches!(err, StoreError::EmptyTitle) {
            warn!("event=ui_error module=app error={err}");
        }
        self.error = Some(err.to_string());
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        // Ctrl+Alt is how AltGr characters arrive on Windows; those are text.
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && !key.modifiers.contains(KeyModifiers::ALT)
        {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('t') => self.toggle_dark_mode(),
                _ => {}
            }
            return;
        }

        match self.mode {
            Mode::Browse => self.handle_browse_key(key.code),
            Mode::Editing { .. } => self.handle_edit_key(key.code),
            Mode::ConfirmDelete { .. } => match key.code {
                KeyCode::Char('y') | KeyCode::Enter => self.confirm_delete(),
                KeyCode::Char('n') | KeyCode::Esc => self.cancel(),
                _ => {}
            },
        }
    }

    fn handle_browse_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::Esc => self.error = None,
            _ if self.focus == Focus::List => match code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
                KeyCode::Down | KeyCode::Char('j') => self.select_next(),
                KeyCode::Char(' ') => self.toggle_selected(),
                KeyCode::Char('e') | KeyCode::Enter => self.begin_edit(),
                KeyCode::Char('d') | KeyCode::Delete => self.request_delete(),
                _ => {}
            },
            KeyCode::Enter => self.submit(),
            _ => {
                let input = match self.focus {
                    Focus::Title => &mut self.title_input,
                    _ => &mut self.description_input,
                };
                match code {
                    KeyCode::Backspace => {
                        input.pop();
                    }
                    KeyCode::Char(c) => input.push(c),
                    _ => {}
                }
            }
        }
    }

    fn handle_edit_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter => self.save_edit(),
            KeyCode::Esc => self.cancel(),
            _ => {
                let Mode::Editing {
                    title,
                    description,
                    field,
                    ..
                } = &mut self.mode
                else {
                    return;
                };
                let buffer = match field {
                    EditField::Title => title,
                    EditField::Description => description,
                };
                match code {
                    KeyCode::Tab => {
                        *field = match field {
                            EditField::Title => EditField::Description,
                            EditField::Description => EditField::Title,
                        }
                    }
                    KeyCode::Backspace => {
                        buffer.pop();
                    }
                    KeyCode::Char(c) => buffer.push(c),
                    _ => {}
                }
            }
        }
    }
}
