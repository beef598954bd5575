use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use todolist::app::{Focus, Mode};
use todolist::{App, MemoryStorage, TodoStore};

fn app() -> App<MemoryStorage> {
    App::new(TodoStore::open(MemoryStorage::new()))
}

fn press(app: &mut App<MemoryStorage>, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(app: &mut App<MemoryStorage>, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn add(app: &mut App<MemoryStorage>, title: &str, description: &str) {
    app.focus = Focus::Title;
    type_text(app, title);
    press(app, KeyCode::Tab);
    type_text(app, description);
    press(app, KeyCode::Enter);
}

#[test]
fn adding_clears_inputs() {
    let mut app = app();
    add(&mut app, "Call Bob", "re: meeting");

    assert_eq!(app.tasks().len(), 1);
    assert_eq!(app.tasks()[0].title, "Call Bob");
    assert_eq!(app.tasks()[0].description, "re: meeting");
    assert!(app.title_input.is_empty());
    assert!(app.description_input.is_empty());
    assert_eq!(app.error, None);
}

#[test]
fn blank_title_shows_dismissible_error() {
    let mut app = app();
    type_text(&mut app, "   ");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "notes");
    press(&mut app, KeyCode::Enter);

    assert!(app.tasks().is_empty());
    assert_eq!(app.error.as_deref(), Some("Title cannot be empty."));
    assert_eq!(app.description_input, "notes");

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.error, None);
}

#[test]
fn list_keys_toggle_edit_and_delete() {
    let mut app = app();
    add(&mut app, "Buy milk", "");
    add(&mut app, "Call Bob", "");

    app.focus = Focus::List;
    press(&mut app, KeyCode::Char(' '));
    assert!(app.tasks()[0].completed);

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char('e'));
    assert!(matches!(app.mode, Mode::Editing { .. }));
    type_text(&mut app, " today");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.mode, Mode::Browse);
    assert_eq!(app.tasks()[1].title, "Call Bob today");

    press(&mut app, KeyCode::Char('d'));
    assert!(matches!(app.mode, Mode::ConfirmDelete { .. }));
    press(&mut app, KeyCode::Char('n'));
    assert_eq!(app.tasks().len(), 2);

    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Char('y'));
    assert_eq!(app.tasks().len(), 1);
    assert_eq!(app.tasks()[0].title, "Buy milk");
    assert_eq!(app.selected, 0);
}

#[test]
fn edit_keeps_completion_and_refuses_blank_title() {
    let mut app = app();
    add(&mut app, "Buy milk", "");
    app.focus = Focus::List;
    press(&mut app, KeyCode::Char(' '));

    press(&mut app, KeyCode::Char('e'));
    for _ in 0.."Buy milk".len() {
        press(&mut app, KeyCode::Backspace);
    }
    press(&mut app, KeyCode::Enter);
    assert!(matches!(app.mode, Mode::Editing { .. }));
    assert_eq!(app.error.as_deref(), Some("Title cannot be empty."));

    type_text(&mut app, "Oat milk");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "barista");
    press(&mut app, KeyCode::Enter);
    let task = &app.tasks()[0];
    assert_eq!(task.title, "Oat milk");
    assert_eq!(task.description, "barista");
    assert!(task.completed);
}

#[test]
fn escape_cancels_edit_without_changes() {
    let mut app = app();
    add(&mut app, "Buy milk", "");
    app.focus = Focus::List;
    press(&mut app, KeyCode::Char('e'));
    type_text(&mut app, "!!!");
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.mode, Mode::Browse);
    assert_eq!(app.tasks()[0].title, "Buy milk");
}

#[test]
fn ctrl_t_toggles_dark_mode_and_q_quits_from_list() {
    let mut app = app();
    let initial = app.store.dark_mode();
    app.handle_key(KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL));
    assert_eq!(app.store.dark_mode(), !initial);

    type_text(&mut app, "q");
    assert!(!app.should_quit);
    assert_eq!(app.title_input, "q");

    app.focus = Focus::List;
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);
}

#[test]
fn altgr_characters_are_typed_not_swallowed() {
    let mut app = app();
    let altgr = KeyModifiers::CONTROL | KeyModifiers::ALT;
    app.handle_key(KeyEvent::new(KeyCode::Char('@'), altgr));
    app.handle_key(KeyEvent::new(KeyCode::Char('t'), altgr));
    assert_eq!(app.title_input, "@t");
    assert!(!app.should_quit);
}
