use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use todolist::{
    config::Cli,
    logging::init_logging,
    ui::{self, Skin},
    App, FileStorage, KeyValueStore, MemoryStorage, TodoStore,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if !cli.ephemeral {
        init_logging(&cli.log_level, &cli.log_dir())?;
    }
    info!(
        "event=config module=main data_dir={} skin={:?} ephemeral={}",
        cli.data_dir.display(),
        cli.skin,
        cli.ephemeral
    );

    let skin = ui::skin_for(cli.skin);
    if cli.ephemeral {
        run(App::new(TodoStore::open(MemoryStorage::new())), skin.as_ref())
    } else {
        run(
            App::new(TodoStore::open(FileStorage::new(&cli.data_dir))),
            skin.as_ref(),
        )
    }
}

fn run<S: KeyValueStore>(mut app: App<S>, skin: &dyn Skin) -> Result<(), Box<dyn std::error::Error>> {
    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = ui::run_app(&mut terminal, &mut app, skin);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!(
        "event=app_exit module=main count={}",
        app.store.tasks().len()
    );
    result?;
    Ok(())
}
