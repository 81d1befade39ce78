use anyhow::{Context, Result};
use clap::Parser;
use ratatui::{backend::TermionBackend, Terminal};
use std::io::{self, Write};
use std::time::Duration;
use termion::raw::IntoRawMode;
use termion::screen::IntoAlternateScreen;

use vimdrill::config::Config;
use vimdrill::editor::TextBuffer;
use vimdrill::input::InputHandler;
use vimdrill::progress::{FileStore, KeyValueStore, MemoryStore, ProgressStore};
use vimdrill::theme::get_builtin_theme;
use vimdrill::tutor::TutorState;
use vimdrill::ui::UI;

/// vimdrill - A terminal trainer for vim-style cursor motions
#[derive(Parser)]
#[command(name = "vimdrill")]
#[command(version)]
#[command(about = "A terminal trainer for vim-style cursor motions", long_about = None)]
struct Cli {
    /// Text file to practice in (omit to use the built-in practice text)
    file: Option<String>,

    /// Theme name (default: default-dark)
    #[arg(short, long, default_value = "")]
    theme: String,

    /// Don't load or save learning progress
    #[arg(long)]
    no_persist: bool,
}

/// Set up a panic hook that restores the terminal before displaying panic
/// information.
///
/// Without this, panic messages would be hidden or garbled by raw mode and
/// the alternate screen, making debugging very difficult.
fn setup_panic_hook() {
    use std::panic;

    let default_panic = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal to normal state on stderr, then let the default
        // handler print the message and backtrace.
        let _ = write!(io::stderr(), "{}", termion::screen::ToMainScreen);
        let _ = write!(io::stderr(), "{}", termion::cursor::Show);
        let _ = io::stderr().flush();

        default_panic(panic_info);
    }));
}

fn main() -> Result<()> {
    setup_panic_hook();

    let cli = Cli::parse();
    let config = Config::load();

    // Load practice text before terminal setup so read errors print cleanly.
    let buffer = match &cli.file {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read practice file {}", path))?;
            TextBuffer::from_text(&text)
        }
        None => TextBuffer::with_practice_text(),
    };

    // CLI theme overrides config theme
    let theme_name = if !cli.theme.is_empty() {
        &cli.theme
    } else {
        &config.theme
    };
    let theme = get_builtin_theme(theme_name).unwrap_or_else(|| {
        eprintln!(
            "Warning: Theme '{}' not found, using default-dark",
            theme_name
        );
        get_builtin_theme("default-dark").unwrap()
    });

    // Progress store: files under ~/.config/vimdrill/, or memory-only when
    // persistence is off (--no-persist or config).
    let store: Box<dyn KeyValueStore> = if cli.no_persist || !config.persist_progress {
        Box::new(MemoryStore::new())
    } else {
        match FileStore::default_dir() {
            Some(dir) => Box::new(FileStore::new(dir)),
            None => Box::new(MemoryStore::new()),
        }
    };

    let mut state = TutorState::new(buffer, ProgressStore::new(store));
    state.set_show_key_hints(config.show_key_hints);

    // Setup terminal
    let stdout = io::stdout()
        .into_raw_mode()
        .context("Failed to enable raw mode")?;
    let stdout = stdout
        .into_alternate_screen()
        .context("Failed to enter alternate screen")?;

    let backend = TermionBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let ui = UI::new(theme);
    let mut input_handler = InputHandler::new();

    // Main event loop
    let result = run_event_loop(&mut terminal, &ui, &mut input_handler, &mut state);

    // Termion restores the screen through Drop guards; just make sure the
    // cursor is visible again.
    write!(terminal.backend_mut(), "{}", termion::cursor::Show)?;
    terminal.backend_mut().flush()?;

    result
}

fn run_event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    ui: &UI,
    input_handler: &mut InputHandler,
    state: &mut TutorState,
) -> Result<()> {
    loop {
        ui.render(terminal, state)?;

        if let Some(event) = input_handler.poll_event(Duration::from_millis(100))? {
            let should_quit = input_handler.handle_event(event, state)?;
            if should_quit {
                break;
            }
        }
    }

    Ok(())
}
