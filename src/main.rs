use coin_clicker::build_info;
use coin_clicker::config::{CliCommand, Config};
use coin_clicker::core::constants::INPUT_POLL_MS;
use coin_clicker::input::{handle_key, show_error, show_events, InputResult, UiState};
use coin_clicker::persistence::SaveManager;
use coin_clicker::ui::draw_ui;
use coin_clicker::{GameState, Session};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> io::Result<()> {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Run 'coin-clicker --help' for usage.");
            std::process::exit(1);
        }
    };

    match config.command {
        CliCommand::Version => {
            println!("{}", build_info::version_line());
            Ok(())
        }
        CliCommand::Help => {
            print_help();
            Ok(())
        }
        CliCommand::Status => {
            init_logging(&config.log_path);
            let state = SaveManager::new(&config.save_path).load_or_default();
            let json = serde_json::to_string_pretty(&state)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            println!("{}", json);
            Ok(())
        }
        CliCommand::Reset => {
            init_logging(&config.log_path);
            let saves = SaveManager::new(&config.save_path);
            saves
                .save(&GameState::new())
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
            info!(path = %saves.path().display(), "Progress reset");
            println!("Progress reset ({})", saves.path().display());
            Ok(())
        }
        CliCommand::Play => {
            init_logging(&config.log_path);
            info!(version = %build_info::version_line(), "Starting");
            play(SaveManager::new(&config.save_path))
        }
    }
}

fn print_help() {
    println!("Coin Clicker - terminal incremental clicker\n");
    println!("Usage: coin-clicker [command] [--save <path>]\n");
    println!("Commands:");
    println!("  status     Print saved progress as JSON");
    println!("  reset      Wipe saved progress");
    println!("  --version  Show version information");
    println!("  --help     Show this help message\n");
    println!("The save path can also be set with $COIN_CLICKER_SAVE.");
}

/// Log to a file next to the save; the terminal belongs to the UI.
fn init_logging(log_path: &Path) {
    if let Some(parent) = log_path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let file = match OpenOptions::new().create(true).append(true).open(log_path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Logging disabled ({}): {}", log_path.display(), e);
            return;
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}

fn play(saves: SaveManager) -> io::Result<()> {
    let mut session = Session::open(saves);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, &mut session);

    // Restore the terminal before anything else can fail
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    session.shutdown();
    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: &mut Session,
) -> io::Result<()> {
    let mut ui = UiState::new();

    loop {
        ui.expire_notification(Instant::now());
        terminal.draw(|f| draw_ui(f, session.state(), &ui, session.last_save_failed()))?;

        if !event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            continue;
        }
        let Event::Key(key_event) = event::read()? else {
            continue;
        };
        if key_event.kind != KeyEventKind::Press {
            continue;
        }

        match handle_key(key_event, &mut ui, session.state()) {
            InputResult::Continue => {}
            InputResult::Quit => return Ok(()),
            InputResult::Dispatch(command) => match session.dispatch(command) {
                Ok(events) => show_events(&mut ui, &events),
                Err(e) => show_error(&mut ui, &e),
            },
        }
    }
}
