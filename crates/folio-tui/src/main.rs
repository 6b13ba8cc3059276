//! folio - Terminal portfolio
//!
//! A single-page portfolio rendered in the terminal: a scrolling document
//! with a section-aware navigation drawer and a contact form.

use std::fs::File;
use std::io::{self, stdout};
use std::path::PathBuf;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use env_logger::Env;
use folio_core::core::section::SectionId;
use folio_core::storage::config::Config;
use log::info;
use ratatui::backend::CrosstermBackend;

mod action;
mod app;
mod components;
mod error;
mod event;
mod layout;
mod service;

use app::App;
use error::{TuiError, TuiResult};

#[derive(Parser, Debug)]
#[command(name = "folio", version, about = "Terminal portfolio")]
struct Args {
    /// Path to the configuration file
    #[arg(long, env = "FOLIO_CONFIG")]
    config: Option<PathBuf>,

    /// Section to open at launch (home, about, projects, contact)
    #[arg(long)]
    section: Option<SectionId>,

    /// Log file; the terminal is owned by the UI
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(err) = run(args).await {
        eprintln!("{}", err.report());
        std::process::exit(1);
    }
}

async fn run(args: Args) -> TuiResult<()> {
    init_logging(args.log_file)?;
    let config = Config::load(args.config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    // Set panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    info!("starting folio");
    let mut app = App::new(config, args.section, terminal.size()?);
    let result = app.run_async(&mut terminal).await;

    // Cleanup terminal
    restore_terminal()?;
    terminal.show_cursor()?;

    result.map_err(TuiError::from)
}

/// Send log output to a file so it never corrupts the alternate screen.
fn init_logging(path: Option<PathBuf>) -> TuiResult<()> {
    let path = path.unwrap_or_else(|| std::env::temp_dir().join("folio.log"));
    let file = File::create(&path)
        .map_err(|e| TuiError::Logging(format!("{}: {}", path.display(), e)))?;

    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .map_err(|e| TuiError::Logging(e.to_string()))
}

/// Restore terminal to normal state.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
    Ok(())
}
