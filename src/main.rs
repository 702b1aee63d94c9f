// algotty: Step-by-Step Algorithm Visualizer

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{bail, Context};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

use algotty::algorithms::AlgorithmId;
use algotty::catalog::CATALOG;
use algotty::config::Config;
use algotty::timeline::is_valid_speed;
use algotty::ui::App;

#[derive(Debug, Parser)]
#[command(name = "algotty", version, about = "Step through classic algorithms in the terminal")]
struct Args {
    /// Algorithm to open first (see --list)
    #[arg(short, long)]
    algorithm: Option<String>,

    /// Initial playback speed multiplier
    #[arg(short, long)]
    speed: Option<f64>,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write tracing output to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the algorithm library and exit
    #[arg(long)]
    list: bool,
}

fn init_tracing(path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("algotty=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // The TUI owns the terminal, so logs only go to a file
    if let Some(path) = &args.log_file {
        init_tracing(path)?;
    }

    if args.list {
        for info in CATALOG.iter() {
            println!("{:<22} {:<20} {}", info.id, info.category, info.name);
        }
        return Ok(());
    }

    let mut config = Config::load_or_default(args.config.as_deref())?;
    if let Some(speed) = args.speed {
        if !is_valid_speed(speed) {
            bail!("speed must be a positive finite number, got {}", speed);
        }
        config.default_speed = speed;
    }

    let requested = args
        .algorithm
        .as_deref()
        .unwrap_or(&config.default_algorithm);
    let algorithm = AlgorithmId::resolve(requested);
    info!(%algorithm, speed = config.default_speed, "starting");

    let mut app = App::new(&config, algorithm);

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.context("terminal UI failed")?;
    Ok(())
}
