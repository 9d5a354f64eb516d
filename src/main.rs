use anyhow::Context;
use clap::Parser;
use kanban_dnd::{Board, BoardConfig, PointerEvent, StackMetrics, StackedLayout};
use std::path::{Path, PathBuf};

/// Replays a recorded pointer-event script against a board and prints
/// the resulting columns.
#[derive(Parser)]
#[command(name = "kanban-dnd")]
#[command(about = "Replay drag-and-drop gestures against a kanban board", long_about = None)]
#[command(version)]
struct Cli {
    /// Board config (JSON); the built-in board when omitted
    #[arg(long, value_name = "FILE", env = "KANBAN_DND_CONFIG")]
    config: Option<PathBuf>,

    /// JSON array of pointer events to replay
    #[arg(long, value_name = "FILE")]
    script: Option<PathBuf>,

    /// Card height used to lay out columns
    #[arg(long, default_value_t = 96.0)]
    card_height: f32,

    /// Indicator height used to lay out columns
    #[arg(long, default_value_t = 4.0)]
    indicator_height: f32,
}

fn init_logging() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("KANBAN_DND_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .with_context(|| format!("opening log file {}", log_path))?;

        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(log_file))
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .with_target(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_writer(std::io::stderr)
            .init();
    }
    Ok(())
}

fn load_script(path: &Path) -> anyhow::Result<Vec<PointerEvent>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading script {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("parsing script {}", path.display()))
}

fn print_board(board: &Board) {
    println!("{}", board.config().name);
    for view in board.column_views() {
        println!();
        println!("{} ({})", view.column.title, view.card_count);
        for card in view.cards {
            println!("  [{}] {}", card.id, card.title);
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => BoardConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => BoardConfig::default(),
    };
    let mut board = Board::new(config);

    let events = match &cli.script {
        Some(path) => load_script(path)?,
        None => Vec::new(),
    };

    let metrics = StackMetrics {
        origin_y: 0.0,
        card_height: cli.card_height,
        indicator_height: cli.indicator_height,
    };

    for event in events {
        // cards move between events, so measure against the current store
        let layout = StackedLayout::measure(board.store(), board.columns(), metrics);
        tracing::debug!(?event, "replaying");
        board.dispatch(event, &layout);
    }

    print_board(&board);
    Ok(())
}
