use anyhow::{Context, Result};
use clap::Parser;
use feng_shui::{Board, Bounds, Config, DragEvent, Piece, read_events, read_events_file};
use log::{debug, info, warn};
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about = "Furnish a room and score its feng shui", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short = 'c', long = "config", default_value = "config/default.toml")]
    config: PathBuf,

    /// Number of pieces to place
    #[arg(short = 'n', long = "count")]
    count: Option<usize>,

    /// Room width
    #[arg(long = "width")]
    width: Option<f64>,

    /// Room height
    #[arg(long = "height")]
    height: Option<f64>,

    /// RNG seed for a reproducible room
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Drag event script to replay ("-" reads stdin)
    #[arg(short = 'e', long = "events")]
    events: Option<PathBuf>,

    /// Print the final room as JSON
    #[arg(long = "json")]
    json: bool,
}

#[derive(Serialize)]
struct Snapshot<'a> {
    bounds: Bounds,
    score: u8,
    pieces: &'a [Piece],
}

fn main() -> Result<()> {
    // Initialize logger - defaults to RUST_LOG if set, otherwise INFO
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
    let args = Args::parse();

    let config = load_config(&args)?;
    let seed = config.layout.seed.unwrap_or_else(|| rand::rng().random());
    info!("Using seed {seed}");
    let mut rng = StdRng::seed_from_u64(seed);

    let mut board = Board::populated(config.layout.piece_count, config.bounds(), &mut rng);

    if let Some(path) = &args.events {
        let events = load_events(path, &config)?;
        replay(&mut board, &events);
    }

    if args.json {
        let snapshot = Snapshot {
            bounds: board.bounds(),
            score: board.score(),
            pieces: board.pieces(),
        };
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print_room(&board);
    }
    Ok(())
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = if args.config.exists() {
        Config::load_from_file(&args.config)?
    } else {
        warn!(
            "Config file not found: {}, using default settings",
            args.config.display()
        );
        Config::default()
    };

    // Command line overrides
    if let Some(count) = args.count {
        config.layout.piece_count = count;
    }
    if let Some(width) = args.width {
        config.layout.width = width;
    }
    if let Some(height) = args.height {
        config.layout.height = height;
    }
    if args.seed.is_some() {
        config.layout.seed = args.seed;
    }
    config.apply_env()?;
    config.validate()?;

    debug!("Configuration: {config:?}");
    Ok(config)
}

fn load_events(path: &Path, config: &Config) -> Result<Vec<DragEvent>> {
    let origin = config.container_origin();
    let events = if path.as_os_str() == "-" {
        read_events(std::io::stdin().lock(), origin)
            .context("Failed to read events from stdin")?
    } else {
        read_events_file(path, origin)
            .with_context(|| format!("Failed to load events from {}", path.display()))?
    };
    info!("Loaded {} drag events", events.len());
    Ok(events)
}

fn replay(board: &mut Board, events: &[DragEvent]) {
    let mut drops = 0;
    for event in events {
        if board.handle(*event) {
            drops += 1;
        }
    }
    info!("Replayed {} events, {} drops applied", events.len(), drops);
}

fn print_room(board: &Board) {
    let bounds = board.bounds();
    println!("Room {}x{}", bounds.width, bounds.height);
    for p in board.pieces() {
        println!(
            "piece {:<3} at ({:>7.1}, {:>7.1}) size {:>3}x{:<3} {}",
            p.id, p.x, p.y, p.width, p.height, p.color
        );
    }
    println!("Feng shui: {} / 100", board.score());
}
