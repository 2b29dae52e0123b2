//! Command line shell for the toroidal Game of Life

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use toroidal_life::{
    config::{CliOverrides, Settings},
    utils::{BoardFormatter, ColorOutput},
    PatternLibrary, Session,
};

#[derive(Parser)]
#[command(name = "toroidal_life")]
#[command(about = "Game of Life on a wrap-around board")]
#[command(version = "0.1.0")]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, default_value = "config/default.yaml")]
    config: PathBuf,

    /// Pattern library file (overrides config)
    #[arg(short, long, global = true)]
    library: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default configuration file
    Setup {
        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// List pattern names available for selection
    List,

    /// Place a pattern and print each generation
    Run {
        /// Pattern name from the library
        #[arg(short, long)]
        pattern: String,

        /// Number of generations (overrides config)
        #[arg(short, long)]
        generations: Option<usize>,

        /// Board rows (overrides config)
        #[arg(long)]
        rows: Option<usize>,

        /// Board columns (overrides config)
        #[arg(long)]
        cols: Option<usize>,
    },

    /// Import a text layout into the pattern library
    Save {
        /// Name to store the layout under
        #[arg(short, long)]
        name: String,

        /// Text file with one row per line ('#'/'1' alive, '.'/'0' dead)
        #[arg(long)]
        layout: PathBuf,
    },
}

fn main() -> Result<()> {
    execute(Cli::parse())
}

fn execute(cli: Cli) -> Result<()> {
    // Setup writes the config file, so it must not depend on reading it
    if let Commands::Setup { force } = cli.command {
        init_logging(&Settings::default(), cli.verbose);
        return setup_command(&cli.config, force);
    }

    let mut settings = load_settings(&cli.config)?;
    init_logging(&settings, cli.verbose);

    let mut overrides = CliOverrides {
        library: cli.library.clone(),
        ..CliOverrides::default()
    };
    if let Commands::Run {
        generations,
        rows,
        cols,
        ..
    } = &cli.command
    {
        overrides.generations = *generations;
        overrides.rows = *rows;
        overrides.cols = *cols;
    }
    settings.merge_with_cli(&overrides);
    settings.validate().context("Configuration validation failed")?;

    match cli.command {
        Commands::Setup { force } => setup_command(&cli.config, force),
        Commands::List => list_command(&settings),
        Commands::Run { pattern, .. } => run_command(&settings, &pattern),
        Commands::Save { name, layout } => save_command(&settings, &name, &layout),
    }
}

fn load_settings(config_path: &PathBuf) -> Result<Settings> {
    if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))
    } else {
        Ok(Settings::default())
    }
}

fn init_logging(settings: &Settings, verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        settings.logging.level.as_filter()
    };
    // RUST_LOG, when set, takes precedence over the configured level
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}

fn setup_command(config_path: &PathBuf, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        println!("Skipped: {} (already exists)", config_path.display());
        return Ok(());
    }

    Settings::default()
        .to_file(config_path)
        .context("Failed to create default configuration")?;
    println!("{}", ColorOutput::success(&format!("Created: {}", config_path.display())));
    Ok(())
}

fn list_command(settings: &Settings) -> Result<()> {
    let library = PatternLibrary::new(&settings.library.path);
    for name in library.list_names() {
        println!("{}", name);
    }
    Ok(())
}

fn run_command(settings: &Settings, pattern: &str) -> Result<()> {
    let board = settings.board()?;
    let library = PatternLibrary::new(&settings.library.path);

    let mut session = Session::new(board);
    session
        .select_pattern(&library, pattern)
        .with_context(|| format!("Failed to place pattern '{}'", pattern))?;

    println!("{}", ColorOutput::info(&format!("Generation 0 ({} alive)", session.alive().len())));
    print!("{}", BoardFormatter::format_alive_set(session.board(), session.alive()));

    session.run();
    for _ in 0..settings.simulation.generations {
        session.tick();
        println!(
            "{}",
            ColorOutput::info(&format!(
                "Generation {} ({} alive)",
                session.generation(),
                session.alive().len()
            ))
        );
        print!("{}", BoardFormatter::format_alive_set(session.board(), session.alive()));
    }

    if session.alive().is_empty() {
        println!("{}", ColorOutput::warning("All cells died"));
    }
    Ok(())
}

fn save_command(settings: &Settings, name: &str, layout: &PathBuf) -> Result<()> {
    let content = std::fs::read_to_string(layout)
        .with_context(|| format!("Failed to read layout from {}", layout.display()))?;
    let cells = BoardFormatter::parse_layout(&content)
        .with_context(|| format!("Failed to parse layout from {}", layout.display()))?;

    let library = PatternLibrary::new(&settings.library.path);
    library
        .save(name, &cells)
        .with_context(|| format!("Failed to save pattern '{}'", name))?;

    println!(
        "{}",
        ColorOutput::success(&format!(
            "Saved '{}' ({} cells) to {}",
            name,
            cells.len(),
            settings.library.path.display()
        ))
    );
    Ok(())
}
