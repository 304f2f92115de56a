//! Memo CLI
//!
//! Pattern generation, config checks and a terminal version of the game.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use memo_core::config::{load_from_env, GameConfig};
use memo_core::game::{GamePhase, GameSession, RecordStore};
use memo_core::pattern::{FakeType, PatternData, PatternGenerator, RevealStep};
use memo_core::rng::seeded;
use memo_core::round::TapOutcome;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "memo")]
#[command(about = "Memory pattern game: generate patterns or play in the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one pattern and print it as JSON
    Generate {
        /// Round index (0-based, clamped to the valid range)
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        round: i64,

        /// Seed for reproducible output (random when omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Config file (JSON or YAML); falls back to MEMO_CONFIG_PATH, then defaults
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the reveal steps instead of raw JSON
        #[arg(long, default_value = "false")]
        steps: bool,
    },

    /// Validate a config file
    Check {
        /// Config file (JSON or YAML)
        #[arg(long)]
        config: PathBuf,
    },

    /// Play a game on stdin/stdout
    Play {
        #[arg(long)]
        seed: Option<u64>,

        #[arg(long)]
        config: Option<PathBuf>,

        /// Save the round results here (JSON)
        #[arg(long)]
        record: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { round, seed, config, steps } => {
            let config = resolve_config(config.as_deref())?;
            let mut generator = PatternGenerator::new(config)?;
            generator.set_round(round);

            let seed = seed.unwrap_or_else(rand::random);
            let pattern = generator.generate_pattern(&mut seeded(seed))?;

            if steps {
                println!("Round {} (seed {})", generator.current_round() + 1, seed);
                println!("{}", legend());
                print_steps(&pattern, generator.config().grid_size);
            } else {
                println!("{}", serde_json::to_string_pretty(&pattern)?);
            }
        }
        Commands::Check { config } => {
            let config = GameConfig::load_from_path(&config)
                .with_context(|| format!("Invalid config: {}", config.display()))?;
            println!("✅ Config OK");
            println!("{}", config.to_json()?);
        }
        Commands::Play { seed, config, record } => {
            let config = resolve_config(config.as_deref())?;
            let seed = seed.unwrap_or_else(rand::random);
            play(config, seed, record.as_deref())?;
        }
    }

    Ok(())
}

fn resolve_config(path: Option<&Path>) -> Result<GameConfig> {
    let config = match path {
        Some(path) => GameConfig::load_from_path(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => load_from_env()?,
    };
    Ok(config)
}

fn play(config: GameConfig, seed: u64, record_path: Option<&Path>) -> Result<()> {
    let mut session = GameSession::new(config, seeded(seed))?;
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    session.start()?;
    log::info!("Game started with seed {}", seed);

    while !session.is_finished() {
        let Some(pattern) = session.pattern() else {
            bail!("No pattern for round {}", session.current_round() + 1);
        };
        let grid_size = session.grid_size();

        println!("\n=== Round {} of {} ===", session.current_round() + 1, session.round_count());
        println!("{}", legend());
        print_steps(pattern, grid_size);
        // Push the reveal off screen before input starts.
        print!("Press Enter when ready...");
        io::stdout().flush()?;
        if lines.next().transpose()?.is_none() {
            bail!("Input closed");
        }
        println!("{}", "\n".repeat(40));

        loop {
            let step = session.round_session().map(|r| r.progress() + 1).unwrap_or(1);
            print!("Tap #{} (1-{}): ", step, grid_size);
            io::stdout().flush()?;

            let Some(line) = lines.next().transpose()? else {
                bail!("Input closed");
            };
            let Ok(cell) = line.trim().parse::<usize>() else {
                println!("Enter a cell number");
                continue;
            };
            if cell == 0 {
                println!("Cells are numbered from 1");
                continue;
            }

            let result = match session.tap(cell - 1) {
                Ok(result) => result,
                Err(err) if session.phase() == GamePhase::Aborted => {
                    return Err(err).context("Game aborted");
                }
                Err(err) => {
                    println!("{}", err);
                    continue;
                }
            };

            match result.tap.outcome {
                TapOutcome::Correct => println!("✅ Correct"),
                TapOutcome::Wrong => println!("❌ Wrong (it was {})", result.tap.expected + 1),
            }

            if let Some(summary) = result.completed_round {
                let verdict = if summary.perfect { "perfect!" } else { "with mistakes" };
                println!("Round {} complete {}", summary.round + 1, verdict);
                break;
            }
        }
    }

    let record = session.into_record();
    println!("\n{:?}: {}", record.outcome(), record.summary());

    if let Some(path) = record_path {
        RecordStore::new(path).save(&record)?;
        println!("Results saved to {}", path.display());
    }

    Ok(())
}

fn print_steps(pattern: &PatternData, grid_size: usize) {
    for step in pattern.reveal_steps() {
        println!("\nStep {}:", step.index + 1);
        println!("{}", render_step(&step, grid_size));
    }
}

fn fake_symbol(fake_type: FakeType) -> char {
    match fake_type {
        FakeType::RedCat => 'R',
        FakeType::GreenDog => 'D',
    }
}

fn legend() -> String {
    let fakes = FakeType::ALL
        .iter()
        .map(|&t| format!("{} ({})", t.name(), fake_symbol(t)))
        .collect::<Vec<_>>()
        .join(", ");
    format!("Remember the cat (C). Ignore: {}.", fakes)
}

/// Square-ish text board for one reveal step.
fn render_step(step: &RevealStep, grid_size: usize) -> String {
    let width = (grid_size as f64).sqrt().ceil().max(1.0) as usize;
    let mut cells = vec!['.'; grid_size];
    cells[step.answer] = 'C';
    for fake in &step.fakes {
        cells[fake.position] = fake_symbol(fake.fake_type);
    }

    cells
        .chunks(width)
        .map(|row| row.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}
