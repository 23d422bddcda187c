use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use c4_tablegen::config::AppConfig;
use c4_tablegen::enumerate::accepted_positions;
use c4_tablegen::oracle::{FileOracle, ScoreOracle};
use c4_tablegen::score::BestMoves;
use c4_tablegen::table::write_table;

/// Generate the Connect Four opening table.
#[derive(Parser)]
#[command(
    name = "c4-tablegen",
    about = "Enumerate live Connect Four positions and tabulate best moves"
)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override the position depth in plies
    #[arg(long)]
    length: Option<usize>,

    /// JSON file of solver scores keyed by position string
    #[arg(long)]
    scores: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides, then re-validate
    if let Some(length) = cli.length {
        config.generator.target_length = length;
    }
    if let Some(scores) = cli.scores {
        config.oracle.scores_path = Some(scores);
    }
    config.validate().context("validating configuration")?;

    let depth = config.generator.target_length;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &config.oracle.scores_path {
        Some(path) => {
            let oracle = FileOracle::load(path)
                .with_context(|| format!("loading scores from {}", path.display()))?;
            log::info!("loaded scores for {} positions", oracle.len());

            let records = accepted_positions(depth)
                .map(|position| {
                    let scores = oracle.score(&position)?;
                    BestMoves::select(position, &scores)
                })
                .collect::<Result<Vec<_>, _>>()
                .context("scoring accepted positions")?;

            log::info!("tabulated {} positions at depth {}", records.len(), depth);
            write_table(&mut out, records, config.output.emit_closer)?;
        }
        None => {
            let mut emitted = 0usize;
            for position in accepted_positions(depth) {
                writeln!(out, "{position}")?;
                emitted += 1;
            }
            log::info!("emitted {emitted} positions at depth {depth}");
        }
    }

    Ok(())
}
