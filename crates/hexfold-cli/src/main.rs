//! hexfold - consolidate turn reports into one hex map.
//!
//! Reads every report document in the input directory, merges what each
//! clan and unit saw, and writes a render plan for the map drawing tools.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use hexfold_cli::{load_documents, write_merged, JsonPlanWriter, MapConfig};
use hexfold_core::{render, Failure, Pipeline};
use hexfold_protocol::ClanId;

#[derive(Parser)]
#[command(name = "hexfold")]
#[command(about = "Consolidate turn-report observations into a hex map", version)]
struct Cli {
    /// Clan the map is drawn for (four digits, leading 0)
    #[arg(long)]
    clan: Option<String>,

    /// Render plan to write (must end in .json)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Write the merged tiles as JSON and stop before conversion
    #[arg(long, value_name = "PATH")]
    dump_merged: Option<PathBuf>,

    /// Configuration file (defaults to ./hexfold.yaml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory holding the report documents
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Log as JSON lines instead of text
    #[arg(long)]
    log_json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });
    let logs = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if cli.log_json {
        logs.json().init();
    } else {
        logs.init();
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err),
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => {
            let mut config = MapConfig::load(path)?;
            if let Some(base) = path.parent() {
                config.resolve_paths(base);
            }
            config
        }
        None => {
            let cwd = std::env::current_dir().context("Failed to get current directory")?;
            MapConfig::load_from_dir(&cwd)?
        }
    };
    if let Some(input) = cli.input {
        config.input_dir = input;
    }
    if let Some(output) = cli.output {
        config.output = Some(output);
    }

    let clan = cli
        .clan
        .or(config.clan.clone())
        .ok_or_else(|| anyhow!("--clan is required (or set `clan` in the config file)"))?;
    let clan = ClanId::parse(&clan).context("Invalid --clan")?;

    // Fail on a bad output path before doing any work.
    let writer = config
        .output
        .as_ref()
        .map(|path| JsonPlanWriter::new(path.clone()))
        .transpose()?;

    let documents = load_documents(&config.input_dir)?;
    let pipeline = Pipeline::new(clan)
        .with_schema_version(config.schema_version.as_str())
        .with_border(config.border)
        .quit_on_invalid_documents(config.quit_on_invalid_documents);

    if let Some(path) = &cli.dump_merged {
        let merged = pipeline.merge(&documents)?;
        return write_merged(path, &merged.tiles);
    }

    let outcome = pipeline.run(&documents)?;
    match writer {
        Some(writer) => {
            render(writer, &outcome.hexes, &outcome.frame)?;
        }
        None => tracing::info!(hexes = outcome.hexes.len(), "no --output given, nothing written"),
    }
    Ok(())
}

/// Print the error and pick the exit status: 2 for internal invariant
/// violations, 1 for everything else.
fn report(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<Failure>() {
        Some(Failure::Input { stage, diagnostics }) => {
            for diagnostic in diagnostics {
                eprintln!("{diagnostic}");
            }
            eprintln!("error: {stage} failed with {} error(s)", diagnostics.len());
            ExitCode::from(1)
        }
        Some(Failure::Invariant(violation)) => {
            eprintln!("internal error: {violation}");
            ExitCode::from(2)
        }
        None => {
            eprintln!("error: {err:#}");
            ExitCode::from(1)
        }
    }
}
