//! Steel Extractor CLI
//!
//! Extract JSON data files from a Minecraft registry snapshot.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use steel_extractor::{
    load_snapshot, ExtractionRun, ExtractorConfig, ExtractorKind, Section,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "steel-extractor")]
#[command(author, version, about = "Extract JSON data files from a Minecraft registry snapshot", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run extractors and write their JSON files
    Extract {
        /// Registry snapshot (JSON file, directory or ZIP)
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, default_value = "steel_extractor_output")]
        output: PathBuf,

        /// Only run these extractors (e.g. "blocks", "loot_tables")
        #[arg(long, value_parser = parse_kind)]
        only: Vec<ExtractorKind>,

        /// Only include these entity types in entities.json (e.g. "player")
        #[arg(long)]
        entity: Vec<String>,

        /// Write compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },

    /// Show information about a snapshot
    Info {
        /// Registry snapshot (JSON file, directory or ZIP)
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn parse_kind(s: &str) -> Result<ExtractorKind, String> {
    s.parse::<ExtractorKind>().map_err(|_| {
        let known: Vec<&str> = ExtractorKind::ALL.iter().map(|k| k.name()).collect();
        format!("Unknown extractor '{}'. Known: {}", s, known.join(", "))
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .init();

    match cli.command {
        Commands::Extract {
            input,
            output,
            only,
            entity,
            compact,
        } => {
            run_extract(&input, &output, only, entity, compact)?;
        }
        Commands::Info { input } => {
            show_snapshot_info(&input)?;
        }
    }

    Ok(())
}

fn run_extract(
    input_path: &PathBuf,
    output_path: &PathBuf,
    only: Vec<ExtractorKind>,
    entity: Vec<String>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    info!("Loading snapshot from {:?}...", input_path);
    let snapshot = load_snapshot(input_path)?;
    info!(
        "  Found {} blocks ({} states), {} items",
        snapshot.blocks.len(),
        snapshot.state_count(),
        snapshot.items.len()
    );

    let mut config = ExtractorConfig::default().with_pretty(!compact);
    if !only.is_empty() {
        config = config.with_extractors(only);
    }
    if !entity.is_empty() {
        config = config.with_entity_filter(entity);
    }

    let summary = ExtractionRun::with_config(snapshot, config).run(output_path)?;

    if !summary.is_success() {
        for (name, message) in &summary.failed {
            error!("  {}: {}", name, message);
        }
        return Err(format!("{} extractor(s) failed", summary.failed.len()).into());
    }

    Ok(())
}

fn show_snapshot_info(input_path: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    println!("Loading snapshot from {:?}...", input_path);
    let snapshot = load_snapshot(input_path)?;

    println!("\nSnapshot Info:");
    for section in Section::ALL {
        println!("  {}: {}", section.name(), snapshot.section_len(section));
    }
    println!("  block states: {}", snapshot.state_count());

    Ok(())
}
