use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing::{debug, error};

use deal_csv::config::{Config, Overrides};
use deal_csv::extract::{BedroomFallback, FieldExtractor};
use deal_csv::loader::{self, BadFilePolicy};
use deal_csv::logging;
use deal_csv::table::Layout;

#[derive(Parser)]
#[command(name = "deal_csv")]
#[command(about = "Convert scraped listing JSON into a deal-analysis CSV")]
#[command(version)]
struct Cli {
    /// TOML config file (defaults to ./deal_csv.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert every matching listing file into one CSV
    Convert {
        /// Glob for input JSON files
        #[arg(long)]
        input: Option<String>,
        /// Output CSV path
        #[arg(long)]
        output: Option<PathBuf>,
        #[arg(long, value_enum)]
        layout: Option<Layout>,
        /// Per-unit bedrooms when nothing else applies
        #[arg(long, value_enum)]
        bed_fallback: Option<BedroomFallback>,
        /// What to do with unreadable or malformed input files
        #[arg(long, value_enum)]
        on_bad_file: Option<BadFilePolicy>,
    },
    /// Print the output columns in order
    Columns {
        #[arg(long, value_enum)]
        layout: Option<Layout>,
    },
    /// Show the extracted fields for one listing
    Inspect {
        /// JSON file holding an array of listings
        file: PathBuf,
        /// Position of the listing in the array
        #[arg(long, default_value_t = 0)]
        index: usize,
    },
}

fn inspect(config: &Config, file: &Path, index: usize) -> anyhow::Result<()> {
    let source = loader::load_file(file)?;
    let Some(listing) = source.listings.get(index) else {
        bail!(
            "{} holds {} listings; index {} is out of range",
            file.display(),
            source.listings.len(),
            index
        );
    };
    let record = FieldExtractor::new(config.extract.clone()).extract(listing);
    for (column, cell) in config.layout.columns().iter().zip(record.cells(config.layout)) {
        println!("{:<24} {}", column.name(), cell.render());
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let mut config = Config::load(cli.config.as_deref()).context("loading configuration")?;

    logging::init_logging(config.log_dir.as_deref());
    debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Convert {
            input,
            output,
            layout,
            bed_fallback,
            on_bad_file,
        } => {
            config.apply_overrides(Overrides {
                input,
                output,
                layout,
                bedroom_fallback: bed_fallback,
                on_bad_file,
            });
            debug!(?config, "command-line overrides applied");

            match deal_csv::run(&config) {
                Ok(summary) => {
                    println!(
                        "Wrote {} listings to {}",
                        summary.listings,
                        summary.output_path.display()
                    );
                    for skipped in &summary.skipped {
                        println!("  skipped {}: {}", skipped.path.display(), skipped.reason);
                    }
                }
                Err(e) => {
                    error!("Conversion failed: {}", e);
                    return Err(e.into());
                }
            }
        }
        Commands::Columns { layout } => {
            let layout = layout.unwrap_or(config.layout);
            for column in layout.columns() {
                println!("{}\t{}", column.name(), column.class().as_str());
            }
        }
        Commands::Inspect { file, index } => inspect(&config, &file, index)?,
    }

    Ok(())
}
