//! Parcel command-line interface.
//!
//! Synthesise box geometry from parcel records described by a TOML job file:
//! ```sh
//! parcel-cli run job.toml
//! parcel-cli validate job.toml
//! parcel-cli inspect job.toml
//! ```

mod config;
mod runner;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use parcel_geometry::FaceSide;

#[derive(Parser)]
#[command(name = "parcel-cli")]
#[command(about = "Turn rectangular parcel records into six-face box elements")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Synthesise elements for every record and write them as JSON.
    Run {
        /// Path to the job configuration file.
        config: PathBuf,
        /// Output directory (overrides config file setting).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Check every record without writing anything.
    Validate {
        /// Path to the job configuration file.
        config: PathBuf,
    },
    /// Print a per-parcel summary of the synthesised boxes.
    Inspect {
        /// Path to the job configuration file.
        config: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { config, output } => {
            let job = config::load_config(&config)?;
            log::info!("Configuration: {}", config.display());

            let records = runner::load_records(&job.input.records, &job.input.entity)?;
            let elements = runner::synthesize_records(&records)?;

            let out_dir = output.unwrap_or_else(|| job.output.directory.clone());
            let pretty = job.output.pretty;
            runner::write_elements_json(&elements, &out_dir.join("elements.json"), pretty)?;
            if job.output.flatten_points {
                runner::write_points_json(&elements, &out_dir.join("points.json"), pretty)?;
            }

            println!("Synthesised {} parcel(s).", elements.len());
            Ok(())
        }
        Commands::Validate { config } => {
            let job = config::load_config(&config)?;
            let records = runner::load_records(&job.input.records, &job.input.entity)?;
            let (parcels, failures) = runner::validate_records(&records);

            for failure in &failures {
                eprintln!("  {}", failure);
            }
            if !failures.is_empty() {
                anyhow::bail!("{} of {} record(s) are invalid", failures.len(), records.len());
            }
            println!("All {} record(s) are valid: {}", parcels.len(), config.display());
            Ok(())
        }
        Commands::Inspect { config } => {
            let job = config::load_config(&config)?;
            let records = runner::load_records(&job.input.records, &job.input.entity)?;
            let elements = runner::synthesize_records(&records)?;

            for (n, record) in elements.iter().enumerate() {
                let element = &record.element;
                let (min, max) = element.bounding_box();
                println!(
                    "  [{}] {}: {} x {} x {}, area={:.3}, color={}, opacity={}",
                    n,
                    record.key.as_deref().unwrap_or("-"),
                    max[0] - min[0],
                    max[1] - min[1],
                    max[2] - min[2],
                    element.surface_area(),
                    element.color.as_deref().unwrap_or("-"),
                    element.opacity.map_or_else(|| "-".to_string(), |o| o.to_string()),
                );
                for side in FaceSide::ALL {
                    log::debug!("    {:?}: {:?}", side, element.face(side).points());
                }
            }
            Ok(())
        }
    }
}
