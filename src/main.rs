use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tourpack::{
    Config, PackageContext, PackageType, Region, RunReport, TourType, assemble_package,
    load_document, pipeline,
};

#[derive(Debug, Parser)]
#[command(name = "tourpack")]
#[command(about = "Extract tour packages from .docx files into JSON", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Extract a region's documents and merge them into the corpus
    Extract {
        #[arg(long, value_enum)]
        region: Region,
        /// Configuration file (defaults to the user config directory)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Override the region's source root
        #[arg(long)]
        source: Option<PathBuf>,
        /// Override the output directory
        #[arg(long)]
        output_dir: Option<PathBuf>,
        /// Skip the Spanish fields
        #[arg(long)]
        no_translate: bool,
    },
    /// Print the record assembled from a single document
    Inspect {
        file: PathBuf,
        #[arg(long, value_enum, default_value = "turkey")]
        region: Region,
        #[arg(long, value_enum, default_value = "with-hotel")]
        package_type: PackageType,
        #[arg(long, value_enum, default_value = "sic")]
        tour_type: TourType,
        #[arg(long)]
        no_translate: bool,
    },
    /// Write the default configuration file
    InitConfig {
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Extract {
            region,
            config,
            source,
            output_dir,
            no_translate,
        } => {
            let mut config =
                Config::load(config.as_deref()).context("failed to load configuration")?;
            if let Some(root) = source {
                match config.regions.iter_mut().find(|s| s.region == region) {
                    Some(region_source) => region_source.root = root,
                    None => anyhow::bail!("no folder mapping configured for {region}"),
                }
            }
            if let Some(output_dir) = output_dir {
                config.output_dir = output_dir;
            }
            if no_translate {
                config.translate = false;
            }

            let report = pipeline::run(&config, region)
                .await
                .with_context(|| format!("failed to extract {region} packages"))?;
            print_report(&report);
        }
        Commands::Inspect {
            file,
            region,
            package_type,
            tour_type,
            no_translate,
        } => {
            let document = load_document(&file)
                .await
                .with_context(|| format!("failed to load {}", file.display()))?;
            let source_name = file
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or_default();
            let record = assemble_package(
                &document,
                source_name,
                &PackageContext {
                    package_type,
                    tour_type,
                    region,
                    translate: !no_translate,
                },
            );
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Commands::InitConfig { config } => match Config::init_default(config.as_deref())? {
            Some(path) => println!("Configuration written to {}", path.display()),
            None => anyhow::bail!("could not determine a configuration directory"),
        },
    }

    Ok(())
}

fn print_report(report: &RunReport) {
    let merge = &report.merge;
    println!("=== COMPLETE ===");
    println!("Total packages: {}", merge.total());
    println!("  - {}: {} extracted", merge.region, merge.added);
    println!("  - other regions: {} kept", merge.retained);
    println!("Saved to: {}", merge.corpus_path.display());
    println!("{} packages also saved to: {}", merge.region, merge.region_path.display());

    if !report.failures.is_empty() {
        println!("Failed documents: {}", report.failures.len());
        for failure in &report.failures {
            println!("  {}: {}", failure.source.display(), failure.reason);
        }
    }
}
