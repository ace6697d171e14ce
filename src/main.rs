use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use coursecat::catalog::Catalog;
use coursecat::course::Credits;
use coursecat::settings::{OutputFormat, Settings};
use coursecat::{CatalogError, Result};

#[derive(Parser, Debug)]
#[command(name = "coursecat", version, about = "Read a course catalog document and report on it")]
struct Args {
    /// Catalog document to read (overrides the configured one)
    catalog: Option<PathBuf>,
    /// Explicit settings file
    #[arg(short, long, env = "COURSECAT_CONFIG")]
    config: Option<PathBuf>,
    /// Print the catalog as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let settings = match Settings::load(args.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match run(args, settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "reading catalog failed");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args, settings: Settings) -> Result<()> {
    let path = args
        .catalog
        .or(settings.catalog)
        .ok_or_else(|| CatalogError::Config("no catalog document given".to_string()))?;
    info!(path = %path.display(), "reading catalog");
    let document = std::fs::read_to_string(&path)?;
    let catalog = Catalog::parse(&document)?;

    let output = if args.json { OutputFormat::Json } else { settings.output };
    match output {
        OutputFormat::Json => {
            let json = if settings.pretty {
                serde_json::to_string_pretty(&catalog)
            } else {
                serde_json::to_string(&catalog)
            }
            .map_err(|e| CatalogError::Io(e.to_string()))?;
            println!("{json}");
        }
        OutputFormat::Summary => {
            for course in catalog.courses() {
                let credits = match course.credits() {
                    Credits::Fixed(n) => n.to_string(),
                    Credits::Range(min, max) => format!("{min}-{max}"),
                };
                let open = course.sections().iter().filter(|s| s.is_valid() && !s.is_filled()).count();
                println!(
                    "{:<12} {:<40} {:>5} credits  {} sections ({} open)",
                    course.code(),
                    course.name(),
                    credits,
                    course.sections().len(),
                    open
                );
            }
        }
    }
    Ok(())
}
