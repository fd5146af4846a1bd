use clap::Parser;
use prop_filter::cli::{self, DialoguerPrompter};
use prop_filter::config::{LoggingSettings, Settings};
use prop_filter::services;
use prop_filter::FilterEngine;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "prop-filter")]
#[command(about = "Interactively filter real-estate property listings", long_about = None)]
struct Args {
    /// Path to the properties JSON file (overrides configuration)
    #[arg(long)]
    data: Option<PathBuf>,

    /// Load configuration from this file instead of config/
    #[arg(long)]
    config: Option<PathBuf>,
}

fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

fn main() -> ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    let args = Args::parse();

    let settings = match &args.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };
    let mut settings = match settings {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Some(path) = args.data {
        settings.data.path = path;
    }

    init_logging(&settings.logging);

    info!("Reading properties from {}", settings.data.path.display());

    let properties = match services::read_properties(&settings.data.path) {
        Ok(p) => p,
        Err(e) => {
            error!("Failed to load properties: {}", e);
            println!("Error reading properties: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let engine = FilterEngine::new(properties);
    let mut prompter = DialoguerPrompter::new();
    let mut stdout = io::stdout();

    match cli::run(&engine, &mut prompter, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        // Already reported to the user by the session
        Err(cli::SessionError::Prompt(_)) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Session aborted: {}", e);
            ExitCode::FAILURE
        }
    }
}
