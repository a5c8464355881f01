use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wikiquiz::api::HttpBackend;
use wikiquiz::config::API_URL_ENV;
use wikiquiz::{App, Config};

#[derive(Parser)]
#[command(name = "wikiquiz")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the quiz API
    #[arg(long, env = API_URL_ENV)]
    api_url: Option<String>,

    /// Where to write logs (defaults to the data directory)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to a file; stdout belongs to the alternate screen
    let log_path = match cli.log_file {
        Some(path) => path,
        None => Config::log_path()?,
    };
    let log_file = open_log(&log_path)?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wikiquiz=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(log_file)),
        )
        .init();

    let config = Config::load()?.with_api_url(cli.api_url);
    let backend = HttpBackend::new(&config).context("Failed to build HTTP client")?;

    let mut app = App::new(config, Arc::new(backend))?;
    app.run().await?;

    Ok(())
}

fn open_log(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))
}
