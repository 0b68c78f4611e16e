//! Roster Browser
//!
//! Filter and page through a static roster of people and curate a team
//! from the console.

mod config;
mod console;
mod data;
mod errors;
mod models;
mod paging;
mod search;
mod session;
mod team;

use std::io;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::{Config, LogFormat};
use session::Session;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);
    match config.log_format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init(),
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init(),
    }

    tracing::info!("Starting Roster Browser");
    tracing::info!("Data path: {:?}", config.data_path);
    tracing::info!("Output format: {:?}", config.output_format);

    let roster = data::load_roster(config.data_path.as_deref())?;
    let mut session = Session::new(roster);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    console::run(stdin.lock(), &mut stdout, &mut session, config.output_format)?;

    Ok(())
}
