// src/main.rs

pub mod db;
pub mod error;
pub mod planet;
pub mod seeder;

use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
//
use crate::{db::{Config, DEFAULT_ENV_FILE}, error::SeedError, planet::planets};

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

async fn seed() -> Result<(), SeedError> {
    let config = Config::load(DEFAULT_ENV_FILE)?;
    let planets = planets();

    info!(collection = %config.collection, records = planets.len(), "Seeding planets");

    seeder::run(&config, &planets).await?;

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    match seed().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("Seeding failed: {}", err);
            ExitCode::FAILURE
        }
    }
}
