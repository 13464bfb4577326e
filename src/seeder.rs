// src/seeder.rs

use chrono::{DateTime, Duration, Utc};
use mongodb::bson::to_document;
use tracing::info;
//
use crate::{db::{Config, DocumentStore, DB}, error::{SeedError, WriteError}, planet::PlanetRecord};

#[derive(Clone, Debug)]
pub struct SeedReport {
    pub collection: String,
    pub upserted: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl SeedReport {
    pub fn elapsed(&self) -> Duration {
        self.finished_at - self.started_at
    }
}

pub struct Seeder<S> {
    store: S,
    collection: String,
}

impl<S: DocumentStore> Seeder<S> {
    pub fn new(store: S, collection: &str) -> Self {
        Self { store, collection: collection.to_string() }
    }

    /// Upserts `records` one at a time, in order. Stops at the first rejected write.
    pub async fn seed(&self, records: &[PlanetRecord]) -> Result<SeedReport, SeedError> {
        let started_at = Utc::now();
        let mut upserted = 0;

        for record in records {
            let document = to_document(record)
                .map_err(|err| WriteError::new(&self.collection, record.id, err))?;

            self.store.upsert(&self.collection, record.id, document).await?;
            upserted += 1;

            info!("Upserted planet id={} name={}", record.id, record.name);
        }

        let report = SeedReport {
            collection: self.collection.clone(),
            upserted,
            started_at,
            finished_at: Utc::now(),
        };

        info!(
            collection = %report.collection,
            upserted = report.upserted,
            elapsed_ms = report.elapsed().num_milliseconds(),
            "Seeding complete"
        );

        Ok(report)
    }
}

/// Connects with `config`, seeds `records`, then releases the connection.
pub async fn run(config: &Config, records: &[PlanetRecord]) -> Result<SeedReport, SeedError> {
    let db = DB::connect(config).await?;

    Seeder::new(db, &config.collection).seed(records).await
}
