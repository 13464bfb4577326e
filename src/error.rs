// src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("connection error: {0}")]
    Connection(#[from] ConnectionError),

    #[error("write error: {0}")]
    Write(#[from] WriteError),
}

#[derive(Error, Debug)]
pub enum ConnectionError {
    #[error("MONGO_URI is required in environment or .env")]
    MissingUri,

    #[error("invalid connection string: {0}")]
    InvalidUri(#[source] mongodb::error::Error),

    /// Unreachable hosts and rejected credentials both land here.
    #[error("could not connect to {target}: {source}")]
    Connect {
        target: String,
        #[source]
        source: mongodb::error::Error,
    },
}

/// A single upsert rejected by storage.
#[derive(Error, Debug)]
#[error("upsert into `{collection}` for id={id} was rejected: {source}")]
pub struct WriteError {
    pub collection: String,
    pub id: i32,
    #[source]
    pub source: anyhow::Error,
}

impl WriteError {
    pub fn new(collection: &str, id: i32, source: impl Into<anyhow::Error>) -> Self {
        Self {
            collection: collection.to_string(),
            id,
            source: source.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_error_names_collection_and_id() {
        let err = SeedError::from(WriteError::new("planets", 4, anyhow::anyhow!("duplicate key")));

        assert_eq!(
            err.to_string(),
            "write error: upsert into `planets` for id=4 was rejected: duplicate key"
        );
    }

    #[test]
    fn missing_uri_is_a_connection_error() {
        let err = SeedError::from(ConnectionError::MissingUri);

        assert!(matches!(err, SeedError::Connection(ConnectionError::MissingUri)));
        assert!(err.to_string().contains("MONGO_URI is required"));
    }
}
