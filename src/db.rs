// src/db.rs

use std::{collections::HashMap, fmt, io::ErrorKind, path::Path};
use async_trait::async_trait;
use mongodb::{bson::{doc, Document}, options::{ClientOptions, Credential, ReplaceOptions}, Client, Database};
use regex::Regex;
use tracing::{debug, info, warn};
//
use crate::error::{ConnectionError, WriteError};

pub const DEFAULT_ENV_FILE: &str = ".env";
pub const DEFAULT_COLLECTION: &str = "planets";
// what the driver falls back to when the uri names no database
pub const FALLBACK_DATABASE: &str = "test";

#[derive(Clone)]
pub struct Config {
    pub uri: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub database: Option<String>,
    pub collection: String,
}

impl Config {
    /// Reads settings from the process environment, falling back to `env_file` for keys
    /// the environment does not define. The environment itself is left untouched.
    pub fn load(env_file: impl AsRef<Path>) -> Result<Self, ConnectionError> {
        let file_vars = read_env_file(env_file.as_ref());

        Self::from_lookup(|key| std::env::var(key).ok().or_else(|| file_vars.get(key).cloned()))
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConnectionError> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let uri = var("MONGO_URI").ok_or(ConnectionError::MissingUri)?;
        let username = var("MONGO_USERNAME");
        let password = var("MONGO_PASSWORD");

        if username.is_none() && password.is_some() {
            warn!("MONGO_PASSWORD is set without MONGO_USERNAME; ignoring it");
        }

        Ok(Self {
            uri,
            password: username.as_ref().and(password),
            username,
            database: var("MONGO_DATABASE"),
            collection: var("MONGO_COLLECTION").unwrap_or_else(|| DEFAULT_COLLECTION.to_string()),
        })
    }
}

// the uri and password can both carry secrets
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("uri", &"<redacted>")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("database", &self.database)
            .field("collection", &self.collection)
            .finish()
    }
}

lazy_static::lazy_static! {
    static ref ENV_LINE: Regex = Regex::new(r"^\s*([A-Za-z0-9_.\-]+)\s*=\s*(.*)?\s*$").unwrap();
}

/// Parses `KEY=VALUE` lines. Values are taken literally: no escapes, no `$VAR` expansion.
/// A single pair of matching surrounding quotes is removed. The first occurrence of a key wins.
fn parse_env_file(contents: &str) -> HashMap<String, String> {
    let mut vars = HashMap::new();

    for line in contents.lines() {
        let Some(captures) = ENV_LINE.captures(line) else {
            continue;
        };

        let key = captures[1].to_string();
        let value = captures.get(2).map_or("", |m| m.as_str());

        vars.entry(key).or_insert_with(|| unquote(value).to_string());
    }

    vars
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }

    value
}

fn read_env_file(path: &Path) -> HashMap<String, String> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => return HashMap::new(),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "could not read env file");
            return HashMap::new();
        }
    };

    let vars = parse_env_file(&contents);

    debug!(path = %path.display(), keys = vars.len(), "loaded env file");

    vars
}

/// Storage seam for the seeder: insert-or-replace one document matched on `id`.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn upsert(&self, collection_name: &str, id: i32, document: Document) -> Result<(), WriteError>;
}

#[derive(Clone, Debug)]
pub struct DB {
    pub database: Database,
}

impl DB {
    pub async fn connect(config: &Config) -> Result<Self, ConnectionError> {
        let options = client_options(config).await?;
        let database_name = database_name(config, &options);
        let hosts = options.hosts.iter().map(ToString::to_string).collect::<Vec<_>>().join(",");

        let client = Client::with_options(options).map_err(ConnectionError::InvalidUri)?;

        // the driver connects lazily; ping so bad hosts and bad credentials fail here
        client.database("admin").run_command(doc! { "ping": 1 }, None).await
            .map_err(|source| ConnectionError::Connect { target: hosts.clone(), source })?;

        info!(%hosts, database = %database_name, "Connected to MongoDB");

        Ok(Self { database: client.database(&database_name) })
    }
}

/// Parses the connection string and layers `MONGO_USERNAME`/`MONGO_PASSWORD` over any
/// credential it carries. A password embedded in the uri survives when no password is configured.
async fn client_options(config: &Config) -> Result<ClientOptions, ConnectionError> {
    let mut options = ClientOptions::parse(&config.uri).await.map_err(ConnectionError::InvalidUri)?;

    if let Some(username) = &config.username {
        let credential = options.credential.get_or_insert_with(Credential::default);
        credential.username = Some(username.clone());

        if let Some(password) = &config.password {
            credential.password = Some(password.clone());
        }
    }

    Ok(options)
}

fn database_name(config: &Config, options: &ClientOptions) -> String {
    config.database.clone()
        .or_else(|| options.default_database.clone())
        .unwrap_or_else(|| FALLBACK_DATABASE.to_string())
}

#[async_trait]
impl DocumentStore for DB {
    async fn upsert(&self, collection_name: &str, id: i32, document: Document) -> Result<(), WriteError> {
        let collection = self.database.collection::<Document>(collection_name);
        let options = ReplaceOptions::builder().upsert(true).build();

        collection.replace_one(doc! { "id": id }, document, options).await
            .map_err(|err| WriteError::new(collection_name, id, err))?;

        Ok(())
    }
}
