//! `SQLite` connection setup.
//!
//! The report store is owned by another process and may be replaced or
//! removed at any time, so no connection outlives a single request.

use std::str::FromStr;

use sqlx::Connection;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};

use crate::error::StorageError;

/// Configuration for the `SQLite` storage adapter.
pub struct Config {
    /// `SQLite` connection URL (e.g. `sqlite:market_report_data.db`).
    pub database_url: String,
    /// Open the database read-only. The file must already exist.
    pub read_only: bool,
}

impl Config {
    /// Read-only configuration for the given URL.
    #[must_use]
    pub fn read_only(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            read_only: true,
        }
    }

    /// Build a [`Database`] handle from this configuration.
    ///
    /// Only the URL is checked here; nothing is opened until
    /// [`Database::connect`].
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the URL cannot be parsed.
    pub fn build(self) -> Result<Database, StorageError> {
        let options = SqliteConnectOptions::from_str(&self.database_url)?
            .read_only(self.read_only)
            .create_if_missing(!self.read_only);

        tracing::debug!(
            url = %self.database_url,
            read_only = self.read_only,
            "sqlite store configured"
        );

        Ok(Database { options })
    }
}

/// Connection factory for the report store.
#[derive(Clone)]
pub struct Database {
    options: SqliteConnectOptions,
}

impl Database {
    /// Open a fresh connection. Callers close it when their request ends.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the database cannot be opened.
    pub async fn connect(&self) -> Result<SqliteConnection, StorageError> {
        Ok(SqliteConnection::connect_with(&self.options).await?)
    }

    /// Open and immediately close a connection.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the database cannot be opened.
    pub async fn ping(&self) -> Result<(), StorageError> {
        self.connect().await?.close().await?;
        Ok(())
    }
}
