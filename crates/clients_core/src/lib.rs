//! Data access for the `clients` table.
//! Typed get/create/update/delete over a single embedded SQLite file.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;

pub use db::{DbError, DbResult, DEFAULT_DB_FILE};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::client::{Client, ClientId};
pub use repo::client_repo::{ClientRepository, RepoError, RepoResult, SqliteClientRepository};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
