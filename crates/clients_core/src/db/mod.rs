//! SQLite connection bootstrap for the clients store.
//!
//! # Responsibility
//! - Open and configure SQLite connections.
//! - Release connections and surface close failures.
//!
//! # Invariants
//! - The `clients` schema is assumed to exist; nothing here creates it.
//! - Open and close failures keep the underlying `rusqlite::Error`.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod open;

pub use open::{close_db, open_db, open_db_in_memory};

/// Database file used when no explicit path is given.
pub const DEFAULT_DB_FILE: &str = "demo.db";

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Open {
        path: PathBuf,
        source: rusqlite::Error,
    },
    Configure(rusqlite::Error),
    Close(rusqlite::Error),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open { path, source } => {
                write!(f, "db open error at `{}`: {source}", path.display())
            }
            Self::Configure(err) => write!(f, "db configure error: {err}"),
            Self::Close(err) => write!(f, "db close error: {err}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Open { source, .. } => Some(source),
            Self::Configure(err) => Some(err),
            Self::Close(err) => Some(err),
        }
    }
}
