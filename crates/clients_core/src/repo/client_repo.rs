//! Client repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide get/create/update/delete over the `clients` table.
//! - Map rusqlite failures onto operation-specific error variants.
//!
//! # Invariants
//! - `id` is the only lookup key.
//! - Update and delete do not check affected-row counts; unknown ids succeed.
//! - Insert and rowid retrieval run back to back without a transaction, so a
//!   single writer per database file is assumed.

use crate::db::{close_db, open_db, DbError, DEFAULT_DB_FILE};
use crate::model::client::{Client, ClientId};
use rusqlite::{named_params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

const CLIENT_SELECT_SQL: &str = "SELECT id, fio, login, birthday, email
FROM clients
WHERE id = :id;";

const CLIENT_INSERT_SQL: &str = "INSERT INTO clients (fio, login, birthday, email)
VALUES (:fio, :login, :birthday, :email);";

const CLIENT_UPDATE_SQL: &str = "UPDATE clients
SET
    fio = :fio,
    login = :login,
    birthday = :birthday,
    email = :email
WHERE id = :id;";

const CLIENT_DELETE_SQL: &str = "DELETE FROM clients WHERE id = :id;";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for client persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    /// The storage handle could not be opened, configured or closed.
    Connection(DbError),
    /// No row matched the requested id.
    NotFound(ClientId),
    /// A read failed for a reason other than "no rows".
    Query {
        operation: &'static str,
        source: rusqlite::Error,
    },
    /// A row was returned but could not be mapped onto `Client`.
    Scan {
        operation: &'static str,
        source: rusqlite::Error,
    },
    /// An insert/update/delete statement failed.
    Exec {
        operation: &'static str,
        source: rusqlite::Error,
    },
    /// The insert statement ran but no generated id is available.
    /// The row may or may not be persisted.
    IdRetrieval { reason: String },
}

impl RepoError {
    /// Returns whether this error is the "no matching row" condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Connection(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "client not found: {id}"),
            Self::Query { operation, source } => {
                write!(f, "{operation}: db query error: {source}")
            }
            Self::Scan { operation, source } => {
                write!(f, "{operation}: row scan error: {source}")
            }
            Self::Exec { operation, source } => {
                write!(f, "{operation}: db exec error: {source}")
            }
            Self::IdRetrieval { reason } => {
                write!(f, "create: get last insert id error: {reason}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Connection(err) => Some(err),
            Self::NotFound(_) => None,
            Self::Query { source, .. } => Some(source),
            Self::Scan { source, .. } => Some(source),
            Self::Exec { source, .. } => Some(source),
            Self::IdRetrieval { .. } => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Connection(value)
    }
}

/// Repository interface for client CRUD operations.
pub trait ClientRepository {
    /// Fetches one client by id.
    fn get_client(&self, id: ClientId) -> RepoResult<Client>;
    /// Inserts a client and returns the generated id. `client.id` is ignored.
    fn create_client(&self, client: &Client) -> RepoResult<ClientId>;
    /// Overwrites all mutable fields of the row `id`. `client.id` is ignored.
    fn update_client(&self, id: ClientId, client: &Client) -> RepoResult<()>;
    /// Removes the row `id`.
    fn delete_client(&self, id: ClientId) -> RepoResult<()>;
}

/// SQLite-backed client repository.
///
/// Owns its connection exclusively. The type is `Send` but not `Sync`: one
/// instance must not be shared between threads, and no locking is done.
/// The connection is released by [`SqliteClientRepository::close`] or, if
/// the caller never calls it, when the repository is dropped.
pub struct SqliteClientRepository {
    conn: Connection,
}

impl SqliteClientRepository {
    /// Opens the repository over `demo.db` in the working directory.
    pub fn open() -> RepoResult<Self> {
        Self::open_at(DEFAULT_DB_FILE)
    }

    /// Opens the repository over an explicit database file.
    pub fn open_at(path: impl AsRef<Path>) -> RepoResult<Self> {
        let conn = open_db(path)?;
        Ok(Self { conn })
    }

    /// Wraps an already open connection.
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    /// Releases the connection, reporting a failed close.
    pub fn close(self) -> RepoResult<()> {
        close_db(self.conn)?;
        Ok(())
    }
}

impl ClientRepository for SqliteClientRepository {
    fn get_client(&self, id: ClientId) -> RepoResult<Client> {
        let mut stmt = self
            .conn
            .prepare(CLIENT_SELECT_SQL)
            .map_err(|source| RepoError::Query {
                operation: "get",
                source,
            })?;

        let client = stmt
            .query_row(named_params! { ":id": id }, parse_client_row)
            .map_err(|err| classify_read_error("get", id, err))?;

        Ok(client)
    }

    fn create_client(&self, client: &Client) -> RepoResult<ClientId> {
        let changed = self
            .conn
            .execute(
                CLIENT_INSERT_SQL,
                named_params! {
                    ":fio": client.full_name.as_str(),
                    ":login": client.login.as_str(),
                    ":birthday": client.birthday.as_str(),
                    ":email": client.email.as_str(),
                },
            )
            .map_err(|source| RepoError::Exec {
                operation: "create",
                source,
            })?;

        if changed == 0 {
            return Err(RepoError::IdRetrieval {
                reason: "insert statement did not add a row".to_string(),
            });
        }

        // Any i64 is a valid rowid, 0 and negatives included.
        Ok(self.conn.last_insert_rowid())
    }

    fn update_client(&self, id: ClientId, client: &Client) -> RepoResult<()> {
        self.conn
            .execute(
                CLIENT_UPDATE_SQL,
                named_params! {
                    ":id": id,
                    ":fio": client.full_name.as_str(),
                    ":login": client.login.as_str(),
                    ":birthday": client.birthday.as_str(),
                    ":email": client.email.as_str(),
                },
            )
            .map_err(|source| RepoError::Exec {
                operation: "update",
                source,
            })?;

        Ok(())
    }

    fn delete_client(&self, id: ClientId) -> RepoResult<()> {
        self.conn
            .execute(CLIENT_DELETE_SQL, named_params! { ":id": id })
            .map_err(|source| RepoError::Exec {
                operation: "delete",
                source,
            })?;

        Ok(())
    }
}

fn parse_client_row(row: &Row<'_>) -> rusqlite::Result<Client> {
    Ok(Client {
        id: Some(row.get("id")?),
        full_name: row.get("fio")?,
        login: row.get("login")?,
        birthday: row.get("birthday")?,
        email: row.get("email")?,
    })
}

fn classify_read_error(operation: &'static str, id: ClientId, err: rusqlite::Error) -> RepoError {
    match err {
        rusqlite::Error::QueryReturnedNoRows => RepoError::NotFound(id),
        rusqlite::Error::FromSqlConversionFailure(..)
        | rusqlite::Error::IntegralValueOutOfRange(..)
        | rusqlite::Error::InvalidColumnIndex(_)
        | rusqlite::Error::InvalidColumnName(_)
        | rusqlite::Error::InvalidColumnType(..) => RepoError::Scan {
            operation,
            source: err,
        },
        source => RepoError::Query { operation, source },
    }
}

#[cfg(test)]
mod tests {
    use super::{classify_read_error, RepoError};
    use rusqlite::types::Type;
    use std::error::Error;

    #[test]
    fn no_rows_maps_to_not_found() {
        let err = classify_read_error("get", 9, rusqlite::Error::QueryReturnedNoRows);
        assert!(matches!(err, RepoError::NotFound(9)));
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "client not found: 9");
    }

    #[test]
    fn column_type_mismatch_maps_to_scan() {
        let err = classify_read_error(
            "get",
            1,
            rusqlite::Error::InvalidColumnType(1, "fio".to_string(), Type::Null),
        );
        assert!(matches!(err, RepoError::Scan { operation: "get", .. }));
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("get: row scan error"));
    }

    #[test]
    fn other_failures_map_to_query() {
        let err = classify_read_error("get", 1, rusqlite::Error::InvalidQuery);
        assert!(matches!(err, RepoError::Query { operation: "get", .. }));
        assert!(!err.is_not_found());
    }

    #[test]
    fn id_retrieval_has_no_inner_source() {
        let err = RepoError::IdRetrieval {
            reason: "nothing inserted".to_string(),
        };
        assert!(err.source().is_none());
        assert!(err.to_string().contains("last insert id"));
    }
}
