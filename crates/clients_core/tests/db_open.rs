use clients_core::db::{close_db, open_db, open_db_in_memory, DbError, DEFAULT_DB_FILE};
use clients_core::{RepoError, SqliteClientRepository};
use std::error::Error;

#[test]
fn open_db_creates_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fresh.db");
    assert!(!path.exists());

    let conn = open_db(&path).unwrap();
    conn.execute_batch("CREATE TABLE probe (id INTEGER PRIMARY KEY);")
        .unwrap();
    close_db(conn).unwrap();

    assert!(path.exists());
}

#[test]
fn open_db_does_not_create_schema() {
    let conn = open_db_in_memory().unwrap();

    let tables: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table';",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(tables, 0);
}

#[test]
fn open_db_in_missing_directory_returns_open_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("nested").join("demo.db");

    let err = open_db(&path).unwrap_err();
    match &err {
        DbError::Open { path: failed, .. } => assert_eq!(failed, &path),
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.source().is_some());
}

#[test]
fn repository_open_failure_is_connection_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("demo.db");

    let result = SqliteClientRepository::open_at(&path);
    match result {
        Err(RepoError::Connection(DbError::Open { .. })) => {}
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected connection error"),
    }
}

#[test]
fn default_db_file_is_demo_db() {
    assert_eq!(DEFAULT_DB_FILE, "demo.db");
}
