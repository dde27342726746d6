// Kept as the only test in this binary: it changes the process working directory.

use clients_core::{Client, ClientRepository, SqliteClientRepository, DEFAULT_DB_FILE};
use rusqlite::Connection;

#[test]
fn open_uses_demo_db_in_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    let previous_dir = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();

    let conn = Connection::open(DEFAULT_DB_FILE).unwrap();
    conn.execute_batch(
        "CREATE TABLE clients (
            id INTEGER PRIMARY KEY,
            fio TEXT,
            login TEXT,
            birthday TEXT,
            email TEXT
        );",
    )
    .unwrap();
    drop(conn);

    let repo = SqliteClientRepository::open().unwrap();
    let client = Client::new("Test", "Test", "19700101", "mail@mail.com");
    let id = repo.create_client(&client).unwrap();
    assert_eq!(repo.get_client(id).unwrap(), client.with_id(id));
    repo.close().unwrap();

    std::env::set_current_dir(previous_dir).unwrap();

    let stored = SqliteClientRepository::open_at(dir.path().join("demo.db")).unwrap();
    assert_eq!(stored.get_client(id).unwrap().full_name, "Test");
}
