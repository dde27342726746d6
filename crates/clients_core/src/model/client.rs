//! Client domain model.
//!
//! # Responsibility
//! - Define the canonical record for one `clients` row.
//! - Provide the human-readable rendering used by the CLI.
//!
//! # Invariants
//! - `id` is `None` until the repository has persisted the record.
//! - `birthday` is stored verbatim; no date parsing happens in this layer.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Storage-assigned identifier of a client row.
///
/// Kept as a type alias so signatures read as ids rather than counters.
pub type ClientId = i64;

/// One client row.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Client {
    /// Assigned by SQLite on insert. `None` for records not yet persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ClientId>,
    /// Serialized as `fio` to match the storage column.
    #[serde(rename = "fio")]
    pub full_name: String,
    pub login: String,
    /// 8-character `YYYYMMDD` text, e.g. `19700101`.
    pub birthday: String,
    pub email: String,
}

impl Client {
    /// Creates an unpersisted client.
    pub fn new(
        full_name: impl Into<String>,
        login: impl Into<String>,
        birthday: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            full_name: full_name.into(),
            login: login.into(),
            birthday: birthday.into(),
            email: email.into(),
        }
    }

    /// Returns a copy of this record carrying the given id.
    pub fn with_id(mut self, id: ClientId) -> Self {
        self.id = Some(id);
        self
    }

    /// Returns whether this record came from (or was written to) storage.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

impl Display for Client {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.id {
            Some(id) => write!(f, "ID: {id}")?,
            None => write!(f, "ID: -")?,
        }
        write!(
            f,
            ", FIO: {}, Login: {}, Birthday: {}, Email: {}",
            self.full_name, self.login, self.birthday, self.email
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Client;

    #[test]
    fn display_renders_all_fields() {
        let client = Client::new("Test", "tester", "19700101", "mail@mail.com").with_id(7);
        assert_eq!(
            client.to_string(),
            "ID: 7, FIO: Test, Login: tester, Birthday: 19700101, Email: mail@mail.com"
        );
    }

    #[test]
    fn display_marks_unpersisted_id() {
        let client = Client::new("Test", "tester", "19700101", "mail@mail.com");
        assert!(client.to_string().starts_with("ID: -, FIO: Test"));
        assert!(!client.is_persisted());
    }

    #[test]
    fn with_id_keeps_other_fields() {
        let draft = Client::new("A", "b", "20000229", "c@d.e");
        let stored = draft.clone().with_id(42);
        assert_eq!(stored.id, Some(42));
        assert_eq!(stored.full_name, draft.full_name);
        assert_eq!(stored.email, draft.email);
        assert!(stored.is_persisted());
    }
}
