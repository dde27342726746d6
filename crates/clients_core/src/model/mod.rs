//! Domain model for the clients store.
//!
//! # Responsibility
//! - Define the in-memory shape of one `clients` row.
//! - Keep storage column naming out of caller-facing field names.
//!
//! # Invariants
//! - Every persisted client is identified by a storage-assigned `ClientId`.
//! - Records are plain values; the repository never keeps references to them.

pub mod client;
