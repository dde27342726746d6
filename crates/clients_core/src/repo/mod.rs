//! Repository layer contracts and SQLite implementation.
//!
//! # Responsibility
//! - Define the client data access contract.
//! - Keep SQL text and row mapping out of callers.
//!
//! # Invariants
//! - All statements use named placeholders (`:id`, `:fio`, ...).
//! - Repository APIs return semantic errors (`NotFound`) distinct from
//!   query/exec transport errors.

pub mod client_repo;
