//! Outbound adapters implementing the `CampRepository` port.
//!
//! - **memory**: in-process store, used when no database is configured.
//! - **persistence**: PostgreSQL via Diesel, `diesel-async` and `bb8`.
//!
//! Adapters translate between domain types and storage representations and
//! contain no business logic.

pub mod memory;
pub mod persistence;
