//! PostgreSQL persistence adapter using Diesel ORM.
//!
//! Provides the `CampRepository` implementation backed by PostgreSQL via
//! `diesel-async` with `bb8` connection pooling.
//!
//! - **Thin adapter**: the repository only translates between Diesel rows and
//!   domain types. No business logic resides here.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) never leave this module.
//! - **Strongly typed errors**: database failures map to
//!   `CampRepositoryError` variants.
//!
//! # Example
//!
//! ```ignore
//! use camps_backend::outbound::persistence::{DbPool, DieselCampRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/camps")).await?;
//! let repo = DieselCampRepository::new(pool);
//! ```

mod diesel_basic_error_mapping;
mod diesel_camp_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_camp_repository::DieselCampRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
