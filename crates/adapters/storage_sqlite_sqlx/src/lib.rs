//! # devicenanny-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the [`CheckoutRepository`](devicenanny_app::ports::CheckoutRepository)
//!   port defined in `devicenanny-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Create the `Devices` / `Users` schema when missing (sqlx embedded migrations)
//! - Map joined database rows into domain [`CheckoutRow`](devicenanny_domain::checkout::CheckoutRow)s
//!
//! ## Dependency rule
//! Depends on `devicenanny-app` (for port traits) and `devicenanny-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod checkout_repo;
pub mod error;
pub mod pool;

pub use checkout_repo::SqliteCheckoutRepository;
pub use error::StorageError;
pub use pool::{Config, Database};
