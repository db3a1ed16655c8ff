//! Store implementations.
//!
//! # Stores
//!
//! - [`PgUrlRepository`] / [`PgVisitRepository`] - PostgreSQL, via SQLx
//! - [`InMemoryStore`] - in-process, implements both repository traits
//!
//! The PostgreSQL schema lives in `migrations/` and is applied at startup.

pub mod db_error;
pub mod memory;
pub mod pg_url_repository;
pub mod pg_visit_repository;

pub use memory::InMemoryStore;
pub use pg_url_repository::PgUrlRepository;
pub use pg_visit_repository::PgVisitRepository;
