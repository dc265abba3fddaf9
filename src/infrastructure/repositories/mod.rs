// src/infrastructure/repositories/mod.rs
pub mod error;
mod postgres_lookup;
mod sqlite_lookup;

pub use postgres_lookup::PostgresSlugLookup;
pub use sqlite_lookup::SqliteSlugLookup;
