//! Slug generation and uniqueness validation for record types.
//!
//! A [`SlugValidation`] service registers rules on a [`Validations`] pipeline.
//! Each rule slugizes a source attribute, writes the result to a target field
//! and asks a [`SlugLookup`] whether another row already uses it.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;

pub use application::ports::util::SlugGenerator;
pub use config::{ConfigError, DatabaseConfig};
pub use domain::errors::{DomainError, DomainResult};
pub use domain::record::{
    Errors, Field, FieldValue, Identifier, Model, RecordId, SlugLookup, UniquenessQuery,
};
pub use domain::slug::{SlugFn, SlugOptions, SlugValidation, SlugValidator, slug_fn};
pub use domain::validation::{
    EachValidator, ValidationContext, ValidationOptions, Validations,
};
pub use infrastructure::repositories::{PostgresSlugLookup, SqliteSlugLookup};
pub use infrastructure::util::DefaultSlugGenerator;
