pub mod entity;
pub mod errors;
pub mod repository;
pub mod value_objects;

pub use entity::{Field, Getter, Model, Setter, resolve_field, resolve_writable_field};
pub use errors::Errors;
pub use repository::{SlugLookup, UniquenessQuery};
pub use value_objects::{FieldValue, Identifier, RecordId};
