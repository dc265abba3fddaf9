use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::record::errors::Errors;
use crate::domain::record::value_objects::{FieldValue, Identifier, RecordId};
use std::fmt;

pub type Getter<R> = fn(&R) -> FieldValue;
pub type Setter<R> = fn(&mut R, String);

/// Typed accessor pair for one named field of `R`.
pub struct Field<R> {
    name: &'static str,
    getter: Getter<R>,
    setter: Option<Setter<R>>,
}

impl<R> Field<R> {
    pub const fn read_only(name: &'static str, getter: Getter<R>) -> Self {
        Self {
            name,
            getter,
            setter: None,
        }
    }

    pub const fn writable(name: &'static str, getter: Getter<R>, setter: Setter<R>) -> Self {
        Self {
            name,
            getter,
            setter: Some(setter),
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn is_writable(&self) -> bool {
        self.setter.is_some()
    }

    pub fn read(&self, record: &R) -> FieldValue {
        (self.getter)(record)
    }

    /// Returns `false` without touching the record when the field is read-only.
    pub fn write(&self, record: &mut R, value: String) -> bool {
        self.setter.is_some_and(|setter| {
            setter(record, value);
            true
        })
    }
}

impl<R> Clone for Field<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Field<R> {}

impl<R> fmt::Debug for Field<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("writable", &self.is_writable())
            .finish()
    }
}

/// A persisted (or about to be persisted) record type.
///
/// Primary keys are integers: `id()` and the excluded key in uniqueness
/// queries are [`RecordId`]s, bound as `i64`. Tables keyed by text or UUID
/// columns are not supported.
pub trait Model: Send + Sync + Sized + 'static {
    fn table_name() -> &'static str;

    fn primary_key() -> &'static str {
        "id"
    }

    fn fields() -> Vec<Field<Self>>;

    /// `None` until the record has been stored.
    fn id(&self) -> Option<RecordId>;

    fn errors(&self) -> &Errors;

    fn errors_mut(&mut self) -> &mut Errors;

    fn is_new_record(&self) -> bool {
        self.id().is_none()
    }
}

/// Looks up a field by name, failing for names the model does not declare.
pub fn resolve_field<R: Model>(name: &str) -> DomainResult<Field<R>> {
    Identifier::new(name)?;
    R::fields()
        .into_iter()
        .find(|field| field.name() == name)
        .ok_or_else(|| DomainError::UnknownField(format!("{}.{name}", R::table_name())))
}

/// Like [`resolve_field`] but also requires a setter.
pub fn resolve_writable_field<R: Model>(name: &str) -> DomainResult<Field<R>> {
    let field = resolve_field::<R>(name)?;
    if field.is_writable() {
        Ok(field)
    } else {
        Err(DomainError::ReadOnlyField(format!(
            "{}.{name}",
            R::table_name()
        )))
    }
}
