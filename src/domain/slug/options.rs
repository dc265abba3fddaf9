use crate::domain::record::FieldValue;
use crate::domain::validation::{ValidationContext, ValidationOptions};
use std::fmt;
use std::sync::Arc;

pub const DEFAULT_TARGET: &str = "slug";
pub const DEFAULT_MESSAGE: &str = "is already taken.";

/// Custom slug strategy: `(record, source value) -> slug`.
pub type SlugFn<R> = Arc<dyn Fn(&R, &FieldValue) -> String + Send + Sync>;

pub fn slug_fn<R, F>(f: F) -> SlugFn<R>
where
    F: Fn(&R, &FieldValue) -> String + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Registration options for a slug rule.
pub struct SlugOptions<R> {
    to: String,
    message: String,
    validation: ValidationOptions<R>,
}

impl<R> SlugOptions<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Target field receiving the slug.
    pub fn to(mut self, field: impl Into<String>) -> Self {
        self.to = field.into();
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Replaces the pass-through pipeline options wholesale.
    pub fn validation(mut self, options: ValidationOptions<R>) -> Self {
        self.validation = options;
        self
    }

    pub fn on(mut self, context: ValidationContext) -> Self {
        self.validation = self.validation.on(context);
        self
    }

    pub fn allow_nil(mut self, allow: bool) -> Self {
        self.validation = self.validation.allow_nil(allow);
        self
    }

    pub fn allow_blank(mut self, allow: bool) -> Self {
        self.validation = self.validation.allow_blank(allow);
        self
    }

    pub fn if_(mut self, condition: impl Fn(&R) -> bool + Send + Sync + 'static) -> Self {
        self.validation = self.validation.if_(condition);
        self
    }

    pub fn unless(mut self, condition: impl Fn(&R) -> bool + Send + Sync + 'static) -> Self {
        self.validation = self.validation.unless(condition);
        self
    }

    pub fn target(&self) -> &str {
        &self.to
    }

    pub fn error_message(&self) -> &str {
        &self.message
    }

    pub(crate) fn into_parts(self) -> (String, String, ValidationOptions<R>) {
        (self.to, self.message, self.validation)
    }
}

impl<R> Default for SlugOptions<R> {
    fn default() -> Self {
        Self {
            to: DEFAULT_TARGET.to_owned(),
            message: DEFAULT_MESSAGE.to_owned(),
            validation: ValidationOptions::default(),
        }
    }
}

impl<R> fmt::Debug for SlugOptions<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlugOptions")
            .field("to", &self.to)
            .field("message", &self.message)
            .field("validation", &self.validation)
            .finish()
    }
}
