use crate::domain::record::{FieldValue, Model};
use std::fmt;
use std::sync::Arc;

pub type Condition<R> = Arc<dyn Fn(&R) -> bool + Send + Sync>;

/// Lifecycle stage a validation run belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationContext {
    Create,
    Update,
}

impl ValidationContext {
    pub fn for_record<R: Model>(record: &R) -> Self {
        if record.is_new_record() {
            Self::Create
        } else {
            Self::Update
        }
    }
}

/// Options every rule understands, independent of what the rule checks.
pub struct ValidationOptions<R> {
    on: Option<ValidationContext>,
    allow_nil: bool,
    allow_blank: bool,
    if_: Option<Condition<R>>,
    unless: Option<Condition<R>>,
}

impl<R> ValidationOptions<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the rule to one stage. Unset means every save.
    pub fn on(mut self, context: ValidationContext) -> Self {
        self.on = Some(context);
        self
    }

    pub fn allow_nil(mut self, allow: bool) -> Self {
        self.allow_nil = allow;
        self
    }

    pub fn allow_blank(mut self, allow: bool) -> Self {
        self.allow_blank = allow;
        self
    }

    pub fn if_(mut self, condition: impl Fn(&R) -> bool + Send + Sync + 'static) -> Self {
        self.if_ = Some(Arc::new(condition));
        self
    }

    pub fn unless(mut self, condition: impl Fn(&R) -> bool + Send + Sync + 'static) -> Self {
        self.unless = Some(Arc::new(condition));
        self
    }

    pub const fn context(&self) -> Option<ValidationContext> {
        self.on
    }

    /// Whether the rule should run for this record, stage and value.
    pub fn applies(&self, record: &R, context: ValidationContext, value: &FieldValue) -> bool {
        if self.on.is_some_and(|on| on != context) {
            return false;
        }
        if (self.allow_nil && value.is_null()) || (self.allow_blank && value.is_blank()) {
            return false;
        }
        if self.if_.as_ref().is_some_and(|cond| !cond(record)) {
            return false;
        }
        !self.unless.as_ref().is_some_and(|cond| cond(record))
    }
}

impl<R> Default for ValidationOptions<R> {
    fn default() -> Self {
        Self {
            on: None,
            allow_nil: false,
            allow_blank: false,
            if_: None,
            unless: None,
        }
    }
}

impl<R> Clone for ValidationOptions<R> {
    fn clone(&self) -> Self {
        Self {
            on: self.on,
            allow_nil: self.allow_nil,
            allow_blank: self.allow_blank,
            if_: self.if_.clone(),
            unless: self.unless.clone(),
        }
    }
}

impl<R> fmt::Debug for ValidationOptions<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationOptions")
            .field("on", &self.on)
            .field("allow_nil", &self.allow_nil)
            .field("allow_blank", &self.allow_blank)
            .field("if", &self.if_.is_some())
            .field("unless", &self.unless.is_some())
            .finish()
    }
}
