use crate::domain::errors::DomainResult;
use crate::domain::record::{Field, FieldValue, Model, resolve_field};
use crate::domain::validation::options::{ValidationContext, ValidationOptions};
use async_trait::async_trait;
use std::sync::Arc;

/// A per-value check, invoked with the record, the attribute name and the
/// attribute's current value.
#[async_trait]
pub trait EachValidator<R: Model>: Send + Sync {
    async fn validate_each(
        &self,
        record: &mut R,
        attribute: &str,
        value: FieldValue,
    ) -> DomainResult<()>;
}

/// Adapter for synchronous closures.
pub struct FnValidator<F>(pub F);

#[async_trait]
impl<R, F> EachValidator<R> for FnValidator<F>
where
    R: Model,
    F: Fn(&mut R, &str, &FieldValue) + Send + Sync,
{
    async fn validate_each(
        &self,
        record: &mut R,
        attribute: &str,
        value: FieldValue,
    ) -> DomainResult<()> {
        (self.0)(record, attribute, &value);
        Ok(())
    }
}

struct Rule<R: Model> {
    attribute: Field<R>,
    options: ValidationOptions<R>,
    validator: Arc<dyn EachValidator<R>>,
}

/// Ordered set of rules registered for a record type.
pub struct Validations<R: Model> {
    rules: Vec<Rule<R>>,
}

impl<R: Model> Validations<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `validator` for `attribute`. Fails if the model has no such
    /// field.
    pub fn validates_each(
        &mut self,
        attribute: &str,
        options: ValidationOptions<R>,
        validator: Arc<dyn EachValidator<R>>,
    ) -> DomainResult<&mut Self> {
        let attribute = resolve_field::<R>(attribute)?;
        self.rules.push(Rule {
            attribute,
            options,
            validator,
        });
        Ok(self)
    }

    pub fn validates_each_with<F>(
        &mut self,
        attribute: &str,
        options: ValidationOptions<R>,
        check: F,
    ) -> DomainResult<&mut Self>
    where
        F: Fn(&mut R, &str, &FieldValue) + Send + Sync + 'static,
    {
        self.validates_each(attribute, options, Arc::new(FnValidator(check)))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Runs every rule in the context implied by the record's persistence
    /// state. See [`Validations::validate_on`].
    pub async fn validate(&self, record: &mut R) -> DomainResult<bool> {
        let context = ValidationContext::for_record(record);
        self.validate_on(record, context).await
    }

    /// Clears the record's errors, then runs the applicable rules in
    /// registration order. `Ok(true)` means the record is valid; `Err` means a
    /// rule could not complete (e.g. its lookup failed).
    pub async fn validate_on(
        &self,
        record: &mut R,
        context: ValidationContext,
    ) -> DomainResult<bool> {
        record.errors_mut().clear();

        for rule in &self.rules {
            let name = rule.attribute.name();
            let value = rule.attribute.read(record);
            if !rule.options.applies(record, context, &value) {
                tracing::trace!(table = R::table_name(), attribute = name, ?context, "rule skipped");
                continue;
            }
            rule.validator.validate_each(record, name, value).await?;
        }

        Ok(record.errors().is_empty())
    }
}

impl<R: Model> Default for Validations<R> {
    fn default() -> Self {
        Self { rules: Vec::new() }
    }
}
