// src/domain/slug/services.rs
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::DomainResult;
use crate::domain::record::{
    Field, FieldValue, Identifier, Model, SlugLookup, UniquenessQuery, resolve_field,
    resolve_writable_field,
};
use crate::domain::slug::options::{SlugFn, SlugOptions};
use crate::domain::validation::{EachValidator, ValidationOptions, Validations};

/// Domain service that attaches slug rules to record types.
///
/// Holds the collaborators every rule shares: the uniqueness lookup and the
/// default slug generator.
#[derive(Clone)]
pub struct SlugValidation {
    lookup: Arc<dyn SlugLookup>,
    generator: Arc<dyn SlugGenerator>,
}

impl SlugValidation {
    pub fn new(lookup: Arc<dyn SlugLookup>, generator: Arc<dyn SlugGenerator>) -> Self {
        Self { lookup, generator }
    }

    /// Registers a rule that slugizes `attribute` into `options.to` and checks
    /// the result is unique among rows of `R`'s table.
    ///
    /// Field and identifier names are checked here, so a misconfigured rule
    /// fails at registration instead of at validation time.
    pub fn register<R: Model>(
        &self,
        validations: &mut Validations<R>,
        attribute: &str,
        options: SlugOptions<R>,
        slug_fn: Option<SlugFn<R>>,
    ) -> DomainResult<()> {
        let validator = self.validator(attribute, options, slug_fn)?;
        let pipeline = validator.pipeline.clone();
        validations.validates_each(attribute, pipeline, Arc::new(validator))?;
        Ok(())
    }

    /// Builds the per-value validator without attaching it to a pipeline.
    pub fn validator<R: Model>(
        &self,
        attribute: &str,
        options: SlugOptions<R>,
        slug_fn: Option<SlugFn<R>>,
    ) -> DomainResult<SlugValidator<R>> {
        resolve_field::<R>(attribute)?;
        let (to, message, pipeline) = options.into_parts();
        let target = resolve_writable_field::<R>(&to)?;

        Ok(SlugValidator {
            target,
            column: Identifier::new(to)?,
            table: Identifier::new(R::table_name())?,
            primary_key: Identifier::new(R::primary_key())?,
            message,
            pipeline,
            slug_fn,
            lookup: Arc::clone(&self.lookup),
            generator: Arc::clone(&self.generator),
        })
    }
}

/// One registered slug rule.
pub struct SlugValidator<R: Model> {
    target: Field<R>,
    column: Identifier,
    table: Identifier,
    primary_key: Identifier,
    message: String,
    pipeline: ValidationOptions<R>,
    slug_fn: Option<SlugFn<R>>,
    lookup: Arc<dyn SlugLookup>,
    generator: Arc<dyn SlugGenerator>,
}

impl<R: Model> SlugValidator<R> {
    /// Custom function first; the generator only runs without one.
    pub fn derive_slug(&self, record: &R, value: &FieldValue) -> String {
        match &self.slug_fn {
            Some(slug_fn) => slug_fn(record, value),
            None => self.generator.slugify(&value.to_string()),
        }
    }

    pub fn target(&self) -> &str {
        self.target.name()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[async_trait]
impl<R: Model> EachValidator<R> for SlugValidator<R> {
    async fn validate_each(
        &self,
        record: &mut R,
        attribute: &str,
        value: FieldValue,
    ) -> DomainResult<()> {
        let slug = self.derive_slug(record, &value);
        self.target.write(record, slug.clone());
        tracing::debug!(table = %self.table, column = %self.column, slug = %slug, "slug assigned");

        let query = UniquenessQuery::new(
            self.table.clone(),
            self.column.clone(),
            slug,
            self.primary_key.clone(),
        )
        .excluding(record.id());

        if self.lookup.exists(&query).await? {
            tracing::debug!(
                table = %self.table,
                attribute,
                slug = %query.value,
                "slug already taken"
            );
            record.errors_mut().add(attribute, self.message.as_str());
        }

        Ok(())
    }
}
