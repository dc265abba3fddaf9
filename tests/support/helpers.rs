// tests/support/helpers.rs
use std::sync::Arc;

use once_cell::sync::Lazy;
use slug_validator::{SlugGenerator, SlugLookup, SlugValidation, telemetry};

use super::mocks::CountingSlug;

static TRACING: Lazy<()> = Lazy::new(|| telemetry::init_tracing("warn,slug_validator=debug"));

pub fn init_tracing() {
    Lazy::force(&TRACING);
}

/// Service wired to `lookup` and a counting default generator.
pub fn slug_validation(lookup: Arc<dyn SlugLookup>) -> (SlugValidation, Arc<CountingSlug>) {
    init_tracing();
    let generator = Arc::new(CountingSlug::default());
    let shared: Arc<dyn SlugGenerator> = generator.clone();
    let service = SlugValidation::new(lookup, shared);
    (service, generator)
}
