// tests/support/mocks/util.rs
use std::sync::atomic::{AtomicUsize, Ordering};

use slug_validator::{DefaultSlugGenerator, SlugGenerator};

/// Delegates to the real generator and counts invocations.
#[derive(Default)]
pub struct CountingSlug {
    calls: AtomicUsize,
}

impl CountingSlug {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SlugGenerator for CountingSlug {
    fn slugify(&self, input: &str) -> String {
        self.calls.fetch_add(1, Ordering::SeqCst);
        DefaultSlugGenerator.slugify(input)
    }
}
