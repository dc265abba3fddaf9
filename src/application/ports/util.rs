// src/application/ports/util.rs

/// Default slugization used when a rule has no custom slug function.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
