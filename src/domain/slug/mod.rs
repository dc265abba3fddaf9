pub mod options;
pub mod services;

pub use options::{DEFAULT_MESSAGE, DEFAULT_TARGET, SlugFn, SlugOptions, slug_fn};
pub use services::{SlugValidation, SlugValidator};
