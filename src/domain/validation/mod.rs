pub mod options;
pub mod pipeline;

pub use options::{Condition, ValidationContext, ValidationOptions};
pub use pipeline::{EachValidator, FnValidator, Validations};
