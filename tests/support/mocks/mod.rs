// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod lookup;
pub mod util;

pub use lookup::{FailingLookup, InMemoryLookup};
pub use util::CountingSlug;
