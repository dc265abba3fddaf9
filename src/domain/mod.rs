pub mod errors;
pub mod record;
pub mod slug;
pub mod validation;
