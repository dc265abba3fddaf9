use crate::domain::errors::DomainResult;
use crate::domain::record::value_objects::{Identifier, RecordId};
use async_trait::async_trait;

/// "First row in `table` whose `column` equals `value`, other than `exclude`."
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniquenessQuery {
    pub table: Identifier,
    pub column: Identifier,
    pub value: String,
    pub primary_key: Identifier,
    pub exclude: Option<RecordId>,
}

impl UniquenessQuery {
    pub fn new(
        table: Identifier,
        column: Identifier,
        value: impl Into<String>,
        primary_key: Identifier,
    ) -> Self {
        Self {
            table,
            column,
            value: value.into(),
            primary_key,
            exclude: None,
        }
    }

    pub fn excluding(mut self, id: Option<RecordId>) -> Self {
        self.exclude = id;
        self
    }
}

#[async_trait]
pub trait SlugLookup: Send + Sync {
    /// Whether any row matches. Only presence counts; the matching row's key
    /// is never decoded.
    async fn exists(&self, query: &UniquenessQuery) -> DomainResult<bool>;
}
