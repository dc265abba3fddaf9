use crate::domain::errors::DomainResult;
use crate::domain::record::{SlugLookup, UniquenessQuery};
use crate::infrastructure::repositories::error::map_sqlx;
use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;

#[derive(Clone)]
pub struct SqliteSlugLookup {
    pool: Arc<SqlitePool>,
}

impl SqliteSlugLookup {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    fn build_query(query: &UniquenessQuery) -> QueryBuilder<'_, Sqlite> {
        let pk = query.primary_key.quoted();
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(format!(
            "SELECT 1 FROM {} WHERE {} = ",
            query.table.quoted(),
            query.column.quoted()
        ));
        builder.push_bind(query.value.as_str());

        if let Some(id) = query.exclude {
            builder.push(format!(" AND {pk} <> "));
            builder.push_bind(i64::from(id));
        }

        builder.push(" LIMIT 1");
        builder
    }
}

#[async_trait]
impl SlugLookup for SqliteSlugLookup {
    async fn exists(&self, query: &UniquenessQuery) -> DomainResult<bool> {
        let mut builder = Self::build_query(query);
        tracing::trace!(sql = builder.sql(), "slug uniqueness lookup");

        let row = builder
            .build_query_scalar::<i32>()
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(row.is_some())
    }
}
