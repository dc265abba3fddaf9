// tests/support/mocks/lookup.rs
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use slug_validator::{DomainError, DomainResult, RecordId, SlugLookup, UniquenessQuery};

use super::super::builders::Post;

#[derive(Debug, Clone)]
struct Row {
    table: String,
    id: i64,
    columns: HashMap<String, String>,
}

/// In-memory table store answering uniqueness queries.
#[derive(Default)]
pub struct InMemoryLookup {
    rows: Mutex<Vec<Row>>,
    queries: Mutex<Vec<UniquenessQuery>>,
}

impl InMemoryLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, table: &str, id: i64, columns: &[(&str, &str)]) {
        let columns = columns
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        self.rows.lock().unwrap().push(Row {
            table: table.to_string(),
            id,
            columns,
        });
    }

    /// Stores `post` under `id`, mirroring what a save would do.
    pub fn save_post(&self, post: &mut Post, id: i64) {
        post.id = Some(RecordId::new(id).unwrap());
        let mut columns = Vec::new();
        if let Some(slug) = post.slug.as_deref() {
            columns.push(("slug", slug));
        }
        if let Some(title_slug) = post.title_slug.as_deref() {
            columns.push(("title_slug", title_slug));
        }
        self.insert("posts", id, &columns);
    }

    pub fn query_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }

    pub fn last_query(&self) -> Option<UniquenessQuery> {
        self.queries.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl SlugLookup for InMemoryLookup {
    async fn exists(&self, query: &UniquenessQuery) -> DomainResult<bool> {
        self.queries.lock().unwrap().push(query.clone());
        let rows = self.rows.lock().unwrap();
        let found = rows.iter().any(|row| {
            row.table == query.table.as_str()
                && row.columns.get(query.column.as_str()) == Some(&query.value)
                && query.exclude.is_none_or(|id| i64::from(id) != row.id)
        });
        Ok(found)
    }
}

/// Lookup whose backing store is unreachable.
#[derive(Default)]
pub struct FailingLookup {
    calls: AtomicUsize,
}

impl FailingLookup {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SlugLookup for FailingLookup {
    async fn exists(&self, _query: &UniquenessQuery) -> DomainResult<bool> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(DomainError::Persistence("connection refused".into()))
    }
}
