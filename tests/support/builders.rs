// tests/support/builders.rs
use slug_validator::{Errors, Field, FieldValue, Model, RecordId};

#[derive(Debug, Default, Clone)]
pub struct Post {
    pub id: Option<RecordId>,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub title_slug: Option<String>,
    pub views: i64,
    pub published: bool,
    pub errors: Errors,
}

impl Model for Post {
    fn table_name() -> &'static str {
        "posts"
    }

    fn fields() -> Vec<Field<Self>> {
        vec![
            Field::read_only("title", |p: &Self| FieldValue::from(p.title.clone())),
            Field::read_only("views", |p: &Self| FieldValue::Integer(p.views)),
            Field::writable(
                "slug",
                |p: &Self| FieldValue::from(p.slug.clone()),
                |p: &mut Self, v| p.slug = Some(v),
            ),
            Field::writable(
                "title_slug",
                |p: &Self| FieldValue::from(p.title_slug.clone()),
                |p: &mut Self, v| p.title_slug = Some(v),
            ),
        ]
    }

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn errors(&self) -> &Errors {
        &self.errors
    }

    fn errors_mut(&mut self) -> &mut Errors {
        &mut self.errors
    }
}

pub struct PostBuilder {
    id: Option<i64>,
    title: Option<String>,
    slug: Option<String>,
    views: i64,
    published: bool,
}

impl PostBuilder {
    pub fn new() -> Self {
        Self {
            id: None,
            title: Some("Hello World".into()),
            slug: None,
            views: 0,
            published: false,
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn without_title(mut self) -> Self {
        self.title = None;
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn views(mut self, views: i64) -> Self {
        self.views = views;
        self
    }

    pub fn published(mut self) -> Self {
        self.published = true;
        self
    }

    pub fn build(self) -> Post {
        Post {
            id: self.id.map(|id| RecordId::new(id).expect("positive id")),
            title: self.title,
            slug: self.slug,
            title_slug: None,
            views: self.views,
            published: self.published,
            errors: Errors::new(),
        }
    }
}
