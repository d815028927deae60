// tests/support/builders.rs
use serde_json::{Value, json};
use wiki_articles::domain::article::Article;

use super::helpers::page;
use super::mocks::revision_time;

pub struct ArticleBuilder {
    page_id: String,
    title: Option<String>,
    source: Option<String>,
    tags: Vec<String>,
    parent: Option<String>,
}

impl ArticleBuilder {
    pub fn new(page_id: &str) -> Self {
        Self {
            page_id: page_id.into(),
            title: None,
            source: None,
            tags: Vec::new(),
            parent: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn parent(mut self, parent: &str) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn build(self) -> Article {
        let mut article = Article::new(page(&self.page_id)).with_tags(self.tags);
        article.title = self.title;
        article.source = self.source;
        article.parent = self.parent.as_deref().map(page);
        article
    }
}

/// Wire form of one log entry, for scripted transports.
pub fn log_entry_json(rev: u64, kind: &str) -> Value {
    json!({
        "revNumber": rev,
        "user": {"type": "normal", "username": "editor", "id": 1},
        "comment": "",
        "createdAt": revision_time(rev),
        "type": kind,
        "meta": {}
    })
}

pub fn log_page_json(count: u64, revs: std::ops::Range<u64>) -> Value {
    let entries: Vec<Value> = revs.map(|rev| log_entry_json(rev, "source")).collect();
    json!({"count": count, "entries": entries})
}
