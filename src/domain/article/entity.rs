// src/domain/article/entity.rs
use crate::domain::article::value_objects::PageId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Article as the service exchanges it (`ArticleData` on the wire). The same
/// shape is sent on create and returned by fetch, update and revert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub page_id: PageId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Absent on list views.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<PageId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
}

impl Article {
    pub fn new(page_id: PageId) -> Self {
        Self {
            page_id,
            title: None,
            source: None,
            tags: Vec::new(),
            parent: None,
            locked: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_parent(mut self, parent: PageId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn with_locked(mut self, locked: bool) -> Self {
        self.locked = Some(locked);
        self
    }

    pub fn is_locked(&self) -> bool {
        self.locked.unwrap_or(false)
    }

    /// Tags are a set; the order the server returns them in carries no meaning.
    pub fn same_tags(&self, other: &Self) -> bool {
        let ours: BTreeSet<&str> = self.tags.iter().map(String::as_str).collect();
        let theirs: BTreeSet<&str> = other.tags.iter().map(String::as_str).collect();
        ours == theirs
    }
}

/// Partial update (`ArticleUpdateRequest` on the wire). Unset fields are left
/// out of the body and keep their server-side value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_id: Option<PageId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<PageId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub force_page_id: Option<bool>,
}

impl ArticleUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_parent(mut self, parent: PageId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn with_locked(mut self, locked: bool) -> Self {
        self.locked = Some(locked);
        self
    }

    /// Request identifier migration. Whether the rename is atomic is up to
    /// the server.
    pub fn rename_to(mut self, page_id: PageId) -> Self {
        self.page_id = Some(page_id);
        self.force_page_id = Some(true);
        self
    }

    pub fn is_rename(&self) -> bool {
        self.force_page_id.unwrap_or(false) && self.page_id.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
