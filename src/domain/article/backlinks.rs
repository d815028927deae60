use serde::{Deserialize, Serialize};

/// A reference to another article. `exists == false` is a red link to a page
/// nobody has created yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Backlink {
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub exists: bool,
}

/// Structural relationships of one article. The three kinds are independent:
/// an entry in `children` says nothing about `includes` or `links`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleBacklinks {
    /// Articles declaring this one as their parent.
    #[serde(default)]
    pub children: Vec<Backlink>,
    /// Transclusion relationships.
    #[serde(default)]
    pub includes: Vec<Backlink>,
    /// Free-text references.
    #[serde(default)]
    pub links: Vec<Backlink>,
}

impl ArticleBacklinks {
    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && self.includes.is_empty() && self.links.is_empty()
    }

    pub fn total(&self) -> usize {
        self.children.len() + self.includes.len() + self.links.len()
    }

    pub fn all(&self) -> impl Iterator<Item = &Backlink> {
        self.children
            .iter()
            .chain(self.includes.iter())
            .chain(self.links.iter())
    }

    pub fn missing(&self) -> impl Iterator<Item = &Backlink> {
        self.all().filter(|link| !link.exists)
    }
}
