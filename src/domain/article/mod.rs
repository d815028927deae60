pub mod backlinks;
pub mod entity;
pub mod revision;
pub mod value_objects;
pub mod version;
pub mod votes;

pub use backlinks::{ArticleBacklinks, Backlink};
pub use entity::{Article, ArticleUpdate};
pub use revision::{
    DEFAULT_LOG_PAGE_SIZE, LogWindow, RevisionLog, RevisionLogEntry, RevisionType,
};
pub use value_objects::{PageId, RevNumber};
pub use version::{PathParams, VersionSnapshot};
pub use votes::VoteAggregate;
