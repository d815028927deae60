//! Stateless clients over the article API. Each call is one round trip
//! through the shared [`Transport`](crate::application::ports::Transport);
//! failures are returned exactly as the transport produced them.

mod articles;
mod backlinks;
mod modules;
mod revisions;
mod versions;
mod votes;

pub use articles::ArticleRepositoryClient;
pub use backlinks::BacklinkClient;
pub use modules::{
    InterwikiRender, InterwikiRenderParams, ModuleClient, ModuleContext, ModuleKey, ModuleMethod,
    ModuleRegistry, ModuleRenderResponse,
};
pub use revisions::RevisionLogClient;
pub use versions::VersionSnapshotClient;
pub use votes::VoteClient;

use crate::application::{ClientError, ClientResult};
use crate::domain::article::PageId;
use serde::de::DeserializeOwned;
use serde_json::Value;

const ARTICLES_ROOT: &str = "/api/articles";

fn article_path(id: &PageId) -> String {
    format!("{ARTICLES_ROOT}/{id}")
}

fn article_subpath(id: &PageId, resource: &str) -> String {
    format!("{ARTICLES_ROOT}/{id}/{resource}")
}

fn decode_body<T: DeserializeOwned>(body: Option<Value>) -> ClientResult<T> {
    let body = body.ok_or_else(|| ClientError::decode("expected a JSON body, got none"))?;
    Ok(serde_json::from_value(body)?)
}
