use std::sync::Arc;

use super::{article_subpath, decode_body};
use crate::application::{
    ClientResult,
    ports::{ApiRequest, Transport},
};
use crate::domain::article::{PageId, VoteAggregate};

pub struct VoteClient {
    transport: Arc<dyn Transport>,
}

impl VoteClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub async fn fetch_votes(&self, id: &PageId) -> ClientResult<VoteAggregate> {
        let body = self
            .transport
            .send(ApiRequest::get(article_subpath(id, "votes")))
            .await?;
        decode_body(body)
    }

    /// Clears the aggregate; the server answers with what remains of it.
    pub async fn delete_votes(&self, id: &PageId) -> ClientResult<VoteAggregate> {
        let body = self
            .transport
            .send(ApiRequest::delete(article_subpath(id, "votes")))
            .await?;
        decode_body(body)
    }
}
