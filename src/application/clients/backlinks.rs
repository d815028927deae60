use std::sync::Arc;

use super::{article_subpath, decode_body};
use crate::application::{
    ClientResult,
    ports::{ApiRequest, Transport},
};
use crate::domain::article::{ArticleBacklinks, PageId};

pub struct BacklinkClient {
    transport: Arc<dyn Transport>,
}

impl BacklinkClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub async fn fetch_backlinks(&self, id: &PageId) -> ClientResult<ArticleBacklinks> {
        let body = self
            .transport
            .send(ApiRequest::get(article_subpath(id, "links")))
            .await?;
        decode_body(body)
    }
}
