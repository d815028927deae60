use std::sync::Arc;

use super::{ARTICLES_ROOT, article_path, decode_body};
use crate::application::{
    ClientResult,
    ports::{ApiRequest, Transport},
};
use crate::domain::article::{Article, ArticleUpdate, PageId};

pub struct ArticleRepositoryClient {
    transport: Arc<dyn Transport>,
}

impl ArticleRepositoryClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Create an article. A colliding `pageId` or invalid data is rejected by
    /// the server and surfaces as the transport's error.
    pub async fn create(&self, article: &Article) -> ClientResult<()> {
        let request = ApiRequest::post(format!("{ARTICLES_ROOT}/new")).with_json(article)?;
        self.transport.send(request).await?;
        Ok(())
    }

    pub async fn fetch(&self, id: &PageId) -> ClientResult<Article> {
        let body = self.transport.send(ApiRequest::get(article_path(id))).await?;
        decode_body(body)
    }

    /// Returns the article as the server resolved it, which may differ from
    /// the request (normalized tags, a migrated `pageId`).
    pub async fn update(&self, id: &PageId, update: &ArticleUpdate) -> ClientResult<Article> {
        if update.is_rename() {
            tracing::debug!(page_id = %id, to = ?update.page_id, "renaming article");
        }
        let request = ApiRequest::put(article_path(id)).with_json(update)?;
        let body = self.transport.send(request).await?;
        decode_body(body)
    }

    /// A repeated delete fails with not-found; callers that want idempotency
    /// check [`ClientError::is_not_found`](crate::ClientError::is_not_found).
    pub async fn delete(&self, id: &PageId) -> ClientResult<()> {
        self.transport
            .send(ApiRequest::delete(article_path(id)))
            .await?;
        Ok(())
    }
}
