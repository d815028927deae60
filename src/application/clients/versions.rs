use std::sync::Arc;

use super::{article_subpath, decode_body};
use crate::application::{
    ClientResult,
    ports::{ApiRequest, Transport},
};
use crate::domain::article::{PageId, PathParams, RevNumber, VersionSnapshot};

pub struct VersionSnapshotClient {
    transport: Arc<dyn Transport>,
}

impl VersionSnapshotClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Fetch source and rendered output of one revision. `path_params` is sent
    /// as a single JSON text parameter; `None` leaves it out and the server
    /// renders in its default context.
    pub async fn fetch_version(
        &self,
        id: &PageId,
        rev_number: RevNumber,
        path_params: Option<&PathParams>,
    ) -> ClientResult<VersionSnapshot> {
        let mut request =
            ApiRequest::get(article_subpath(id, "version")).with_query("revNum", rev_number);
        if let Some(params) = path_params {
            request = request.with_query("pathParams", params.to_query_value());
        }
        let body = self.transport.send(request).await?;
        decode_body(body)
    }
}
