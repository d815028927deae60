use std::collections::BTreeMap;
use std::sync::Arc;

use super::{article_subpath, decode_body};
use crate::application::{
    ClientResult,
    ports::{ApiRequest, Transport},
};
use crate::domain::article::{Article, LogWindow, PageId, RevNumber, RevisionLog};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RevertRequest {
    rev_number: RevNumber,
}

pub struct RevisionLogClient {
    transport: Arc<dyn Transport>,
}

impl RevisionLogClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Read the window `[from, to)` of the history. Entries keep the order the
    /// server sent them in.
    pub async fn fetch_log(&self, id: &PageId, window: LogWindow) -> ClientResult<RevisionLog> {
        let request = ApiRequest::get(article_subpath(id, "log"))
            .with_query("from", window.start())
            .with_query("to", window.end());
        let body = self.transport.send(request).await?;
        decode_body(body)
    }

    /// Page through the whole history with default-sized windows. Each
    /// window starts right after the entries actually received.
    ///
    /// Offsets can shift between calls when someone edits concurrently, so
    /// entries are keyed by revision number and come back ascending. `count`
    /// is the last total the server reported.
    pub async fn fetch_full_log(&self, id: &PageId) -> ClientResult<RevisionLog> {
        let mut collected = BTreeMap::new();
        let mut window = LogWindow::default();
        let mut count;

        loop {
            let page = self.fetch_log(id, window).await?;
            count = page.count;
            let received = page.entries.len();
            for entry in page.entries {
                collected.insert(entry.rev_number, entry);
            }

            tracing::debug!(
                page_id = %id,
                from = window.start(),
                received,
                count,
                "fetched revision log window"
            );

            window = window.advanced_by(u64::try_from(received).unwrap_or(u64::MAX));
            if received == 0 || window.start() >= count {
                break;
            }
        }

        Ok(RevisionLog {
            count,
            entries: collected.into_values().collect(),
        })
    }

    /// Make the content of `rev_number` current again. The server appends a
    /// new revision; nothing in the history is rewritten.
    pub async fn revert(&self, id: &PageId, rev_number: RevNumber) -> ClientResult<Article> {
        tracing::debug!(page_id = %id, rev = %rev_number, "reverting article");
        let request =
            ApiRequest::put(article_subpath(id, "log")).with_json(&RevertRequest { rev_number })?;
        let body = self.transport.send(request).await?;
        decode_body(body)
    }
}
