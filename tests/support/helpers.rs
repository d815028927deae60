// tests/support/helpers.rs
use std::sync::Arc;

use super::mocks::{InMemoryArticleService, RecordingTransport};
use wiki_articles::ArticleServices;
use wiki_articles::application::ports::Transport;
use wiki_articles::domain::article::PageId;

/// Services over a fresh in-memory article service. The service handle is
/// returned too so tests can inspect what it received.
pub fn in_memory_services() -> (ArticleServices, Arc<InMemoryArticleService>) {
    let service = Arc::new(InMemoryArticleService::new());
    let transport: Arc<dyn Transport> = Arc::clone(&service) as Arc<dyn Transport>;
    (ArticleServices::new(transport), service)
}

pub fn recording_services(transport: RecordingTransport) -> (ArticleServices, Arc<RecordingTransport>) {
    let transport = Arc::new(transport);
    let port: Arc<dyn Transport> = Arc::clone(&transport) as Arc<dyn Transport>;
    (ArticleServices::new(port), transport)
}

pub fn page(id: &str) -> PageId {
    PageId::new(id).expect("valid page id in test")
}
