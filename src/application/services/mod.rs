// src/application/services/mod.rs
use std::sync::Arc;

use crate::application::{
    clients::{
        ArticleRepositoryClient, BacklinkClient, ModuleClient, ModuleRegistry, RevisionLogClient,
        VersionSnapshotClient, VoteClient,
    },
    ports::Transport,
};

/// Every client, wired to one shared transport.
pub struct ArticleServices {
    pub articles: Arc<ArticleRepositoryClient>,
    pub revisions: Arc<RevisionLogClient>,
    pub versions: Arc<VersionSnapshotClient>,
    pub backlinks: Arc<BacklinkClient>,
    pub votes: Arc<VoteClient>,
    pub modules: Arc<ModuleClient>,
}

impl ArticleServices {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self::with_registry(transport, ModuleRegistry::builtin())
    }

    pub fn with_registry(transport: Arc<dyn Transport>, registry: ModuleRegistry) -> Self {
        Self {
            articles: Arc::new(ArticleRepositoryClient::new(Arc::clone(&transport))),
            revisions: Arc::new(RevisionLogClient::new(Arc::clone(&transport))),
            versions: Arc::new(VersionSnapshotClient::new(Arc::clone(&transport))),
            backlinks: Arc::new(BacklinkClient::new(Arc::clone(&transport))),
            votes: Arc::new(VoteClient::new(Arc::clone(&transport))),
            modules: Arc::new(ModuleClient::new(transport, registry)),
        }
    }
}
