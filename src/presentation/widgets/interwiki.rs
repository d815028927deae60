use std::collections::HashSet;
use std::sync::Arc;

use crate::application::{
    ClientResult,
    clients::{InterwikiRender, InterwikiRenderParams, ModuleClient, ModuleContext},
};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Inline configuration blob carried by an interwiki node.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct InterwikiConfiguration {
    #[serde(default)]
    pub params: Map<String, Value>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub loading: String,
}

impl InterwikiConfiguration {
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    fn into_render_params(self) -> (String, InterwikiRenderParams) {
        let mut params = self.params;
        params.remove("content");
        (
            self.loading,
            InterwikiRenderParams {
                params,
                content: self.content,
            },
        )
    }
}

/// What the loader needs from a mount point.
pub trait WidgetNode {
    fn id(&self) -> &str;
    fn configuration(&self) -> Option<&str>;
    fn set_content(&mut self, html: String);
}

/// Node ids that have already been mounted. Owned by the caller so the same
/// loader can serve several pages.
#[derive(Debug, Default)]
pub struct InitializedWidgets {
    ids: HashSet<String>,
}

impl InitializedWidgets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Returns false when `id` was already marked.
    pub fn mark(&mut self, id: &str) -> bool {
        self.ids.insert(id.to_owned())
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

pub struct InterwikiLoader {
    modules: Arc<ModuleClient>,
    context: ModuleContext,
}

impl InterwikiLoader {
    pub fn new(modules: Arc<ModuleClient>) -> Self {
        Self {
            modules,
            context: ModuleContext::default(),
        }
    }

    pub fn with_context(mut self, context: ModuleContext) -> Self {
        self.context = context;
        self
    }

    /// Mount one node. Returns `Ok(true)` when the node was rendered and
    /// `Ok(false)` when it was skipped, either because it was mounted before
    /// or because its configuration is missing or malformed. A bad blob is
    /// cosmetic and never an error; module failures are.
    pub async fn mount<N: WidgetNode + Send>(
        &self,
        initialized: &mut InitializedWidgets,
        node: &mut N,
    ) -> ClientResult<bool> {
        if !initialized.mark(node.id()) {
            return Ok(false);
        }

        let configuration = match node.configuration().map(InterwikiConfiguration::parse) {
            Some(Ok(configuration)) => configuration,
            Some(Err(err)) => {
                tracing::debug!(node = node.id(), error = %err, "ignoring malformed interwiki configuration");
                return Ok(false);
            }
            None => {
                tracing::debug!(node = node.id(), "interwiki node has no configuration");
                return Ok(false);
            }
        };

        let (loading, params) = configuration.into_render_params();
        node.set_content(loading);

        let response = self
            .modules
            .call::<InterwikiRender>(&self.context, &params)
            .await?;
        node.set_content(response.result);
        Ok(true)
    }
}
