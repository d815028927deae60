use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use super::decode_body;
use crate::application::{
    ClientError, ClientResult,
    ports::{ApiRequest, Transport},
};
use crate::domain::article::{PageId, PathParams};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

const MODULES_ENDPOINT: &str = "/api/modules";

/// Typed contract for one server-side module method.
pub trait ModuleMethod {
    const MODULE: &'static str;
    const METHOD: &'static str;
    type Params: Serialize + Send + Sync;
    type Response: DeserializeOwned;

    fn key() -> ModuleKey {
        ModuleKey::new(Self::MODULE, Self::METHOD)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleKey {
    pub module: String,
    pub method: String,
}

impl ModuleKey {
    pub fn new(module: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            method: method.into(),
        }
    }
}

impl fmt::Display for ModuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.module, self.method)
    }
}

/// The module methods a [`ModuleClient`] is allowed to invoke.
#[derive(Debug, Clone, Default)]
pub struct ModuleRegistry {
    methods: BTreeSet<ModuleKey>,
}

impl ModuleRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registry with every contract shipped in this crate.
    pub fn builtin() -> Self {
        Self::empty().with::<InterwikiRender>()
    }

    pub fn with<M: ModuleMethod>(mut self) -> Self {
        self.register::<M>();
        self
    }

    pub fn register<M: ModuleMethod>(&mut self) {
        self.methods.insert(M::key());
    }

    pub fn contains(&self, key: &ModuleKey) -> bool {
        self.methods.contains(key)
    }
}

/// Page and routing context a module call runs under.
#[derive(Debug, Clone, Default)]
pub struct ModuleContext {
    pub page_id: Option<PageId>,
    pub path_params: Option<PathParams>,
}

impl ModuleContext {
    pub fn for_page(page_id: PageId) -> Self {
        Self {
            page_id: Some(page_id),
            path_params: None,
        }
    }

    pub fn with_path_params(mut self, params: PathParams) -> Self {
        self.path_params = Some(params);
        self
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ModuleRequest<'a, P: Serialize> {
    module: &'a str,
    method: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    page_id: Option<&'a PageId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path_params: Option<&'a PathParams>,
    params: &'a P,
}

pub struct ModuleClient {
    transport: Arc<dyn Transport>,
    registry: ModuleRegistry,
}

impl ModuleClient {
    pub fn new(transport: Arc<dyn Transport>, registry: ModuleRegistry) -> Self {
        Self {
            transport,
            registry,
        }
    }

    pub const fn registry(&self) -> &ModuleRegistry {
        &self.registry
    }

    pub async fn call<M: ModuleMethod>(
        &self,
        context: &ModuleContext,
        params: &M::Params,
    ) -> ClientResult<M::Response> {
        let key = M::key();
        if !self.registry.contains(&key) {
            return Err(ClientError::validation(format!(
                "module method {key} is not registered"
            )));
        }

        let payload = ModuleRequest {
            module: M::MODULE,
            method: M::METHOD,
            page_id: context.page_id.as_ref(),
            path_params: context.path_params.as_ref(),
            params,
        };
        tracing::debug!(module = %key, "calling module");
        let request = ApiRequest::post(MODULES_ENDPOINT).with_json(&payload)?;
        let body = self.transport.send(request).await?;
        decode_body(body)
    }
}

/// HTML fragment produced by a rendering module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRenderResponse {
    pub result: String,
}

/// Render the same content for every configured language of a page.
pub struct InterwikiRender;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InterwikiRenderParams {
    #[serde(flatten)]
    pub params: Map<String, Value>,
    pub content: String,
}

impl ModuleMethod for InterwikiRender {
    const MODULE: &'static str = "interwiki";
    const METHOD: &'static str = "render_for_languages";
    type Params = InterwikiRenderParams;
    type Response = ModuleRenderResponse;
}
