//! [`Transport`] over HTTP using [`reqwest`].

use crate::application::{
    ClientError, ClientResult,
    ports::{ApiRequest, Method, Transport},
};
use crate::config::ClientConfig;
use async_trait::async_trait;
use serde_json::Value;

/// HTTP transport bound to one service base URL.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestTransport {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent())
            .build()
            .map_err(|err| ClientError::transport(err.to_string()))?;
        Ok(Self::with_client(client, config.base_url()))
    }

    /// Reuse an existing [`reqwest::Client`] and its connection pool.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build(&self, request: &ApiRequest) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, request.path);
        let builder = match request.method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
            Method::Put => self.client.put(url),
            Method::Delete => self.client.delete(url),
        };
        let builder = if request.query.is_empty() {
            builder
        } else {
            builder.query(&request.query)
        };
        match &request.body {
            Some(body) => builder.json(body),
            None => builder,
        }
    }

    async fn read_body(response: reqwest::Response) -> ClientResult<Option<Value>> {
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|err| ClientError::transport(err.to_string()))?;

        if !status.is_success() {
            let message = String::from_utf8_lossy(&bytes).into_owned();
            return Err(ClientError::from_status(status.as_u16(), message));
        }

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        let value = serde_json::from_slice(&bytes)?;
        Ok(Some(value))
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> ClientResult<Option<Value>> {
        tracing::debug!(method = %request.method, uri = %request.uri(), "sending request");

        let response = self
            .build(&request)
            .send()
            .await
            .map_err(|err| ClientError::transport(err.to_string()))?;

        let status = response.status();
        let result = Self::read_body(response).await;
        if let Err(err) = &result {
            tracing::warn!(
                method = %request.method,
                uri = %request.uri(),
                status = status.as_u16(),
                error = %err,
                "request failed"
            );
        }
        result
    }
}
