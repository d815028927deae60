// tests/support/mocks/recording.rs
use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;
use wiki_articles::application::ports::{ApiRequest, Transport};
use wiki_articles::{ClientError, ClientResult};

/// Transport that replays scripted responses in order and records every
/// request it receives.
#[derive(Default)]
pub struct RecordingTransport {
    responses: Mutex<VecDeque<ClientResult<Option<Value>>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond_json(self, body: Value) -> Self {
        self.respond(Ok(Some(body)))
    }

    pub fn respond_empty(self) -> Self {
        self.respond(Ok(None))
    }

    pub fn respond_error(self, err: ClientError) -> Self {
        self.respond(Err(err))
    }

    fn respond(self, response: ClientResult<Option<Value>>) -> Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> ApiRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> ClientResult<Option<Value>> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::transport("no scripted response left")))
    }
}
