use crate::domain::model::{ApiRequest, ApiResponse};
use crate::domain::ports::Transport;
use crate::utils::error::{Result, ZuriPayError};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// In-memory transport that records requests and replays a fixed reply.
#[derive(Clone)]
pub(crate) struct RecordingTransport {
    requests: Arc<Mutex<Vec<ApiRequest>>>,
    reply: Arc<dyn Fn() -> Result<ApiResponse> + Send + Sync>,
}

impl RecordingTransport {
    pub(crate) fn replying(body: Value) -> Self {
        let body = body.as_object().cloned().unwrap_or_default();
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            reply: Arc::new(move || Ok(body.clone())),
        }
    }

    pub(crate) fn failing(status_code: u16, message: &str) -> Self {
        let message = message.to_string();
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            reply: Arc::new(move || {
                Err(ZuriPayError::ProviderError {
                    message: message.clone(),
                    status_code,
                    result: "error".to_string(),
                })
            }),
        }
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn last_request(&self) -> ApiRequest {
        self.requests().pop().expect("no request was sent")
    }

    pub(crate) fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        self.requests.lock().unwrap().push(request);
        (self.reply)()
    }
}
