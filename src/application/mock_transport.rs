// In-memory transport for route tests
use crate::application::transport::{ApiRequest, Transport};
use crate::domain::error::RouteResult;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Mutex;

/// Replies with a fixed outcome and records every request it sees
pub(crate) struct MockTransport {
    reply: RouteResult<Value>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub(crate) fn replying(reply: RouteResult<Value>) -> Self {
        Self {
            reply,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn perform(&self, request: ApiRequest) -> RouteResult<Value> {
        self.requests.lock().unwrap().push(request);
        self.reply.clone()
    }
}
