//! Shared fixtures for unit tests: a scripted transport and canned payloads.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::transport::{ApiRequest, ApiResponse, Transport};

pub const TEST_BASE_URL: &str = "http://api.test";

/// Transport that records every request and replays queued responses in order.
/// An exhausted queue answers with a network error.
#[derive(Default)]
pub struct FakeTransport {
    requests: RefCell<Vec<ApiRequest>>,
    replies: RefCell<VecDeque<Result<ApiResponse, ApiError>>>,
}

impl FakeTransport {
    pub fn reply(self, status: u16, body: &str) -> Self {
        self.replies
            .borrow_mut()
            .push_back(Ok(ApiResponse { status, body: body.to_owned() }));
        self
    }

    pub fn reply_json(self, status: u16, body: &serde_json::Value) -> Self {
        self.reply(status, &body.to_string())
    }

    pub fn fail(self, message: &str) -> Self {
        self.replies
            .borrow_mut()
            .push_back(Err(ApiError::Network(message.to_owned())));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }
}

impl Transport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted reply".to_owned())))
    }
}

pub fn client(transport: FakeTransport) -> ApiClient<FakeTransport> {
    let config = ClientConfig::from_values(Some(TEST_BASE_URL), None);
    ApiClient::new(&config, transport)
}

pub fn sample_test_json(id: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": "Capital cities",
        "description": "Checks geography recall",
        "user_message": "What is the capital of France?",
        "review_message": "Does the answer say Paris?",
        "num_requests": 1,
        "selected_llms": ["claude-3-haiku-20240307"],
        "results": [
            { "model": "claude-3-haiku-20240307", "review_result": "TRUE", "response": "Paris" }
        ],
        "published": false,
        "created_at": "2024-07-01T12:00:00.123456+00:00",
        "updated_at": "2024-07-01T12:05:00+00:00"
    })
}
