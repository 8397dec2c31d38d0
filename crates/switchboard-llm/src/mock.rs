//! Mock completion provider for deterministic testing.
//!
//! Returns pre-configured responses without making any HTTP calls.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

use crate::provider::*;
use switchboard_core::{Result, SwitchboardError};

/// A mock provider that returns queued responses in order.
///
/// # Example
/// ```
/// use switchboard_llm::mock::MockProvider;
/// let provider = MockProvider::new("test")
///     .with_response("Hello, world!");
/// ```
pub struct MockProvider {
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    /// Every request received, for assertions in tests.
    requests: Arc<Mutex<Vec<CompletionRequest>>>,
    name: String,
}

/// A pre-configured response from the mock provider.
#[derive(Debug, Clone, Default)]
pub struct MockResponse {
    pub text: String,
    /// If set, the provider returns this error instead.
    pub error: Option<String>,
}

impl MockResponse {
    pub fn text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            error: None,
        }
    }

    pub fn error(msg: &str) -> Self {
        Self {
            text: String::new(),
            error: Some(msg.to_string()),
        }
    }
}

impl MockProvider {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(vec![])),
            name: name.into(),
        }
    }

    /// Queue a text response.
    pub fn with_response(self, text: &str) -> Self {
        self.responses.lock().push_back(MockResponse::text(text));
        self
    }

    /// Queue an error response.
    pub fn with_error(self, error: &str) -> Self {
        self.responses.lock().push_back(MockResponse::error(error));
        self
    }

    /// Shared handle to the recorded requests.
    pub fn recorded_requests(&self) -> Arc<Mutex<Vec<CompletionRequest>>> {
        Arc::clone(&self.requests)
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.requests.lock().last().cloned()
    }

    fn next_response(&self) -> MockResponse {
        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| MockResponse::text("(mock: no more queued responses)"))
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn model(&self) -> &str {
        "mock/test-model"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        self.requests.lock().push(request.clone());
        let mock = self.next_response();

        if let Some(error) = mock.error {
            return Err(SwitchboardError::LlmProvider(error));
        }
        require_text(&self.name, mock.text)
    }
}
