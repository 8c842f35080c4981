use async_trait::async_trait;
use prdkit_core::{Llm, LlmRequest, LlmResponse, PrdError, Result};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Scripted [`Llm`] for tests.
///
/// Replies are handed out in the order they were queued, one per call. Every request is
/// recorded so tests can assert on call counts and prompt contents.
pub struct MockLlm {
    name: String,
    replies: Mutex<VecDeque<std::result::Result<LlmResponse, String>>>,
    requests: Mutex<Vec<LlmRequest>>,
}

impl MockLlm {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            replies: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_response(self, response: LlmResponse) -> Self {
        self.push(Ok(response));
        self
    }

    /// Queue a response whose only content is `text`.
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_response(LlmResponse::text_response(text))
    }

    /// Queue a service failure.
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        self.push(Err(message.into()));
        self
    }

    /// Number of `generate_content` calls made so far.
    pub fn call_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or_default()
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<LlmRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    fn push(&self, reply: std::result::Result<LlmResponse, String>) {
        if let Ok(mut replies) = self.replies.lock() {
            replies.push_back(reply);
        }
    }
}

#[async_trait]
impl Llm for MockLlm {
    fn name(&self) -> &str {
        &self.name
    }

    async fn generate_content(&self, req: LlmRequest) -> Result<LlmResponse> {
        self.requests
            .lock()
            .map_err(|_| PrdError::service("MockLlm request log poisoned"))?
            .push(req);

        let reply = self
            .replies
            .lock()
            .map_err(|_| PrdError::service("MockLlm reply queue poisoned"))?
            .pop_front();

        match reply {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(PrdError::service(message)),
            None => Err(PrdError::service(format!("MockLlm '{}' has no queued response", self.name))),
        }
    }
}
