//! Mock provider implementation for testing.

use super::{CompletionProvider, CompletionRequest, ProviderError};
use async_trait::async_trait;
use std::sync::Mutex;

/// Scripted outcome of every call to a [`MockCompletionProvider`].
#[derive(Debug, Clone)]
pub enum MockReply {
    Content(String),
    ApiError { status: u16, body: String },
    NetworkError(String),
}

/// In-process provider that returns a fixed reply and records requests.
pub struct MockCompletionProvider {
    configured: bool,
    reply: MockReply,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockCompletionProvider {
    pub fn new(reply: MockReply) -> Self {
        Self {
            configured: true,
            reply,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(content: impl Into<String>) -> Self {
        Self::new(MockReply::Content(content.into()))
    }

    /// A provider without a credential.
    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            ..Self::replying("")
        }
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl CompletionProvider for MockCompletionProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, ProviderError> {
        if let Ok(mut guard) = self.requests.lock() {
            guard.push(request.clone());
        }

        if !self.configured {
            return Err(ProviderError::NotConfigured(
                "Mock provider not configured".to_string(),
            ));
        }

        match &self.reply {
            MockReply::Content(text) => Ok(text.clone()),
            MockReply::ApiError { status, body } => Err(ProviderError::ApiError {
                status: *status,
                body: body.clone(),
            }),
            MockReply::NetworkError(msg) => Err(ProviderError::NetworkError(msg.clone())),
        }
    }
}
