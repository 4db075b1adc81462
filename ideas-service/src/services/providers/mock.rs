//! Mock provider implementations for testing.

use super::{GenerationParams, ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;
use tokio::sync::Mutex;

/// What the mock does when `generate` is called.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    Reply(String),
    Fail(ProviderError),
    Panic,
}

/// Mock text provider that records every prompt it receives.
pub struct MockTextProvider {
    behavior: MockBehavior,
    calls: Mutex<Vec<(String, GenerationParams)>>,
}

impl MockTextProvider {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(text: &str) -> Self {
        Self::new(MockBehavior::Reply(text.to_string()))
    }

    pub fn failing(error: ProviderError) -> Self {
        Self::new(MockBehavior::Fail(error))
    }

    pub async fn calls(&self) -> Vec<(String, GenerationParams)> {
        self.calls.lock().await.clone()
    }

    pub async fn call_count(&self) -> usize {
        self.calls.lock().await.len()
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError> {
        self.calls
            .lock()
            .await
            .push((prompt.to_string(), params.clone()));

        match &self.behavior {
            MockBehavior::Reply(text) => Ok(ProviderResponse {
                text: text.clone(),
                input_tokens: Some(prompt.len() as i32 / 4),
                output_tokens: Some(text.len() as i32 / 4),
                finish_reason: Some("STOP".to_string()),
            }),
            MockBehavior::Fail(error) => Err(error.clone()),
            MockBehavior::Panic => panic!("mock provider panicked"),
        }
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        match &self.behavior {
            MockBehavior::Fail(ProviderError::NotConfigured(msg)) => {
                Err(ProviderError::NotConfigured(msg.clone()))
            }
            _ => Ok(()),
        }
    }
}
