use switchboard_core::{AgentResponse, ChatMessage, Result};

use crate::agent::ChatAgent;

/// Caller-owned chat history. A turn is recorded only when it succeeds.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Append a completed exchange.
    pub fn record(&mut self, user_message: &str, response: &AgentResponse) {
        self.messages.push(ChatMessage::user(user_message));
        self.messages.push(ChatMessage::assistant(response.content.clone()));
    }

    /// Ask `agent` for a reply and record the exchange on success.
    pub async fn send(&mut self, agent: &ChatAgent, user_message: &str) -> Result<AgentResponse> {
        let response = agent.respond(&self.messages, user_message).await?;
        self.record(user_message, &response);
        Ok(response)
    }
}
