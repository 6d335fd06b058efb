use crate::geo::Coordinates;
use crate::types::{AiSnapshot, ChatMessage, Role};
use anyhow::Result;
use async_trait::async_trait;
use rig::client::CompletionClient;
use rig::completion::{Chat, Prompt};
use std::env;

use super::brief::{
    BRIEF_JSON_INSTRUCTION, BriefService, BriefSource, brief_prompt, brief_response_schema,
    fallback_snapshot,
};
use super::providers::ProviderClient;

// ============================================
// Error Types
// ============================================

#[derive(Debug, Clone)]
pub struct ChatError(String);

impl ChatError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl std::fmt::Display for ChatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ChatError {}

impl From<anyhow::Error> for ChatError {
    fn from(err: anyhow::Error) -> Self {
        ChatError::new(err.to_string())
    }
}

pub type ChatResult<T> = Result<T, ChatError>;

/// One conversational turn against some model.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn reply(&self, message: &str, history: &[ChatMessage]) -> ChatResult<String>;
}

const CHRONOS_PERSONA: &str = "You are Chronos, the AI voice of a high-end minimalist clock app. You are sophisticated, concise, and helpful. You know about time, productivity, and the weather.";

/// Unified AI client wrapper for Chronos
/// Handles provider auto-detection and agent configuration
pub struct ChronosAI {
    client: ProviderClient,
}

impl ChronosAI {
    /// Create AI client from environment configuration
    pub fn from_env() -> Result<Self> {
        let client = ProviderClient::from_env()?;
        tracing::debug!(provider = client.name(), "ai provider selected");
        Ok(Self { client })
    }

    /// Chat with conversation history (non-streaming, multi-turn)
    pub async fn chat(&self, message: &str, history: &[ChatMessage]) -> Result<String> {
        let history = upstream_history(history);
        match &self.client {
            ProviderClient::Gemini(client) => client.chat(CHRONOS_PERSONA, history, message).await,
            ProviderClient::OpenAI(client) => {
                let model = env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o".to_string());

                let agent = client
                    .agent(&model)
                    .preamble(CHRONOS_PERSONA)
                    .max_tokens(1024)
                    .temperature(0.7)
                    .build();

                Ok(agent.chat(message, to_rig_messages(history)).await?)
            }
            ProviderClient::Anthropic(client) => {
                let model = env::var("ANTHROPIC_MODEL")
                    .unwrap_or_else(|_| "claude-3-5-sonnet-20241022".to_string());

                let agent = client
                    .agent(&model)
                    .preamble(CHRONOS_PERSONA)
                    .max_tokens(1024)
                    .temperature(0.7)
                    .build();

                Ok(agent.chat(message, to_rig_messages(history)).await?)
            }
            ProviderClient::Ollama(client) => {
                let model = env::var("LLM_MODEL").unwrap_or_else(|_| "llama3.1:latest".to_string());

                let agent = client.agent(&model).preamble(CHRONOS_PERSONA).build();

                Ok(agent.chat(message, to_rig_messages(history)).await?)
            }
        }
    }

    /// Raw weather/brief JSON for a location. Only Gemini can search the
    /// web; the others answer from the model alone.
    pub async fn brief(&self, coords: Coordinates) -> Result<String> {
        let prompt = brief_prompt(coords);
        match &self.client {
            ProviderClient::Gemini(client) => {
                client.generate_json(&prompt, brief_response_schema()).await
            }
            ProviderClient::OpenAI(client) => {
                let model = env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o".to_string());

                let agent = client
                    .agent(&model)
                    .preamble(BRIEF_JSON_INSTRUCTION)
                    .max_tokens(1024)
                    .temperature(0.3)
                    .build();

                Ok(agent.prompt(prompt.as_str()).await?)
            }
            ProviderClient::Anthropic(client) => {
                let model = env::var("ANTHROPIC_MODEL")
                    .unwrap_or_else(|_| "claude-3-5-sonnet-20241022".to_string());

                let agent = client
                    .agent(&model)
                    .preamble(BRIEF_JSON_INSTRUCTION)
                    .max_tokens(1024)
                    .temperature(0.3)
                    .build();

                Ok(agent.prompt(prompt.as_str()).await?)
            }
            ProviderClient::Ollama(client) => {
                let model = env::var("LLM_MODEL").unwrap_or_else(|_| "llama3.1:latest".to_string());

                let agent = client.agent(&model).preamble(BRIEF_JSON_INSTRUCTION).build();

                Ok(agent.prompt(prompt.as_str()).await?)
            }
        }
    }
}

/// Transcript as sent to a provider. Model turns before the first user turn
/// (the seeded greeting) are dropped; some providers reject a conversation
/// that does not open with the user.
fn upstream_history(history: &[ChatMessage]) -> &[ChatMessage] {
    let start = history
        .iter()
        .position(|msg| msg.role == Role::User)
        .unwrap_or(history.len());
    &history[start..]
}

/// Convert Chronos ChatMessage to Rig Message format
fn to_rig_messages(messages: &[ChatMessage]) -> Vec<rig::message::Message> {
    messages
        .iter()
        .map(|msg| match msg.role {
            Role::User => rig::message::Message::user(&msg.content),
            Role::Model => rig::message::Message::assistant(&msg.content),
        })
        .collect()
}

#[async_trait]
impl ChatBackend for ChronosAI {
    async fn reply(&self, message: &str, history: &[ChatMessage]) -> ChatResult<String> {
        self.chat(message, history)
            .await
            .map_err(|e| ChatError::new(format!("Chat error: {}", e)))
    }
}

#[async_trait]
impl BriefSource for ChronosAI {
    async fn generate_brief(&self, coords: Coordinates) -> Result<String> {
        self.brief(coords).await
    }
}

// ============================================
// Public API Functions
// ============================================

/// One chat turn. The provider is resolved per call so a key added to the
/// environment mid-session takes effect.
pub async fn chat_reply(message: String, history: Vec<ChatMessage>) -> ChatResult<String> {
    let ai = ChronosAI::from_env()
        .map_err(|e| ChatError::new(format!("Failed to initialize AI: {}", e)))?;

    ai.reply(&message, &history).await
}

/// Never fails; see [`BriefService`].
pub async fn fetch_weather_and_brief(latitude: f64, longitude: f64) -> AiSnapshot {
    match ChronosAI::from_env() {
        Ok(ai) => {
            BriefService::new(ai)
                .fetch_weather_and_brief(latitude, longitude)
                .await
        }
        Err(err) => {
            tracing::warn!(error = %err, "no AI provider, using fallback brief");
            fallback_snapshot()
        }
    }
}
