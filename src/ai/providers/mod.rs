pub mod gemini;

use anyhow::Result;
use rig::providers;
use std::env;

pub use gemini::GeminiClient;

/// Enum to hold different provider clients
pub enum ProviderClient {
    Gemini(GeminiClient),
    OpenAI(providers::openai::Client),
    Anthropic(providers::anthropic::Client),
    Ollama(providers::ollama::Client),
}

fn gemini_key() -> Option<String> {
    env::var("GEMINI_API_KEY")
        .or_else(|_| env::var("API_KEY"))
        .ok()
        .filter(|key| !key.trim().is_empty())
}

impl ProviderClient {
    /// Auto-detect and configure provider from environment variables
    pub fn from_env() -> Result<Self> {
        // Priority order:
        // 1. GEMINI_API_KEY (or API_KEY) → Gemini, the only one with grounded search
        // 2. OPENAI_API_KEY → OpenAI
        // 3. ANTHROPIC_API_KEY → Claude
        // 4. LLM_USE_OLLAMA=true → Ollama

        if let Some(key) = gemini_key() {
            let brief_model = env::var("GEMINI_BRIEF_MODEL")
                .unwrap_or_else(|_| gemini::DEFAULT_BRIEF_MODEL.to_string());
            let chat_model = env::var("GEMINI_CHAT_MODEL")
                .unwrap_or_else(|_| gemini::DEFAULT_CHAT_MODEL.to_string());
            let client = match env::var("GEMINI_ENDPOINT") {
                Ok(endpoint) => GeminiClient::with_endpoint(endpoint, key, brief_model, chat_model),
                Err(_) => GeminiClient::new(key, brief_model, chat_model),
            };
            return Ok(Self::Gemini(client));
        }

        if let Ok(key) = env::var("OPENAI_API_KEY") {
            return Ok(Self::OpenAI(providers::openai::Client::new(&key)));
        }

        if let Ok(key) = env::var("ANTHROPIC_API_KEY") {
            return Ok(Self::Anthropic(providers::anthropic::Client::new(&key)));
        }

        let use_ollama = env::var("LLM_USE_OLLAMA")
            .unwrap_or_else(|_| "false".into())
            .to_ascii_lowercase();

        if matches!(use_ollama.as_str(), "1" | "true" | "yes" | "on") {
            // The Rig client reads OLLAMA_HOST (defaults to http://localhost:11434)
            return Ok(Self::Ollama(providers::ollama::Client::new()));
        }

        Err(anyhow::anyhow!(
            "No AI provider configured. Set GEMINI_API_KEY, OPENAI_API_KEY, ANTHROPIC_API_KEY, or LLM_USE_OLLAMA=true"
        ))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Gemini(_) => "gemini",
            Self::OpenAI(_) => "openai",
            Self::Anthropic(_) => "anthropic",
            Self::Ollama(_) => "ollama",
        }
    }
}
