use crate::types::{ChatMessage, Role};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_BRIEF_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_CHAT_MODEL: &str = "gemini-3-pro-preview";

/// Client for the Gemini `generateContent` REST endpoint
pub struct GeminiClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    brief_model: String,
    chat_model: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content<'a>>,
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<Value>,
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

impl<'a> Content<'a> {
    fn text(role: Option<&'a str>, text: &'a str) -> Self {
        Self {
            role,
            parts: vec![Part { text }],
        }
    }
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

fn role_name(role: Role) -> &'static str {
    match role {
        Role::User => "user",
        Role::Model => "model",
    }
}

/// Concatenated text of the first candidate.
pub fn response_text(body: &str) -> Result<String> {
    let parsed: GenerateResponse = serde_json::from_str(body)?;
    let text = parsed
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<String>()
        })
        .unwrap_or_default();
    Ok(text)
}

impl GeminiClient {
    pub fn new(api_key: String, brief_model: String, chat_model: String) -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT.to_string(), api_key, brief_model, chat_model)
    }

    pub fn with_endpoint(
        endpoint: String,
        api_key: String,
        brief_model: String,
        chat_model: String,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
            api_key,
            brief_model,
            chat_model,
        }
    }

    /// Grounded search with the weather/brief schema enforced server side.
    pub async fn generate_json(&self, prompt: &str, schema: Value) -> Result<String> {
        let request = GenerateRequest {
            system_instruction: None,
            contents: vec![Content::text(Some("user"), prompt)],
            tools: vec![json!({ "google_search": {} })],
            generation_config: Some(json!({
                "responseMimeType": "application/json",
                "responseSchema": schema,
            })),
        };
        self.generate(&self.brief_model, &request).await
    }

    pub async fn chat(
        &self,
        system_prompt: &str,
        history: &[ChatMessage],
        message: &str,
    ) -> Result<String> {
        let mut contents: Vec<Content<'_>> = history
            .iter()
            .map(|msg| Content::text(Some(role_name(msg.role)), &msg.content))
            .collect();
        contents.push(Content::text(Some("user"), message));

        let request = GenerateRequest {
            system_instruction: Some(Content::text(None, system_prompt)),
            contents,
            tools: Vec::new(),
            generation_config: None,
        };
        self.generate(&self.chat_model, &request).await
    }

    async fn generate(&self, model: &str, request: &GenerateRequest<'_>) -> Result<String> {
        let url = format!("{}/models/{}:generateContent", self.endpoint, model);
        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(anyhow::anyhow!("Gemini API error {}: {}", status, body));
        }

        response_text(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_parts_of_first_candidate() {
        let body = r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"Hello"},{"text":", world"}]}},
                       {"content":{"parts":[{"text":"ignored"}]}}]}"#;
        assert_eq!(response_text(body).unwrap(), "Hello, world");
    }

    #[test]
    fn blocked_reply_is_empty_text() {
        assert_eq!(response_text(r#"{"promptFeedback":{}}"#).unwrap(), "");
        assert!(response_text("<html>").is_err());
    }

    #[test]
    fn chat_request_shape() {
        let history = [ChatMessage::model("Hi"), ChatMessage::user("hey")];
        let mut contents: Vec<Content<'_>> = history
            .iter()
            .map(|msg| Content::text(Some(role_name(msg.role)), &msg.content))
            .collect();
        contents.push(Content::text(Some("user"), "time?"));
        let request = GenerateRequest {
            system_instruction: Some(Content::text(None, "persona")),
            contents,
            tools: Vec::new(),
            generation_config: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["systemInstruction"], json!({"parts": [{"text": "persona"}]}));
        assert_eq!(value["contents"][0]["role"], "model");
        assert_eq!(value["contents"][2]["parts"][0]["text"], "time?");
        assert!(value.get("tools").is_none());
    }
}
