/// AI module for Chronos
///
/// Two operations back the UI: a one-off weather + daily brief lookup for the
/// device location, and conversational turns with the Chronos persona.
/// Providers (Gemini, OpenAI, Anthropic, Ollama) are detected from
/// environment variables.
///
/// # Architecture
///
/// - `brief` - Weather/brief schema, boundary validation, fallback payload
/// - `client` - Main ChronosAI client and the public entry points
/// - `providers` - Provider-specific implementations (Gemini REST, Rig-based)
///
/// # Usage
///
/// ```rust,no_run
/// # async fn example() {
/// let snapshot = chronos::ai::fetch_weather_and_brief(38.72, -9.14).await;
/// println!("{} {}", snapshot.weather.icon, snapshot.brief.greeting);
/// # }
/// ```
mod brief;
mod client;
mod providers;

pub use brief::{
    BriefError, BriefService, BriefSource, brief_prompt, brief_response_schema,
    fallback_snapshot, parse_snapshot,
};
pub use client::{
    ChatBackend, ChatError, ChatResult, ChronosAI, chat_reply, fetch_weather_and_brief,
};
