use crate::geo::Coordinates;
use crate::types::{AiSnapshot, SmartBrief, WeatherData};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};

/// Instruction used by providers that cannot enforce a response schema.
pub const BRIEF_JSON_INSTRUCTION: &str = r#"Reply with a single JSON object and nothing else, shaped as:
{"weather": {"location": string, "temp": number (Celsius), "condition": string, "humidity": number (0-100), "wind": string, "icon": a single weather emoji},
 "brief": {"greeting": string, "fact": string, "advice": string}}"#;

/// Anything that can produce the raw weather/brief reply for a location.
#[async_trait]
pub trait BriefSource: Send + Sync {
    async fn generate_brief(&self, coords: Coordinates) -> anyhow::Result<String>;
}

#[derive(Debug, thiserror::Error)]
pub enum BriefError {
    #[error("response was empty")]
    Empty,
    #[error("response is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("field `{field}` is invalid: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

pub fn brief_prompt(coords: Coordinates) -> String {
    format!(
        "I am at latitude {} and longitude {}. Use Google Search to find current weather for this exact location and a smart daily fact + piece of advice. Return a clean JSON.",
        coords.latitude, coords.longitude
    )
}

/// Schema handed to Gemini as `responseSchema`.
pub fn brief_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "weather": {
                "type": "OBJECT",
                "properties": {
                    "location": { "type": "STRING" },
                    "temp": { "type": "NUMBER", "description": "Temperature in Celsius" },
                    "condition": { "type": "STRING" },
                    "humidity": { "type": "NUMBER" },
                    "wind": { "type": "STRING" },
                    "icon": {
                        "type": "STRING",
                        "description": "A single weather emoji (e.g., ☀️, ☁️, 🌧️, ⛈️, ❄️, 🌫️)"
                    }
                },
                "required": ["location", "temp", "condition", "humidity", "wind", "icon"]
            },
            "brief": {
                "type": "OBJECT",
                "properties": {
                    "greeting": { "type": "STRING" },
                    "fact": { "type": "STRING" },
                    "advice": { "type": "STRING" }
                },
                "required": ["greeting", "fact", "advice"]
            }
        },
        "required": ["weather", "brief"]
    })
}

pub fn fallback_snapshot() -> AiSnapshot {
    AiSnapshot {
        weather: WeatherData {
            location: "Unknown".to_string(),
            temp: 22.0,
            condition: "Clear".to_string(),
            humidity: 45,
            wind: "10km/h".to_string(),
            icon: "\u{2600}\u{fe0f}".to_string(),
        },
        brief: SmartBrief {
            greeting: "Hello!".to_string(),
            fact: "A day on Venus is longer than a year on Venus.".to_string(),
            advice: "Take a moment to breathe deeply today.".to_string(),
        },
    }
}

// Wire shapes. Everything is checked before it becomes a domain type.
#[derive(Deserialize)]
struct WireSnapshot {
    weather: WireWeather,
    brief: WireBrief,
}

#[derive(Deserialize)]
struct WireWeather {
    location: String,
    temp: f64,
    condition: String,
    humidity: f64,
    wind: String,
    icon: String,
}

#[derive(Deserialize)]
struct WireBrief {
    greeting: String,
    fact: String,
    advice: String,
}

pub fn parse_snapshot(text: &str) -> Result<AiSnapshot, BriefError> {
    let body = json_body(text).ok_or(BriefError::Empty)?;
    let wire: WireSnapshot = serde_json::from_str(body)?;

    let weather = wire.weather;
    if !weather.temp.is_finite() || !(-100.0..=100.0).contains(&weather.temp) {
        return Err(BriefError::Invalid {
            field: "temp",
            reason: "out of range",
        });
    }
    if !(0.0..=100.0).contains(&weather.humidity) {
        return Err(BriefError::Invalid {
            field: "humidity",
            reason: "must be between 0 and 100",
        });
    }
    let icon = weather.icon.trim();
    if !is_single_glyph(icon) {
        return Err(BriefError::Invalid {
            field: "icon",
            reason: "must be a single emoji",
        });
    }

    Ok(AiSnapshot {
        weather: WeatherData {
            location: non_empty("location", weather.location)?,
            temp: weather.temp,
            condition: non_empty("condition", weather.condition)?,
            humidity: weather.humidity.round() as u8,
            wind: non_empty("wind", weather.wind)?,
            icon: icon.to_string(),
        },
        brief: SmartBrief {
            greeting: non_empty("greeting", wire.brief.greeting)?,
            fact: non_empty("fact", wire.brief.fact)?,
            advice: non_empty("advice", wire.brief.advice)?,
        },
    })
}

/// The outermost `{...}` of a reply, tolerating code fences and prose.
fn json_body(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}

fn non_empty(field: &'static str, value: String) -> Result<String, BriefError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(BriefError::Invalid {
            field,
            reason: "must not be empty",
        });
    }
    Ok(trimmed.to_string())
}

// Emoji may carry variation selectors and joiners, so this bounds the
// length instead of counting code points exactly.
fn is_single_glyph(icon: &str) -> bool {
    let count = icon.chars().count();
    (1..=8).contains(&count)
        && !icon
            .chars()
            .any(|c| c.is_whitespace() || c.is_ascii_alphanumeric())
}

/// Fetches and validates the snapshot, substituting the fallback on any
/// failure so the UI always has something to render.
pub struct BriefService<S> {
    source: S,
}

impl<S: BriefSource> BriefService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub async fn fetch_weather_and_brief(&self, latitude: f64, longitude: f64) -> AiSnapshot {
        let Some(coords) = Coordinates::new(latitude, longitude) else {
            tracing::warn!(latitude, longitude, "coordinates out of range, using fallback brief");
            return fallback_snapshot();
        };
        match self.source.generate_brief(coords).await {
            Ok(text) => match parse_snapshot(&text) {
                Ok(snapshot) => snapshot,
                Err(err) => {
                    tracing::warn!(error = %err, "malformed brief, using fallback");
                    fallback_snapshot()
                }
            },
            Err(err) => {
                tracing::warn!(error = %err, "brief request failed, using fallback");
                fallback_snapshot()
            }
        }
    }
}
