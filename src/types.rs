use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn model(content: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            content: content.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeatherData {
    pub location: String,
    /// Degrees Celsius.
    pub temp: f64,
    pub condition: String,
    /// Relative humidity, 0-100.
    pub humidity: u8,
    pub wind: String,
    /// A single weather emoji.
    pub icon: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SmartBrief {
    pub greeting: String,
    pub fact: String,
    pub advice: String,
}

/// Weather and brief always arrive from the same call and are stored as one
/// value so the UI never sees one without the other.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AiSnapshot {
    pub weather: WeatherData,
    pub brief: SmartBrief,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AppMode {
    #[default]
    Digital,
    Flip,
    World,
    Timer,
}

impl AppMode {
    pub const ALL: [AppMode; 4] = [
        AppMode::Digital,
        AppMode::Flip,
        AppMode::World,
        AppMode::Timer,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AppMode::Digital => "Digital",
            AppMode::Flip => "Flip",
            AppMode::World => "World",
            AppMode::Timer => "Timer",
        }
    }

    pub fn shortcut(self) -> char {
        match self {
            AppMode::Digital => '1',
            AppMode::Flip => '2',
            AppMode::World => '3',
            AppMode::Timer => '4',
        }
    }

    pub fn from_shortcut(key: char) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.shortcut() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortcuts_map_to_modes_in_order() {
        assert_eq!(AppMode::from_shortcut('1'), Some(AppMode::Digital));
        assert_eq!(AppMode::from_shortcut('2'), Some(AppMode::Flip));
        assert_eq!(AppMode::from_shortcut('3'), Some(AppMode::World));
        assert_eq!(AppMode::from_shortcut('4'), Some(AppMode::Timer));
        assert_eq!(AppMode::from_shortcut('5'), None);
    }

    #[test]
    fn roles_serialize_lowercase() {
        let json = serde_json::to_string(&ChatMessage::model("hi")).unwrap();
        assert_eq!(json, r#"{"role":"model","content":"hi"}"#);
    }
}
