use crate::theme::{Theme, default_theme, theme_by_id};
use crate::types::{AiSnapshot, AppMode, SmartBrief, WeatherData};

/// Everything the root view owns. Child views receive it through a signal.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    pub mode: AppMode,
    pub theme: &'static Theme,
    pub snapshot: Option<AiSnapshot>,
    pub theme_open: bool,
    pub chat_open: bool,
    pub show_brief: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            mode: AppMode::default(),
            theme: default_theme(),
            snapshot: None,
            theme_open: false,
            chat_open: false,
            show_brief: false,
        }
    }
}

impl AppState {
    pub fn weather(&self) -> Option<&WeatherData> {
        self.snapshot.as_ref().map(|snapshot| &snapshot.weather)
    }

    pub fn brief(&self) -> Option<&SmartBrief> {
        self.snapshot.as_ref().map(|snapshot| &snapshot.brief)
    }

    /// Keyboard shortcuts. All of them are off while the chat is open.
    /// Returns true when the key was handled.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if self.chat_open {
            return false;
        }
        let mut chars = key.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return false;
        };
        if c.eq_ignore_ascii_case(&'t') {
            self.theme_open = !self.theme_open;
            return true;
        }
        match AppMode::from_shortcut(c) {
            Some(mode) => {
                self.mode = mode;
                true
            }
            None => false,
        }
    }

    pub fn set_mode(&mut self, mode: AppMode) {
        self.mode = mode;
    }

    /// Applies `id` and closes the picker in one step. Returns true if the
    /// active theme changed.
    pub fn select_theme(&mut self, id: &str) -> bool {
        self.theme_open = false;
        match theme_by_id(id) {
            Some(theme) if theme.id != self.theme.id => {
                self.theme = theme;
                true
            }
            _ => false,
        }
    }

    pub fn open_theme(&mut self) {
        self.theme_open = true;
    }

    pub fn close_theme(&mut self) {
        self.theme_open = false;
    }

    pub fn open_chat(&mut self) {
        self.chat_open = true;
    }

    pub fn close_chat(&mut self) {
        self.chat_open = false;
    }

    pub fn apply_snapshot(&mut self, snapshot: AiSnapshot) {
        self.snapshot = Some(snapshot);
        self.show_brief = true;
    }

    pub fn dismiss_brief(&mut self) {
        self.show_brief = false;
    }
}
