//! Window-wide keyboard shortcuts.
//!
//! Listening on the document instead of a focused element keeps shortcuts
//! alive after an overlay closes and takes the focused control with it.
use serde::Deserialize;

// Registered once per eval; each keydown is sent back as a `KeyPress`.
const KEY_LISTENER_JS: &str = r#"
document.addEventListener('keydown', (e) => {
    const target = e.target;
    const inField = !!(target && target.closest
        && target.closest('input, textarea, select, [contenteditable="true"]'));
    dioxus.send({
        key: e.key,
        inField: inField,
        modified: e.ctrlKey || e.metaKey || e.altKey,
    });
});
"#;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyPress {
    pub key: String,
    #[serde(default)]
    pub in_field: bool,
    #[serde(default)]
    pub modified: bool,
}

impl KeyPress {
    /// The key to treat as a shortcut, if any. Typing into a form field and
    /// modifier chords are left alone.
    pub fn shortcut(&self) -> Option<&str> {
        (!self.in_field && !self.modified).then_some(self.key.as_str())
    }
}

/// Feeds document keydowns to `on_key` until the webview goes away.
pub async fn listen(mut on_key: impl FnMut(&str)) {
    let mut eval = dioxus::prelude::document::eval(KEY_LISTENER_JS);
    loop {
        match eval.recv::<KeyPress>().await {
            Ok(press) => {
                if let Some(key) = press.shortcut() {
                    on_key(key);
                }
            }
            Err(err) => {
                tracing::debug!(error = ?err, "keyboard listener stopped");
                break;
            }
        }
    }
}
