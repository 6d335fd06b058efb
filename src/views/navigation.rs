use crate::app::AppState;
use crate::types::AppMode;
use dioxus::prelude::*;

#[component]
pub fn Navigation(state: Signal<AppState>) -> Element {
    let current = state.read().mode;
    rsx! {
        nav { class: "dock glass",
            for mode in AppMode::ALL {
                ModeButton { key: "{mode.label()}", state, mode, active: mode == current }
            }
            div { class: "dock-divider" }
            button {
                class: "dock-btn icon",
                r#type: "button",
                title: "Theme (T)",
                onclick: move |_| state.with_mut(|s| s.open_theme()),
                "◐"
            }
            button {
                class: "dock-btn icon",
                r#type: "button",
                title: "Chat",
                onclick: move |_| state.with_mut(|s| s.open_chat()),
                "✦"
            }
        }
    }
}

#[component]
fn ModeButton(state: Signal<AppState>, mode: AppMode, active: bool) -> Element {
    let class = if active { "dock-btn active" } else { "dock-btn" };
    let label = mode.label();
    let shortcut = mode.shortcut();
    rsx! {
        button {
            class: class,
            r#type: "button",
            title: "{label} ({shortcut})",
            onclick: move |_| state.with_mut(|s| s.set_mode(mode)),
            span { class: "dock-label", "{label}" }
        }
    }
}
