use crate::app::AppState;
use crate::theme::THEMES;
use dioxus::prelude::*;

#[component]
pub fn ThemeSheet(state: Signal<AppState>) -> Element {
    let active_id = state.read().theme.id;
    rsx! {
        div { class: "overlay sheet-overlay",
            div { class: "sheet",
                div { class: "sheet-header",
                    h3 { class: "section-title", "Theming" }
                    button {
                        class: "btn-ghost close-btn",
                        r#type: "button",
                        onclick: move |_| state.with_mut(|s| s.close_theme()),
                        "✕"
                    }
                }
                div { class: "theme-list",
                    for theme in THEMES.iter() {
                        button {
                            key: "{theme.id}",
                            class: if theme.id == active_id { "theme-option active" } else { "theme-option" },
                            r#type: "button",
                            onclick: move |_| {
                                state.with_mut(|s| {
                                    s.select_theme(theme.id);
                                });
                            },
                            div { class: "theme-swatch", style: "background: {theme.gradient};" }
                            span { class: "theme-name", "{theme.name}" }
                            if theme.id == active_id {
                                span { class: "theme-badge", "Active" }
                            }
                        }
                    }
                }
            }
        }
    }
}
