use crate::ai::chat_reply;
use crate::chat::ChatSession;
use crate::types::Role;
use crate::views::shared::markdown_to_html;
use dioxus::events::Key;
use dioxus::prelude::*;

/// Always mounted; `open` only toggles visibility, so a reply that lands
/// after the panel closes is still recorded.
#[component]
pub fn ChatPanel(session: Signal<ChatSession>, open: bool, on_close: EventHandler<()>) -> Element {
    let mut input = use_signal(String::new);

    let mut send_message = move |text: String| {
        let Some(turn) = session.with_mut(|s| s.begin_send(&text)) else {
            return;
        };
        input.set(String::new());
        tracing::debug!(history = turn.history.len(), "sending chat turn");

        spawn(async move {
            let reply = chat_reply(turn.message, turn.history).await;
            session.with_mut(|s| s.complete(reply));
        });
    };

    let snapshot = session();
    let loading = snapshot.is_loading();
    let overlay_class = if open {
        "overlay chat-overlay open"
    } else {
        "overlay chat-overlay"
    };

    rsx! {
        div { class: overlay_class, aria_hidden: (!open).to_string(),
            div { class: "chat-panel",
                div { class: "chat-header",
                    div { class: "chat-title",
                        span { class: "sparkle", "✦" }
                        span { "Chronos AI" }
                    }
                    button {
                        class: "btn-ghost close-btn",
                        r#type: "button",
                        onclick: move |_| on_close.call(()),
                        "✕"
                    }
                }
                div { id: "chat-list", class: "chat-list",
                    for (i, msg) in snapshot.messages().iter().enumerate() {
                        div {
                            key: "{i}",
                            class: match msg.role { Role::User => "message-row user", Role::Model => "message-row model" },
                            if matches!(msg.role, Role::Model) {
                                ModelBubble { content: msg.content.clone() }
                            } else {
                                div { class: "bubble user", "{msg.content}" }
                            }
                        }
                    }
                    if loading {
                        div { class: "message-row model",
                            div { class: "bubble model typing",
                                span { class: "dot" }
                                span { class: "dot" }
                                span { class: "dot" }
                            }
                        }
                    }
                }
                form { class: "composer",
                    onsubmit: move |ev| {
                        ev.prevent_default();
                        send_message(input());
                    },
                    input {
                        r#type: "text",
                        placeholder: "Ask Chronos anything...",
                        value: "{input}",
                        oninput: move |ev| input.set(ev.value()),
                        onkeydown: move |ev| {
                            if ev.key() == Key::Enter {
                                ev.prevent_default();
                                send_message(input());
                            }
                        },
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: loading || input().trim().is_empty(),
                        onclick: move |_| send_message(input()),
                        "Send"
                    }
                }
            }
        }
    }
}

#[component]
fn ModelBubble(content: String) -> Element {
    let content_html = markdown_to_html(&content);
    let copy_payload = content.clone();
    let on_copy = move |_| {
        let raw = copy_payload.clone();
        spawn(async move {
            #[cfg(any(feature = "desktop", feature = "mobile"))]
            {
                if let Ok(mut cb) = arboard::Clipboard::new() {
                    let _ = cb.set_text(raw);
                }
            }
            #[cfg(not(any(feature = "desktop", feature = "mobile")))]
            let _ = raw;
        });
    };

    rsx! {
        div { class: "bubble model",
            div { class: "md", dangerous_inner_html: "{content_html}" }
            button { class: "action-btn", title: "Copy", onclick: on_copy, "Copy" }
        }
    }
}
