use crate::ai::fetch_weather_and_brief;
use crate::app::AppState;
use crate::chat::ChatSession;
use crate::clock::{self, TICK};
use crate::geo::request_location;
use crate::shortcuts;
use crate::theme::theme_definition;
use crate::types::AppMode;
use crate::views::{
    BriefToast, ChatPanel, DigitalMode, FlipMode, Navigation, ThemeSheet, TimerMode,
    WeatherWidget, WorldMode,
};
use dioxus::prelude::*;
use time::OffsetDateTime;

const CHRONOS_CSS: Asset = asset!("/assets/chronos.css");

#[component]
pub fn App() -> Element {
    let mut state = use_signal(AppState::default);
    let chat = use_signal(ChatSession::default);
    let now = use_signal(clock::local_now);

    use_clock_tick(now);
    use_brief_fetch(state);
    use_shortcuts(state);

    let snapshot = state();
    let definition = theme_definition(snapshot.theme);
    let root_class = definition.root_class;
    let theme_css = definition.css;
    rsx! {
        ThemeStyles { css: theme_css }
        div { class: root_class,
            BackgroundMesh {}
            if snapshot.show_brief {
                if let Some(brief) = snapshot.brief().cloned() {
                    BriefToast {
                        brief,
                        on_dismiss: move |_| state.with_mut(|s| s.dismiss_brief()),
                    }
                }
            }
            WeatherWidget { data: snapshot.weather().cloned() }
            main { class: "clock-stage",
                ModeView { mode: snapshot.mode, now: now() }
            }
            Navigation { state }
            if snapshot.theme_open {
                ThemeSheet { state }
            }
            ChatPanel {
                session: chat,
                open: snapshot.chat_open,
                on_close: move |_| state.with_mut(|s| s.close_chat()),
            }
        }
    }
}

fn use_clock_tick(now: Signal<OffsetDateTime>) {
    let mut now = now;
    use_future(move || async move {
        loop {
            tokio::time::sleep(TICK).await;
            now.set(clock::local_now());
        }
    });
}

/// Location first, then one AI call. Denial leaves the widget empty.
fn use_brief_fetch(state: Signal<AppState>) {
    let mut state = state;
    use_future(move || async move {
        let Some(coords) = request_location().await else {
            return;
        };
        tracing::info!("fetching weather and brief");
        let snapshot = fetch_weather_and_brief(coords.latitude, coords.longitude).await;
        state.with_mut(|s| s.apply_snapshot(snapshot));
    });
}

fn use_shortcuts(state: Signal<AppState>) {
    let mut state = state;
    use_future(move || async move {
        shortcuts::listen(|key| {
            state.with_mut(|s| {
                s.handle_key(key);
            });
        })
        .await;
    });
}

#[component]
fn ThemeStyles(css: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: CHRONOS_CSS }
        style { dangerous_inner_html: "{css}" }
    }
}

#[component]
fn BackgroundMesh() -> Element {
    rsx! {
        div { class: "background", aria_hidden: "true",
            div { class: "mesh-blob blob-a" }
            div { class: "mesh-blob blob-b" }
        }
    }
}

#[component]
fn ModeView(mode: AppMode, now: OffsetDateTime) -> Element {
    match mode {
        AppMode::Digital => rsx! { DigitalMode { now } },
        AppMode::Flip => rsx! { FlipMode { now } },
        AppMode::World => rsx! { WorldMode {} },
        AppMode::Timer => rsx! { TimerMode {} },
    }
}
