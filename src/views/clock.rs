use crate::clock::{
    self, CityTime, Countdown, DEFAULT_CITIES, FlipDriver, TICK,
    countdown::{DEFAULT_MINUTES_INPUT, countdown_ticker},
};
use dioxus::prelude::*;
use time::OffsetDateTime;

#[component]
pub fn DigitalMode(now: OffsetDateTime) -> Element {
    let hour_minute = clock::format_hour_minute(now);
    let seconds = clock::format_seconds(now);
    rsx! {
        div { class: "mode digital-mode",
            div { class: "digital-time", "{hour_minute}" }
            div { class: "digital-seconds", "{seconds}" }
        }
    }
}

#[component]
pub fn FlipMode(now: OffsetDateTime) -> Element {
    rsx! {
        div { class: "mode flip-mode",
            FlipUnit { value: now.hour() }
            span { class: "flip-separator", ":" }
            FlipUnit { value: now.minute() }
            span { class: "flip-separator", ":" }
            FlipUnit { value: now.second() }
        }
    }
}

#[component]
pub fn FlipUnit(value: u8) -> Element {
    // Dropped with the component, which cancels any pending settle.
    let mut driver = use_signal(|| FlipDriver::new(value));
    let mut panels = use_signal(|| driver.read().panels());

    use_future(move || async move {
        let mut changes = driver.read().subscribe();
        while changes.changed().await.is_ok() {
            let next = changes.borrow_and_update().panels();
            panels.set(next);
        }
    });

    use_effect(use_reactive((&value,), move |(value,)| {
        driver.with_mut(|d| {
            d.offer(value);
        });
    }));

    let panels = panels();
    let class = if panels.flipping {
        "flip-card flipping"
    } else {
        "flip-card"
    };
    rsx! {
        div { class: class,
            div { class: "top", "{panels.top}" }
            div { class: "bottom", "{panels.bottom}" }
            div { class: "leaf",
                div { class: "leaf-front", "{panels.leaf_front}" }
                div { class: "leaf-back", "{panels.leaf_back}" }
            }
        }
    }
}

#[component]
pub fn WorldMode() -> Element {
    let mut now = use_signal(chrono::Utc::now);

    use_future(move || async move {
        loop {
            tokio::time::sleep(TICK).await;
            now.set(chrono::Utc::now());
        }
    });

    let instant = now();
    rsx! {
        div { class: "mode world-mode",
            for city in DEFAULT_CITIES.iter() {
                CityCard {
                    key: "{city.id}",
                    name: city.name,
                    country: city.country,
                    reading: clock::city_time(city, instant),
                }
            }
        }
    }
}

#[component]
fn CityCard(name: &'static str, country: &'static str, reading: CityTime) -> Element {
    rsx! {
        div { class: "city-card glass",
            div { class: "city-header",
                div {
                    h3 { class: "city-name", "{name}" }
                    p { class: "city-country", "{country}" }
                }
                div { class: "city-weekday", "{reading.weekday}" }
            }
            div { class: "city-time", "{reading.time}" }
        }
    }
}

#[component]
pub fn TimerMode() -> Element {
    let mut timer = use_signal(Countdown::default);
    let mut minutes_input = use_signal(|| DEFAULT_MINUTES_INPUT.to_string());
    // Only alive while the countdown runs; restarted on every start/resume.
    let mut ticker = use_signal(|| Option::<Task>::None);

    let mut stop_ticker = move || {
        if let Some(task) = ticker.take() {
            task.cancel();
        }
    };

    let state = timer();
    let readout = state.display();
    let toggle_label = if state.is_running() { "Pause" } else { "Start" };
    rsx! {
        div { class: "mode timer-mode",
            if state.is_editing() {
                div { class: "timer-input",
                    input {
                        r#type: "number",
                        min: "0",
                        placeholder: "00",
                        value: "{minutes_input}",
                        oninput: move |ev| minutes_input.set(ev.value()),
                    }
                    p { class: "timer-input-label", "Minutes" }
                }
            } else {
                div { class: "timer-readout", "{readout}" }
            }
            div { class: "timer-controls",
                button {
                    class: "btn timer-reset",
                    r#type: "button",
                    title: "Reset",
                    onclick: move |_| {
                        stop_ticker();
                        timer.with_mut(|t| t.reset());
                    },
                    "↺"
                }
                button {
                    class: "btn timer-toggle",
                    r#type: "button",
                    title: "{toggle_label}",
                    onclick: move |_| {
                        stop_ticker();
                        let input = minutes_input();
                        let running = timer.with_mut(|t| {
                            t.toggle(&input);
                            t.is_running()
                        });
                        if running {
                            let task = spawn(countdown_ticker(move || {
                                timer.with_mut(|t| {
                                    t.tick();
                                    t.is_running()
                                })
                            }));
                            ticker.set(Some(task));
                        }
                    },
                    if state.is_running() { "❚❚" } else { "▶" }
                }
            }
        }
    }
}
