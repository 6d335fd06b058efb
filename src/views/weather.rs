use crate::types::{SmartBrief, WeatherData};
use dioxus::prelude::*;

#[component]
pub fn WeatherWidget(data: Option<WeatherData>) -> Element {
    let mut expanded = use_signal(|| false);

    let Some(data) = data else {
        return rsx! {
            div { class: "weather-widget glass placeholder",
                div { class: "placeholder-pill" }
            }
        };
    };

    let class = if expanded() {
        "weather-widget glass expanded"
    } else {
        "weather-widget glass"
    };
    let temp = temperature_label(data.temp);
    rsx! {
        div {
            class: class,
            onclick: move |_| {
                let next = !expanded();
                expanded.set(next);
            },
            div { class: "weather-summary",
                div { class: "weather-icon", "{data.icon}" }
                div { class: "weather-reading",
                    div { class: "weather-temp",
                        span { class: "temp-value", "{temp}" }
                        span { class: "temp-unit", "°C" }
                    }
                    div { class: "weather-location", "{data.location}" }
                }
                if !expanded() {
                    span { class: "chevron", "›" }
                }
            }
            if expanded() {
                div { class: "weather-details",
                    div { class: "detail-tile",
                        span { class: "detail-label", "Wind" }
                        span { class: "detail-value", "{data.wind}" }
                    }
                    div { class: "detail-tile",
                        span { class: "detail-label", "Humid" }
                        span { class: "detail-value", "{data.humidity}%" }
                    }
                    div { class: "detail-tile wide",
                        span { class: "detail-label", "Condition" }
                        span { class: "detail-value", "{data.condition}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn BriefToast(brief: SmartBrief, on_dismiss: EventHandler<()>) -> Element {
    rsx! {
        div { class: "brief-toast glass",
            div { class: "brief-header",
                div { class: "brief-title",
                    span { class: "sparkle", "✦" }
                    h4 { "{brief.greeting}" }
                }
                button {
                    class: "btn-ghost close-btn",
                    r#type: "button",
                    onclick: move |_| on_dismiss.call(()),
                    "✕"
                }
            }
            p { class: "brief-fact", "{brief.fact}" }
            div { class: "brief-advice",
                p { class: "detail-label", "Advice" }
                p { class: "advice-text", "{brief.advice}" }
            }
        }
    }
}

/// As reported: `19.5` stays `19.5`, `22.0` reads `22`.
fn temperature_label(temp: f64) -> String {
    temp.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temperature_is_not_rounded() {
        assert_eq!(temperature_label(19.5), "19.5");
        assert_eq!(temperature_label(22.0), "22");
        assert_eq!(temperature_label(-3.25), "-3.25");
    }
}
