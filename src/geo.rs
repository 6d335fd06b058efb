use serde::Deserialize;
use std::env;

pub const LATITUDE_ENV: &str = "CHRONOS_LATITUDE";
pub const LONGITUDE_ENV: &str = "CHRONOS_LONGITUDE";

// Replies with [lat, lon] or null; the prompt is shown at most once.
const GEOLOCATION_JS: &str = r#"
if (!navigator.geolocation) {
    dioxus.send(null);
} else {
    navigator.geolocation.getCurrentPosition(
        (pos) => dioxus.send([pos.coords.latitude, pos.coords.longitude]),
        () => dioxus.send(null)
    );
}
"#;

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(from = "(f64, f64)")]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<(f64, f64)> for Coordinates {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
        let valid = latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude);
        valid.then_some(Self {
            latitude,
            longitude,
        })
    }
}

pub fn parse_coordinates(latitude: &str, longitude: &str) -> Option<Coordinates> {
    let latitude = latitude.trim().parse().ok()?;
    let longitude = longitude.trim().parse().ok()?;
    Coordinates::new(latitude, longitude)
}

/// Fixed location from the environment, for hosts without a geolocation API.
pub fn coordinates_from_env() -> Option<Coordinates> {
    let latitude = env::var(LATITUDE_ENV).ok()?;
    let longitude = env::var(LONGITUDE_ENV).ok()?;
    parse_coordinates(&latitude, &longitude)
}

/// Single attempt, no retry. `None` covers denial and unsupported hosts.
pub async fn request_location() -> Option<Coordinates> {
    if let Some(coords) = coordinates_from_env() {
        tracing::debug!("using location from environment");
        return Some(coords);
    }

    let mut eval = dioxus::prelude::document::eval(GEOLOCATION_JS);
    match eval.recv::<Option<Coordinates>>().await {
        Ok(Some(coords)) => Coordinates::new(coords.latitude, coords.longitude),
        Ok(None) => {
            tracing::info!("location access denied");
            None
        }
        Err(err) => {
            tracing::info!(error = ?err, "location unavailable");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_range_checks() {
        assert_eq!(
            parse_coordinates("35.68", " 139.69 "),
            Some(Coordinates {
                latitude: 35.68,
                longitude: 139.69
            })
        );
        assert!(parse_coordinates("91", "0").is_none());
        assert!(parse_coordinates("0", "-180.5").is_none());
        assert!(parse_coordinates("north", "0").is_none());
        assert!(parse_coordinates("NaN", "0").is_none());
    }

    #[test]
    fn decodes_script_reply() {
        let coords: Option<Coordinates> = serde_json::from_str("[51.5, -0.12]").unwrap();
        assert_eq!(coords, Coordinates::new(51.5, -0.12));
        let denied: Option<Coordinates> = serde_json::from_str("null").unwrap();
        assert!(denied.is_none());
    }
}
