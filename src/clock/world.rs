use chrono::{DateTime, Utc};
use chrono_tz::Tz;

#[derive(Debug, PartialEq)]
pub struct WorldClockCity {
    pub id: &'static str,
    pub name: &'static str,
    pub timezone: Tz,
    pub country: &'static str,
}

pub static DEFAULT_CITIES: [WorldClockCity; 6] = [
    WorldClockCity {
        id: "1",
        name: "New York",
        timezone: chrono_tz::America::New_York,
        country: "USA",
    },
    WorldClockCity {
        id: "2",
        name: "London",
        timezone: chrono_tz::Europe::London,
        country: "UK",
    },
    WorldClockCity {
        id: "3",
        name: "Tokyo",
        timezone: chrono_tz::Asia::Tokyo,
        country: "Japan",
    },
    WorldClockCity {
        id: "4",
        name: "Paris",
        timezone: chrono_tz::Europe::Paris,
        country: "France",
    },
    WorldClockCity {
        id: "5",
        name: "Sydney",
        timezone: chrono_tz::Australia::Sydney,
        country: "Australia",
    },
    WorldClockCity {
        id: "6",
        name: "Dubai",
        timezone: chrono_tz::Asia::Dubai,
        country: "UAE",
    },
];

/// Wall-clock reading for one city card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CityTime {
    pub weekday: String,
    pub time: String,
}

pub fn city_time(city: &WorldClockCity, instant: DateTime<Utc>) -> CityTime {
    let local = instant.with_timezone(&city.timezone);
    CityTime {
        weekday: local.format("%a").to_string(),
        time: local.format("%H:%M").to_string(),
    }
}
