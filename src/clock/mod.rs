//! Time sources and the state machines behind each clock mode.
pub mod countdown;
pub mod flip;
pub mod world;

use once_cell::sync::OnceCell;
use std::time::Duration;
use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};

pub use countdown::Countdown;
pub use flip::{FLIP_DURATION, FlipDriver, FlipPanels, FlipState, FlipUnit, TimerCommand};
pub use world::{CityTime, DEFAULT_CITIES, WorldClockCity, city_time};

/// Interval of every clock ticker in the app.
pub const TICK: Duration = Duration::from_secs(1);

const HOUR_MINUTE_FORMAT: &[FormatItem<'static>] = format_description!("[hour]:[minute]");
const SECOND_FORMAT: &[FormatItem<'static>] = format_description!("[second]");

static LOCAL_OFFSET: OnceCell<UtcOffset> = OnceCell::new();

/// Must run before any thread is spawned; the platform offset lookup is
/// refused on multi-threaded unix processes.
pub fn init_local_offset() {
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    let _ = LOCAL_OFFSET.set(offset);
}

pub fn local_now() -> OffsetDateTime {
    let offset = LOCAL_OFFSET.get().copied().unwrap_or(UtcOffset::UTC);
    OffsetDateTime::now_utc().to_offset(offset)
}

/// `HH:MM` on a 24 hour clock.
pub fn format_hour_minute(now: OffsetDateTime) -> String {
    now.format(HOUR_MINUTE_FORMAT).unwrap_or_default()
}

pub fn format_seconds(now: OffsetDateTime) -> String {
    now.format(SECOND_FORMAT).unwrap_or_default()
}
