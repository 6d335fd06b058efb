pub mod chat;
pub mod clock;
pub mod navigation;
pub mod shared;
pub mod theme_sheet;
pub mod weather;

pub use chat::ChatPanel;
pub use clock::{DigitalMode, FlipMode, TimerMode, WorldMode};
pub use navigation::Navigation;
pub use theme_sheet::ThemeSheet;
pub use weather::{BriefToast, WeatherWidget};
