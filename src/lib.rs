pub mod ai;
pub mod app;
pub mod chat;
pub mod clock;
pub mod geo;
pub mod shortcuts;
pub mod theme;
pub mod types;
pub mod ui;
pub mod views;
