//! Reactive UI state.

pub mod app;
mod intro;
mod signal;

pub use app::AppState;
pub use intro::IntroState;
pub use signal::Signal;
