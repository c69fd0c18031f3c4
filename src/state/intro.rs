//! Intro overlay state.

use super::Signal;

/// Animation-end names containing this close the overlay.
const HIDE_ANIMATION: &str = "hide";

#[derive(Debug, Clone)]
pub struct IntroState {
    pub is_intro_hidden: Signal<bool>,
}

impl Default for IntroState {
    fn default() -> Self {
        Self::new()
    }
}

impl IntroState {
    pub fn new() -> Self {
        Self {
            is_intro_hidden: Signal::new(false),
        }
    }

    /// Start hiding: the overlay switches from the paused to the running
    /// (hide) animation.
    pub fn on_hide_intro(&self) {
        self.is_intro_hidden.set(true);
    }

    /// Handle an animation finishing. Returns `true` when the overlay is done
    /// and should be closed.
    pub fn on_close_intro(&self, animation_name: &str) -> bool {
        let closed = animation_name.contains(HIDE_ANIMATION);
        if closed {
            log::debug!("intro closed by animation {animation_name:?}");
        }
        closed
    }
}
