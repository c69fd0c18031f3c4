//! Application state: length input, character classes, generated password,
//! copy indicator and the intro flag.

use std::rc::Rc;
use std::time::{Duration, Instant};

use rand::Rng;
use zeroize::Zeroize;

use super::Signal;
use crate::clipboard::Clipboard;
use crate::pass::{self, CharacterClass, CheckboxState, LengthAction, length};
use crate::session::{self, CHECKBOX_STATE_KEY, INTRO_HIDDEN_KEY, SessionStore};

/// How long the "copied" indicator stays up after a successful copy.
pub const COPY_INDICATOR_DELAY: Duration = Duration::from_millis(1000);

pub const COPY_LABEL: &str = "copy";
pub const COPIED_LABEL: &str = "copied";

pub struct AppState {
    pub input_value: Signal<String>,
    pub password_length: Signal<usize>,
    pub password: Signal<String>,
    pub password_is_copied: Signal<bool>,
    pub password_is_copied_text: Signal<&'static str>,
    pub checkbox_state: Signal<CheckboxState>,
    pub intro_hidden: Signal<bool>,
    copied_until: Option<Instant>,
    store: Rc<dyn SessionStore>,
}

impl AppState {
    /// Build state backed by `store`, restoring the persisted selection and
    /// intro flag. Malformed stored values are returned as errors.
    pub fn load(store: Rc<dyn SessionStore>) -> session::Result<Self> {
        let checkbox_state = match store.get(CHECKBOX_STATE_KEY)? {
            Some(json) => serde_json::from_str(&json)?,
            None => CheckboxState::default(),
        };
        let intro_hidden = match store.get(INTRO_HIDDEN_KEY)? {
            Some(flag) => serde_json::from_str(&flag)?,
            None => false,
        };
        log::debug!("loaded session state: {checkbox_state:?}, intro hidden: {intro_hidden}");

        let state = Self {
            input_value: Signal::new(String::new()),
            password_length: Signal::new(0),
            password: Signal::new(String::new()),
            password_is_copied: Signal::new(false),
            password_is_copied_text: Signal::new(COPY_LABEL),
            checkbox_state: Signal::new(checkbox_state),
            intro_hidden: Signal::new(intro_hidden),
            copied_until: None,
            store,
        };
        state.persist_on_change();
        Ok(state)
    }

    /// Fresh state from the same store, as if the app had been restarted.
    pub fn reload(&self) -> session::Result<Self> {
        Self::load(Rc::clone(&self.store))
    }

    fn persist_on_change(&self) {
        let store = Rc::clone(&self.store);
        self.checkbox_state.subscribe(move |selection| {
            match serde_json::to_string(selection) {
                Ok(json) => save(store.as_ref(), CHECKBOX_STATE_KEY, &json),
                Err(e) => log::warn!("failed to encode checkbox state: {e}"),
            }
        });

        let store = Rc::clone(&self.store);
        self.intro_hidden.subscribe(move |hidden| {
            save(store.as_ref(), INTRO_HIDDEN_KEY, if *hidden { "true" } else { "false" });
        });
    }

    /// Length typed into the input field.
    pub fn on_enter_password_length(&self, input: &str) {
        self.input_value.set(input.to_string());
        self.password_length.set(length::parse_length(input));
    }

    /// Reset the input field and drop the current password.
    pub fn on_clear_password_length(&self) {
        self.input_value.set(String::new());
        self.password_length.set(0);
        self.replace_password(String::new());
    }

    /// Length changed through the +/- or preset buttons.
    pub fn on_change_password_length(&self, action: LengthAction) {
        let len = length::apply(action, self.password_length.get());
        self.password_length.set(len);
        self.input_value.set(len.to_string());
    }

    pub fn on_change_checkbox_state(&self, class: CharacterClass) {
        self.checkbox_state.update(|s| *s = s.toggled(class));
    }

    /// Whether the generate action (and its Enter shortcut) is enabled.
    pub fn can_generate(&self) -> bool {
        self.password_length.get() > 0 && self.checkbox_state.with(CheckboxState::any)
    }

    pub fn on_generate_password<R: Rng>(&self, rng: &mut R) {
        let selection = self.checkbox_state.get();
        let generated = pass::generate_from_selection(&selection, self.password_length.get(), rng);
        log::debug!("generated password of {} chars", generated.len());
        self.replace_password(generated);
    }

    /// Copy the current password. On success the indicator is raised until
    /// `now + COPY_INDICATOR_DELAY`; a repeated copy restarts the delay.
    /// Failures are logged and leave the indicator alone.
    pub fn on_copy_to_clipboard(&mut self, clipboard: &mut dyn Clipboard, now: Instant) -> bool {
        match self.password.with(|p| clipboard.write_text(p)) {
            Ok(()) => {
                self.password_is_copied.set(true);
                self.password_is_copied_text.set(COPIED_LABEL);
                self.copied_until = Some(now + COPY_INDICATOR_DELAY);
                true
            }
            Err(e) => {
                log::error!("Failed to copy text: {e}");
                false
            }
        }
    }

    /// Advance timers. Returns `true` if the copy indicator was cleared.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.copied_until {
            Some(deadline) if now >= deadline => {
                self.copied_until = None;
                self.password_is_copied.set(false);
                self.password_is_copied_text.set(COPY_LABEL);
                true
            }
            _ => false,
        }
    }

    /// Time left until the next timer fires, if one is pending.
    pub fn next_deadline(&self, now: Instant) -> Option<Duration> {
        self.copied_until.map(|d| d.saturating_duration_since(now))
    }

    pub fn on_intro_closed(&self) {
        self.intro_hidden.set(true);
    }

    fn replace_password(&self, new: String) {
        self.password.update(|p| {
            p.zeroize();
            *p = new;
        });
    }
}

impl Drop for AppState {
    fn drop(&mut self) {
        self.password.update(|p| p.zeroize());
    }
}

fn save(store: &dyn SessionStore, key: &str, value: &str) {
    if let Err(e) = store.set(key, value) {
        log::warn!("failed to persist {key}: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::fake::FakeClipboard;
    use crate::logging::capture;
    use crate::session::{MemoryStore, SessionError};
    use log::Level;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn fresh() -> (Rc<MemoryStore>, AppState) {
        let store = Rc::new(MemoryStore::new());
        let state = AppState::load(store.clone()).unwrap();
        (store, state)
    }

    #[test]
    fn default_state() {
        let (_, state) = fresh();
        assert_eq!(state.input_value.get(), "");
        assert_eq!(state.password.get(), "");
        assert_eq!(state.password_length.get(), 0);
        assert!(!state.password_is_copied.get());
        assert_eq!(state.password_is_copied_text.get(), COPY_LABEL);
        assert_eq!(state.checkbox_state.get(), CheckboxState::default());
        assert!(!state.intro_hidden.get());
    }

    #[test]
    fn loads_persisted_selection() {
        let store = Rc::new(MemoryStore::new());
        store
            .set(
                CHECKBOX_STATE_KEY,
                r#"{"includeLetters":true,"includeNumbers":true,"includeSymbols":true}"#,
            )
            .unwrap();
        store.set(INTRO_HIDDEN_KEY, "true").unwrap();

        let state = AppState::load(store).unwrap();
        let selection = state.checkbox_state.get();
        assert!(selection.include_letters && selection.include_numbers && selection.include_symbols);
        assert!(state.intro_hidden.get());
    }

    #[test]
    fn malformed_selection_is_an_error() {
        let store = Rc::new(MemoryStore::new());
        store.set(CHECKBOX_STATE_KEY, "invalid_json").unwrap();
        assert!(matches!(AppState::load(store), Err(SessionError::Json(_))));
    }

    #[test]
    fn malformed_intro_flag_is_an_error() {
        let store = Rc::new(MemoryStore::new());
        store.set(INTRO_HIDDEN_KEY, "yes").unwrap();
        assert!(matches!(AppState::load(store), Err(SessionError::Json(_))));
    }

    #[test]
    fn entering_length_validates() {
        let (_, state) = fresh();
        state.on_enter_password_length("10");
        assert_eq!(state.password_length.get(), 10);
        assert_eq!(state.input_value.get(), "10");

        for bad in ["101", "-1", "010", "abc"] {
            state.on_enter_password_length(bad);
            assert_eq!(state.password_length.get(), 0, "input {bad:?}");
            assert_eq!(state.input_value.get(), bad);
        }
    }

    #[test]
    fn clearing_resets_input_and_password() {
        let (_, state) = fresh();
        state.input_value.set("4".into());
        state.password_length.set(4);
        state.password.set("test".into());

        state.on_clear_password_length();
        assert_eq!(state.input_value.get(), "");
        assert_eq!(state.password_length.get(), 0);
        assert_eq!(state.password.get(), "");
    }

    #[test]
    fn length_buttons_update_input_field() {
        let (_, state) = fresh();
        state.on_change_password_length(LengthAction::Add);
        assert_eq!(state.password_length.get(), 1);
        assert_eq!(state.input_value.get(), "1");

        state.on_change_password_length(LengthAction::Preset(20));
        assert_eq!(state.input_value.get(), "20");

        state.on_change_password_length(LengthAction::Subtract);
        assert_eq!(state.password_length.get(), 19);

        state.password_length.set(100);
        state.on_change_password_length(LengthAction::Add);
        assert_eq!(state.password_length.get(), 100);
        assert_eq!(state.input_value.get(), "100");
    }

    #[test]
    fn toggling_persists_and_double_toggle_restores() {
        let (store, state) = fresh();
        state.on_change_checkbox_state(CharacterClass::Letters);
        assert!(state.checkbox_state.get().include_letters);
        assert_eq!(
            store.get(CHECKBOX_STATE_KEY).unwrap().as_deref(),
            Some(r#"{"includeLetters":true,"includeNumbers":false,"includeSymbols":false}"#)
        );

        state.on_change_checkbox_state(CharacterClass::Letters);
        assert_eq!(state.checkbox_state.get(), CheckboxState::default());
        assert_eq!(
            store.get(CHECKBOX_STATE_KEY).unwrap().as_deref(),
            Some(r#"{"includeLetters":false,"includeNumbers":false,"includeSymbols":false}"#)
        );
    }

    #[test]
    fn can_generate_needs_length_and_a_class() {
        let (_, state) = fresh();
        assert!(!state.can_generate());
        state.on_enter_password_length("8");
        assert!(!state.can_generate());
        state.on_change_checkbox_state(CharacterClass::Symbols);
        assert!(state.can_generate());
        state.on_enter_password_length("0");
        assert!(!state.can_generate());
    }

    #[test]
    fn generates_password_of_requested_length() {
        let (_, state) = fresh();
        let mut rng = StdRng::seed_from_u64(5);
        state.password_length.set(10);
        state.on_change_checkbox_state(CharacterClass::Letters);
        state.on_change_checkbox_state(CharacterClass::Numbers);

        state.on_generate_password(&mut rng);
        let password = state.password.get();
        assert_eq!(password.len(), 10);
        assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn generates_nothing_without_classes() {
        let (_, state) = fresh();
        let mut rng = StdRng::seed_from_u64(5);
        state.password_length.set(10);
        state.on_generate_password(&mut rng);
        assert_eq!(state.password.get(), "");
    }

    #[test]
    fn copy_raises_indicator_until_delay_passes() {
        let (_, mut state) = fresh();
        let mut clipboard = FakeClipboard::default();
        let start = Instant::now();
        state.password.set("TestPassword123".into());

        assert!(state.on_copy_to_clipboard(&mut clipboard, start));
        assert_eq!(clipboard.contents.as_deref(), Some("TestPassword123"));
        assert!(state.password_is_copied.get());
        assert_eq!(state.password_is_copied_text.get(), COPIED_LABEL);

        assert!(!state.tick(start + Duration::from_millis(999)));
        assert!(state.password_is_copied.get());

        assert!(state.tick(start + COPY_INDICATOR_DELAY));
        assert!(!state.password_is_copied.get());
        assert_eq!(state.password_is_copied_text.get(), COPY_LABEL);
        assert_eq!(state.next_deadline(start), None);
    }

    #[test]
    fn repeated_copy_restarts_the_delay() {
        let (_, mut state) = fresh();
        let mut clipboard = FakeClipboard::default();
        let start = Instant::now();

        state.on_copy_to_clipboard(&mut clipboard, start);
        let later = start + Duration::from_millis(800);
        state.on_copy_to_clipboard(&mut clipboard, later);

        assert!(!state.tick(start + COPY_INDICATOR_DELAY));
        assert!(state.password_is_copied.get());
        assert!(state.tick(later + COPY_INDICATOR_DELAY));
        assert_eq!(clipboard.writes, 2);
    }

    #[test]
    fn failed_copy_leaves_indicator_down() {
        let (_, mut state) = fresh();
        let mut clipboard = FakeClipboard::failing();
        let start = Instant::now();
        state.password.set("TestPassword123".into());

        capture::start();
        assert!(!state.on_copy_to_clipboard(&mut clipboard, start));
        let errors: Vec<_> = capture::records()
            .into_iter()
            .filter(|(level, _)| *level == Level::Error)
            .collect();
        assert_eq!(errors.len(), 1, "{errors:?}");
        assert!(errors[0].1.contains("Failed to copy text"));

        assert_eq!(clipboard.writes, 1);
        assert!(!state.password_is_copied.get());
        assert_eq!(state.password_is_copied_text.get(), COPY_LABEL);
        assert_eq!(state.next_deadline(start), None);
    }

    #[test]
    fn intro_flag_persists_and_survives_reload() {
        let (store, state) = fresh();
        state.on_intro_closed();
        assert_eq!(store.get(INTRO_HIDDEN_KEY).unwrap().as_deref(), Some("true"));

        state.on_change_checkbox_state(CharacterClass::Numbers);
        state.on_enter_password_length("12");

        let reloaded = state.reload().unwrap();
        assert!(reloaded.intro_hidden.get());
        assert!(reloaded.checkbox_state.get().include_numbers);
        assert_eq!(reloaded.password_length.get(), 0);
    }
}
