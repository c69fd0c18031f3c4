//! Interactive terminal UI.

mod intro;
mod keys;
mod view;

use std::cell::Cell;
use std::io;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use thiserror::Error;

use crate::clipboard::SystemClipboard;
use crate::session::{SessionError, SessionStore};
use crate::state::{AppState, Signal};
use crate::terminal::ScreenGuard;

use keys::Action;

/// Longest wait for input when no timer is pending.
const IDLE_POLL: Duration = Duration::from_millis(250);
/// The length field holds at most this many digits.
const MAX_INPUT_DIGITS: usize = 3;

#[derive(Debug, Error)]
pub enum TuiError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
}

/// Run TUI interactive mode until the user quits.
pub fn run(store: Rc<dyn SessionStore>, skip_intro: bool) -> Result<(), TuiError> {
    let mut app = AppState::load(store)?;
    let mut clipboard = SystemClipboard::new();
    let mut rng = rand::rng();

    let mut guard = ScreenGuard::new()?;
    let mut out = io::stdout();

    if !app.intro_hidden.get() && !skip_intro {
        if !intro::play(&mut out, &mut rng)? {
            guard.restore();
            return Ok(());
        }
        app.on_intro_closed();
    }

    let dirty = Rc::new(Cell::new(true));
    let mut hooks = RedrawHooks::attach(&app, &dirty);

    loop {
        if dirty.replace(false) {
            view::render(&app).present(&mut out)?;
        }

        let now = Instant::now();
        let timeout = app.next_deadline(now).map_or(IDLE_POLL, |d| d.min(IDLE_POLL));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let Some(action) = keys::action(key) else {
                        continue;
                    };
                    log::debug!("key action {action:?}");

                    match action {
                        Action::Digit(c) => {
                            let mut input = app.input_value.get();
                            if input.len() < MAX_INPUT_DIGITS {
                                input.push(c);
                                app.on_enter_password_length(&input);
                            }
                        }
                        Action::Backspace => {
                            let mut input = app.input_value.get();
                            input.pop();
                            app.on_enter_password_length(&input);
                        }
                        Action::ClearLength => app.on_clear_password_length(),
                        Action::Length(change) => app.on_change_password_length(change),
                        Action::Toggle(class) => app.on_change_checkbox_state(class),
                        Action::Generate => {
                            if app.can_generate() {
                                app.on_generate_password(&mut rng);
                            }
                        }
                        Action::Copy => {
                            app.on_copy_to_clipboard(&mut clipboard, Instant::now());
                        }
                        Action::Reset => {
                            let fresh = app.reload()?;
                            hooks.detach();
                            app = fresh;
                            hooks = RedrawHooks::attach(&app, &dirty);
                            dirty.set(true);
                        }
                        Action::Quit => break,
                    }
                }
                Event::Resize(..) => dirty.set(true),
                _ => {}
            }
        }

        app.tick(Instant::now());
    }

    guard.restore();
    Ok(())
}

/// Redraw subscriptions on the signals of one `AppState`.
struct RedrawHooks {
    detach: Vec<Box<dyn FnOnce()>>,
}

impl RedrawHooks {
    fn attach(app: &AppState, dirty: &Rc<Cell<bool>>) -> Self {
        let mut hooks = Self { detach: Vec::new() };
        hooks.mark(&app.input_value, dirty);
        hooks.mark(&app.password_length, dirty);
        hooks.mark(&app.password, dirty);
        hooks.mark(&app.password_is_copied, dirty);
        hooks.mark(&app.password_is_copied_text, dirty);
        hooks.mark(&app.checkbox_state, dirty);
        hooks.mark(&app.intro_hidden, dirty);
        hooks
    }

    fn mark<T: 'static>(&mut self, signal: &Signal<T>, dirty: &Rc<Cell<bool>>) {
        let dirty = Rc::clone(dirty);
        let id = signal.subscribe(move |_| dirty.set(true));
        let signal = signal.clone();
        self.detach.push(Box::new(move || signal.unsubscribe(id)));
    }

    fn detach(self) {
        for unsubscribe in self.detach {
            unsubscribe();
        }
    }
}
