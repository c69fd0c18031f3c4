use std::env;
use std::process;
use std::rc::Rc;

mod cli;
mod clipboard;
mod exits;
mod logging;
mod pass;
mod session;
mod state;
mod terminal;
mod tui;

use cli::prompts;
use session::{FileStore, MemoryStore, SessionStore};
use tui::TuiError;

fn main() {
    exits::reset_terminal();
    exits::install_handlers();
    exits::harden_process();

    let args: Vec<String> = env::args().collect();
    let flags = match cli::parse(&args) {
        Ok(flags) => flags,
        Err(e) => {
            prompts::error(&e.to_string());
            prompts::warn("Run `genpass --help` for usage.");
            process::exit(2);
        }
    };

    if flags.help {
        prompts::print_help();
        return;
    }
    if flags.version {
        println!("genpass {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    if let Err(e) = logging::init(&session::session_dir()) {
        prompts::warn(&format!("Logging disabled: {e}"));
    }
    log::info!("starting genpass {}", env!("CARGO_PKG_VERSION"));

    let store: Rc<dyn SessionStore> = match FileStore::for_current_session() {
        Ok(store) => {
            log::debug!("session file {}", store.path().display());
            Rc::new(store)
        }
        Err(e) => {
            prompts::session_unavailable(&e);
            Rc::new(MemoryStore::new())
        }
    };

    if flags.clear_session
        && let Err(e) = store.clear()
    {
        prompts::warn(&format!("Failed to clear session: {e}"));
    }

    if let Err(e) = tui::run(store, flags.skip_intro) {
        log::error!("{e}");
        match e {
            TuiError::Session(e) => prompts::session_error(&e),
            TuiError::Io(e) => prompts::error(&format!("Terminal error: {e}")),
        }
        process::exit(1);
    }
}
