//! Centralized warning and error messages for CLI output.

use crate::terminal::{Frame, RED, RESET};

const YELLOW: &str = "\x1b[33m";

/// Print a warning message to stderr (yellow).
pub fn warn(msg: &str) {
    eprintln!("{YELLOW}{msg}{RESET}");
}

/// Print an error message to stderr (red).
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Session data could not be read; tell the user how to recover.
pub fn session_error(err: &dyn std::error::Error) {
    error(&format!("Failed to load session state: {err}"));
    warn("Run `genpass --clear-session` to start over.");
}

/// Persistent storage is unusable; state will not outlive this run.
pub fn session_unavailable(err: &dyn std::error::Error) {
    warn(&format!("Session storage unavailable ({err}), state will not be kept."));
}

pub fn print_help() {
    let mut frame = Frame::new();
    frame
        .top("genpass")
        .line_center("Password generator")
        .line("")
        .line("USAGE:")
        .line("  genpass [OPTIONS]")
        .line("")
        .line("OPTIONS:")
        .opt("  --skip-intro", "Do not show the intro animation this run")
        .opt(
            "  --clear-session",
            "Forget the stored character classes and intro flag",
        )
        .opt("  -h, --help", "Show this help")
        .opt("  -v, --version", "Show version")
        .line("")
        .line("KEYS:")
        .opt("  0-9, Backspace", "Edit the password length (1-100)")
        .opt("  Delete, Ctrl+U", "Clear length and password")
        .opt("  + / Up, - / Down", "Adjust length by one")
        .opt("  F1-F5", "Length presets 5, 10, 15, 20, 25")
        .opt("  l / n / s", "Toggle letters, numbers, symbols")
        .opt("  Enter", "Generate password")
        .opt("  c", "Copy password to clipboard")
        .opt("  r", "Reset the generator")
        .opt("  q, Esc, Ctrl+C", "Quit")
        .line("")
        .line("ENVIRONMENT:")
        .opt("  GENPASS_LOG", "Log filter (default: warn)")
        .opt("  GENPASS_SESSION_DIR", "Where session state and the log are kept")
        .bottom();
    frame.print();
}
