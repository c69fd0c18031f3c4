//! Main screen rendering.

use crate::pass::{CharacterClass, LENGTH_PRESETS, charset};
use crate::state::AppState;
use crate::terminal::{
    BOLD, BOX_WIDTH, Frame, GREEN, GREY, RESET, REVERSE, calculate_entropy, entropy_strength,
};

const PASSWORD_WIDTH: usize = BOX_WIDTH - 4;

pub fn render(app: &AppState) -> Frame {
    let mut frame = Frame::new();
    let selection = app.checkbox_state.get();
    let length = app.password_length.get();

    frame.top("Password Generator");

    let input = app.input_value.get();
    let shown = if input.is_empty() { "   ".to_string() } else { format!("{input:>3}") };
    let presets = LENGTH_PRESETS
        .iter()
        .enumerate()
        .map(|(i, n)| format!("F{}:{n}", i + 1))
        .collect::<Vec<_>>()
        .join(" ");
    frame.line(&format!("Length {REVERSE}{shown}{RESET}  [-] [+]  {GREY}{presets}{RESET}"));
    frame.line("");

    for class in CharacterClass::ALL {
        let mark = if selection.is_enabled(class) { "x" } else { " " };
        frame.line(&format!(
            "[{mark}] {:<10}{GREY}({}){RESET}",
            class.label(),
            class.hotkey()
        ));
    }

    frame.rule();

    app.password.with(|password| {
        if password.is_empty() {
            frame.line(&format!("{GREY}no password yet{RESET}"));
        } else {
            let chars: Vec<char> = password.chars().collect();
            for chunk in chars.chunks(PASSWORD_WIDTH) {
                let line: String = chunk.iter().collect();
                frame.line(&format!("{BOLD}{line}{RESET}"));
            }
        }
    });

    let bits = calculate_entropy(length, charset::pool_size(&selection));
    frame.line(&format!(
        "{GREY}Entropy: {bits:.1} bits ({}){RESET}",
        entropy_strength(bits)
    ));

    frame.rule();

    let generate = if app.can_generate() {
        "[Enter] generate".to_string()
    } else {
        format!("{GREY}[Enter] generate{RESET}")
    };
    let copy = if app.password_is_copied.get() {
        format!("{GREEN}[c] {}{RESET}", app.password_is_copied_text.get())
    } else {
        format!("[c] {}", app.password_is_copied_text.get())
    };
    frame.line(&format!("{generate}  {copy}  [r] reset  [q] quit"));
    frame.bottom();

    frame
}
