//! Password length input: validation and the +/-/preset buttons.

/// Upper bound for the length field and the add button.
pub const MAX_LENGTH: usize = 100;

/// Lengths offered as one-key presets.
pub const LENGTH_PRESETS: [usize; 5] = [5, 10, 15, 20, 25];

/// A length button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthAction {
    Add,
    Subtract,
    Preset(usize),
}

/// Parse the length field.
///
/// Accepts digits only, no leading zero, no sign, at most `MAX_LENGTH`.
/// Anything else is 0.
pub fn parse_length(input: &str) -> usize {
    let mut chars = input.chars();
    let valid = matches!(chars.next(), Some('1'..='9')) && chars.all(|c| c.is_ascii_digit());
    if !valid {
        return 0;
    }

    match input.parse::<usize>() {
        Ok(n) if n <= MAX_LENGTH => n,
        _ => 0,
    }
}

/// Apply a button press to the current length.
pub fn apply(action: LengthAction, current: usize) -> usize {
    match action {
        LengthAction::Add if current < MAX_LENGTH => current + 1,
        LengthAction::Subtract if current > 0 => current - 1,
        LengthAction::Preset(n) if LENGTH_PRESETS.contains(&n) => n,
        _ => current,
    }
}
