//! Character pool building for password generation.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

const LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";
const NUMBERS: &str = "1234567890";
const SYMBOLS: &str = "!@#$%^&*()[]";

/// A named subset of characters the user can toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterClass {
    Letters,
    Numbers,
    Symbols,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 3] = [
        CharacterClass::Letters,
        CharacterClass::Numbers,
        CharacterClass::Symbols,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CharacterClass::Letters => "Letters",
            CharacterClass::Numbers => "Numbers",
            CharacterClass::Symbols => "Symbols",
        }
    }

    /// Key that toggles this class in the TUI.
    pub fn hotkey(self) -> char {
        match self {
            CharacterClass::Letters => 'l',
            CharacterClass::Numbers => 'n',
            CharacterClass::Symbols => 's',
        }
    }
}

/// Which character classes are enabled. Every combination is valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckboxState {
    pub include_letters: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl CheckboxState {
    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Letters => self.include_letters,
            CharacterClass::Numbers => self.include_numbers,
            CharacterClass::Symbols => self.include_symbols,
        }
    }

    /// Copy of this selection with `class` flipped.
    pub fn toggled(mut self, class: CharacterClass) -> Self {
        let flag = match class {
            CharacterClass::Letters => &mut self.include_letters,
            CharacterClass::Numbers => &mut self.include_numbers,
            CharacterClass::Symbols => &mut self.include_symbols,
        };
        *flag = !*flag;
        self
    }

    pub fn any(&self) -> bool {
        self.include_letters || self.include_numbers || self.include_symbols
    }
}

/// Build the character pool for the enabled classes.
///
/// Letters contribute both cases, numbers and symbols are each added twice.
/// Order is letters, numbers, symbols.
pub fn build_pool(selection: &CheckboxState) -> String {
    let mut pool = String::new();

    if selection.include_letters {
        pool.push_str(LETTERS);
        pool.push_str(&LETTERS.to_uppercase());
    }

    if selection.include_numbers {
        pool.push_str(NUMBERS);
        pool.push_str(NUMBERS);
    }

    if selection.include_symbols {
        pool.push_str(SYMBOLS);
        pool.push_str(SYMBOLS);
    }

    pool
}

/// Number of distinct characters in the pool (for entropy calculation).
pub fn pool_size(selection: &CheckboxState) -> usize {
    build_pool(selection).chars().collect::<BTreeSet<_>>().len()
}
