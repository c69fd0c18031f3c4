//! Password generation: character pools, shuffling, sampling, length input.

pub mod charset;
mod generate;
pub mod length;

pub use charset::{CharacterClass, CheckboxState};
pub use generate::{generate_from_selection, shuffle};
pub use length::{LENGTH_PRESETS, LengthAction};
