//! Command-line flags and user-facing messages.

mod flags;
mod parse;
pub mod prompts;

pub use flags::CliFlags;
pub use parse::parse;
