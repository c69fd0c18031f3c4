use thiserror::Error;

use super::CliFlags;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown argument: {0}")]
    UnknownArg(String),
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();

    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "--skip-intro" => flags.skip_intro = true,
            "--clear-session" => flags.clear_session = true,
            other => return Err(ParseError::UnknownArg(other.to_string())),
        }
    }

    Ok(flags)
}
