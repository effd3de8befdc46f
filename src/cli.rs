//! Command-line surface: `roll-dice COUNT SIDES`

use std::ffi::OsString;

use clap::Parser;

use crate::error::{RollResult, UsageError};
use crate::request::RollRequest;

/// Argument shape: two positional tokens, anything after them ignored.
///
/// There are no flags. `-h`, `--help`, `-V` and `--version` are ordinary tokens and go
/// through the same numeric conversion as any other value.
#[derive(Debug, Parser)]
#[command(name = "roll-dice")]
#[command(about = "Roll COUNT dice of SIDES sides and print the sum")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Number of dice, between 1 and 255
    #[arg(allow_hyphen_values = true)]
    pub count: String,

    /// Faces per die, between 2 and 255
    #[arg(allow_hyphen_values = true)]
    pub sides: String,

    /// Anything after SIDES is ignored
    #[arg(hide = true, num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub rest: Vec<String>,
}

/// Parse a full argument list, program name first, into a validated request.
///
/// clap checks the arity and renders the usage error. The values themselves are taken from
/// the raw tokens in positions 1 and 2, so a `--` that clap would consume as an option
/// terminator is converted like any other token (to `0`) and rejected.
pub fn parse_args<I, T>(args: I) -> RollResult<RollRequest>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    Cli::try_parse_from(&args).map_err(UsageError::from)?;

    // clap only succeeds with at least two positionals after the program name
    let count = args.get(1).map(|token| token.to_string_lossy()).unwrap_or_default();
    let sides = args.get(2).map(|token| token.to_string_lossy()).unwrap_or_default();

    Ok(RollRequest::parse(&count, &sides)?)
}
