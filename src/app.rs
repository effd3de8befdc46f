//! The roll pipeline: validate, resolve, invoke once, report

use std::ffi::OsString;
use std::io::Write;

use tracing::{debug, info_span};

use crate::cli::parse_args;
use crate::error::RollResult;
use crate::report::{check_sum, RollOutcome};
use crate::request::RollRequest;
use crate::resolver::{Resolver, RollFunction};

/// Run one invocation from a raw argument list (program name first).
///
/// Validation runs before the resolver is touched. On success the result line is written
/// to `out`; on failure nothing is written and the error says which stage failed. A result
/// line that cannot be written is itself a failure.
pub fn run<I, T, R, W>(args: I, resolver: &R, out: &mut W) -> RollResult<RollOutcome>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    R: Resolver + ?Sized,
    W: Write,
{
    let request = parse_args(args)?;
    let outcome = roll_request(request, resolver)?;

    writeln!(out, "{outcome}")?;
    out.flush()?;
    Ok(outcome)
}

/// Resolve the roll function and call it once for an already validated request.
///
/// Whatever the resolver acquired is released before this returns.
pub fn roll_request<R>(request: RollRequest, resolver: &R) -> RollResult<RollOutcome>
where
    R: Resolver + ?Sized,
{
    let span = info_span!("roll", %request);
    let _enter = span.enter();

    let function = resolver.resolve()?;
    let raw = function.roll(request.count(), request.sides());
    debug!(raw, "roll() returned");
    drop(function);

    check_sum(request, raw)
}
