use std::env;
use std::io;
use std::process::ExitCode;

use clap::CommandFactory;
use tracing::{debug, warn};

use roll_cli::{logging, run, Cli, LinkStrategy, RollError, UsageError, EXIT_SUCCESS};

#[cfg(feature = "linked")]
fn resolver() -> roll_cli::LinkedResolver {
    roll_cli::LinkedResolver
}

#[cfg(not(feature = "linked"))]
fn resolver() -> roll_cli::DynamicResolver {
    roll_cli::DynamicResolver::new(roll_cli::ResolverConfig::default())
}

fn main() -> ExitCode {
    // Initialize logging
    if let Err(err) = logging::init_from_env() {
        eprintln!("warning: {err:#}");
    }

    debug!(strategy = ?LinkStrategy::configured(), "binding roll()");
    let resolver = resolver();
    let mut out = io::stdout().lock();

    match run(env::args_os(), &resolver, &mut out) {
        Ok(_) => ExitCode::from(EXIT_SUCCESS),
        Err(err) => {
            report(&err);
            ExitCode::from(err.exit_code())
        }
    }
}

fn report(err: &RollError) {
    match err {
        // clap renders its own usage text
        RollError::Usage(UsageError::Arguments(clap_err)) => {
            if let Err(io_err) = clap_err.print() {
                warn!(error = %io_err, "failed to print usage");
            }
        }
        RollError::Usage(usage) => {
            eprintln!("Error: {usage}\n\n{}", Cli::command().render_usage());
        }
        runtime => eprintln!("Error: {runtime}"),
    }
}
