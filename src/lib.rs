//! roll-cli - roll COUNT dice of SIDES sides through an external `roll()` function
//!
//! The front end validates its two arguments, then obtains
//! `roll(count: u8, sides: u8) -> u16` either from the linker (feature `linked`) or by
//! opening a shared library at runtime and looking the symbol up by name. A returned `0`
//! means the roll failed.
//!
//! Failures are kept apart by stage:
//! - bad input: exit code 1, the library is never opened
//! - library open, symbol lookup or a `0` result: exit code 2, each with its own message

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod report;
pub mod request;
pub mod resolver;

// Re-export commonly used types for convenience
pub use error::{RollError, RollResult, UsageError, EXIT_RUNTIME, EXIT_SUCCESS, EXIT_USAGE};

pub use app::{roll_request, run};
pub use cli::{parse_args, Cli};
pub use config::{LinkStrategy, ResolverConfig};
pub use report::{check_sum, RollOutcome};
pub use request::RollRequest;

// Re-export resolver interfaces
pub use resolver::{
    DynamicResolver, DynamicRoll, ImageLoader, LibraryImage, LoadedLibrary, Resolver, RollFn,
    RollFunction, SystemLoader,
};
#[cfg(feature = "linked")]
pub use resolver::{LinkedResolver, LinkedRoll};
