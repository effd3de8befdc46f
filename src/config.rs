//! Build-time configuration for resolving `roll()`
//!
//! Nothing here is read at runtime: the library location and symbol name come from
//! `ROLL_DYLIB_PATH` / `ROLL_SYMBOL` in the build environment, and the link strategy from
//! the `linked` cargo feature.

use std::path::PathBuf;

use crate::error::{RollError, RollResult};

/// Library path baked in by `ROLL_DYLIB_PATH`, if it was set when building
pub const BUILD_LIBRARY_PATH: Option<&str> = option_env!("ROLL_DYLIB_PATH");

/// Entry point name baked in by `ROLL_SYMBOL`, if it was set when building
pub const BUILD_SYMBOL: Option<&str> = option_env!("ROLL_SYMBOL");

/// Symbol looked up when `ROLL_SYMBOL` was not set
pub const DEFAULT_SYMBOL: &str = "roll";

/// Library base name; the platform prefix and suffix are added around it
pub const DEFAULT_LIBRARY_NAME: &str = "roll";

/// How `roll()` is bound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStrategy {
    /// By the linker, through the `roll` crate
    Linked,
    /// By name, from a library opened at runtime
    Dynamic,
}

impl LinkStrategy {
    /// The strategy this binary was built with
    pub const fn configured() -> Self {
        if cfg!(feature = "linked") {
            LinkStrategy::Linked
        } else {
            LinkStrategy::Dynamic
        }
    }
}

/// Where to find the roll library and which symbol to bind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Absolute path, path relative to the working directory, or a bare file name
    /// searched on the platform library path
    pub library_path: PathBuf,
    /// Exported name of the roll function
    pub symbol: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        let library_path = match BUILD_LIBRARY_PATH {
            Some(path) => PathBuf::from(path),
            None => PathBuf::from(libloading::library_filename(DEFAULT_LIBRARY_NAME)),
        };

        Self {
            library_path,
            symbol: BUILD_SYMBOL.unwrap_or(DEFAULT_SYMBOL).to_string(),
        }
    }
}

impl ResolverConfig {
    /// Validate configuration values
    pub fn validate(&self) -> RollResult<()> {
        if self.library_path.as_os_str().is_empty() {
            return Err(RollError::Configuration {
                message: "Library path must not be empty".to_string(),
                field: "library_path".to_string(),
            });
        }

        if self.symbol.is_empty() {
            return Err(RollError::Configuration {
                message: "Symbol name must not be empty".to_string(),
                field: "symbol".to_string(),
            });
        }

        if self.symbol.contains('\0') {
            return Err(RollError::Configuration {
                message: "Symbol name must not contain NUL".to_string(),
                field: "symbol".to_string(),
            });
        }

        Ok(())
    }
}
