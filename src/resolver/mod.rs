//! Obtaining a callable `roll(count, sides) -> sum`
//!
//! Two strategies implement [`Resolver`]:
//! - [`LinkedResolver`] (feature `linked`): the function is bound by the linker, resolution
//!   cannot fail and acquires nothing
//! - [`DynamicResolver`]: the function is looked up by name in a library image opened at
//!   runtime; the image stays open exactly as long as the returned [`DynamicRoll`]
//!
//! The strategy is picked once, at build time, by the binary.

pub mod dynamic;
#[cfg(feature = "linked")]
pub mod linked;

pub use dynamic::{
    DynamicResolver, DynamicRoll, ImageLoader, LibraryImage, LoadedLibrary, SystemLoader,
};
#[cfg(feature = "linked")]
pub use linked::{LinkedResolver, LinkedRoll};

use crate::error::RollResult;

/// C ABI signature of the external `roll` entry point
pub type RollFn = unsafe extern "C" fn(count: u8, sides: u8) -> u16;

/// A callable accepting `(count, sides)` and returning the raw sum, `0` meaning failure
pub trait RollFunction {
    fn roll(&self, count: u8, sides: u8) -> u16;
}

/// Strategy for obtaining a [`RollFunction`]
pub trait Resolver {
    type Function: RollFunction;

    /// Bind the roll function. Any resource acquired here is owned by the returned function.
    fn resolve(&self) -> RollResult<Self::Function>;
}
