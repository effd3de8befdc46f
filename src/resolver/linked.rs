//! Link-time binding to the `roll` crate

use tracing::debug;

use super::{Resolver, RollFunction};
use crate::error::RollResult;

/// Resolver for the statically linked `roll()`; always succeeds
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkedResolver;

/// The linked `roll()` itself
#[derive(Debug, Clone, Copy)]
pub struct LinkedRoll;

impl Resolver for LinkedResolver {
    type Function = LinkedRoll;

    fn resolve(&self) -> RollResult<LinkedRoll> {
        debug!("using link-time roll()");
        Ok(LinkedRoll)
    }
}

impl RollFunction for LinkedRoll {
    fn roll(&self, count: u8, sides: u8) -> u16 {
        roll::roll(count, sides)
    }
}
