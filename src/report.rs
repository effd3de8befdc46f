//! Interpreting the raw sum returned by `roll()`

use std::fmt;
use std::num::NonZeroU16;

use crate::error::{RollError, RollResult};
use crate::request::RollRequest;

/// A successful roll: the request and its non-zero sum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollOutcome {
    pub request: RollRequest,
    pub sum: NonZeroU16,
}

impl fmt::Display for RollOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => {}", self.request, self.sum)
    }
}

/// Map the sentinel `0` to [`RollError::Computation`]
pub fn check_sum(request: RollRequest, raw: u16) -> RollResult<RollOutcome> {
    NonZeroU16::new(raw)
        .map(|sum| RollOutcome { request, sum })
        .ok_or(RollError::Computation {
            count: request.count(),
            sides: request.sides(),
        })
}
