//! Dice roller exported over the C ABI
//!
//! Built both as an `rlib` (for link-time binding) and as a `cdylib` so that
//! `roll-cli` can load `libroll` at runtime and look `roll` up by name.

use rand::{thread_rng, Rng};

/// Minimum number of dice in a roll
pub const MIN_COUNT: u8 = 1;

/// Minimum number of faces on a die
pub const MIN_SIDES: u8 = 2;

/// Roll `count` dice with `sides` faces each and return the total.
///
/// Returns `0` on failure: a zero `count`, fewer than two `sides`, or a sum that
/// does not fit in `u16`. A successful roll is never zero since every face is at least 1.
#[no_mangle]
pub extern "C" fn roll(count: u8, sides: u8) -> u16 {
    roll_with(&mut thread_rng(), count, sides)
}

/// Same as [`roll`], drawing from the given random source.
pub fn roll_with<R: Rng>(rng: &mut R, count: u8, sides: u8) -> u16 {
    if count < MIN_COUNT || sides < MIN_SIDES {
        return 0;
    }

    (0..count)
        .try_fold(0u16, |sum, _| {
            let face = rng.gen_range(1..=sides);
            sum.checked_add(u16::from(face))
        })
        .unwrap_or(0)
}
