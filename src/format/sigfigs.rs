use alloy_primitives::U256;

use crate::U256_TEN;
use crate::format::constants::{SIGFIGS, SIGFIGS_ROUNDING_SCALE};

/// Number of decimal digits in `value`; zero has none.
pub fn count_digits(value: U256) -> usize {
    let mut temp = value;
    let mut digits = 0;
    while !temp.is_zero() {
        digits += 1;
        temp /= U256_TEN;
    }
    digits
}

/// Rounds `value` half up to five significant figures.
///
/// `digits` is the digit count of `value` minus the one digit kept for
/// rounding. Returns the five-figure run and whether rounding carried into
/// a sixth figure (`99995 -> 100000`), in which case the run is collapsed
/// back to `10000` and the caller must widen its layout by one position.
pub fn sigfigs_rounded(value: U256, digits: usize) -> (U256, bool) {
    let mut value = value;
    if digits > SIGFIGS {
        value /= U256_TEN.pow(U256::from(digits - SIGFIGS));
    }

    let round_up = value % U256_TEN > U256::from(4u8);
    value /= U256_TEN;
    if round_up {
        value += U256::ONE;
    }

    if value == SIGFIGS_ROUNDING_SCALE {
        (value / U256_TEN, true)
    } else {
        (value, false)
    }
}
