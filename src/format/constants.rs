use alloy_primitives::U256;

/// Significant figures shown for a price.
pub const SIGFIGS: usize = 5;

/// `SIGFIGS` plus the extra digit kept for rounding, as a power of ten.
pub const SIGFIGS_ROUNDING_SCALE: U256 = U256::from_limbs([100_000, 0, 0, 0]);

/// Scale for prices below one: 43 digits reach five sigfigs of the
/// smallest representable price, plus one for rounding.
pub const BELOW_ONE_SCALE: U256 =
    U256::from_limbs([80237960548581376, 10841254275107988496, 293873, 0]);

/// Decimal places covered by `BELOW_ONE_SCALE`, not counting the rounding digit.
pub const BELOW_ONE_PRECISION: usize = 43;

/// `sqrt(10)` in Q128.128, used for odd token decimal differences.
pub const SQRT_10_X128: U256 =
    U256::from_limbs([10689170989477526858, 2993494466006504000, 3, 0]);

/// Larger token decimal differences are rendered unadjusted.
pub const MAX_DECIMAL_ADJUSTMENT: u8 = 18;

/// Price digit count from which no decimal point is shown (price >= 10^4).
pub const INTEGER_ONLY_DIGITS: usize = 9;

/// Fee digit count from which the fee is at least 1% (fee units are 1e-6).
pub const FEE_WHOLE_PERCENT_DIGITS: usize = 5;
