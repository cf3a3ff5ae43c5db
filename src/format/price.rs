use alloy_primitives::{U160, U256};
use tracing::debug;

use crate::error::{Error, FormatError, MathError, StateError};
use crate::format::constants::{
    BELOW_ONE_PRECISION, BELOW_ONE_SCALE, INTEGER_ONLY_DIGITS, MAX_DECIMAL_ADJUSTMENT, SIGFIGS,
    SIGFIGS_ROUNDING_SCALE, SQRT_10_X128,
};
use crate::format::generate::format;
use crate::format::sigfigs::{count_digits, sigfigs_rounded};
use crate::format::spec::FormatSpec;
use crate::math::math_helpers::mul_div;
use crate::math::tick_math::{get_sqrt_ratio_at_tick, max_usable_tick, min_usable_tick};
use crate::{Q96, Q128, Q192, U160_MAX, U256_TEN};

/// Renders the price at `tick` to five significant figures, or `MIN` /
/// `MAX` when the tick is the lowest / highest usable one for
/// `tick_spacing`.
///
/// With `flip_ratio` the price is inverted (token0 per token1) and the
/// sentinels swap accordingly.
pub fn tick_to_decimal_string(
    tick: i32,
    tick_spacing: i32,
    base_token_decimals: u8,
    quote_token_decimals: u8,
    flip_ratio: bool,
) -> Result<String, Error> {
    if tick_spacing <= 0 {
        return Err(StateError::InvalidTickSpacing(tick_spacing).into());
    }

    if tick == min_usable_tick(tick_spacing) {
        debug!(tick, tick_spacing, flip_ratio, "tick at lower bound");
        return Ok(if flip_ratio { "MAX" } else { "MIN" }.to_string());
    }
    if tick == max_usable_tick(tick_spacing) {
        debug!(tick, tick_spacing, flip_ratio, "tick at upper bound");
        return Ok(if flip_ratio { "MIN" } else { "MAX" }.to_string());
    }

    let mut sqrt_ratio_x96 = get_sqrt_ratio_at_tick(tick)?;
    if flip_ratio {
        sqrt_ratio_x96 = Q192 / sqrt_ratio_x96;
        if sqrt_ratio_x96 > U160_MAX {
            return Err(MathError::Overflow.into());
        }
    }

    decimal_string_from_sqrt_ratio(sqrt_ratio_x96, base_token_decimals, quote_token_decimals)
}

/// Renders a Q64.96 sqrt price as a decimal string with five significant
/// figures, after scaling it by the difference in token decimals.
///
/// - price < 1: `0.` followed by leading zeros and five figures
///   (`0.000045423`)
/// - price >= 10^4: integer digits only, padded with zeros (`5171800000`)
/// - otherwise: five figures around a decimal point (`1.1052`, `220.15`)
pub fn price_to_decimal_string(
    sqrt_ratio_x96: U160,
    base_token_decimals: u8,
    quote_token_decimals: u8,
) -> Result<String, Error> {
    decimal_string_from_sqrt_ratio(
        U256::from(sqrt_ratio_x96),
        base_token_decimals,
        quote_token_decimals,
    )
}

fn decimal_string_from_sqrt_ratio(
    sqrt_ratio_x96: U256,
    base_token_decimals: u8,
    quote_token_decimals: u8,
) -> Result<String, Error> {
    let adjusted =
        adjust_for_decimal_precision(sqrt_ratio_x96, base_token_decimals, quote_token_decimals)?;
    let price_below_one = adjusted < Q96;

    // price in Q128
    let value = mul_div(adjusted, adjusted, U256::ONE << 64)?;
    let value = if price_below_one {
        mul_div(value, BELOW_ONE_SCALE, Q128)?
    } else {
        mul_div(value, SIGFIGS_ROUNDING_SCALE, Q128)?
    };

    // The last digit is only there for rounding.
    let digits = count_digits(value).saturating_sub(1);
    if digits < SIGFIGS {
        return Err(FormatError::InsufficientPrecision { digits }.into());
    }

    let (sigfigs, extra_digit) = sigfigs_rounded(value, digits);
    let digits = if extra_digit { digits + 1 } else { digits };

    let spec = price_layout(digits, price_below_one);
    debug!(
        %sqrt_ratio_x96,
        digits,
        extra_digit,
        price_below_one,
        buffer_length = spec.buffer_length(),
        "derived price layout"
    );

    format(spec, sigfigs)
}

fn price_layout(digits: usize, price_below_one: bool) -> FormatSpec {
    if price_below_one && digits <= BELOW_ONE_PRECISION {
        // "0." + leading zeros + five figures
        let buffer_length = 2 + SIGFIGS + BELOW_ONE_PRECISION - digits;
        FormatSpec::new(buffer_length, buffer_length - 1, SIGFIGS as u8)
            .fractional_only()
            .with_zero_padding(2..BELOW_ONE_PRECISION + 2 - digits)
    } else if price_below_one {
        // Rounded up to exactly one.
        FormatSpec::new(SIGFIGS + 1, SIGFIGS, SIGFIGS as u8).with_decimal_point(1)
    } else if digits >= INTEGER_ONLY_DIGITS {
        let buffer_length = digits - (SIGFIGS - 1);
        FormatSpec::new(buffer_length, SIGFIGS - 1, SIGFIGS as u8)
            .with_zero_padding(SIGFIGS..buffer_length)
    } else {
        FormatSpec::new(SIGFIGS + 1, SIGFIGS, SIGFIGS as u8)
            .with_decimal_point(digits - (SIGFIGS - 1))
    }
}

/// Scales a sqrt price by `sqrt(10^(base - quote))` so the squared price
/// is expressed in whole tokens. Differences of zero or more than 18
/// decimals leave the price untouched.
pub fn adjust_for_decimal_precision(
    sqrt_ratio_x96: U256,
    base_token_decimals: u8,
    quote_token_decimals: u8,
) -> Result<U256, MathError> {
    let difference = base_token_decimals.abs_diff(quote_token_decimals);
    if difference == 0 || difference > MAX_DECIMAL_ADJUSTMENT {
        return Ok(sqrt_ratio_x96);
    }

    let half_scale = U256_TEN.pow(U256::from(difference / 2));
    let odd = difference % 2 == 1;

    if base_token_decimals > quote_token_decimals {
        let adjusted = sqrt_ratio_x96
            .checked_mul(half_scale)
            .ok_or(MathError::Overflow)?;
        if odd {
            mul_div(adjusted, SQRT_10_X128, Q128)
        } else {
            Ok(adjusted)
        }
    } else {
        let adjusted = sqrt_ratio_x96 / half_scale;
        if odd {
            mul_div(adjusted, Q128, SQRT_10_X128)
        } else {
            Ok(adjusted)
        }
    }
}
