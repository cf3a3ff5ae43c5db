use alloy_primitives::U256;
use alloy_primitives::aliases::U24;
use tracing::debug;

use crate::error::Error;
use crate::format::constants::FEE_WHOLE_PERCENT_DIGITS;
use crate::format::generate::format;
use crate::format::spec::FormatSpec;

/// Renders a pool fee, in hundredths of a basis point, as a percentage
/// with no trailing zeros: `3000 -> "0.3%"`, `500 -> "0.05%"`,
/// `10000 -> "1%"`.
pub fn fee_to_percent_string(fee: U24) -> Result<String, Error> {
    let fee = fee.to::<u32>();
    if fee == 0 {
        return Ok("0%".to_string());
    }

    let (digits, num_sigfigs) = fee_digits(fee);
    let spec = fee_layout(digits, num_sigfigs);
    debug!(
        fee,
        digits,
        num_sigfigs,
        buffer_length = spec.buffer_length(),
        "derived fee layout"
    );

    let sigfigs = fee / 10u32.pow((digits - num_sigfigs) as u32);
    format(spec, U256::from(sigfigs))
}

/// Total digit count, and the digits from the most significant one down
/// to the last non-zero one.
fn fee_digits(fee: u32) -> (usize, usize) {
    let mut temp = fee;
    let mut digits = 0;
    let mut num_sigfigs = 0;
    while temp != 0 {
        if num_sigfigs > 0 || temp % 10 != 0 {
            num_sigfigs += 1;
        }
        digits += 1;
        temp /= 10;
    }
    (digits, num_sigfigs)
}

fn fee_layout(digits: usize, num_sigfigs: usize) -> FormatSpec {
    // The units digit of the percentage is the fifth digit of the fee.
    let spec = if digits >= FEE_WHOLE_PERCENT_DIGITS {
        let decimal_place = usize::from(digits - num_sigfigs < FEE_WHOLE_PERCENT_DIGITS - 1);
        let whole_digits = digits - FEE_WHOLE_PERCENT_DIGITS;
        let n_zeros = whole_digits.saturating_sub(num_sigfigs - 1);

        FormatSpec::new(
            n_zeros + num_sigfigs + 1 + decimal_place,
            num_sigfigs - 1 + decimal_place,
            num_sigfigs as u8,
        )
        .with_zero_padding(num_sigfigs..num_sigfigs + n_zeros)
    } else {
        let n_zeros = FEE_WHOLE_PERCENT_DIGITS - digits;
        let buffer_length = n_zeros + num_sigfigs + 2;

        FormatSpec::new(buffer_length, buffer_length - 2, num_sigfigs as u8)
            .fractional_only()
            .with_zero_padding(2..2 + n_zeros)
    };

    let spec = spec.percent();
    if digits > FEE_WHOLE_PERCENT_DIGITS - 1 {
        spec.with_decimal_point(digits - (FEE_WHOLE_PERCENT_DIGITS - 1))
    } else {
        spec
    }
}
