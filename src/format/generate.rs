use alloy_primitives::U256;
use tracing::trace;

use crate::U256_TEN;
use crate::error::{Error, FormatError};
use crate::format::sigfigs::count_digits;
use crate::format::spec::FormatSpec;

const UNWRITTEN: u8 = 0;

/// Renders `magnitude` into the layout described by `spec`.
///
/// The buffer is exactly `spec.buffer_length()` bytes. Markers (`%`, `0.`)
/// and zero padding go in first, then the digits of `magnitude` are written
/// from `sigfig_write_index` towards index 0, hopping over the decimal
/// point. Any cursor leaving the buffer, a digit run longer than
/// `significant_digits`, or a slot left unwritten is a
/// [`FormatError::InvalidLayout`].
pub fn format(spec: FormatSpec, magnitude: U256) -> Result<String, Error> {
    spec.validate()?;

    let buffer_length = spec.buffer_length();
    let invalid = |index: usize| FormatError::InvalidLayout {
        index,
        buffer_length,
    };

    if count_digits(magnitude) > usize::from(spec.significant_digits()) {
        return Err(invalid(spec.sigfig_write_index()).into());
    }

    trace!(
        buffer_length,
        sigfig_write_index = spec.sigfig_write_index(),
        decimal_point_index = ?spec.decimal_point_index(),
        leading_zeros = ?spec.leading_zeros(),
        %magnitude,
        "formatting decimal string"
    );

    let mut buffer = vec![UNWRITTEN; buffer_length];
    if spec.is_percent() {
        buffer[buffer_length - 1] = b'%';
    }
    if spec.is_fractional_only() {
        buffer[0] = b'0';
        buffer[1] = b'.';
    }
    buffer[spec.leading_zeros()].fill(b'0');

    let decimal_point = spec.decimal_point_index();
    let mut cursor = spec.sigfig_write_index();
    let mut remaining = magnitude;
    while !remaining.is_zero() {
        if decimal_point == Some(cursor) {
            buffer[cursor] = b'.';
            cursor = cursor.checked_sub(1).ok_or_else(|| invalid(cursor))?;
        }

        let digit = (remaining % U256_TEN).as_limbs()[0] as u8;
        buffer[cursor] = b'0' + digit;
        remaining /= U256_TEN;

        if !remaining.is_zero() {
            cursor = cursor.checked_sub(1).ok_or_else(|| invalid(cursor))?;
        }
    }

    if let Some(index) = buffer.iter().position(|&byte| byte == UNWRITTEN) {
        return Err(invalid(index).into());
    }

    // Only ASCII digits and markers were written.
    String::from_utf8(buffer).map_err(|_| invalid(0).into())
}
