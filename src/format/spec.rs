use std::ops::Range;

use crate::error::FormatError;

/// Layout of a fixed-length decimal string.
///
/// Built once by a derivation (or by hand) and consumed by
/// [`format`](super::format). Digits are written right to left starting at
/// `sigfig_write_index`; markers and padding are placed before that.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormatSpec {
    significant_digits: u8,
    buffer_length: usize,
    sigfig_write_index: usize,
    decimal_point_index: Option<usize>,
    leading_zeros: Range<usize>,
    fractional_only: bool,
    percent: bool,
}

impl FormatSpec {
    /// Creates a layout of `buffer_length` slots whose least significant
    /// digit lands on `sigfig_write_index`, with room for at most
    /// `significant_digits` digits.
    #[inline]
    pub const fn new(
        buffer_length: usize,
        sigfig_write_index: usize,
        significant_digits: u8,
    ) -> Self {
        Self {
            significant_digits,
            buffer_length,
            sigfig_write_index,
            decimal_point_index: None,
            leading_zeros: 0..0,
            fractional_only: false,
            percent: false,
        }
    }

    /// Places a `.` at `index`; the digit cursor skips over it.
    #[inline]
    pub const fn with_decimal_point(mut self, index: usize) -> Self {
        self.decimal_point_index = Some(index);
        self
    }

    /// Fills the half-open range with `0`. Significant digits landing in the
    /// range overwrite the padding.
    #[inline]
    pub const fn with_zero_padding(mut self, zeros: Range<usize>) -> Self {
        self.leading_zeros = zeros;
        self
    }

    /// Prefixes the buffer with `0.`.
    #[inline]
    pub const fn fractional_only(mut self) -> Self {
        self.fractional_only = true;
        self
    }

    /// Ends the buffer with `%`.
    #[inline]
    pub const fn percent(mut self) -> Self {
        self.percent = true;
        self
    }

    pub fn significant_digits(&self) -> u8 {
        self.significant_digits
    }

    pub fn buffer_length(&self) -> usize {
        self.buffer_length
    }

    pub fn sigfig_write_index(&self) -> usize {
        self.sigfig_write_index
    }

    pub fn decimal_point_index(&self) -> Option<usize> {
        self.decimal_point_index
    }

    pub fn leading_zeros(&self) -> Range<usize> {
        self.leading_zeros.clone()
    }

    pub fn is_fractional_only(&self) -> bool {
        self.fractional_only
    }

    pub fn is_percent(&self) -> bool {
        self.percent
    }

    /// Checks every cursor against the buffer bounds.
    pub fn validate(&self) -> Result<(), FormatError> {
        let buffer_length = self.buffer_length;
        let invalid = |index: usize| FormatError::InvalidLayout {
            index,
            buffer_length,
        };

        if self.sigfig_write_index >= buffer_length {
            return Err(invalid(self.sigfig_write_index));
        }
        if self.leading_zeros.start > self.leading_zeros.end {
            return Err(invalid(self.leading_zeros.start));
        }
        if self.leading_zeros.end > buffer_length {
            return Err(invalid(self.leading_zeros.end));
        }
        if self.fractional_only && buffer_length < 2 {
            return Err(invalid(1));
        }
        if self.percent && buffer_length == 0 {
            return Err(invalid(0));
        }
        if let Some(point) = self.decimal_point_index {
            if point == 0 || point >= buffer_length || self.leading_zeros.contains(&point) {
                return Err(invalid(point));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_every_field() {
        let spec = FormatSpec::new(8, 6, 5)
            .with_decimal_point(3)
            .with_zero_padding(0..1)
            .fractional_only()
            .percent();

        assert_eq!(spec.buffer_length(), 8);
        assert_eq!(spec.sigfig_write_index(), 6);
        assert_eq!(spec.significant_digits(), 5);
        assert_eq!(spec.decimal_point_index(), Some(3));
        assert_eq!(spec.leading_zeros(), 0..1);
        assert!(spec.is_fractional_only());
        assert!(spec.is_percent());
    }

    #[test]
    fn cursor_past_end_is_rejected() {
        let err = FormatSpec::new(6, 6, 5).validate().unwrap_err();
        assert_eq!(
            err,
            FormatError::InvalidLayout {
                index: 6,
                buffer_length: 6
            }
        );
    }

    #[test]
    fn padding_past_end_is_rejected() {
        let spec = FormatSpec::new(6, 5, 5).with_zero_padding(2..7);
        assert!(matches!(
            spec.validate(),
            Err(FormatError::InvalidLayout { index: 7, .. })
        ));
    }

    #[test]
    #[allow(clippy::reversed_empty_ranges)]
    fn inverted_padding_is_rejected() {
        let spec = FormatSpec::new(6, 5, 5).with_zero_padding(4..2);
        assert!(matches!(
            spec.validate(),
            Err(FormatError::InvalidLayout { index: 4, .. })
        ));
    }

    #[test]
    fn decimal_point_inside_padding_is_rejected() {
        let spec = FormatSpec::new(9, 8, 5)
            .with_zero_padding(2..4)
            .with_decimal_point(3);
        assert!(matches!(
            spec.validate(),
            Err(FormatError::InvalidLayout { index: 3, .. })
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn layout_survives_json() {
        let spec = FormatSpec::new(10, 9, 5)
            .fractional_only()
            .with_zero_padding(2..5);
        let json = serde_json::to_string(&spec).unwrap();
        let back: FormatSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, spec);
    }

    #[test]
    fn empty_padding_range_is_accepted() {
        let spec = FormatSpec::new(2, 0, 1).with_zero_padding(1..1).percent();
        assert_eq!(spec.validate(), Ok(()));
    }
}
