use crate::error::MathError;
use alloy_primitives::{U256, U512};

#[cold]
#[inline(never)]
fn cold_path() {}

/// Branch hint for the rare error paths below.
#[inline(always)]
fn unlikely(b: bool) -> bool {
    if b {
        cold_path();
    }
    b
}

/// Computes `floor(a * b / denominator)` keeping the full 512‑bit product,
/// returning a `MathError` on division by zero or when the quotient does
/// not fit back into 256 bits.
///
/// Same contract as Solidity's `FullMath.mulDiv`; the price formatter
/// uses it to square Q64.96 sqrt prices and rescale them by powers of ten.
pub fn mul_div(a: U256, b: U256, denominator: U256) -> Result<U256, MathError> {
    if unlikely(denominator.is_zero()) {
        return Err(MathError::DivisionByZero);
    }

    let product: U512 = a.widening_mul(b);
    let quotient = product / U512::from(denominator);

    let limbs = quotient.as_limbs();
    if unlikely(limbs[4..].iter().any(|&limb| limb != 0)) {
        return Err(MathError::Overflow);
    }

    Ok(U256::from_limbs([limbs[0], limbs[1], limbs[2], limbs[3]]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Q96, Q128};

    #[test]
    fn mul_div_simple_division() {
        let result = mul_div(U256::from(10u8), U256::from(20u8), U256::from(5u8)).unwrap();
        assert_eq!(result, U256::from(40u8));
    }

    #[test]
    fn mul_div_division_by_zero() {
        let result = mul_div(U256::from(10u8), U256::from(20u8), U256::ZERO);
        assert!(matches!(result, Err(MathError::DivisionByZero)));
    }

    #[test]
    fn mul_div_rounds_down() {
        // 7 * 10 / 8 = 8.75
        let result = mul_div(U256::from(7u8), U256::from(10u8), U256::from(8u8)).unwrap();
        assert_eq!(result, U256::from(8u8));
    }

    #[test]
    fn mul_div_product_wider_than_256_bits() {
        let result = mul_div(U256::MAX, U256::MAX, U256::MAX).unwrap();
        assert_eq!(result, U256::MAX);
    }

    #[test]
    fn mul_div_result_overflow() {
        let result = mul_div(U256::MAX, U256::from(2u8), U256::ONE);
        assert!(matches!(result, Err(MathError::Overflow)));
    }

    #[test]
    fn mul_div_squares_q96_price_of_one() {
        // (2^96)^2 / 2^64 = 2^128
        let result = mul_div(Q96, Q96, U256::ONE << 64).unwrap();
        assert_eq!(result, Q128);
    }
}
