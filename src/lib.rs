//! Deterministic decimal strings for concentrated‑liquidity pool values.
//!
//! This crate exposes:
//! - A fixed‑layout formatter (`format::format`) that writes an unsigned
//!   magnitude into a buffer described by a [`FormatSpec`].
//! - Derivations that build those layouts for Q64.96 sqrt prices, ticks and
//!   fee tiers, rounding prices to five significant figures.
//! - The math they need (`math::*`): 512‑bit `mul_div` and tick → sqrt price.
//!
//! Output is byte-for-byte what an on-chain NFT position descriptor renders.
//!
//! # Examples
//!
//! ## Prices and fees
//! ```
//! use clmm_price_format::{fee_to_percent_string, tick_to_decimal_string, U24};
//!
//! assert_eq!(fee_to_percent_string(U24::from(3000u32)).unwrap(), "0.3%");
//! assert_eq!(tick_to_decimal_string(1000, 60, 18, 18, false).unwrap(), "1.1052");
//! assert_eq!(tick_to_decimal_string(-887220, 60, 18, 18, false).unwrap(), "MIN");
//! ```
//!
//! ## A hand-built layout
//! ```
//! use clmm_price_format::{format, FormatSpec, U256};
//!
//! // "12.345" : six slots, point at index 2, digits written from index 5 down
//! let spec = FormatSpec::new(6, 5, 5).with_decimal_point(2);
//! assert_eq!(format(spec, U256::from(12345u32)).unwrap(), "12.345");
//! ```

pub use alloy_primitives::aliases::U24;
pub use alloy_primitives::{U160, U256};

pub mod error;
pub mod format;
pub mod math;

pub use error::{Error, FormatError, MathError, StateError};
pub use format::{
    FormatSpec, count_digits, fee_to_percent_string, format, price_to_decimal_string,
    sigfigs_rounded, tick_to_decimal_string,
};

const U256_TEN: U256 = U256::from_limbs([10, 0, 0, 0]);

const U160_MAX: U256 = U256::from_limbs([u64::MAX, u64::MAX, 4294967295, 0]);

pub const Q96: U256 = U256::from_limbs([0, 4294967296, 0, 0]);
pub const Q128: U256 = U256::from_limbs([0, 0, 1, 0]);
pub const Q192: U256 = U256::from_limbs([0, 0, 0, 1]);
