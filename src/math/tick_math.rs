use crate::error::StateError;
use alloy_primitives::U256;

pub const MIN_TICK: i32 = -887272;
pub const MAX_TICK: i32 = -MIN_TICK;

pub const MIN_SQRT_RATIO: U256 = U256::from_limbs([4295128739, 0, 0, 0]);
pub const MAX_SQRT_RATIO: U256 =
    U256::from_limbs([6743328256752651558, 17280870778742802505, 4294805859, 0]);

/// Q128 ratio for the lowest tick bit, `sqrt(1.0001)^-1`.
const RATIO_BIT_0: U256 = U256::from_limbs([12262481743371124737, 18445821805675392311, 0, 0]);

/// Q128 multipliers `sqrt(1.0001)^-(2^i)` for tick bits 1 through 19.
const RATIO_BITS: [(u32, [u64; 2]); 19] = [
    (0x2, [6459403834229662010, 18444899583751176498]),
    (0x4, [17226890335427755468, 18443055278223354162]),
    (0x8, [2032852871939366096, 18439367220385604838]),
    (0x10, [14545316742740207172, 18431993317065449817]),
    (0x20, [5129152022828963008, 18417254355718160513]),
    (0x40, [4894419605888772193, 18387811781193591352]),
    (0x80, [1280255884321894483, 18329067761203520168]),
    (0x100, [15924666964335305636, 18212142134806087854]),
    (0x200, [8010504389359918676, 17980523815641551639]),
    (0x400, [10668036004952895731, 17526086738831147013]),
    (0x800, [4878133418470705625, 16651378430235024244]),
    (0x1000, [9537173718739605541, 15030750278693429944]),
    (0x2000, [9972618978014552549, 12247334978882834399]),
    (0x4000, [10428997489610666743, 8131365268884726200]),
    (0x8000, [9305304367709015974, 3584323654723342297]),
    (0x10000, [14301143598189091785, 696457651847595233]),
    (0x20000, [7393154844743099908, 26294789957452057]),
    (0x40000, [2209338891292245656, 37481735321082]),
    (0x80000, [10518117631919034274, 76158723]),
];

/// Returns the sqrt price (Q64.96 fixed‑point) at a given tick, or
/// `StateError::TickOutOfBounds` outside `[MIN_TICK, MAX_TICK]`.
///
/// Bit-for-bit equal to Solidity's `TickMath.getSqrtRatioAtTick`, so the
/// strings rendered from it match what a descriptor contract would show.
pub fn get_sqrt_ratio_at_tick(tick: i32) -> Result<U256, StateError> {
    let abs_tick = tick.unsigned_abs();
    if abs_tick > MAX_TICK as u32 {
        return Err(StateError::TickOutOfBounds);
    }

    let mut ratio = if abs_tick & 1 != 0 {
        RATIO_BIT_0
    } else {
        U256::from_limbs([0, 0, 1, 0])
    };

    for (bit, [lo, hi]) in RATIO_BITS {
        if abs_tick & bit != 0 {
            ratio = ratio.wrapping_mul(U256::from_limbs([lo, hi, 0, 0])) >> 128;
        }
    }

    if tick > 0 {
        ratio = U256::MAX / ratio;
    }

    // Q128.128 -> Q64.96, rounding up so the result never undershoots.
    let round_up = ratio.as_limbs()[0] & 0xFFFF_FFFF != 0;
    Ok((ratio >> 32) + U256::from(round_up as u8))
}

/// Lowest tick a position can use at `tick_spacing`. Solidity division
/// truncates toward zero, and so does Rust's.
#[inline]
pub fn min_usable_tick(tick_spacing: i32) -> i32 {
    (MIN_TICK / tick_spacing) * tick_spacing
}

/// Highest tick a position can use at `tick_spacing`.
#[inline]
pub fn max_usable_tick(tick_spacing: i32) -> i32 {
    (MAX_TICK / tick_spacing) * tick_spacing
}
