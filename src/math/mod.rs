pub mod math_helpers;
pub mod tick_math;
