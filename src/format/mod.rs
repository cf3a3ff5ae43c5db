pub mod constants;
pub mod fee;
pub mod generate;
pub mod price;
pub mod sigfigs;
pub mod spec;

pub use fee::fee_to_percent_string;
pub use generate::format;
pub use price::{adjust_for_decimal_precision, price_to_decimal_string, tick_to_decimal_string};
pub use sigfigs::{count_digits, sigfigs_rounded};
pub use spec::FormatSpec;
