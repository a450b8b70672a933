//! Utils module split into submodules

mod digits;
mod errors;
mod partitions;
mod validation;

pub use digits::{digits_to_tokens, token_to_number};
pub use errors::UtilsError;
pub use partitions::partition_ranges;
pub use validation::{DIGIT_COUNT, parse_digit_string, validate_digits};
