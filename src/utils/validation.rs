use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// Number of digits every puzzle is played with
pub const DIGIT_COUNT: usize = 4;

/// # Errors
///
/// Returns an error if any digit lies outside 1..=9.
pub fn validate_digits(digits: &[u32; DIGIT_COUNT]) -> Result<(), UtilsError> {
    debug!("Validating digits: {:?}", digits);

    if let Some(&digit) = digits.iter().find(|d| !(1..=9).contains(*d)) {
        warn!("Digit out of range: {}", digit);
        return Err(UtilsError::DigitOutOfRange(digit));
    }

    Ok(())
}

/// Parse a string such as `"1234"` into four validated digits.
///
/// # Errors
///
/// Returns an error if the string does not hold exactly four characters, or if
/// any character is not one of `1`-`9`.
pub fn parse_digit_string(digit_string: &str) -> Result<[u32; DIGIT_COUNT], UtilsError> {
    debug!("Parsing digit string: '{}'", digit_string);

    let chars: Vec<char> = digit_string.chars().collect();
    if chars.len() != DIGIT_COUNT {
        warn!(
            "Digit string '{}' has {} characters",
            digit_string,
            chars.len()
        );
        return Err(UtilsError::InvalidDigitCount {
            expected: DIGIT_COUNT,
            actual: chars.len(),
        });
    }

    let mut digits = [0; DIGIT_COUNT];
    for (slot, c) in digits.iter_mut().zip(&chars) {
        match c.to_digit(10) {
            Some(d) if d != 0 => *slot = d,
            _ => {
                warn!(
                    "Digit string contains an invalid character: '{}'",
                    digit_string
                );
                return Err(UtilsError::InvalidDigitString(digit_string.to_string()));
            }
        }
    }

    debug!("Digit string parsed to {:?}", digits);
    Ok(digits)
}
