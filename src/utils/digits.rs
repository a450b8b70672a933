use log::debug;

use crate::utils::errors::UtilsError;

/// Convert a numeric token built from concatenated digits into its value.
///
/// # Errors
///
/// Returns an error if the token is empty, contains anything other than ASCII
/// digits, or carries a leading zero.
pub fn token_to_number(token: &str) -> Result<f64, UtilsError> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(UtilsError::InvalidToken(token.to_string()));
    }

    if token.len() > 1 && token.starts_with('0') {
        debug!("Rejecting token with leading zero: '{}'", token);
        return Err(UtilsError::InvalidToken(token.to_string()));
    }

    token
        .parse::<f64>()
        .map_err(|_| UtilsError::InvalidToken(token.to_string()))
}

/// Stringify digits into single-character tokens.
pub fn digits_to_tokens(digits: &[u32]) -> Vec<String> {
    digits.iter().map(ToString::to_string).collect()
}
