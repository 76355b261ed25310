//! Short code generation and validation utilities.
//!
//! Every code in the system, generated or user-provided, matches
//! `^[A-Za-z0-9]{6,8}$`.

use crate::error::AppError;
use rand::Rng;
use rand::distr::Alphanumeric;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// Length of randomly generated codes.
pub const GENERATED_CODE_LENGTH: usize = 6;

pub const MIN_CODE_LENGTH: usize = 6;
pub const MAX_CODE_LENGTH: usize = 8;

/// Compiled pattern every short code must match.
pub static CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{6,8}$").expect("static code pattern is valid"));

/// Generates a random short code of [`GENERATED_CODE_LENGTH`] characters.
///
/// Characters are drawn uniformly from the 62-character alphanumeric alphabet.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(is_valid_code(&code));
/// ```
pub fn generate_code() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(GENERATED_CODE_LENGTH)
        .map(char::from)
        .collect()
}

/// Returns true if `code` is a well-formed short code.
pub fn is_valid_code(code: &str) -> bool {
    CODE_REGEX.is_match(code)
}

/// Validates a short code, either user-provided or taken from a request path.
///
/// The code is not normalized: `AbC123` and `abc123` are different codes.
///
/// # Errors
///
/// Returns [`AppError::InvalidCode`] if the code does not match the pattern.
pub fn validate_code(code: &str) -> Result<(), AppError> {
    if is_valid_code(code) {
        return Ok(());
    }

    Err(AppError::invalid_code(
        "code must match [A-Za-z0-9]{6,8}",
        json!({
            "code": code,
            "min_length": MIN_CODE_LENGTH,
            "max_length": MAX_CODE_LENGTH,
        }),
    ))
}
