// src/codec/integer_token.rs

//! Strict integer tokens for the matrix text format.
//!
//! Only plain ASCII digits are accepted, with a single leading `-` where a sign is
//! allowed. Anything that `str::parse` would otherwise forgive (a `+` sign) or
//! that a lenient reader might truncate (`3.5`) is rejected.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("empty integer")]
    Empty,

    #[error("'{0}' is not an integer")]
    NotAnInteger(String),

    #[error("'{0}' contains whitespace")]
    EmbeddedWhitespace(String),

    #[error("unexpected character '{ch}' in '{token}'")]
    InvalidCharacter { ch: char, token: String },

    #[error("'{0}' is out of range")]
    OutOfRange(String),
}

/// Parses a non-negative integer such as a row, column or dimension
pub fn parse_unsigned(token: &str) -> Result<usize, TokenError> {
    check_digits(token, false)?;
    token
        .parse::<usize>()
        .map_err(|_| TokenError::OutOfRange(token.to_string()))
}

/// Parses an integer with an optional leading `-`
pub fn parse_signed(token: &str) -> Result<i64, TokenError> {
    check_digits(token, true)?;
    token
        .parse::<i64>()
        .map_err(|_| TokenError::OutOfRange(token.to_string()))
}

fn check_digits(token: &str, allow_minus: bool) -> Result<(), TokenError> {
    if token.is_empty() {
        return Err(TokenError::Empty);
    }
    if token.contains('.') {
        return Err(TokenError::NotAnInteger(token.to_string()));
    }
    if token.chars().any(char::is_whitespace) {
        return Err(TokenError::EmbeddedWhitespace(token.to_string()));
    }

    let digits = match token.strip_prefix('-') {
        Some(rest) if allow_minus => rest,
        _ => token,
    };
    if digits.is_empty() {
        return Err(TokenError::Empty);
    }
    if let Some(ch) = digits.chars().find(|c| !c.is_ascii_digit()) {
        return Err(TokenError::InvalidCharacter {
            ch,
            token: token.to_string(),
        });
    }
    Ok(())
}
