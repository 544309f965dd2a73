//! Parsing of byte strings typed on the command line.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("no bytes given")]
    Empty,

    #[error("invalid hex input: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// Parse hex such as `0fda68`, `0x0FDA68`, `0f:da:68` or `0f da 68`.
pub fn parse_hex_bytes(input: &str) -> Result<Vec<u8>, InputError> {
    let trimmed = input.trim();
    let body = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let digits: String = body
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':')
        .collect();
    if digits.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(hex::decode(digits)?)
}
