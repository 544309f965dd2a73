//! Error type for the word codec.

use thiserror::Error;

/// Errors returned by encoding, decoding and wordlist lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordsError {
    #[error("unknown language code: {0}")]
    UnknownLanguage(String),

    #[error("word not found in wordlist: {0}")]
    UnknownWord(String),

    #[error("checksum failed; word list not valid or not created by this app")]
    ChecksumMismatch,

    #[error("cannot encode an empty byte sequence")]
    EmptyInput,
}
